//! Battle log export and training-pair assembly.
//!
//! Round snapshots from a running game are flattened into marker-prefixed,
//! tab-separated records (`schema`, `schemas`, `gamelog`). Recorded logs are
//! read back and paired per unit into (state-before, state-after) training
//! examples (`dataset`).

pub mod config;
pub mod dataset;
pub mod gamelog;
pub mod schema;
pub mod schemas;
pub mod snapshot;
