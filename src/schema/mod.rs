//! Typed, ordered records and their tab-separated line codec.
//!
//! Every exported row is a `SchemaRecord` keyed by a closed field
//! enumeration. A `FieldCodec` turns records into marker-prefixed lines and
//! back, formatting each cell by the variant of its `Value`.

pub mod codec;
pub mod error;
pub mod field;
pub mod format;
pub mod record;
pub mod value;

pub use codec::{CellFormatters, FieldCodec, FieldCodecBuilder};
pub use error::SchemaError;
pub use field::{Field, FieldInfo};
pub use record::SchemaRecord;
pub use value::{FromValue, Symbolic, Value, ValueKind};
