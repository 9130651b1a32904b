//! Field enumerations.
//!
//! Each schema declares a closed field enum together with a static
//! `FieldInfo` table indexed by the enum discriminant, mirroring the way
//! the declaration order doubles as the default column order.

use std::fmt::Debug;
use std::hash::Hash;

use super::value::ValueKind;

/// Static metadata for one field: its column name and value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub kind: ValueKind,
}

impl FieldInfo {
    pub const fn new(name: &'static str, kind: ValueKind) -> Self {
        FieldInfo { name, kind }
    }
}

/// A closed, ordered set of named fields.
///
/// `ALL[i].index() == i` must hold for every field.
pub trait Field: Copy + Eq + Hash + Debug + 'static {
    /// Every field in declaration order.
    const ALL: &'static [Self];

    /// Position of this field in `ALL`.
    fn index(self) -> usize;

    /// Column name written to header lines.
    fn name(self) -> &'static str;

    /// Kind of value this field holds.
    fn kind(self) -> ValueKind;

    /// Cell written when the field is absent from a record.
    fn absent_cell(self) -> &'static str {
        ""
    }

    /// Looks up a field by its column name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}
