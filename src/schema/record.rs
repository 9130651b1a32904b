//! Ordered, typed field-to-value container for one exported row.
//!
//! Values live in a slot vector indexed by the field's position in its
//! enumeration; a separate order vector records which fields were set and
//! in what order. A field takes its position on first `put` and keeps it.

use super::field::Field;
use super::value::{FromValue, Symbolic, Value, ValueKind};

/// One structured row keyed by the fields of schema `F`.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRecord<F: Field> {
    slots: Vec<Option<Value>>,
    order: Vec<F>,
}

impl<F: Field> Default for SchemaRecord<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> SchemaRecord<F> {
    /// Creates an empty record.
    pub fn new() -> Self {
        SchemaRecord {
            slots: vec![None; F::ALL.len()],
            order: Vec::new(),
        }
    }

    /// Inserts or overwrites a field's value. The field keeps the position
    /// of its first insertion.
    pub fn put(&mut self, field: F, value: impl Into<Value>) -> &mut Self {
        let slot = &mut self.slots[field.index()];
        if slot.is_none() {
            self.order.push(field);
        }
        *slot = Some(value.into());
        self
    }

    /// By-value variant of [`put`](Self::put) for builder-style chains.
    pub fn with(mut self, field: F, value: impl Into<Value>) -> Self {
        self.put(field, value);
        self
    }

    /// Puts the value only when present; `None` leaves the field untouched.
    pub fn put_opt<V: Into<Value>>(&mut self, field: F, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.put(field, v);
        }
        self
    }

    /// Returns the raw value of a field, if set.
    pub fn get(&self, field: F) -> Option<&Value> {
        self.slots[field.index()].as_ref()
    }

    /// Returns the value only if it is of the requested kind.
    pub fn get_kind(&self, field: F, kind: ValueKind) -> Option<&Value> {
        self.get(field).filter(|v| v.kind() == kind)
    }

    /// Typed lookup. Absent or kind-mismatched fields yield `None`.
    pub fn get_as<T: FromValue>(&self, field: F) -> Option<T> {
        self.get(field).and_then(T::from_value)
    }

    /// Looks up an enum-valued field and resolves its symbolic name.
    pub fn get_enum<E: Symbolic>(&self, field: F) -> Option<E> {
        match self.get(field) {
            Some(Value::EnumName(name)) => E::from_name(name),
            _ => None,
        }
    }

    /// Looks up an enum-list field, skipping names that do not resolve.
    pub fn get_enum_list<E: Symbolic>(&self, field: F) -> Option<Vec<E>> {
        match self.get(field) {
            Some(Value::EnumNameList(names)) => {
                Some(names.iter().filter_map(|n| E::from_name(n)).collect())
            }
            _ => None,
        }
    }

    /// Returns true if the field has been set.
    pub fn contains(&self, field: F) -> bool {
        self.slots[field.index()].is_some()
    }

    /// Number of fields set.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Copy of every set field with its value, in insertion order.
    pub fn all_fields(&self) -> Vec<(F, Value)> {
        self.iter().map(|(f, v)| (f, v.clone())).collect()
    }

    /// Copy of the insertion order.
    pub fn field_order(&self) -> Vec<F> {
        self.order.clone()
    }

    /// Iterates set fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (F, &Value)> + '_ {
        self.order.iter().filter_map(move |&f| self.get(f).map(|v| (f, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::test_fields::Probe;

    #[test]
    fn first_put_appends_to_order() {
        let mut record = SchemaRecord::<Probe>::new();
        record.put(Probe::Name, "atlas").put(Probe::Id, 7);
        assert_eq!(record.field_order(), vec![Probe::Name, Probe::Id]);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn reput_replaces_value_but_not_position() {
        let mut record = SchemaRecord::<Probe>::new();
        record.put(Probe::Id, 1).put(Probe::Ratio, 0.5).put(Probe::Id, 2);
        assert_eq!(record.field_order(), vec![Probe::Id, Probe::Ratio]);
        assert_eq!(record.get_as::<i64>(Probe::Id), Some(2));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn mismatched_lookup_is_silent() {
        let record = SchemaRecord::<Probe>::new().with(Probe::Id, 3);
        assert_eq!(record.get_as::<f64>(Probe::Id), None);
        assert_eq!(record.get_as::<String>(Probe::Name), None);
        assert!(record.get_kind(Probe::Id, ValueKind::Text).is_none());
        assert!(record.get_kind(Probe::Id, ValueKind::Int).is_some());
    }

    #[test]
    fn put_opt_skips_none() {
        let mut record = SchemaRecord::<Probe>::new();
        record.put_opt(Probe::Name, None::<String>);
        record.put_opt(Probe::Id, Some(4));
        assert!(!record.contains(Probe::Name));
        assert_eq!(record.field_order(), vec![Probe::Id]);
    }

    #[test]
    fn copies_are_defensive() {
        let mut record = SchemaRecord::<Probe>::new().with(Probe::Id, 1);
        let order = record.field_order();
        let fields = record.all_fields();
        record.put(Probe::Flag, true);
        assert_eq!(order, vec![Probe::Id]);
        assert_eq!(fields, vec![(Probe::Id, Value::Int(1))]);
    }
}
