//! Generic schema <-> tab-separated line codec.
//!
//! A `FieldCodec` walks a fixed field order and formats each cell with the
//! formatter selected by the value's variant. The formatter set and the
//! per-field absent sentinels belong to the codec instance and are fixed
//! once `build()` returns.

use std::collections::HashSet;

use super::error::SchemaError;
use super::field::Field;
use super::format::{
    format_bool, format_float, join_line, join_list, parse_bool, sanitize_cell, split_line,
    LIST_SEPARATOR,
};
use super::record::SchemaRecord;
use super::value::{Value, ValueKind};

/// One formatting function per value variant. List variants reuse the
/// element formatter of their scalar counterpart.
#[derive(Clone, Copy)]
pub struct CellFormatters {
    pub boolean: fn(bool) -> String,
    pub int: fn(i64) -> String,
    pub float: fn(f64) -> String,
    pub text: fn(&str) -> String,
    pub enum_name: fn(&str) -> String,
}

impl Default for CellFormatters {
    fn default() -> Self {
        CellFormatters {
            boolean: format_bool,
            int: |v: i64| v.to_string(),
            float: format_float,
            text: sanitize_cell,
            enum_name: |s: &str| s.to_string(),
        }
    }
}

impl CellFormatters {
    /// Formats a value into its cell text.
    pub fn format(&self, value: &Value) -> String {
        match value {
            Value::Bool(v) => (self.boolean)(*v),
            Value::Int(v) => (self.int)(*v),
            Value::Float(v) => (self.float)(*v),
            Value::Text(v) => (self.text)(v),
            Value::EnumName(v) => (self.enum_name)(v),
            Value::IntList(items) => join_list(items.iter().map(|v| (self.int)(*v))),
            Value::TextList(items) => {
                // Elements are space-joined, so spaces inside an element
                // would split it on decode.
                join_list(items.iter().map(|v| (self.text)(v).replace(LIST_SEPARATOR, "_")))
            }
            Value::EnumNameList(items) => join_list(items.iter().map(|v| (self.enum_name)(v))),
        }
    }
}

/// Builder for a [`FieldCodec`].
pub struct FieldCodecBuilder<F: Field> {
    marker: String,
    order: Vec<F>,
    formatters: CellFormatters,
    absent: Vec<Option<String>>,
}

impl<F: Field> FieldCodecBuilder<F> {
    /// Replaces the column order.
    pub fn order(mut self, order: Vec<F>) -> Self {
        self.order = order;
        self
    }

    /// Replaces the whole formatter set.
    pub fn formatters(mut self, formatters: CellFormatters) -> Self {
        self.formatters = formatters;
        self
    }

    /// Replaces the float formatter only.
    pub fn float_formatter(mut self, f: fn(f64) -> String) -> Self {
        self.formatters.float = f;
        self
    }

    /// Overrides the cell written when `field` is absent.
    pub fn absent_as(mut self, field: F, cell: &str) -> Self {
        self.absent[field.index()] = Some(cell.to_string());
        self
    }

    pub fn build(self) -> FieldCodec<F> {
        let absent = F::ALL
            .iter()
            .map(|f| {
                self.absent[f.index()]
                    .clone()
                    .unwrap_or_else(|| f.absent_cell().to_string())
            })
            .collect();
        FieldCodec {
            marker: self.marker,
            order: self.order,
            formatters: self.formatters,
            absent,
        }
    }
}

/// Encoder/decoder for one schema's lines.
#[derive(Clone)]
pub struct FieldCodec<F: Field> {
    marker: String,
    order: Vec<F>,
    formatters: CellFormatters,
    /// Absent-cell text per field, indexed by `Field::index`.
    absent: Vec<String>,
}

impl<F: Field> FieldCodec<F> {
    /// Starts a builder with the declaration order and default formatters.
    pub fn builder(marker: &str) -> FieldCodecBuilder<F> {
        FieldCodecBuilder {
            marker: marker.to_string(),
            order: F::ALL.to_vec(),
            formatters: CellFormatters::default(),
            absent: vec![None; F::ALL.len()],
        }
    }

    /// Codec with the declaration order and default formatting.
    pub fn new(marker: &str) -> Self {
        Self::builder(marker).build()
    }

    /// Rebuilds a codec whose column order is taken from a header line.
    pub fn from_header(marker: &str, header: &str) -> Result<Self, SchemaError> {
        let (found, cells) = split_line(header);
        if found != marker {
            return Err(SchemaError::WrongMarker {
                expected: marker.to_string(),
                found: found.to_string(),
            });
        }
        let mut seen = HashSet::new();
        let mut order = Vec::with_capacity(cells.len());
        for name in cells {
            let field =
                F::from_name(name).ok_or_else(|| SchemaError::UnknownField(name.to_string()))?;
            if !seen.insert(field) {
                return Err(SchemaError::DuplicateField(name.to_string()));
            }
            order.push(field);
        }
        Ok(Self::builder(marker).order(order).build())
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn order(&self) -> &[F] {
        &self.order
    }

    /// Returns the cell written for an absent field.
    pub fn absent_cell(&self, field: F) -> &str {
        &self.absent[field.index()]
    }

    /// Marker followed by the field names in configured order.
    pub fn header_line(&self) -> String {
        join_line(&self.marker, self.order.iter().map(|f| f.name()))
    }

    /// Returns true if `line` is this codec's marker followed only by
    /// field names of the schema.
    pub fn is_header_line(&self, line: &str) -> bool {
        let (marker, cells) = split_line(line);
        marker == self.marker
            && !cells.is_empty()
            && cells.iter().all(|c| F::from_name(c).is_some())
    }

    /// Formats a single value with this codec's formatters.
    pub fn format_value(&self, value: &Value) -> String {
        self.formatters.format(value)
    }

    /// Encodes a record as one line.
    pub fn encode(&self, record: &SchemaRecord<F>) -> String {
        join_line(
            &self.marker,
            self.order.iter().map(|&f| match record.get(f) {
                Some(v) => self.formatters.format(v),
                None => self.absent[f.index()].clone(),
            }),
        )
    }

    /// Decodes one line into a record.
    ///
    /// Missing trailing cells leave their fields absent, which is how lines
    /// written by an older, shorter schema version are read.
    pub fn decode(&self, line: &str) -> Result<SchemaRecord<F>, SchemaError> {
        let (marker, cells) = split_line(line);
        if marker != self.marker {
            return Err(SchemaError::WrongMarker {
                expected: self.marker.clone(),
                found: marker.to_string(),
            });
        }
        if cells.len() > self.order.len() {
            return Err(SchemaError::TooManyCells {
                expected: self.order.len(),
                found: cells.len(),
            });
        }

        let mut record = SchemaRecord::new();
        for (&field, &cell) in self.order.iter().zip(cells.iter()) {
            if cell.is_empty() || cell == self.absent[field.index()] {
                continue;
            }
            record.put(field, parse_cell(field, cell)?);
        }
        Ok(record)
    }
}

/// Parses one non-empty cell according to the field's declared kind.
fn parse_cell<F: Field>(field: F, cell: &str) -> Result<Value, SchemaError> {
    let invalid = |kind: &'static str, token: &str| SchemaError::InvalidCell {
        field: field.name(),
        kind,
        token: token.to_string(),
    };

    let value = match field.kind() {
        ValueKind::Bool => Value::Bool(parse_bool(cell).ok_or_else(|| invalid("bool", cell))?),
        ValueKind::Int => Value::Int(cell.parse().map_err(|_| invalid("int", cell))?),
        ValueKind::Float => Value::Float(cell.parse().map_err(|_| invalid("float", cell))?),
        ValueKind::Text => Value::Text(cell.to_string()),
        ValueKind::EnumName => Value::EnumName(cell.to_string()),
        ValueKind::IntList => {
            let mut items = Vec::new();
            for token in cell.split(LIST_SEPARATOR).filter(|t| !t.is_empty()) {
                items.push(token.parse().map_err(|_| invalid("int list", token))?);
            }
            Value::IntList(items)
        }
        ValueKind::TextList => Value::TextList(split_words(cell)),
        ValueKind::EnumNameList => Value::EnumNameList(split_words(cell)),
    };
    Ok(value)
}

fn split_words(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::test_fields::Probe;

    fn sample() -> SchemaRecord<Probe> {
        SchemaRecord::new()
            .with(Probe::Id, 12)
            .with(Probe::Name, "Atlas AS7-D")
            .with(Probe::Ratio, 0.756)
            .with(Probe::Flag, true)
            .with(Probe::Steps, Value::EnumNameList(vec!["FORWARDS".into(), "TURN_LEFT".into()]))
            .with(Probe::Data, vec![5i64, 1, 3, 6, 9])
    }

    #[test]
    fn header_lists_fields_in_declaration_order() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        assert_eq!(
            codec.header_line(),
            "PROBE_V1\tID\tNAME\tRATIO\tFLAG\tROLE\tSTEPS\tDATA"
        );
    }

    #[test]
    fn encode_formats_by_variant() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        assert_eq!(
            codec.encode(&sample()),
            "PROBE_V1\t12\tAtlas AS7-D\t0.76\t1\tNONE\tFORWARDS TURN_LEFT\t5 1 3 6 9"
        );
    }

    #[test]
    fn absent_fields_use_sentinel_or_empty() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        let record = SchemaRecord::new().with(Probe::Id, 1);
        assert_eq!(codec.encode(&record), "PROBE_V1\t1\t\t\t\tNONE\t\t");
    }

    #[test]
    fn builder_overrides_absent_and_order() {
        let codec = FieldCodec::<Probe>::builder("PROBE_V1")
            .order(vec![Probe::Name, Probe::Id])
            .absent_as(Probe::Name, "UNKNOWN")
            .build();
        let record = SchemaRecord::new().with(Probe::Id, 9);
        assert_eq!(codec.header_line(), "PROBE_V1\tNAME\tID");
        assert_eq!(codec.encode(&record), "PROBE_V1\tUNKNOWN\t9");
        // Other codecs are unaffected.
        let plain = FieldCodec::<Probe>::new("PROBE_V1");
        assert_eq!(plain.absent_cell(Probe::Name), "");
    }

    #[test]
    fn float_formatter_is_per_instance() {
        let coarse = FieldCodec::<Probe>::builder("PROBE_V1")
            .float_formatter(|v| format!("{:.0}", v))
            .build();
        let plain = FieldCodec::<Probe>::new("PROBE_V1");
        assert_eq!(coarse.format_value(&Value::Float(2.4)), "2");
        assert_eq!(plain.format_value(&Value::Float(2.4)), "2.40");
    }

    #[test]
    fn decode_roundtrip_within_tolerance() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        let decoded = codec.decode(&codec.encode(&sample())).unwrap();
        assert_eq!(decoded.get_as::<i64>(Probe::Id), Some(12));
        assert_eq!(decoded.get_as::<String>(Probe::Name).as_deref(), Some("Atlas AS7-D"));
        let ratio = decoded.get_as::<f64>(Probe::Ratio).unwrap();
        assert!((ratio - 0.756).abs() <= 0.005);
        assert_eq!(decoded.get_as::<bool>(Probe::Flag), Some(true));
        assert!(!decoded.contains(Probe::Role));
        assert_eq!(decoded.get(Probe::Steps), sample().get(Probe::Steps));
        assert_eq!(decoded.get_as::<Vec<i64>>(Probe::Data), Some(vec![5, 1, 3, 6, 9]));
    }

    #[test]
    fn decode_tolerates_missing_trailing_cells() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        let record = codec.decode("PROBE_V1\t4\tLocust").unwrap();
        assert_eq!(record.get_as::<i64>(Probe::Id), Some(4));
        assert_eq!(record.len(), 2);
        assert!(!record.contains(Probe::Data));
    }

    #[test]
    fn decode_rejects_corrupt_cells() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        let err = codec.decode("PROBE_V1\tfour").unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidCell { field: "ID", kind: "int", token: "four".into() }
        );
        let err = codec.decode("PROBE_V1\t1\tx\t0.5\tyes").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidCell { field: "FLAG", .. }));
        let err = codec.decode("PROBE_V1\t1\tx\t0.5\t1\t\t\t1 2 z").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidCell { field: "DATA", .. }));
    }

    #[test]
    fn decode_rejects_wrong_marker_and_extra_cells() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        assert!(matches!(
            codec.decode("PROBE_V2\t1"),
            Err(SchemaError::WrongMarker { .. })
        ));
        let line = "PROBE_V1\t1\t\t\t\t\t\t\textra";
        assert_eq!(
            codec.decode(line).unwrap_err(),
            SchemaError::TooManyCells { expected: 7, found: 8 }
        );
    }

    #[test]
    fn from_header_reorders_columns() {
        let codec = FieldCodec::<Probe>::from_header("PROBE_V1", "PROBE_V1\tFLAG\tID").unwrap();
        assert_eq!(codec.order(), &[Probe::Flag, Probe::Id]);
        let record = codec.decode("PROBE_V1\t0\t33").unwrap();
        assert_eq!(record.get_as::<bool>(Probe::Flag), Some(false));
        assert_eq!(record.get_as::<i64>(Probe::Id), Some(33));
        assert!(codec.is_header_line("PROBE_V1\tFLAG\tID"));
        assert!(!codec.is_header_line("PROBE_V1\t0\t33"));
    }

    #[test]
    fn from_header_rejects_unknown_and_duplicate_fields() {
        assert_eq!(
            FieldCodec::<Probe>::from_header("PROBE_V1", "PROBE_V1\tID\tBOGUS").err(),
            Some(SchemaError::UnknownField("BOGUS".into()))
        );
        assert_eq!(
            FieldCodec::<Probe>::from_header("PROBE_V1", "PROBE_V1\tID\tID").err(),
            Some(SchemaError::DuplicateField("ID".into()))
        );
    }

    #[test]
    fn text_list_elements_keep_their_boundaries() {
        let codec = FieldCodec::<Probe>::new("PROBE_V1");
        let value = Value::TextList(vec!["a b".into(), "c".into()]);
        assert_eq!(codec.format_value(&value), "a_b c");
    }
}
