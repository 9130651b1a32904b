//! Line and cell formatting helpers shared by every schema.
//!
//! A line is a marker token followed by cells, joined by tabs. List cells
//! join their elements with single spaces.

/// Separator between cells on a line.
pub const DELIMITER: char = '\t';

/// Separator between elements inside a list cell.
pub const LIST_SEPARATOR: char = ' ';

/// Formats a float with exactly two decimals and a '.' separator.
pub fn format_float(v: f64) -> String {
    let s = format!("{:.2}", v);
    // "-0.00" carries no information beyond "0.00".
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

pub fn format_bool(v: bool) -> String {
    let s = if v { "1" } else { "0" };
    s.to_string()
}

/// Parses a "1"/"0" boolean cell.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}

/// Replaces characters that would break line framing with spaces.
pub fn sanitize_cell(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            _ => c,
        })
        .collect()
}

/// Joins list elements into one cell.
pub fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(LIST_SEPARATOR);
        }
        out.push_str(item.as_ref());
    }
    out
}

/// Builds one line: marker first, then the cells.
pub fn join_line<I, S>(marker: &str, cells: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::with_capacity(128);
    line.push_str(marker);
    for cell in cells {
        line.push(DELIMITER);
        line.push_str(cell.as_ref());
    }
    line
}

/// Splits a line into its marker and cells. Trailing CR/LF is ignored.
pub fn split_line(line: &str) -> (&str, Vec<&str>) {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut parts = line.split(DELIMITER);
    let marker = parts.next().unwrap_or("");
    (marker, parts.collect())
}

/// Returns the marker token of a line.
pub fn marker_of(line: &str) -> &str {
    split_line(line).0
}

/// Column label used on board column-header lines.
pub fn column_label(col: usize) -> String {
    format!("COL_{}", col)
}

/// Row label used as the first cell of board row lines.
pub fn row_label(row: usize) -> String {
    format!("ROW_{}", row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_has_two_decimals() {
        assert_eq!(format_float(1.0), "1.00");
        assert_eq!(format_float(0.126), "0.13");
        // Exact binary ties round to even.
        assert_eq!(format_float(0.125), "0.12");
        assert_eq!(format_float(0.375), "0.38");
        assert_eq!(format_float(-2.5), "-2.50");
        assert_eq!(format_float(-0.001), "0.00");
        assert_eq!(format_float(1234.567), "1234.57");
    }

    #[test]
    fn bool_cells() {
        assert_eq!(format_bool(true), "1");
        assert_eq!(format_bool(false), "0");
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("true"), None);
    }

    #[test]
    fn sanitize_strips_framing_characters() {
        assert_eq!(sanitize_cell("Atlas\tAS7-D\n"), "Atlas AS7-D ");
    }

    #[test]
    fn line_split_and_join() {
        let line = join_line("GAME_V1", ["1", "", "x"]);
        assert_eq!(line, "GAME_V1\t1\t\tx");
        let framed = format!("{}\r\n", line);
        let (marker, cells) = split_line(&framed);
        assert_eq!(marker, "GAME_V1");
        assert_eq!(cells, vec!["1", "", "x"]);
    }

    #[test]
    fn marker_only_line_has_no_cells() {
        let (marker, cells) = split_line("BOARD_V1");
        assert_eq!(marker, "BOARD_V1");
        assert!(cells.is_empty());
    }

    #[test]
    fn grid_labels() {
        assert_eq!(column_label(3), "COL_3");
        assert_eq!(row_label(0), "ROW_0");
        assert_eq!(join_list(["A", "B"]), "A B");
        assert_eq!(join_list(Vec::<String>::new()), "");
    }
}
