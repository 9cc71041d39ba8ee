//! Flat listing rows and the append-only table they accumulate into.

use std::collections::HashSet;
use std::fmt;

/// A single flattened cell. `Null` covers both JSON `null` and empty
/// containers; a column missing from a row is represented by `None` at the
/// table level, not by a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(x) => write!(f, "{x}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// One listing as an ordered set of `column -> value` pairs.
///
/// Column names are unique within a row. A flattened name can still collide
/// (`{"a": {"b": 1}, "a.b": 2}`), in which case the later value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingRow {
    fields: Vec<(String, CellValue)>,
}

impl ListingRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `column`, or overwrites its value if the row already has it.
    pub fn push(&mut self, column: String, value: CellValue) {
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn retain_columns<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.fields.retain(|(name, _)| keep(name));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for ListingRow {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.push(column, value);
        }
        row
    }
}

/// Column names dropped from every row after flattening.
///
/// Names that never appear in a row are ignored.
#[derive(Debug, Clone, Default)]
pub struct ColumnExclusion {
    names: HashSet<String>,
}

impl ColumnExclusion {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.names.contains(column)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn apply(&self, row: &mut ListingRow) {
        if self.is_empty() {
            return;
        }
        row.retain_columns(|column| !self.contains(column));
    }
}

/// Append-only accumulation of listing rows across pages.
///
/// Columns are the union of every row's columns in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    columns: Vec<String>,
    seen: HashSet<String>,
    rows: Vec<ListingRow>,
}

impl ResultTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one page of rows, extending the column set with any new names.
    pub fn append_page(&mut self, rows: Vec<ListingRow>) {
        for row in &rows {
            for column in row.columns() {
                if !self.seen.contains(column) {
                    self.seen.insert(column.to_owned());
                    self.columns.push(column.to_owned());
                }
            }
        }
        self.rows.extend(rows);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[ListingRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `column` in row `index`; `None` when the row lacks it.
    #[must_use]
    pub fn cell(&self, index: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(index).and_then(|row| row.get(column))
    }

    /// Rows aligned to [`Self::columns`], one `Option` per column.
    pub fn records(&self) -> impl Iterator<Item = Vec<Option<&CellValue>>> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .map(|column| row.get(column))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, CellValue)]) -> ListingRow {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    #[test]
    fn cell_value_display() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
        assert_eq!(CellValue::Int(-42).to_string(), "-42");
        assert_eq!(CellValue::Float(19_999.5).to_string(), "19999.5");
        assert_eq!(CellValue::Text("Camry".into()).to_string(), "Camry");
    }

    #[test]
    fn repeated_column_keeps_position_and_last_value() {
        let r = row(&[
            ("a.b", CellValue::Int(2)),
            ("make", CellValue::Text("Mazda".into())),
            ("a.b", CellValue::Int(1)),
        ]);
        assert_eq!(r.len(), 2);
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["a.b", "make"]);
        assert_eq!(r.get("a.b"), Some(&CellValue::Int(1)));
    }

    #[test]
    fn exclusion_removes_named_columns() {
        let mut r = row(&[
            ("make", CellValue::Text("Honda".into())),
            ("vin", CellValue::Text("1HGCM".into())),
        ]);
        ColumnExclusion::new(["vin"]).apply(&mut r);
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["make"]);
    }

    #[test]
    fn exclusion_ignores_unknown_names() {
        let mut r = row(&[("make", CellValue::Text("Honda".into()))]);
        let before = r.clone();
        ColumnExclusion::new(["not_a_column"]).apply(&mut r);
        assert_eq!(r, before);
    }

    #[test]
    fn exclusion_matches_full_flattened_name_only() {
        let mut r = row(&[
            ("dealer.name", CellValue::Text("Acme".into())),
            ("dealer_name", CellValue::Text("Acme".into())),
        ]);
        ColumnExclusion::new(["dealer_name"]).apply(&mut r);
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["dealer.name"]);
    }

    #[test]
    fn table_starts_empty() {
        let table = ResultTable::new();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert_eq!(table.records().count(), 0);
    }

    #[test]
    fn table_columns_are_union_in_first_seen_order() {
        let mut table = ResultTable::new();
        table.append_page(vec![row(&[
            ("make", CellValue::Text("Ford".into())),
            ("price", CellValue::Int(9000)),
        ])]);
        table.append_page(vec![row(&[
            ("mileage", CellValue::Int(120_000)),
            ("make", CellValue::Text("Kia".into())),
        ])]);
        assert_eq!(table.columns(), ["make", "price", "mileage"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn records_fill_missing_columns_with_none() {
        let mut table = ResultTable::new();
        table.append_page(vec![
            row(&[("make", CellValue::Text("Ford".into()))]),
            row(&[("price", CellValue::Int(5))]),
        ]);
        let records: Vec<_> = table.records().collect();
        assert_eq!(records[0], vec![Some(&CellValue::Text("Ford".into())), None]);
        assert_eq!(records[1], vec![None, Some(&CellValue::Int(5))]);
        assert!(table.cell(1, "make").is_none());
    }

    #[test]
    fn append_preserves_page_then_row_order() {
        let mut table = ResultTable::new();
        table.append_page(vec![
            row(&[("id", CellValue::Int(1))]),
            row(&[("id", CellValue::Int(2))]),
        ]);
        table.append_page(vec![row(&[("id", CellValue::Int(3))])]);
        let ids: Vec<_> = table.rows().iter().map(|r| r.get("id").cloned()).collect();
        assert_eq!(
            ids,
            vec![
                Some(CellValue::Int(1)),
                Some(CellValue::Int(2)),
                Some(CellValue::Int(3))
            ]
        );
    }

    #[test]
    fn appending_empty_page_is_a_no_op() {
        let mut table = ResultTable::new();
        table.append_page(Vec::new());
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }
}
