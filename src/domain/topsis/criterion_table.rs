//! Criterion Table - Rows of alternatives keyed by column name.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A raw cell value as delivered by the table source.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Coerces the cell to a finite real number.
    ///
    /// Only integers, finite floats and text that parses completely as a
    /// finite number (surrounding whitespace allowed) succeed. Blanks,
    /// booleans and partially numeric text return `None`.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(f) if f.is_finite() => Some(*f),
            CellValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CellValue::Integer(i),
                None => n.as_f64().map(CellValue::Float).unwrap_or(CellValue::Empty),
            },
            Value::String(s) if s.is_empty() => CellValue::Empty,
            Value::String(s) => CellValue::Text(s),
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(f) => serializer.serialize_f64(*f),
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Bool(b) => serializer.serialize_bool(*b),
            CellValue::Empty => serializer.serialize_str(""),
        }
    }
}

/// One alternative: an ordered mapping from column name to raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, CellValue)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, replacing the value if the column already exists.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Inserts a field, keeping the original position of an existing column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Gets the value of a column.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Returns the column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the fields in order.
    pub fn fields(&self) -> &[(String, CellValue)] {
        &self.fields
    }

    /// Returns the value of the first (identifier) column.
    pub fn label(&self) -> Option<&CellValue> {
        self.fields.first().map(|(_, value)| value)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<serde_json::Map<String, Value>> for Row {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        let mut row = Row::new();
        for (column, value) in map {
            row.insert(column, CellValue::from(value));
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// The input table: alternatives (rows) by columns.
///
/// The first column identifies the alternative; every other column is a
/// criterion. Column names and order come from the first row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriterionTable {
    rows: Vec<Row>,
}

impl CriterionTable {
    /// Creates a table from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Creates an empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a table.
    pub fn builder() -> CriterionTableBuilder {
        CriterionTableBuilder::new()
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of alternatives.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns all column names, taken from the first row.
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.columns().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Returns the criterion column names (every column but the first).
    pub fn criterion_columns(&self) -> Vec<String> {
        self.columns().into_iter().skip(1).collect()
    }
}

impl From<Vec<serde_json::Map<String, Value>>> for CriterionTable {
    fn from(rows: Vec<serde_json::Map<String, Value>>) -> Self {
        Self::new(rows.into_iter().map(Row::from).collect())
    }
}

/// Identifier column used by [`CriterionTableBuilder`].
const BUILDER_IDENTIFIER: &str = "Name";

/// Builder for constructing CriterionTable instances column-wise.
///
/// Rows are labelled in a `Name` column.
#[derive(Debug, Default)]
pub struct CriterionTableBuilder {
    criteria: Vec<String>,
    rows: Vec<Row>,
}

impl CriterionTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion column names.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an alternative with one value per criterion, in criterion order.
    pub fn alternative<V: Into<CellValue>>(mut self, label: &str, values: Vec<V>) -> Self {
        let mut row = Row::new().with(BUILDER_IDENTIFIER, label);
        for (column, value) in self.criteria.iter().zip(values) {
            row.insert(column.clone(), value);
        }
        self.rows.push(row);
        self
    }

    /// Builds the table.
    pub fn build(self) -> CriterionTable {
        CriterionTable::new(self.rows)
    }
}
