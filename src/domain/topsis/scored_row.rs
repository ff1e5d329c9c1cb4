//! Scored Row - An alternative with its TOPSIS score and rank.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{CellValue, Row};
use crate::domain::foundation::Score;

/// Output field holding the rounded score.
pub const SCORE_FIELD: &str = "score";

/// Output field holding the 1-based rank.
pub const RANK_FIELD: &str = "rank";

/// One ranked alternative.
///
/// Serializes as a flat object: the original fields in their original order,
/// then `score`, then `rank`. Original columns named `score` or `rank` are
/// superseded by the computed values.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    row: Row,
    score: Score,
    rank: usize,
}

impl ScoredRow {
    pub fn new(row: Row, score: Score, rank: usize) -> Self {
        Self { row, score, rank }
    }

    /// The original row.
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// The alternative's identifier value.
    pub fn label(&self) -> Option<&CellValue> {
        self.row.label()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Output column names in order.
    pub fn columns(&self) -> Vec<String> {
        self.passthrough_fields()
            .map(|(name, _)| name.clone())
            .chain([SCORE_FIELD.to_string(), RANK_FIELD.to_string()])
            .collect()
    }

    /// Output cell values rendered as text, aligned with [`ScoredRow::columns`].
    pub fn display_values(&self) -> Vec<String> {
        self.passthrough_fields()
            .map(|(_, value)| value.to_string())
            .chain([self.score.to_string(), self.rank.to_string()])
            .collect()
    }

    fn passthrough_fields(&self) -> impl Iterator<Item = &(String, CellValue)> {
        self.row
            .fields()
            .iter()
            .filter(|(name, _)| name != SCORE_FIELD && name != RANK_FIELD)
    }
}

impl Serialize for ScoredRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (column, value) in self.passthrough_fields() {
            map.serialize_entry(column, value)?;
        }
        map.serialize_entry(SCORE_FIELD, &self.score)?;
        map.serialize_entry(RANK_FIELD, &self.rank)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoredRow {
        let row = Row::new().with("Name", "B").with("Cost", 200).with("Quality", 16);
        ScoredRow::new(row, Score::new(0.54321), 1)
    }

    #[test]
    fn serializes_fields_then_score_and_rank() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Name":"B","Cost":200,"Quality":16,"score":0.5432,"rank":1}"#
        );
    }

    #[test]
    fn columns_and_values_align() {
        let scored = sample();
        assert_eq!(
            scored.columns(),
            vec!["Name", "Cost", "Quality", "score", "rank"]
        );
        assert_eq!(
            scored.display_values(),
            vec!["B", "200", "16", "0.5432", "1"]
        );
    }

    #[test]
    fn computed_fields_supersede_original_columns() {
        let row = Row::new().with("Name", "A").with("score", 99).with("X", 1);
        let scored = ScoredRow::new(row, Score::new(0.25), 2);

        let json = serde_json::to_string(&scored).unwrap();
        assert_eq!(json, r#"{"Name":"A","X":1,"score":0.25,"rank":2}"#);
        assert_eq!(scored.columns(), vec!["Name", "X", "score", "rank"]);
    }

    #[test]
    fn label_is_first_column() {
        assert_eq!(sample().label(), Some(&CellValue::Text("B".to_string())));
    }
}
