//! TOPSIS Evaluator - Validation, scoring and ranking of alternatives.

use super::{
    split_list, CriterionTable, DecisionMatrix, ImpactVector, ScoredRow, TopsisError,
    WeightVector,
};
use crate::domain::foundation::Score;

/// Ranks alternatives by relative closeness to the ideal solution.
pub struct TopsisEvaluator;

impl TopsisEvaluator {
    /// Scores and ranks every alternative in the table.
    ///
    /// `weights_spec` and `impacts_spec` are comma-delimited lists with one
    /// token per criterion column, e.g. `"1, 1, 2"` and `"+, -, +"`.
    ///
    /// # Validation order
    /// 1. Table has at least one row (`EmptyInput`)
    /// 2. Weight and impact counts equal the criterion count (`CriteriaMismatch`)
    /// 3. Every criterion cell is a finite number (`NonNumericValue`)
    /// 4. Every weight is a non-negative number (`InvalidWeight`)
    /// 5. Every impact is `+` or `-` (`InvalidImpact`)
    ///
    /// # Algorithm
    /// Vector-normalize each column (an all-zero column divides by 1), apply
    /// weights, take per-column extremes as ideal and anti-ideal, and score
    /// each alternative as `d- / (d+ + d-)` (0 when both distances are 0).
    ///
    /// # Ordering
    /// Results are sorted by descending full-precision score. Equal scores
    /// keep their input order. Reported scores are rounded to 4 places.
    pub fn evaluate(
        table: &CriterionTable,
        weights_spec: &str,
        impacts_spec: &str,
    ) -> Result<Vec<ScoredRow>, TopsisError> {
        if table.is_empty() {
            return Err(TopsisError::EmptyInput);
        }

        let criteria = table.criterion_columns();
        let weight_tokens = split_list(weights_spec);
        let impact_tokens = split_list(impacts_spec);

        if weight_tokens.len() != criteria.len() || impact_tokens.len() != criteria.len() {
            return Err(TopsisError::CriteriaMismatch {
                expected: criteria.len(),
                weights: weight_tokens.len(),
                impacts: impact_tokens.len(),
            });
        }

        let matrix = DecisionMatrix::from_table(table, &criteria)?;
        let weights = WeightVector::from_tokens(&weight_tokens)?;
        let impacts = ImpactVector::from_tokens(&impact_tokens)?;

        let closeness = Self::closeness(&matrix, &weights, &impacts)?;
        Ok(Self::rank(table, &closeness))
    }

    /// Returns the criterion column names of a table.
    pub fn criteria(table: &CriterionTable) -> Vec<String> {
        table.criterion_columns()
    }

    /// Full-precision closeness coefficient of every alternative, in input order.
    ///
    /// Every coefficient is finite and within [0, 1].
    pub fn closeness(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<Vec<f64>, TopsisError> {
        let expected = matrix.criterion_count();
        if weights.len() != expected || impacts.len() != expected {
            return Err(TopsisError::CriteriaMismatch {
                expected,
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        let weighted = matrix.normalize().apply_weights(weights);
        let ideals = weighted.ideal_solutions(impacts);

        Ok(weighted
            .separations(&ideals)
            .iter()
            .map(|separation| separation.closeness())
            .collect())
    }

    fn rank(table: &CriterionTable, closeness: &[f64]) -> Vec<ScoredRow> {
        let mut order: Vec<usize> = (0..closeness.len()).collect();
        // Stable: equal scores keep first-appearance order.
        order.sort_by(|&a, &b| closeness[b].total_cmp(&closeness[a]));

        order
            .into_iter()
            .enumerate()
            .map(|(position, index)| {
                ScoredRow::new(
                    table.rows()[index].clone(),
                    Score::new(closeness[index]),
                    position + 1,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::CellValue;

    fn laptops() -> CriterionTable {
        CriterionTable::builder()
            .criteria(vec!["Cost", "Quality"])
            .alternative("A", vec![250, 16])
            .alternative("B", vec![200, 16])
            .alternative("C", vec![300, 32])
            .build()
    }

    fn labels(results: &[ScoredRow]) -> Vec<String> {
        results
            .iter()
            .map(|r| r.label().map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    fn rank_of(results: &[ScoredRow], label: &str) -> usize {
        results
            .iter()
            .find(|r| r.label() == Some(&CellValue::Text(label.to_string())))
            .map(|r| r.rank())
            .unwrap()
    }

    // Validation Tests

    #[test]
    fn empty_table_is_rejected() {
        let err = TopsisEvaluator::evaluate(&CriterionTable::empty(), "1", "+").unwrap_err();
        assert_eq!(err, TopsisError::EmptyInput);
    }

    #[test]
    fn too_few_weights_is_mismatch() {
        let table = CriterionTable::builder()
            .criteria(vec!["C1", "C2", "C3"])
            .alternative("A", vec![1, 2, 3])
            .build();

        let err = TopsisEvaluator::evaluate(&table, "1,1", "+,+,+").unwrap_err();
        assert_eq!(
            err,
            TopsisError::CriteriaMismatch {
                expected: 3,
                weights: 2,
                impacts: 3
            }
        );
    }

    #[test]
    fn too_many_impacts_is_mismatch() {
        let err = TopsisEvaluator::evaluate(&laptops(), "1,1", "+,-,+").unwrap_err();
        assert!(matches!(
            err,
            TopsisError::CriteriaMismatch {
                expected: 2,
                weights: 2,
                impacts: 3
            }
        ));
    }

    #[test]
    fn identifier_only_table_is_mismatch() {
        let table = CriterionTable::new(vec![crate::domain::topsis::Row::new().with("Name", "A")]);
        let err = TopsisEvaluator::evaluate(&table, "1", "+").unwrap_err();
        assert!(matches!(err, TopsisError::CriteriaMismatch { expected: 0, .. }));
    }

    #[test]
    fn non_numeric_cell_names_column() {
        let table = CriterionTable::builder()
            .criteria(vec!["Cost", "Quality"])
            .alternative("A", vec!["250", "high"])
            .build();

        let err = TopsisEvaluator::evaluate(&table, "1,1", "-,+").unwrap_err();
        assert_eq!(
            err,
            TopsisError::NonNumericValue {
                column: "Quality".to_string(),
                row: 1
            }
        );
    }

    #[test]
    fn blank_cell_is_not_treated_as_zero() {
        let table = CriterionTable::builder()
            .criteria(vec!["Cost"])
            .alternative("A", vec![""])
            .build();

        let err = TopsisEvaluator::evaluate(&table, "1", "+").unwrap_err();
        assert!(matches!(err, TopsisError::NonNumericValue { .. }));
    }

    #[test]
    fn invalid_impact_reports_token_and_position() {
        let err = TopsisEvaluator::evaluate(&laptops(), "1,1", "-,up").unwrap_err();
        assert_eq!(
            err,
            TopsisError::InvalidImpact {
                token: "up".to_string(),
                position: 2
            }
        );
    }

    #[test]
    fn invalid_weight_reports_token_and_position() {
        let err = TopsisEvaluator::evaluate(&laptops(), "one,1", "-,+").unwrap_err();
        assert_eq!(
            err,
            TopsisError::InvalidWeight {
                token: "one".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn mismatch_is_checked_before_cells() {
        let table = CriterionTable::builder()
            .criteria(vec!["Cost", "Quality"])
            .alternative("A", vec!["x", "y"])
            .build();

        let err = TopsisEvaluator::evaluate(&table, "1", "+").unwrap_err();
        assert!(matches!(err, TopsisError::CriteriaMismatch { .. }));
    }

    #[test]
    fn cells_are_checked_before_impacts() {
        let table = CriterionTable::builder()
            .criteria(vec!["Cost"])
            .alternative("A", vec!["x"])
            .build();

        let err = TopsisEvaluator::evaluate(&table, "1", "?").unwrap_err();
        assert!(matches!(err, TopsisError::NonNumericValue { .. }));
    }

    #[test]
    fn closeness_rejects_weights_that_do_not_fit_matrix() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        let weights = WeightVector::parse("1,1").unwrap();
        let impacts = ImpactVector::parse("+,+").unwrap();

        let err = TopsisEvaluator::closeness(&matrix, &weights, &impacts).unwrap_err();
        assert_eq!(
            err,
            TopsisError::CriteriaMismatch {
                expected: 1,
                weights: 2,
                impacts: 2
            }
        );
    }

    // Scoring Tests

    #[test]
    fn dominated_alternative_ranks_below_dominators() {
        let results = TopsisEvaluator::evaluate(&laptops(), "1,1", "-,+").unwrap();

        assert!(rank_of(&results, "B") < rank_of(&results, "A"));
        assert!(rank_of(&results, "C") < rank_of(&results, "A"));
        assert_eq!(rank_of(&results, "A"), 3);
    }

    #[test]
    fn scores_are_reproducible_to_four_places() {
        let results = TopsisEvaluator::evaluate(&laptops(), "1,1", "-,+").unwrap();

        // Cost norm = sqrt(250^2 + 200^2 + 300^2), Quality norm = sqrt(16^2 + 16^2 + 32^2).
        // Weighted: A (0.5698, 0.4082), B (0.4558, 0.4082), C (0.6838, 0.8165)
        // Ideal (0.4558, 0.8165), anti-ideal (0.6838, 0.4082)
        assert_eq!(labels(&results), vec!["C", "B", "A"]);
        assert_eq!(results[0].score().value(), 0.6417);
        assert_eq!(results[1].score().value(), 0.3583);
        assert_eq!(results[2].score().value(), 0.2119);
    }

    #[test]
    fn single_row_single_criterion_scores_zero() {
        let table = CriterionTable::builder()
            .criteria(vec!["C1"])
            .alternative("Only", vec![42])
            .build();

        let results = TopsisEvaluator::evaluate(&table, "1", "+").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score().value(), 0.0);
        assert_eq!(results[0].rank(), 1);
    }

    #[test]
    fn all_zero_column_does_not_fail() {
        let table = CriterionTable::builder()
            .criteria(vec!["Zero", "Value"])
            .alternative("A", vec![0, 1])
            .alternative("B", vec![0, 3])
            .build();

        let results = TopsisEvaluator::evaluate(&table, "1,1", "+,+").unwrap();
        assert_eq!(labels(&results), vec!["B", "A"]);
        assert_eq!(results[0].score().value(), 1.0);
        assert_eq!(results[1].score().value(), 0.0);
    }

    #[test]
    fn huge_values_rank_correctly() {
        let table = CriterionTable::builder()
            .criteria(vec!["Size"])
            .alternative("Small", vec![1e199])
            .alternative("Big", vec![1e200])
            .build();

        let results = TopsisEvaluator::evaluate(&table, "1", "+").unwrap();
        assert_eq!(labels(&results), vec!["Big", "Small"]);
        assert_eq!(results[0].score().value(), 1.0);
        assert_eq!(results[1].score().value(), 0.0);
    }

    #[test]
    fn huge_weights_match_unit_weights() {
        let table = CriterionTable::builder()
            .criteria(vec!["C1", "C2"])
            .alternative("Low", vec![1, 1])
            .alternative("High", vec![5, 5])
            .build();

        let huge = TopsisEvaluator::evaluate(&table, "1e308,1e308", "+,+").unwrap();
        let unit = TopsisEvaluator::evaluate(&table, "1,1", "+,+").unwrap();

        assert_eq!(huge, unit);
        assert_eq!(labels(&huge), vec!["High", "Low"]);
        assert_eq!(huge[0].score().value(), 1.0);
    }

    #[test]
    fn cost_impact_reverses_preference() {
        let table = CriterionTable::builder()
            .criteria(vec!["Price"])
            .alternative("Cheap", vec![10])
            .alternative("Pricey", vec![90])
            .build();

        let benefit = TopsisEvaluator::evaluate(&table, "1", "+").unwrap();
        let cost = TopsisEvaluator::evaluate(&table, "1", "-").unwrap();

        assert_eq!(labels(&benefit), vec!["Pricey", "Cheap"]);
        assert_eq!(labels(&cost), vec!["Cheap", "Pricey"]);
    }

    #[test]
    fn zero_weight_ignores_criterion() {
        let table = CriterionTable::builder()
            .criteria(vec!["Ignored", "Decides"])
            .alternative("A", vec![100, 1])
            .alternative("B", vec![1, 5])
            .build();

        let results = TopsisEvaluator::evaluate(&table, "0,1", "+,+").unwrap();
        assert_eq!(labels(&results), vec!["B", "A"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let table = CriterionTable::builder()
            .criteria(vec!["C1"])
            .alternative("First", vec![5])
            .alternative("Second", vec![5])
            .alternative("Best", vec![9])
            .alternative("Third", vec![5])
            .build();

        let results = TopsisEvaluator::evaluate(&table, "1", "+").unwrap();
        assert_eq!(labels(&results), vec!["Best", "First", "Second", "Third"]);
        assert_eq!(
            results.iter().map(ScoredRow::rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn output_preserves_original_fields() {
        let results = TopsisEvaluator::evaluate(&laptops(), "1,1", "-,+").unwrap();
        let b = results.iter().find(|r| r.rank() == 2).unwrap();

        assert_eq!(
            b.row().columns().collect::<Vec<_>>(),
            vec!["Name", "Cost", "Quality"]
        );
        assert_eq!(b.row().get("Cost"), Some(&CellValue::Integer(200)));
    }

    #[test]
    fn evaluation_does_not_mutate_table() {
        let table = laptops();
        let before = table.clone();
        let _ = TopsisEvaluator::evaluate(&table, "1,1", "-,+").unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn criteria_skips_identifier() {
        assert_eq!(TopsisEvaluator::criteria(&laptops()), vec!["Cost", "Quality"]);
    }
}
