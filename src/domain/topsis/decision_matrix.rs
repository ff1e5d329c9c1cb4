//! Decision Matrix - Numeric alternatives x criteria matrix and the TOPSIS steps over it.

use super::{CriterionTable, Impact, ImpactVector, TopsisError, WeightVector};

/// Best and worst attainable weighted value per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealSolutions {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Distances of one alternative to the ideal and anti-ideal solutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    pub to_ideal: f64,
    pub to_anti_ideal: f64,
}

impl Separation {
    /// Relative closeness to the ideal solution.
    ///
    /// An alternative at zero distance from both solutions scores 0.
    pub fn closeness(&self) -> f64 {
        let total = self.to_ideal + self.to_anti_ideal;
        if total == 0.0 {
            0.0
        } else {
            self.to_anti_ideal / total
        }
    }
}

/// An n x m matrix of real values (rows = alternatives, columns = criteria).
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    criteria: usize,
}

impl DecisionMatrix {
    /// Builds the matrix by coercing every criterion cell of the table.
    ///
    /// Fails on the first cell (row-major) that is missing or not a finite
    /// number.
    pub fn from_table(table: &CriterionTable, criteria: &[String]) -> Result<Self, TopsisError> {
        let rows = table
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                criteria
                    .iter()
                    .map(|column| {
                        row.get(column)
                            .and_then(|cell| cell.as_real())
                            .ok_or_else(|| TopsisError::NonNumericValue {
                                column: column.clone(),
                                row: index + 1,
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rows,
            criteria: criteria.len(),
        })
    }

    /// Creates a matrix directly from numeric rows.
    ///
    /// Fails if the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let criteria = rows.first().map(Vec::len).unwrap_or(0);
        if let Some(index) = rows.iter().position(|row| row.len() != criteria) {
            return Err(TopsisError::RaggedRow {
                row: index + 1,
                expected: criteria,
                actual: rows[index].len(),
            });
        }
        Ok(Self { rows, criteria })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    /// Divides every value by its column's Euclidean norm.
    ///
    /// Columns are pre-scaled by their largest magnitude so the sum of squares
    /// cannot overflow. An all-zero column stays zero.
    pub(crate) fn normalize(&self) -> Self {
        let scales: Vec<(f64, f64)> = (0..self.criteria).map(|j| self.column_scale(j)).collect();
        self.map_columns(|j, value| {
            let (peak, norm) = scales[j];
            if peak == 0.0 {
                0.0
            } else {
                (value / peak) / norm
            }
        })
    }

    /// Multiplies every value by its weight relative to the largest weight.
    ///
    /// Closeness is unaffected by a uniform weight factor, and keeping weights
    /// within [0, 1] bounds every weighted value by 1.
    pub(crate) fn apply_weights(&self, weights: &WeightVector) -> Self {
        let weights = weights.relative();
        self.map_columns(|j, value| value * weights[j])
    }

    /// Column extremes, oriented by impact.
    pub(crate) fn ideal_solutions(&self, impacts: &ImpactVector) -> IdealSolutions {
        let (best, worst) = impacts
            .as_slice()
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let (min, max) = self.column_range(j);
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip();

        IdealSolutions { best, worst }
    }

    /// Euclidean distance of every alternative to both solutions.
    pub(crate) fn separations(&self, ideals: &IdealSolutions) -> Vec<Separation> {
        self.rows
            .iter()
            .map(|row| Separation {
                to_ideal: distance(row, &ideals.best),
                to_anti_ideal: distance(row, &ideals.worst),
            })
            .collect()
    }

    /// Largest magnitude in a column, and the column's norm after dividing by it.
    fn column_scale(&self, j: usize) -> (f64, f64) {
        let peak = self.rows.iter().map(|row| row[j].abs()).fold(0.0, f64::max);
        if peak == 0.0 {
            return (0.0, 1.0);
        }
        let norm = self
            .rows
            .iter()
            .map(|row| {
                let scaled = row[j] / peak;
                scaled * scaled
            })
            .sum::<f64>()
            .sqrt();
        (peak, norm)
    }

    fn column_range(&self, j: usize) -> (f64, f64) {
        self.rows.iter().map(|row| row[j]).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), value| (min.min(value), max.max(value)),
        )
    }

    fn map_columns(&self, f: impl Fn(usize, f64) -> f64) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().enumerate().map(|(j, value)| f(j, *value)).collect())
            .collect();
        Self {
            rows,
            criteria: self.criteria,
        }
    }
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
