//! Weight and impact vectors parsed from delimited text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TopsisError;

/// Separator between tokens in a weights or impacts list.
pub const LIST_DELIMITER: char = ',';

/// Splits a delimited list into trimmed tokens.
///
/// Never returns an empty vector: blank input yields one empty token, so
/// count checks and token checks report it.
pub fn split_list(spec: &str) -> Vec<&str> {
    spec.split(LIST_DELIMITER).map(str::trim).collect()
}

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Higher raw values are better (`+`).
    Benefit,
    /// Lower raw values are better (`-`).
    Cost,
}

impl Impact {
    /// Parses a single impact token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    /// Returns the token for this impact.
    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One impact per criterion, in criterion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    /// Builds the vector from trimmed tokens.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, TopsisError> {
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                Impact::from_token(token).ok_or_else(|| TopsisError::InvalidImpact {
                    token: token.to_string(),
                    position: index + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parses a delimited impacts list such as `"+, -, +"`.
    pub fn parse(spec: &str) -> Result<Self, TopsisError> {
        Self::from_tokens(&split_list(spec))
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Impact>> for ImpactVector {
    fn from(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }
}

/// One non-negative weight per criterion, in criterion order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Builds the vector from trimmed tokens.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self, TopsisError> {
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token
                    .parse::<f64>()
                    .ok()
                    .filter(|weight| weight.is_finite() && *weight >= 0.0)
                    .ok_or_else(|| TopsisError::InvalidWeight {
                        token: token.to_string(),
                        position: index + 1,
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parses a delimited weights list such as `"1, 0.5, 2"`.
    pub fn parse(spec: &str) -> Result<Self, TopsisError> {
        Self::from_tokens(&split_list(spec))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Weights divided by the largest weight. All-zero weights are returned as is.
    pub fn relative(&self) -> Vec<f64> {
        let max = self.0.iter().copied().fold(0.0, f64::max);
        if max == 0.0 {
            return self.0.clone();
        }
        self.0.iter().map(|weight| weight / max).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_list_trims_tokens() {
        assert_eq!(split_list(" 1, 2 ,3"), vec!["1", "2", "3"]);
        assert_eq!(split_list("+,-"), vec!["+", "-"]);
    }

    #[test]
    fn split_list_blank_input_is_single_token() {
        assert_eq!(split_list(""), vec![""]);
        assert_eq!(split_list("1,,2"), vec!["1", "", "2"]);
    }

    #[test]
    fn impacts_parse_symbols() {
        let impacts = ImpactVector::parse("+, -, +").unwrap();
        assert_eq!(
            impacts.as_slice(),
            &[Impact::Benefit, Impact::Cost, Impact::Benefit]
        );
    }

    #[test]
    fn impacts_reject_unknown_token_with_position() {
        let err = ImpactVector::parse("+, x, -").unwrap_err();
        assert_eq!(
            err,
            TopsisError::InvalidImpact {
                token: "x".to_string(),
                position: 2
            }
        );
    }

    #[test]
    fn impacts_reject_words_and_doubled_symbols() {
        assert!(ImpactVector::parse("plus").is_err());
        assert!(ImpactVector::parse("++").is_err());
        assert!(ImpactVector::parse("").is_err());
    }

    #[test]
    fn weights_parse_numbers() {
        let weights = WeightVector::parse("1, 0.5,2").unwrap();
        assert_eq!(weights.as_slice(), &[1.0, 0.5, 2.0]);
    }

    #[test]
    fn weights_accept_zero() {
        let weights = WeightVector::parse("0,1").unwrap();
        assert_eq!(weights.as_slice(), &[0.0, 1.0]);
    }

    #[test]
    fn relative_weights_divide_by_largest() {
        let weights = WeightVector::parse("2, 0.5, 4").unwrap();
        assert_eq!(weights.relative(), vec![0.5, 0.125, 1.0]);

        let weights = WeightVector::parse("0,0").unwrap();
        assert_eq!(weights.relative(), vec![0.0, 0.0]);
    }

    #[test]
    fn weights_reject_negative_and_garbage() {
        assert_eq!(
            WeightVector::parse("1,-2").unwrap_err(),
            TopsisError::InvalidWeight {
                token: "-2".to_string(),
                position: 2
            }
        );
        assert!(WeightVector::parse("abc").is_err());
        assert!(WeightVector::parse("1,NaN").is_err());
        assert!(WeightVector::parse("inf").is_err());
        assert!(WeightVector::parse("").is_err());
    }

    #[test]
    fn impact_display_is_symbol() {
        assert_eq!(Impact::Benefit.to_string(), "+");
        assert_eq!(Impact::Cost.to_string(), "-");
    }
}
