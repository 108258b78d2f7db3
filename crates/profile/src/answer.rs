use core_types::TraitVector;
use serde::{Deserialize, Serialize};

/// One selected quiz option.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub weights: Vec<f64>,
}

impl AnswerRecord {
    pub fn new(weights: impl Into<Vec<f64>>) -> Self {
        Self {
            weights: weights.into(),
        }
    }

    /// `None` when the record does not carry one weight per dimension.
    pub fn trait_weights(&self) -> Option<TraitVector> {
        TraitVector::from_slice(&self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::AnswerRecord;

    #[test]
    fn missing_weights_deserialize_as_empty() {
        let answer: AnswerRecord = serde_json::from_str("{}").expect("parse");
        assert!(answer.weights.is_empty());
        assert!(answer.trait_weights().is_none());
    }

    #[test]
    fn wrong_length_has_no_trait_weights() {
        assert!(AnswerRecord::new(vec![1.0, 2.0, 3.0]).trait_weights().is_none());
        assert!(AnswerRecord::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).trait_weights().is_some());
    }
}
