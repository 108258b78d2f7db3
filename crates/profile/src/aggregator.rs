use std::collections::BTreeMap;

use core_types::{DIMENSIONS, Dimension, TraitVector, similarity_percentage};
use log::debug;
use serde::Serialize;

use crate::answer::AnswerRecord;
use crate::config::ProfileConfig;
use crate::describe::{describe, dominant_traits};
use crate::insight::generate_insights;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PersonalityProfile {
    pub vector: TraitVector,
    pub descriptions: BTreeMap<Dimension, String>,
    pub dominant_traits: Vec<Dimension>,
    pub insights: String,
    pub dimensions: BTreeMap<Dimension, f64>,
}

/// Turns quiz answers into a personality vector and explains it.
///
/// Holds no per-quiz state; every call takes the full answer list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonalityAggregator {
    config: ProfileConfig,
}

impl PersonalityAggregator {
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    /// Averages answer weights over *all* answers, so malformed records
    /// pull the mean toward zero before clamping.
    pub fn compute_vector(&self, answers: &[AnswerRecord]) -> TraitVector {
        if answers.is_empty() {
            return TraitVector::neutral();
        }

        let mut sums = [0.0; DIMENSIONS];
        let mut ignored = 0usize;
        for answer in answers {
            match answer.trait_weights() {
                Some(weights) => {
                    for (sum, w) in sums.iter_mut().zip(weights.as_array()) {
                        *sum += w;
                    }
                }
                None => ignored += 1,
            }
        }
        if ignored > 0 {
            debug!(
                "{ignored} of {} answers carried no {DIMENSIONS}-value weights",
                answers.len()
            );
        }

        let count = answers.len() as f64;
        TraitVector::new(sums.map(|s| s / count))
            .scaled(&self.config.dimension_weights)
            .clamped()
    }

    pub fn describe(&self, vector: &TraitVector) -> BTreeMap<Dimension, String> {
        describe(vector)
    }

    pub fn dominant_traits(&self, vector: &TraitVector, threshold: f64) -> Vec<Dimension> {
        dominant_traits(vector, threshold)
    }

    pub fn similarity(&self, a: &[f64], b: &[f64]) -> f64 {
        similarity_percentage(a, b)
    }

    pub fn generate_insights(&self, vector: &TraitVector) -> String {
        generate_insights(vector, self.config.dominant_threshold)
    }

    pub fn export_profile(&self, vector: &TraitVector) -> PersonalityProfile {
        PersonalityProfile {
            vector: *vector,
            descriptions: self.describe(vector),
            dominant_traits: self.dominant_traits(vector, self.config.dominant_threshold),
            insights: self.generate_insights(vector),
            dimensions: vector.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use core_types::{Dimension, TraitVector};

    use crate::{AnswerRecord, PersonalityAggregator, ProfileConfig};

    fn answers(rows: &[&[f64]]) -> Vec<AnswerRecord> {
        rows.iter().map(|w| AnswerRecord::new(w.to_vec())).collect()
    }

    #[test]
    fn empty_quiz_is_neutral() {
        let agg = PersonalityAggregator::default();
        assert_eq!(agg.compute_vector(&[]).as_array(), &[2.5; 5]);
    }

    #[test]
    fn extremes_average_to_midpoint() {
        let agg = PersonalityAggregator::default();
        let v = agg.compute_vector(&answers(&[&[5.0; 5], &[1.0; 5]]));
        assert_eq!(v.as_array(), &[3.0; 5]);
    }

    #[test]
    fn malformed_answer_dilutes_average() {
        let agg = PersonalityAggregator::default();
        let v = agg.compute_vector(&answers(&[&[4.0, 4.0, 4.0, 4.0, 4.0], &[5.0, 5.0]]));
        assert_eq!(v.as_array(), &[2.0; 5]);
    }

    #[test]
    fn only_malformed_answers_clamp_to_floor() {
        let agg = PersonalityAggregator::default();
        let v = agg.compute_vector(&answers(&[&[], &[9.0; 6]]));
        assert_eq!(v.as_array(), &[1.0; 5]);
    }

    #[test]
    fn dimension_weights_scale_before_clamp() {
        let agg = PersonalityAggregator::new(ProfileConfig {
            dimension_weights: [2.0, 0.5, 1.0, 1.0, 10.0],
            ..ProfileConfig::default()
        });
        let v = agg.compute_vector(&answers(&[&[2.0, 4.0, 3.0, 3.0, 3.0]]));
        assert_eq!(v.as_array(), &[4.0, 2.0, 3.0, 3.0, 5.0]);
    }

    #[test]
    fn overflowing_weights_under_zero_multiplier_stay_on_scale() {
        let config = ProfileConfig::from_json_str(r#"{"dimension_weights": [0, 1, 1, 1, 1]}"#)
            .expect("valid config");
        let agg = PersonalityAggregator::new(config);
        let row: &[f64] = &[1e308, 3.0, 3.0, 3.0, 3.0];
        let v = agg.compute_vector(&answers(&[row, row]));
        assert_eq!(v.as_array(), &[1.0, 3.0, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn similarity_matches_shared_formula() {
        let agg = PersonalityAggregator::default();
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert_eq!(agg.similarity(&a, &b), core_types::similarity_percentage(&a, &b));
        assert_eq!(agg.similarity(&a, &b[..4]), 0.0);
    }

    #[test]
    fn export_bundles_all_views() {
        let agg = PersonalityAggregator::default();
        let v = TraitVector::new([4.0, 2.0, 3.0, 1.5, 4.5]);
        let profile = agg.export_profile(&v);

        assert_eq!(profile.vector, v);
        assert_eq!(
            profile.dominant_traits,
            vec![Dimension::Sustainability, Dimension::TechSavvy]
        );
        assert_eq!(profile.insights, agg.generate_insights(&v));
        assert_eq!(profile.dimensions[&Dimension::Versatility], 1.5);
        assert_eq!(profile.descriptions.len(), 5);

        let json = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(json["dimensions"]["Tech-savvy"], 4.5);
        assert_eq!(json["dominant_traits"][0], "Sustainability");
    }
}
