use core_types::{Dimension, TraitVector};

use crate::describe::dominant_traits;

pub const BALANCED_PROFILE: &str =
    "You have a balanced profile, valuing every aspect equally when choosing a car.";

/// Canned elaboration shown when every dimension in `requires` is dominant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsightRule {
    pub requires: &'static [Dimension],
    pub text: &'static str,
}

impl InsightRule {
    pub fn matches(&self, dominant: &[Dimension]) -> bool {
        self.requires.iter().all(|d| dominant.contains(d))
    }
}

/// Ordered; the first matching rule wins.
pub const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        requires: &[Dimension::Sustainability, Dimension::TechSavvy],
        text: "You lean towards electric or hybrid vehicles with advanced technology.",
    },
    InsightRule {
        requires: &[Dimension::Performance, Dimension::LuxuryComfort],
        text: "You are looking for premium sports cars that combine high performance with comfort.",
    },
    InsightRule {
        requires: &[Dimension::Versatility],
        text: "You prioritize functionality and practicality in your vehicle.",
    },
    InsightRule {
        requires: &[Dimension::Sustainability],
        text: "Environmental impact is an important part of your buying decision.",
    },
    InsightRule {
        requires: &[Dimension::TechSavvy],
        text: "You value technology and connectivity in your car.",
    },
];

pub fn generate_insights(vector: &TraitVector, threshold: f64) -> String {
    let dominant = dominant_traits(vector, threshold);
    if dominant.is_empty() {
        return BALANCED_PROFILE.to_string();
    }

    let names = dominant
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ");
    let mut insights = format!("Your dominant traits are: {names}.");
    if let Some(rule) = INSIGHT_RULES.iter().find(|r| r.matches(&dominant)) {
        insights.push(' ');
        insights.push_str(rule.text);
    }
    insights
}

#[cfg(test)]
mod tests {
    use core_types::{Dimension, TraitVector};

    use super::{BALANCED_PROFILE, INSIGHT_RULES, generate_insights};

    const T: f64 = 3.5;

    #[test]
    fn balanced_when_nothing_dominates() {
        let v = TraitVector::splat(3.49);
        assert_eq!(generate_insights(&v, T), BALANCED_PROFILE);
    }

    #[test]
    fn sustainability_with_tech_beats_single_rules() {
        let v = TraitVector::new([4.0, 1.0, 1.0, 4.0, 4.0]);
        assert_eq!(
            generate_insights(&v, T),
            format!(
                "Your dominant traits are: Sustainability, Versatility, Tech-savvy. {}",
                INSIGHT_RULES[0].text
            )
        );
    }

    #[test]
    fn sustainability_with_tech_beats_performance_with_luxury() {
        let v = TraitVector::new([4.0, 4.0, 4.0, 1.0, 4.0]);
        assert_eq!(
            generate_insights(&v, T),
            format!(
                "Your dominant traits are: Sustainability, Performance, Luxury & Comfort, Tech-savvy. {}",
                INSIGHT_RULES[0].text
            )
        );
    }

    #[test]
    fn performance_with_luxury() {
        let v = TraitVector::new([1.0, 4.5, 3.5, 1.0, 1.0]);
        assert!(generate_insights(&v, T).ends_with(INSIGHT_RULES[1].text));
    }

    #[test]
    fn versatility_wins_over_sustainability_alone() {
        let v = TraitVector::new([4.0, 1.0, 1.0, 4.0, 1.0]);
        assert!(generate_insights(&v, T).ends_with(INSIGHT_RULES[2].text));
    }

    #[test]
    fn single_trait_rules() {
        let s = TraitVector::new([4.0, 1.0, 1.0, 1.0, 1.0]);
        assert!(generate_insights(&s, T).ends_with(INSIGHT_RULES[3].text));
        let t = TraitVector::new([1.0, 1.0, 1.0, 1.0, 4.0]);
        assert!(generate_insights(&t, T).ends_with(INSIGHT_RULES[4].text));
    }

    #[test]
    fn unmatched_traits_only_list_names() {
        let v = TraitVector::new([1.0, 4.0, 1.0, 1.0, 1.0]);
        assert_eq!(generate_insights(&v, T), "Your dominant traits are: Performance.");
    }

    #[test]
    fn rule_table_order_is_fixed() {
        let requires = INSIGHT_RULES.iter().map(|r| r.requires).collect::<Vec<_>>();
        assert_eq!(
            requires,
            vec![
                &[Dimension::Sustainability, Dimension::TechSavvy][..],
                &[Dimension::Performance, Dimension::LuxuryComfort][..],
                &[Dimension::Versatility][..],
                &[Dimension::Sustainability][..],
                &[Dimension::TechSavvy][..],
            ]
        );
    }
}
