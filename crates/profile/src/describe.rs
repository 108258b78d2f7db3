use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use core_types::{Dimension, SCALE_MAX, TraitVector};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Band {
    Low,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
}

impl Band {
    pub fn for_score(score: f64) -> Self {
        if score >= 4.0 {
            Self::High
        } else if score >= 3.0 {
            Self::MediumHigh
        } else if score >= 2.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
        }
    }
}

impl Display for Band {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn describe(vector: &TraitVector) -> BTreeMap<Dimension, String> {
    vector
        .iter()
        .map(|(dimension, score)| {
            let band = Band::for_score(score);
            (dimension, format!("{band} ({score:.1}/{SCALE_MAX:.1})"))
        })
        .collect()
}

/// Dimensions scoring at or above `threshold`, in canonical order.
pub fn dominant_traits(vector: &TraitVector, threshold: f64) -> Vec<Dimension> {
    vector
        .iter()
        .filter(|(_, score)| *score >= threshold)
        .map(|(dimension, _)| dimension)
        .collect()
}

#[cfg(test)]
mod tests {
    use core_types::{Dimension, TraitVector};

    use super::{Band, describe, dominant_traits};

    #[test]
    fn band_boundaries() {
        assert_eq!(Band::for_score(4.0), Band::High);
        assert_eq!(Band::for_score(3.99), Band::MediumHigh);
        assert_eq!(Band::for_score(3.0), Band::MediumHigh);
        assert_eq!(Band::for_score(2.0), Band::Medium);
        assert_eq!(Band::for_score(1.99), Band::Low);
    }

    #[test]
    fn describe_formats_one_decimal() {
        let v = TraitVector::new([4.26, 3.0, 2.04, 1.0, 5.0]);
        let d = describe(&v);
        assert_eq!(d[&Dimension::Sustainability], "High (4.3/5.0)");
        assert_eq!(d[&Dimension::Performance], "Medium-High (3.0/5.0)");
        assert_eq!(d[&Dimension::LuxuryComfort], "Medium (2.0/5.0)");
        assert_eq!(d[&Dimension::Versatility], "Low (1.0/5.0)");
        assert_eq!(d[&Dimension::TechSavvy], "High (5.0/5.0)");
        assert_eq!(d.keys().copied().collect::<Vec<_>>(), Dimension::ALL.to_vec());
    }

    #[test]
    fn dominant_traits_keep_dimension_order() {
        let v = TraitVector::new([3.5, 1.0, 4.9, 3.49, 5.0]);
        assert_eq!(
            dominant_traits(&v, 3.5),
            vec![
                Dimension::Sustainability,
                Dimension::LuxuryComfort,
                Dimension::TechSavvy
            ]
        );
        assert!(dominant_traits(&v, 5.1).is_empty());
    }
}
