//! Shared vector shape for the quiz engine.
//!
//! Every personality vector and every catalog feature vector is a
//! [`TraitVector`]: five scores in canonical [`Dimension`] order on the
//! [`SCALE_MIN`]..=[`SCALE_MAX`] scale.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub const DIMENSIONS: usize = 5;

pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;
pub const SCALE_SPAN: f64 = SCALE_MAX - SCALE_MIN;
pub const NEUTRAL_SCORE: f64 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "Sustainability")]
    Sustainability,
    #[serde(rename = "Performance")]
    Performance,
    #[serde(rename = "Luxury & Comfort")]
    LuxuryComfort,
    #[serde(rename = "Versatility")]
    Versatility,
    #[serde(rename = "Tech-savvy")]
    TechSavvy,
}

impl Dimension {
    pub const ALL: [Dimension; DIMENSIONS] = [
        Dimension::Sustainability,
        Dimension::Performance,
        Dimension::LuxuryComfort,
        Dimension::Versatility,
        Dimension::TechSavvy,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Sustainability => 0,
            Self::Performance => 1,
            Self::LuxuryComfort => 2,
            Self::Versatility => 3,
            Self::TechSavvy => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sustainability => "Sustainability",
            Self::Performance => "Performance",
            Self::LuxuryComfort => "Luxury & Comfort",
            Self::Versatility => "Versatility",
            Self::TechSavvy => "Tech-savvy",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.label()).collect()
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Five scores in canonical dimension order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitVector([f64; DIMENSIONS]);

impl TraitVector {
    pub const fn new(scores: [f64; DIMENSIONS]) -> Self {
        Self(scores)
    }

    pub const fn splat(score: f64) -> Self {
        Self([score; DIMENSIONS])
    }

    pub const fn neutral() -> Self {
        Self::splat(NEUTRAL_SCORE)
    }

    /// Returns `None` unless the slice holds exactly [`DIMENSIONS`] values.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        let scores: [f64; DIMENSIONS] = values.try_into().ok()?;
        Some(Self(scores))
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn as_array(&self) -> &[f64; DIMENSIONS] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Pins every score onto the scale; NaN lands on [`SCALE_MIN`].
    pub fn clamped(self) -> Self {
        Self(self.0.map(|v| {
            if v.is_nan() {
                SCALE_MIN
            } else {
                v.clamp(SCALE_MIN, SCALE_MAX)
            }
        }))
    }

    pub fn scaled(self, multipliers: &[f64; DIMENSIONS]) -> Self {
        let mut out = self.0;
        for (v, m) in out.iter_mut().zip(multipliers) {
            *v *= m;
        }
        Self(out)
    }

    pub fn similarity(&self, other: &TraitVector) -> f64 {
        similarity_percentage(self.as_slice(), other.as_slice())
    }
}

pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Largest distance two `dimensions`-vectors on the shared scale can be apart.
pub fn max_distance(dimensions: usize) -> f64 {
    (dimensions as f64 * SCALE_SPAN.powi(2)).sqrt()
}

/// Distance converted to a similarity percentage in `[0, 100]`.
///
/// Mismatched or empty inputs, and vectors carrying NaN, score `0.0`.
pub fn similarity_percentage(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let distance = euclidean_distance(a, b);
    let similarity = (1.0 - distance / max_distance(a.len())) * 100.0;
    if !similarity.is_finite() {
        return 0.0;
    }
    similarity.clamp(0.0, 100.0)
}
