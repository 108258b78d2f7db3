use std::collections::BTreeMap;

use core_types::{DIMENSIONS, Dimension, TraitVector};
use serde::Serialize;

use crate::item::CatalogItem;

const UNKNOWN: &str = "Unknown";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogStatistics {
    pub total_items: usize,
    /// Absent for an empty catalog.
    #[serde(flatten)]
    pub breakdown: Option<CatalogBreakdown>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogBreakdown {
    pub types_distribution: BTreeMap<String, usize>,
    pub brands_distribution: BTreeMap<String, usize>,
    pub price_ranges_distribution: BTreeMap<String, usize>,
    pub average_vector: TraitVector,
    pub dimensions: Vec<&'static str>,
}

impl CatalogStatistics {
    pub fn from_items(items: &[CatalogItem]) -> Self {
        if items.is_empty() {
            return Self {
                total_items: 0,
                breakdown: None,
            };
        }

        let mut types = BTreeMap::new();
        let mut brands = BTreeMap::new();
        let mut prices = BTreeMap::new();
        let mut sums = [0.0; DIMENSIONS];

        for item in items {
            bump(&mut types, item.item_type.as_deref());
            bump(&mut brands, Some(item.brand.as_str()));
            bump(&mut prices, item.price_range.as_deref());
            for (sum, v) in sums.iter_mut().zip(item.vector.as_array()) {
                *sum += v;
            }
        }

        let count = items.len() as f64;
        Self {
            total_items: items.len(),
            breakdown: Some(CatalogBreakdown {
                types_distribution: types,
                brands_distribution: brands,
                price_ranges_distribution: prices,
                average_vector: TraitVector::new(sums.map(|s| s / count)),
                dimensions: Dimension::labels(),
            }),
        }
    }
}

fn bump(counts: &mut BTreeMap<String, usize>, key: Option<&str>) {
    *counts
        .entry(key.unwrap_or(UNKNOWN).to_string())
        .or_insert(0) += 1;
}
