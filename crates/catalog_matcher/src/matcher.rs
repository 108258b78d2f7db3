use log::{debug, info, trace};
use serde::Serialize;

use core_types::{TraitVector, similarity_percentage};

use crate::error::CatalogError;
use crate::filter::CatalogFilter;
use crate::item::{CatalogItem, RawCatalog};
use crate::statistics::CatalogStatistics;

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub item: &'a CatalogItem,
    pub match_percentage: f64,
    pub match_score: f64,
}

impl<'a> MatchResult<'a> {
    fn new(item: &'a CatalogItem, match_percentage: f64) -> Self {
        Self {
            item,
            match_percentage,
            match_score: match_percentage / 100.0,
        }
    }
}

/// Validated, read-only catalog plus the similarity queries over it.
#[derive(Clone, Debug)]
pub struct CatalogMatcher {
    items: Vec<CatalogItem>,
    rejected: usize,
}

impl CatalogMatcher {
    pub fn new(raw: RawCatalog) -> Result<Self, CatalogError> {
        let total = raw.cars.len();
        let mut items = Vec::with_capacity(total);
        for (idx, entry) in raw.cars.iter().enumerate() {
            match CatalogItem::from_value(entry) {
                Some(item) => items.push(item),
                None => debug!("dropping catalog entry #{idx}: missing fields or bad vector"),
            }
        }

        let rejected = total - items.len();
        if items.is_empty() {
            return Err(CatalogError::EmptyCatalog { rejected });
        }
        info!("catalog loaded: {} items, {rejected} rejected", items.len());
        Ok(Self { items, rejected })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(raw)?)
    }

    pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyCatalog { rejected: 0 });
        }
        Ok(Self { items, rejected: 0 })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries dropped during validation.
    pub fn rejected_count(&self) -> usize {
        self.rejected
    }

    /// Similarity percentage between a query vector and an item vector.
    pub fn score(user: &[f64], item: &[f64]) -> f64 {
        similarity_percentage(user, item)
    }

    pub fn top_matches(&self, user: &TraitVector, top_n: usize) -> Vec<MatchResult<'_>> {
        rank(self.items.iter(), user, top_n)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn filter(&self, criteria: &CatalogFilter) -> Vec<&CatalogItem> {
        if let Some(min) = criteria.min_match_percentage {
            debug!("min_match_percentage={min} ignored: attribute filter has no query vector");
        }
        self.items
            .iter()
            .filter(|item| criteria.accepts(item))
            .collect()
    }

    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics::from_items(&self.items)
    }

    /// Items closest to the reference item, never including the reference.
    pub fn similar_items(&self, reference_id: &str, top_n: usize) -> Vec<MatchResult<'_>> {
        let Some(reference) = self.get_by_id(reference_id) else {
            return Vec::new();
        };
        let others = self.items.iter().filter(|item| item.id != reference_id);
        rank(others, &reference.vector, top_n)
    }
}

/// Scores candidates against `query` and keeps the best `top_n`.
///
/// Stable sort: equal scores keep catalog order.
fn rank<'a>(
    candidates: impl Iterator<Item = &'a CatalogItem>,
    query: &TraitVector,
    top_n: usize,
) -> Vec<MatchResult<'a>> {
    let mut results = candidates
        .map(|item| {
            let pct = CatalogMatcher::score(query.as_slice(), item.vector.as_slice());
            trace!("{} scored {pct:.2}", item.id);
            MatchResult::new(item, pct)
        })
        .collect::<Vec<_>>();
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results.truncate(top_n);
    results
}
