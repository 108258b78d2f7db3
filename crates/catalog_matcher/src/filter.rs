use crate::item::CatalogItem;

/// Attribute criteria for [`crate::CatalogMatcher::filter`], combined with AND.
///
/// `min_match_percentage` is accepted but has no effect: the filter only
/// looks at catalog attributes and is given no query vector to score against.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogFilter {
    pub min_match_percentage: Option<f64>,
    pub item_type: Option<String>,
    pub price_range: Option<String>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Some(price_range.into());
        self
    }

    pub fn with_min_match(mut self, percentage: f64) -> Self {
        self.min_match_percentage = Some(percentage);
        self
    }

    pub fn accepts(&self, item: &CatalogItem) -> bool {
        if let Some(wanted) = non_empty(&self.item_type) {
            let actual = item.item_type.as_deref().unwrap_or_default();
            if actual.to_lowercase() != wanted.to_lowercase() {
                return false;
            }
        }
        if let Some(wanted) = non_empty(&self.price_range) {
            if item.price_range.as_deref() != Some(wanted) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use core_types::TraitVector;

    use super::CatalogFilter;
    use crate::item::CatalogItem;

    fn item(item_type: Option<&str>, price: Option<&str>) -> CatalogItem {
        let mut item = CatalogItem::new("id", "Brand", "Model", TraitVector::splat(3.0));
        item.item_type = item_type.map(str::to_string);
        item.price_range = price.map(str::to_string);
        item
    }

    #[test]
    fn type_match_ignores_case() {
        let f = CatalogFilter::new().with_type("suv");
        assert!(f.accepts(&item(Some("SUV"), None)));
        assert!(!f.accepts(&item(Some("Sedan"), None)));
        assert!(!f.accepts(&item(None, None)));
    }

    #[test]
    fn price_match_is_exact() {
        let f = CatalogFilter::new().with_price_range("$$");
        assert!(f.accepts(&item(None, Some("$$"))));
        assert!(!f.accepts(&item(None, Some("$$$"))));
    }

    #[test]
    fn empty_criteria_accept_everything() {
        let f = CatalogFilter::new().with_type("").with_min_match(99.0);
        assert!(f.accepts(&item(None, None)));
    }
}
