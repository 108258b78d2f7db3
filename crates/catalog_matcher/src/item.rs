use core_types::TraitVector;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog document as handed over by the caller: `{ "cars": [...] }`.
///
/// Entries stay untyped until [`CatalogItem::from_value`] validates them,
/// so one malformed entry never fails the whole document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub cars: Vec<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub vector: TraitVector,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        vector: TraitVector,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            vector,
            item_type: None,
            description: None,
            price_range: None,
            year: None,
            features: Vec::new(),
            image: None,
            emoji: None,
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Some(price_range.into());
        self
    }

    /// Validates one raw entry. Requires `id`, `brand` and `model` as
    /// scalars (numbers and booleans are kept as text) and a `vector` of
    /// exactly five numbers; optional attributes of the wrong JSON type are
    /// dropped rather than rejecting the item.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = scalar_text(obj.get("id")?)?;
        let brand = scalar_text(obj.get("brand")?)?;
        let model = scalar_text(obj.get("model")?)?;

        let values = obj
            .get("vector")?
            .as_array()?
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<_>>>()?;
        let vector = TraitVector::from_slice(&values)?;

        Some(Self {
            id,
            brand,
            model,
            vector,
            item_type: text(obj, "type"),
            description: text(obj, "description"),
            price_range: text(obj, "price_range"),
            year: obj.get("year").and_then(Value::as_i64),
            features: obj
                .get("features")
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            image: text(obj, "image"),
            emoji: text(obj, "emoji"),
        })
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}
