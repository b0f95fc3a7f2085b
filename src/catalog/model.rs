use serde::{Deserialize, Deserializer};

/// Domain representation of a single catalog entry.
///
/// Immutable once loaded; a reload replaces the whole catalog rather than
/// mutating items in place.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
}

/// A fully loaded catalog: ordered items plus the document's timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub updated_at: String,
    pub items: Vec<CatalogItem>,
}

/// Wire form of the bundled catalog document.
///
/// Schema: `{ "updatedAt": string, "items": [...] }`. Unknown fields are
/// ignored and `price`/`rating` accept either a JSON number or a numeric
/// string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub items: Vec<CatalogRecord>,
}

/// Wire form of a single item record.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub rating: f64,
}

impl From<CatalogRecord> for CatalogItem {
    fn from(record: CatalogRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            category: record.category,
            price: record.price,
            rating: record.rating,
        }
    }
}

/// Accept `12.99` as well as `"12.99"`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
