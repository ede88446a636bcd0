use crate::utils::error::{InventoryError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inventory record as served by the backend.
///
/// Every field is read defensively: a missing, `null` or mistyped value falls
/// back to its empty default instead of failing the surrounding collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub vin: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub make: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub image_urls: Vec<String>,
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Strings pass through, numbers keep their text, anything else is empty.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// Keeps the string entries of an array; a non-array value reads as empty.
fn lenient_string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

impl Vehicle {
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model).trim().to_string()
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [
            self.make.as_str(),
            self.model.as_str(),
            self.vin.as_str(),
            self.description_or_empty(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Body of `POST /vehicles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVehicle {
    pub vin: String,
    pub description: Option<String>,
    pub make: String,
    pub model: String,
    pub image_urls: Vec<String>,
}

/// Raw add-vehicle input, kept exactly as entered so a failed submit can be
/// retried without retyping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleForm {
    pub vin: String,
    pub description: String,
    pub make: String,
    pub model: String,
    pub image_links: String,
}

impl VehicleForm {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("vin", &self.vin, "VIN is required"),
            ("make", &self.make, "Manufacturer name is required"),
            ("model", &self.model, "Model is required"),
        ];

        for (field, value, message) in required {
            if value.trim().is_empty() {
                return Err(InventoryError::ValidationError {
                    field: field.to_string(),
                    message: message.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn to_payload(&self) -> NewVehicle {
        let description = self.description.trim();
        NewVehicle {
            vin: self.vin.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            image_urls: parse_image_links(&self.image_links),
        }
    }
}

/// Splits a comma-separated list of links, trimming each and dropping blanks.
pub fn parse_image_links(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|link| !link.is_empty())
        .map(str::to_string)
        .collect()
}
