use crate::domain::model::{NewVehicle, Vehicle};
use crate::domain::ports::{ConfigProvider, VehicleSource};
use crate::utils::error::{InventoryError, Result};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// reqwest-backed client for the inventory REST backend.
#[derive(Debug, Clone)]
pub struct HttpVehicleApi {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

impl HttpVehicleApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(InventoryError::ConfigError {
                message: format!("'{}' cannot be used as an API base URL", base_url),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| InventoryError::ConfigError {
                    message: format!("'{}' cannot be used as an API base URL", self.base_url),
                })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn send_error(&self, error: reqwest::Error) -> InventoryError {
        if error.is_connect() {
            InventoryError::Unreachable {
                base_url: self.base_url.to_string(),
            }
        } else {
            InventoryError::ApiError(error)
        }
    }

    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        tracing::debug!("API response status: {}", response.status());
        Ok(response)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(&["health"])?;
        let response = self.get(url.clone()).await?;

        if !response.status().is_success() {
            return Err(InventoryError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl VehicleSource for HttpVehicleApi {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        let url = self.endpoint(&["vehicles"])?;
        let response = self.get(url.clone()).await?;

        if !response.status().is_success() {
            return Err(InventoryError::UnexpectedStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let vehicles: Vec<Vehicle> = response.json().await?;
        tracing::debug!("Fetched {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    async fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>> {
        let url = self.endpoint(&["vehicles", id])?;
        let response = self.get(url.clone()).await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(InventoryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }

    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle> {
        let url = self.endpoint(&["vehicles"])?;
        tracing::debug!("POST {} (vin={})", url, vehicle.vin);

        let response = self
            .client
            .post(url)
            .json(vehicle)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Unreadable error bodies fall back to the generic message.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Err(InventoryError::Rejected {
            status: status.as_u16(),
            message: rejection_message(status, &body),
        })
    }
}

/// User-facing text for a rejected create: the `detail` field verbatim when it
/// is a string, JSON text for any other value, or a generic fallback when it is
/// absent or falsy.
pub fn rejection_message(status: StatusCode, body: &Value) -> String {
    match body.get("detail") {
        Some(detail) if !is_falsy(detail) => match detail {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
        _ => format!("Failed to add vehicle ({})", status.as_u16()),
    }
}

/// `null`, `false`, zero and the empty string carry no message.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_message_string_detail() {
        let body = json!({"detail": "VIN already exists"});
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, &body),
            "VIN already exists"
        );
    }

    #[test]
    fn test_rejection_message_structured_detail() {
        let body = json!({"detail": [{"loc": ["body", "vin"], "msg": "too short"}]});
        let message = rejection_message(StatusCode::UNPROCESSABLE_ENTITY, &body);
        assert_eq!(message, r#"[{"loc":["body","vin"],"msg":"too short"}]"#);
    }

    #[test]
    fn test_rejection_message_fallback() {
        assert_eq!(
            rejection_message(StatusCode::INTERNAL_SERVER_ERROR, &Value::Null),
            "Failed to add vehicle (500)"
        );
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, &json!({"detail": ""})),
            "Failed to add vehicle (400)"
        );
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, &json!({"error": "nope"})),
            "Failed to add vehicle (400)"
        );
    }

    #[test]
    fn test_rejection_message_falsy_detail_uses_fallback() {
        for detail in [json!(false), json!(0), json!(0.0)] {
            assert_eq!(
                rejection_message(StatusCode::BAD_REQUEST, &json!({ "detail": detail })),
                "Failed to add vehicle (400)"
            );
        }
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, &json!({"detail": true})),
            "true"
        );
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, &json!({"detail": 409})),
            "409"
        );
    }

    #[test]
    fn test_endpoint_encodes_id_and_keeps_base_path() {
        let api = HttpVehicleApi::new("http://localhost:8000/api/", Duration::from_secs(5)).unwrap();
        let url = api.endpoint(&["vehicles", "a b/c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/vehicles/a%20b%2Fc");

        let api = HttpVehicleApi::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        assert_eq!(
            api.endpoint(&["vehicles"]).unwrap().as_str(),
            "http://localhost:8000/vehicles"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(HttpVehicleApi::new("mailto:sales@example.com", Duration::from_secs(5)).is_err());
        assert!(HttpVehicleApi::new("not a url", Duration::from_secs(5)).is_err());
    }
}
