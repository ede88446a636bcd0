use crate::domain::model::{NewVehicle, Vehicle};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// Read/write access to the vehicle collection held by the backend.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>>;
    /// `Ok(None)` when the backend reports the id as unknown.
    async fn get_vehicle(&self, id: &str) -> Result<Option<Vehicle>>;
    async fn create_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle>;
}
