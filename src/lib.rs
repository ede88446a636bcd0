pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpVehicleApi;
pub use app::{AddVehicleForm, DetailState, DetailView, DirectoryView, LoadState, SubmitOutcome};
pub use config::{toml_config::TomlConfig, InventoryConfig};
pub use domain::{filter_vehicles, parse_image_links, NewVehicle, Vehicle, VehicleForm, VehicleSource};
pub use utils::error::{InventoryError, Result};
