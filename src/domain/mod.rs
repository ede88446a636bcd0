// Domain layer: inventory records, the search filter and the ports adapters implement.

pub mod model;
pub mod ports;
pub mod search;

pub use model::{parse_image_links, NewVehicle, Vehicle, VehicleForm};
pub use ports::{ConfigProvider, VehicleSource};
pub use search::filter_vehicles;
