// Application layer: page view models built on the domain ports.

pub mod add_vehicle;
#[cfg(feature = "cli")]
pub mod commands;
pub mod detail;
pub mod directory;
pub mod import;
pub mod render;

pub use add_vehicle::{AddVehicleForm, SubmitOutcome};
pub use detail::{DetailState, DetailView};
pub use directory::{DirectoryEvent, DirectoryView, LoadState};
pub use import::{import_vehicles, read_rows, ImportFailure, ImportReport};
pub use render::OutputFormat;
