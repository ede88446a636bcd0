use crate::app::add_vehicle::AddVehicleForm;
use crate::app::detail::DetailState;
use crate::app::directory::{DirectoryView, LoadState};
use crate::app::import::ImportReport;
use crate::domain::model::Vehicle;
use crate::utils::error::{InventoryError, Result};

const CARD_DESCRIPTION_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

fn truncate(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head.trim_end())
    } else {
        head
    }
}

/// Joins page lines, terminating every line with a newline.
fn page(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn card_lines(position: usize, vehicle: &Vehicle) -> Vec<String> {
    let mut lines = vec![
        format!("{:>3}. {}", position, vehicle.title()),
        format!("     VIN: {}", vehicle.vin),
    ];
    if let Some(description) = vehicle.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!(
            "     {}",
            truncate(description.trim(), CARD_DESCRIPTION_CHARS)
        ));
    }
    let photos = match vehicle.image_urls.len() {
        0 => "No images available".to_string(),
        1 => "1 photo".to_string(),
        n => format!("{} photos", n),
    };
    lines.push(format!("     {} | id: {}", photos, vehicle.id));
    lines
}

/// Text rendering of the directory page for its current state.
pub fn render_directory(view: &DirectoryView, title: &str) -> String {
    let mut lines = vec![title.to_string()];

    match view.state() {
        LoadState::Loading => {
            lines.push("Loading vehicles...".to_string());
            return page(lines);
        }
        LoadState::Empty | LoadState::Error(_) => {
            lines.push("No vehicles in inventory".to_string());
            lines.push("Add your first vehicle with `inventory add`.".to_string());
            return page(lines);
        }
        LoadState::Loaded => {}
    }

    let total = view.all().len();
    let shown = view.visible().len();
    if view.is_searching() {
        lines.push(format!("Showing {} of {} vehicles", shown, total));
    } else {
        lines.push(format!("{} vehicles", total));
    }

    if shown == 0 {
        lines.push(String::new());
        lines.push("No vehicles found".to_string());
        lines.push(format!("No vehicles match \"{}\"", view.query()));
        return page(lines);
    }

    for (index, vehicle) in view.visible().iter().enumerate() {
        lines.push(String::new());
        lines.extend(card_lines(index + 1, vehicle));
    }
    page(lines)
}

/// Machine-readable listing; `Text` falls back to plain cards.
pub fn render_vehicles(vehicles: &[Vehicle], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(vehicles)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "vin", "make", "model", "description", "image_urls"])?;
            for vehicle in vehicles {
                writer.write_record([
                    vehicle.id.as_str(),
                    vehicle.vin.as_str(),
                    vehicle.make.as_str(),
                    vehicle.model.as_str(),
                    vehicle.description_or_empty(),
                    vehicle.image_urls.join(", ").as_str(),
                ])?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| InventoryError::IoError(e.into_error()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        OutputFormat::Text => Ok(page(
            vehicles
                .iter()
                .enumerate()
                .flat_map(|(index, vehicle)| card_lines(index + 1, vehicle))
                .collect(),
        )),
    }
}

pub fn render_detail(state: &DetailState) -> String {
    let vehicle = match state {
        DetailState::Loading => return page(vec!["Loading vehicle...".to_string()]),
        DetailState::NotFound => {
            return page(vec![
                "Vehicle Not Found".to_string(),
                "The vehicle you're looking for doesn't exist or has been removed from the inventory."
                    .to_string(),
            ])
        }
        DetailState::Found(vehicle) => vehicle,
    };

    let description = match vehicle.description.as_deref().map(str::trim) {
        Some(description) if !description.is_empty() => description.to_string(),
        _ => "No description provided.".to_string(),
    };

    let mut lines = vec![
        vehicle.title(),
        "Vehicle Details".to_string(),
        String::new(),
        format!("Manufacturer: {}", vehicle.make),
        format!("Model:        {}", vehicle.model),
        format!("VIN:          {}", vehicle.vin),
        String::new(),
        "Description".to_string(),
        description,
        String::new(),
        "Photos".to_string(),
    ];
    if vehicle.image_urls.is_empty() {
        lines.push("No images available".to_string());
    }
    lines.extend(
        vehicle
            .image_urls
            .iter()
            .enumerate()
            .map(|(index, url)| format!("{:>3}. {}", index + 1, url)),
    );
    page(lines)
}

/// Error banner followed by the values that were entered, so nothing needs
/// retyping.
pub fn render_form_error(form_page: &AddVehicleForm) -> String {
    let mut lines = Vec::new();
    if let Some(error) = form_page.error() {
        lines.push(format!("Error: {}", error));
    }
    let form = &form_page.form;
    lines.extend([
        String::new(),
        "Entered values:".to_string(),
        format!("  VIN:          {}", form.vin),
        format!("  Manufacturer: {}", form.make),
        format!("  Model:        {}", form.model),
        format!("  Description:  {}", form.description),
        format!("  Image links:  {}", form.image_links),
    ]);
    page(lines)
}

pub fn render_import_report(report: &ImportReport) -> String {
    let mut lines = vec![format!(
        "Imported {} vehicles ({} skipped, {} failed)",
        report.created,
        report.skipped,
        report.failed.len()
    )];
    lines.extend(
        report
            .failed
            .iter()
            .map(|failure| format!("  {}: {}", failure.vin, failure.message)),
    );
    page(lines)
}
