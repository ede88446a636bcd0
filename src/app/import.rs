use crate::domain::model::VehicleForm;
use crate::domain::ports::VehicleSource;
use crate::utils::error::Result;
use std::collections::{HashMap, HashSet};
use std::io::Read;

const VIN_COLUMNS: &[&str] = &["VIN", "vin"];
const MAKE_COLUMNS: &[&str] = &["Make", "make"];
const MODEL_COLUMNS: &[&str] = &["Model", "model"];
const DESCRIPTION_COLUMNS: &[&str] = &["WebAdDescription", "Description", "description"];
const IMAGE_COLUMNS: &[&str] = &["PhotoURLs", "image_urls"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFailure {
    pub vin: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: Vec<ImportFailure>,
}

fn column(row: &HashMap<String, String>, names: &[&str]) -> String {
    names
        .iter()
        .find_map(|name| row.get(*name).filter(|value| !value.trim().is_empty()))
        .cloned()
        .unwrap_or_default()
}

/// Parses an inventory export into add-vehicle forms, one per CSV row.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<VehicleForm>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let mut forms = Vec::new();
    for record in csv_reader.deserialize::<HashMap<String, String>>() {
        let row = record?;
        forms.push(VehicleForm {
            vin: column(&row, VIN_COLUMNS),
            description: column(&row, DESCRIPTION_COLUMNS),
            make: column(&row, MAKE_COLUMNS),
            model: column(&row, MODEL_COLUMNS),
            image_links: column(&row, IMAGE_COLUMNS),
        });
    }
    Ok(forms)
}

/// Creates every row whose VIN is neither blank nor already known. VINs are
/// compared after trimming, against the current backend listing and against
/// earlier rows of the same batch.
pub async fn import_vehicles<S: VehicleSource + ?Sized>(
    source: &S,
    rows: Vec<VehicleForm>,
) -> Result<ImportReport> {
    let mut known: HashSet<String> = source
        .list_vehicles()
        .await?
        .into_iter()
        .map(|vehicle| vehicle.vin.trim().to_string())
        .collect();
    tracing::info!("{} VINs already in inventory", known.len());

    let mut report = ImportReport::default();
    for form in rows {
        let vin = form.vin.trim().to_string();
        if vin.is_empty() || known.contains(&vin) {
            report.skipped += 1;
            continue;
        }

        if let Err(e) = form.validate() {
            report.failed.push(ImportFailure {
                vin,
                message: e.to_string(),
            });
            continue;
        }

        match source.create_vehicle(&form.to_payload()).await {
            Ok(_) => {
                report.created += 1;
                known.insert(vin);
            }
            Err(e) => {
                tracing::warn!("Import of {} failed: {}", vin, e);
                report.failed.push(ImportFailure {
                    vin,
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        "Import finished: {} created, {} skipped, {} failed",
        report.created,
        report.skipped,
        report.failed.len()
    );
    Ok(report)
}
