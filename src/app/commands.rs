use crate::adapters::http::HttpVehicleApi;
use crate::app::add_vehicle::{AddVehicleForm, SubmitOutcome};
use crate::app::detail::{DetailState, DetailView};
use crate::app::directory::DirectoryView;
use crate::app::import::{import_vehicles, read_rows};
use crate::app::render::{self, OutputFormat};
use crate::config::cli::Commands;
use crate::config::InventoryConfig;
use crate::utils::error::{InventoryError, Result};
use std::io::Write;

/// Exit code for a backend that could not be reached or answered badly.
pub const EXIT_BACKEND: i32 = 2;
/// Exit code for a missing vehicle or a rejected submission.
pub const EXIT_FAILURE: i32 = 1;

/// Runs one subcommand, writing pages to `out` and diagnostics to `err`.
///
/// Returns the process exit code; `Err` is left for failures the caller maps
/// through [`InventoryError::exit_code`].
pub async fn run<O, E>(
    command: Option<Commands>,
    config: &InventoryConfig,
    out: &mut O,
    err: &mut E,
) -> Result<i32>
where
    O: Write,
    E: Write,
{
    let api = HttpVehicleApi::from_config(config)?;
    tracing::info!("Using inventory API at {}", api.base_url());

    let command = command.unwrap_or(Commands::List {
        search: None,
        format: OutputFormat::Text,
        strict: false,
    });

    match command {
        Commands::List {
            search,
            format,
            strict,
        } => {
            let mut view = DirectoryView::new();
            view.load(&api).await;

            if let (true, Some(reason)) = (strict, view.fetch_error()) {
                writeln!(err, "❌ Could not load inventory: {}", reason)?;
                return Ok(EXIT_BACKEND);
            }

            if let Some(query) = search {
                view.set_query(query);
            }

            match format {
                OutputFormat::Text => write!(out, "{}", render::render_directory(&view, &config.title))?,
                other => writeln!(out, "{}", render::render_vehicles(view.visible(), other)?)?,
            }
            Ok(0)
        }
        Commands::Show { id, format } => {
            let mut view = DetailView::new(id);
            view.load(&api).await;

            match (view.state(), format) {
                (DetailState::Found(vehicle), OutputFormat::Json | OutputFormat::Csv) => {
                    let listing = render::render_vehicles(std::slice::from_ref(vehicle), format)?;
                    writeln!(out, "{}", listing)?;
                    Ok(0)
                }
                (DetailState::Found(_), OutputFormat::Text) => {
                    write!(out, "{}", render::render_detail(view.state()))?;
                    Ok(0)
                }
                _ => {
                    write!(out, "{}", render::render_detail(view.state()))?;
                    Ok(EXIT_FAILURE)
                }
            }
        }
        Commands::Add(args) => {
            let mut page = AddVehicleForm::new(args.into());

            match page.submit(&api).await {
                SubmitOutcome::Created(vehicle) => {
                    writeln!(out, "✅ Added {} ({})", vehicle.title(), vehicle.id)?;

                    let mut view = DirectoryView::new();
                    view.load(&api).await;
                    write!(out, "\n{}", render::render_directory(&view, &config.title))?;
                    Ok(0)
                }
                SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => {
                    write!(err, "{}", render::render_form_error(&page))?;
                    Ok(EXIT_FAILURE)
                }
            }
        }
        Commands::Import { file } => {
            let reader = std::fs::File::open(&file).map_err(InventoryError::IoError)?;
            let rows = read_rows(reader)?;
            tracing::info!("Read {} rows from {}", rows.len(), file.display());

            let report = import_vehicles(&api, rows).await?;
            write!(out, "{}", render::render_import_report(&report))?;
            Ok(if report.failed.is_empty() { 0 } else { EXIT_FAILURE })
        }
        Commands::Health => {
            let health = api.health().await?;
            if health.is_ok() {
                writeln!(out, "✅ Inventory API is healthy at {}", api.base_url())?;
                Ok(0)
            } else {
                writeln!(out, "⚠️  Inventory API reported status '{}'", health.status)?;
                Ok(EXIT_BACKEND)
            }
        }
    }
}
