use crate::app::render::OutputFormat;
use crate::domain::model::VehicleForm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "inventory")]
#[command(about = "Browse and manage a dealership's vehicle inventory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to TOML configuration file (default: ./inventory.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Inventory API base URL, overrides the configuration file
    #[arg(long, global = true, env = "INVENTORY_API_URL")]
    pub api_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List vehicles, optionally filtered by a search query
    #[command(alias = "ls")]
    List {
        /// Match against make, model, VIN and description
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Exit with an error instead of showing an empty inventory when the
        /// backend cannot be reached
        #[arg(long)]
        strict: bool,
    },

    /// Show a single vehicle
    #[command(alias = "view")]
    Show {
        id: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Add a vehicle to the inventory
    Add(AddArgs),

    /// Bulk-create vehicles from a CSV export
    Import {
        file: PathBuf,
    },

    /// Check that the inventory API is up
    Health,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub vin: String,

    /// Manufacturer
    #[arg(long, default_value = "")]
    pub make: String,

    #[arg(long, default_value = "")]
    pub model: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Comma-separated image URLs
    #[arg(long, default_value = "")]
    pub images: String,
}

impl From<AddArgs> for VehicleForm {
    fn from(args: AddArgs) -> Self {
        VehicleForm {
            vin: args.vin,
            description: args.description,
            make: args.make,
            model: args.model,
            image_links: args.images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_search() {
        let cli = Cli::parse_from(["inventory", "list", "--search", "jeep", "--format", "json"]);
        match cli.command {
            Some(Commands::List { search, format, strict }) => {
                assert_eq!(search.as_deref(), Some("jeep"));
                assert_eq!(format, OutputFormat::Json);
                assert!(!strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_add_args_become_form() {
        let cli = Cli::parse_from([
            "inventory",
            "add",
            "--vin",
            "XYZ123",
            "--make",
            "Ford",
            "--model",
            "F150",
            "--images",
            "a.jpg, b.jpg",
        ]);
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add command");
        };
        let form = VehicleForm::from(args);
        assert_eq!(form.vin, "XYZ123");
        assert_eq!(form.description, "");
        assert_eq!(form.image_links, "a.jpg, b.jpg");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["inventory", "health", "--api-url", "http://x:1", "-v"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://x:1"));
        assert!(cli.verbose);
    }
}
