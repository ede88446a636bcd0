use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Cannot connect to backend server at {base_url}. Make sure it's running.")]
    Unreachable { base_url: String },

    #[error("Unexpected response status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Write rejected by the backend; `message` is shown to the user as-is.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { field: String, message: String },
}

impl InventoryError {
    /// Message suitable for printing to an end user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            InventoryError::ApiError(e) if e.is_timeout() => {
                "The inventory service took too long to respond".to_string()
            }
            InventoryError::ApiError(e) if e.is_decode() => {
                "The inventory service returned data that could not be read".to_string()
            }
            InventoryError::UnexpectedStatus { status: 404, .. } => {
                "The requested resource was not found".to_string()
            }
            InventoryError::ConfigError { .. }
            | InventoryError::MissingConfigError { .. }
            | InventoryError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            InventoryError::ConfigError { .. }
            | InventoryError::MissingConfigError { .. }
            | InventoryError::InvalidConfigValueError { .. } => 3,
            InventoryError::ApiError(_)
            | InventoryError::Unreachable { .. }
            | InventoryError::UnexpectedStatus { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
