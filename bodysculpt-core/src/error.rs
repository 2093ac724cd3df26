use thiserror::Error;

#[derive(Debug, Error)]
pub enum SculptError {
    #[error("The {0} series is empty; at least one record is required")]
    EmptyDataset(&'static str),

    #[error("Unknown measurement field '{0}'")]
    UnknownField(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
