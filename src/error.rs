/// Failures outside the parser itself. Parsing and matching never fail;
/// these come from obtaining the robots.txt bytes or from configuration.
#[derive(Debug, thiserror::Error)]
pub enum RobotsError {
    #[error("Failed to read robots.txt from {origin}: {source}")]
    UnreadableSource {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
