/// Collection resource the admin screen talks to unless told otherwise.
pub const DEFAULT_PRESETS_ENDPOINT: &str = "http://localhost:3000/api/v1/presets";

/// Admin client configuration.
///
/// The endpoint is a fixed literal by default; tests and staging builds
/// construct the config with their own base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Base URL of the collection resource. Items live at `<endpoint>/<id>`.
    pub endpoint: String,
}

impl AdminConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PRESETS_ENDPOINT)
    }
}
