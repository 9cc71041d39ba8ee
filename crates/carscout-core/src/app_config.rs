/// Production inventory search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://cars.usnews.com/ajax/inventory/used-cars/search";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Inventory search endpoint queried once per page.
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Value sent as the `range` query parameter (miles around the ZIP).
    pub search_radius: String,
    /// Flattened column names dropped from every row. Empty when unset.
    pub excluded_columns: Vec<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            search_radius: "50".to_string(),
            excluded_columns: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}
