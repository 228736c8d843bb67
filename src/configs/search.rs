use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    /// Results requested per search page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Pagination stops once this many results have been collected.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_page_size() -> u32 {
    20
}

fn default_max_results() -> usize {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_results: default_max_results(),
        }
    }
}
