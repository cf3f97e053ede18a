use serde::{Deserialize, Serialize};

use crate::enums::CollectionKind;

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Connection settings injected into the loaders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Optional overrides, e.g. taken from the page query string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfigOverrides {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
}

impl ApiConfig {
    /// Applies overrides on top of the defaults.
    /// Blank bases and a zero limit are ignored; trailing slashes are trimmed.
    pub fn with_overrides(overrides: ApiConfigOverrides) -> Self {
        let mut config = Self::default();

        if let Some(base) = overrides.api_base {
            let base = base.trim().trim_end_matches('/');
            if !base.is_empty() {
                config.base_url = base.to_string();
            }
        }

        if let Some(limit) = overrides.limit.filter(|l| *l > 0) {
            config.page_size = limit;
        }

        config
    }

    /// `{base}/{collection}?limit={page_size}`
    pub fn collection_url(&self, kind: CollectionKind) -> String {
        format!("{}/{}?limit={}", self.base_url, kind.path(), self.page_size)
    }
}
