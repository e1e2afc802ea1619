//! Application settings configuration.

use serde::{Deserialize, Serialize};

use crate::table::PAGE_SIZE_CHOICES;

use super::{ConfigError, Result};

/// Pages the dashboard can start on.
pub const PAGE_NAMES: [&str; 5] = ["overview", "orders", "products", "customers", "analytics"];

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The UI theme to use.
    pub theme: String,
    /// Whether to use vim-style keybindings.
    pub vim_mode: bool,
    /// Default rows per table page.
    pub page_size: usize,
    /// Page shown on startup.
    pub start_page: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            vim_mode: true,
            page_size: 10,
            start_page: "overview".to_string(),
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// Checks that the page size is one of the selectable choices and the
    /// start page names a real page.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if !PAGE_SIZE_CHOICES.contains(&self.page_size) {
            return Err(ConfigError::ValidationError(format!(
                "page_size {} is not one of {:?}",
                self.page_size, PAGE_SIZE_CHOICES
            )));
        }

        if !PAGE_NAMES.contains(&self.start_page.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "start_page '{}' is not one of {:?}",
                self.start_page, PAGE_NAMES
            )));
        }

        Ok(())
    }
}
