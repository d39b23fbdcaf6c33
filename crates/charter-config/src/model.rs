use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores dashboard preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    /// Month labels in the order the monthly chart lists them. Unset leaves the order to the
    /// data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_order: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// JSON trip fixture to load instead of the built-in sample.
    pub trips_path: Option<PathBuf>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            month_order: None,
            trips_path: None,
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Symbol used when printing revenue, falling back to the currency code.
    pub fn currency_symbol(&self) -> &str {
        match self.currency.to_ascii_uppercase().as_str() {
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            _ => &self.currency,
        }
    }
}
