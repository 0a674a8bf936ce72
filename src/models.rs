use std::fmt;

use crate::constants::{
    DEFAULT_AUTH_KEY, DEFAULT_HELP, DEFAULT_STN, DEFAULT_TM1, DEFAULT_TM2, KMA_SFCTM_URL,
};
use crate::error::ConfigError;

// ============================================================================
// Request Models
// ============================================================================

/// Everything needed to build one `kma_sfctm3.php` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub base_url: String,
    /// Start of the observation window, `YYYYMMDDHHmm` or `YYYYMMDD`
    pub start_timestamp: String,
    /// End of the observation window, same format as the start
    pub end_timestamp: String,
    pub station_id: String,
    pub help_flag: bool,
    pub auth_key: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            base_url: KMA_SFCTM_URL.to_string(),
            start_timestamp: DEFAULT_TM1.to_string(),
            end_timestamp: DEFAULT_TM2.to_string(),
            station_id: DEFAULT_STN.to_string(),
            help_flag: DEFAULT_HELP,
            auth_key: DEFAULT_AUTH_KEY.to_string(),
        }
    }
}

impl QueryParams {
    /// Rejects any empty string field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("base_url", &self.base_url),
            ("start_timestamp", &self.start_timestamp),
            ("end_timestamp", &self.end_timestamp),
            ("station_id", &self.station_id),
            ("auth_key", &self.auth_key),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptyField(name)),
            None => Ok(()),
        }
    }

    /// The help flag as it appears on the wire
    pub fn help_value(&self) -> &'static str {
        if self.help_flag {
            "1"
        } else {
            "0"
        }
    }
}

/// How the request URL is assembled from [`QueryParams`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlStyle {
    /// Fragments appended to the base URL as-is, with no keys or separators
    #[default]
    Verbatim,
    /// Endpoint plus a keyed, percent-encoded query string
    WellFormed,
}

impl UrlStyle {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(Self::Verbatim),
            "well-formed" | "well_formed" | "wellformed" => Ok(Self::WellFormed),
            _ => Err(ConfigError::UnknownUrlStyle(value.to_string())),
        }
    }
}

impl fmt::Display for UrlStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbatim => f.write_str("verbatim"),
            Self::WellFormed => f.write_str("well-formed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(QueryParams::default().validate().is_ok());
    }

    #[test]
    fn blank_station_is_rejected() {
        let params = QueryParams {
            station_id: "  ".to_string(),
            ..QueryParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::EmptyField("station_id"))
        ));
    }

    #[test]
    fn help_flag_renders_as_digit() {
        let mut params = QueryParams::default();
        assert_eq!(params.help_value(), "1");
        params.help_flag = false;
        assert_eq!(params.help_value(), "0");
    }

    #[test]
    fn url_style_parsing() {
        assert_eq!(UrlStyle::parse("Verbatim").unwrap(), UrlStyle::Verbatim);
        assert_eq!(UrlStyle::parse("well-formed").unwrap(), UrlStyle::WellFormed);
        assert!(matches!(
            UrlStyle::parse("pretty"),
            Err(ConfigError::UnknownUrlStyle(v)) if v == "pretty"
        ));
    }
}
