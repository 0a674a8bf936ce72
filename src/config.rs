use crate::constants::{
    ENV_AUTH_KEY, ENV_BASE_URL, ENV_HELP, ENV_STN, ENV_TM1, ENV_TM2, ENV_URL_STYLE,
};
use crate::error::ConfigError;
use crate::models::{QueryParams, UrlStyle};

/// Loads query parameters from the defaults, overridden by `KMA_*` variables
pub fn load_params() -> Result<QueryParams, ConfigError> {
    params_from_lookup(|key| std::env::var(key).ok())
}

/// Reads `KMA_URL_STYLE`, falling back to [`UrlStyle::Verbatim`]
pub fn load_url_style() -> Result<UrlStyle, ConfigError> {
    url_style_from_lookup(|key| std::env::var(key).ok())
}

/// Builds [`QueryParams`] from an arbitrary variable lookup
pub fn params_from_lookup<F>(lookup: F) -> Result<QueryParams, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut params = QueryParams::default();

    let overrides = [
        (ENV_BASE_URL, &mut params.base_url),
        (ENV_TM1, &mut params.start_timestamp),
        (ENV_TM2, &mut params.end_timestamp),
        (ENV_STN, &mut params.station_id),
        (ENV_AUTH_KEY, &mut params.auth_key),
    ];
    for (key, field) in overrides {
        if let Some(value) = lookup(key) {
            *field = value;
        }
    }

    if let Some(value) = lookup(ENV_HELP) {
        params.help_flag = parse_help_flag(&value)?;
    }

    params.validate()?;
    Ok(params)
}

pub fn url_style_from_lookup<F>(lookup: F) -> Result<UrlStyle, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(ENV_URL_STYLE) {
        Some(value) => UrlStyle::parse(&value),
        None => Ok(UrlStyle::default()),
    }
}

fn parse_help_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidHelpFlag(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn no_overrides_gives_defaults() {
        let params = params_from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(params, QueryParams::default());
    }

    #[test]
    fn overrides_replace_only_named_fields() {
        let params = params_from_lookup(lookup_from(&[
            ("KMA_TM1", "202401010000"),
            ("KMA_STN", "108"),
            ("KMA_HELP", "0"),
        ]))
        .unwrap();

        assert_eq!(params.start_timestamp, "202401010000");
        assert_eq!(params.station_id, "108");
        assert!(!params.help_flag);

        let defaults = QueryParams::default();
        assert_eq!(params.base_url, defaults.base_url);
        assert_eq!(params.end_timestamp, defaults.end_timestamp);
        assert_eq!(params.auth_key, defaults.auth_key);
    }

    #[test]
    fn help_flag_accepts_booleans() {
        let params = params_from_lookup(lookup_from(&[("KMA_HELP", "False")])).unwrap();
        assert!(!params.help_flag);
    }

    #[test]
    fn bad_help_flag_is_rejected() {
        let err = params_from_lookup(lookup_from(&[("KMA_HELP", "2")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHelpFlag(v) if v == "2"));
    }

    #[test]
    fn empty_auth_key_is_rejected() {
        let err = params_from_lookup(lookup_from(&[("KMA_AUTH_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("auth_key")));
    }

    #[test]
    fn url_style_defaults_to_verbatim() {
        assert_eq!(
            url_style_from_lookup(lookup_from(&[])).unwrap(),
            UrlStyle::Verbatim
        );
        assert_eq!(
            url_style_from_lookup(lookup_from(&[("KMA_URL_STYLE", "WELL-FORMED")])).unwrap(),
            UrlStyle::WellFormed
        );
        assert!(url_style_from_lookup(lookup_from(&[("KMA_URL_STYLE", "x")])).is_err());
    }
}
