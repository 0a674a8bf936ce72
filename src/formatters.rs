use reqwest::Url;

use crate::error::ConfigError;
use crate::models::{QueryParams, UrlStyle};

/// Builds the request URL in the requested style
pub fn format_url(params: &QueryParams, style: UrlStyle) -> Result<String, ConfigError> {
    match style {
        UrlStyle::Verbatim => Ok(format_verbatim_url(params)),
        UrlStyle::WellFormed => format_well_formed_url(params),
    }
}

/// Appends the fragments to the base URL exactly as the field values read.
///
/// Only the station fragment carries a key and a trailing separator; the
/// timestamps, help flag and auth key go in bare.
pub fn format_verbatim_url(params: &QueryParams) -> String {
    let mut url = String::with_capacity(
        params.base_url.len()
            + params.start_timestamp.len()
            + params.end_timestamp.len()
            + params.station_id.len()
            + params.auth_key.len()
            + 6,
    );
    url.push_str(&params.base_url);
    url.push_str(&params.start_timestamp);
    url.push_str(&params.end_timestamp);
    url.push_str("stn=");
    url.push_str(&params.station_id);
    url.push('&');
    url.push_str(params.help_value());
    url.push_str(&params.auth_key);
    url
}

/// Replaces any query on the base URL with a keyed `tm1..authKey` query
pub fn format_well_formed_url(params: &QueryParams) -> Result<String, ConfigError> {
    let mut url = Url::parse(&params.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: params.base_url.clone(),
        reason: e.to_string(),
    })?;

    url.set_query(None);
    url.query_pairs_mut()
        .append_pair("tm1", &params.start_timestamp)
        .append_pair("tm2", &params.end_timestamp)
        .append_pair("stn", &params.station_id)
        .append_pair("help", params.help_value())
        .append_pair("authKey", &params.auth_key);

    Ok(url.into())
}

/// Hides the auth key before a URL goes into a log line
pub fn mask_auth_key(url: &str, auth_key: &str) -> String {
    if auth_key.is_empty() {
        return url.to_string();
    }
    url.replace(auth_key, "***")
}
