use reqwest::{Method, Url};

use crate::error::HttpError;
use crate::load::Endpoint;

/// An endpoint resolved against the base URL, ready to send.
#[derive(Debug, Clone)]
pub struct RequestTarget {
    pub endpoint: Endpoint,
    pub method: Method,
    pub url: Url,
}

/// Parses and checks the base URL of the target service.
///
/// # Errors
///
/// Returns an error when the URL does not parse or is not http(s).
pub fn parse_base_url(value: &str) -> Result<Url, HttpError> {
    let url = Url::parse(value.trim()).map_err(|source| HttpError::InvalidBaseUrl {
        url: value.to_owned(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(HttpError::UnsupportedScheme {
            url: value.to_owned(),
        }),
    }
}

/// Appends the endpoint path to the base URL verbatim, so a base of
/// `http://host/api` and a path of `/items/` yields `http://host/api/items/`.
///
/// # Errors
///
/// Returns an error when the combined string is not a valid URL.
pub fn resolve_target(base: &Url, endpoint: &Endpoint) -> Result<RequestTarget, HttpError> {
    let base_str = base.as_str().trim_end_matches('/');
    let joined = format!("{}{}", base_str, endpoint.path);
    let url = Url::parse(&joined).map_err(|source| HttpError::JoinUrlFailed {
        url: base.to_string(),
        path: endpoint.path.clone(),
        source,
    })?;
    Ok(RequestTarget {
        endpoint: endpoint.clone(),
        method: endpoint.method.into(),
        url,
    })
}

/// Resolves a whole catalog up front so bad paths fail before any worker runs.
///
/// # Errors
///
/// Returns the first resolution error.
pub fn resolve_targets(base: &Url, endpoints: &[Endpoint]) -> Result<Vec<RequestTarget>, HttpError> {
    endpoints
        .iter()
        .map(|endpoint| resolve_target(base, endpoint))
        .collect()
}
