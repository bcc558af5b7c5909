use crate::load::Endpoint;

use super::HttpMethod;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("loadburst/", env!("CARGO_PKG_VERSION"));

pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Catalog used when neither the CLI nor a config file names endpoints.
const DEFAULT_PATHS: [&str; 4] = ["/", "/catalogo/", "/carrito/", "/admin/"];

pub(crate) fn default_endpoints() -> Vec<Endpoint> {
    DEFAULT_PATHS
        .iter()
        .map(|path| Endpoint::new(HttpMethod::Get, *path))
        .collect()
}
