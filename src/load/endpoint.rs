use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::args::HttpMethod;
use crate::error::ValidationError;

/// One target operation: a method and a path relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Endpoint {
    pub method: HttpMethod,
    pub path: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Builds an endpoint after checking that the path is absolute.
    ///
    /// # Errors
    ///
    /// Returns an error when `path` does not start with `/`.
    pub fn try_new(method: HttpMethod, path: &str) -> Result<Self, ValidationError> {
        let path = path.trim();
        if !path.starts_with('/') {
            return Err(ValidationError::EndpointPathNotAbsolute {
                value: path.to_owned(),
            });
        }
        Ok(Self::new(method, path))
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Accepts `METHOD /path`, or a bare `/path` which means GET.
impl std::str::FromStr for Endpoint {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(ValidationError::InvalidEndpointFormat {
                value: s.to_owned(),
            });
        }
        match value.split_once(char::is_whitespace) {
            Some((method, path)) => {
                let method = method.parse::<HttpMethod>()?;
                Endpoint::try_new(method, path)
            }
            None if value.starts_with('/') => Endpoint::try_new(HttpMethod::Get, value),
            None => Err(ValidationError::InvalidEndpointFormat {
                value: s.to_owned(),
            }),
        }
    }
}

/// Uniform random choice over a fixed, non-empty catalog.
///
/// The selector holds no random state of its own; each worker passes its
/// own generator so that a seeded run is reproducible per worker.
#[derive(Debug)]
pub struct EndpointSelector<T> {
    catalog: Arc<[T]>,
}

impl<T> Clone for EndpointSelector<T> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<T> EndpointSelector<T> {
    /// # Errors
    ///
    /// Returns an error when the catalog is empty.
    pub fn new(catalog: Vec<T>) -> Result<Self, ValidationError> {
        if catalog.is_empty() {
            return Err(ValidationError::EmptyEndpointCatalog);
        }
        Ok(Self {
            catalog: catalog.into(),
        })
    }

    /// Picks one entry uniformly at random. Always `Some` for a selector
    /// built through [`EndpointSelector::new`].
    pub fn select<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng + ?Sized,
    {
        self.catalog.choose(rng)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
