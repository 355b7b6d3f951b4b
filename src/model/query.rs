/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Query-string construction for resource requests
//!
//! Parameters are kept in insertion order. Optional values are included when
//! present, so `Some(0)`, `Some(false)` and `Some("")` all reach the server;
//! only `None` is left out. List values are emitted as repeated keys.

use std::fmt::Display;
use url::form_urlencoded;

/// Ordered set of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter unconditionally
    pub fn push<T: Display>(&mut self, name: &str, value: T) -> &mut Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends a parameter only when the value is present
    pub fn push_opt<T: Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Appends one entry per element under the same key, preserving order
    pub fn push_all<T: Display>(&mut self, name: &str, values: Option<&[T]>) -> &mut Self {
        for value in values.unwrap_or_default() {
            self.push(name, value);
        }
        self
    }

    /// Whether no parameter has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of entries, repeated keys counted individually
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// All values recorded under `name`, in insertion order
    #[must_use]
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Iterates over the `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes as `application/x-www-form-urlencoded`
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}
