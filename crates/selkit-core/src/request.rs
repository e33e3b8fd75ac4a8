use std::collections::HashMap;

use crate::error::{Result, SelkitError};

/// Multi-valued request parameters, keyed by wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    params: HashMap<String, Vec<String>>,
}

fn decode_component(part: &str) -> Result<String> {
    let spaced = part.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .map_err(|e| SelkitError::MalformedForm(format!("{}: {}", part, e)))
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body. Repeated names keep
    /// their submission order.
    pub fn parse_urlencoded(body: &str) -> Result<Self> {
        let mut params = Self::new();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.push(decode_component(name)?, decode_component(value)?);
        }
        Ok(params)
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.entry(name.into()).or_default().push(value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
