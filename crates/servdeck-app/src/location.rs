//! Locations inside the panel
//!
//! A [`Location`] keeps the raw string exactly as entered (path, query and
//! fragment) because the admin console bypass compares it verbatim. Route
//! matching works on the decomposed parts.

use percent_encoding::percent_decode_str;
use url::Url;

use servdeck_core::prelude::*;

const SERVER_PREFIX: &str = "/server/";

/// Base console path of a server, `/server/{id}`
pub fn server_base_path(id: &str) -> String {
    format!("{}{}", SERVER_PREFIX, id)
}

/// A location string, e.g. `/server/1a2b3c4d/files/edit#/config.yml`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    raw: String,
}

/// The server portion of a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerMatch {
    /// Decoded short identifier from the path
    pub id: String,
    /// Base path the sub-routes hang off, `/server/{id}` as written
    pub url: String,
    /// Remaining sub-path without surrounding slashes, `""` for the console
    pub rest: String,
}

impl Location {
    /// Parse user input. Accepts an absolute path or a full panel URL, from
    /// which only path, query and fragment are kept.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::invalid_location(input));
        }

        if input.starts_with('/') {
            return Ok(Self {
                raw: input.to_string(),
            });
        }

        let url = Url::parse(input).map_err(|_| Error::invalid_location(input))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_location(input));
        }

        let mut raw = url.path().to_string();
        if let Some(query) = url.query() {
            raw.push('?');
            raw.push_str(query);
        }
        if let Some(fragment) = url.fragment() {
            raw.push('#');
            raw.push_str(fragment);
        }
        Ok(Self { raw })
    }

    /// Console path of a server
    pub fn server(id: &str) -> Self {
        Self {
            raw: server_base_path(id),
        }
    }

    /// The location exactly as entered
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn split_fragment(&self) -> (&str, Option<&str>) {
        match self.raw.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (&self.raw, None),
        }
    }

    /// Path without query or fragment
    pub fn path(&self) -> &str {
        let (before, _) = self.split_fragment();
        before.split_once('?').map_or(before, |(path, _)| path)
    }

    pub fn query(&self) -> Option<&str> {
        let (before, _) = self.split_fragment();
        before.split_once('?').map(|(_, query)| query)
    }

    /// Raw (still percent-encoded) fragment
    pub fn fragment(&self) -> Option<&str> {
        self.split_fragment().1
    }

    /// Match `/server/{id}[/rest]`. Trailing slashes are tolerated.
    pub fn server_match(&self) -> Option<ServerMatch> {
        let after = self.path().strip_prefix(SERVER_PREFIX)?;
        let (raw_id, rest) = after.split_once('/').unwrap_or((after, ""));
        if raw_id.is_empty() {
            return None;
        }

        let id = percent_decode_str(raw_id).decode_utf8_lossy().into_owned();
        Some(ServerMatch {
            id,
            url: server_base_path(raw_id),
            rest: rest.trim_matches('/').to_string(),
        })
    }

    /// Same server with a new sub-path
    pub fn with_sub_path(base_url: &str, sub_path: &str) -> Self {
        if sub_path.is_empty() {
            Self {
                raw: base_url.to_string(),
            }
        } else {
            Self {
                raw: format!("{}/{}", base_url, sub_path),
            }
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
