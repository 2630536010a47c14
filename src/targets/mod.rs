//! Target list handling.
//!
//! A target is one HTTP request template. Target files are plain text with
//! one `METHOD URL` pair per line; blank lines and `//` comments are
//! skipped. The attack flow mutates targets only twice: applying the
//! configured header set and, for random ordering, reordering the list
//! before a pass.


use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use url::Url;

use crate::error::{AppError, AppResult, FileError, ValidationError};

/// Methods accepted in target files.
const METHODS: [&str; 8] = [
    "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS", "TRACE",
];

#[derive(Debug, Clone)]
pub struct Target {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Target {
    /// Replace this target's values for every key in `headers`, keeping the
    /// multi-value accumulation the repeated `-H` flags produced.
    pub fn apply_headers(&mut self, headers: &HeaderMap) {
        for key in headers.keys() {
            self.headers.remove(key);
        }
        for (key, value) in headers {
            self.headers.append(key.clone(), value.clone());
        }
    }
}

/// Parse a target list from the contents of `name`.
///
/// # Errors
///
/// Returns a `Targets file:` error for a malformed line, an unsupported
/// method, or an invalid URL.
pub fn read_targets(name: &str, content: &str) -> AppResult<Vec<Target>> {
    let mut targets = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let (method, url) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(method), Some(url), None) => (method, url),
            _ => {
                return Err(AppError::file(FileError::TargetsLine {
                    name: name.to_owned(),
                    line: line.to_owned(),
                }));
            }
        };
        if !METHODS.contains(&method) {
            return Err(AppError::file(FileError::TargetsMethod {
                name: name.to_owned(),
                method: method.to_owned(),
            }));
        }
        let method = Method::from_bytes(method.as_bytes()).map_err(|_| {
            AppError::file(FileError::TargetsMethod {
                name: name.to_owned(),
                method: method.to_owned(),
            })
        })?;
        let url = Url::parse(url).map_err(|err| {
            AppError::file(FileError::TargetsUrl {
                name: name.to_owned(),
                url: url.to_owned(),
                source: err,
            })
        })?;
        targets.push(Target {
            method,
            url,
            headers: HeaderMap::new(),
            body: Vec::new(),
        });
    }
    Ok(targets)
}

/// Build the shared header set from parsed `-H` flag pairs.
///
/// Repeated keys accumulate as HTTP multi-values in flag order.
///
/// # Errors
///
/// Returns a header format error if a pair is not representable as an HTTP
/// header (flag parsing normally rejects these earlier).
pub fn header_set(pairs: &[(String, String)]) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (key, value) in pairs {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
            AppError::validation(ValidationError::InvalidHeaderFormat {
                value: format!("{}: {}", key, value),
            })
        })?;
        let value = HeaderValue::from_str(value).map_err(|_| {
            AppError::validation(ValidationError::InvalidHeaderFormat {
                value: format!("{}: {}", key, value),
            })
        })?;
        headers.append(name, value);
    }
    Ok(headers)
}

/// Reorder the target list with a deterministic RNG seeded by the caller.
pub fn shuffle(targets: &mut [Target], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    targets.shuffle(&mut rng);
}
