//! Request parameter resolution.
//!
//! `text` is mandatory and a malformed percent escape anywhere in the form
//! rejects the request. Numeric parameters are lenient: anything absent,
//! malformed or non-positive silently falls back to its default.

use symbol_encoder::EcLevel;
use url::form_urlencoded;

use crate::error::RenderError;

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 256;

/// A validated render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub ec_level: EcLevel,
}

/// Raw request parameters, before validation.
///
/// `form` holds the decoded request body followed by the query string, so
/// body values win when a key appears in both. `query` holds the query
/// string alone.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
    form: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RawParams {
    /// Build from the raw query string and an optional urlencoded body.
    ///
    /// Fails when either part contains a malformed percent escape.
    pub fn from_parts(
        raw_query: Option<&str>,
        form_body: Option<&[u8]>,
    ) -> Result<Self, RenderError> {
        let query = parse_pairs(raw_query.map(str::as_bytes))?;
        let mut form = parse_pairs(form_body)?;
        form.extend(query.iter().cloned());

        Ok(Self { form, query })
    }

    /// Shortcut for a request without a body.
    pub fn from_query(raw_query: &str) -> Result<Self, RenderError> {
        Self::from_parts(Some(raw_query), None)
    }

    fn form_value(&self, key: &str) -> Option<&str> {
        first(&self.form, key)
    }

    fn query_value(&self, key: &str) -> Option<&str> {
        first(&self.query, key)
    }
}

fn parse_pairs(raw: Option<&[u8]>) -> Result<Vec<(String, String)>, RenderError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    check_escapes(raw)?;
    Ok(form_urlencoded::parse(raw).into_owned().collect())
}

/// `form_urlencoded` passes bad escapes through verbatim; reject them instead.
fn check_escapes(raw: &[u8]) -> Result<(), RenderError> {
    let mut start = 0;
    while let Some(pos) = raw[start..].iter().position(|&b| b == b'%') {
        let at = start + pos;
        let valid = raw
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let end = (at + 3).min(raw.len());
            return Err(RenderError::MalformedParams(format!(
                "invalid URL escape {:?}",
                String::from_utf8_lossy(&raw[at..end])
            )));
        }
        start = at + 3;
    }
    Ok(())
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Resolve raw parameters into a [`RenderRequest`].
pub fn resolve(params: &RawParams) -> Result<RenderRequest, RenderError> {
    let text = match params.form_value("text") {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return Err(RenderError::MissingText),
    };

    let width = positive(params.form_value("width")).unwrap_or(DEFAULT_WIDTH);
    let height = positive(params.form_value("height")).unwrap_or(width / 2);

    // The correction level only ever comes from the query string.
    let ec_level = params
        .query_value("level")
        .and_then(|s| s.parse::<i64>().ok())
        .map(EcLevel::from_level)
        .unwrap_or_default();

    Ok(RenderRequest {
        text,
        width,
        height,
        ec_level,
    })
}

fn positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|&n| n > 0)
        .and_then(|n| u32::try_from(n).ok())
}
