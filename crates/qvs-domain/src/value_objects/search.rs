//! Search-Related Value Objects
//!
//! The request shape shared by every transport encoding, the request-scoped
//! match, and the response returned to callers.

use crate::constants::{TOP_K_DEFAULT, TOP_K_MAX, TOP_K_MIN};
use crate::error::{Error, Result};
use crate::value_objects::IndexedItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Requested result count as it arrived on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KParam {
    /// Caller did not send `k`
    #[default]
    Absent,
    /// Caller sent a number (fractions truncated toward zero)
    Number(i64),
    /// Caller sent something that is not a number
    Invalid,
}

impl KParam {
    /// Interpret a textual `k`
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(n) = raw.parse::<i64>() {
            return Self::Number(n);
        }
        match raw.parse::<f64>() {
            Ok(f) => Self::from_float(f),
            Err(_) => Self::Invalid,
        }
    }

    /// Interpret a JSON `k`
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Self::Number)
                .or_else(|| n.as_f64().map(Self::from_float))
                .unwrap_or(Self::Invalid),
            Some(Value::String(s)) => Self::parse(s),
            Some(_) => Self::Invalid,
        }
    }

    fn from_float(f: f64) -> Self {
        if f.is_finite() {
            Self::Number(f.trunc() as i64)
        } else {
            Self::Invalid
        }
    }
}

/// Value Object: Search Query
///
/// Both request encodings (JSON body and form fields) are normalized into
/// this shape before any processing happens.
///
/// ## Example
///
/// ```rust
/// use qvs_domain::{KParam, SearchQuery};
///
/// let from_json = SearchQuery::from_json_body(r#"{"q_b64":"AQID","k":"5"}"#);
/// let from_form = SearchQuery::from_form(Some("AQID".to_string()), Some("5".to_string()));
/// assert_eq!(from_json, from_form);
/// assert_eq!(from_json.k, KParam::Number(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Base64-encoded quantized query vector
    pub q_b64: Option<String>,
    /// Requested result count
    pub k: KParam,
}

impl SearchQuery {
    /// Create a query for an encoded vector
    pub fn new(q_b64: impl Into<String>, k: KParam) -> Self {
        Self {
            q_b64: Some(q_b64.into()),
            k,
        }
    }

    /// Adapter for structured JSON payloads
    ///
    /// A body that does not parse as a JSON object yields a query with no
    /// vector, which the query contract reports as missing input.
    pub fn from_json_body(body: &str) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };
        let q_b64 = match fields.get("q_b64") {
            Some(Value::String(s)) => non_empty(s.clone()),
            _ => None,
        };
        Self {
            q_b64,
            k: KParam::from_json(fields.get("k")),
        }
    }

    /// Adapter for form-encoded fields
    pub fn from_form(q_b64: Option<String>, k: Option<String>) -> Self {
        Self {
            q_b64: q_b64.and_then(non_empty),
            k: k.as_deref().map_or(KParam::Absent, KParam::parse),
        }
    }

    /// Length in bytes of the encoded vector, for diagnostics
    pub fn encoded_len(&self) -> usize {
        self.q_b64.as_ref().map_or(0, String::len)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Operational bounds for the result count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopKBounds {
    /// Smallest result count
    pub min: usize,
    /// Result count when none is requested
    pub default: usize,
    /// Largest result count
    pub max: usize,
}

impl TopKBounds {
    /// Create bounds, enforcing `1 <= min <= default <= max <= 50`
    pub fn new(min: usize, default: usize, max: usize) -> Result<Self> {
        if min < TOP_K_MIN || max > TOP_K_MAX || min > default || default > max {
            return Err(Error::config(format!(
                "top-k bounds must satisfy {TOP_K_MIN} <= min ({min}) <= default ({default}) \
                 <= max ({max}) <= {TOP_K_MAX}"
            )));
        }
        Ok(Self { min, default, max })
    }
}

impl Default for TopKBounds {
    fn default() -> Self {
        Self {
            min: TOP_K_MIN,
            default: TOP_K_DEFAULT,
            max: TOP_K_MAX,
        }
    }
}

/// Request-scoped pairing of an indexed item and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    /// The scored item
    pub item: &'a IndexedItem,
    /// Integer dot product against the query
    pub score: i32,
}

/// A match as returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchMatch {
    /// Item identifier
    pub id: String,
    /// Image path or URL
    pub image: String,
    /// Display title
    pub title: String,
    /// Item price
    pub price: f64,
    /// Free-text description
    pub description: String,
    /// Similarity score (higher is more similar)
    pub score: i32,
}

impl From<Match<'_>> for SearchMatch {
    fn from(m: Match<'_>) -> Self {
        Self {
            id: m.item.id.clone(),
            image: m.item.image.clone(),
            title: m.item.title.clone(),
            price: m.item.price,
            description: m.item.description.clone(),
            score: m.score,
        }
    }
}

/// Successful search response, ordered by descending score
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// Ranked matches
    pub matches: Vec<SearchMatch>,
}
