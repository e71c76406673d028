//! Remote bounds fetching.
//!
//! `/limits` supplies continuous bounds, `/range` a fixed-value list. Bodies
//! are validated before they reach the engine and any failure is replaced by
//! the fallbacks in [`crate::config`].

use crate::config::{
    API_URL, FALLBACK_FIXED_VALUES, FALLBACK_MAX, FALLBACK_MIN, LIMITS_ENDPOINT, RANGE_ENDPOINT,
};
use crate::{BoundsError, RangeBounds};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Body of `GET /limits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeLimits {
    pub min: f64,
    pub max: f64,
}

/// Body of `GET /range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeArray {
    pub range: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Server answered with a non-success status.
    Status(u16),
    /// The request never produced a readable body.
    Network(String),
    /// The body did not match the expected shape or bounds contract.
    Schema(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code) => write!(f, "Request failed with status {}", code),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Schema(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Schema(e.to_string())
    }
}

impl From<BoundsError> for ApiError {
    fn from(e: BoundsError) -> Self {
        ApiError::Schema(e.to_string())
    }
}

/// Validate a `/limits` body into continuous bounds.
pub fn parse_limits(body: &str) -> Result<RangeBounds, ApiError> {
    let data: RangeLimits = serde_json::from_str(body)?;
    Ok(RangeBounds::continuous(data.min, data.max)?)
}

/// Validate a `/range` body into fixed-value bounds.
pub fn parse_range(body: &str) -> Result<RangeBounds, ApiError> {
    let data: RangeArray = serde_json::from_str(body)?;
    Ok(RangeBounds::fixed(data.range)?)
}

pub fn fallback_limits() -> RangeBounds {
    RangeBounds::Continuous {
        min: FALLBACK_MIN,
        max: FALLBACK_MAX,
    }
}

pub fn fallback_range() -> RangeBounds {
    RangeBounds::Fixed(FALLBACK_FIXED_VALUES.to_vec())
}

pub fn limits_or_fallback(result: Result<RangeBounds, ApiError>) -> RangeBounds {
    result.unwrap_or_else(|e| {
        warn!("Falling back to default limits: {}", e);
        fallback_limits()
    })
}

pub fn range_or_fallback(result: Result<RangeBounds, ApiError>) -> RangeBounds {
    result.unwrap_or_else(|e| {
        warn!("Falling back to default fixed values: {}", e);
        fallback_range()
    })
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

async fn fetch_text(url: &str) -> Result<String, ApiError> {
    let response_value = JsFuture::from(gloo_utils::window().fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response_value.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| ApiError::Network("response body is not text".to_string()))
}

pub async fn get_limits() -> Result<RangeBounds, ApiError> {
    let body = fetch_text(&format!("{}{}", API_URL, LIMITS_ENDPOINT)).await?;
    parse_limits(&body)
}

pub async fn get_range() -> Result<RangeBounds, ApiError> {
    let body = fetch_text(&format!("{}{}", API_URL, RANGE_ENDPOINT)).await?;
    parse_range(&body)
}

/// Fetch both endpoints concurrently, substituting fallbacks on failure.
///
/// Returns `(continuous, fixed)` bounds.
pub async fn load_bounds() -> (RangeBounds, RangeBounds) {
    let (limits, range) = futures::join!(get_limits(), get_range());
    let bounds = (limits_or_fallback(limits), range_or_fallback(range));
    info!(
        "Loaded bounds: continuous {}..{}, fixed {}..{}",
        bounds.0.min(),
        bounds.0.max(),
        bounds.1.min(),
        bounds.1.max()
    );
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_body_parses() {
        assert_eq!(
            parse_limits(r#"{"min": 1, "max": 100}"#),
            Ok(RangeBounds::Continuous {
                min: 1.0,
                max: 100.0
            })
        );
    }

    #[test]
    fn limits_shape_errors_are_schema_errors() {
        assert!(matches!(
            parse_limits(r#"{"min": "1", "max": 100}"#),
            Err(ApiError::Schema(_))
        ));
        assert!(matches!(parse_limits(r#"{"min": 1}"#), Err(ApiError::Schema(_))));
        assert!(matches!(parse_limits("not json"), Err(ApiError::Schema(_))));
    }

    #[test]
    fn inverted_limits_are_rejected() {
        assert!(matches!(
            parse_limits(r#"{"min": 100, "max": 1}"#),
            Err(ApiError::Schema(_))
        ));
    }

    #[test]
    fn sub_step_limits_fall_back() {
        let result = parse_limits(r#"{"min": 1, "max": 1.5}"#);
        assert!(matches!(result, Err(ApiError::Schema(_))));
        assert_eq!(limits_or_fallback(result), fallback_limits());
    }

    #[test]
    fn range_body_parses() {
        let bounds = parse_range(r#"{"range": [1.99, 5.99, 10.99]}"#).unwrap();
        assert_eq!(bounds.fixed_values(), Some(&[1.99, 5.99, 10.99][..]));
    }

    #[test]
    fn short_or_unsorted_range_is_rejected() {
        assert!(matches!(
            parse_range(r#"{"range": [1.99]}"#),
            Err(ApiError::Schema(_))
        ));
        assert!(matches!(
            parse_range(r#"{"range": [5, 1, 10]}"#),
            Err(ApiError::Schema(_))
        ));
    }

    #[test]
    fn fallbacks_replace_failures() {
        assert_eq!(
            limits_or_fallback(Err(ApiError::Status(500))),
            RangeBounds::Continuous {
                min: 1.0,
                max: 100.0
            }
        );
        let fixed = range_or_fallback(Err(ApiError::Network("offline".into())));
        assert_eq!(fixed.min(), 1.99);
        assert_eq!(fixed.max(), 70.99);

        let ok = RangeBounds::continuous(0.0, 10.0).unwrap();
        assert_eq!(limits_or_fallback(Ok(ok.clone())), ok);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiError::Status(404).to_string(),
            "Request failed with status 404"
        );
    }
}
