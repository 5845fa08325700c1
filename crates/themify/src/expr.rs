//! Marker expression resolution.
//!
//! A declaration value may embed one or more marker expressions of the form
//! `themify(<payload>)`, where the payload is JSON mapping each variation
//! name to either a color-name string or a `[colorName, alpha]` pair:
//!
//! ```text
//! color: themify({"light": "primary-0", "dark": "primary-700"});
//! border: 1px solid themify({"light": ["primary-200", "0.5"]});
//! ```
//!
//! [`resolve_decl_value`] replaces every occurrence with its translation for
//! one target variation, leaving surrounding literal text intact. Each
//! occurrence resolves independently.
//!
//! Missing overrides are opt-in per variation: a non-default variation with
//! no payload entry (or no palette entry for the referenced name) resolves
//! to "absent" and the declaration is skipped for that variation. The same
//! situation on the default variation is a hard error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::config::ThemifyOptions;
use crate::error::ThemifyError;
use crate::translate::{translate, ExecMode, ResolvedColor};

/// Matches one marker occurrence, capturing the payload between parentheses.
static THEMIFY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)themify\(([^)]+)\)").expect("valid marker pattern"));

/// Returns `true` when the value contains a marker expression.
pub fn has_marker(value: &str) -> bool {
    value.contains("themify")
}

/// Replaces every marker in `value` with its translation for `variation`.
///
/// Returns `Ok(None)` when any occurrence has no override for a non-default
/// variation; the caller treats the whole declaration as "no override".
pub fn resolve_decl_value(
    value: &str,
    variation: &str,
    options: &ThemifyOptions,
    mode: ExecMode,
) -> Result<Option<String>, ThemifyError> {
    // tolerate preprocessor-quoted payloads: themify('{...}')
    let cleaned = value.replace('\'', "");
    let mut out = String::new();
    let mut last = 0;
    let mut absent = false;
    for caps in THEMIFY_RE.captures_iter(&cleaned) {
        let (Some(whole), Some(payload)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&cleaned[last..whole.start()]);
        match resolve_marker(payload.as_str(), variation, options)? {
            Some(resolved) => out.push_str(&translate(&resolved, variation, mode)?),
            None => absent = true,
        }
        last = whole.end();
    }
    out.push_str(&cleaned[last..]);
    if absent {
        Ok(None)
    } else {
        Ok(Some(out))
    }
}

/// Resolves one payload for one variation against the palette.
fn resolve_marker(
    payload: &str,
    variation: &str,
    options: &ThemifyOptions,
) -> Result<Option<ResolvedColor>, ThemifyError> {
    let parsed: Value = serde_json::from_str(payload).map_err(|_| {
        ThemifyError::MalformedExpression {
            expression: payload.to_string(),
        }
    })?;
    let map = parsed
        .as_object()
        .ok_or_else(|| ThemifyError::MalformedExpression {
            expression: payload.to_string(),
        })?;
    // a marker must define at least one variation
    if map.is_empty() {
        return Err(ThemifyError::MissingVariation {
            expression: payload.to_string(),
            variation: variation.to_string(),
        });
    }
    let Some(entry) = map.get(variation) else {
        if options.is_default(variation) {
            return Err(ThemifyError::MissingVariation {
                expression: payload.to_string(),
                variation: variation.to_string(),
            });
        }
        return Ok(None);
    };
    let (name, alpha) = normalize_entry(entry, payload)?;
    match options.palette.color(variation, &name) {
        Some(literal) => Ok(Some(ResolvedColor {
            name,
            alpha,
            literal: literal.to_string(),
        })),
        None if options.is_default(variation) => Err(ThemifyError::UnknownColorReference {
            name,
            variation: variation.to_string(),
        }),
        None => Ok(None),
    }
}

/// Normalizes a payload entry to a `(colorName, alpha)` pair.
///
/// A bare string implies alpha `"1"`; an array carries an explicit alpha as
/// its second element (string or number, kept textually).
fn normalize_entry(entry: &Value, payload: &str) -> Result<(String, String), ThemifyError> {
    match entry {
        Value::String(name) if !name.is_empty() => Ok((name.clone(), "1".to_string())),
        Value::String(_) => Err(ThemifyError::EmptyColorValue {
            expression: payload.to_string(),
        }),
        Value::Array(items) => {
            let name = match items.first() {
                Some(Value::String(name)) if !name.is_empty() => name.clone(),
                Some(Value::String(_)) | None => {
                    return Err(ThemifyError::EmptyColorValue {
                        expression: payload.to_string(),
                    })
                }
                Some(_) => {
                    return Err(ThemifyError::MalformedExpression {
                        expression: payload.to_string(),
                    })
                }
            };
            let alpha = match items.get(1) {
                None => "1".to_string(),
                Some(Value::String(alpha)) => alpha.clone(),
                Some(Value::Number(alpha)) => alpha.to_string(),
                Some(_) => {
                    return Err(ThemifyError::MalformedExpression {
                        expression: payload.to_string(),
                    })
                }
            };
            Ok((name, alpha))
        }
        _ => Err(ThemifyError::MalformedExpression {
            expression: payload.to_string(),
        }),
    }
}
