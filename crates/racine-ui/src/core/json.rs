//! JSON re-serialisation matching the browser's `JSON.stringify(JSON.parse(body))`.
//!
//! # Design
//! - Numbers are read as IEEE doubles and printed with ECMAScript `Number::toString`
//!   rules; values overflowing a double print as `null`.
//! - Object keys that are array indices come first in ascending order, the rest
//!   keep their first-seen position.
//! - Nesting is bounded by [`MAX_DEPTH`] instead of serde's default limit.

use std::num::FpCategory;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::probe::ProbeError;

/// Deepest array/object nesting accepted in a response body.
pub const MAX_DEPTH: usize = 512;

/// Parse a complete JSON document.
///
/// # Errors
///
/// Returns [`ProbeError::Decode`] for invalid JSON, trailing characters, or
/// nesting deeper than [`MAX_DEPTH`].
pub fn parse(body: &str) -> Result<Value, ProbeError> {
    if nesting_depth(body) > MAX_DEPTH {
        return Err(ProbeError::Decode {
            detail: format!("nesting deeper than {MAX_DEPTH} levels"),
        });
    }
    let mut deserializer = serde_json::Deserializer::from_str(body);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer).map_err(decode_error)?;
    deserializer.end().map_err(decode_error)?;
    Ok(value)
}

/// Serialise `value` compactly, the way `JSON.stringify` would.
#[must_use]
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn decode_error(err: serde_json::Error) -> ProbeError {
    ProbeError::Decode {
        detail: err.to_string(),
    }
}

fn nesting_depth(body: &str) -> usize {
    let (mut depth, mut deepest) = (0_usize, 0_usize);
    let (mut in_string, mut escaped) = (false, false);
    for byte in body.bytes() {
        if in_string {
            match (escaped, byte) {
                (true, _) => escaped = false,
                (false, b'\\') => escaped = true,
                (false, b'"') => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Value::Number(number) => out.push_str(&format_number(&number.to_string())),
        Value::String(text) => write_string(out, text),
        Value::Array(items) => {
            out.push('[');
            for (position, item) in items.iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (position, (key, item)) in ordered_entries(map).into_iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, text: &str) {
    out.push_str(&Value::String(text.to_owned()).to_string());
}

fn ordered_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let (mut indexed, named): (Vec<_>, Vec<_>) =
        map.iter().partition(|(key, _)| array_index(key).is_some());
    indexed.sort_by_key(|(key, _)| array_index(key));
    indexed.extend(named);
    indexed
}

/// Canonical array index: `0..=2^32 - 2` without sign or leading zeros.
fn array_index(key: &str) -> Option<u32> {
    key.parse::<u32>()
        .ok()
        .filter(|index| *index != u32::MAX && index.to_string() == key)
}

/// ECMAScript `Number::toString` for a JSON number literal.
fn format_number(literal: &str) -> String {
    let Ok(value) = literal.parse::<f64>() else {
        return "null".to_string();
    };
    match value.classify() {
        FpCategory::Nan | FpCategory::Infinite => "null".to_string(),
        FpCategory::Zero => "0".to_string(),
        FpCategory::Normal | FpCategory::Subnormal => {
            if (1e-6..1e21).contains(&value.abs()) {
                value.to_string()
            } else {
                let scientific = format!("{value:e}");
                match scientific.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        format!("{mantissa}e+{exponent}")
                    }
                    _ => scientific,
                }
            }
        }
    }
}
