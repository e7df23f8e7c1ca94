//! Slideshow payload repair and image ordering.

use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::OnceLock;

use crate::error::{Result, StorefrontError};

static TRAILING_COMMA: OnceLock<Regex> = OnceLock::new();

fn trailing_comma() -> &'static Regex {
    TRAILING_COMMA.get_or_init(|| {
        Regex::new(r",\s*]\s*$").unwrap_or_else(|e| panic!("invalid slideshow regex: {e}"))
    })
}

/// Image path of a slideshow entry: a bare string, or an object carrying the
/// path under one of the keys the backend has used.
fn entry_path(entry: &Value) -> Option<String> {
    let raw = match entry {
        Value::String(s) => s.as_str(),
        Value::Object(obj) => ["image", "img", "path", "file", "name"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str))?,
        _ => return None,
    };
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn slideshow_entries(entries: &[Value]) -> Vec<String> {
    entries.iter().filter_map(entry_path).collect()
}

/// Parse the settings `slide_Show` string, which the backend emits as a JSON
/// array with a trailing comma (`["a.jpg","b.jpg",]`).
pub fn parse_slideshow(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let repaired = trailing_comma().replace(trimmed, "]");
    let parsed: Value = serde_json::from_str(&repaired)
        .map_err(|e| StorefrontError::Payload(format!("slideshow is not JSON: {e}")))?;
    match parsed {
        Value::Array(entries) => Ok(slideshow_entries(&entries)),
        other => Err(StorefrontError::Payload(format!(
            "slideshow is not a list: {other}"
        ))),
    }
}

/// Split a file name into text and number runs so `slide2` sorts before
/// `slide10`.
fn natural_key(name: &str) -> Vec<(String, u64)> {
    let mut key = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();
    for c in name.to_lowercase().chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            if !digits.is_empty() {
                key.push((std::mem::take(&mut text), digits.parse().unwrap_or(u64::MAX)));
                digits.clear();
            }
            text.push(c);
        }
    }
    let tail_number = if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    };
    key.push((text, tail_number));
    key
}

fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b))
}

/// Carousel order: the primary image first (once), then the rest in natural
/// filename order. Empty and duplicate paths are dropped.
pub fn order_gallery(primary: Option<&str>, images: &[String]) -> Vec<String> {
    let primary = primary.map(str::trim).filter(|p| !p.is_empty());
    let mut rest: Vec<String> = Vec::with_capacity(images.len());
    for image in images {
        let image = image.trim();
        if image.is_empty() || Some(image) == primary || rest.iter().any(|r| r == image) {
            continue;
        }
        rest.push(image.to_string());
    }
    rest.sort_by(|a, b| natural_cmp(a, b));

    let mut ordered = Vec::with_capacity(rest.len() + 1);
    if let Some(p) = primary {
        ordered.push(p.to_string());
    }
    ordered.extend(rest);
    ordered
}
