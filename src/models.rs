//! Wire types for the tenant storefront API.
//!
//! The shop backend is loose with types: ids and codes arrive as numbers or
//! strings, stock quantities are strings, and optional fields come back as
//! `null`, `""` or not at all. Decoding is forgiving: one odd product never
//! blanks a whole menu.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Result, StorefrontError};
use crate::media;

/// Title shown when the settings endpoint cannot be read.
pub const DEFAULT_SITE_TITLE: &str = "Default Title";
/// Currency symbol used before settings arrive (the product page default).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

// ---------------------------------------------------------------------------
// Lenient scalar decoding
// ---------------------------------------------------------------------------

pub(crate) fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn value_to_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_f64(s),
        _ => None,
    }
}

/// Parse the numeric prefix of a string the way a browser's `parseFloat`
/// does: `"12.5 pcs"` is 12.5, `"1e3"` is 1000, `"abc"` is `None`.
pub fn parse_leading_f64(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    end += exponent_len(&s[end..]);
    s[..end].parse().ok()
}

/// Length of an `e[+-]digits` suffix at the start of `rest`, 0 when absent.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}

/// Integer prefix of a string (`"6-9"` is 6, `"18+"` is 18).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let mut end = 0;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    s[..end].parse().ok()
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(super::value_to_string(&Value::deserialize(d)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(super::value_to_string(&Value::deserialize(d)?).filter(|s| !s.is_empty()))
    }

    pub fn f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(super::value_to_f64(&Value::deserialize(d)?).unwrap_or(0.0))
    }

    pub fn opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(super::value_to_f64(&Value::deserialize(d)?))
    }

    /// A JSON list of paths, or the same list encoded as a string.
    pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(entries) => crate::media::slideshow_entries(&entries),
            Value::String(raw) => crate::media::parse_slideshow(&raw).unwrap_or_default(),
            _ => Vec::new(),
        })
    }

        pub fn i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(super::value_to_f64(&Value::deserialize(d)?)
            .map(|n| n as i64)
            .unwrap_or(0))
    }
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Promotional price when present and non-zero, else list price.
pub fn effective_unit_price(price: f64, promo_price: Option<f64>) -> f64 {
    match promo_price {
        Some(promo) if promo != 0.0 && !promo.is_nan() => promo,
        _ => price,
    }
}

pub fn format_price(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(
        default,
        rename = "imagePath",
        alias = "image_path",
        alias = "image",
        deserialize_with = "lenient::string"
    )]
    pub image_path: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub promo_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub item_type: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub category_id: Option<String>,
    /// Quantity in stock, as the backend sends it (a string).
    #[serde(default, deserialize_with = "lenient::string")]
    pub quantity: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub age: String,
    #[serde(default, deserialize_with = "lenient::i64")]
    pub pieces: i64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub created_at: Option<String>,
    /// Extra product photos, when the backend sends them.
    #[serde(
        default,
        alias = "gallery",
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "lenient::string_list"
    )]
    pub images: Vec<String>,
}

impl MenuItem {
    pub fn effective_price(&self) -> f64 {
        effective_unit_price(self.price, self.promo_price)
    }

    /// The list price is shown struck through next to a differing promotion.
    pub fn has_promotion(&self) -> bool {
        self.effective_price() != self.price
    }

    pub fn stock_quantity(&self) -> Option<f64> {
        parse_leading_f64(&self.quantity)
    }

    pub fn in_stock(&self) -> bool {
        self.stock_quantity().is_some_and(|q| q > 0.0)
    }

    pub fn min_age(&self) -> Option<i64> {
        parse_leading_int(&self.age)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category", alias = "name", deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

fn decode_items(raw: &[Value]) -> Vec<MenuItem> {
    raw.iter()
        .filter_map(
            |item| match serde_json::from_value::<MenuItem>(item.clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!(error = %e, "catalog: skipping undecodable product");
                    None
                }
            },
        )
        .collect()
}

fn looks_like_category(v: &Value) -> bool {
    v.get("items").is_some_and(Value::is_array)
}

/// Normalise a catalog response into categories.
///
/// Accepts a bare array of categories, `{ "categories": [...] }`,
/// `{ "data": [...] }`, or a flat product array (grouped by item type, in
/// order of first appearance).
pub fn parse_catalog(value: &Value) -> Result<Vec<Category>> {
    let arr = match value {
        Value::Array(arr) => arr,
        Value::Object(obj) => {
            let nested = obj
                .get("categories")
                .or_else(|| obj.get("data"))
                .ok_or_else(|| {
                    StorefrontError::Payload("catalog response has no categories".into())
                })?;
            return parse_catalog(nested);
        }
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(StorefrontError::Payload(format!(
                "catalog response is not a list: {other}"
            )))
        }
    };

    if arr.iter().any(looks_like_category) {
        let categories = arr
            .iter()
            .filter(|c| looks_like_category(c))
            .map(|c| Category {
                name: c
                    .get("category")
                    .or_else(|| c.get("name"))
                    .and_then(value_to_string)
                    .unwrap_or_default(),
                items: c
                    .get("items")
                    .and_then(Value::as_array)
                    .map(|items| decode_items(items))
                    .unwrap_or_default(),
            })
            .collect();
        return Ok(categories);
    }

    let mut grouped: Vec<Category> = Vec::new();
    for item in decode_items(arr) {
        match grouped.iter_mut().find(|c| c.name == item.item_type) {
            Some(category) => category.items.push(item),
            None => grouped.push(Category {
                name: item.item_type.clone(),
                items: vec![item],
            }),
        }
    }
    Ok(grouped)
}

// ---------------------------------------------------------------------------
// Shop settings / contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopSettings {
    pub site_name: String,
    pub logo: Option<String>,
    pub currency_symbol: String,
    pub slideshow: Vec<String>,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_TITLE.to_string(),
            logo: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            slideshow: Vec::new(),
        }
    }
}

fn non_empty_str(v: &Value, key: &str) -> Option<String> {
    v.get(key)
        .and_then(value_to_string)
        .filter(|s| !s.is_empty())
}

/// Decode the `setting` endpoint. Missing fields fall back to defaults; a
/// broken slideshow only drops the slideshow.
pub fn parse_settings(value: &Value) -> ShopSettings {
    let defaults = ShopSettings::default();
    let slideshow = match value.get("slide_Show").or_else(|| value.get("slide_show")) {
        Some(Value::String(raw)) => media::parse_slideshow(raw).unwrap_or_else(|e| {
            warn!(error = %e, "settings: ignoring malformed slideshow");
            Vec::new()
        }),
        Some(Value::Array(entries)) => media::slideshow_entries(entries),
        _ => Vec::new(),
    };
    ShopSettings {
        site_name: non_empty_str(value, "site_name").unwrap_or(defaults.site_name),
        logo: non_empty_str(value, "logo"),
        currency_symbol: non_empty_str(value, "symbol").unwrap_or(defaults.currency_symbol),
        slideshow,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "lenient::string")]
    pub logo: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShopContact {
    pub links: Vec<SocialLink>,
}

pub fn parse_contact(value: &Value) -> ShopContact {
    let links = value
        .get("icon")
        .and_then(Value::as_array)
        .map(|icons| {
            icons
                .iter()
                .filter_map(|v| serde_json::from_value::<SocialLink>(v.clone()).ok())
                .filter(|link| !link.url.is_empty())
                .collect()
        })
        .unwrap_or_default();
    ShopContact { links }
}

// ---------------------------------------------------------------------------
// Cart line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "imagePath")]
    pub image_path: String,
    pub price: f64,
    pub promo_price: Option<f64>,
    pub code: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: u32,
    #[serde(rename = "subtotalPrice")]
    pub subtotal: f64,
    pub comment: Option<String>,
}

impl CartItem {
    /// A fresh line with a zero subtotal; the cart computes the real one.
    pub fn from_menu_item(item: &MenuItem, quantity: u32) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image_path: item.image_path.clone(),
            price: item.price,
            promo_price: item.promo_price,
            code: item.code.clone(),
            item_type: item.item_type.clone(),
            quantity,
            subtotal: 0.0,
            comment: None,
        }
    }

    pub fn unit_price(&self) -> f64 {
        effective_unit_price(self.price, self.promo_price)
    }
}

// ---------------------------------------------------------------------------
// Suspended orders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuspendedHeader {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub date: Option<String>,
    #[serde(default, rename = "totalItems", deserialize_with = "lenient::f64")]
    pub total_items: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub total_price: f64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub suspend_note: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub table_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, rename = "imagePath", deserialize_with = "lenient::string")]
    pub image_path: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub promo_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub suspend_id: Option<String>,
}

impl HistoryItem {
    pub fn unit_price(&self) -> f64 {
        effective_unit_price(self.price, self.promo_price)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuspendedOrder {
    #[serde(rename = "data")]
    pub header: SuspendedHeader,
    #[serde(default)]
    pub items: Vec<HistoryItem>,
}

/// Decode the `suspends` response. A table without an open order comes back
/// as `null`, `[]`, `false` or a `data` block without an id.
pub fn parse_suspended_order(value: &Value) -> Result<Option<SuspendedOrder>> {
    let has_header = value
        .get("data")
        .filter(|d| d.is_object())
        .and_then(|d| d.get("id"))
        .and_then(value_to_string)
        .is_some_and(|id| !id.is_empty());
    if !has_header {
        return Ok(None);
    }
    let mut normalized = value.clone();
    if normalized.get("items").is_some_and(Value::is_null) {
        normalized["items"] = Value::Array(Vec::new());
    }
    serde_json::from_value(normalized)
        .map(Some)
        .map_err(|e| StorefrontError::Payload(format!("suspended order: {e}")))
}

// ---------------------------------------------------------------------------
// Order submission
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionHeader {
    pub id: Option<String>,
    pub suspend_note: Option<String>,
    pub table_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionLine {
    pub id: String,
    pub quantity: u32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSubmission {
    pub data: SubmissionHeader,
    pub items: Vec<SubmissionLine>,
}
