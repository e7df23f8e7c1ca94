//! Tenant storefront API client.
//!
//! Every shop runs its own backend at `https://{tenant}.{vendor-domain}`.
//! This module owns URL construction, HTTP error mapping and the typed
//! endpoint calls; payload decoding lives in [`crate::models`].

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};
use crate::models::{
    parse_catalog, parse_contact, parse_settings, parse_suspended_order, Category, OrderSubmission,
    ShopContact, ShopSettings, SuspendedOrder,
};

pub const SETTINGS_PATH: &str = "/api/DriverController/setting";
pub const CATALOG_PATH: &str = "/api/DriverController/GetAllProductWithCat";
pub const LEGACY_CATALOG_PATH: &str = "/api/driverController/getallproductsnew";
pub const ORDER_CONFIG_PATH: &str = "/api/DriverController/e_orderConfig";
pub const SUSPENDED_ORDER_PATH: &str = "/api/DriverController/suspends";
pub const SUBMIT_ORDER_PATH: &str = "/api/DriverController/suspend";

const UPLOADS_PATH: &str = "/assets/uploads";

// ---------------------------------------------------------------------------
// Route parameters
// ---------------------------------------------------------------------------

/// Tenant name; used as a DNS label, so it is validated as one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tenant(String);

impl Tenant {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim().to_lowercase();
        let valid = !name.is_empty()
            && name.len() <= 63
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(StorefrontError::InvalidTenant(raw.to_string()));
        }
        Ok(Tenant(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tenant {
    type Err = StorefrontError;
    fn from_str(s: &str) -> Result<Self> {
        Tenant::parse(s)
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TableNumber(String);

impl TableNumber {
    pub fn parse(raw: &str) -> Result<Self> {
        let table = raw.trim();
        let valid = !table.is_empty()
            && table.len() <= 32
            && table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorefrontError::InvalidTable(raw.to_string()));
        }
        Ok(TableNumber(table.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TableNumber {
    type Err = StorefrontError;
    fn from_str(s: &str) -> Result<Self> {
        TableNumber::parse(s)
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which product endpoint a page reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// `GetAllProductWithCat`, category-grouped.
    #[default]
    Grouped,
    /// `getallproductsnew`, the older product list.
    Legacy,
}

impl CatalogSource {
    pub fn path(self) -> &'static str {
        match self {
            CatalogSource::Grouped => CATALOG_PATH,
            CatalogSource::Legacy => LEGACY_CATALOG_PATH,
        }
    }
}

// ---------------------------------------------------------------------------
// URL normalisation
// ---------------------------------------------------------------------------

/// Normalise an API base URL:
/// - ensure a scheme is present (https, or http for localhost)
/// - strip trailing slashes
/// - strip a trailing `/api` segment
pub fn normalize_base_url(url: &str) -> String {
    let mut url = url.trim().to_string();

    if !url.starts_with("http://") && !url.starts_with("https://") {
        if url.starts_with("localhost") || url.starts_with("127.0.0.1") {
            url = format!("http://{url}");
        } else {
            url = format!("https://{url}");
        }
    }

    while url.ends_with('/') {
        url.pop();
    }

    if url.ends_with("/api") {
        url.truncate(url.len() - 4);
    }

    while url.ends_with('/') {
        url.pop();
    }

    url
}

pub fn tenant_base_url(config: &StorefrontConfig, tenant: &Tenant) -> String {
    match config.api_base.as_deref().filter(|b| !b.trim().is_empty()) {
        Some(base) => normalize_base_url(base),
        None => format!(
            "https://{}.{}",
            tenant.as_str(),
            config.vendor_domain.trim().trim_matches('.')
        ),
    }
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn friendly_error(url: &str, err: reqwest::Error) -> StorefrontError {
    if err.is_connect() {
        return StorefrontError::Unreachable {
            url: url.to_string(),
        };
    }
    if err.is_timeout() {
        return StorefrontError::Timeout {
            url: url.to_string(),
        };
    }
    StorefrontError::Network {
        url: url.to_string(),
        source: err,
    }
}

/// Convert an HTTP status code into a user-friendly message.
pub fn status_message(status: StatusCode) -> String {
    match status.as_u16() {
        401 => "Storefront rejected the request as unauthenticated".to_string(),
        403 => "Storefront access forbidden".to_string(),
        404 => "Storefront endpoint not found".to_string(),
        s if s >= 500 => format!("Storefront server error (HTTP {s})"),
        s => format!("Unexpected response from storefront (HTTP {s})"),
    }
}

fn status_error(status: StatusCode, body_text: &str) -> StorefrontError {
    let body = body_text.trim();
    let message = match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("error")
            .or_else(|| json.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| status_message(status)),
        Err(_) if !body.is_empty() && body.len() <= 200 => {
            format!("{}: {body}", status_message(status))
        }
        Err(_) => status_message(status),
    };
    StorefrontError::Status {
        status: status.as_u16(),
        message,
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TenantApi {
    tenant: Tenant,
    base_url: String,
    client: Client,
}

impl TenantApi {
    pub fn new(config: &StorefrontConfig, tenant: Tenant) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| StorefrontError::Config(format!("failed to create HTTP client: {e}")))?;
        let base_url = tenant_base_url(config, &tenant);
        Ok(Self {
            tenant,
            base_url,
            client,
        })
    }

    pub fn tenant(&self) -> &Tenant {
        &self.tenant
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Public URL of an uploaded product or slide image.
    pub fn asset_url(&self, image_path: &str) -> String {
        format!(
            "{}{UPLOADS_PATH}/{}",
            self.base_url,
            image_path.trim().trim_start_matches('/')
        )
    }

    pub fn logo_url(&self, logo: &str) -> String {
        format!(
            "{}{UPLOADS_PATH}/logos/{}",
            self.base_url,
            logo.trim().trim_start_matches('/')
        )
    }

    async fn send(&self, req: RequestBuilder, url: &str) -> Result<Value> {
        let start = Instant::now();
        let resp = req.send().await.map_err(|e| friendly_error(url, e))?;
        let status = resp.status();
        let body_text = resp.text().await.map_err(|e| friendly_error(url, e))?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            warn!(
                tenant = %self.tenant,
                url = %url,
                status = status.as_u16(),
                latency_ms,
                "storefront request failed"
            );
            return Err(status_error(status, &body_text));
        }
        debug!(tenant = %self.tenant, url = %url, latency_ms, "storefront request ok");

        if body_text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body_text).map_err(|e| StorefrontError::Decode {
            url: url.to_string(),
            source: e,
        })
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.base_url);
        self.send(self.client.get(&url), &url).await
    }

    pub async fn fetch_settings(&self) -> Result<ShopSettings> {
        let value = self.get(SETTINGS_PATH).await?;
        Ok(parse_settings(&value))
    }

    pub async fn fetch_catalog(&self, source: CatalogSource) -> Result<Vec<Category>> {
        let value = self.get(source.path()).await?;
        let categories = parse_catalog(&value)?;
        info!(
            tenant = %self.tenant,
            categories = categories.len(),
            items = categories.iter().map(|c| c.items.len()).sum::<usize>(),
            "catalog fetched"
        );
        Ok(categories)
    }

    pub async fn fetch_contact(&self) -> Result<ShopContact> {
        let value = self.get(ORDER_CONFIG_PATH).await?;
        Ok(parse_contact(&value))
    }

    /// The table's open (suspended) order, if any.
    pub async fn fetch_suspended_order(&self, table: &TableNumber) -> Result<Option<SuspendedOrder>> {
        let url = format!("{}{SUSPENDED_ORDER_PATH}", self.base_url);
        let req = self
            .client
            .post(&url)
            .form(&[("table_num", table.as_str())]);
        let value = self.send(req, &url).await?;
        parse_suspended_order(&value)
    }

    pub async fn submit_order(&self, submission: &OrderSubmission) -> Result<Value> {
        let url = format!("{}{SUBMIT_ORDER_PATH}", self.base_url);
        let req = self.client.post(&url).json(submission);
        self.send(req, &url).await
    }
}
