//! Page loaders for the home, category and product routes.
//!
//! A loader fetches, then maps the outcome to a page state. Failures never
//! bubble up as errors: the page shows its not-found state instead. Each
//! load holds a [`FetchTicket`]; if a newer load started meanwhile, the
//! older result is dropped rather than applied.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::api::{CatalogSource, TenantApi};
use crate::catalog::{apply_query, find_product, has_category, order_categories, MenuQuery};
use crate::error::Result;
use crate::media::order_gallery;
use crate::models::{Category, MenuItem, ShopSettings, DEFAULT_CURRENCY_SYMBOL};

// ---------------------------------------------------------------------------
// Stale-fetch guard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load. Every ticket issued earlier becomes stale.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            generation,
            current: Arc::clone(&self.generation),
        }
    }
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

// ---------------------------------------------------------------------------
// Page states
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "page", rename_all = "snake_case")]
pub enum PageState<T> {
    NotFound,
    Ready(T),
}

impl<T> PageState<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            PageState::Ready(page) => Some(page),
            PageState::NotFound => None,
        }
    }
}

/// Settings plus catalog, as loaded for the home, table and category pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuData {
    pub settings: ShopSettings,
    pub catalog: Vec<Category>,
    /// Set when the page is scoped to one category id.
    pub category_id: Option<String>,
}

impl MenuData {
    /// Visible categories for `query`. The home page puts pinned categories
    /// first; a category page keeps source order and only its own items.
    ///
    /// Only the home page collapses into one in-stock list. A category page
    /// keeps its grouping and just drops sold-out items.
    pub fn view(&self, query: &MenuQuery) -> Vec<Category> {
        let Some(category_id) = &self.category_id else {
            let mut categories = apply_query(&self.catalog, query);
            order_categories(&mut categories);
            return categories;
        };
        let scoped = MenuQuery {
            category_id: Some(category_id.clone()),
            in_stock_only: false,
            ..query.clone()
        };
        let mut categories = apply_query(&self.catalog, &scoped);
        if query.in_stock_only {
            for category in &mut categories {
                category.items.retain(|item| item.in_stock());
            }
            categories.retain(|category| !category.items.is_empty());
        }
        categories
    }

    /// Whether listings show a short preview with "See All...". Only the
    /// home page grouping does; category pages and the in-stock list show
    /// every item.
    pub fn previews(&self, query: &MenuQuery) -> bool {
        self.category_id.is_none() && !query.in_stock_only
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub item: MenuItem,
    pub currency_symbol: String,
    /// Image paths, primary first.
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProductPage {
    Found(ProductDetail),
    NotFound,
    LoadFailed,
}

pub(crate) fn menu_state(
    settings: Result<ShopSettings>,
    catalog: Result<Vec<Category>>,
    category_id: Option<&str>,
) -> PageState<MenuData> {
    let settings = settings.unwrap_or_else(|e| {
        warn!(error = %e, "settings unavailable, using defaults");
        ShopSettings::default()
    });
    let catalog = match catalog {
        Ok(catalog) if !catalog.is_empty() => catalog,
        Ok(_) => {
            info!("catalog is empty");
            return PageState::NotFound;
        }
        Err(e) => {
            warn!(error = %e, offline = e.is_connectivity(), "catalog unavailable");
            return PageState::NotFound;
        }
    };
    if let Some(id) = category_id {
        if !has_category(&catalog, id) {
            info!(category_id = id, "unknown category");
            return PageState::NotFound;
        }
    }
    PageState::Ready(MenuData {
        settings,
        catalog,
        category_id: category_id.map(str::to_string),
    })
}

pub(crate) fn product_state(catalog: Result<Vec<Category>>, id: &str) -> ProductPage {
    match catalog {
        Ok(catalog) => match find_product(&catalog, id) {
            Some(item) => ProductPage::Found(ProductDetail {
                gallery: order_gallery(Some(&item.image_path), &item.images),
                item: item.clone(),
                currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            }),
            None => ProductPage::NotFound,
        },
        Err(e) => {
            warn!(product_id = id, error = %e, "product load failed");
            ProductPage::LoadFailed
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Storefront {
    api: TenantApi,
    guard: FetchGuard,
}

impl Storefront {
    pub fn new(api: TenantApi) -> Self {
        Self {
            api,
            guard: FetchGuard::new(),
        }
    }

    pub fn api(&self) -> &TenantApi {
        &self.api
    }

    pub fn guard(&self) -> &FetchGuard {
        &self.guard
    }

    /// Home and table pages. `None` when a newer load superseded this one.
    pub async fn load_menu(&self, source: CatalogSource) -> Option<PageState<MenuData>> {
        self.load(source, None).await
    }

    pub async fn load_category(
        &self,
        source: CatalogSource,
        category_id: &str,
    ) -> Option<PageState<MenuData>> {
        self.load(source, Some(category_id)).await
    }

    async fn load(
        &self,
        source: CatalogSource,
        category_id: Option<&str>,
    ) -> Option<PageState<MenuData>> {
        let ticket = self.guard.begin();
        let (settings, catalog) =
            tokio::join!(self.api.fetch_settings(), self.api.fetch_catalog(source));
        let state = menu_state(settings, catalog, category_id);
        self.settle(&ticket, state)
    }

    pub async fn load_product(&self, id: &str) -> Option<ProductPage> {
        let ticket = self.guard.begin();
        let catalog = self.api.fetch_catalog(CatalogSource::Grouped).await;
        self.settle(&ticket, product_state(catalog, id))
    }

    fn settle<T>(&self, ticket: &FetchTicket, state: T) -> Option<T> {
        if ticket.is_current() {
            Some(state)
        } else {
            debug!(tenant = %self.api.tenant(), "discarding stale page load");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorefrontError;

    fn item(id: &str, category_id: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            image_path: format!("{id}.jpg"),
            category_id: Some(category_id.to_string()),
            quantity: "1".to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Category> {
        vec![
            Category {
                name: "Zucchini".into(),
                items: vec![item("1", "10")],
            },
            Category {
                name: "Best Selling".into(),
                items: vec![item("2", "20"), item("3", "10")],
            },
        ]
    }

    fn offline() -> StorefrontError {
        StorefrontError::Unreachable {
            url: "http://shop.test".into(),
        }
    }

    #[test]
    fn only_the_latest_ticket_is_current() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        assert!(first.is_current());
        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn cloned_guards_share_a_generation() {
        let guard = FetchGuard::new();
        let ticket = guard.begin();
        let _ = guard.clone().begin();
        assert!(!ticket.is_current());
    }

    #[test]
    fn settings_failure_falls_back_to_defaults() {
        let state = menu_state(Err(offline()), Ok(catalog()), None);
        let data = state.ready().expect("page");
        assert_eq!(data.settings, ShopSettings::default());
        assert_eq!(data.settings.site_name, "Default Title");
    }

    #[test]
    fn catalog_failure_or_empty_catalog_is_not_found() {
        assert_eq!(
            menu_state(Ok(ShopSettings::default()), Err(offline()), None),
            PageState::NotFound
        );
        assert_eq!(
            menu_state(Ok(ShopSettings::default()), Ok(Vec::new()), None),
            PageState::NotFound
        );
    }

    #[test]
    fn unknown_category_is_not_found() {
        let state = menu_state(Ok(ShopSettings::default()), Ok(catalog()), Some("99"));
        assert_eq!(state, PageState::NotFound);
    }

    #[test]
    fn category_view_keeps_only_that_category() {
        let data = menu_state(Ok(ShopSettings::default()), Ok(catalog()), Some("10"))
            .ready()
            .expect("page");
        let view = data.view(&MenuQuery::default());
        let ids: Vec<&str> = view
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id.as_str()))
            .collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(view[0].name, "Zucchini");
    }

    #[test]
    fn category_in_stock_view_keeps_its_grouping() {
        let mut catalog = catalog();
        catalog[1].items[1].quantity = "0".into();
        catalog[1].items.push(item("4", "10"));
        let data = menu_state(Ok(ShopSettings::default()), Ok(catalog), Some("10"))
            .ready()
            .expect("page");
        let query = MenuQuery {
            in_stock_only: true,
            ..Default::default()
        };
        let view = data.view(&query);
        let names: Vec<&str> = view.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Zucchini", "Best Selling"]);
        assert_eq!(view[1].items.len(), 1);
        assert_eq!(view[1].items[0].id, "4");
        assert!(!data.previews(&query));
        assert!(!data.previews(&MenuQuery::default()));
    }

    #[test]
    fn home_in_stock_view_flattens_without_preview() {
        let data = menu_state(Ok(ShopSettings::default()), Ok(catalog()), None)
            .ready()
            .expect("page");
        assert!(data.previews(&MenuQuery::default()));
        let query = MenuQuery {
            in_stock_only: true,
            ..Default::default()
        };
        let view = data.view(&query);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, crate::catalog::IN_STOCK_CATEGORY);
        assert!(!data.previews(&query));
    }

    #[test]
    fn home_view_pins_highlight_categories() {
        let data = menu_state(Ok(ShopSettings::default()), Ok(catalog()), None)
            .ready()
            .expect("page");
        let names: Vec<String> = data
            .view(&MenuQuery::default())
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Best Selling", "Zucchini"]);
    }

    #[test]
    fn product_states() {
        match product_state(Ok(catalog()), "3") {
            ProductPage::Found(detail) => {
                assert_eq!(detail.item.id, "3");
                assert_eq!(detail.currency_symbol, "$");
                assert_eq!(detail.gallery, ["3.jpg"]);
            }
            other => panic!("expected product, got {other:?}"),
        }
        assert_eq!(product_state(Ok(catalog()), "404"), ProductPage::NotFound);
        assert_eq!(product_state(Err(offline()), "3"), ProductPage::LoadFailed);
    }

    #[test]
    fn product_gallery_leads_with_primary_image() {
        let mut catalog = catalog();
        catalog[1].items[1].images = vec!["3_10.jpg".into(), "3.jpg".into(), "3_2.jpg".into()];
        match product_state(Ok(catalog), "3") {
            ProductPage::Found(detail) => {
                assert_eq!(detail.gallery, ["3.jpg", "3_2.jpg", "3_10.jpg"]);
            }
            other => panic!("expected product, got {other:?}"),
        }
    }
}
