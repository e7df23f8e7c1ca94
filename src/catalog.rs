//! Derived menu views: search, bucket filters, sorting, category grouping,
//! "see more" paging and the menu tab strip.
//!
//! Everything here is a pure function of `(catalog, query)` and is recomputed
//! whenever either changes.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Result, StorefrontError};
use crate::models::{Category, MenuItem};

/// Name of the synthetic category shown while "in stock only" is on.
pub const IN_STOCK_CATEGORY: &str = "All In Stock";

/// Items shown per category before "See All...".
pub const PREVIEW_LIMIT: usize = 4;

/// Highlight categories pinned to the top of the home page, in this order.
pub const PINNED_CATEGORIES: &[&str] = &[
    "Best Selling",
    "New Arrivals",
    "Coming Soon",
    "Under $25",
    "For Adults",
    "Age under 10",
];

/// Static tabs at the head of the menu bar.
pub const STATIC_TABS: &[&str] = &[
    "Best Selling",
    "New Arrivals",
    "Coming Soon",
    "Under $25",
    "For Adults",
    "For Boys",
    "For Girls",
    "Age under 10",
];

fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn parse_labelled<T: Copy>(
    kind: &'static str,
    all: &[T],
    label: fn(T) -> &'static str,
    raw: &str,
) -> Result<T> {
    let wanted = normalize_label(raw);
    all.iter()
        .copied()
        .find(|candidate| normalize_label(label(*candidate)) == wanted)
        .ok_or_else(|| StorefrontError::UnknownOption {
            kind,
            value: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriceRange {
    #[serde(rename = "$0 - $49.99")]
    UpTo49,
    #[serde(rename = "$50 - $99.99")]
    From50To99,
    #[serde(rename = "$100+")]
    From100,
}

impl PriceRange {
    pub const ALL: [PriceRange; 3] = [Self::UpTo49, Self::From50To99, Self::From100];

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo49 => "$0 - $49.99",
            Self::From50To99 => "$50 - $99.99",
            Self::From100 => "$100+",
        }
    }

    pub fn contains(self, price: f64) -> bool {
        match self {
            Self::UpTo49 => (0.0..=49.99).contains(&price),
            Self::From50To99 => (50.0..=99.99).contains(&price),
            Self::From100 => price >= 100.0,
        }
    }
}

impl FromStr for PriceRange {
    type Err = StorefrontError;
    fn from_str(s: &str) -> Result<Self> {
        parse_labelled("price", &Self::ALL, Self::label, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceRange {
    #[serde(rename = "0 - 99")]
    UpTo99,
    #[serde(rename = "100 - 499")]
    From100To499,
    #[serde(rename = "500 - 999")]
    From500To999,
    #[serde(rename = "1000+")]
    From1000,
}

impl PieceRange {
    pub const ALL: [PieceRange; 4] = [
        Self::UpTo99,
        Self::From100To499,
        Self::From500To999,
        Self::From1000,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo99 => "0 - 99",
            Self::From100To499 => "100 - 499",
            Self::From500To999 => "500 - 999",
            Self::From1000 => "1000+",
        }
    }

    pub fn contains(self, pieces: i64) -> bool {
        match self {
            Self::UpTo99 => (0..=99).contains(&pieces),
            Self::From100To499 => (100..=499).contains(&pieces),
            Self::From500To999 => (500..=999).contains(&pieces),
            Self::From1000 => pieces >= 1000,
        }
    }
}

impl FromStr for PieceRange {
    type Err = StorefrontError;
    fn from_str(s: &str) -> Result<Self> {
        parse_labelled("pieces", &Self::ALL, Self::label, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeRange {
    #[serde(rename = "0 - 5")]
    UpTo5,
    #[serde(rename = "6 - 9")]
    From6To9,
    #[serde(rename = "10 - 17")]
    From10To17,
    #[serde(rename = "18+")]
    Adult,
}

impl AgeRange {
    pub const ALL: [AgeRange; 4] = [Self::UpTo5, Self::From6To9, Self::From10To17, Self::Adult];

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo5 => "0 - 5",
            Self::From6To9 => "6 - 9",
            Self::From10To17 => "10 - 17",
            Self::Adult => "18+",
        }
    }

    pub fn contains(self, age: i64) -> bool {
        match self {
            Self::UpTo5 => (0..=5).contains(&age),
            Self::From6To9 => (6..=9).contains(&age),
            Self::From10To17 => (10..=17).contains(&age),
            Self::Adult => age >= 18,
        }
    }
}

impl FromStr for AgeRange {
    type Err = StorefrontError;
    fn from_str(s: &str) -> Result<Self> {
        parse_labelled("age", &Self::ALL, Self::label, s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortOption {
    #[serde(rename = "Price: Low to High")]
    PriceLowToHigh,
    #[serde(rename = "Price: High to Low")]
    PriceHighToLow,
    #[serde(rename = "Piece count: Low to High")]
    PiecesLowToHigh,
    #[serde(rename = "Piece count: High to Low")]
    PiecesHighToLow,
    #[serde(rename = "Newest")]
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::PiecesLowToHigh,
        Self::PiecesHighToLow,
        Self::Newest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::PiecesLowToHigh => "Piece count: Low to High",
            Self::PiecesHighToLow => "Piece count: High to Low",
            Self::Newest => "Newest",
        }
    }

    fn compare(self, a: &MenuItem, b: &MenuItem) -> Ordering {
        match self {
            Self::PriceLowToHigh => a.price.total_cmp(&b.price),
            Self::PriceHighToLow => b.price.total_cmp(&a.price),
            Self::PiecesLowToHigh => a.pieces.cmp(&b.pieces),
            Self::PiecesHighToLow => b.pieces.cmp(&a.pieces),
            // Newest first; undated items sink to the end.
            Self::Newest => match (a.created_at_utc(), b.created_at_utc()) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

impl FromStr for SortOption {
    type Err = StorefrontError;
    fn from_str(s: &str) -> Result<Self> {
        parse_labelled("sort", &Self::ALL, Self::label, s)
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuFilters {
    pub price: Vec<PriceRange>,
    pub pieces: Vec<PieceRange>,
    pub age: Vec<AgeRange>,
}

impl MenuFilters {
    pub fn is_empty(&self) -> bool {
        self.price.is_empty() && self.pieces.is_empty() && self.age.is_empty()
    }

    /// OR within a dimension, AND across dimensions. Price buckets use the
    /// list price.
    pub fn matches(&self, item: &MenuItem) -> bool {
        let price_ok = self.price.is_empty() || self.price.iter().any(|r| r.contains(item.price));
        let pieces_ok =
            self.pieces.is_empty() || self.pieces.iter().any(|r| r.contains(item.pieces));
        let age_ok = self.age.is_empty()
            || item
                .min_age()
                .is_some_and(|age| self.age.iter().any(|r| r.contains(age)));
        price_ok && pieces_ok && age_ok
    }
}

/// View state of a menu page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuQuery {
    pub search: String,
    pub filters: MenuFilters,
    pub sort: Option<SortOption>,
    pub in_stock_only: bool,
    /// Set on the category page.
    pub category_id: Option<String>,
}

impl MenuQuery {
    pub fn matches_search(&self, item: &MenuItem) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.name.to_lowercase().contains(&needle) || item.code.to_lowercase().contains(&needle)
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        let category_ok = self
            .category_id
            .as_deref()
            .map_or(true, |wanted| item.category_id.as_deref() == Some(wanted));
        let stock_ok = !self.in_stock_only || item.in_stock();
        category_ok && self.matches_search(item) && stock_ok && self.filters.matches(item)
    }

    /// Flip the in-stock toggle. Filters and sort start over either way.
    pub fn toggle_in_stock(&mut self) {
        self.in_stock_only = !self.in_stock_only;
        self.filters = MenuFilters::default();
        self.sort = None;
    }

    /// Select a sort option; selecting the active one clears it.
    pub fn toggle_sort(&mut self, option: SortOption) {
        self.sort = if self.sort == Some(option) {
            None
        } else {
            Some(option)
        };
    }
}

fn filter_and_sort<'a>(
    items: impl Iterator<Item = &'a MenuItem>,
    query: &MenuQuery,
) -> Vec<MenuItem> {
    let mut kept: Vec<MenuItem> = items.filter(|item| query.matches(item)).cloned().collect();
    if let Some(sort) = query.sort {
        kept.sort_by(|a, b| sort.compare(a, b));
    }
    kept
}

/// Apply `query` to `catalog`.
///
/// Categories keep their source order and lose items that do not match;
/// emptied categories are dropped. With `in_stock_only` everything collapses
/// into one [`IN_STOCK_CATEGORY`] list, deduplicated by item id.
pub fn apply_query(catalog: &[Category], query: &MenuQuery) -> Vec<Category> {
    if query.in_stock_only {
        let mut seen = HashSet::new();
        let mut items = filter_and_sort(catalog.iter().flat_map(|c| c.items.iter()), query);
        items.retain(|item| seen.insert(item.id.clone()));
        if items.is_empty() {
            return Vec::new();
        }
        return vec![Category {
            name: IN_STOCK_CATEGORY.to_string(),
            items,
        }];
    }

    catalog
        .iter()
        .map(|category| Category {
            name: category.name.clone(),
            items: filter_and_sort(category.items.iter(), query),
        })
        .filter(|category| !category.items.is_empty())
        .collect()
}

fn pinned_rank(name: &str) -> Option<usize> {
    PINNED_CATEGORIES.iter().position(|p| *p == name)
}

/// Home page order: pinned categories first (in pinned order), then the rest
/// alphabetically.
pub fn order_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| match (pinned_rank(&a.name), pinned_rank(&b.name)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
}

/// Whether any item in the catalog belongs to `category_id`.
pub fn has_category(catalog: &[Category], category_id: &str) -> bool {
    catalog.iter().any(|c| {
        c.items
            .iter()
            .any(|item| item.category_id.as_deref() == Some(category_id))
    })
}

pub fn find_product<'a>(catalog: &'a [Category], id: &str) -> Option<&'a MenuItem> {
    catalog
        .iter()
        .flat_map(|c| c.items.iter())
        .find(|item| item.id == id)
}

// ---------------------------------------------------------------------------
// "See more" paging
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ExpandedCategories {
    names: HashSet<String>,
    all: bool,
}

impl ExpandedCategories {
    pub fn toggle(&mut self, category: &str) {
        if !self.names.remove(category) {
            self.names.insert(category.to_string());
        }
    }

    pub fn expand_all(&mut self) {
        self.all = true;
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.all || self.names.contains(category)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub items: &'a [MenuItem],
    pub hidden: usize,
    pub expanded: bool,
}

impl CategoryView<'_> {
    /// Whether the category offers a "See All..." / "See Less" toggle.
    pub fn is_collapsible(&self) -> bool {
        self.items.len() + self.hidden > PREVIEW_LIMIT
    }
}

pub fn paginate<'a>(
    categories: &'a [Category],
    expanded: &ExpandedCategories,
) -> Vec<CategoryView<'a>> {
    categories
        .iter()
        .map(|category| {
            let is_expanded = expanded.is_expanded(&category.name);
            let shown = if is_expanded {
                category.items.len()
            } else {
                category.items.len().min(PREVIEW_LIMIT)
            };
            CategoryView {
                name: &category.name,
                items: &category.items[..shown],
                hidden: category.items.len() - shown,
                expanded: is_expanded,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Menu tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuTab {
    Static {
        label: String,
    },
    Dynamic {
        label: String,
        category_id: Option<String>,
    },
}

impl MenuTab {
    pub fn label(&self) -> &str {
        match self {
            MenuTab::Static { label } | MenuTab::Dynamic { label, .. } => label,
        }
    }
}

/// Static tabs, then non-empty catalog categories (deduplicated by name, later
/// duplicates win, static names excluded) in alphabetical order. A dynamic
/// tab links to the category id of its first item.
pub fn menu_tabs(catalog: &[Category]) -> Vec<MenuTab> {
    let static_names: HashSet<String> = STATIC_TABS.iter().map(|s| s.to_lowercase()).collect();

    let mut dynamic: Vec<&Category> = Vec::new();
    for category in catalog {
        if category.items.is_empty() || static_names.contains(&category.name.to_lowercase()) {
            continue;
        }
        match dynamic.iter_mut().find(|c| c.name == category.name) {
            Some(slot) => *slot = category,
            None => dynamic.push(category),
        }
    }
    dynamic.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    STATIC_TABS
        .iter()
        .map(|label| MenuTab::Static {
            label: label.to_string(),
        })
        .chain(dynamic.into_iter().map(|c| MenuTab::Dynamic {
            label: c.name.clone(),
            category_id: c.items.first().and_then(|i| i.category_id.clone()),
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            code: format!("C{id}"),
            price,
            quantity: "5".to_string(),
            ..Default::default()
        }
    }

    fn category(name: &str, items: Vec<MenuItem>) -> Category {
        Category {
            name: name.to_string(),
            items,
        }
    }

    fn sample_catalog() -> Vec<Category> {
        vec![
            category(
                "Drinks",
                vec![
                    product("1", "Iced Tea", 2.5),
                    product("2", "Coffee", 55.0),
                    product("3", "Lemon Soda", 100.0),
                ],
            ),
            category(
                "Food",
                vec![product("4", "Fried Rice", 49.99), product("5", "Noodles", 50.0)],
            ),
        ]
    }

    #[test]
    fn empty_search_returns_everything() {
        let catalog = sample_catalog();
        let result = apply_query(&catalog, &MenuQuery::default());
        assert_eq!(result, catalog);
    }

    #[test]
    fn search_matches_name_or_code_case_insensitively() {
        let catalog = sample_catalog();
        let by_name = apply_query(
            &catalog,
            &MenuQuery {
                search: "TEA".into(),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].items[0].id, "1");

        let by_code = apply_query(
            &catalog,
            &MenuQuery {
                search: "c5".into(),
                ..Default::default()
            },
        );
        assert_eq!(by_code[0].name, "Food");
        assert_eq!(by_code[0].items[0].name, "Noodles");
    }

    #[test]
    fn price_buckets_are_inclusive_at_both_ends() {
        assert!(PriceRange::UpTo49.contains(0.0));
        assert!(PriceRange::UpTo49.contains(49.99));
        assert!(!PriceRange::UpTo49.contains(50.0));
        assert!(PriceRange::From50To99.contains(50.0));
        assert!(PriceRange::From50To99.contains(99.99));
        assert!(!PriceRange::From50To99.contains(100.0));
        assert!(PriceRange::From100.contains(100.0));
        assert!(!PriceRange::From100.contains(99.99));
    }

    #[test]
    fn piece_and_age_buckets_are_inclusive() {
        assert!(PieceRange::UpTo99.contains(99));
        assert!(PieceRange::From100To499.contains(100));
        assert!(PieceRange::From100To499.contains(499));
        assert!(PieceRange::From500To999.contains(999));
        assert!(PieceRange::From1000.contains(1000));
        assert!(AgeRange::UpTo5.contains(5));
        assert!(AgeRange::From6To9.contains(6));
        assert!(AgeRange::From10To17.contains(17));
        assert!(AgeRange::Adult.contains(18));
        assert!(!AgeRange::From10To17.contains(18));
    }

    #[test]
    fn filters_or_within_and_across_dimensions() {
        let catalog = sample_catalog();
        let query = MenuQuery {
            filters: MenuFilters {
                price: vec![PriceRange::UpTo49, PriceRange::From100],
                ..Default::default()
            },
            ..Default::default()
        };
        let ids: Vec<String> = apply_query(&catalog, &query)
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id.clone()))
            .collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn unparseable_age_matches_no_bucket() {
        let mut item = product("9", "Puzzle", 10.0);
        item.age = "all ages".into();
        let filters = MenuFilters {
            age: AgeRange::ALL.to_vec(),
            ..Default::default()
        };
        assert!(!filters.matches(&item));
        item.age = "10-14".into();
        assert!(filters.matches(&item));
    }

    #[test]
    fn in_stock_flattens_and_dedupes() {
        let mut catalog = sample_catalog();
        catalog[1].items[1].quantity = "0".into();
        catalog.push(category("Specials", vec![product("1", "Iced Tea", 2.5)]));
        let mut query = MenuQuery::default();
        query.toggle_in_stock();

        let result = apply_query(&catalog, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, IN_STOCK_CATEGORY);
        let ids: Vec<&str> = result[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn toggling_in_stock_resets_filters_and_sort() {
        let mut query = MenuQuery {
            sort: Some(SortOption::Newest),
            filters: MenuFilters {
                pieces: vec![PieceRange::From1000],
                ..Default::default()
            },
            ..Default::default()
        };
        query.toggle_in_stock();
        assert!(query.in_stock_only);
        assert!(query.filters.is_empty());
        assert_eq!(query.sort, None);
    }

    #[test]
    fn sorting_by_price_and_newest() {
        let mut catalog = sample_catalog();
        catalog[0].items[0].created_at = Some("2024-01-01 00:00:00".into());
        catalog[0].items[2].created_at = Some("2024-06-01T10:00:00Z".into());

        let mut query = MenuQuery::default();
        query.toggle_sort(SortOption::PriceHighToLow);
        let drinks = &apply_query(&catalog, &query)[0];
        let prices: Vec<f64> = drinks.items.iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![100.0, 55.0, 2.5]);

        query.toggle_sort(SortOption::Newest);
        let drinks = &apply_query(&catalog, &query)[0];
        let ids: Vec<&str> = drinks.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);

        query.toggle_sort(SortOption::Newest);
        assert_eq!(query.sort, None);
    }

    #[test]
    fn category_filter_keeps_only_matching_items() {
        let mut catalog = sample_catalog();
        catalog[1].items[0].category_id = Some("7".into());
        assert!(has_category(&catalog, "7"));
        assert!(!has_category(&catalog, "8"));

        let query = MenuQuery {
            category_id: Some("7".into()),
            ..Default::default()
        };
        let result = apply_query(&catalog, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].items.len(), 1);
        assert_eq!(result[0].items[0].id, "4");
    }

    #[test]
    fn pinned_categories_lead_then_alphabetical() {
        let mut categories = vec![
            category("soups", vec![]),
            category("Coming Soon", vec![]),
            category("Appetizers", vec![]),
            category("Best Selling", vec![]),
        ];
        order_categories(&mut categories);
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Best Selling", "Coming Soon", "Appetizers", "soups"]);
    }

    #[test]
    fn paginate_previews_four_until_expanded() {
        let items: Vec<MenuItem> = (0..6)
            .map(|i| product(&i.to_string(), "Dish", 1.0))
            .collect();
        let categories = vec![category("Mains", items)];
        let mut expanded = ExpandedCategories::default();

        let views = paginate(&categories, &expanded);
        assert_eq!(views[0].items.len(), PREVIEW_LIMIT);
        assert_eq!(views[0].hidden, 2);
        assert!(views[0].is_collapsible());

        expanded.toggle("Mains");
        let views = paginate(&categories, &expanded);
        assert_eq!(views[0].items.len(), 6);
        assert!(views[0].expanded);

        expanded.toggle("Mains");
        assert!(!expanded.is_expanded("Mains"));
    }

    #[test]
    fn menu_tabs_dedupe_and_skip_static_names() {
        let mut first = product("1", "Tea", 1.0);
        first.category_id = Some("11".into());
        let mut second = product("2", "Rice", 1.0);
        second.category_id = Some("22".into());
        let catalog = vec![
            category("drinks", vec![first]),
            category("best selling", vec![product("3", "X", 1.0)]),
            category("Appetizers", vec![second]),
            category("Empty", vec![]),
        ];
        let tabs = menu_tabs(&catalog);
        assert_eq!(tabs.len(), STATIC_TABS.len() + 2);
        assert_eq!(
            tabs[STATIC_TABS.len()],
            MenuTab::Dynamic {
                label: "Appetizers".into(),
                category_id: Some("22".into())
            }
        );
        assert_eq!(tabs[STATIC_TABS.len() + 1].label(), "drinks");
    }

    #[test]
    fn labels_parse_loosely_and_reject_unknowns() {
        assert_eq!("$50 -  $99.99".parse::<PriceRange>().ok(), Some(PriceRange::From50To99));
        assert_eq!("newest".parse::<SortOption>().ok(), Some(SortOption::Newest));
        assert_eq!("18+".parse::<AgeRange>().ok(), Some(AgeRange::Adult));
        let err = "0 - 6".parse::<AgeRange>().expect_err("unknown bucket");
        assert!(err.to_string().contains("Unknown age option"));
    }

    #[test]
    fn find_product_searches_every_category() {
        let catalog = sample_catalog();
        assert_eq!(find_product(&catalog, "5").map(|i| i.name.as_str()), Some("Noodles"));
        assert!(find_product(&catalog, "99").is_none());
    }
}
