//! Command-line front end: one subcommand per storefront page.

use anyhow::{bail, Context};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

use crate::api::{CatalogSource, TableNumber, Tenant, TenantApi};
use crate::catalog::{
    menu_tabs, paginate, AgeRange, CategoryView, ExpandedCategories, MenuFilters, MenuQuery,
    MenuTab, PieceRange, PriceRange, SortOption,
};
use crate::config::{load_preferences, save_preferences, Preferences, StorefrontConfig};
use crate::error::StorefrontError;
use crate::i18n::{Language, Translations};
use crate::models::{format_price, MenuItem, ShopContact, ShopSettings};
use crate::orders::{OrderDesk, OrderNotice, RunningTotals};
use crate::storefront::{MenuData, PageState, ProductDetail, ProductPage, Storefront};

#[derive(Parser, Debug)]
#[command(name = "menu-storefront", version)]
#[command(about = "Browse a shop's menu and place table orders")]
#[command(
    after_help = "Environment:\n  STOREFRONT_DOMAIN        Vendor domain tenants live under\n  STOREFRONT_API_BASE      Fixed API base URL\n  STOREFRONT_TIMEOUT_SECS  Request timeout\n  STOREFRONT_DATA_DIR      Config, preferences and logs\n  RUST_LOG                 Log filter override"
)]
pub struct Cli {
    /// Print machine-readable JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
    /// Display language for this run (kh or en).
    #[arg(long, global = true)]
    pub lang: Option<Language>,
    #[arg(long, global = true)]
    pub domain: Option<String>,
    #[arg(long = "api-base", global = true)]
    pub api_base: Option<String>,
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Home page: every category.
    Menu {
        tenant: Tenant,
        /// Read the older product endpoint.
        #[arg(long, default_value_t = false)]
        legacy: bool,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// One category by id.
    Category {
        tenant: Tenant,
        category_id: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    Product {
        tenant: Tenant,
        id: String,
    },
    /// Menu bar tabs.
    Tabs {
        tenant: Tenant,
    },
    /// Shop settings and contact links.
    Info {
        tenant: Tenant,
    },
    /// Table ordering: show the open order, add lines, submit.
    Table {
        tenant: Tenant,
        table: TableNumber,
        /// Add a line, as `ID=QTY`.
        #[arg(long = "add")]
        add: Vec<LineArg>,
        /// Attach a note to a line, as `ID=TEXT`.
        #[arg(long = "comment")]
        comment: Vec<CommentArg>,
        #[arg(long, default_value_t = false)]
        submit: bool,
    },
    /// Show or persist the display language.
    Language {
        language: Option<Language>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Case-insensitive match on name or code.
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub price: Vec<PriceRange>,
    #[arg(long)]
    pub pieces: Vec<PieceRange>,
    #[arg(long)]
    pub age: Vec<AgeRange>,
    #[arg(long)]
    pub sort: Option<SortOption>,
    #[arg(long = "in-stock", default_value_t = false)]
    pub in_stock: bool,
    /// Show every item of this category instead of a preview.
    #[arg(long)]
    pub expand: Vec<String>,
    #[arg(long = "expand-all", default_value_t = false)]
    pub expand_all: bool,
}

impl QueryArgs {
    pub fn to_query(&self) -> MenuQuery {
        MenuQuery {
            search: self.search.clone().unwrap_or_default(),
            filters: MenuFilters {
                price: self.price.clone(),
                pieces: self.pieces.clone(),
                age: self.age.clone(),
            },
            sort: self.sort,
            in_stock_only: self.in_stock,
            category_id: None,
        }
    }

    pub fn expanded(&self) -> ExpandedCategories {
        let mut expanded = ExpandedCategories::default();
        for name in &self.expand {
            expanded.toggle(name);
        }
        if self.expand_all {
            expanded.expand_all();
        }
        expanded
    }
}

/// `ID=QTY` with a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineArg {
    pub id: String,
    pub quantity: u32,
}

impl FromStr for LineArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, qty) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ID=QTY, got {s:?}"))?;
        let id = id.trim();
        if id.is_empty() {
            return Err(format!("missing product id in {s:?}"));
        }
        let quantity: u32 = qty
            .trim()
            .parse()
            .map_err(|_| format!("quantity must be a whole number, got {qty:?}"))?;
        if quantity == 0 {
            return Err("quantity must be at least 1".to_string());
        }
        Ok(LineArg {
            id: id.to_string(),
            quantity,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentArg {
    pub id: String,
    pub text: String,
}

impl FromStr for CommentArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, text) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ID=TEXT, got {s:?}"))?;
        let id = id.trim();
        if id.is_empty() {
            return Err(format!("missing product id in {s:?}"));
        }
        Ok(CommentArg {
            id: id.to_string(),
            text: text.trim().to_string(),
        })
    }
}

impl Cli {
    /// Flags win over the config file and the environment.
    pub fn apply_overrides(&self, config: &mut StorefrontConfig) {
        if let Some(domain) = &self.domain {
            config.vendor_domain = domain.trim().to_string();
        }
        if let Some(base) = &self.api_base {
            config.api_base = Some(base.trim().to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

pub async fn execute(cli: Cli, config: StorefrontConfig) -> anyhow::Result<()> {
    let saved = load_preferences(&config.data_dir);
    let language = cli.lang.unwrap_or(saved.language);
    let t = language.translations();
    let json = cli.json;

    match cli.command {
        Command::Menu {
            tenant,
            legacy,
            query,
        } => {
            let source = if legacy {
                CatalogSource::Legacy
            } else {
                CatalogSource::Grouped
            };
            let storefront = open_storefront(&config, tenant)?;
            let data = ready_page(storefront.load_menu(source).await, t)?;
            emit(json, &menu_json(&data, &query)?, || {
                render_menu(&storefront, &data, &query, t)
            })
        }
        Command::Category {
            tenant,
            category_id,
            query,
        } => {
            let storefront = open_storefront(&config, tenant)?;
            let data = ready_page(
                storefront
                    .load_category(CatalogSource::Grouped, &category_id)
                    .await,
                t,
            )?;
            emit(json, &menu_json(&data, &query)?, || {
                render_menu(&storefront, &data, &query, t)
            })
        }
        Command::Product { tenant, id } => {
            let storefront = open_storefront(&config, tenant)?;
            match storefront.load_product(&id).await {
                Some(ProductPage::Found(detail)) => emit(json, &detail, || {
                    render_product(storefront.api(), &detail)
                }),
                Some(ProductPage::NotFound) => bail!(t.product_not_found),
                Some(ProductPage::LoadFailed) | None => bail!(t.product_load_failed),
            }
        }
        Command::Tabs { tenant } => {
            let storefront = open_storefront(&config, tenant)?;
            let data = ready_page(storefront.load_menu(CatalogSource::Grouped).await, t)?;
            let tabs = menu_tabs(&data.catalog);
            emit(json, &tabs, || render_tabs(&tabs))
        }
        Command::Info { tenant } => {
            let api = TenantApi::new(&config, tenant)?;
            let (settings, contact) = tokio::join!(api.fetch_settings(), api.fetch_contact());
            let settings = settings.unwrap_or_else(|e| {
                warn!(error = %e, "settings unavailable, using defaults");
                ShopSettings::default()
            });
            let contact = contact.unwrap_or_else(|e| {
                warn!(error = %e, "contact links unavailable");
                ShopContact::default()
            });
            let body = json!({ "settings": settings, "contact": contact });
            emit(json, &body, || render_info(&api, &settings, &contact, t))
        }
        Command::Table {
            tenant,
            table,
            add,
            comment,
            submit,
        } => run_table(&config, tenant, table, language, add, comment, submit, json).await,
        Command::Language { language: chosen } => {
            let current = match chosen {
                Some(lang) => {
                    save_preferences(&config.data_dir, &Preferences { language: lang })
                        .context("saving language preference")?;
                    info!(language = %lang, "language preference saved");
                    lang
                }
                None => saved.language,
            };
            emit(json, &json!({ "language": current.code() }), || {
                format!("{current}\n")
            })
        }
    }
}

fn open_storefront(config: &StorefrontConfig, tenant: Tenant) -> anyhow::Result<Storefront> {
    Ok(Storefront::new(TenantApi::new(config, tenant)?))
}

fn ready_page(
    state: Option<PageState<MenuData>>,
    t: &Translations,
) -> anyhow::Result<MenuData> {
    match state.and_then(PageState::ready) {
        Some(data) => Ok(data),
        None => bail!(t.page_not_found),
    }
}

fn emit<T, F>(json: bool, body: &T, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(body)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_table(
    config: &StorefrontConfig,
    tenant: Tenant,
    table: TableNumber,
    language: Language,
    add: Vec<LineArg>,
    comments: Vec<CommentArg>,
    submit: bool,
    json: bool,
) -> anyhow::Result<()> {
    let t = language.translations();
    let storefront = open_storefront(config, tenant)?;
    let data = ready_page(storefront.load_menu(CatalogSource::Grouped).await, t)?;

    let mut desk = OrderDesk::new(storefront.api().clone(), table, language);
    desk.refresh_history().await;

    for line in &add {
        let item = lookup(&data, &line.id)?;
        desk.cart_mut().add(item, line.quantity);
    }
    for note in comments {
        let item = lookup(&data, &note.id)?;
        let quantity = desk.cart().quantity_of(&item.id);
        if quantity == 0 {
            bail!("product {} is not in the basket", note.id);
        }
        desk.cart_mut()
            .add_with_comment(item, quantity, Some(note.text));
    }

    let mut outcome: Option<OrderNotice> = None;
    if submit {
        let notice = match desk
            .place_order(|n| {
                if !json {
                    eprintln!("{}", n.message);
                }
            })
            .await
        {
            Ok(notice) => notice,
            Err(StorefrontError::EmptyCart) => bail!(t.empty_basket),
            Err(e) => return Err(e.into()),
        };
        outcome = Some(notice);
    }

    let symbol = data.settings.currency_symbol.as_str();
    let body = json!({
        "table": desk.table(),
        "history": desk.history(),
        "cart": desk.cart(),
        "totals": desk.totals(),
        "notice": outcome,
    });
    emit(json, &body, || {
        render_table(&desk, outcome.as_ref(), symbol, t)
    })
}

fn lookup<'a>(data: &'a MenuData, id: &str) -> anyhow::Result<&'a MenuItem> {
    crate::catalog::find_product(&data.catalog, id)
        .with_context(|| format!("product {id} is not on the menu"))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct MenuBody<'a> {
    settings: &'a ShopSettings,
    categories: Vec<CategoryView<'a>>,
}

/// Requested expansions on the home page; everything elsewhere.
fn expansion(data: &MenuData, menu_query: &MenuQuery, query: &QueryArgs) -> ExpandedCategories {
    let mut expanded = query.expanded();
    if !data.previews(menu_query) {
        expanded.expand_all();
    }
    expanded
}

fn menu_json(data: &MenuData, query: &QueryArgs) -> anyhow::Result<serde_json::Value> {
    let menu_query = query.to_query();
    let categories = data.view(&menu_query);
    let expanded = expansion(data, &menu_query, query);
    let body = MenuBody {
        settings: &data.settings,
        categories: paginate(&categories, &expanded),
    };
    Ok(serde_json::to_value(body)?)
}

fn price_label(symbol: &str, item: &MenuItem) -> String {
    if item.has_promotion() {
        format!(
            "{} (was {})",
            format_price(symbol, item.effective_price()),
            format_price(symbol, item.price)
        )
    } else {
        format_price(symbol, item.effective_price())
    }
}

fn render_menu(
    storefront: &Storefront,
    data: &MenuData,
    query: &QueryArgs,
    t: &Translations,
) -> String {
    let symbol = data.settings.currency_symbol.as_str();
    let mut out = format!("{}\n", data.settings.site_name);
    if let Some(logo) = &data.settings.logo {
        out.push_str(&format!("{}\n", storefront.api().logo_url(logo)));
    }

    let menu_query = query.to_query();
    let categories = data.view(&menu_query);
    if categories.is_empty() {
        out.push_str(&format!("\n{}\n", t.no_items_found));
        return out;
    }
    let previews = data.previews(&menu_query);
    for view in paginate(&categories, &expansion(data, &menu_query, query)) {
        out.push_str(&format!("\n== {} ==\n", view.name));
        for item in view.items {
            out.push_str(&format!(
                "  [{}] {}  {}\n",
                item.id,
                item.name,
                price_label(symbol, item)
            ));
        }
        if view.hidden > 0 {
            out.push_str(&format!("  {} (+{})\n", t.see_all, view.hidden));
        } else if previews && view.is_collapsible() {
            out.push_str(&format!("  {}\n", t.see_less));
        }
    }
    out
}

fn render_product(api: &TenantApi, detail: &ProductDetail) -> String {
    let item = &detail.item;
    let mut out = format!(
        "{}\n{}\n",
        item.name,
        price_label(&detail.currency_symbol, item)
    );
    if !item.code.is_empty() {
        out.push_str(&format!("code: {}\n", item.code));
    }
    if !item.age.is_empty() {
        out.push_str(&format!("age: {}\n", item.age));
    }
    if item.pieces > 0 {
        out.push_str(&format!("pieces: {}\n", item.pieces));
    }
    out.push_str(&format!("in stock: {}\n", item.quantity));
    for image in &detail.gallery {
        out.push_str(&format!("{}\n", api.asset_url(image)));
    }
    out
}

fn render_tabs(tabs: &[MenuTab]) -> String {
    tabs.iter()
        .map(|tab| match tab {
            MenuTab::Static { label } => format!("{label}\n"),
            MenuTab::Dynamic {
                label,
                category_id: Some(id),
            } => format!("{label}  (category {id})\n"),
            MenuTab::Dynamic { label, .. } => format!("{label}\n"),
        })
        .collect()
}

fn render_info(
    api: &TenantApi,
    settings: &ShopSettings,
    contact: &ShopContact,
    t: &Translations,
) -> String {
    let mut out = format!("{}\n{}: {}\n", t.shop_info, settings.site_name, api.base_url());
    out.push_str(&format!("currency: {}\n", settings.currency_symbol));
    if let Some(logo) = &settings.logo {
        out.push_str(&format!("logo: {}\n", api.logo_url(logo)));
    }
    for slide in &settings.slideshow {
        out.push_str(&format!("slide: {}\n", api.asset_url(slide)));
    }
    if !contact.links.is_empty() {
        out.push_str(&format!("\n{}\n", t.contact_us));
        for link in &contact.links {
            out.push_str(&format!("  {}\n", link.url));
        }
    }
    out
}

fn render_totals(totals: &RunningTotals, symbol: &str, t: &Translations) -> String {
    format!(
        "{}: {}  {}: {}\n",
        t.items,
        totals.total_items,
        t.total,
        format_price(symbol, totals.total_price)
    )
}

fn render_table(
    desk: &OrderDesk,
    notice: Option<&OrderNotice>,
    symbol: &str,
    t: &Translations,
) -> String {
    let mut out = format!("#{}\n", desk.table());

    if let Some(order) = desk.history() {
        out.push_str(&format!("\n{}\n", t.ordered_items));
        for line in &order.items {
            out.push_str(&format!(
                "  {} x{}  {}\n",
                line.name,
                line.quantity,
                format_price(symbol, line.unit_price())
            ));
        }
    }

    out.push_str(&format!("\n{}\n", t.new_order));
    if desk.cart().is_empty() {
        out.push_str(&format!("  {}\n", t.empty_basket));
    }
    for line in desk.cart().items() {
        out.push_str(&format!(
            "  {} x{}  {}\n",
            line.name,
            line.quantity,
            format_price(symbol, line.subtotal)
        ));
        if let Some(comment) = &line.comment {
            out.push_str(&format!("    \"{comment}\"\n"));
        }
    }

    out.push('\n');
    out.push_str(&render_totals(&desk.totals(), symbol, t));
    if let Some(notice) = notice {
        out.push_str(&format!("{}\n", notice.message));
    }
    out
}
