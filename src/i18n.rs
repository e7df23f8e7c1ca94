//! Khmer / English string tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StorefrontError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Kh,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Kh => "kh",
            Language::En => "en",
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Kh => &KH,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kh" | "km" => Ok(Language::Kh),
            "en" => Ok(Language::En),
            other => Err(StorefrontError::UnknownOption {
                kind: "language",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub order_underway: &'static str,
    pub order_successfully: &'static str,
    pub order_failed: &'static str,
    pub empty_basket: &'static str,
    pub new_order: &'static str,
    pub ordered_items: &'static str,
    pub total: &'static str,
    pub items: &'static str,
    pub shop_info: &'static str,
    pub contact_us: &'static str,
    pub no_items_found: &'static str,
    pub page_not_found: &'static str,
    pub product_not_found: &'static str,
    pub product_load_failed: &'static str,
    pub see_all: &'static str,
    pub see_less: &'static str,
    pub show_in_stock_only: &'static str,
    pub show_all_products: &'static str,
}

pub static KH: Translations = Translations {
    order_underway: "កំពុងបញ្ជាទិញ...",
    order_successfully: "ការបញ្ជាទិញបានជោគជ័យ",
    order_failed: "ការបញ្ជាទិញបរាជ័យ សូមព្យាយាមម្តងទៀត",
    empty_basket: "កន្ត្រករបស់អ្នកទទេ",
    new_order: "ការកុម្ម៉ង់ថ្មី",
    ordered_items: "មុខម្ហូបដែលបានកុម្ម៉ង់",
    total: "សរុប",
    items: "ចំនួន",
    shop_info: "ព័ត៌មានហាង",
    contact_us: "ទំនាក់ទំនងយើងតាមបណ្តាញសង្គមផ្លូវការ",
    no_items_found: "រកមិនឃើញទំនិញ",
    page_not_found: "404 រកមិនឃើញទំព័រ",
    product_not_found: "រកមិនឃើញទំនិញ",
    product_load_failed: "មិនអាចទាញយកព័ត៌មានទំនិញបានទេ",
    see_all: "មើលទាំងអស់...",
    see_less: "មើលតិច",
    show_in_stock_only: "បង្ហាញតែទំនិញមានស្តុក",
    show_all_products: "បង្ហាញទំនិញទាំងអស់",
};

pub static EN: Translations = Translations {
    order_underway: "Placing your order...",
    order_successfully: "Order placed successfully",
    order_failed: "Order failed, please try again",
    empty_basket: "Your basket is empty",
    new_order: "New order",
    ordered_items: "Already ordered",
    total: "Total",
    items: "Items",
    shop_info: "Shop info",
    contact_us: "Contact us through our official social media channels",
    no_items_found: "No items found",
    page_not_found: "404 Page Not Found",
    product_not_found: "Product not found",
    product_load_failed: "Failed to load product data",
    see_all: "See All...",
    see_less: "See Less",
    show_in_stock_only: "Show In Stock Only",
    show_all_products: "Show All Products",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_khmer() {
        assert_eq!(Language::default(), Language::Kh);
        assert_eq!(Language::default().translations(), &KH);
    }

    #[test]
    fn parses_known_codes_only() {
        assert_eq!("EN".parse::<Language>().ok(), Some(Language::En));
        assert_eq!(" kh ".parse::<Language>().ok(), Some(Language::Kh));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn tables_swap_strings() {
        assert_eq!(Language::En.translations().see_all, "See All...");
        assert_ne!(
            Language::En.translations().order_failed,
            Language::Kh.translations().order_failed
        );
    }
}
