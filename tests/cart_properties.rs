use menu_storefront_lib::cart::{Cart, CartAction};
use menu_storefront_lib::catalog::{apply_query, MenuQuery, PriceRange};
use menu_storefront_lib::models::{round_to_cents, Category, MenuItem};
use proptest::prelude::*;

fn menu_item(slot: u8) -> MenuItem {
    let cents = 99 + u32::from(slot) * 137;
    MenuItem {
        id: format!("item-{slot}"),
        name: format!("Dish {slot}"),
        code: format!("{}", 1000 + u32::from(slot)),
        price: f64::from(cents) / 100.0,
        promo_price: (slot % 3 == 0).then(|| f64::from(cents / 2) / 100.0),
        ..Default::default()
    }
}

fn action_strategy() -> impl Strategy<Value = CartAction> {
    prop_oneof![
        4 => (0u8..6, 0u32..20).prop_map(|(slot, quantity)| CartAction::Add {
            item: menu_item(slot),
            quantity,
            comment: None,
        }),
        2 => (0u8..8).prop_map(|slot| CartAction::Remove {
            item_id: format!("item-{slot}"),
        }),
        2 => (0u8..8, 0u32..20).prop_map(|(slot, quantity)| CartAction::UpdateQuantity {
            item_id: format!("item-{slot}"),
            quantity,
        }),
        1 => Just(CartAction::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn totals_always_match_lines(actions in proptest::collection::vec(action_strategy(), 0..40)) {
        let mut cart = Cart::new();
        for action in actions {
            cart.dispatch(action);

            let quantities: u64 = cart.items().iter().map(|l| u64::from(l.quantity)).sum();
            let subtotals = round_to_cents(cart.items().iter().map(|l| l.subtotal).sum());
            prop_assert_eq!(cart.total_items(), quantities);
            prop_assert_eq!(cart.total_price(), subtotals);

            for line in cart.items() {
                prop_assert_eq!(
                    line.subtotal,
                    round_to_cents(f64::from(line.quantity) * line.unit_price())
                );
            }
        }
    }

    #[test]
    fn adding_twice_keeps_the_last_quantity(slot in 0u8..6, first in 1u32..50, second in 1u32..50) {
        let mut cart = Cart::new();
        cart.add(&menu_item(slot), first);
        cart.add(&menu_item(slot), second);
        prop_assert_eq!(cart.items().len(), 1);
        prop_assert_eq!(cart.total_items(), u64::from(second));
    }

    #[test]
    fn removing_unknown_ids_changes_nothing(slots in proptest::collection::vec(0u8..6, 0..6)) {
        let mut cart = Cart::new();
        for slot in &slots {
            cart.add_one(&menu_item(*slot));
        }
        let before = cart.clone();
        cart.remove("not-on-the-menu");
        prop_assert_eq!(cart, before);
    }

    #[test]
    fn search_by_any_substring_of_name_finds_item(slot in 0u8..6, start in 0usize..4, len in 1usize..4) {
        let item = menu_item(slot);
        let name = item.name.to_uppercase();
        let end = (start + len).min(name.len());
        let needle = &name[start.min(end)..end];
        let catalog = vec![Category { name: "Menu".into(), items: vec![item.clone()] }];
        let query = MenuQuery { search: needle.to_string(), ..Default::default() };
        let found = apply_query(&catalog, &query);
        prop_assert!(found.iter().any(|c| c.items.iter().any(|i| i.id == item.id)));
    }

    #[test]
    fn price_buckets_include_their_bounds(cents in 0u32..20_000) {
        let price = f64::from(cents) / 100.0;
        let hits = PriceRange::ALL.iter().filter(|r| r.contains(price)).count();
        prop_assert_eq!(hits, 1);
    }
}

#[test]
fn clear_empties_cart_and_zeroes_totals() {
    let mut cart = Cart::new();
    cart.add(&menu_item(1), 3);
    cart.add(&menu_item(2), 1);
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), 0.0);
}
