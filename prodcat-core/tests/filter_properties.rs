use prodcat_core::{visible_products, Catalog, Category, FilterState, Product, Sex, User};
use proptest::prelude::*;

// Strategy for catalogs with deliberately imperfect referential
// integrity: some categories point at missing owners, some products at
// missing categories.
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    let users = prop::collection::vec(
        (0i64..6, "[A-Za-z]{1,8}", any::<bool>()).prop_map(|(id, name, male)| User {
            id,
            name,
            sex: if male { Sex::Male } else { Sex::Female },
        }),
        0..5,
    );
    let categories = prop::collection::vec(
        (0i64..8, "[A-Za-z]{1,8}", 0i64..10).prop_map(|(id, title, owner_id)| Category {
            id,
            title,
            icon: "🍏".to_string(),
            owner_id,
        }),
        0..6,
    );
    // Product ids are assigned by position so they stay unique
    let products = prop::collection::vec(("[A-Za-z]{0,10}", 0i64..12), 0..20).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(idx, (name, category_id))| Product {
                id: idx as i64,
                name,
                category_id,
            })
            .collect::<Vec<_>>()
    });

    (users, categories, products)
        .prop_map(|(users, categories, products)| Catalog::new(users, categories, products))
}

proptest! {
    /// Property: the row count always equals the count of products
    /// passing both predicates, and never exceeds the catalog size.
    #[test]
    fn prop_row_count_matches_predicate(
        catalog in arb_catalog(),
        user_id in prop::option::of(0i64..10),
        query in "[A-Za-z]{0,4}",
    ) {
        let mut state = FilterState::new();
        state.select_user(user_id);
        state.set_query(query);

        let rows = visible_products(&catalog, &state);
        let expected = catalog
            .products
            .iter()
            .filter(|p| state.matches(&catalog, p))
            .count();

        prop_assert_eq!(rows.len(), expected);
        prop_assert!(rows.len() <= catalog.products.len());
    }

    /// Property: combining both filters in one pass equals applying the
    /// user filter alone and intersecting with the search filter alone,
    /// in either order.
    #[test]
    fn prop_filters_compose_commutatively(
        catalog in arb_catalog(),
        user_id in prop::option::of(0i64..10),
        query in "[A-Za-z]{0,4}",
    ) {
        let mut combined = FilterState::new();
        combined.select_user(user_id);
        combined.set_query(query.clone());

        let mut user_only = FilterState::new();
        user_only.select_user(user_id);

        let mut query_only = FilterState::new();
        query_only.set_query(query);

        let both: Vec<i64> = visible_products(&catalog, &combined)
            .iter()
            .map(|r| r.product.id)
            .collect();
        let intersected: Vec<i64> = catalog
            .products
            .iter()
            .filter(|p| user_only.matches(&catalog, p) && query_only.matches(&catalog, p))
            .map(|p| p.id)
            .collect();

        prop_assert_eq!(both, intersected);
    }

    /// Property: derived rows preserve the original product order.
    #[test]
    fn prop_order_preserved(
        catalog in arb_catalog(),
        query in "[A-Za-z]{0,3}",
    ) {
        let mut state = FilterState::new();
        state.set_query(query);

        let ids: Vec<i64> = visible_products(&catalog, &state)
            .iter()
            .map(|r| r.product.id)
            .collect();

        let mut expected: Vec<i64> = catalog.products.iter().map(|p| p.id).collect();
        expected.retain(|id| ids.contains(id));

        prop_assert_eq!(ids, expected);
    }

    /// Property: search never depends on letter case.
    #[test]
    fn prop_search_case_insensitive(
        catalog in arb_catalog(),
        query in "[A-Za-z]{1,4}",
    ) {
        let mut lower = FilterState::new();
        lower.set_query(query.to_lowercase());
        let mut upper = FilterState::new();
        upper.set_query(query.to_uppercase());

        let a: Vec<i64> = visible_products(&catalog, &lower).iter().map(|r| r.product.id).collect();
        let b: Vec<i64> = visible_products(&catalog, &upper).iter().map(|r| r.product.id).collect();

        prop_assert_eq!(a, b);
    }

    /// Property: reset always lands in the default state, no matter the
    /// mutation history, and is idempotent.
    #[test]
    fn prop_reset_is_idempotent(
        user_id in prop::option::of(0i64..10),
        query in ".{0,8}",
    ) {
        let mut state = FilterState::new();
        state.select_user(user_id);
        state.set_query(query);

        state.reset();
        prop_assert_eq!(state.clone(), FilterState::new());
        state.reset();
        prop_assert_eq!(state, FilterState::new());
    }
}
