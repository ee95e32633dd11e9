//! Catalog browsing helpers
//!
//! Stateless views over a menu slice. Every helper keeps catalog order,
//! returns a lazy iterator that can be cloned to restart it, and yields
//! nothing (rather than failing) when no item matches.

mod loader;

pub use loader::{CatalogError, load_catalog, validate_catalog};

use shared::models::{CatalogItem, MenuCategory};

/// Items of one category, in catalog order
pub fn by_category(
    items: &[CatalogItem],
    category: MenuCategory,
) -> impl Iterator<Item = &CatalogItem> + Clone {
    items.iter().filter(move |item| item.category == category)
}

/// Items whose name contains `term`, ignoring case
///
/// An empty term matches every item, like an empty search box.
pub fn search<'a>(
    items: &'a [CatalogItem],
    term: &str,
) -> impl Iterator<Item = &'a CatalogItem> + Clone + use<'a> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(move |item| item.name.to_lowercase().contains(&needle))
}

/// Contents of one menu tab on the ordering screen: search, then category
pub fn menu_tab<'a>(
    items: &'a [CatalogItem],
    category: MenuCategory,
    term: &str,
) -> impl Iterator<Item = &'a CatalogItem> + Clone + use<'a> {
    search(items, term).filter(move |item| item.category == category)
}

/// Items grouped into tabs, in [`MenuCategory::ALL`] order
///
/// Empty categories are kept so the tab bar stays stable.
pub fn group_by_category(items: &[CatalogItem]) -> Vec<(MenuCategory, Vec<&CatalogItem>)> {
    MenuCategory::ALL
        .into_iter()
        .map(|category| (category, by_category(items, category).collect()))
        .collect()
}

/// Find a catalog item by id
pub fn find_item(items: &[CatalogItem], id: i64) -> Option<&CatalogItem> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn ids<'a>(iter: impl Iterator<Item = &'a CatalogItem>) -> Vec<i64> {
        iter.map(|item| item.id).collect()
    }

    #[test]
    fn test_by_category_keeps_catalog_order() {
        let menu = seed::menu_items();
        assert_eq!(ids(by_category(&menu, MenuCategory::Mains)), vec![5, 6, 7, 8]);
        assert_eq!(ids(by_category(&menu, MenuCategory::Drinks)), vec![9, 10, 11, 12]);
    }

    #[test]
    fn test_by_category_interleaved_input() {
        let mut menu = seed::menu_items();
        menu.reverse();
        menu.swap(0, 6);
        let mains = ids(by_category(&menu, MenuCategory::Mains));
        let expected: Vec<i64> = menu
            .iter()
            .filter(|i| i.category == MenuCategory::Mains)
            .map(|i| i.id)
            .collect();
        assert_eq!(mains, expected);
    }

    #[test]
    fn test_empty_catalog_yields_nothing() {
        let menu: Vec<CatalogItem> = Vec::new();
        assert_eq!(by_category(&menu, MenuCategory::Starters).count(), 0);
        assert_eq!(search(&menu, "pizza").count(), 0);
        assert_eq!(menu_tab(&menu, MenuCategory::Mains, "").count(), 0);
        assert!(group_by_category(&menu).iter().all(|(_, items)| items.is_empty()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let menu = seed::menu_items();
        assert_eq!(ids(search(&menu, "PIZZA")), vec![5]);
        assert_eq!(ids(search(&menu, "ca")), vec![2, 4, 6, 9]);
        assert_eq!(search(&menu, "sushi").count(), 0);
    }

    #[test]
    fn test_search_empty_term_matches_all() {
        let menu = seed::menu_items();
        assert_eq!(search(&menu, "").count(), menu.len());
    }

    #[test]
    fn test_iterators_are_restartable() {
        let menu = seed::menu_items();
        let drinks = by_category(&menu, MenuCategory::Drinks);
        assert_eq!(drinks.clone().count(), 4);
        assert_eq!(ids(drinks), vec![9, 10, 11, 12]);

        let found = search(&menu, "salad");
        assert_eq!(found.clone().count(), 1);
        assert_eq!(found.count(), 1);
    }

    #[test]
    fn test_menu_tab_combines_search_and_category() {
        let menu = seed::menu_items();
        assert_eq!(ids(menu_tab(&menu, MenuCategory::Starters, "ca")), vec![2, 4]);
        assert_eq!(ids(menu_tab(&menu, MenuCategory::Drinks, "ca")), vec![9]);
        assert_eq!(menu_tab(&menu, MenuCategory::Mains, "cola").count(), 0);
    }

    #[test]
    fn test_group_by_category_tab_order() {
        let menu = seed::menu_items();
        let groups = group_by_category(&menu);
        let order: Vec<MenuCategory> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, MenuCategory::ALL.to_vec());
        assert!(groups.iter().all(|(_, items)| items.len() == 4));
        assert_eq!(groups[0].1[0].name, "Bruschetta");
    }

    #[test]
    fn test_find_item() {
        let menu = seed::menu_items();
        assert_eq!(find_item(&menu, 11).map(|i| i.name.as_str()), Some("Espresso"));
        assert!(find_item(&menu, 100).is_none());
    }
}
