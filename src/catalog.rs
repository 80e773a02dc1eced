//! Static menu catalog. The card data the page used to carry in markup
//! (name, price, veg tag, layout) lives here as compile-time constants.

/// Veg/non-veg tag on every menu card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Veg,
    NonVeg,
}

/// How a card is laid out by the surrounding grid. Different cards use
/// different display modes, and the filter must restore the right one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    Standard,
    Wide,
}

impl CardLayout {
    pub fn display(self) -> &'static str {
        match self {
            CardLayout::Standard => "flex",
            CardLayout::Wide => "grid",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub price: u32,
    pub category: Category,
    pub layout: CardLayout,
    pub blurb: &'static str,
}

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        name: "Burger",
        price: 150,
        category: Category::NonVeg,
        layout: CardLayout::Wide,
        blurb: "Grilled chicken patty, lettuce, house sauce.",
    },
    MenuItem {
        name: "Veggie Burger",
        price: 120,
        category: Category::Veg,
        layout: CardLayout::Standard,
        blurb: "Crispy veg patty with onions and tomato.",
    },
    MenuItem {
        name: "Chicken Pizza",
        price: 280,
        category: Category::NonVeg,
        layout: CardLayout::Wide,
        blurb: "Loaded chicken tikka on a hand-tossed base.",
    },
    MenuItem {
        name: "Paneer Pizza",
        price: 250,
        category: Category::Veg,
        layout: CardLayout::Standard,
        blurb: "Spiced paneer cubes, capsicum, extra cheese.",
    },
    MenuItem {
        name: "French Fries",
        price: 90,
        category: Category::Veg,
        layout: CardLayout::Standard,
        blurb: "Salted shoestring fries, served hot.",
    },
    MenuItem {
        name: "Chicken Wings",
        price: 180,
        category: Category::NonVeg,
        layout: CardLayout::Standard,
        blurb: "Six peri-peri glazed wings.",
    },
];

/// Catalog sanity: every card needs a unique non-empty name and a non-zero
/// price for cart keys and line totals to be meaningful.
pub fn validate(items: &[MenuItem]) -> bool {
    items.iter().all(|i| !i.name.is_empty() && i.price > 0)
        && items
            .iter()
            .enumerate()
            .all(|(n, a)| items[..n].iter().all(|b| b.name != a.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        assert!(validate(MENU_ITEMS));
    }

    #[test]
    fn catalog_has_both_categories() {
        assert!(MENU_ITEMS.iter().any(|i| i.category == Category::Veg));
        assert!(MENU_ITEMS.iter().any(|i| i.category == Category::NonVeg));
    }

    #[test]
    fn validate_rejects_duplicates_and_zero_prices() {
        let dup = [
            MenuItem {
                name: "Burger",
                price: 150,
                category: Category::NonVeg,
                layout: CardLayout::Standard,
                blurb: "",
            },
            MenuItem {
                name: "Burger",
                price: 120,
                category: Category::Veg,
                layout: CardLayout::Standard,
                blurb: "",
            },
        ];
        assert!(!validate(&dup));
        let free = [MenuItem {
            name: "Water",
            price: 0,
            category: Category::Veg,
            layout: CardLayout::Standard,
            blurb: "",
        }];
        assert!(!validate(&free));
    }
}
