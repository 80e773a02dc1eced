//! Veg/non-veg filter: a binary toggle over the static catalog. Stateless
//! with respect to the cart; hidden cards get display:none, shown cards keep
//! their own layout display mode.

use crate::catalog::{Category, MenuItem};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    Veg,
    NonVeg,
}

impl CategoryFilter {
    pub fn toggled(self) -> Self {
        match self {
            CategoryFilter::Veg => CategoryFilter::NonVeg,
            CategoryFilter::NonVeg => CategoryFilter::Veg,
        }
    }

    pub fn shows(self, category: Category) -> bool {
        match self {
            CategoryFilter::Veg => category == Category::Veg,
            CategoryFilter::NonVeg => category == Category::NonVeg,
        }
    }

    /// CSS display value for a card under this filter.
    pub fn display_for(self, item: &MenuItem) -> &'static str {
        if self.shows(item.category) {
            item.layout.display()
        } else {
            "none"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardLayout;

    fn card(category: Category, layout: CardLayout) -> MenuItem {
        MenuItem {
            name: "x",
            price: 1,
            category,
            layout,
            blurb: "",
        }
    }

    #[test]
    fn nonveg_filter_hides_veg_and_keeps_layout() {
        let filter = CategoryFilter::NonVeg;
        assert_eq!(filter.display_for(&card(Category::Veg, CardLayout::Standard)), "none");
        assert_eq!(filter.display_for(&card(Category::NonVeg, CardLayout::Standard)), "flex");
        assert_eq!(filter.display_for(&card(Category::NonVeg, CardLayout::Wide)), "grid");
    }

    #[test]
    fn veg_filter_is_the_mirror_image() {
        let filter = CategoryFilter::Veg;
        assert_eq!(filter.display_for(&card(Category::NonVeg, CardLayout::Wide)), "none");
        assert_eq!(filter.display_for(&card(Category::Veg, CardLayout::Wide)), "grid");
    }

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(CategoryFilter::Veg.toggled(), CategoryFilter::NonVeg);
        assert_eq!(CategoryFilter::NonVeg.toggled(), CategoryFilter::Veg);
    }
}
