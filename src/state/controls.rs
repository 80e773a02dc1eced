//! Per-item control state: each menu card shows either a single ADD button
//! or a quantity stepper, never both. The state is derived from the cart
//! quantity alone, so a restored cart comes back up in the right state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemControl {
    /// Item not in the cart; a single ADD affordance.
    Add,
    /// Item in the cart with this quantity; -/+ stepper.
    Counter(u32),
}

impl ItemControl {
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            ItemControl::Add
        } else {
            ItemControl::Counter(quantity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_add_state() {
        assert_eq!(ItemControl::for_quantity(0), ItemControl::Add);
    }

    #[test]
    fn positive_quantity_is_counter_state() {
        assert_eq!(ItemControl::for_quantity(1), ItemControl::Counter(1));
        assert_eq!(ItemControl::for_quantity(7), ItemControl::Counter(7));
    }
}
