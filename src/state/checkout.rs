//! Checkout flow: payment method selection and confirmation. Selection is
//! transient UI state; nothing here is persisted.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Upi,
    Card,
    Cod,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Upi, PaymentMethod::Card, PaymentMethod::Cod];

    /// Value attribute used by the method `<select>`.
    pub fn value(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Card => "card",
            PaymentMethod::Cod => "cod",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::Cod => "Cash on Delivery",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutError {
    NoMethodSelected,
}

impl CheckoutError {
    pub fn message(self) -> &'static str {
        match self {
            CheckoutError::NoMethodSelected => "Please select a payment method.",
        }
    }
}

/// {Idle, MethodSelected}. Confirmation only succeeds out of
/// `MethodSelected`; success hands the chosen method back and resets to
/// `Idle` for the next checkout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckoutStage {
    #[default]
    Idle,
    MethodSelected(PaymentMethod),
}

impl CheckoutStage {
    pub fn select(self, method: Option<PaymentMethod>) -> Self {
        match method {
            Some(m) => CheckoutStage::MethodSelected(m),
            None => CheckoutStage::Idle,
        }
    }

    pub fn method(self) -> Option<PaymentMethod> {
        match self {
            CheckoutStage::Idle => None,
            CheckoutStage::MethodSelected(m) => Some(m),
        }
    }

    /// A selection only survives while the checkout popup is on the canvas.
    /// Every dismissal (header button, backdrop click, confirmation)
    /// discards it, so the next open starts in `Idle`.
    pub fn retained(self, popup_mounted: bool) -> Self {
        if popup_mounted {
            self
        } else {
            CheckoutStage::Idle
        }
    }

    /// Terminal transition: a confirmed checkout yields the method and the
    /// stage resets. With no method selected the stage is left untouched.
    pub fn confirm(self) -> Result<(PaymentMethod, CheckoutStage), CheckoutError> {
        match self {
            CheckoutStage::Idle => Err(CheckoutError::NoMethodSelected),
            CheckoutStage::MethodSelected(m) => Ok((m, CheckoutStage::Idle)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_without_method_is_an_error() {
        let stage = CheckoutStage::Idle;
        assert_eq!(stage.confirm(), Err(CheckoutError::NoMethodSelected));
    }

    #[test]
    fn confirm_with_method_resets_to_idle() {
        let stage = CheckoutStage::Idle.select(Some(PaymentMethod::Cod));
        let (method, next) = stage.confirm().unwrap();
        assert_eq!(method, PaymentMethod::Cod);
        assert_eq!(next, CheckoutStage::Idle);
    }

    #[test]
    fn selecting_the_empty_option_clears_the_method() {
        let stage = CheckoutStage::Idle.select(Some(PaymentMethod::Upi));
        assert_eq!(stage.method(), Some(PaymentMethod::Upi));
        assert_eq!(stage.select(None), CheckoutStage::Idle);
    }

    #[test]
    fn dismissing_the_popup_discards_the_selection() {
        // A backdrop-click close goes through the same rule as the header
        // button: once the popup is gone, the next open must be Idle.
        let stage = CheckoutStage::Idle.select(Some(PaymentMethod::Upi));
        assert_eq!(stage.retained(true), stage);
        assert_eq!(stage.retained(false), CheckoutStage::Idle);
        assert_eq!(stage.retained(false).method(), None);
    }

    #[test]
    fn method_values_round_trip() {
        for m in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_value(m.value()), Some(m));
        }
        assert_eq!(PaymentMethod::from_value(""), None);
        assert_eq!(PaymentMethod::from_value("bitcoin"), None);
    }
}
