pub mod checkout;
pub mod controls;
pub mod filter;
pub mod popup;

pub use checkout::{CheckoutError, CheckoutStage, PaymentMethod};
pub use controls::ItemControl;
pub use filter::CategoryFilter;
pub use popup::PopupPhase;
