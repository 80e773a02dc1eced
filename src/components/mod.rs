pub mod app;
pub mod cart_popup;
pub mod checkout_modal;
pub mod contact_form;
pub mod menu_card;
pub mod menu_view;
pub mod notice_popup;
pub mod popup;
