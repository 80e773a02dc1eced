use yew::prelude::*;

use super::{
    cart_popup::CartPopup, checkout_modal::CheckoutModal, contact_form::ContactForm,
    menu_view::MenuView, notice_popup::NoticePopup,
};
use crate::model::{Cart, CartAction};
use crate::state::{CategoryFilter, PaymentMethod, PopupPhase};
use crate::util::clog;

/// localStorage slot holding the serialized cart mapping.
const CART_STORAGE_KEY: &str = "cart";

fn load_cart() -> Cart {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(raw) = store.get_item(CART_STORAGE_KEY) {
                return Cart::restore(raw.as_deref());
            }
        }
    }
    Cart::default()
}

fn persist_cart(cart: &Cart) {
    let Some(snapshot) = cart.snapshot() else {
        clog("cart: failed to serialize snapshot");
        return;
    };
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if store.set_item(CART_STORAGE_KEY, &snapshot).is_err() {
                clog("cart: failed to persist snapshot");
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // The cart reducer is the single source of truth; it starts from the
    // persisted snapshot (malformed or absent state means an empty cart).
    let cart = use_reducer(load_cart);
    let filter = use_state(CategoryFilter::default);

    let cart_phase = use_state(PopupPhase::default);
    let contact_phase = use_state(PopupPhase::default);
    let thanks_phase = use_state(PopupPhase::default);
    let checkout_phase = use_state(PopupPhase::default);
    let success_phase = use_state(PopupPhase::default);

    // Mirror every cart change to durable storage. The effect runs after the
    // render that already shows the mutated snapshot.
    {
        let snapshot = (*cart).clone();
        use_effect_with(snapshot, |c| {
            persist_cart(c);
            || ()
        });
    }

    let open_contact = {
        let phase = contact_phase.clone();
        Callback::from(move |_: MouseEvent| phase.set((*phase).open()))
    };
    // The cart icon toggles its popup.
    let toggle_cart = {
        let phase = cart_phase.clone();
        Callback::from(move |_: MouseEvent| {
            if phase.is_mounted() {
                phase.set((*phase).close());
            } else {
                phase.set((*phase).open());
            }
        })
    };

    // "Proceed to Pay" swaps the cart popup for the checkout modal.
    let proceed_to_pay = {
        let cart_phase = cart_phase.clone();
        let checkout_phase = checkout_phase.clone();
        Callback::from(move |_| {
            cart_phase.set((*cart_phase).close());
            checkout_phase.set((*checkout_phase).open());
        })
    };

    // A confirmed checkout empties the cart and shows the success popup.
    let on_confirmed = {
        let cart = cart.clone();
        let success_phase = success_phase.clone();
        Callback::from(move |method: PaymentMethod| {
            clog(&format!("order confirmed via {}", method.label()));
            cart.dispatch(CartAction::Clear);
            success_phase.set((*success_phase).open());
        })
    };

    let on_message_sent = {
        let phase = thanks_phase.clone();
        Callback::from(move |_| phase.set((*phase).open()))
    };

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <header style="position:sticky; top:0; z-index:10; display:flex; align-items:center; justify-content:space-between; padding:12px 20px; background:#161b22; border-bottom:1px solid #30363d;">
                <span style="font-size:18px; font-weight:700; color:#58a6ff;">{"FoodOrder"}</span>
                <div style="display:flex; gap:12px; align-items:center;">
                    <button onclick={open_contact} style="padding:6px 12px; cursor:pointer;">{"Contact Us"}</button>
                    <button onclick={toggle_cart} style="position:relative; padding:6px 12px; cursor:pointer;">
                        {"🛒"}
                        <span style="position:absolute; top:-6px; right:-6px; min-width:18px; height:18px; border-radius:9px; background:#f85149; color:#fff; font-size:11px; line-height:18px; text-align:center; padding:0 3px;">
                            { cart.item_count() }
                        </span>
                    </button>
                </div>
            </header>
            <MenuView cart={cart.clone()} filter={filter.clone()} />
            <CartPopup cart={cart.clone()} phase={cart_phase.clone()} on_proceed={proceed_to_pay} />
            <ContactForm phase={contact_phase.clone()} on_submitted={on_message_sent} />
            <NoticePopup
                phase={thanks_phase.clone()}
                title="Thank You!"
                message="Your message has been sent. We'll get back to you soon."
            />
            <CheckoutModal phase={checkout_phase.clone()} on_confirmed={on_confirmed} />
            <NoticePopup
                phase={success_phase.clone()}
                title="Payment Successful!"
                message="Your order has been placed. Enjoy your meal!"
            />
        </div>
    }
}
