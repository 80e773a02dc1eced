use yew::prelude::*;

use crate::catalog::{Category, MenuItem};
use crate::model::{Cart, CartAction};
use crate::state::ItemControl;
use crate::util::format_rupees;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuCardProps {
    pub item: MenuItem,
    pub cart: UseReducerHandle<Cart>,
    /// CSS display value decided by the category filter ("none" hides the
    /// card, anything else is the card's own layout mode).
    pub display: &'static str,
}

/// One catalog card. The control area is either a single ADD button or a
/// -/+ stepper, derived from the cart quantity for this item's name.
#[function_component(MenuCard)]
pub fn menu_card(props: &MenuCardProps) -> Html {
    let item = props.item;
    let quantity = props.cart.quantity_of(item.name);

    let dispatch_delta = |delta: i32| {
        let cart = props.cart.clone();
        Callback::from(move |_: MouseEvent| {
            cart.dispatch(CartAction::Upsert {
                name: item.name.to_string(),
                price: item.price,
                delta,
            })
        })
    };

    let control = match ItemControl::for_quantity(quantity) {
        ItemControl::Add => html! {
            <button
                onclick={dispatch_delta(1)}
                style="padding:6px 18px; border:1px solid #2ea043; border-radius:6px; background:#238636; color:#fff; font-weight:600; cursor:pointer;"
            >
                {"ADD "}<span>{"+"}</span>
            </button>
        },
        ItemControl::Counter(qty) => html! {
            <div style="display:flex; align-items:center; gap:10px; border:1px solid #30363d; border-radius:6px; padding:4px 10px;">
                <button onclick={dispatch_delta(-1)} style="padding:2px 10px; cursor:pointer;">{"-"}</button>
                <span style="min-width:20px; text-align:center; font-weight:600;">{ qty }</span>
                <button onclick={dispatch_delta(1)} style="padding:2px 10px; cursor:pointer;">{"+"}</button>
            </div>
        },
    };

    let (dot, tag) = match item.category {
        Category::Veg => ("#238636", "veg"),
        Category::NonVeg => ("#f85149", "non-veg"),
    };

    html! {
        <div
            data-type={tag}
            style={format!("display:{}; flex-direction:column; gap:8px; background:#161b22; border:1px solid #30363d; border-radius:10px; padding:14px 16px;", props.display)}
        >
            <div style="display:flex; align-items:center; gap:8px;">
                <span style={format!("width:10px; height:10px; border-radius:2px; border:1px solid {c}; background:{c}; flex-shrink:0;", c = dot)}></span>
                <span style="font-weight:600; font-size:15px;">{ item.name }</span>
            </div>
            <div style="font-size:12px; opacity:0.75;">{ item.blurb }</div>
            <div style="display:flex; align-items:center; justify-content:space-between; margin-top:4px;">
                <span style="font-weight:600; color:#d4af37;">{ format_rupees(item.price as u64) }</span>
                { control }
            </div>
        </div>
    }
}
