use yew::prelude::*;

use super::popup::Popup;
use crate::model::{Cart, CartAction};
use crate::state::PopupPhase;
use crate::util::format_rupees;

#[derive(Properties, PartialEq, Clone)]
pub struct CartPopupProps {
    pub cart: UseReducerHandle<Cart>,
    pub phase: UseStateHandle<PopupPhase>,
    pub on_proceed: Callback<()>,
}

/// Cart projection: one removable row per entry, grand total underneath.
/// Redrawn in full from the cart on every change.
#[function_component(CartPopup)]
pub fn cart_popup(props: &CartPopupProps) -> Html {
    let close = {
        let phase = props.phase.clone();
        Callback::from(move |_: MouseEvent| phase.set((*phase).close()))
    };
    let proceed = {
        let cb = props.on_proceed.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let rows: Vec<Html> = props
        .cart
        .entries()
        .map(|(name, entry)| {
            let remove = {
                let cart = props.cart.clone();
                let name = name.to_string();
                Callback::from(move |_: MouseEvent| {
                    cart.dispatch(CartAction::Remove { name: name.clone() })
                })
            };
            html! {
                <div key={name.to_string()} style="display:flex; align-items:center; gap:10px; padding:6px 0; border-bottom:1px solid #21262d;">
                    <span style="flex:1;">{ format!("{} x {}", name, entry.quantity) }</span>
                    <span style="font-variant-numeric:tabular-nums;">
                        { format_rupees(entry.price as u64 * entry.quantity as u64) }
                    </span>
                    <button onclick={remove} style="padding:2px 8px; cursor:pointer;">{"✖"}</button>
                </div>
            }
        })
        .collect();

    html! {
        <Popup phase={props.phase.clone()}>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:12px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:18px;">{"Your Cart"}</h3>
                    <button onclick={close} style="padding:4px 8px; cursor:pointer;">{"Close"}</button>
                </div>
                <div style="display:flex; flex-direction:column;">
                    {
                        if rows.is_empty() {
                            html! { <p style="margin:4px 0; opacity:0.7;">{"Your cart is empty."}</p> }
                        } else {
                            html! { <>{ for rows.into_iter() }</> }
                        }
                    }
                </div>
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <span style="font-weight:600;">
                        { format!("Total: {}", format_rupees(props.cart.total())) }
                    </span>
                    <button
                        onclick={proceed}
                        style="padding:6px 14px; border:1px solid #2ea043; border-radius:6px; background:#238636; color:#fff; font-weight:600; cursor:pointer;"
                    >
                        {"Proceed to Pay"}
                    </button>
                </div>
            </div>
        </Popup>
    }
}
