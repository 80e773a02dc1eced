use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::popup::Popup;
use crate::state::{CheckoutError, CheckoutStage, PaymentMethod, PopupPhase};

// Fixed payee identity encoded into the UPI QR payload.
const UPI_PAYEE: &str = "demo@upi";
const UPI_PAYEE_NAME: &str = "FoodOrder";

const BANKS: [&str; 4] = ["HDFC Bank", "SBI", "ICICI", "Axis Bank"];

fn upi_qr_url() -> String {
    let payload = format!("upi://pay?pa={}&pn={}", UPI_PAYEE, UPI_PAYEE_NAME);
    let encoded = String::from(js_sys::encode_uri_component(&payload));
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data={}",
        encoded
    )
}

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutModalProps {
    pub phase: UseStateHandle<PopupPhase>,
    /// Fired once a payment method is confirmed; the caller clears the cart
    /// and shows the success popup.
    pub on_confirmed: Callback<PaymentMethod>,
}

/// Payment-method selection and confirmation. The selection and its detail
/// block are transient; closing or confirming resets them to Idle.
#[function_component(CheckoutModal)]
pub fn checkout_modal(props: &CheckoutModalProps) -> Html {
    let stage = use_state_eq(CheckoutStage::default);
    let error = use_state_eq(|| None::<CheckoutError>);

    // Single reset path: whatever closed the popup (header button, backdrop
    // click, confirmation), an unmounted popup discards the selection and
    // any pending error, so the next open starts Idle.
    {
        let stage = stage.clone();
        let error = error.clone();
        use_effect_with(*props.phase, move |p| {
            stage.set(stage.retained(p.is_mounted()));
            if !p.is_mounted() {
                error.set(None);
            }
            || ()
        });
    }

    let close = {
        let phase = props.phase.clone();
        Callback::from(move |_: MouseEvent| phase.set((*phase).close()))
    };

    let on_method_change = {
        let stage = stage.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                stage.set(stage.select(PaymentMethod::from_value(&select.value())));
                error.set(None);
            }
        })
    };

    let confirm = {
        let phase = props.phase.clone();
        let stage = stage.clone();
        let error = error.clone();
        let on_confirmed = props.on_confirmed.clone();
        Callback::from(move |_: MouseEvent| match stage.confirm() {
            Ok((method, next)) => {
                stage.set(next);
                error.set(None);
                phase.set((*phase).close());
                on_confirmed.emit(method);
            }
            Err(e) => error.set(Some(e)),
        })
    };

    let details = match stage.method() {
        None => html! {},
        Some(PaymentMethod::Upi) => html! {
            <div style="display:flex; flex-direction:column; align-items:center; gap:8px;">
                <p style="margin:0;">{"Scan this QR with your UPI app:"}</p>
                <img src={upi_qr_url()} alt="UPI QR" width="150" height="150" style="border-radius:6px; background:#fff; padding:6px;" />
            </div>
        },
        Some(PaymentMethod::Card) => html! {
            <label style="display:flex; flex-direction:column; gap:6px;">
                <span>{"Choose your bank:"}</span>
                <select style="padding:6px;">
                    { for BANKS.iter().map(|b| html! { <option key={*b}>{ *b }</option> }) }
                </select>
            </label>
        },
        Some(PaymentMethod::Cod) => html! {
            <p style="margin:0;">
                {"You selected "}<strong>{"Cash on Delivery"}</strong>{". Pay when you receive your order."}
            </p>
        },
    };

    html! {
        <Popup phase={props.phase.clone()}>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:18px;">{"Checkout"}</h3>
                    <button onclick={close} style="padding:4px 8px; cursor:pointer;">{"Close"}</button>
                </div>
                <label style="display:flex; flex-direction:column; gap:6px;">
                    <span>{"Payment method:"}</span>
                    <select onchange={on_method_change} style="padding:6px;">
                        <option value="" selected={stage.method().is_none()}>{"-- select --"}</option>
                        { for PaymentMethod::ALL.iter().map(|m| html! {
                            <option
                                key={m.value()}
                                value={m.value()}
                                selected={stage.method() == Some(*m)}
                            >
                                { m.label() }
                            </option>
                        }) }
                    </select>
                </label>
                { details }
                {
                    if let Some(e) = *error {
                        html! { <p style="margin:0; color:#f85149; font-size:13px;">{ e.message() }</p> }
                    } else {
                        html! {}
                    }
                }
                <button
                    onclick={confirm}
                    style="padding:8px 14px; border:1px solid #2ea043; border-radius:6px; background:#238636; color:#fff; font-weight:600; cursor:pointer;"
                >
                    {"Confirm Payment"}
                </button>
            </div>
        </Popup>
    }
}
