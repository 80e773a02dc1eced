use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlFormElement, Request, RequestInit, Response};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::popup::Popup;
use crate::state::PopupPhase;
use crate::util::clog;

/// External form endpoint. Any OK-class response counts as delivered.
const CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/hello@foodorder.example";

const SUBMIT_FAILED: &str = "Oops! Something went wrong. Please try again.";

/// Single-attempt POST of the form's own fields. No retry, no timeout.
async fn post_form(data: FormData) -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(data.as_ref());
    let request = Request::new_with_str_and_init(CONTACT_ENDPOINT, &opts)?;
    request.headers().set("Accept", "application/json")?;
    let resp: Response = JsFuture::from(win.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if resp.ok() {
        Ok(())
    } else {
        Err(JsValue::from_str(&format!("status {}", resp.status())))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    pub phase: UseStateHandle<PopupPhase>,
    /// Fired on successful delivery; the caller opens the thank-you popup.
    pub on_submitted: Callback<()>,
}

/// Contact form popup. On failure the entered values stay in place for
/// resubmission and an inline message is shown instead of an alert.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let error = use_state_eq(|| None::<&'static str>);
    let sending = use_state(|| false);

    // Any close (header button or backdrop click) drops a pending error so
    // a stale message never greets the next open. Entered values stay in
    // the form for resubmission.
    {
        let error = error.clone();
        use_effect_with(*props.phase, move |p| {
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

    let onsubmit = {
        let phase = props.phase.clone();
        let on_submitted = props.on_submitted.clone();
        let error = error.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
                return;
            };
            let Ok(data) = FormData::new_with_form(&form) else {
                error.set(Some(SUBMIT_FAILED));
                return;
            };
            sending.set(true);
            let phase = phase.clone();
            let on_submitted = on_submitted.clone();
            let error = error.clone();
            let sending = sending.clone();
            spawn_local(async move {
                match post_form(data).await {
                    Ok(()) => {
                        form.reset();
                        error.set(None);
                        phase.set((*phase).close());
                        on_submitted.emit(());
                    }
                    Err(e) => {
                        clog(&format!("contact form submission failed: {:?}", e));
                        error.set(Some(SUBMIT_FAILED));
                    }
                }
                sending.set(false);
            });
        })
    };

    let input_style = "padding:8px; border:1px solid #30363d; border-radius:6px; background:#0d1117; color:inherit;";
    html! {
        <Popup phase={props.phase.clone()}>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:420px; display:flex; flex-direction:column; gap:12px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:18px;">{"Contact Us"}</h3>
                    <button type="button" onclick={close} style="padding:4px 8px; cursor:pointer;">{"Close"}</button>
                </div>
                <form {onsubmit} style="display:flex; flex-direction:column; gap:10px;">
                    <input type="text" name="name" placeholder="Your name" required=true style={input_style} />
                    <input type="email" name="email" placeholder="Your email" required=true style={input_style} />
                    <textarea name="message" placeholder="Your message" required=true rows="4" style={input_style}></textarea>
                    {
                        if let Some(msg) = *error {
                            html! { <p style="margin:0; color:#f85149; font-size:13px;">{ msg }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <button
                        type="submit"
                        disabled={*sending}
                        style="padding:8px 14px; border:1px solid #2ea043; border-radius:6px; background:#238636; color:#fff; font-weight:600; cursor:pointer;"
                    >
                        { if *sending { "Sending..." } else { "Send" } }
                    </button>
                </form>
            </div>
        </Popup>
    }
}
