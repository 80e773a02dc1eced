use yew::prelude::*;

use super::popup::Popup;
use crate::state::PopupPhase;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticePopupProps {
    pub phase: UseStateHandle<PopupPhase>,
    pub title: AttrValue,
    pub message: AttrValue,
}

/// Simple acknowledgement dialog, used for the contact-form thank-you and
/// the payment-success popup.
#[function_component(NoticePopup)]
pub fn notice_popup(props: &NoticePopupProps) -> Html {
    let close = {
        let phase = props.phase.clone();
        Callback::from(move |_: MouseEvent| phase.set((*phase).close()))
    };
    html! {
        <Popup phase={props.phase.clone()}>
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 28px; min-width:300px; max-width:400px; text-align:center; display:flex; flex-direction:column; gap:12px;">
                <h3 style="margin:0; font-size:18px; color:#58a6ff;">{ props.title.clone() }</h3>
                <p style="margin:0; opacity:0.85;">{ props.message.clone() }</p>
                <button onclick={close} style="align-self:center; padding:6px 18px; cursor:pointer;">{"Close"}</button>
            </div>
        </Popup>
    }
}
