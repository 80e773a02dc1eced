use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::TransitionEvent;
use yew::prelude::*;

use crate::state::PopupPhase;

/// Shared popup shell: dimmed backdrop, centered surface, fade in/out.
/// The backdrop is unmounted only once its fade-out transition completes,
/// so the phase machine never needs a duration constant of its own.
#[derive(Properties, PartialEq, Clone)]
pub struct PopupProps {
    pub phase: UseStateHandle<PopupPhase>,
    pub children: Children,
}

#[function_component(Popup)]
pub fn popup(props: &PopupProps) -> Html {
    // Mirror of the phase for the rAF callback below; the captured state
    // handle derefs to the value of the render it was cloned in.
    let phase_flag = use_mut_ref(|| PopupPhase::Hidden);

    // One frame after mounting at opacity 0, settle to Shown so the fade-in
    // has a start state to animate from. The mirror check drops the settle
    // if a close already landed in the same frame.
    {
        let phase = props.phase.clone();
        let phase_flag = phase_flag.clone();
        use_effect_with(*props.phase, move |p| {
            *phase_flag.borrow_mut() = *p;
            if *p == PopupPhase::Opening {
                if let Some(win) = web_sys::window() {
                    let cb = Closure::once_into_js(move || {
                        if *phase_flag.borrow() == PopupPhase::Opening {
                            phase.set((*phase).settle_open());
                        }
                    });
                    let _ = win.request_animation_frame(cb.unchecked_ref());
                }
            }
            || ()
        });
    }

    if !props.phase.is_mounted() {
        return html! {};
    }

    // Clicking the backdrop closes; clicks on the surface stay inside.
    let backdrop_click = {
        let phase = props.phase.clone();
        Callback::from(move |_: MouseEvent| phase.set((*phase).close()))
    };
    let surface_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let transition_end = {
        let phase = props.phase.clone();
        Callback::from(move |e: TransitionEvent| {
            if e.property_name() == "opacity" {
                phase.set((*phase).settle_close());
            }
        })
    };

    let opacity = if props.phase.is_shown() { "1" } else { "0" };
    html! {
        <div
            onclick={backdrop_click}
            ontransitionend={transition_end}
            style={format!("position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50; transition:opacity 0.4s ease; opacity:{};", opacity)}
        >
            <div style="display:contents;" onclick={surface_click}>
                { props.children.clone() }
            </div>
        </div>
    }
}
