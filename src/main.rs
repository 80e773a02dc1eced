mod catalog;
mod components;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    debug_assert!(
        catalog::validate(catalog::MENU_ITEMS),
        "menu catalog has duplicate names or zero prices"
    );
    yew::Renderer::<App>::new().render();
}
