use yew::prelude::*;

use super::menu_card::MenuCard;
use crate::catalog::MENU_ITEMS;
use crate::model::Cart;
use crate::state::CategoryFilter;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuViewProps {
    pub cart: UseReducerHandle<Cart>,
    pub filter: UseStateHandle<CategoryFilter>,
}

/// The catalog grid plus the veg/non-veg toggle. Filtering only changes
/// card visibility; the cards (and their cart state) stay mounted.
#[function_component(MenuView)]
pub fn menu_view(props: &MenuViewProps) -> Html {
    let filter = *props.filter;
    let toggle = {
        let filter = props.filter.clone();
        Callback::from(move |_: Event| filter.set((*filter).toggled()))
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:16px; max-width:760px; margin:0 auto; padding:16px;">
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer; align-self:flex-end; font-size:14px;">
                <span style="color:#238636;">{"Veg"}</span>
                <input
                    type="checkbox"
                    checked={filter == CategoryFilter::NonVeg}
                    onchange={toggle}
                />
                <span style="color:#f85149;">{"Non-Veg"}</span>
            </label>
            <div style="display:flex; flex-direction:column; gap:12px;">
                { for MENU_ITEMS.iter().map(|item| html! {
                    <MenuCard
                        key={item.name}
                        item={*item}
                        cart={props.cart.clone()}
                        display={filter.display_for(item)}
                    />
                }) }
            </div>
        </div>
    }
}
