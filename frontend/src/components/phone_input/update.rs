use common::countries;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PhoneInput;

pub fn update(component: &mut PhoneInput, ctx: &Context<PhoneInput>, msg: Msg) -> bool {
    let on_change = &ctx.props().on_change;
    match msg {
        Msg::ToggleDropdown => {
            component.dropdown.toggle();
            component.focus_search = component.dropdown.is_open();
            true
        }
        Msg::Search(query) => {
            component.dropdown.set_query(&query);
            true
        }
        Msg::SelectCountry(iso_code) => {
            component.dropdown.close();
            if let Some(country) = countries::find(iso_code) {
                on_change.emit(component.draft.select_country(country));
            }
            true
        }
        Msg::Edit(typed) => {
            on_change.emit(component.draft.edit(&typed));
            true
        }
        Msg::ClickedOutside => {
            if !component.dropdown.is_open() {
                return false;
            }
            component.dropdown.close();
            on_change.emit(component.draft.value());
            true
        }
    }
}
