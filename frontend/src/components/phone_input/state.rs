use common::countries;
use common::phone::{Dropdown, PhoneDraft};
use wasm_bindgen::closure::Closure;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::props::PhoneInputProps;

pub struct PhoneInput {
    pub draft: PhoneDraft,
    pub dropdown: Dropdown,
    /// Wraps the country button and the dropdown; clicks outside it close the list.
    pub root_ref: NodeRef,
    pub search_ref: NodeRef,
    /// Set when the dropdown opens so `rendered` can focus the search box.
    pub focus_search: bool,
    pub outside_listener: Option<Closure<dyn Fn(MouseEvent)>>,
}

impl PhoneInput {
    pub fn new(props: &PhoneInputProps) -> Self {
        let country =
            countries::find(&props.default_country).unwrap_or_else(countries::default_country);
        Self {
            draft: PhoneDraft::with_value(country, &props.value),
            dropdown: Dropdown::default(),
            root_ref: NodeRef::default(),
            search_ref: NodeRef::default(),
            focus_search: false,
            outside_listener: None,
        }
    }
}
