use common::countries::{self, CountryRecord};
use common::language::Language;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::PhoneInput;

pub fn view(component: &PhoneInput, ctx: &Context<PhoneInput>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let text = &props.language.content().phone_input;
    let selected = component.draft.country();
    let open = component.dropdown.is_open();

    let on_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Edit(input.value())
    });

    html! {
        <div class="phone-input">
            if let Some(label) = &props.label {
                <label class="field-label">
                    { label.clone() }
                    if props.required { <span class="required">{ " *" }</span> }
                </label>
            }
            <div class="phone-row" dir="ltr">
                <div class="country-picker" ref={component.root_ref.clone()}>
                    <button
                        type="button"
                        class={classes!("country-button", props.error.is_some().then_some("invalid"))}
                        aria-haspopup="listbox"
                        aria-expanded={open.to_string()}
                        onclick={link.callback(|_| Msg::ToggleDropdown)}
                    >
                        <span class="flag">{ selected.flag() }</span>
                        <span class="dial-code">{ selected.dial_code }</span>
                        <span class={classes!("chevron", open.then_some("up"))}>{ "▾" }</span>
                    </button>
                    if open {
                        { build_dropdown(component, props.language, link) }
                    }
                </div>
                <input
                    type="tel"
                    class={classes!("phone-number", props.error.is_some().then_some("invalid"))}
                    dir="ltr"
                    value={component.draft.raw_local().to_string()}
                    placeholder={props.placeholder.clone().unwrap_or_else(|| AttrValue::Static(text.phone_placeholder))}
                    oninput={on_input}
                />
            </div>
            if let Some(error) = &props.error {
                <p class="field-error">{ error.clone() }</p>
            }
        </div>
    }
}

fn build_dropdown(component: &PhoneInput, language: Language, link: &Scope<PhoneInput>) -> Html {
    let text = &language.content().phone_input;
    let matches = countries::filter(component.dropdown.query(), language);
    let selected = component.draft.country().iso_code;

    let on_search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Search(input.value())
    });

    html! {
        <div class="country-dropdown" role="listbox">
            <div class="country-search">
                <input
                    type="text"
                    ref={component.search_ref.clone()}
                    value={component.dropdown.query().to_string()}
                    placeholder={text.search_placeholder}
                    dir={language.direction().as_str()}
                    oninput={on_search}
                />
            </div>
            <div class="country-list">
                if matches.is_empty() {
                    <div class="no-results">{ text.no_results }</div>
                } else {
                    { for matches.into_iter().map(|country| country_row(country, language, selected, link)) }
                }
            </div>
        </div>
    }
}

fn country_row(
    country: &'static CountryRecord,
    language: Language,
    selected: &str,
    link: &Scope<PhoneInput>,
) -> Html {
    let iso_code = country.iso_code;
    html! {
        <button
            type="button"
            key={iso_code}
            role="option"
            aria-selected={(iso_code == selected).to_string()}
            class={classes!("country-option", (iso_code == selected).then_some("selected"))}
            onclick={link.callback(move |_| Msg::SelectCountry(iso_code))}
        >
            <span class="flag">{ country.flag() }</span>
            <span class="country-name">{ country.display_name(language) }</span>
            <span class="dial-code">{ country.dial_code }</span>
        </button>
    }
}
