//! Result card shared by the link generators: the link itself, a copy button
//! with short-lived feedback and a button that opens it in a new tab.

use common::language::Language;
use common::submission::COPY_FEEDBACK_MS;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::platform;

#[derive(Properties, PartialEq)]
pub struct GeneratedLinkProps {
    pub language: Language,
    pub link: AttrValue,
}

#[function_component(GeneratedLink)]
pub fn generated_link(props: &GeneratedLinkProps) -> Html {
    let text = &props.language.content().tools;
    let copied = use_state(|| false);
    let feedback_timer = use_mut_ref(|| None::<Timeout>);

    // A new link clears any pending "copied" state.
    {
        let copied = copied.clone();
        let feedback_timer = feedback_timer.clone();
        use_effect_with(props.link.clone(), move |_| {
            feedback_timer.borrow_mut().take();
            copied.set(false);
        });
    }

    let on_copy = {
        let copied = copied.clone();
        let feedback_timer = feedback_timer.clone();
        let link = props.link.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let feedback_timer = feedback_timer.clone();
            let link = link.clone();
            spawn_local(async move {
                match platform::copy_to_clipboard(&link).await {
                    Ok(()) => {
                        copied.set(true);
                        let reset = copied.clone();
                        *feedback_timer.borrow_mut() =
                            Some(Timeout::new(COPY_FEEDBACK_MS, move || reset.set(false)));
                    }
                    Err(e) => gloo_console::error!("Copy to clipboard failed:", e),
                }
            });
        })
    };

    html! {
        <div class="generated-link">
            <p class="field-label">{ text.generated_link }</p>
            <code class="link-output" dir="ltr">{ props.link.clone() }</code>
            <div class="link-actions">
                <button type="button" class={classes!("btn", "btn-secondary", (*copied).then_some("copied"))} onclick={on_copy}>
                    { if *copied { text.copied_button } else { text.copy_button } }
                </button>
                <a class="btn btn-outline" href={props.link.clone()} target="_blank" rel="noopener noreferrer">
                    { text.test_link }
                </a>
            </div>
        </div>
    }
}
