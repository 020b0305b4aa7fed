//! Phone number input with a searchable country dropdown.
//!
//! The widget owns a `PhoneDraft` and a `Dropdown`, and reports a fresh
//! `PhoneValue` to its parent on every edit, country pick, or click outside
//! an open dropdown. The row is always laid out left-to-right because phone
//! numbers are; only the search box follows the page direction.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MouseEvent, Node};
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PhoneInputProps;
pub use state::PhoneInput;

impl Component for PhoneInput {
    type Message = Msg;
    type Properties = PhoneInputProps;

    fn create(ctx: &Context<Self>) -> Self {
        PhoneInput::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.listen_outside_clicks(ctx);
        }
        if self.focus_search {
            self.focus_search = false;
            if let Some(input) = self.search_ref.cast::<HtmlInputElement>() {
                input.focus().ok();
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(document)) = (
            self.outside_listener.take(),
            web_sys::window().and_then(|w| w.document()),
        ) {
            document
                .remove_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl PhoneInput {
    /// Closes the dropdown on a mousedown anywhere outside the widget.
    fn listen_outside_clicks(&mut self, ctx: &Context<Self>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let root = self.root_ref.clone();
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            let inside = match (root.get(), event.target().and_then(|t| t.dyn_into::<Node>().ok())) {
                (Some(root), Some(target)) => root.contains(Some(&target)),
                _ => false,
            };
            if !inside {
                link.send_message(Msg::ClickedOutside);
            }
        });
        if document
            .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
            .is_ok()
        {
            self.outside_listener = Some(listener);
        }
    }
}
