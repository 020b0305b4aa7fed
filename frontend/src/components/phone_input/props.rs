//! Properties for [`PhoneInput`](super::PhoneInput).

use common::language::Language;
use common::phone::PhoneValue;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PhoneInputProps {
    /// Drives country names and the search placeholder. Changing it keeps the
    /// selected country.
    pub language: Language,

    /// Receives the composed number after every change.
    pub on_change: Callback<PhoneValue>,

    /// ISO code selected on mount. Unknown codes fall back to the default country.
    #[prop_or_default]
    pub default_country: AttrValue,

    /// Full number (`+<dial><digits>`) to prefill. Used only when it starts with
    /// the default country's dial code.
    #[prop_or_default]
    pub value: AttrValue,

    #[prop_or_default]
    pub label: Option<AttrValue>,

    #[prop_or_default]
    pub placeholder: Option<AttrValue>,

    /// Inline error shown under the row.
    #[prop_or_default]
    pub error: Option<AttrValue>,

    #[prop_or_default]
    pub required: bool,
}
