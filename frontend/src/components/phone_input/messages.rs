pub enum Msg {
    ToggleDropdown,
    Search(String),
    SelectCountry(&'static str),
    Edit(String),
    ClickedOutside,
}
