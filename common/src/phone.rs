//! Phone number cleaning, validation and composition, plus the state the
//! phone input widget keeps between keystrokes.

use serde::Serialize;

use crate::countries::CountryRecord;

/// Fewest local digits accepted as a phone number.
pub const MIN_DIGITS: usize = 7;

/// Drops every non-digit, then exactly one leading `0` (national trunk prefix).
pub fn clean_digits(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    match digits.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => digits,
    }
}

/// True when `local_digits` holds at least [`MIN_DIGITS`] digits. Separators
/// are ignored; no per-country length rules apply.
pub fn validate_phone_number(local_digits: &str) -> bool {
    local_digits.chars().filter(char::is_ascii_digit).count() >= MIN_DIGITS
}

/// `+972` and `501234567` become `+972501234567`.
pub fn compose_full_number(dial_code: &str, local_digits: &str) -> String {
    format!("{dial_code}{local_digits}")
}

/// Human-readable form, `+972-501234567`.
pub fn format_for_display(dial_code: &str, local_digits: &str) -> String {
    format!("{dial_code}-{local_digits}")
}

/// Digits only, as `wa.me` expects.
pub fn format_for_whatsapp(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// What the widget keeps in the text box: digits, whitespace and `-`.
pub fn sanitize_typed_input(typed: &str) -> String {
    typed
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect()
}

/// Snapshot handed to the owner of a phone input on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneValue {
    pub full_number: String,
    pub country_code: String,
    pub local_number: String,
    pub dial_code: String,
}

impl PhoneValue {
    pub fn is_valid(&self) -> bool {
        validate_phone_number(&self.local_number)
    }

    pub fn formatted(&self) -> String {
        format_for_display(&self.dial_code, &self.local_number)
    }
}

/// The selected country plus what has been typed so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneDraft {
    country: &'static CountryRecord,
    raw_local: String,
    digits: String,
}

impl PhoneDraft {
    pub fn new(country: &'static CountryRecord) -> Self {
        Self {
            country,
            raw_local: String::new(),
            digits: String::new(),
        }
    }

    /// Starts from an existing full number when it carries the country's dial code.
    pub fn with_value(country: &'static CountryRecord, value: &str) -> Self {
        let mut draft = Self::new(country);
        if let Some(local) = value.strip_prefix(country.dial_code) {
            draft.edit(local);
        }
        draft
    }

    pub fn country(&self) -> &'static CountryRecord {
        self.country
    }

    /// Text box contents after filtering.
    pub fn raw_local(&self) -> &str {
        &self.raw_local
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn edit(&mut self, typed: &str) -> PhoneValue {
        self.raw_local = sanitize_typed_input(typed);
        self.digits = clean_digits(&self.raw_local);
        self.value()
    }

    /// Keeps the typed number and swaps the dial code.
    pub fn select_country(&mut self, country: &'static CountryRecord) -> PhoneValue {
        self.country = country;
        self.value()
    }

    pub fn full_number(&self) -> String {
        compose_full_number(self.country.dial_code, &self.digits)
    }

    pub fn display(&self) -> String {
        format_for_display(self.country.dial_code, &self.digits)
    }

    pub fn value(&self) -> PhoneValue {
        PhoneValue {
            full_number: self.full_number(),
            country_code: self.country.iso_code.to_string(),
            local_number: self.digits.clone(),
            dial_code: self.country.dial_code.to_string(),
        }
    }
}

/// Country dropdown of the phone input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Dropdown {
    #[default]
    Closed,
    Open { query: String },
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        matches!(self, Dropdown::Open { .. })
    }

    pub fn query(&self) -> &str {
        match self {
            Dropdown::Open { query } => query,
            Dropdown::Closed => "",
        }
    }

    /// Opening always starts with an empty search.
    pub fn toggle(&mut self) {
        *self = match self {
            Dropdown::Closed => Dropdown::Open {
                query: String::new(),
            },
            Dropdown::Open { .. } => Dropdown::Closed,
        };
    }

    pub fn set_query(&mut self, text: &str) {
        if let Dropdown::Open { query } = self {
            *query = text.to_string();
        }
    }

    pub fn close(&mut self) {
        *self = Dropdown::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries;

    #[test]
    fn clean_digits_drops_one_trunk_zero() {
        assert_eq!(clean_digits("050-123-4567"), "501234567");
        assert_eq!(clean_digits("+1 (555) 000-1111"), "15550001111");
        assert_eq!(clean_digits("0541234567"), "541234567");
        assert_eq!(clean_digits("00123"), "0123");
        assert_eq!(clean_digits(""), "");
    }

    #[test]
    fn seven_digit_threshold() {
        for len in 0..12 {
            let digits = "5".repeat(len);
            assert_eq!(validate_phone_number(&digits), len >= MIN_DIGITS, "{len}");
        }
    }

    #[test]
    fn compose_display_and_whatsapp_round_trip() {
        let full = compose_full_number("+972", "501234567");
        assert_eq!(full, "+972501234567");
        assert_eq!(format_for_display("+972", "501234567"), "+972-501234567");
        assert_eq!(format_for_whatsapp(&full), "972501234567");
    }

    #[test]
    fn typed_input_keeps_digits_spaces_and_dashes() {
        assert_eq!(sanitize_typed_input("(050) 123-45a67"), "050 123-4567");
    }

    #[test]
    fn draft_tracks_edits_and_country_changes() {
        let israel = countries::find("IL").unwrap();
        let mut draft = PhoneDraft::new(countries::default_country());

        let value = draft.edit("050-123-4567");
        assert_eq!(draft.raw_local(), "050-123-4567");
        assert_eq!(value.local_number, "501234567");
        assert_eq!(value.full_number, "+1501234567");

        let value = draft.select_country(israel);
        assert_eq!(value.full_number, "+972501234567");
        assert_eq!(value.country_code, "IL");
        assert_eq!(value.formatted(), "+972-501234567");
        assert!(value.is_valid());
        assert_eq!(draft.display(), "+972-501234567");
    }

    #[test]
    fn draft_prefills_from_matching_value() {
        let israel = countries::find("IL").unwrap();
        assert_eq!(PhoneDraft::with_value(israel, "+972501234567").digits(), "501234567");
        assert_eq!(PhoneDraft::with_value(israel, "+1555").digits(), "");
    }

    #[test]
    fn dropdown_state_machine() {
        let mut dropdown = Dropdown::default();
        dropdown.set_query("ignored");
        assert_eq!(dropdown, Dropdown::Closed);

        dropdown.toggle();
        dropdown.set_query("isr");
        assert_eq!(dropdown.query(), "isr");

        dropdown.toggle();
        assert!(!dropdown.is_open());
        dropdown.toggle();
        assert_eq!(dropdown.query(), "");
        dropdown.close();
        assert!(!dropdown.is_open());
    }
}
