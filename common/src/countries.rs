//! Static country table: ISO code, dial code, English name, and Hebrew names
//! for the most common countries.

use crate::language::Language;

/// One row of the country table. Immutable for the life of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountryRecord {
    pub iso_code: &'static str,
    /// `+` followed by digits, e.g. `+972`.
    pub dial_code: &'static str,
    pub default_name: &'static str,
}

const UNITED_STATES: CountryRecord = CountryRecord::new("US", "+1", "United States");

impl CountryRecord {
    const fn new(iso_code: &'static str, dial_code: &'static str, default_name: &'static str) -> Self {
        Self {
            iso_code,
            dial_code,
            default_name,
        }
    }

    /// Flag emoji built from the regional indicator symbols of the ISO code.
    pub fn flag(&self) -> String {
        self.iso_code
            .bytes()
            .filter(u8::is_ascii_uppercase)
            .filter_map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
            .collect()
    }

    pub fn hebrew_name(&self) -> Option<&'static str> {
        hebrew_name(self.iso_code)
    }

    /// Name shown in the dropdown; Hebrew falls back to the English name.
    pub fn display_name(&self, language: Language) -> &'static str {
        match language {
            Language::He => self.hebrew_name().unwrap_or(self.default_name),
            Language::En => self.default_name,
        }
    }

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str, language: Language) -> bool {
        self.display_name(language).to_lowercase().contains(needle)
            || self.default_name.to_lowercase().contains(needle)
            || self.dial_code.contains(needle)
            || self.iso_code.to_lowercase().contains(needle)
    }
}

fn hebrew_name(iso_code: &str) -> Option<&'static str> {
    let name = match iso_code {
        "AE" => "איחוד האמירויות",
        "AR" => "ארגנטינה",
        "AT" => "אוסטריה",
        "AU" => "אוסטרליה",
        "BE" => "בלגיה",
        "BR" => "ברזיל",
        "CA" => "קנדה",
        "CH" => "שוויץ",
        "CL" => "צ׳ילה",
        "CN" => "סין",
        "CO" => "קולומביה",
        "CZ" => "צ׳כיה",
        "DE" => "גרמניה",
        "DK" => "דנמרק",
        "EG" => "מצרים",
        "ES" => "ספרד",
        "FI" => "פינלנד",
        "FR" => "צרפת",
        "GB" => "בריטניה",
        "GR" => "יוון",
        "HK" => "הונג קונג",
        "HU" => "הונגריה",
        "ID" => "אינדונזיה",
        "IE" => "אירלנד",
        "IL" => "ישראל",
        "IN" => "הודו",
        "IT" => "איטליה",
        "JP" => "יפן",
        "KR" => "דרום קוריאה",
        "MX" => "מקסיקו",
        "MY" => "מלזיה",
        "NL" => "הולנד",
        "NO" => "נורבגיה",
        "NZ" => "ניו זילנד",
        "PE" => "פרו",
        "PH" => "פיליפינים",
        "PL" => "פולין",
        "PT" => "פורטוגל",
        "RO" => "רומניה",
        "RU" => "רוסיה",
        "SA" => "סעודיה",
        "SE" => "שוודיה",
        "SG" => "סינגפור",
        "TH" => "תאילנד",
        "TR" => "טורקיה",
        "TW" => "טייוואן",
        "UA" => "אוקראינה",
        "US" => "ארה״ב",
        "VN" => "וייטנאם",
        "ZA" => "דרום אפריקה",
        _ => return None,
    };
    Some(name)
}

static COUNTRIES: [CountryRecord; 192] = [
    CountryRecord::new("AD", "+376", "Andorra"),
    CountryRecord::new("AE", "+971", "UAE"),
    CountryRecord::new("AF", "+93", "Afghanistan"),
    CountryRecord::new("AG", "+1268", "Antigua and Barbuda"),
    CountryRecord::new("AL", "+355", "Albania"),
    CountryRecord::new("AM", "+374", "Armenia"),
    CountryRecord::new("AO", "+244", "Angola"),
    CountryRecord::new("AR", "+54", "Argentina"),
    CountryRecord::new("AT", "+43", "Austria"),
    CountryRecord::new("AU", "+61", "Australia"),
    CountryRecord::new("AZ", "+994", "Azerbaijan"),
    CountryRecord::new("BA", "+387", "Bosnia and Herzegovina"),
    CountryRecord::new("BB", "+1246", "Barbados"),
    CountryRecord::new("BD", "+880", "Bangladesh"),
    CountryRecord::new("BE", "+32", "Belgium"),
    CountryRecord::new("BF", "+226", "Burkina Faso"),
    CountryRecord::new("BG", "+359", "Bulgaria"),
    CountryRecord::new("BH", "+973", "Bahrain"),
    CountryRecord::new("BI", "+257", "Burundi"),
    CountryRecord::new("BJ", "+229", "Benin"),
    CountryRecord::new("BN", "+673", "Brunei"),
    CountryRecord::new("BO", "+591", "Bolivia"),
    CountryRecord::new("BR", "+55", "Brazil"),
    CountryRecord::new("BS", "+1242", "Bahamas"),
    CountryRecord::new("BT", "+975", "Bhutan"),
    CountryRecord::new("BW", "+267", "Botswana"),
    CountryRecord::new("BY", "+375", "Belarus"),
    CountryRecord::new("BZ", "+501", "Belize"),
    CountryRecord::new("CA", "+1", "Canada"),
    CountryRecord::new("CD", "+243", "DR Congo"),
    CountryRecord::new("CF", "+236", "Central African Republic"),
    CountryRecord::new("CG", "+242", "Congo"),
    CountryRecord::new("CH", "+41", "Switzerland"),
    CountryRecord::new("CI", "+225", "Ivory Coast"),
    CountryRecord::new("CL", "+56", "Chile"),
    CountryRecord::new("CM", "+237", "Cameroon"),
    CountryRecord::new("CN", "+86", "China"),
    CountryRecord::new("CO", "+57", "Colombia"),
    CountryRecord::new("CR", "+506", "Costa Rica"),
    CountryRecord::new("CU", "+53", "Cuba"),
    CountryRecord::new("CV", "+238", "Cape Verde"),
    CountryRecord::new("CY", "+357", "Cyprus"),
    CountryRecord::new("CZ", "+420", "Czech Republic"),
    CountryRecord::new("DE", "+49", "Germany"),
    CountryRecord::new("DJ", "+253", "Djibouti"),
    CountryRecord::new("DK", "+45", "Denmark"),
    CountryRecord::new("DM", "+1767", "Dominica"),
    CountryRecord::new("DO", "+1809", "Dominican Republic"),
    CountryRecord::new("DZ", "+213", "Algeria"),
    CountryRecord::new("EC", "+593", "Ecuador"),
    CountryRecord::new("EE", "+372", "Estonia"),
    CountryRecord::new("EG", "+20", "Egypt"),
    CountryRecord::new("ER", "+291", "Eritrea"),
    CountryRecord::new("ES", "+34", "Spain"),
    CountryRecord::new("ET", "+251", "Ethiopia"),
    CountryRecord::new("FI", "+358", "Finland"),
    CountryRecord::new("FJ", "+679", "Fiji"),
    CountryRecord::new("FR", "+33", "France"),
    CountryRecord::new("GA", "+241", "Gabon"),
    CountryRecord::new("GB", "+44", "United Kingdom"),
    CountryRecord::new("GD", "+1473", "Grenada"),
    CountryRecord::new("GE", "+995", "Georgia"),
    CountryRecord::new("GH", "+233", "Ghana"),
    CountryRecord::new("GM", "+220", "Gambia"),
    CountryRecord::new("GN", "+224", "Guinea"),
    CountryRecord::new("GQ", "+240", "Equatorial Guinea"),
    CountryRecord::new("GR", "+30", "Greece"),
    CountryRecord::new("GT", "+502", "Guatemala"),
    CountryRecord::new("GW", "+245", "Guinea-Bissau"),
    CountryRecord::new("GY", "+592", "Guyana"),
    CountryRecord::new("HK", "+852", "Hong Kong"),
    CountryRecord::new("HN", "+504", "Honduras"),
    CountryRecord::new("HR", "+385", "Croatia"),
    CountryRecord::new("HT", "+509", "Haiti"),
    CountryRecord::new("HU", "+36", "Hungary"),
    CountryRecord::new("ID", "+62", "Indonesia"),
    CountryRecord::new("IE", "+353", "Ireland"),
    CountryRecord::new("IL", "+972", "Israel"),
    CountryRecord::new("IN", "+91", "India"),
    CountryRecord::new("IQ", "+964", "Iraq"),
    CountryRecord::new("IR", "+98", "Iran"),
    CountryRecord::new("IS", "+354", "Iceland"),
    CountryRecord::new("IT", "+39", "Italy"),
    CountryRecord::new("JM", "+1876", "Jamaica"),
    CountryRecord::new("JO", "+962", "Jordan"),
    CountryRecord::new("JP", "+81", "Japan"),
    CountryRecord::new("KE", "+254", "Kenya"),
    CountryRecord::new("KG", "+996", "Kyrgyzstan"),
    CountryRecord::new("KH", "+855", "Cambodia"),
    CountryRecord::new("KM", "+269", "Comoros"),
    CountryRecord::new("KN", "+1869", "Saint Kitts and Nevis"),
    CountryRecord::new("KP", "+850", "North Korea"),
    CountryRecord::new("KR", "+82", "South Korea"),
    CountryRecord::new("KW", "+965", "Kuwait"),
    CountryRecord::new("KZ", "+7", "Kazakhstan"),
    CountryRecord::new("LA", "+856", "Laos"),
    CountryRecord::new("LB", "+961", "Lebanon"),
    CountryRecord::new("LC", "+1758", "Saint Lucia"),
    CountryRecord::new("LI", "+423", "Liechtenstein"),
    CountryRecord::new("LK", "+94", "Sri Lanka"),
    CountryRecord::new("LR", "+231", "Liberia"),
    CountryRecord::new("LS", "+266", "Lesotho"),
    CountryRecord::new("LT", "+370", "Lithuania"),
    CountryRecord::new("LU", "+352", "Luxembourg"),
    CountryRecord::new("LV", "+371", "Latvia"),
    CountryRecord::new("LY", "+218", "Libya"),
    CountryRecord::new("MA", "+212", "Morocco"),
    CountryRecord::new("MC", "+377", "Monaco"),
    CountryRecord::new("MD", "+373", "Moldova"),
    CountryRecord::new("ME", "+382", "Montenegro"),
    CountryRecord::new("MG", "+261", "Madagascar"),
    CountryRecord::new("MK", "+389", "North Macedonia"),
    CountryRecord::new("ML", "+223", "Mali"),
    CountryRecord::new("MM", "+95", "Myanmar"),
    CountryRecord::new("MN", "+976", "Mongolia"),
    CountryRecord::new("MO", "+853", "Macau"),
    CountryRecord::new("MR", "+222", "Mauritania"),
    CountryRecord::new("MT", "+356", "Malta"),
    CountryRecord::new("MU", "+230", "Mauritius"),
    CountryRecord::new("MV", "+960", "Maldives"),
    CountryRecord::new("MW", "+265", "Malawi"),
    CountryRecord::new("MX", "+52", "Mexico"),
    CountryRecord::new("MY", "+60", "Malaysia"),
    CountryRecord::new("MZ", "+258", "Mozambique"),
    CountryRecord::new("NA", "+264", "Namibia"),
    CountryRecord::new("NE", "+227", "Niger"),
    CountryRecord::new("NG", "+234", "Nigeria"),
    CountryRecord::new("NI", "+505", "Nicaragua"),
    CountryRecord::new("NL", "+31", "Netherlands"),
    CountryRecord::new("NO", "+47", "Norway"),
    CountryRecord::new("NP", "+977", "Nepal"),
    CountryRecord::new("NZ", "+64", "New Zealand"),
    CountryRecord::new("OM", "+968", "Oman"),
    CountryRecord::new("PA", "+507", "Panama"),
    CountryRecord::new("PE", "+51", "Peru"),
    CountryRecord::new("PG", "+675", "Papua New Guinea"),
    CountryRecord::new("PH", "+63", "Philippines"),
    CountryRecord::new("PK", "+92", "Pakistan"),
    CountryRecord::new("PL", "+48", "Poland"),
    CountryRecord::new("PR", "+1787", "Puerto Rico"),
    CountryRecord::new("PS", "+970", "Palestine"),
    CountryRecord::new("PT", "+351", "Portugal"),
    CountryRecord::new("PY", "+595", "Paraguay"),
    CountryRecord::new("QA", "+974", "Qatar"),
    CountryRecord::new("RO", "+40", "Romania"),
    CountryRecord::new("RS", "+381", "Serbia"),
    CountryRecord::new("RU", "+7", "Russia"),
    CountryRecord::new("RW", "+250", "Rwanda"),
    CountryRecord::new("SA", "+966", "Saudi Arabia"),
    CountryRecord::new("SB", "+677", "Solomon Islands"),
    CountryRecord::new("SC", "+248", "Seychelles"),
    CountryRecord::new("SD", "+249", "Sudan"),
    CountryRecord::new("SE", "+46", "Sweden"),
    CountryRecord::new("SG", "+65", "Singapore"),
    CountryRecord::new("SI", "+386", "Slovenia"),
    CountryRecord::new("SK", "+421", "Slovakia"),
    CountryRecord::new("SL", "+232", "Sierra Leone"),
    CountryRecord::new("SM", "+378", "San Marino"),
    CountryRecord::new("SN", "+221", "Senegal"),
    CountryRecord::new("SO", "+252", "Somalia"),
    CountryRecord::new("SR", "+597", "Suriname"),
    CountryRecord::new("SS", "+211", "South Sudan"),
    CountryRecord::new("SV", "+503", "El Salvador"),
    CountryRecord::new("SY", "+963", "Syria"),
    CountryRecord::new("SZ", "+268", "Eswatini"),
    CountryRecord::new("TD", "+235", "Chad"),
    CountryRecord::new("TG", "+228", "Togo"),
    CountryRecord::new("TH", "+66", "Thailand"),
    CountryRecord::new("TJ", "+992", "Tajikistan"),
    CountryRecord::new("TL", "+670", "Timor-Leste"),
    CountryRecord::new("TM", "+993", "Turkmenistan"),
    CountryRecord::new("TN", "+216", "Tunisia"),
    CountryRecord::new("TO", "+676", "Tonga"),
    CountryRecord::new("TR", "+90", "Turkey"),
    CountryRecord::new("TT", "+1868", "Trinidad and Tobago"),
    CountryRecord::new("TW", "+886", "Taiwan"),
    CountryRecord::new("TZ", "+255", "Tanzania"),
    CountryRecord::new("UA", "+380", "Ukraine"),
    CountryRecord::new("UG", "+256", "Uganda"),
    UNITED_STATES,
    CountryRecord::new("UY", "+598", "Uruguay"),
    CountryRecord::new("UZ", "+998", "Uzbekistan"),
    CountryRecord::new("VA", "+379", "Vatican City"),
    CountryRecord::new("VC", "+1784", "Saint Vincent and the Grenadines"),
    CountryRecord::new("VE", "+58", "Venezuela"),
    CountryRecord::new("VN", "+84", "Vietnam"),
    CountryRecord::new("VU", "+678", "Vanuatu"),
    CountryRecord::new("WS", "+685", "Samoa"),
    CountryRecord::new("YE", "+967", "Yemen"),
    CountryRecord::new("ZA", "+27", "South Africa"),
    CountryRecord::new("ZM", "+260", "Zambia"),
    CountryRecord::new("ZW", "+263", "Zimbabwe"),
];

/// Every country in authored (alphabetical by ISO code) order.
pub fn list_countries() -> &'static [CountryRecord] {
    &COUNTRIES
}

/// Looks up a country by ISO code, ignoring ASCII case.
pub fn find(iso_code: &str) -> Option<&'static CountryRecord> {
    COUNTRIES
        .iter()
        .find(|country| country.iso_code.eq_ignore_ascii_case(iso_code))
}

/// The country used when nothing better is known.
pub fn default_country() -> &'static CountryRecord {
    &UNITED_STATES
}

/// All countries ordered by lowercase display name in `language`.
pub fn sorted_for(language: Language) -> Vec<&'static CountryRecord> {
    let mut sorted: Vec<_> = COUNTRIES.iter().collect();
    sorted.sort_by_cached_key(|country| country.display_name(language).to_lowercase());
    sorted
}

/// Dropdown search. Matches the display name, English name, dial code or ISO
/// code case-insensitively; a blank query returns the full sorted list.
pub fn filter(query: &str, language: Language) -> Vec<&'static CountryRecord> {
    let needle = query.trim().to_lowercase();
    let sorted = sorted_for(language);
    if needle.is_empty() {
        return sorted;
    }
    sorted
        .into_iter()
        .filter(|country| country.matches(&needle, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn iso_codes_are_unique() {
        let codes: HashSet<_> = list_countries().iter().map(|c| c.iso_code).collect();
        assert_eq!(codes.len(), list_countries().len());
    }

    #[test]
    fn dial_codes_are_plus_digits() {
        for country in list_countries() {
            let digits = country.dial_code.strip_prefix('+').unwrap_or("");
            assert!(!digits.is_empty(), "{}", country.iso_code);
            assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{}", country.iso_code);
        }
    }

    #[test]
    fn israel_row() {
        let israel = find("il").unwrap();
        assert_eq!(israel.dial_code, "+972");
        assert_eq!(israel.flag(), "🇮🇱");
        assert_eq!(israel.display_name(Language::He), "ישראל");
        assert_eq!(israel.display_name(Language::En), "Israel");
    }

    #[test]
    fn hebrew_falls_back_to_english_name() {
        let andorra = find("AD").unwrap();
        assert_eq!(andorra.hebrew_name(), None);
        assert_eq!(andorra.display_name(Language::He), "Andorra");
    }

    #[test]
    fn default_is_in_table() {
        assert_eq!(find(default_country().iso_code), Some(default_country()));
    }

    #[test]
    fn sorting_follows_display_name() {
        let english = sorted_for(Language::En);
        assert_eq!(english.len(), list_countries().len());
        assert_eq!(english[0].default_name, "Afghanistan");
        let names: Vec<_> = english.iter().map(|c| c.default_name.to_lowercase()).collect();
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn filter_by_name_dial_code_and_iso() {
        let by_name = filter("isr", Language::En);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].iso_code, "IL");

        assert!(filter("+972", Language::En).iter().any(|c| c.iso_code == "IL"));
        assert!(filter("gb", Language::En).iter().any(|c| c.iso_code == "GB"));
        assert!(filter("ישר", Language::He).iter().any(|c| c.iso_code == "IL"));
        assert!(filter("Israel", Language::He).iter().any(|c| c.iso_code == "IL"));
        assert_eq!(filter("  ", Language::He).len(), list_countries().len());
        assert!(filter("zzzz", Language::En).is_empty());
    }
}
