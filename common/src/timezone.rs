//! Best-guess country from the client's IANA timezone.
//!
//! Uses the system timezone, not the IP address, so a VPN does not change the
//! guess. Zones missing from the table fall back to [`DEFAULT_COUNTRY`].

use crate::countries;

pub const DEFAULT_COUNTRY: &str = "US";

pub static TIMEZONE_TO_COUNTRY: &[(&str, &str)] = &[
    ("America/New_York", "US"),
    ("America/Chicago", "US"),
    ("America/Denver", "US"),
    ("America/Los_Angeles", "US"),
    ("America/Phoenix", "US"),
    ("America/Anchorage", "US"),
    ("America/Honolulu", "US"),
    ("America/Toronto", "CA"),
    ("America/Vancouver", "CA"),
    ("America/Sao_Paulo", "BR"),
    ("America/Rio_Branco", "BR"),
    ("America/Manaus", "BR"),
    ("America/Belem", "BR"),
    ("America/Fortaleza", "BR"),
    ("America/Recife", "BR"),
    ("America/Bahia", "BR"),
    ("America/Buenos_Aires", "AR"),
    ("America/Argentina/Buenos_Aires", "AR"),
    ("America/Mexico_City", "MX"),
    ("America/Cancun", "MX"),
    ("America/Tijuana", "MX"),
    ("America/Santiago", "CL"),
    ("America/Lima", "PE"),
    ("America/Bogota", "CO"),
    ("Europe/London", "GB"),
    ("Europe/Paris", "FR"),
    ("Europe/Berlin", "DE"),
    ("Europe/Rome", "IT"),
    ("Europe/Madrid", "ES"),
    ("Europe/Lisbon", "PT"),
    ("Europe/Amsterdam", "NL"),
    ("Europe/Brussels", "BE"),
    ("Europe/Zurich", "CH"),
    ("Europe/Vienna", "AT"),
    ("Europe/Stockholm", "SE"),
    ("Europe/Oslo", "NO"),
    ("Europe/Copenhagen", "DK"),
    ("Europe/Helsinki", "FI"),
    ("Europe/Dublin", "IE"),
    ("Europe/Warsaw", "PL"),
    ("Europe/Prague", "CZ"),
    ("Europe/Budapest", "HU"),
    ("Europe/Bucharest", "RO"),
    ("Europe/Athens", "GR"),
    ("Europe/Kiev", "UA"),
    ("Europe/Moscow", "RU"),
    ("Europe/Istanbul", "TR"),
    ("Asia/Jerusalem", "IL"),
    ("Asia/Tel_Aviv", "IL"),
    ("Asia/Dubai", "AE"),
    ("Asia/Riyadh", "SA"),
    ("Asia/Tokyo", "JP"),
    ("Asia/Shanghai", "CN"),
    ("Asia/Hong_Kong", "HK"),
    ("Asia/Singapore", "SG"),
    ("Asia/Seoul", "KR"),
    ("Asia/Taipei", "TW"),
    ("Asia/Bangkok", "TH"),
    ("Asia/Kuala_Lumpur", "MY"),
    ("Asia/Manila", "PH"),
    ("Asia/Jakarta", "ID"),
    ("Asia/Ho_Chi_Minh", "VN"),
    ("Asia/Kolkata", "IN"),
    ("Asia/Mumbai", "IN"),
    ("Australia/Sydney", "AU"),
    ("Australia/Melbourne", "AU"),
    ("Australia/Brisbane", "AU"),
    ("Australia/Perth", "AU"),
    ("Pacific/Auckland", "NZ"),
    ("Africa/Cairo", "EG"),
    ("Africa/Johannesburg", "ZA"),
];

/// ISO code for `timezone`, or [`DEFAULT_COUNTRY`] when the zone is unknown or
/// maps to a code missing from the country table.
pub fn country_for_timezone(timezone: &str) -> &'static str {
    TIMEZONE_TO_COUNTRY
        .iter()
        .find(|(zone, _)| *zone == timezone)
        .and_then(|(_, iso)| countries::find(iso))
        .map_or(DEFAULT_COUNTRY, |country| country.iso_code)
}

/// Runs the platform timezone reader and maps its result. A failing reader
/// yields [`DEFAULT_COUNTRY`]; this never returns an error.
pub fn infer_country<E>(read_timezone: impl FnOnce() -> Result<String, E>) -> &'static str {
    match read_timezone() {
        Ok(zone) => country_for_timezone(zone.trim()),
        Err(_) => DEFAULT_COUNTRY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_zones() {
        assert_eq!(country_for_timezone("Asia/Jerusalem"), "IL");
        assert_eq!(country_for_timezone("Asia/Tel_Aviv"), "IL");
        assert_eq!(country_for_timezone("America/Phoenix"), "US");
        assert_eq!(country_for_timezone("Asia/Kolkata"), "IN");
        assert_eq!(country_for_timezone("Africa/Johannesburg"), "ZA");
    }

    #[test]
    fn unknown_zone_falls_back() {
        assert_eq!(country_for_timezone("Mars/Olympus_Mons"), "US");
        assert_eq!(country_for_timezone(""), "US");
    }

    #[test]
    fn reader_failure_falls_back() {
        assert_eq!(infer_country(|| Err::<String, _>("Intl unavailable")), "US");
        assert_eq!(infer_country(|| Ok::<_, ()>("Europe/Berlin".to_string())), "DE");
    }

    #[test]
    fn every_mapped_country_exists() {
        for (zone, iso) in TIMEZONE_TO_COUNTRY {
            assert!(countries::find(iso).is_some(), "{zone} -> {iso}");
        }
    }
}
