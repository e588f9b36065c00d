use crate::domain::model::{Address, Country};
use crate::utils::error::{RateError, Result};
use regex::Regex;

/// Four segments: street, city, two-letter region code, postal/ZIP code.
/// The comma between region and postal code is optional. The postal code is
/// either a US ZIP (5 digits, optional -4 extension) or a Canadian postal
/// code (3 alphanumerics, optional space, 3 alphanumerics).
const ADDRESS_PATTERN: &str = r"^\s*([^,]+?)\s*,\s*([^,]+?)\s*,\s*([A-Z]{2})(?:\s*,\s*|\s+)((?:\d{5}(?:-\d{4})?)|(?:[A-Za-z0-9]{3} ?[A-Za-z0-9]{3}))\s*$";

const US_ZIP_PATTERN: &str = r"^\d{5}(-\d{4})?$";

/// Parses a free-text address into structured components. The postal code is
/// normalized by stripping internal spaces (`"A1A 1A1"` becomes `"A1A1A1"`).
pub fn parse_address(raw: &str) -> Result<Address> {
    let re = Regex::new(ADDRESS_PATTERN).unwrap();

    let captures = re.captures(raw).ok_or_else(|| RateError::AddressFormat {
        input: raw.to_string(),
    })?;

    Ok(Address {
        street: captures[1].to_string(),
        city: captures[2].to_string(),
        region: captures[3].to_string(),
        postal_code: captures[4].trim().replace(' ', ""),
    })
}

/// Classifies the destination country from the postal code shape. A US ZIP
/// shape yields `Us`; everything else is assumed Canadian, including
/// malformed input. Deliberately permissive toward the carrier's home
/// country, so this never fails.
pub fn detect_country(postal_code: &str) -> Country {
    let re = Regex::new(US_ZIP_PATTERN).unwrap();

    if re.is_match(postal_code.trim()) {
        Country::Us
    } else {
        Country::Ca
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canadian_address() {
        let address = parse_address("123 Main St, Anytown, ON, A1A1A1").unwrap();

        assert_eq!(address.street, "123 Main St");
        assert_eq!(address.city, "Anytown");
        assert_eq!(address.region, "ON");
        assert_eq!(address.postal_code, "A1A1A1");
    }

    #[test]
    fn test_parse_us_address() {
        let address = parse_address("1 Infinite Loop, Cupertino, CA, 95014").unwrap();

        assert_eq!(address.street, "1 Infinite Loop");
        assert_eq!(address.city, "Cupertino");
        assert_eq!(address.region, "CA");
        assert_eq!(address.postal_code, "95014");
    }

    #[test]
    fn test_parse_strips_internal_postal_code_space() {
        let address = parse_address("10 Front St, Toronto, ON, M5J 2N1").unwrap();
        assert_eq!(address.postal_code, "M5J2N1");
    }

    #[test]
    fn test_parse_region_to_postal_comma_is_optional() {
        let address = parse_address("10 Front St, Toronto, ON M5J 2N1").unwrap();
        assert_eq!(address.region, "ON");
        assert_eq!(address.postal_code, "M5J2N1");
    }

    #[test]
    fn test_parse_extended_us_zip() {
        let address = parse_address("1600 Amphitheatre Pkwy, Mountain View, CA, 94043-1351").unwrap();
        assert_eq!(address.postal_code, "94043-1351");
    }

    #[test]
    fn test_parse_rejects_missing_region() {
        let err = parse_address("123 Main St, Anytown, A1A1A1").unwrap_err();
        match err {
            RateError::AddressFormat { input } => {
                assert_eq!(input, "123 Main St, Anytown, A1A1A1");
            }
            other => panic!("expected AddressFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_lowercase_region() {
        assert!(parse_address("123 Main St, Anytown, on, A1A1A1").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_postal_code() {
        assert!(parse_address("123 Main St, Anytown, ON, 12").is_err());
        assert!(parse_address("123 Main St, Anytown, ON, A1A1A1A1").is_err());
    }

    #[test]
    fn test_parse_round_trips_through_display() {
        let address = parse_address("123 Main St, Anytown, ON, A1A1A1").unwrap();
        let reparsed = parse_address(&address.to_string()).unwrap();
        assert_eq!(address, reparsed);
    }

    #[test]
    fn test_detect_country_us_zip_shapes() {
        assert_eq!(detect_country("95014"), Country::Us);
        assert_eq!(detect_country("94043-1351"), Country::Us);
        assert_eq!(detect_country(" 95014 "), Country::Us);
    }

    #[test]
    fn test_detect_country_defaults_to_canada() {
        assert_eq!(detect_country("A1A1A1"), Country::Ca);
        assert_eq!(detect_country("M5J2N1"), Country::Ca);
        // Malformed codes are assumed Canadian as well.
        assert_eq!(detect_country("1234"), Country::Ca);
        assert_eq!(detect_country("95014-12"), Country::Ca);
        assert_eq!(detect_country("not a code"), Country::Ca);
    }
}
