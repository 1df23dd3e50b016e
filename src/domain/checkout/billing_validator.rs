//! Billing information validation.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::BillingAddress;

/// Letters (any script), spaces, apostrophes, periods and hyphens.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}][\p{L} '.\-]*$").unwrap());

static POSTAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{1,8}[A-Za-z0-9]$").unwrap());

static COUNTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").unwrap());

const MAX_NAME_LENGTH: usize = 100;
const MAX_STREET_LENGTH: usize = 200;
const MAX_CITY_LENGTH: usize = 100;

/// Reasons billing information is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBillingInfo {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is malformed: {reason}")]
    Malformed {
        field: &'static str,
        reason: &'static str,
    },
}

impl InvalidBillingInfo {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
            Self::TooLong { field, .. } | Self::Malformed { field, .. } => field,
        }
    }
}

/// Validates the buyer's name and billing address.
///
/// # Rules
///
/// Checked in order, first failure wins:
///
/// 1. `first_name` - present, at most 100 characters, letters/spaces/`'`/`.`/`-`
/// 2. `last_name` - same rules as `first_name`
/// 3. `billing_address.street` - present, at most 200 characters
/// 4. `billing_address.city` - present, at most 100 characters
/// 5. `billing_address.postal_code` - 3-10 letters, digits, spaces or hyphens
/// 6. `billing_address.country` - two-letter ISO 3166-1 code
/// 7. `billing_address.state` - optional, but not blank when given
///
/// Blank values (empty or whitespace only) count as missing.
///
/// # Errors
///
/// Returns the first [`InvalidBillingInfo`] rule violated.
///
/// # Examples
///
/// ```ignore
/// let address = BillingAddress {
///     street: Some("1 Infinite Loop".into()),
///     city: Some("Cupertino".into()),
///     state: Some("CA".into()),
///     postal_code: Some("95014".into()),
///     country: Some("US".into()),
/// };
/// assert!(validate_billing_info(Some("Ada"), Some("Lovelace"), &address).is_ok());
/// assert!(validate_billing_info(Some("Ada"), None, &address).is_err());
/// ```
pub fn validate_billing_info(
    first_name: Option<&str>,
    last_name: Option<&str>,
    billing_address: &BillingAddress,
) -> Result<(), InvalidBillingInfo> {
    validate_name("first_name", first_name)?;
    validate_name("last_name", last_name)?;
    validate_address(billing_address)
}

fn validate_name(field: &'static str, value: Option<&str>) -> Result<(), InvalidBillingInfo> {
    let name = required(field, value)?;

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(InvalidBillingInfo::TooLong {
            field,
            max: MAX_NAME_LENGTH,
        });
    }

    if !NAME_REGEX.is_match(name) {
        return Err(InvalidBillingInfo::Malformed {
            field,
            reason: "only letters, spaces, apostrophes, periods and hyphens are allowed",
        });
    }

    Ok(())
}

fn validate_address(address: &BillingAddress) -> Result<(), InvalidBillingInfo> {
    let street = required("billing_address.street", address.street.as_deref())?;
    if street.chars().count() > MAX_STREET_LENGTH {
        return Err(InvalidBillingInfo::TooLong {
            field: "billing_address.street",
            max: MAX_STREET_LENGTH,
        });
    }

    let city = required("billing_address.city", address.city.as_deref())?;
    if city.chars().count() > MAX_CITY_LENGTH {
        return Err(InvalidBillingInfo::TooLong {
            field: "billing_address.city",
            max: MAX_CITY_LENGTH,
        });
    }

    let postal_code = required("billing_address.postal_code", address.postal_code.as_deref())?;
    if !POSTAL_CODE_REGEX.is_match(postal_code) {
        return Err(InvalidBillingInfo::Malformed {
            field: "billing_address.postal_code",
            reason: "expected 3-10 letters, digits, spaces or hyphens",
        });
    }

    let country = required("billing_address.country", address.country.as_deref())?;
    if !COUNTRY_REGEX.is_match(country) {
        return Err(InvalidBillingInfo::Malformed {
            field: "billing_address.country",
            reason: "expected a two-letter country code",
        });
    }

    if let Some(state) = address.state.as_deref()
        && state.trim().is_empty()
    {
        return Err(InvalidBillingInfo::Malformed {
            field: "billing_address.state",
            reason: "must not be blank when provided",
        });
    }

    Ok(())
}

/// Returns the trimmed value, treating absent and blank values alike.
fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, InvalidBillingInfo> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(InvalidBillingInfo::MissingField(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_address() -> BillingAddress {
        BillingAddress {
            street: Some("221B Baker Street".to_string()),
            city: Some("London".to_string()),
            state: None,
            postal_code: Some("NW1 6XE".to_string()),
            country: Some("GB".to_string()),
        }
    }

    #[test]
    fn test_valid_billing_info() {
        assert!(validate_billing_info(Some("Sherlock"), Some("Holmes"), &valid_address()).is_ok());
    }

    #[test]
    fn test_valid_names_with_punctuation() {
        assert!(
            validate_billing_info(Some("Mary-Jane"), Some("O'Neil Jr."), &valid_address()).is_ok()
        );
        assert!(validate_billing_info(Some("Zoë"), Some("Łukasiewicz"), &valid_address()).is_ok());
    }

    #[test]
    fn test_missing_first_name() {
        let err = validate_billing_info(None, Some("Holmes"), &valid_address()).unwrap_err();
        assert_eq!(err, InvalidBillingInfo::MissingField("first_name"));
    }

    #[test]
    fn test_blank_last_name_counts_as_missing() {
        let err = validate_billing_info(Some("Sherlock"), Some("   "), &valid_address()).unwrap_err();
        assert_eq!(err, InvalidBillingInfo::MissingField("last_name"));
    }

    #[test]
    fn test_first_failure_is_reported() {
        let err = validate_billing_info(None, None, &BillingAddress::default()).unwrap_err();
        assert_eq!(err.field(), "first_name");
    }

    #[test]
    fn test_name_with_digits_is_malformed() {
        let err = validate_billing_info(Some("R2D2"), Some("Droid"), &valid_address()).unwrap_err();
        assert!(matches!(
            err,
            InvalidBillingInfo::Malformed {
                field: "first_name",
                ..
            }
        ));
    }

    #[test]
    fn test_name_too_long() {
        let long = "a".repeat(101);
        let err = validate_billing_info(Some(&long), Some("Holmes"), &valid_address()).unwrap_err();
        assert_eq!(
            err,
            InvalidBillingInfo::TooLong {
                field: "first_name",
                max: 100
            }
        );
    }

    #[test]
    fn test_missing_street() {
        let address = BillingAddress {
            street: None,
            ..valid_address()
        };
        let err = validate_billing_info(Some("Sherlock"), Some("Holmes"), &address).unwrap_err();
        assert_eq!(err, InvalidBillingInfo::MissingField("billing_address.street"));
    }

    #[test]
    fn test_missing_city() {
        let address = BillingAddress {
            city: Some(String::new()),
            ..valid_address()
        };
        let err = validate_billing_info(Some("Sherlock"), Some("Holmes"), &address).unwrap_err();
        assert_eq!(err, InvalidBillingInfo::MissingField("billing_address.city"));
    }

    #[test]
    fn test_postal_code_shapes() {
        for code in ["95014", "10115", "SW1A 1AA", "123-4567", "K1A 0B1"] {
            let address = BillingAddress {
                postal_code: Some(code.to_string()),
                ..valid_address()
            };
            assert!(
                validate_billing_info(Some("Sherlock"), Some("Holmes"), &address).is_ok(),
                "expected {code} to be accepted"
            );
        }

        for code in ["1", "12", "12345678901", "95014!", "-1234"] {
            let address = BillingAddress {
                postal_code: Some(code.to_string()),
                ..valid_address()
            };
            let err = validate_billing_info(Some("Sherlock"), Some("Holmes"), &address).unwrap_err();
            assert_eq!(err.field(), "billing_address.postal_code", "code {code}");
        }
    }

    #[test]
    fn test_country_must_be_two_letters() {
        let address = BillingAddress {
            country: Some("USA".to_string()),
            ..valid_address()
        };
        let err = validate_billing_info(Some("Sherlock"), Some("Holmes"), &address).unwrap_err();
        assert_eq!(err.field(), "billing_address.country");
    }

    #[test]
    fn test_blank_state_rejected() {
        let address = BillingAddress {
            state: Some(" ".to_string()),
            ..valid_address()
        };
        let err = validate_billing_info(Some("Sherlock"), Some("Holmes"), &address).unwrap_err();
        assert_eq!(err.field(), "billing_address.state");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let address = BillingAddress {
            country: Some("1".to_string()),
            ..valid_address()
        };
        let first = validate_billing_info(Some("Sherlock"), Some("Holmes"), &address);
        let second = validate_billing_info(Some("Sherlock"), Some("Holmes"), &address);
        assert_eq!(first, second);
    }
}
