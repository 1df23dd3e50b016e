//! Payment card validation.
//!
//! Cards are checked syntactically only: number format and Luhn checksum,
//! expiration date, and security code shape. Nothing is charged.

use chrono::{NaiveDate, Utc};

use crate::domain::entities::CreditCard;

const MIN_CARD_DIGITS: usize = 12;
const MAX_CARD_DIGITS: usize = 19;

/// Reasons a card is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreditCardValidationError {
    #[error("Card number is required")]
    MissingNumber,

    #[error("Card number may only contain digits, spaces and hyphens")]
    NonDigitNumber,

    #[error("Card number must have between 12 and 19 digits")]
    InvalidNumberLength,

    #[error("Card number failed checksum validation")]
    ChecksumMismatch,

    #[error("Card expiration is required")]
    MissingExpiration,

    #[error("Card expiration must be in MM/YY or MM/YYYY format")]
    MalformedExpiration,

    #[error("Card has expired")]
    Expired,

    #[error("Security code is required")]
    MissingSecurityCode,

    #[error("Security code must be 3 or 4 digits")]
    InvalidSecurityCode,
}

/// Validates a card against today's date (UTC).
///
/// # Errors
///
/// See [`validate_credit_card_at`].
pub fn validate_credit_card(card: &CreditCard) -> Result<(), CreditCardValidationError> {
    validate_credit_card_at(card, Utc::now().date_naive())
}

/// Validates a card as of `today`.
///
/// # Rules
///
/// Checked in order, first failure wins:
///
/// 1. Number present; spaces and hyphens are ignored; 12-19 digits; passes Luhn
/// 2. Expiration present, `MM/YY` or `MM/YYYY` with month 1-12; the card is
///    valid through the last day of that month, so it is expired only when
///    that day lies strictly before `today`
/// 3. Security code present, 3 or 4 digits
///
/// # Errors
///
/// Returns the first [`CreditCardValidationError`] rule violated.
pub fn validate_credit_card_at(
    card: &CreditCard,
    today: NaiveDate,
) -> Result<(), CreditCardValidationError> {
    validate_number(card.number.as_deref())?;
    validate_expiration(card.expiration.as_deref(), today)?;
    validate_security_code(card.security_code.as_deref())
}

fn validate_number(number: Option<&str>) -> Result<(), CreditCardValidationError> {
    let number = non_blank(number).ok_or(CreditCardValidationError::MissingNumber)?;

    let mut digits = Vec::with_capacity(MAX_CARD_DIGITS);
    for c in number.chars() {
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            ' ' | '-' => {}
            _ => return Err(CreditCardValidationError::NonDigitNumber),
        }
    }

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return Err(CreditCardValidationError::InvalidNumberLength);
    }

    if !luhn_checksum_valid(&digits) {
        return Err(CreditCardValidationError::ChecksumMismatch);
    }

    Ok(())
}

/// Luhn mod-10 check over the digits, rightmost digit being the check digit.
fn luhn_checksum_valid(digits: &[u8]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

fn validate_expiration(
    expiration: Option<&str>,
    today: NaiveDate,
) -> Result<(), CreditCardValidationError> {
    let expiration = non_blank(expiration).ok_or(CreditCardValidationError::MissingExpiration)?;
    let (month, year) =
        parse_expiration(expiration).ok_or(CreditCardValidationError::MalformedExpiration)?;

    let last_valid_day =
        last_day_of_month(year, month).ok_or(CreditCardValidationError::MalformedExpiration)?;

    if last_valid_day < today {
        return Err(CreditCardValidationError::Expired);
    }

    Ok(())
}

/// Parses `MM/YY` or `MM/YYYY` into `(month, year)`.
fn parse_expiration(value: &str) -> Option<(u32, i32)> {
    let (month, year) = value.split_once('/')?;
    let (month, year) = (month.trim(), year.trim());

    if month.is_empty()
        || month.len() > 2
        || !month.bytes().all(|b| b.is_ascii_digit())
        || !year.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }

    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        4 => year.parse().ok()?,
        _ => return None,
    };

    Some((month, year))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

fn validate_security_code(code: Option<&str>) -> Result<(), CreditCardValidationError> {
    let code = non_blank(code).ok_or(CreditCardValidationError::MissingSecurityCode)?;

    if !(3..=4).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CreditCardValidationError::InvalidSecurityCode);
    }

    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
