//! Payment card submitted at checkout.

use std::fmt;

/// Card details for one checkout call.
///
/// Never stored. `Debug` masks the number and security code so the card can
/// appear in traces without leaking.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CreditCard {
    pub number: Option<String>,
    /// Expiration in `MM/YY` or `MM/YYYY` form.
    pub expiration: Option<String>,
    pub security_code: Option<String>,
}

impl CreditCard {
    pub fn new(
        number: Option<String>,
        expiration: Option<String>,
        security_code: Option<String>,
    ) -> Self {
        Self {
            number,
            expiration,
            security_code,
        }
    }

    /// Last four digits of the number, if it has at least four.
    pub fn last_four(&self) -> Option<String> {
        let digits: Vec<char> = self
            .number
            .as_deref()?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        (digits.len() >= 4).then(|| digits[digits.len() - 4..].iter().collect())
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self
            .last_four()
            .map(|last| format!("****{last}"))
            .unwrap_or_else(|| "<none>".to_string());

        f.debug_struct("CreditCard")
            .field("number", &masked)
            .field("expiration", &self.expiration)
            .field("security_code", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_four_ignores_separators() {
        let card = CreditCard::new(
            Some("4242 4242-4242 1234".to_string()),
            Some("12/30".to_string()),
            Some("123".to_string()),
        );
        assert_eq!(card.last_four(), Some("1234".to_string()));
    }

    #[test]
    fn test_last_four_short_number() {
        let card = CreditCard::new(Some("12".to_string()), None, None);
        assert_eq!(card.last_four(), None);
    }

    #[test]
    fn test_debug_masks_sensitive_fields() {
        let card = CreditCard::new(
            Some("4111111111111111".to_string()),
            Some("01/29".to_string()),
            Some("987".to_string()),
        );
        let rendered = format!("{card:?}");

        assert!(rendered.contains("****1111"));
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("987"));
    }
}
