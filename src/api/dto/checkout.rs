//! DTOs for the checkout endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{BillingAddress, BillingInfo, BookId, CreditCard, Purchase};

/// Checkout request body.
///
/// Billing and card fields are all optional at the JSON level so that a
/// missing field is reported by the checkout validators with a precise
/// reason rather than as a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub billing_address: BillingAddressDto,

    #[serde(default)]
    pub credit_card: CreditCardDto,

    /// Books to buy. Duplicates are collapsed by the purchase service.
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Between 1 and 100 book ids are required"))]
    pub book_ids: Vec<BookId>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BillingAddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Card details. Never logged or stored.
#[derive(Default, Deserialize)]
pub struct CreditCardDto {
    pub number: Option<String>,
    pub expiration: Option<String>,
    pub security_code: Option<String>,
}

impl std::fmt::Debug for CreditCardDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreditCardDto")
            .field("number", &self.number.as_ref().map(|_| "****"))
            .field("expiration", &self.expiration)
            .field("security_code", &self.security_code.as_ref().map(|_| "***"))
            .finish()
    }
}

impl CheckoutRequest {
    /// Splits the request into its domain parts.
    pub fn into_parts(self) -> (BillingInfo, CreditCard, Vec<BookId>) {
        let address = self.billing_address;
        let billing_info = BillingInfo::new(
            self.first_name,
            self.last_name,
            BillingAddress {
                street: address.street,
                city: address.city,
                state: address.state,
                postal_code: address.postal_code,
                country: address.country,
            },
        );
        let card = self.credit_card;
        let credit_card = CreditCard::new(card.number, card.expiration, card.security_code);

        (billing_info, credit_card, self.book_ids)
    }
}

/// Successful checkout response.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub message: String,
    pub purchase_id: i64,
    /// Code to present when downloading the purchased books.
    pub receipt: String,
    pub book_ids: Vec<BookId>,
    pub total_usd: f64,
    pub purchased_at: DateTime<Utc>,
}

impl From<Purchase> for CheckoutResponse {
    fn from(purchase: Purchase) -> Self {
        Self {
            message: format!(
                "Thank you for your purchase, {}!",
                purchase.buyer.first_name
            ),
            purchase_id: purchase.id,
            receipt: purchase.receipt,
            book_ids: purchase.book_ids,
            total_usd: purchase.total_usd,
            purchased_at: purchase.purchased_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize() {
        let request: CheckoutRequest = serde_json::from_str(r#"{"book_ids": [1]}"#).unwrap();

        assert!(request.first_name.is_none());
        assert!(request.billing_address.street.is_none());
        assert!(request.credit_card.number.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_book_ids_length_validation() {
        let empty: CheckoutRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.validate().is_err());

        let ids: Vec<i64> = (1..=101).collect();
        let too_many: CheckoutRequest =
            serde_json::from_value(serde_json::json!({ "book_ids": ids })).unwrap();
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_card_debug_is_masked() {
        let card = CreditCardDto {
            number: Some("4111111111111111".to_string()),
            expiration: Some("12/30".to_string()),
            security_code: Some("123".to_string()),
        };

        let debug = format!("{card:?}");
        assert!(!debug.contains("4111"));
        assert!(!debug.contains("123"));
    }

    #[test]
    fn test_into_parts() {
        let request: CheckoutRequest = serde_json::from_value(serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "billing_address": { "street": "1 Main St", "country": "GB" },
            "credit_card": { "number": "4111111111111111" },
            "book_ids": [3, 4]
        }))
        .unwrap();

        let (billing, card, book_ids) = request.into_parts();
        assert_eq!(billing.first_name.as_deref(), Some("Ada"));
        assert_eq!(billing.billing_address.country.as_deref(), Some("GB"));
        assert_eq!(card.number.as_deref(), Some("4111111111111111"));
        assert_eq!(book_ids, vec![3, 4]);
    }
}
