//! Billing information submitted at checkout.

/// Postal address a purchase is billed to.
///
/// Fields are optional because checkout payloads may omit them; the checkout
/// validator decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Buyer details for a single checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub billing_address: BillingAddress,
}

impl BillingInfo {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        billing_address: BillingAddress,
    ) -> Self {
        Self {
            first_name,
            last_name,
            billing_address,
        }
    }
}
