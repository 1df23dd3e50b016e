//! Checkout validation and progress.
//!
//! The validators are pure functions of their inputs: no I/O, no clock
//! access beyond [`validate_credit_card`] reading today's date, and the
//! first violated rule is always reported the same way.

pub mod billing_validator;
pub mod card_validator;
pub mod stage;

pub use billing_validator::{InvalidBillingInfo, validate_billing_info};
pub use card_validator::{CreditCardValidationError, validate_credit_card, validate_credit_card_at};
pub use stage::CheckoutStage;
