//! Purchase receipt code generation and shape checks.
//!
//! Receipt codes are random, URL-safe tokens handed to the buyer at checkout
//! and presented again to download purchased books.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const RECEIPT_LENGTH_BYTES: usize = 12;

/// Length of an encoded receipt code.
pub const RECEIPT_CODE_LENGTH: usize = 16;

/// Generates a cryptographically secure random receipt code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 16-character code.
///
/// # Errors
///
/// Returns the `getrandom` error if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_receipt_code()?;
/// assert_eq!(code.len(), 16);
/// ```
pub fn generate_receipt_code() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; RECEIPT_LENGTH_BYTES];
    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Returns true if `code` has the shape of a generated receipt code.
///
/// Used to reject garbage before looking anything up.
pub fn is_well_formed_receipt(code: &str) -> bool {
    code.len() == RECEIPT_CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
