//! Placeholder authentication round-trip
//!
//! No credential check happens yet: any input succeeds after a fixed delay.
//! The fallible signature is the seam where a real verifier plugs in.

use crate::error::ApiResult;
use crate::utils::simulated_delay;

/// Simulated duration of the authentication round-trip.
pub const LOGIN_DELAY_MS: u32 = 1_500;

/// Authenticates the given credentials.
///
/// Currently always succeeds once the simulated round-trip elapses; the
/// arguments are accepted so callers already code against the real contract.
///
/// # Errors
/// None today. A real implementation reports rejected credentials and
/// transport failures through [`crate::error::ApiError`].
pub async fn authenticate(_email: &str, _password: &str) -> ApiResult<()> {
    simulated_delay(LOGIN_DELAY_MS).await;
    Ok(())
}
