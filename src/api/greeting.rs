//! Client for the hello endpoint, the app's single real HTTP integration

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::utils::console_error;

/// The one consumed endpoint.
pub const HELLO_ENDPOINT: &str = "http://127.0.0.1:3001/api/hello/";

/// Shown verbatim whenever the greeting cannot be loaded.
pub const GREETING_FALLBACK: &str = "无法从后端加载消息。";

/// Wire shape of the hello endpoint's JSON body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

/// Fetches the greeting message from the backend.
///
/// # Errors
/// - `NetworkUnreachable` if the request never reaches the server
/// - `Status` if the server answers with a non-success code
/// - `MalformedResponse` if the body is not the expected JSON shape
pub async fn fetch_greeting() -> ApiResult<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_net::http::Request;

        let response = Request::get(HELLO_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::NetworkUnreachable(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let hello: HelloResponse = response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;

        Ok(hello.message)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // For tests, return mock response
        Ok("Hello from ScholarLink AI".to_string())
    }
}

/// Recovery policy for the greeting: pass successes through, log failures
/// and substitute the fixed localized fallback.
pub fn greeting_or_fallback(result: ApiResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(e) => {
            console_error(&format!("Error fetching hello message: {e}"));
            GREETING_FALLBACK.to_string()
        }
    }
}
