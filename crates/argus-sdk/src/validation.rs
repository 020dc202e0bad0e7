//! Response validation and body decoding shared by all endpoints.

use crate::error::{SdkError, SdkResult};
use crate::http::ArgusResponse;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

/// Phrase the server uses when it rejects an expired access token.
const TOKEN_EXPIRED_PHRASE: &str = "token has expired";

/// Error envelope returned by the Argus web services.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Check that a response indicates success.
///
/// A `401` whose message says the access token has expired becomes
/// [`SdkError::TokenExpired`]; any other status outside `2xx` becomes
/// [`SdkError::ApiRequestFailed`].
pub fn assert_valid_response(response: &ArgusResponse, path: &str) -> SdkResult<()> {
    if response.is_success() {
        return Ok(());
    }

    let message = server_message(response);

    if response.status == 401
        && (mentions_expired_token(&message) || mentions_expired_token(&response.result))
    {
        warn!(path, "Argus rejected an expired access token");
        return Err(SdkError::TokenExpired {
            path: path.to_string(),
        });
    }

    warn!(status = response.status, path, %message, "Argus request failed");
    Err(SdkError::ApiRequestFailed {
        status: response.status,
        path: path.to_string(),
        message,
    })
}

/// Decode a JSON response body.
pub fn from_json<T: DeserializeOwned>(body: &str) -> SdkResult<T> {
    serde_json::from_str(body).map_err(SdkError::from)
}

/// Best available description of a failed response: the error envelope's
/// message, then the status reason phrase, then the raw body.
fn server_message(response: &ArgusResponse) -> String {
    serde_json::from_str::<ErrorBody>(&response.result)
        .ok()
        .and_then(|body| body.message)
        .or_else(|| response.message.clone())
        .unwrap_or_else(|| response.result.trim().to_string())
}

fn mentions_expired_token(text: &str) -> bool {
    text.to_ascii_lowercase().contains(TOKEN_EXPIRED_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::PrincipalUser;

    #[test]
    fn test_success_statuses_pass() {
        for status in [200, 201, 204] {
            let response = ArgusResponse::new(status, "{}");
            assert!(assert_valid_response(&response, "/users/id/1").is_ok());
        }
    }

    #[test]
    fn test_expired_token_in_envelope() {
        let response = ArgusResponse::new(401, r#"{"status":401,"message":"Access token has expired"}"#)
            .with_message("Unauthorized");

        let result = assert_valid_response(&response, "/users/id/1");

        assert!(matches!(
            result,
            Err(SdkError::TokenExpired { ref path }) if path == "/users/id/1"
        ));
    }

    #[test]
    fn test_expired_token_in_plain_body() {
        let response = ArgusResponse::new(401, "Access Token Has Expired");

        let result = assert_valid_response(&response, "/users/username/jdoe");

        assert!(matches!(result, Err(SdkError::TokenExpired { .. })));
    }

    #[test]
    fn test_other_unauthorized_is_api_error() {
        let response = ArgusResponse::new(401, r#"{"message":"Invalid credentials"}"#);

        let result = assert_valid_response(&response, "/users/id/1");

        match result {
            Err(SdkError::ApiRequestFailed { status, message, .. }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("Expected ApiRequestFailed, got: {other:?}"),
        }
    }

    #[test]
    fn test_expired_message_on_other_status_is_api_error() {
        let response = ArgusResponse::new(403, r#"{"message":"Access token has expired"}"#);

        let result = assert_valid_response(&response, "/users/id/1");

        assert!(matches!(
            result,
            Err(SdkError::ApiRequestFailed { status: 403, .. })
        ));
    }

    #[test]
    fn test_message_falls_back_to_reason_then_body() {
        let response = ArgusResponse::new(500, "<html>boom</html>").with_message("Internal Server Error");
        match assert_valid_response(&response, "/users/id/1") {
            Err(SdkError::ApiRequestFailed { message, .. }) => {
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("Expected ApiRequestFailed, got: {other:?}"),
        }

        let response = ArgusResponse::new(502, " bad gateway \n");
        match assert_valid_response(&response, "/users/id/1") {
            Err(SdkError::ApiRequestFailed { message, .. }) => {
                assert_eq!(message, "bad gateway");
            }
            other => panic!("Expected ApiRequestFailed, got: {other:?}"),
        }
    }

    #[test]
    fn test_from_json_decodes_user() {
        let user: PrincipalUser = from_json(r#"{"id": 4, "userName": "jdoe"}"#).unwrap();
        assert_eq!(user.user_name, "jdoe");
        assert_eq!(user.audit.id, Some(4));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result: SdkResult<PrincipalUser> = from_json("not json");
        assert!(matches!(result, Err(SdkError::JsonParse(_))));
    }
}
