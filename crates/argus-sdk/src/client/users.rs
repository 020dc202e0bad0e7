//! User lookup endpoints.

use argus_core::PrincipalUser;
use tracing::debug;

use crate::error::{SdkError, SdkResult};
use crate::http::HttpBackend;
use crate::url::{build_user_by_id_path, build_user_by_username_path};

use super::ArgusClient;

/// Methods of the `/users` resource.
pub struct UserService<'a, B: HttpBackend> {
    client: &'a ArgusClient<B>,
}

impl<'a, B: HttpBackend> UserService<'a, B> {
    pub(super) const fn new(client: &'a ArgusClient<B>) -> Self {
        Self { client }
    }

    /// Return the user with the given ID.
    pub async fn get_user_by_id(&self, id: u64) -> SdkResult<PrincipalUser> {
        let path = build_user_by_id_path(id);
        debug!(id, "Looking up Argus user by id");
        self.client.get_json(&path).await
    }

    /// Return the user with the given username.
    ///
    /// An empty username, `.` or `..` is rejected without contacting the
    /// server.
    pub async fn get_user_by_username(&self, username: &str) -> SdkResult<PrincipalUser> {
        if username.is_empty() {
            return Err(SdkError::InvalidRequest {
                message: "username must not be empty".to_string(),
            });
        }
        // URL normalisation would collapse these onto another resource
        if username == "." || username == ".." {
            return Err(SdkError::InvalidRequest {
                message: format!("'{username}' is not a valid username"),
            });
        }

        let path = build_user_by_username_path(username);
        debug!(username, "Looking up Argus user by username");
        self.client.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::fake_user_json;
    use crate::http::testing::{FakeBackend, RecordedRequest};
    use crate::http::{ArgusResponse, MockHttpBackend, RequestType};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_user_by_id() {
        let backend = FakeBackend::new().with_json("/users/id/42", 200, &fake_user_json(42, "jdoe"));
        let client = ArgusClient::with_backend(backend);

        let user = client.users().get_user_by_id(42).await.unwrap();

        assert_eq!(user.audit.id, Some(42));
        assert_eq!(user.user_name, "jdoe");
        assert_eq!(
            client.backend.requests(),
            vec![RecordedRequest {
                method: RequestType::Get,
                path: "/users/id/42".to_string(),
                body: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_get_user_by_username() {
        let backend = FakeBackend::new().with_json(
            "/users/username/jdoe",
            200,
            &fake_user_json(7, "jdoe"),
        );
        let client = ArgusClient::with_backend(backend);

        let user = client.users().get_user_by_username("jdoe").await.unwrap();

        assert_eq!(user.audit.id, Some(7));
        assert_eq!(client.backend.requests().len(), 1);
        assert_eq!(client.backend.requests()[0].path, "/users/username/jdoe");
    }

    #[tokio::test]
    async fn test_request_path_for_ids() {
        for id in [0_u64, 1, 999, u64::MAX] {
            let mut backend = MockHttpBackend::new();
            let expected = format!("/users/id/{id}");
            backend
                .expect_execute()
                .withf(move |method, path, body| {
                    *method == RequestType::Get && path == expected && body.is_none()
                })
                .times(1)
                .returning(move |_, _, _| {
                    Ok(ArgusResponse::new(200, json!({"id": id, "userName": "u"}).to_string()))
                });
            let client = ArgusClient::with_backend(backend);

            let user = client.users().get_user_by_id(id).await.unwrap();

            assert_eq!(user.audit.id, Some(id));
        }
    }

    #[tokio::test]
    async fn test_request_path_for_usernames() {
        for name in ["admin", "first.last", "svc-argus_01"] {
            let mut backend = MockHttpBackend::new();
            let expected = format!("/users/username/{name}");
            backend
                .expect_execute()
                .withf(move |method, path, _| *method == RequestType::Get && path == expected)
                .times(1)
                .returning(move |_, _, _| {
                    Ok(ArgusResponse::new(200, json!({"userName": name}).to_string()))
                });
            let client = ArgusClient::with_backend(backend);

            let user = client.users().get_user_by_username(name).await.unwrap();

            assert_eq!(user.user_name, name);
        }
    }

    #[tokio::test]
    async fn test_empty_username_sends_nothing() {
        let mut backend = MockHttpBackend::new();
        backend.expect_execute().never();
        let client = ArgusClient::with_backend(backend);

        let result = client.users().get_user_by_username("").await;

        assert!(matches!(result, Err(SdkError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn test_dot_usernames_send_nothing() {
        for name in [".", ".."] {
            let mut backend = MockHttpBackend::new();
            backend.expect_execute().never();
            let client = ArgusClient::with_backend(backend);

            let result = client.users().get_user_by_username(name).await;

            assert!(matches!(result, Err(SdkError::InvalidRequest { .. })));
        }
    }

    #[tokio::test]
    async fn test_username_with_slash_is_encoded() {
        let backend = FakeBackend::new().with_json(
            "/users/username/ops%2Fbot",
            200,
            &fake_user_json(8, "ops/bot"),
        );
        let client = ArgusClient::with_backend(backend);

        let user = client.users().get_user_by_username("ops/bot").await.unwrap();

        assert_eq!(user.user_name, "ops/bot");
        assert_eq!(client.backend.requests()[0].path, "/users/username/ops%2Fbot");
    }

    #[tokio::test]
    async fn test_token_expired() {
        let backend = FakeBackend::new().with_response(
            "/users/id/1",
            ArgusResponse::new(401, r#"{"message":"Access token has expired"}"#)
                .with_message("Unauthorized"),
        );
        let client = ArgusClient::with_backend(backend);

        let result = client.users().get_user_by_id(1).await;

        assert!(matches!(result, Err(SdkError::TokenExpired { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let backend = FakeBackend::new().with_unreachable("/users/username/jdoe");
        let client = ArgusClient::with_backend(backend);

        let result = client.users().get_user_by_username("jdoe").await;

        assert!(matches!(result, Err(SdkError::Unreachable { .. })));
    }

    #[tokio::test]
    async fn test_unknown_user_is_api_error() {
        let client = ArgusClient::with_backend(FakeBackend::new());

        let result = client.users().get_user_by_id(404).await;

        assert!(matches!(
            result,
            Err(SdkError::ApiRequestFailed { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_body_that_is_not_a_user() {
        let backend = FakeBackend::new().with_json("/users/id/3", 200, &json!({"id": 3}));
        let client = ArgusClient::with_backend(backend);

        let result = client.users().get_user_by_id(3).await;

        assert!(matches!(result, Err(SdkError::JsonParse(_))));
    }
}
