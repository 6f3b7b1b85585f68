//! Session lifecycle and profile endpoints.

use crate::{
    entities::{AuthResponse, Credentials, PasswordChange, ProfileUpdate, Registration, User},
    errors::Result,
    http::{ApiClient, CsrfToken, Transport},
};
use reqwest::Method;
use tracing::{info, warn};

/// Fetches the CSRF token ahead of the first form submission.
pub async fn bootstrap_csrf<T: Transport>(client: &ApiClient<T>) -> Option<CsrfToken> {
    client.bootstrap_csrf().await
}

/// Signs in and re-arms the session-expiry redirect.
///
/// # Errors
/// `Error::Validation` for rejected credentials, or any transport error.
pub async fn login<T: Transport>(client: &ApiClient<T>, credentials: &Credentials) -> Result<User> {
    let response: AuthResponse = client
        .send_json(Method::POST, "auth/login/", credentials)
        .await?;
    // the backend rotates the token on login
    client.csrf().clear();
    client.reset_session_redirect();
    info!("Signed in as {}", response.user.username);
    Ok(response.user)
}

/// Creates an account; the backend signs the new user in.
///
/// # Errors
/// `Error::Validation` with the offending fields, or any transport error.
pub async fn register<T: Transport>(
    client: &ApiClient<T>,
    registration: &Registration,
) -> Result<User> {
    let response: AuthResponse = client
        .send_json(Method::POST, "auth/register/", registration)
        .await?;
    client.csrf().clear();
    client.reset_session_redirect();
    info!("Registered {}", response.user.username);
    Ok(response.user)
}

/// Ends the session. Failures are logged and otherwise ignored; the cached
/// CSRF token is dropped either way.
pub async fn logout<T: Transport>(client: &ApiClient<T>) {
    if let Err(e) = client.send_empty(Method::POST, "auth/logout/", None).await {
        warn!("Logout request failed: {e}");
    }
    client.csrf().clear();
}

/// The signed-in user's profile.
pub async fn profile<T: Transport>(client: &ApiClient<T>) -> Result<User> {
    client.get_json("auth/profile/").await
}

/// Updates the profile and returns the stored version.
pub async fn update_profile<T: Transport>(
    client: &ApiClient<T>,
    update: &ProfileUpdate,
) -> Result<User> {
    client
        .send_json(Method::PUT, "auth/profile/update/", update)
        .await
}

/// # Errors
/// `Error::Validation` when the old password is wrong or the new one is rejected.
pub async fn change_password<T: Transport>(
    client: &ApiClient<T>,
    change: &PasswordChange,
) -> Result<()> {
    let body = serde_json::to_value(change)?;
    client
        .send_empty(Method::POST, "auth/profile/change-password/", Some(body))
        .await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        errors::Error,
        test_utils::{MockTransport, csrf_ok, json_response, test_client},
    };
    use reqwest::StatusCode;

    const USER: &str = r#"{"user": {"id": 7, "username": "ana", "email": "ana@example.com"}, "message": "Login exitoso"}"#;

    fn credentials() -> Credentials {
        Credentials {
            username: "ana".to_string(),
            password: "secreta".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_returns_user_and_rearms_redirect() {
        let (client, _cookies, navigator) = test_client(MockTransport::new(|req| {
            let path = req.url.path();
            if path.ends_with("auth/csrf/") {
                csrf_ok("tok")
            } else if path.ends_with("auth/login/") {
                json_response(StatusCode::OK, USER)
            } else {
                json_response(StatusCode::UNAUTHORIZED, "")
            }
        }));

        assert!(profile(&client).await.is_err());
        assert_eq!(navigator.routes().len(), 1);

        let user = login(&client, &credentials()).await.unwrap();
        assert_eq!(user.username, "ana");

        assert!(profile(&client).await.is_err());
        assert_eq!(navigator.routes().len(), 2);
    }

    #[tokio::test]
    async fn test_login_rejected_is_validation_error() {
        let (client, _cookies, navigator) = test_client(MockTransport::new(|req| {
            if req.url.path().ends_with("auth/csrf/") {
                csrf_ok("tok")
            } else {
                json_response(
                    StatusCode::BAD_REQUEST,
                    r#"{"non_field_errors": ["Credenciales inválidas"]}"#,
                )
            }
        }));

        let err = login(&client, &credentials()).await.unwrap_err();
        match err {
            Error::Validation { fields } => {
                assert_eq!(fields["non_field_errors"], vec!["Credenciales inválidas"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_logout_swallows_errors_and_clears_token() {
        let (client, _cookies, _nav) = test_client(MockTransport::new(|req| {
            if req.url.path().ends_with("auth/csrf/") {
                csrf_ok("tok")
            } else {
                json_response(StatusCode::INTERNAL_SERVER_ERROR, "")
            }
        }));

        assert!(bootstrap_csrf(&client).await.is_some());
        assert!(client.csrf().current().is_some());

        logout(&client).await;

        assert!(client.csrf().current().is_none());
    }

    #[tokio::test]
    async fn test_change_password_posts_both_fields() {
        let (client, cookies, _nav) = test_client(MockTransport::new(|_| {
            json_response(StatusCode::OK, r#"{"message": "ok"}"#)
        }));
        cookies.set("csrftoken", "cookie-tok");

        change_password(
            &client,
            &PasswordChange {
                old_password: "vieja".to_string(),
                new_password: "nueva".to_string(),
            },
        )
        .await
        .unwrap();

        let transport = client.transport();
        let sent = &transport.api_requests()[0];
        assert_eq!(sent.path, "/api/auth/profile/change-password/");
        assert_eq!(sent.csrf_header.as_deref(), Some("cookie-tok"));
        assert_eq!(
            sent.body,
            Some(serde_json::json!({"old_password": "vieja", "new_password": "nueva"}))
        );
    }
}
