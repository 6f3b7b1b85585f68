//! In-app notifications and the periodic poll behind the notification bell.

use crate::{
    entities::{Notification, UnreadCount},
    errors::Result,
    http::{ApiClient, Transport},
};
use reqwest::Method;
use tracing::trace;

const BASE: &str = "notifications/notifications/";

/// Number of unread notifications.
pub async fn unread_count<T: Transport>(client: &ApiClient<T>) -> Result<u32> {
    let count: UnreadCount = client.get_json(&format!("{BASE}unread_count/")).await?;
    Ok(count.unread_count)
}

/// The latest notifications, newest first.
pub async fn recent<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Notification>> {
    client.get_list(&format!("{BASE}recent/")).await
}

/// Marks one notification as read.
pub async fn mark_read<T: Transport>(client: &ApiClient<T>, notification_id: i64) -> Result<()> {
    let path = format!("{BASE}{notification_id}/mark_read/");
    client.send_empty(Method::POST, &path, None).await
}

/// Marks every notification as read.
pub async fn mark_all_read<T: Transport>(client: &ApiClient<T>) -> Result<()> {
    client
        .send_empty(Method::POST, &format!("{BASE}mark_all_read/"), None)
        .await
}

/// What one poll of the notification endpoints returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSnapshot {
    /// Unread notifications
    pub unread: u32,
    /// Latest notifications, newest first
    pub recent: Vec<Notification>,
}

/// Fetches the unread count and recent notifications together.
///
/// Background pollers discard the error; the next tick tries again.
///
/// # Errors
/// The first failure of either request.
pub async fn poll<T: Transport>(client: &ApiClient<T>) -> Result<NotificationSnapshot> {
    let (unread, recent) = tokio::try_join!(unread_count(client), recent(client))?;
    trace!("{unread} unread notification(s)");
    Ok(NotificationSnapshot { unread, recent })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        entities::Priority,
        errors::Error,
        test_utils::{MockTransport, json_response, test_client},
    };
    use reqwest::StatusCode;

    #[tokio::test]
    async fn test_poll_combines_both_requests() {
        let (client, _cookies, _nav) = test_client(MockTransport::new(|req| {
            if req.url.path().ends_with("unread_count/") {
                json_response(StatusCode::OK, r#"{"unread_count": 2}"#)
            } else {
                json_response(
                    StatusCode::OK,
                    r#"[{"id": 5, "tipo": "goal_completed", "titulo": "¡Meta cumplida!",
                        "mensaje": "Completaste Viaje", "prioridad": "high", "leida": false,
                        "tiempo_transcurrido": "hace 5 minutos"}]"#,
                )
            }
        }));

        let snapshot = poll(&client).await.unwrap();

        assert_eq!(snapshot.unread, 2);
        assert_eq!(snapshot.recent[0].priority, Priority::High);
        assert_eq!(snapshot.recent[0].elapsed.as_deref(), Some("hace 5 minutos"));
    }

    #[tokio::test]
    async fn test_poll_failure_is_returned() {
        let (client, _cookies, _nav) = test_client(MockTransport::new(|_| {
            Err(Error::Transport {
                message: "offline".to_string(),
            })
        }));

        assert!(matches!(poll(&client).await, Err(Error::Transport { .. })));
    }

    #[tokio::test]
    async fn test_mark_read_paths() {
        let (client, cookies, _nav) = test_client(MockTransport::new(|req| {
            if req.url.path().ends_with("mark_all_read/") {
                json_response(StatusCode::OK, r#"{"marked_read": 3}"#)
            } else {
                json_response(StatusCode::OK, r#"{"status": "marked_read"}"#)
            }
        }));
        cookies.set("csrftoken", "c");

        mark_read(&client, 5).await.unwrap();
        mark_all_read(&client).await.unwrap();

        let sent = client.transport().api_requests();
        assert_eq!(sent[0].path, "/api/notifications/notifications/5/mark_read/");
        assert_eq!(sent[1].path, "/api/notifications/notifications/mark_all_read/");
        assert!(sent.iter().all(|r| r.csrf_header.as_deref() == Some("c")));
    }
}
