//! Notification manager

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::registry::{Audit, Entity, Filter, Registry, RegistryError, Relation, SqlValue};

use super::AuditResponse;

pub const NOTIFICATION_TYPE_INFO: &str = "info";

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Notification {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub notification_type: String,
    pub is_viewed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub notification_type: String,
    pub is_viewed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRequest {
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_notification_type")]
    pub notification_type: String,
}

fn default_notification_type() -> String {
    NOTIFICATION_TYPE_INFO.to_string()
}

impl NotificationRequest {
    pub fn into_record(self, created_by: Option<Uuid>) -> Notification {
        Notification {
            id: Uuid::nil(),
            audit: Audit::by(created_by),
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            notification_type: self.notification_type,
            is_viewed: false,
        }
    }
}

impl Entity for Notification {
    type Response = NotificationResponse;

    const TABLE: &'static str = "notifications";
    const TOPIC: &'static str = "notification";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "title",
        "description",
        "notification_type",
        "is_viewed",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn scope(&self) -> TopicScope {
        TopicScope::User {
            user_id: self.user_id,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.user_id.into(),
            self.title.clone().into(),
            self.description.clone().into(),
            self.notification_type.clone().into(),
            self.is_viewed.into(),
        ]
    }

    fn to_response(&self) -> NotificationResponse {
        NotificationResponse {
            id: self.id,
            audit: (&self.audit).into(),
            user_id: self.user_id,
            title: self.title.clone(),
            description: self.description.clone(),
            notification_type: self.notification_type.clone(),
            is_viewed: self.is_viewed,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![Relation::new("user", "users", |n| Some(n.user_id))]
    }
}

impl Registry<Notification> {
    pub async fn by_user(&self, user_id: Uuid) -> Result<Vec<Notification>, RegistryError> {
        self.find(&[Filter::eq("user_id", user_id)]).await
    }

    pub async fn unviewed(&self, user_id: Uuid) -> Result<Vec<Notification>, RegistryError> {
        self.find(&[
            Filter::eq("user_id", user_id),
            Filter::eq("is_viewed", false),
        ])
        .await
    }

    pub async fn unviewed_count(&self, user_id: Uuid) -> Result<i64, RegistryError> {
        self.count(&[
            Filter::eq("user_id", user_id),
            Filter::eq("is_viewed", false),
        ])
        .await
    }

    /// Mark every unviewed notification of a user as viewed.
    ///
    /// Rows are updated one by one inside a transaction so each change is
    /// published on the user's topics.
    pub async fn mark_all_viewed(&self, user_id: Uuid) -> Result<Vec<Notification>, RegistryError> {
        let mut tx = self.pool().begin().await?;
        let pending = self
            .find_with_tx(
                &mut *tx,
                &[
                    Filter::eq("user_id", user_id),
                    Filter::eq("is_viewed", false),
                ],
                &[],
            )
            .await?;

        let mut viewed = Vec::with_capacity(pending.len());
        for mut notification in pending {
            notification.is_viewed = true;
            notification.audit.touch(Some(user_id));
            viewed.push(self.update_with_tx(&mut *tx, notification).await?);
        }
        tx.commit().await?;

        tracing::info!(user_id = %user_id, count = viewed.len(), "Notifications marked viewed");
        Ok(viewed)
    }

    /// Deliver a notification to a user
    pub async fn notify(
        &self,
        request: NotificationRequest,
        created_by: Option<Uuid>,
    ) -> Result<Notification, RegistryError> {
        let notification = self.create(request.into_record(created_by)).await?;
        tracing::debug!(
            user_id = %notification.user_id,
            notification_type = %notification.notification_type,
            "Notification sent"
        );
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::Action;

    #[test]
    fn test_notification_publishes_user_topics() {
        let user = Uuid::new_v4();
        let mut notification = NotificationRequest {
            user_id: user,
            title: "Loan approved".into(),
            description: "Your loan application was approved".into(),
            notification_type: "success".into(),
        }
        .into_record(None);
        notification.id = Uuid::new_v4();

        let topics = notification.topics(Action::Create);
        assert_eq!(
            topics,
            vec![
                "notification.create".to_string(),
                format!("notification.create.{}", notification.id),
                format!("notification.create.user.{}", user),
            ]
        );
    }

    #[test]
    fn test_request_defaults_to_info() {
        let request: NotificationRequest = serde_json::from_value(serde_json::json!({
            "user_id": Uuid::new_v4(),
            "title": "Welcome"
        }))
        .unwrap();
        let record = request.into_record(None);

        assert_eq!(record.notification_type, NOTIFICATION_TYPE_INFO);
        assert!(!record.is_viewed);
        assert_eq!(record.description, "");
    }
}
