//! User manager

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::registry::{
    format_date, Audit, Entity, Filter, Registry, RegistryError, Relation, SqlValue,
};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub email: String,
    pub username: String,
    pub contact_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub media_id: Option<Uuid>,
    pub is_email_verified: bool,
    pub is_contact_verified: bool,
}

impl User {
    /// First, middle and last name joined by spaces, skipping blanks
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub email: String,
    pub username: String,
    pub contact_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub birthdate: Option<String>,
    pub media_id: Option<Uuid>,
    pub is_email_verified: bool,
    pub is_contact_verified: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub email: String,
    pub username: String,
    pub contact_number: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub media_id: Option<Uuid>,
}

impl UserRequest {
    pub fn into_record(self, created_by: Option<Uuid>) -> User {
        User {
            id: Uuid::nil(),
            audit: Audit::by(created_by),
            email: self.email.trim().to_lowercase(),
            username: self.username.trim().to_string(),
            contact_number: self.contact_number,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            birthdate: self.birthdate,
            media_id: self.media_id,
            is_email_verified: false,
            is_contact_verified: false,
        }
    }
}

impl Entity for User {
    type Response = UserResponse;

    const TABLE: &'static str = "users";
    const TOPIC: &'static str = "user";
    const COLUMNS: &'static [&'static str] = &[
        "email",
        "username",
        "contact_number",
        "first_name",
        "middle_name",
        "last_name",
        "birthdate",
        "media_id",
        "is_email_verified",
        "is_contact_verified",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn scope(&self) -> TopicScope {
        TopicScope::Global
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.email.clone().into(),
            self.username.clone().into(),
            self.contact_number.clone().into(),
            self.first_name.clone().into(),
            self.middle_name.clone().into(),
            self.last_name.clone().into(),
            self.birthdate.into(),
            self.media_id.into(),
            self.is_email_verified.into(),
            self.is_contact_verified.into(),
        ]
    }

    fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            audit: (&self.audit).into(),
            email: self.email.clone(),
            username: self.username.clone(),
            contact_number: self.contact_number.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            full_name: self.full_name(),
            birthdate: self.birthdate.as_ref().map(format_date),
            media_id: self.media_id,
            is_email_verified: self.is_email_verified,
            is_contact_verified: self.is_contact_verified,
        }
    }

    fn relations() -> Vec<Relation<Self>> {
        vec![Relation::new("media", "media", |u| u.media_id)]
    }
}

impl Registry<User> {
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, RegistryError> {
        self.find_one(&[Filter::eq("email", email.trim().to_lowercase())])
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, RegistryError> {
        self.find_one(&[Filter::eq("username", username.trim())])
            .await
    }

    pub async fn find_by_contact_number(
        &self,
        contact_number: &str,
    ) -> Result<Option<User>, RegistryError> {
        self.find_one(&[Filter::eq("contact_number", contact_number.trim())])
            .await
    }

    /// Look a user up by email, then username, then contact number
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, RegistryError> {
        if identifier.contains('@') {
            if let Some(user) = self.find_by_email(identifier).await? {
                return Ok(Some(user));
            }
        }

        if let Some(user) = self.find_by_username(identifier).await? {
            return Ok(Some(user));
        }

        if identifier
            .trim()
            .trim_start_matches('+')
            .chars()
            .all(|c| c.is_ascii_digit())
        {
            return self.find_by_contact_number(identifier).await;
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::Action;

    fn sample() -> User {
        UserRequest {
            email: "  Maria@Example.COM ".into(),
            username: "maria".into(),
            contact_number: Some("+639171234567".into()),
            first_name: Some("Maria".into()),
            middle_name: Some(" ".into()),
            last_name: Some("Santos".into()),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 31),
            media_id: None,
        }
        .into_record(None)
    }

    #[test]
    fn test_request_normalizes_email() {
        assert_eq!(sample().email, "maria@example.com");
    }

    #[test]
    fn test_response_mapping() {
        let response = sample().to_response();
        assert_eq!(response.full_name, "Maria Santos");
        assert_eq!(response.birthdate.as_deref(), Some("1990-01-31"));
    }

    #[test]
    fn test_user_topics_are_global() {
        let user = sample();
        assert_eq!(user.scope(), TopicScope::Global);
        assert_eq!(
            user.topics(Action::Delete),
            vec!["user.delete".to_string(), format!("user.delete.{}", user.id)]
        );
    }
}
