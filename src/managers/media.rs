//! Media manager
//!
//! Metadata of uploaded files. The bytes live in object storage; only the
//! storage key and public URL are kept here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::broker::TopicScope;
use crate::registry::{Audit, Entity, Filter, Registry, RegistryError, SqlValue};

use super::AuditResponse;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Media {
    pub id: Uuid,
    #[sqlx(flatten)]
    pub audit: Audit,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub storage_key: String,
    pub url: String,
    pub bucket_name: String,
    pub status: String,
    pub progress: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub audit: AuditResponse,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub storage_key: String,
    pub url: String,
    pub bucket_name: String,
    pub status: String,
    pub progress: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaRequest {
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub storage_key: String,
    pub url: String,
    pub bucket_name: String,
}

impl MediaRequest {
    /// Record for a freshly uploaded file
    pub fn into_record(self, user_id: Option<Uuid>) -> Media {
        Media {
            id: Uuid::nil(),
            audit: Audit::by(user_id),
            file_name: self.file_name,
            file_size: self.file_size,
            file_type: self.file_type,
            storage_key: self.storage_key,
            url: self.url,
            bucket_name: self.bucket_name,
            status: "completed".to_string(),
            progress: 100,
        }
    }
}

impl Entity for Media {
    type Response = MediaResponse;

    const TABLE: &'static str = "media";
    const TOPIC: &'static str = "media";
    const COLUMNS: &'static [&'static str] = &[
        "file_name",
        "file_size",
        "file_type",
        "storage_key",
        "url",
        "bucket_name",
        "status",
        "progress",
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
            self.file_name.clone().into(),
            self.file_size.into(),
            self.file_type.clone().into(),
            self.storage_key.clone().into(),
            self.url.clone().into(),
            self.bucket_name.clone().into(),
            self.status.clone().into(),
            self.progress.into(),
        ]
    }

    fn to_response(&self) -> MediaResponse {
        MediaResponse {
            id: self.id,
            audit: (&self.audit).into(),
            file_name: self.file_name.clone(),
            file_size: self.file_size,
            file_type: self.file_type.clone(),
            storage_key: self.storage_key.clone(),
            url: self.url.clone(),
            bucket_name: self.bucket_name.clone(),
            status: self.status.clone(),
            progress: self.progress,
        }
    }
}

impl Registry<Media> {
    pub async fn find_by_storage_key(&self, storage_key: &str) -> Result<Option<Media>, RegistryError> {
        self.find_one(&[Filter::eq("storage_key", storage_key)])
            .await
    }
}
