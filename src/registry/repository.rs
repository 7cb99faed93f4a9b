//! Registry Repository
//!
//! Generic CRUD over one entity table. Reads only ever see live rows;
//! deletes are soft. Every successful write publishes the record's topics.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde_json::Value;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::broker::{Action, BrokerError, SharedBroker};

use super::{filter, BranchScoped, Entity, Filter, RegistryError, Sort};

/// CRUD registry for entity `E`
pub struct Registry<E: Entity> {
    pool: PgPool,
    broker: SharedBroker,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for Registry<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            broker: self.broker.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> std::fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry").field("table", &E::TABLE).finish()
    }
}

impl<E: Entity> Registry<E> {
    pub fn new(pool: PgPool, broker: SharedBroker) -> Self {
        Self {
            pool,
            broker,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert a record; a nil ID is replaced with a fresh one
    pub async fn create(&self, record: E) -> Result<E, RegistryError> {
        let mut conn = self.pool.acquire().await?;
        self.create_with_tx(&mut conn, record).await
    }

    pub async fn create_with_tx(
        &self,
        conn: &mut PgConnection,
        record: E,
    ) -> Result<E, RegistryError> {
        let id = if record.id().is_nil() {
            Uuid::new_v4()
        } else {
            record.id()
        };
        let audit = record.audit();

        let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO ");
        builder.push(E::TABLE);
        builder.push(" (id, created_by_id, updated_by_id");
        for column in E::COLUMNS {
            builder.push(", ");
            builder.push(*column);
        }
        builder.push(") VALUES (");
        builder.push_bind(id);
        builder.push(", ");
        builder.push_bind(audit.created_by_id);
        builder.push(", ");
        builder.push_bind(audit.updated_by_id);
        for value in record.values() {
            builder.push(", ");
            value.push_bind(&mut builder);
        }
        builder.push(") RETURNING *");

        let created = builder.build_query_as::<E>().fetch_one(&mut *conn).await?;

        tracing::debug!(entity = E::TOPIC, id = %created.id(), "Record created");
        self.broadcast(Action::Create, &created);

        Ok(created)
    }

    /// Insert several records on one connection, in order
    pub async fn create_many_with_tx(
        &self,
        conn: &mut PgConnection,
        records: Vec<E>,
    ) -> Result<Vec<E>, RegistryError> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            created.push(self.create_with_tx(&mut *conn, record).await?);
        }
        Ok(created)
    }

    /// Overwrite the writable columns of a live record
    pub async fn update(&self, record: E) -> Result<E, RegistryError> {
        let mut conn = self.pool.acquire().await?;
        self.update_with_tx(&mut conn, record).await
    }

    pub async fn update_with_tx(
        &self,
        conn: &mut PgConnection,
        record: E,
    ) -> Result<E, RegistryError> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE ");
        builder.push(E::TABLE);
        builder.push(" SET updated_by_id = ");
        builder.push_bind(record.audit().updated_by_id);
        for (column, value) in E::COLUMNS.iter().zip(record.values()) {
            builder.push(", ");
            builder.push(*column);
            builder.push(" = ");
            value.push_bind(&mut builder);
        }
        builder.push(", updated_at = NOW() WHERE id = ");
        builder.push_bind(record.id());
        builder.push(" AND deleted_at IS NULL RETURNING *");

        let updated = builder
            .build_query_as::<E>()
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(RegistryError::NotFound {
                entity: E::TOPIC,
                id: record.id(),
            })?;

        tracing::debug!(entity = E::TOPIC, id = %updated.id(), "Record updated");
        self.broadcast(Action::Update, &updated);

        Ok(updated)
    }

    /// Soft-delete a live record, returning it as it was deleted
    pub async fn delete(&self, id: Uuid, deleted_by: Option<Uuid>) -> Result<E, RegistryError> {
        let mut conn = self.pool.acquire().await?;
        self.delete_with_tx(&mut conn, id, deleted_by).await
    }

    pub async fn delete_with_tx(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        deleted_by: Option<Uuid>,
    ) -> Result<E, RegistryError> {
        let sql = format!(
            r#"
            UPDATE {}
            SET deleted_at = NOW(), deleted_by_id = $2, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING *
            "#,
            E::TABLE
        );

        let deleted = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .bind(deleted_by)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(RegistryError::NotFound {
                entity: E::TOPIC,
                id,
            })?;

        tracing::debug!(entity = E::TOPIC, id = %id, "Record soft-deleted");
        self.broadcast(Action::Delete, &deleted);

        Ok(deleted)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub async fn get_by_id(&self, id: Uuid) -> Result<E, RegistryError> {
        let mut conn = self.pool.acquire().await?;
        self.get_by_id_with_tx(&mut conn, id).await
    }

    pub async fn get_by_id_with_tx(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<E, RegistryError> {
        let sql = format!(
            "SELECT * FROM {} WHERE id = $1 AND deleted_at IS NULL",
            E::TABLE
        );

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(RegistryError::NotFound {
                entity: E::TOPIC,
                id,
            })
    }

    /// Live records matching every filter, most recently updated first
    pub async fn find(&self, filters: &[Filter]) -> Result<Vec<E>, RegistryError> {
        self.find_sorted(filters, &[]).await
    }

    pub async fn find_sorted(
        &self,
        filters: &[Filter],
        sorts: &[Sort],
    ) -> Result<Vec<E>, RegistryError> {
        let mut conn = self.pool.acquire().await?;
        self.find_with_tx(&mut conn, filters, sorts).await
    }

    pub async fn find_with_tx(
        &self,
        conn: &mut PgConnection,
        filters: &[Filter],
        sorts: &[Sort],
    ) -> Result<Vec<E>, RegistryError> {
        let mut builder = select::<E>(filters, sorts)?;
        let records = builder.build_query_as::<E>().fetch_all(&mut *conn).await?;

        tracing::debug!(entity = E::TOPIC, count = records.len(), "Records found");
        Ok(records)
    }

    /// First live record matching the filters
    pub async fn find_one(&self, filters: &[Filter]) -> Result<Option<E>, RegistryError> {
        let mut conn = self.pool.acquire().await?;
        self.find_one_with_tx(&mut conn, filters, &[]).await
    }

    pub async fn find_one_with_tx(
        &self,
        conn: &mut PgConnection,
        filters: &[Filter],
        sorts: &[Sort],
    ) -> Result<Option<E>, RegistryError> {
        let mut builder = select::<E>(filters, sorts)?;
        builder.push(" LIMIT 1");
        Ok(builder
            .build_query_as::<E>()
            .fetch_optional(&mut *conn)
            .await?)
    }

    /// First matching record, row-locked until the transaction ends
    pub async fn find_one_with_lock(
        &self,
        conn: &mut PgConnection,
        filters: &[Filter],
        sorts: &[Sort],
    ) -> Result<Option<E>, RegistryError> {
        let mut builder = select::<E>(filters, sorts)?;
        builder.push(" LIMIT 1 FOR UPDATE");
        Ok(builder
            .build_query_as::<E>()
            .fetch_optional(&mut *conn)
            .await?)
    }

    /// Every live record
    pub async fn list(&self) -> Result<Vec<E>, RegistryError> {
        self.find(&[]).await
    }

    pub async fn count(&self, filters: &[Filter]) -> Result<i64, RegistryError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
        builder.push(E::TABLE);
        filter::push_where::<E>(&mut builder, filters)?;

        Ok(builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?)
    }

    /// Largest value of an integer column among matching rows, 0 when none
    pub async fn max_int(&self, column: &str, filters: &[Filter]) -> Result<i64, RegistryError> {
        if !E::has_column(column) {
            return Err(RegistryError::UnknownColumn {
                entity: E::TOPIC,
                column: column.to_string(),
            });
        }

        let mut builder = QueryBuilder::<Postgres>::new("SELECT COALESCE(MAX(");
        builder.push(column);
        builder.push("), 0)::BIGINT FROM ");
        builder.push(E::TABLE);
        filter::push_where::<E>(&mut builder, filters)?;

        Ok(builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?)
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    pub fn to_response(&self, record: &E) -> E::Response {
        record.to_response()
    }

    pub fn to_responses(&self, records: &[E]) -> Vec<E::Response> {
        records.iter().map(Entity::to_response).collect()
    }

    /// Responses with every relation resolved to a JSON object (or null)
    pub async fn preload(&self, records: &[E]) -> Result<Vec<Value>, RegistryError> {
        let mut responses = records
            .iter()
            .map(|record| serde_json::to_value(record.to_response()))
            .collect::<Result<Vec<_>, _>>()?;

        for relation in E::relations() {
            let mut keys: Vec<Uuid> = records.iter().filter_map(relation.key).collect();
            keys.sort_unstable();
            keys.dedup();

            let related: HashMap<Uuid, Value> = if keys.is_empty() {
                HashMap::new()
            } else {
                let sql = format!(
                    "SELECT t.id, to_jsonb(t) AS data FROM {} t WHERE t.id = ANY($1) AND t.deleted_at IS NULL",
                    relation.table
                );
                sqlx::query_as::<_, (Uuid, Value)>(&sql)
                    .bind(&keys)
                    .fetch_all(&self.pool)
                    .await?
                    .into_iter()
                    .collect()
            };

            for (record, response) in records.iter().zip(responses.iter_mut()) {
                let value = (relation.key)(record)
                    .and_then(|key| related.get(&key).cloned())
                    .unwrap_or(Value::Null);
                if let Value::Object(map) = response {
                    map.insert(relation.name.to_string(), value);
                }
            }
        }

        Ok(responses)
    }

    /// Publish the record's topics; failures are logged, never returned
    fn broadcast(&self, action: Action, record: &E) {
        let topics = record.topics(action);
        let result = serde_json::to_value(record.to_response())
            .map_err(BrokerError::from)
            .and_then(|payload| self.broker.dispatch(&topics, &payload));

        if let Err(e) = result {
            tracing::error!(
                entity = E::TOPIC,
                action = %action,
                id = %record.id(),
                error = %e,
                "Failed to dispatch change notification"
            );
        }
    }
}

impl<E: BranchScoped> Registry<E> {
    /// Filters selecting one branch
    pub fn branch_filters(organization_id: Uuid, branch_id: Uuid) -> Vec<Filter> {
        vec![
            Filter::eq("organization_id", organization_id),
            Filter::eq("branch_id", branch_id),
        ]
    }

    /// Live records of one branch
    pub async fn current_branch(
        &self,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<Vec<E>, RegistryError> {
        self.find(&Self::branch_filters(organization_id, branch_id))
            .await
    }

    /// A record by ID, visible only from its own branch
    pub async fn get_in_branch(
        &self,
        id: Uuid,
        organization_id: Uuid,
        branch_id: Uuid,
    ) -> Result<E, RegistryError> {
        let mut filters = Self::branch_filters(organization_id, branch_id);
        filters.push(Filter::eq("id", id));
        self.find_one(&filters)
            .await?
            .ok_or(RegistryError::NotFound {
                entity: E::TOPIC,
                id,
            })
    }
}

fn select<E: Entity>(
    filters: &[Filter],
    sorts: &[Sort],
) -> Result<QueryBuilder<'static, Postgres>, RegistryError> {
    let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM ");
    builder.push(E::TABLE);
    filter::push_where::<E>(&mut builder, filters)?;
    filter::push_order::<E>(&mut builder, sorts)?;
    Ok(builder)
}
