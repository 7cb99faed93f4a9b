//! Typed filters and sorting
//!
//! Filters never interpolate values: column names are checked against the
//! entity before they reach SQL and every operand is a bind parameter.

use sqlx::{Postgres, QueryBuilder};

use super::{Entity, RegistryError, SqlValue};

/// Operand of a filter
pub type FilterValue = SqlValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    /// Column is one of a list of IDs
    In,
    IsNull,
    IsNotNull,
    /// Case-insensitive pattern match
    Like,
}

impl FilterOp {
    fn operator(&self) -> Option<&'static str> {
        match self {
            FilterOp::Eq => Some(" = "),
            FilterOp::Ne => Some(" <> "),
            FilterOp::Gt => Some(" > "),
            FilterOp::Gte => Some(" >= "),
            FilterOp::Lt => Some(" < "),
            FilterOp::Lte => Some(" <= "),
            FilterOp::Like => Some(" ILIKE "),
            FilterOp::In | FilterOp::IsNull | FilterOp::IsNotNull => None,
        }
    }
}

/// A single `column <op> value` condition
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl Filter {
    pub fn new(column: impl Into<String>, op: FilterOp, value: impl Into<FilterValue>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(column, FilterOp::Eq, value)
    }

    pub fn ne(column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(column, FilterOp::Ne, value)
    }

    pub fn gt(column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(column, FilterOp::Gt, value)
    }

    pub fn gte(column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(column, FilterOp::Gte, value)
    }

    pub fn lt(column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(column, FilterOp::Lt, value)
    }

    pub fn lte(column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(column, FilterOp::Lte, value)
    }

    pub fn is_in(column: impl Into<String>, ids: Vec<uuid::Uuid>) -> Self {
        Self::new(column, FilterOp::In, SqlValue::Uuids(ids))
    }

    pub fn is_null(column: impl Into<String>) -> Self {
        Self::new(column, FilterOp::IsNull, SqlValue::Text(None))
    }

    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::new(column, FilterOp::IsNotNull, SqlValue::Text(None))
    }

    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(column, FilterOp::Like, SqlValue::Text(Some(pattern.into())))
    }

    fn validate<E: Entity>(&self) -> Result<(), RegistryError> {
        check_column::<E>(&self.column)?;

        match (self.op, &self.value) {
            (FilterOp::In, SqlValue::Uuids(_)) => Ok(()),
            (FilterOp::In, _) => Err(RegistryError::InvalidFilter {
                column: self.column.clone(),
                reason: "IN expects a list of IDs".to_string(),
            }),
            (FilterOp::IsNull | FilterOp::IsNotNull, _) => Ok(()),
            (FilterOp::Like, SqlValue::Text(Some(_))) => Ok(()),
            (FilterOp::Like, _) => Err(RegistryError::InvalidFilter {
                column: self.column.clone(),
                reason: "LIKE expects a text pattern".to_string(),
            }),
            (_, SqlValue::Uuids(_)) => Err(RegistryError::InvalidFilter {
                column: self.column.clone(),
                reason: "ID lists are only valid with IN".to_string(),
            }),
            (_, value) if value.is_null() => Err(RegistryError::InvalidFilter {
                column: self.column.clone(),
                reason: "comparison with NULL; use IsNull".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Ordering of a read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub descending: bool,
}

impl Sort {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: false,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: true,
        }
    }
}

impl Default for Sort {
    /// Most recently updated first
    fn default() -> Self {
        Self::desc("updated_at")
    }
}

fn check_column<E: Entity>(column: &str) -> Result<(), RegistryError> {
    if E::has_column(column) {
        Ok(())
    } else {
        Err(RegistryError::UnknownColumn {
            entity: E::TOPIC,
            column: column.to_string(),
        })
    }
}

/// Push ` WHERE deleted_at IS NULL AND ...` for `filters`
pub(crate) fn push_where<E: Entity>(
    builder: &mut QueryBuilder<'_, Postgres>,
    filters: &[Filter],
) -> Result<(), RegistryError> {
    builder.push(" WHERE deleted_at IS NULL");

    for filter in filters {
        filter.validate::<E>()?;
        builder.push(" AND ");
        builder.push(filter.column.as_str());

        match filter.op {
            FilterOp::IsNull => {
                builder.push(" IS NULL");
            }
            FilterOp::IsNotNull => {
                builder.push(" IS NOT NULL");
            }
            FilterOp::In => {
                builder.push(" = ANY(");
                filter.value.clone().push_bind(builder);
                builder.push(")");
            }
            op => {
                if let Some(operator) = op.operator() {
                    builder.push(operator);
                }
                filter.value.clone().push_bind(builder);
            }
        }
    }

    Ok(())
}

/// Push ` ORDER BY ...`; empty `sorts` means most recently updated first
pub(crate) fn push_order<E: Entity>(
    builder: &mut QueryBuilder<'_, Postgres>,
    sorts: &[Sort],
) -> Result<(), RegistryError> {
    let default = [Sort::default()];
    let sorts = if sorts.is_empty() { &default[..] } else { sorts };

    builder.push(" ORDER BY ");
    for (idx, sort) in sorts.iter().enumerate() {
        check_column::<E>(&sort.column)?;
        if idx > 0 {
            builder.push(", ");
        }
        builder.push(sort.column.as_str());
        builder.push(if sort.descending { " DESC" } else { " ASC" });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::TopicScope;
    use crate::registry::Audit;
    use sqlx::FromRow;
    use uuid::Uuid;

    #[derive(Debug, Clone, FromRow)]
    struct Widget {
        id: Uuid,
        #[sqlx(flatten)]
        audit: Audit,
        branch_id: Uuid,
        name: String,
    }

    impl Entity for Widget {
        type Response = String;
        const TABLE: &'static str = "widgets";
        const TOPIC: &'static str = "widget";
        const COLUMNS: &'static [&'static str] = &["branch_id", "name"];

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
            vec![self.branch_id.into(), self.name.clone().into()]
        }
        fn to_response(&self) -> String {
            self.name.clone()
        }
    }

    fn render(filters: &[Filter], sorts: &[Sort]) -> Result<String, RegistryError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM widgets");
        push_where::<Widget>(&mut builder, filters)?;
        push_order::<Widget>(&mut builder, sorts)?;
        Ok(builder.sql().to_string())
    }

    #[test]
    fn test_default_render_excludes_deleted_and_sorts_by_update() {
        let sql = render(&[], &[]).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM widgets WHERE deleted_at IS NULL ORDER BY updated_at DESC"
        );
    }

    #[test]
    fn test_filters_use_bind_parameters() {
        let sql = render(
            &[
                Filter::eq("branch_id", Uuid::new_v4()),
                Filter::like("name", "%cash%"),
                Filter::is_null("deleted_by_id"),
                Filter::is_in("id", vec![Uuid::new_v4()]),
            ],
            &[Sort::asc("name")],
        )
        .unwrap();

        assert_eq!(
            sql,
            "SELECT * FROM widgets WHERE deleted_at IS NULL AND branch_id = $1 \
             AND name ILIKE $2 AND deleted_by_id IS NULL AND id = ANY($3) ORDER BY name ASC"
        );
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = render(&[Filter::eq("name; DROP TABLE widgets", "x")], &[]).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownColumn { entity: "widget", .. }));

        let err = render(&[], &[Sort::desc("password")]).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_operand_mismatch_is_rejected() {
        let err = render(&[Filter::eq("name", None::<String>)], &[]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidFilter { .. }));

        let err = render(&[Filter::new("id", FilterOp::In, Uuid::new_v4())], &[]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidFilter { .. }));
    }
}
