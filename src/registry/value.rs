//! Bindable column values
//!
//! Entities hand their writable columns to the registry as a list of
//! [`SqlValue`]s, and filters carry one as their operand. Nullable columns use
//! the `None` payload of the matching variant so Postgres still receives a
//! typed parameter.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Uuid(Option<Uuid>),
    Text(Option<String>),
    Bool(Option<bool>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Decimal(Option<Decimal>),
    Timestamp(Option<DateTime<Utc>>),
    Date(Option<NaiveDate>),
    Uuids(Vec<Uuid>),
    Json(Option<serde_json::Value>),
}

impl SqlValue {
    /// Push this value as a bind parameter
    pub(crate) fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            SqlValue::Uuid(v) => builder.push_bind(v),
            SqlValue::Text(v) => builder.push_bind(v),
            SqlValue::Bool(v) => builder.push_bind(v),
            SqlValue::Int(v) => builder.push_bind(v),
            SqlValue::BigInt(v) => builder.push_bind(v),
            SqlValue::Decimal(v) => builder.push_bind(v),
            SqlValue::Timestamp(v) => builder.push_bind(v),
            SqlValue::Date(v) => builder.push_bind(v),
            SqlValue::Uuids(v) => builder.push_bind(v),
            SqlValue::Json(v) => builder.push_bind(v),
        };
    }

    /// True for the `None` payload of a scalar variant
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            SqlValue::Uuid(None)
                | SqlValue::Text(None)
                | SqlValue::Bool(None)
                | SqlValue::Int(None)
                | SqlValue::BigInt(None)
                | SqlValue::Decimal(None)
                | SqlValue::Timestamp(None)
                | SqlValue::Date(None)
                | SqlValue::Json(None)
        )
    }
}

macro_rules! sql_value_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for SqlValue {
            fn from(value: $ty) -> Self {
                SqlValue::$variant(Some(value.into()))
            }
        }

        impl From<Option<$ty>> for SqlValue {
            fn from(value: Option<$ty>) -> Self {
                SqlValue::$variant(value.map(Into::into))
            }
        }
    };
}

sql_value_from!(Uuid, Uuid);
sql_value_from!(String, Text);
sql_value_from!(bool, Bool);
sql_value_from!(i32, Int);
sql_value_from!(i64, BigInt);
sql_value_from!(Decimal, Decimal);
sql_value_from!(DateTime<Utc>, Timestamp);
sql_value_from!(NaiveDate, Date);
sql_value_from!(serde_json::Value, Json);

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(Some(value.clone()))
    }
}

impl From<Vec<Uuid>> for SqlValue {
    fn from(value: Vec<Uuid>) -> Self {
        SqlValue::Uuids(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_conversions() {
        let id = Uuid::new_v4();
        assert_eq!(SqlValue::from(id), SqlValue::Uuid(Some(id)));
        assert_eq!(SqlValue::from("PHP"), SqlValue::Text(Some("PHP".into())));
        assert_eq!(SqlValue::from(dec!(0.25)), SqlValue::Decimal(Some(dec!(0.25))));
        assert_eq!(SqlValue::from(None::<Uuid>), SqlValue::Uuid(None));
    }

    #[test]
    fn test_is_null() {
        assert!(SqlValue::from(None::<String>).is_null());
        assert!(!SqlValue::from(false).is_null());
        assert!(!SqlValue::Uuids(Vec::new()).is_null());
    }
}
