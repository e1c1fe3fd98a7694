use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use uuid::Uuid;

/// A literal value bound to a query parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    F32(f32),

    F64(f64),

    /// String value
    String(String),

    Bytes(Vec<u8>),

    Uuid(Uuid),

    /// Arbitrary JSON document
    Json(serde_json::Value),

    /// Timezone-aware timestamp
    DateTime(DateTime<Utc>),

    LocalDateTime(NaiveDateTime),

    LocalDate(NaiveDate),

    LocalTime(NaiveTime),

    Duration(TimeDelta),

    /// A list of values, used for membership tests
    List(Vec<Value>),
}

impl Value {
    pub const fn null() -> Value {
        Value::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn list_from_vec(items: Vec<Value>) -> Value {
        Value::List(items)
    }

    pub fn bytes(src: impl Into<Vec<u8>>) -> Value {
        Value::Bytes(src.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::Bytes(v) => serializer.serialize_bytes(v),
            Value::Uuid(v) => v.serialize(serializer),
            Value::Json(v) => v.serialize(serializer),
            Value::DateTime(v) => v.serialize(serializer),
            Value::LocalDateTime(v) => v.serialize(serializer),
            Value::LocalDate(v) => v.serialize(serializer),
            Value::LocalTime(v) => v.serialize(serializer),
            // ISO 8601, e.g. `PT90S`
            Value::Duration(v) => serializer.collect_str(v),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the value the way it would read inside a query, without any
    /// escaping. Only meant for diagnostics.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("{}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Bytes(v) => write!(f, "{v:?}"),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Json(v) => write!(f, "{v}"),
            Value::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Value::LocalDateTime(v) => write!(f, "{v}"),
            Value::LocalDate(v) => write!(f, "{v}"),
            Value::LocalTime(v) => write!(f, "{v}"),
            Value::Duration(v) => write!(f, "{v}"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Value {
        Value::Bool(src)
    }
}

impl From<i16> for Value {
    fn from(src: i16) -> Value {
        Value::I16(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Value {
        Value::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Value {
        Value::I64(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Value {
        Value::F32(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Value {
        Value::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Value {
        Value::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Value {
        Value::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Value {
        Value::Uuid(src)
    }
}

impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Value {
        Value::Json(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Value {
        Value::DateTime(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Value {
        Value::LocalDateTime(src)
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Value {
        Value::LocalDate(src)
    }
}

impl From<NaiveTime> for Value {
    fn from(src: NaiveTime) -> Value {
        Value::LocalTime(src)
    }
}

impl From<TimeDelta> for Value {
    fn from(src: TimeDelta) -> Value {
        Value::Duration(src)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(src: Vec<T>) -> Value {
        Value::List(src.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Value
where
    T: Into<Value>,
{
    fn from(src: [T; N]) -> Value {
        Value::List(src.into_iter().map(Into::into).collect())
    }
}
