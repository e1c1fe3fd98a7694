use std::fmt;

/// Scalar types of the target database that a literal parameter can be cast
/// to.
///
/// Every literal placed in a query carries one of these, rendered as a cast
/// in front of its placeholder (`<str>$content`). There is no inference over
/// raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Str,
    Bool,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    BigInt,
    Decimal,
    Json,
    Uuid,
    Bytes,
    DateTime,
    Duration,
    LocalDateTime,
    LocalDate,
    LocalTime,
    RelativeDuration,
    Sequence,
}

impl PrimitiveType {
    pub const STRING: PrimitiveType = PrimitiveType::Str;
    pub const BOOLEAN: PrimitiveType = PrimitiveType::Bool;

    /// The type name as it appears inside a cast.
    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Str => "str",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int16 => "int16",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Int64 => "int64",
            PrimitiveType::Float32 => "float32",
            PrimitiveType::Float64 => "float64",
            PrimitiveType::BigInt => "bigint",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::Json => "json",
            PrimitiveType::Uuid => "uuid",
            PrimitiveType::Bytes => "bytes",
            PrimitiveType::DateTime => "datetime",
            PrimitiveType::Duration => "duration",
            PrimitiveType::LocalDateTime => "cal::local_datetime",
            PrimitiveType::LocalDate => "cal::local_date",
            PrimitiveType::LocalTime => "cal::local_time",
            PrimitiveType::RelativeDuration => "cal::relative_duration",
            PrimitiveType::Sequence => "sequence",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveType::Int16
                | PrimitiveType::Int32
                | PrimitiveType::Int64
                | PrimitiveType::Float32
                | PrimitiveType::Float64
                | PrimitiveType::BigInt
                | PrimitiveType::Decimal
                | PrimitiveType::Sequence
        )
    }

    /// Whether a literal declared as `self` may be stored in a field declared
    /// as `field`. Numeric literals are accepted by any numeric field since the
    /// database casts between them.
    pub fn is_assignable_to(self, field: PrimitiveType) -> bool {
        self == field || (self.is_numeric() && field.is_numeric())
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
