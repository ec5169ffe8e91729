use crate::prelude_internal::*;

/// The concrete result of one builder invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    /// Identifier of an externally persisted record.
    Ref(RecordId),
    /// Ordered, homogeneously typed items.
    List(Vec<Value>),
    /// Every declared field of the schema, in schema order, minus fields the
    /// caller explicitly opted out of.
    Struct(Map<TagName, Value>),
    /// An ordered, type-tagged sequence realized against a stream definition.
    Stream(StreamValue),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Ref,
    List,
    Struct,
    Stream,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Ref => write!(f, "ref"),
            Self::List => write!(f, "list"),
            Self::Struct => write!(f, "struct"),
            Self::Stream => write!(f, "stream"),
        }
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Ref(_) => ValueKind::Ref,
            Value::List(_) => ValueKind::List,
            Value::Struct(_) => ValueKind::Struct,
            Value::Stream(_) => ValueKind::Stream,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        if let Self::Scalar(s) = self { Some(s) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Self::Scalar(Scalar::Int(n)) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_ref_id(&self) -> Option<RecordId> {
        if let Self::Ref(id) = self { Some(*id) } else { None }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_struct(&self) -> Option<&Map<TagName, Value>> {
        if let Self::Struct(fields) = self {
            Some(fields)
        } else {
            None
        }
    }

    pub fn as_stream(&self) -> Option<&StreamValue> {
        if let Self::Stream(stream) = self {
            Some(stream)
        } else {
            None
        }
    }

    /// Build a struct value from (field, value) pairs, mainly for assertions.
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<TagName>,
        V: Into<Value>,
    {
        Value::Struct(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ============================================================================
// From implementations for Value
// ============================================================================

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(b.into())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s.into())
    }
}

impl From<RecordId> for Value {
    fn from(id: RecordId) -> Self {
        Value::Ref(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", Value::from(5).kind()), "scalar");
        assert_eq!(format!("{}", Value::List(vec![]).kind()), "list");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("A").as_str(), Some("A"));
        assert_eq!(Value::from(5).as_i64(), Some(5));
        assert_eq!(Value::from("A").as_i64(), None);
        let record = Value::record([("label", "x")]);
        let fields = record.as_struct().unwrap();
        assert_eq!(fields.get(&TagName::from("label")), Some(&Value::from("x")));
    }
}
