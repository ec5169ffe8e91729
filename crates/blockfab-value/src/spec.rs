use crate::prelude_internal::*;

/// A scalar literal a caller may write inline in a specification.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::Str(s) = self { Some(s) } else { None }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

/// The input a caller provides to build one subtree. Builders only ever read
/// a specification; it is never mutated during a build pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    /// The explicit "no value" sentinel. For a declared struct field this
    /// means "omit the field from the output", which is distinct from not
    /// supplying the field at all (that means "use the default").
    Null,
    Scalar(Scalar),
    /// A pre-built reference to an externally persisted record.
    Ref(RecordId),
    /// Ordered items, shape-dispatched to the child builder one by one.
    Seq(Vec<Spec>),
    /// Keyword arguments for a child builder, or a legacy flat-key namespace.
    Map(Map<TagName, Spec>),
    /// The structured stream form: ordered (type tag, entry spec) pairs.
    Stream(Vec<(TagName, Spec)>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Null,
    Scalar,
    Ref,
    Seq,
    Map,
    Stream,
}

impl std::fmt::Display for SpecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar => write!(f, "scalar"),
            Self::Ref => write!(f, "ref"),
            Self::Seq => write!(f, "seq"),
            Self::Map => write!(f, "map"),
            Self::Stream => write!(f, "stream"),
        }
    }
}

impl Spec {
    pub fn kind(&self) -> SpecKind {
        match self {
            Spec::Null => SpecKind::Null,
            Spec::Scalar(_) => SpecKind::Scalar,
            Spec::Ref(_) => SpecKind::Ref,
            Spec::Seq(_) => SpecKind::Seq,
            Spec::Map(_) => SpecKind::Map,
            Spec::Stream(_) => SpecKind::Stream,
        }
    }

    /// Build a keyword-form specification from (field, value) pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<TagName>,
        V: Into<Spec>,
    {
        Spec::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an ordered-items specification.
    pub fn seq<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Spec>,
    {
        Spec::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Build a structured stream specification from (tag, entry) pairs.
    pub fn stream<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<TagName>,
        V: Into<Spec>,
    {
        Spec::Stream(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ============================================================================
// From implementations for Scalar and Spec
// ============================================================================

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Int(n.into())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Int(n)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Str(s)
    }
}

impl From<Scalar> for Spec {
    fn from(value: Scalar) -> Self {
        Spec::Scalar(value)
    }
}

impl From<bool> for Spec {
    fn from(b: bool) -> Self {
        Spec::Scalar(b.into())
    }
}

impl From<i32> for Spec {
    fn from(n: i32) -> Self {
        Spec::Scalar(n.into())
    }
}

impl From<i64> for Spec {
    fn from(n: i64) -> Self {
        Spec::Scalar(n.into())
    }
}

impl From<f64> for Spec {
    fn from(n: f64) -> Self {
        Spec::Scalar(n.into())
    }
}

impl From<&str> for Spec {
    fn from(s: &str) -> Self {
        Spec::Scalar(s.into())
    }
}

impl From<String> for Spec {
    fn from(s: String) -> Self {
        Spec::Scalar(s.into())
    }
}

impl From<RecordId> for Spec {
    fn from(id: RecordId) -> Self {
        Spec::Ref(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Spec::from("A"), Spec::Scalar(Scalar::Str("A".to_string())));
        assert_eq!(Spec::from(5), Spec::Scalar(Scalar::Int(5)));
        assert_eq!(Spec::from(true), Spec::Scalar(Scalar::Bool(true)));
    }

    #[test]
    fn test_map_helper_preserves_order() {
        let Spec::Map(map) = Spec::map([("b", 1), ("a", 2)]) else {
            panic!("expected map");
        };
        let keys: Vec<_> = map.keys().map(|k| k.as_str().to_string()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_kind() {
        assert_eq!(Spec::Null.kind(), SpecKind::Null);
        assert_eq!(Spec::seq(["A"]).kind(), SpecKind::Seq);
        assert_eq!(Spec::stream([("char", "A")]).kind(), SpecKind::Stream);
    }
}
