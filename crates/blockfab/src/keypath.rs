use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::prelude_internal::*;

/// Grammar of the legacy flat key namespace: `<position>`,
/// `<position>__<name>` or `<position>__<name>__<param>`, split left to
/// right with `__` into at most three segments. The name segment cannot
/// contain underscores; the param segment takes the whole remainder.
///
/// Compiled once; don't rebuild this in a hot path.
static KEY_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<position>\d+)(?:__(?P<name>[^_]+)(?:__(?P<param>.+))?)?$")
        .unwrap()
});

pub(crate) const PARAM_VALUE: TagName = TagName::new_static("value");

/// One decoded flat key. `name` is the type tag (streams) or item field
/// (lists); `param` is the sub-parameter addressed inside that entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatKey {
    pub position: usize,
    pub name: Option<TagName>,
    pub param: Option<TagName>,
}

/// Decode one key against the grammar. Keys that do not match, including
/// positions too large to represent, are not part of the namespace.
pub fn parse_key(key: &str) -> Option<FlatKey> {
    let captures = KEY_GRAMMAR.captures(key)?;
    let position = captures["position"].parse::<usize>().ok()?;
    Some(FlatKey {
        position,
        name: captures.name("name").map(|m| TagName::from(m.as_str())),
        param: captures.name("param").map(|m| TagName::from(m.as_str())),
    })
}

/// Decode a flat stream namespace into ordered (tag, keyword-form spec)
/// entries: group by position, then by tag within a position (one entry may
/// carry several sub-parameters), ascending position order. Keys outside the
/// namespace are skipped.
pub(crate) fn decode_stream(params: &Map<TagName, Spec>) -> Vec<(TagName, Spec)> {
    let mut grouped: BTreeMap<usize, Vec<(TagName, Map<TagName, Spec>)>> = BTreeMap::new();
    for (key, value) in params.iter() {
        let Some(flat) = parse_key(key.as_str()) else {
            tracing::debug!(key = key.as_str(), "skipping key outside the stream namespace");
            continue;
        };
        let Some(name) = flat.name else {
            tracing::debug!(key = key.as_str(), "skipping stream key with no type tag");
            continue;
        };
        let param = flat.param.unwrap_or(PARAM_VALUE);
        let bucket = grouped.entry(flat.position).or_default();
        match bucket.iter_mut().find(|(tag, _)| *tag == name) {
            Some((_, subs)) => {
                subs.insert(param, value.clone());
            }
            None => {
                let mut subs = Map::default();
                subs.insert(param, value.clone());
                bucket.push((name, subs));
            }
        }
    }
    grouped
        .into_values()
        .flatten()
        .map(|(tag, subs)| (tag, Spec::Map(subs)))
        .collect()
}

/// Decode a flat list namespace into ordered keyword-form item specs. A bare
/// `<position>` key addresses the item's `value` parameter; a
/// `<position>__<field>` key addresses one item field. Three-segment keys
/// have no meaning for lists and are skipped.
pub(crate) fn decode_list(params: &Map<TagName, Spec>) -> Vec<Map<TagName, Spec>> {
    let mut grouped: BTreeMap<usize, Map<TagName, Spec>> = BTreeMap::new();
    for (key, value) in params.iter() {
        let Some(flat) = parse_key(key.as_str()) else {
            tracing::debug!(key = key.as_str(), "skipping key outside the list namespace");
            continue;
        };
        if flat.param.is_some() {
            tracing::debug!(key = key.as_str(), "skipping list key with a sub-parameter");
            continue;
        }
        let field = flat.name.unwrap_or(PARAM_VALUE);
        grouped
            .entry(flat.position)
            .or_default()
            .insert(field, value.clone());
    }
    grouped.into_values().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_three_segments() {
        assert_eq!(
            parse_key("0__struct__title"),
            Some(FlatKey {
                position: 0,
                name: Some(TagName::from("struct")),
                param: Some(TagName::from("title")),
            })
        );
    }

    #[test]
    fn test_parse_two_segments() {
        assert_eq!(
            parse_key("12__char"),
            Some(FlatKey {
                position: 12,
                name: Some(TagName::from("char")),
                param: None,
            })
        );
    }

    #[test]
    fn test_parse_bare_position() {
        assert_eq!(
            parse_key("3"),
            Some(FlatKey {
                position: 3,
                name: None,
                param: None,
            })
        );
    }

    #[test]
    fn test_param_takes_the_remainder() {
        let flat = parse_key("0__item__nested__field").unwrap();
        assert_eq!(flat.param, Some(TagName::from("nested__field")));
    }

    #[test]
    fn test_rejects_keys_outside_the_namespace() {
        assert_eq!(parse_key("title"), None);
        assert_eq!(parse_key("x__char"), None);
        assert_eq!(parse_key("-1__char"), None);
        // underscores are not allowed in the name segment
        assert_eq!(parse_key("0__int_array"), None);
        // positions beyond usize are not part of the namespace either
        assert_eq!(parse_key("99999999999999999999999999__char"), None);
    }

    #[test]
    fn test_decode_stream_sorts_positions_numerically() {
        let params = Map::from_iter([
            (TagName::from("10__b"), Spec::from("B")),
            (TagName::from("2__a"), Spec::from("A")),
        ]);
        let entries = decode_stream(&params);
        let tags: Vec<_> = entries.iter().map(|(tag, _)| tag.as_str()).collect();
        assert_eq!(tags, vec!["a", "b"]);
    }

    #[test]
    fn test_decode_stream_groups_sub_parameters() {
        let params = Map::from_iter([
            (TagName::from("0__struct__title"), Spec::from("x")),
            (TagName::from("0__struct__value"), Spec::from(7)),
        ]);
        let entries = decode_stream(&params);
        assert_eq!(entries.len(), 1);
        let (tag, spec) = &entries[0];
        assert_eq!(tag.as_str(), "struct");
        assert_eq!(
            spec,
            &Spec::map([("title", Spec::from("x")), ("value", Spec::from(7))])
        );
    }

    #[test]
    fn test_decode_stream_defaults_param_to_value() {
        let params = Map::from_iter([(TagName::from("0__char"), Spec::from("A"))]);
        let entries = decode_stream(&params);
        assert_eq!(entries[0].1, Spec::map([("value", Spec::from("A"))]));
    }

    #[test]
    fn test_decode_list_bare_and_field_keys() {
        let params = Map::from_iter([
            (TagName::from("1__label"), Spec::from("second")),
            (TagName::from("0"), Spec::from("first")),
        ]);
        let items = decode_list(&params);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].get(&TagName::from("value")), Some(&Spec::from("first")));
        assert_eq!(items[1].get(&TagName::from("label")), Some(&Spec::from("second")));
    }
}
