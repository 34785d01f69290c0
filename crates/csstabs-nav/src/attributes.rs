//! Attribute sets for generated markup.
//!
//! Tab documents attach attribute sets to links, list items and list
//! containers. Sets are kept key-sorted so serialized markup is stable
//! between runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Key-sorted mapping of attribute names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the compact `key=value key2="quoted value"` option syntax.
    ///
    /// Tokens without `=` are ignored.
    #[must_use]
    pub fn parse_compact(input: &str) -> Self {
        let mut attributes = Self::new();
        let mut rest = input.trim_start();

        while !rest.is_empty() {
            let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let Some(eq) = rest[..token_end].find('=') else {
                rest = rest[token_end..].trim_start();
                continue;
            };

            let key = &rest[..eq];
            let after = &rest[eq + 1..];
            let (value, remaining) = match after.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let body = &after[1..];
                    match body.find(quote) {
                        Some(close) => (&body[..close], &body[close + 1..]),
                        None => (body, ""),
                    }
                }
                _ => {
                    let end = after.find(char::is_whitespace).unwrap_or(after.len());
                    (&after[..end], &after[end..])
                }
            };

            if !key.is_empty() {
                attributes.insert(key, value);
            }
            rest = remaining.trim_start();
        }

        attributes
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set an attribute, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer these attributes over `base`.
    ///
    /// Keys present in both keep the value from `self`. Neither input is
    /// modified.
    #[must_use]
    pub fn over(&self, base: &Attributes) -> Attributes {
        let mut merged = base.0.clone();
        merged.extend(self.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(merged)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Scalar attribute value as written in YAML.
///
/// Numbers go through their parsed value, so the source spelling is not
/// kept: `1.10` becomes `"1.1"` and `2.50` becomes `"2.5"`. Quote a value to
/// keep it verbatim.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ScalarValue {
    fn into_string(self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttributes {
    Map(BTreeMap<String, Option<ScalarValue>>),
    Compact(String),
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawAttributes>::deserialize(deserializer)? {
            None => Self::new(),
            Some(RawAttributes::Compact(text)) => Self::parse_compact(&text),
            Some(RawAttributes::Map(map)) => map
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v.into_string())))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_over_prefers_own_values() {
        let entry = attrs(&[("class", "tab-users"), ("title", "Users")]);
        let style = attrs(&[("class", "current"), ("id", "active-tab")]);

        let merged = entry.over(&style);

        assert_eq!(merged.get("class"), Some("tab-users"));
        assert_eq!(merged.get("id"), Some("active-tab"));
        assert_eq!(merged.get("title"), Some("Users"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_over_leaves_inputs_untouched() {
        let entry = attrs(&[("class", "a")]);
        let style = attrs(&[("id", "b")]);

        let _ = entry.over(&style);

        assert_eq!(entry, attrs(&[("class", "a")]));
        assert_eq!(style, attrs(&[("id", "b")]));
    }

    #[test]
    fn test_iter_is_key_sorted() {
        let set = attrs(&[("title", "t"), ("class", "c"), ("id", "i")]);
        let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["class", "id", "title"]);
    }

    #[test]
    fn test_parse_compact() {
        let set = Attributes::parse_compact(r#"class=current id="main tab" title='Go'"#);
        assert_eq!(set.get("class"), Some("current"));
        assert_eq!(set.get("id"), Some("main tab"));
        assert_eq!(set.get("title"), Some("Go"));
    }

    #[test]
    fn test_parse_compact_skips_bare_tokens() {
        let set = Attributes::parse_compact("disabled class=x =y");
        assert_eq!(set, attrs(&[("class", "x")]));
    }

    #[test]
    fn test_deserialize_mapping_with_scalars() {
        let set: Attributes =
            serde_yaml::from_str("class: current\ntabindex: 1\nhidden: false\nrel: ~").unwrap();
        assert_eq!(set.get("class"), Some("current"));
        assert_eq!(set.get("tabindex"), Some("1"));
        assert_eq!(set.get("hidden"), Some("false"));
        assert_eq!(set.get("rel"), None);
    }

    #[test]
    fn test_deserialize_numbers_are_normalized_unless_quoted() {
        let set: Attributes =
            serde_yaml::from_str("data-version: 1.10\ndata-rate: 2.50\ndata-tag: '1.10'").unwrap();
        assert_eq!(set.get("data-version"), Some("1.1"));
        assert_eq!(set.get("data-rate"), Some("2.5"));
        assert_eq!(set.get("data-tag"), Some("1.10"));
    }

    #[test]
    fn test_deserialize_null_is_empty() {
        let set: Attributes = serde_yaml::from_str("~").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_deserialize_compact_string() {
        let set: Attributes = serde_yaml::from_str("\"class=selected\"").unwrap();
        assert_eq!(set.get("class"), Some("selected"));
    }
}
