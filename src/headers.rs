//! Ordered HTTP header sets.
//!
//! A [`HeaderSet`] is an insertion-ordered name/value mapping. The effective
//! headers of a fetch are the fixed default set overridden key-by-key by the
//! caller's custom set; header names compare case-insensitively, as they do
//! on the wire. The set serializes to a JSON object in insertion order, which
//! is the form the rule store persists and the harvester replays.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An insertion-ordered set of HTTP headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Create an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// The fixed default request headers sent with every fetch.
    ///
    /// A plain browser profile; sites that need more (cookies, referers)
    /// get them through the caller's custom headers.
    #[must_use]
    pub fn default_request_headers() -> Self {
        let mut headers = Self::new();
        headers.insert(
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        );
        headers.insert(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        );
        headers.insert("Accept-Language", "zh-CN,zh;q=0.8,en;q=0.6");
        headers.insert("Accept-Encoding", "gzip, deflate, br");
        headers.insert("Connection", "keep-alive");
        headers.insert("Upgrade-Insecure-Requests", "1");
        headers
    }

    /// Insert a header, overriding any existing value for the same name.
    ///
    /// Names compare case-insensitively; an override keeps the position and
    /// spelling of the original key.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Build the effective set: `self` overridden key-by-key by `custom`.
    #[must_use]
    pub fn merged(&self, custom: &HeaderSet) -> HeaderSet {
        let mut merged = self.clone();
        for (name, value) in custom.iter() {
            merged.insert(name, value);
        }
        merged
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of headers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to a JSON object string in insertion order.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderSet {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl Serialize for HeaderSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for HeaderSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct HeaderSetVisitor;

        impl<'de> Visitor<'de> for HeaderSetVisitor {
            type Value = HeaderSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of header names to values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut headers = HeaderSet::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    headers.insert(name, value);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeaderSetVisitor)
    }
}
