//! Canonical JSON rendering for [`Problem`].
//!
//! The wire shape is flat: the five base fields followed by extension members
//! in a single object, with `status` as a bare number and blank strings
//! omitted. A derived impl cannot interleave struct fields with a flattened
//! map in that order, so `Serialize` writes the map by hand.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::problem::Problem;

impl Problem {
    /// Render the canonical `application/problem+json` document.
    ///
    /// Equal problems always produce byte-identical output: field order is
    /// fixed and extension members keep their insertion order.
    ///
    /// # Errors
    ///
    /// Propagates the encoder error. Extension values are stored as plain
    /// JSON already, so this does not fail in practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for Problem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.type_url())?;
        if let Some(status) = self.status() {
            map.serialize_entry("status", &status.as_u16())?;
        }
        if let Some(title) = non_blank(self.title()) {
            map.serialize_entry("title", title)?;
        }
        if let Some(detail) = non_blank(self.detail()) {
            map.serialize_entry("detail", detail)?;
        }
        if let Some(instance) = non_blank(self.instance()) {
            map.serialize_entry("instance", instance)?;
        }
        for (key, value) in self.extensions() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Parsing problem documents back is out of scope for this crate; the impl
/// exists only to fail loudly instead of handing out half-initialized values.
impl<'de> Deserialize<'de> for Problem {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(de::Error::custom("Problem deserialization is not supported"))
    }
}

/// RFC 9457 has no notion of a present-but-empty field: `None`, `""` and
/// whitespace-only strings are all treated as absent.
fn non_blank(field: Option<&str>) -> Option<&str> {
    field.filter(|text| !text.trim().is_empty())
}
