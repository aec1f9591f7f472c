//! Display style attached to a [`Component`](crate::Component).

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

/// Tri-state display toggles plus an optional font override.
///
/// Every field distinguishes "unset" from an explicit `true`/`false`. Only
/// fields that were explicitly set appear in the serialized mapping; unset
/// fields are entirely absent, not `false` or `null`. `Style::default()`
/// therefore serializes to an empty mapping.
#[derive(Clone, PartialEq, Default, Debug, Serialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,

    /// Font resource identifier, e.g. `minecraft:alt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Cow<'static, str>>,
}

impl Style {
    /// Constructs a style with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field has been set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a mapping containing exactly the fields that were set, in
    /// declaration order.
    pub fn to_mapping(&self) -> Map<String, Value> {
        match crate::to_value(self) {
            Value::Object(map) => map,
            _ => unreachable!("a struct serializes to an object"),
        }
    }
}
