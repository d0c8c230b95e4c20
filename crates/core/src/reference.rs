//! Reference pairs (`[id, "label"]`) and tolerant decoding of backend values.

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::RecordRefId;
use crate::value_object::ValueObject;

/// A many-to-one reference as the point of sale loads it: the target id plus
/// its display label.
///
/// Serialized as a two-element array `[id, "label"]`. Decoding also accepts the
/// object form `{ "id": 1, "name": "..." }` (or `display_name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DisplayRefRepr", into = "(RecordRefId, String)")]
pub struct DisplayRef {
    id: RecordRefId,
    label: String,
}

impl DisplayRef {
    pub fn new(id: impl Into<RecordRefId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn id(&self) -> RecordRefId {
        self.id
    }

    /// The second element of the pair.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl ValueObject for DisplayRef {}

impl From<DisplayRef> for (RecordRefId, String) {
    fn from(value: DisplayRef) -> Self {
        (value.id, value.label)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DisplayRefRepr {
    Pair(RecordRefId, String),
    Object {
        id: RecordRefId,
        #[serde(alias = "display_name")]
        name: String,
    },
}

impl From<DisplayRefRepr> for DisplayRef {
    fn from(value: DisplayRefRepr) -> Self {
        match value {
            DisplayRefRepr::Pair(id, label) => Self { id, label },
            DisplayRefRepr::Object { id, name } => Self { id, label: name },
        }
    }
}

/// Decoders for backend fields where "empty" arrives as `false` or `null`.
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub mod falsy {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Falsy<T> {
        Bool(bool),
        Value(T),
    }

    fn collapse<T>(value: Option<Falsy<T>>) -> Option<T> {
        match value {
            None | Some(Falsy::Bool(_)) => None,
            Some(Falsy::Value(v)) => Some(v),
        }
    }

    /// Optional text; `false`, `null` and missing all decode to `None`.
    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(collapse(Option::<Falsy<String>>::deserialize(deserializer)?))
    }

    /// Optional reference pair; `false`, `null` and missing all decode to `None`.
    pub fn display_ref<'de, D>(deserializer: D) -> Result<Option<DisplayRef>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(collapse(Option::<Falsy<DisplayRef>>::deserialize(
            deserializer,
        )?))
    }

    /// Any optional value (ids, nested records); `false`, `null` and missing all
    /// decode to `None`.
    pub fn value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(collapse(Option::<Falsy<T>>::deserialize(deserializer)?))
    }

    /// Optional list; `false`, `null` and missing all decode to an empty `Vec`.
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(collapse(Option::<Falsy<Vec<T>>>::deserialize(deserializer)?).unwrap_or_default())
    }
}
