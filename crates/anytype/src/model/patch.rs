//! Tri-state field for partial updates.

use serde::{Serialize, Serializer};

/// A nullable field in an update payload.
///
/// `Unset` fields are left out of the request body entirely, `Clear` is sent
/// as `null`, and `Set` sends the value. Use it with
/// `#[serde(skip_serializing_if = "Patch::is_unset")]`.
///
/// ```
/// use anytype::{Patch, TagUpdate};
///
/// let update = TagUpdate {
///     description: Patch::Clear,
///     ..Default::default()
/// };
/// assert_eq!(
///     serde_json::to_value(&update).unwrap(),
///     serde_json::json!({"description": null})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the field unchanged.
    Unset,
    /// Clear the field.
    Clear,
    /// Set the field to a value.
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// `Some` sets the field, `None` clears it.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Clear,
        }
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}


impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Unset | Patch::Clear => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Update {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Patch::is_unset")]
        description: Patch<String>,
    }

    #[test]
    fn unset_fields_are_omitted() {
        let body = serde_json::to_value(Update::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn clear_is_sent_as_null() {
        let update = Update {
            description: Patch::Clear,
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({"description": null}));
    }

    #[test]
    fn set_is_sent_as_value() {
        let update = Update {
            name: Some("n".into()),
            description: "d".to_string().into(),
        };
        assert_eq!(
            serde_json::to_value(update).unwrap(),
            json!({"name": "n", "description": "d"})
        );
    }

    #[test]
    fn option_converts_to_set_or_clear() {
        assert_eq!(Patch::from_option(Some(1)), Patch::Set(1));
        assert_eq!(Patch::<i32>::from_option(None), Patch::Clear);
    }
}
