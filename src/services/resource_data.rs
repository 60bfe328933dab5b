//! Attribute map handed to resource lifecycles

use serde_json::{Map, Value};
use std::str::FromStr;

use super::resource::ProviderError;

/// State of one managed resource: an optional id plus its attributes
///
/// Attributes are plain JSON values keyed by attribute name. `null` and an
/// absent key are treated the same, as "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    id: Option<String>,
    attributes: Map<String, Value>,
}

impl ResourceData {
    /// Empty data with no id
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object; anything else is rejected
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        match value {
            Value::Object(attributes) => Ok(Self {
                id: None,
                attributes,
            }),
            other => Err(ProviderError::InvalidAttribute {
                attribute: "<root>".to_string(),
                reason: format!("expected an object, got {other}"),
            }),
        }
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Id of the remote object; `None` means the resource does not exist
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the id; an empty string clears it
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.id = (!id.is_empty()).then_some(id);
    }

    /// Mark the resource as gone
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// Id, or a `MissingAttribute("id")` error
    pub(crate) fn require_id(&self) -> Result<&str, ProviderError> {
        self.id()
            .ok_or_else(|| ProviderError::MissingAttribute("id".to_string()))
    }

    /// All attributes
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Raw attribute value; `null` reads as unset
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    /// Set an attribute
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.attributes.insert(key.to_string(), value.into());
    }

    /// Store an optional value, writing `null` for `None`
    pub fn set_opt<T: Into<Value>>(&mut self, key: &str, value: Option<T>) {
        self.set(key, value.map_or(Value::Null, Into::into));
    }

    /// String attribute, `None` when unset
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, ProviderError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(invalid(key, "a string", other)),
        }
    }

    /// String attribute where the empty string also counts as unset
    pub fn get_non_empty_str(&self, key: &str) -> Result<Option<&str>, ProviderError> {
        Ok(self.get_str(key)?.filter(|s| !s.is_empty()))
    }

    /// String attribute that must be set
    pub fn require_str(&self, key: &str) -> Result<&str, ProviderError> {
        self.get_str(key)?
            .ok_or_else(|| ProviderError::MissingAttribute(key.to_string()))
    }

    /// Boolean attribute, `None` when unset
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ProviderError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(invalid(key, "a boolean", other)),
        }
    }

    /// Unsigned integer attribute, `None` when unset
    pub fn get_u64(&self, key: &str) -> Result<Option<u64>, ProviderError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .as_u64()
                .map(Some)
                .ok_or_else(|| invalid(key, "a non-negative integer", v)),
        }
    }

    /// List of strings; an empty list is returned as-is
    pub fn get_str_list(&self, key: &str) -> Result<Option<Vec<String>>, ProviderError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let Value::Array(items) = value else {
            return Err(invalid(key, "a list of strings", value));
        };
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(key, "a list of strings", value))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Parse a string attribute through `FromStr`
    pub fn parse<T>(&self, key: &str) -> Result<Option<T>, ProviderError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        self.get_str(key)?
            .map(|s| {
                s.parse::<T>().map_err(|e| ProviderError::InvalidAttribute {
                    attribute: key.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    /// String attribute that must be set and parse as `T`
    pub fn require_parsed<T>(&self, key: &str) -> Result<T, ProviderError>
    where
        T: FromStr,
        T::Err: ToString,
    {
        self.parse(key)?
            .ok_or_else(|| ProviderError::MissingAttribute(key.to_string()))
    }

    /// Whether `key` differs between `prior` and `self`
    pub fn has_change(&self, prior: &Self, key: &str) -> bool {
        self.get(key) != prior.get(key)
    }

    /// Whether any of `keys` differs between `prior` and `self`
    pub fn has_changes(&self, prior: &Self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.has_change(prior, key))
    }
}

fn invalid(key: &str, expected: &str, got: &Value) -> ProviderError {
    ProviderError::InvalidAttribute {
        attribute: key.to_string(),
        reason: format!("expected {expected}, got {got}"),
    }
}
