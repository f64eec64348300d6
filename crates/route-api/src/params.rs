//! Parameter bags
//!
//! A [`ParamBag`] is the untyped input of the renderer: an insertion-ordered
//! map from parameter name to a string or boolean value. Typed parameter
//! structs are converted into a bag through `serde`.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ParamError;

/// A single parameter value
///
/// Strings fill `:name` and `:name?` tokens; booleans toggle optional static
/// segments such as `edit?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Flag(bool),
    Text(String),
}

impl ParamValue {
    /// The string value, if it is a non-empty string
    ///
    /// Empty strings never fill a token.
    pub fn filled_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Whether the value is exactly `true`
    pub fn is_true(&self) -> bool {
        matches!(self, ParamValue::Flag(true))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

/// An insertion-ordered map of parameter name → value
///
/// Keys are unique: inserting an existing key replaces its value in place.
///
/// # Examples
///
/// ```
/// use route_api::{ParamBag, ParamValue};
///
/// let params = ParamBag::new()
///     .with("id", "123")
///     .with("edit", true);
///
/// assert_eq!(params.get("id"), Some(&ParamValue::Text("123".to_string())));
/// assert_eq!(params.get("edit"), Some(&ParamValue::Flag(true)));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamBag {
    entries: Vec<(String, ParamValue)>,
}

impl ParamBag {
    /// Creates an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter (functional builder)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, returning the value it replaced
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes a parameter, returning its value
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(existing, _)| existing == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the value registered under `key`
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present, whatever its value
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters in the bag
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bag holds no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Builds a bag from any value that serializes to a flat map
    ///
    /// Struct field names become parameter names. Strings and booleans map
    /// to [`ParamValue::Text`] and [`ParamValue::Flag`], numbers to their
    /// decimal text, and `null` (a `None` field or `()`) leaves the parameter
    /// out. Nested arrays and objects are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_api::{ParamBag, ParamValue};
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct EmployeeParams {
    ///     id: u32,
    ///     tab: Option<String>,
    /// }
    ///
    /// let params = ParamBag::from_serialize(&EmployeeParams { id: 7, tab: None }).unwrap();
    /// assert_eq!(params.get("id"), Some(&ParamValue::Text("7".to_string())));
    /// assert!(!params.contains_key("tab"));
    /// ```
    pub fn from_serialize<T>(params: &T) -> Result<Self, ParamError>
    where
        T: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(params).map_err(|err| ParamError::Serialize(err.to_string()))?;

        match value {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => map
                .into_iter()
                .try_fold(Self::new(), |mut bag, (key, value)| {
                    match value {
                        Value::Null => {}
                        Value::Bool(flag) => {
                            bag.insert(key, flag);
                        }
                        Value::String(text) => {
                            bag.insert(key, text);
                        }
                        Value::Number(number) => {
                            bag.insert(key, number.to_string());
                        }
                        other => {
                            return Err(ParamError::UnsupportedValue {
                                key,
                                kind: value_kind(&other),
                            })
                        }
                    }
                    Ok(bag)
                }),
            other => Err(ParamError::NotAMap {
                kind: value_kind(&other),
            }),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Serialize for ParamBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for ParamBag
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

impl<K, V> Extend<(K, V)> for ParamBag
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ParamBag
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
