//! Field-level validation primitives shared by the create-schemas.
//!
//! Submissions arrive as untyped JSON maps; the helpers here extract and
//! normalize individual fields while collecting every failure into a
//! [`FieldErrors`] map instead of bailing on the first one.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Ordered field -> messages map returned to the caller on validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errs = Self::default();
        errs.add(field, message);
        errs
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages collected for one field; empty slice when the field is clean.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Read-only view over the raw JSON submission body.
///
/// A non-object body behaves like an empty map, so every required field
/// reports "is required." rather than the request failing wholesale.
pub struct RawInput<'a> {
    map: Option<&'a serde_json::Map<String, Value>>,
}

impl<'a> RawInput<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { map: value.as_object() }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|m| m.get(key)).filter(|v| !v.is_null())
    }

    /// Raw string content of a field; numbers are accepted and stringified.
    fn string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Required string field: absent or blank-after-trim is an error,
    /// otherwise the trimmed value is returned.
    pub fn required_trimmed(
        &self,
        key: &str,
        label: &str,
        errs: &mut FieldErrors,
    ) -> Option<String> {
        match self.string(key) {
            Some(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => {
                errs.add(key, format!("{label} is required."));
                None
            }
        }
    }

    /// Optional string field: absent or blank collapses to `None`.
    pub fn optional_trimmed(&self, key: &str) -> Option<String> {
        self.string(key).map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    }

    /// Required email field: presence plus syntactic shape.
    pub fn required_email(&self, key: &str, label: &str, errs: &mut FieldErrors) -> Option<String> {
        let value = self.required_trimmed(key, label, errs)?;
        if !is_valid_email(&value) {
            errs.add(key, "Enter a valid email address.");
            return None;
        }
        Some(value)
    }

    /// Optional integer field: accepts JSON numbers and numeric strings.
    /// Returns `Err(())` when the field is present but not an integer;
    /// the caller owns the message.
    pub fn integer(&self, key: &str) -> Result<Option<i64>, ()> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Number(n)) => n.as_i64().map(Some).ok_or(()),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<i64>().map(Some).map_err(|_| ())
            }
            Some(_) => Err(()),
        }
    }
}

/// Syntactic local-part@domain check. No DNS, no RFC deep-dive; the same
/// level of strictness the original form backend applied.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    // Domain needs at least one dot with label characters on both sides
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Trim and lower-case an address so uniqueness checks compare like with like.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}
