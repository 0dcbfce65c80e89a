use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fields submitted when creating a request record.
///
/// Scalars are coerced to strings and `null` counts as absent, nothing else is
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestDraft {
    /// Explicit code, generated when absent or empty
    #[serde(deserialize_with = "coerce_string")]
    pub employee_id: Option<String>,
    #[serde(deserialize_with = "coerce_string")]
    pub requester: Option<String>,
    #[serde(deserialize_with = "coerce_string")]
    pub requester_area: Option<String>,
    #[serde(deserialize_with = "coerce_string")]
    pub operation_type: Option<String>,
    #[serde(deserialize_with = "coerce_string")]
    pub item_code: Option<String>,
    #[serde(deserialize_with = "coerce_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "coerce_string")]
    pub note: Option<String>,
    #[serde(deserialize_with = "coerce_string")]
    pub service_duration: Option<String>,
}

impl RequestDraft {
    /// The explicit employee code, if one was actually given.
    pub fn explicit_employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref().filter(|id| !id.is_empty())
    }
}

fn coerce_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other @ (Value::Bool(_) | Value::Number(_)) => Some(other.to_string()),
        other => {
            return Err(serde::de::Error::custom(format!(
                "expected a string, found: {other}"
            )))
        }
    })
}
