// Command data type for assigning a role to a user within a business.
//
// Purpose
// - Carry the raw request fields to the decider, which validates them.
// - Missing or null fields deserialize as empty strings so they surface as invalid arguments.
// - Non string values are kept in their JSON text form, so `"role": 7` is judged as role "7".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetUserRole {
    #[serde(deserialize_with = "lenient_string")]
    pub uid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub business_id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => value,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Claims of the authenticated caller, as established by the gateway in front of the service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallerClaims {
    pub role: Option<String>,
}
