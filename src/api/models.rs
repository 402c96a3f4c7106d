//! Stub payloads and query parameters for the emulated API surface

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by the telemetry sink
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EventAck {
    pub ok: bool,
}

impl Default for EventAck {
    fn default() -> Self {
        Self { ok: true }
    }
}

/// Response of the accounts graph: never a logged-in user
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AccountsGraphResponse {
    pub data: AccountsGraphData,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountsGraphData {
    pub current_user_account: Option<serde_json::Value>,
}

/// Query string of the models graph endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQuery {
    #[serde(default)]
    pub operation_name: Option<String>,
}

impl GraphQuery {
    /// Operation name, ignoring an empty value
    pub fn operation(&self) -> Option<&str> {
        self.operation_name.as_deref().filter(|op| !op.is_empty())
    }
}
