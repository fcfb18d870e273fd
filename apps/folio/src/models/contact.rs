use serde::{Deserialize, Serialize};

/// Contact form payload, as posted by the page and relayed to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Backend reply to a contact submission. Only `message` is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub message: Option<String>,
}
