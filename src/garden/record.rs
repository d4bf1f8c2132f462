//! Mapping from external document-store records to engine-owned records.
//!
//! The store delivers butterfly documents shaped like
//! `{id, gifter, from, message, color, ...}` with any field possibly absent.
//! Malformed documents are tolerated by substituting defaults; they never
//! fail the mapping.

use serde::{Deserialize, Serialize};

/// Name shown when a document carries neither `gifter` nor `from`
const ANONYMOUS_GIFTER: &str = "Someone";

/// Immutable agent record derived from one store document.
/// The engine never mutates these; they arrive as full replacement lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub display_name: String,
    pub message: String,
    pub color_tag: Option<String>,
}

impl AgentRecord {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        message: impl Into<String>,
        color_tag: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            message: message.into(),
            color_tag,
        }
    }

    /// Hover label: `"<gifter>: <message>"`
    pub fn label(&self) -> String {
        format!("{}: {}", self.display_name, self.message)
    }
}

/// Raw document shape as it comes off the store subscription
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub gifter: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl From<StoreDocument> for AgentRecord {
    fn from(doc: StoreDocument) -> Self {
        let display_name = doc
            .gifter
            .filter(|s| !s.is_empty())
            .or(doc.from.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| ANONYMOUS_GIFTER.to_string());

        Self {
            id: doc.id,
            display_name,
            message: doc.message.unwrap_or_default(),
            color_tag: doc.color.filter(|s| !s.is_empty()),
        }
    }
}

/// Parse a store query result (JSON array of documents) into records
pub fn records_from_json(json: &str) -> Result<Vec<AgentRecord>, serde_json::Error> {
    let docs: Vec<StoreDocument> = serde_json::from_str(json)?;
    Ok(docs.into_iter().map(AgentRecord::from).collect())
}
