//! Reshaping of the `/api/tags` listing into a name-only model list.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::ollama::types::ModelTag;

/// Result of adapting a tag listing
///
/// Serializes untagged, so the HTTP layer can hand either variant straight
/// to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelList {
    /// `{"models": [...]}` reduced to names, upstream order kept
    Tags(Vec<ModelTag>),
    /// Listing without a `models` array, passed through unchanged
    Raw(Value),
}

impl ModelList {
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

/// Reduce `{"models": [{"name": ..., ...}, ...]}` to `[{"name": ...}, ...]`
///
/// A listing with no `models` array is returned as-is. Entries lacking a
/// string `name` are dropped.
pub fn adapt_tags(tags: Value) -> ModelList {
    let entries = match tags.get("models").and_then(Value::as_array) {
        Some(entries) => entries,
        None => {
            warn!("Tag listing has no 'models' array, passing it through");
            return ModelList::Raw(tags);
        }
    };

    let models = entries
        .iter()
        .filter_map(|entry| match entry.get("name").and_then(Value::as_str) {
            Some(name) => Some(ModelTag {
                name: name.to_string(),
            }),
            None => {
                warn!(entry = %entry, "Skipping tag entry without a name");
                None
            }
        })
        .collect();

    ModelList::Tags(models)
}
