use crate::models::Example;
use anyhow::Context;
use std::path::Path;
use tracing::{info, warn};

/// Read the reference examples once at startup
///
/// A missing file leaves the list empty; a malformed one is an error.
pub fn load_examples(path: &Path) -> anyhow::Result<Vec<Example>> {
    if !path.exists() {
        warn!(path = %path.display(), "Examples file not found, serving an empty list");
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read examples file {}", path.display()))?;
    let examples: Vec<Example> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse examples file {}", path.display()))?;

    info!(path = %path.display(), count = examples.len(), "Loaded examples");
    Ok(examples)
}
