use anyhow::Result;
use serde_json::Value;

/// Games listed in a monthly archive response (`{"games": [...]}`)
pub fn extract_games(data: &Value) -> Result<Vec<Value>> {
    match extract_items(data) {
        Some(items) => Ok(items.clone()),
        None => anyhow::bail!("Archive response has no 'games' array"),
    }
}

fn extract_items(data: &Value) -> Option<&Vec<Value>> {
    data.get("games")?.as_array()
}
