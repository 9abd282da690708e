use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::records::HexagramCollection;

/// Pretty JSON, two-space indent, non-ASCII kept verbatim.
pub fn to_json(collection: &HexagramCollection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Write the collection, creating the output directory if needed.
pub fn write_collection(path: &Path, collection: &HexagramCollection) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    let json = to_json(collection)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
