use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;

/// Write `value` as pretty JSON to `path`, replacing any previous file in one rename.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }

    let serialised = serde_json::to_string_pretty(value).context("failed serialising payload JSON")?;
    let tmp_path = tmp_path_for(path);
    fs::write(&tmp_path, serialised.as_bytes())
        .with_context(|| format!("failed writing temp file {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("failed replacing {}", path.display()))?;
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_tmp_path_for() {
        assert_eq!(tmp_path_for(Path::new("out/payload.json")), PathBuf::from("out/payload.json.tmp"));
    }

    #[test]
    fn test_write_json_atomic() {
        let dir = std::env::temp_dir().join(format!("multisend-cli-{}", std::process::id()));
        let path = dir.join("nested").join("payload.json");

        write_json_atomic(&path, &json!({ "calls": 2 })).unwrap();
        write_json_atomic(&path, &json!({ "calls": 3 })).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["calls"], 3);
        assert!(!tmp_path_for(&path).exists());

        fs::remove_dir_all(&dir).unwrap();
    }
}
