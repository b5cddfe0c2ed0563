//! Provenance sidecars: a small JSON record written next to each artifact
//! naming the code revision and the parameters that produced it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use serde_json::{json, Value};

/// Write `<artifact-stem>.provenance.json` next to `artifact` and return its
/// path.
pub fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = json!({
        "code_rev": code_rev(),
        "crate_version": dsatur::VERSION,
        "params": params,
        "outputs": [artifact.to_string_lossy()],
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Code revision: a baked-in or ambient `GIT_COMMIT`, else `git rev-parse`.
pub fn code_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_path_replaces_the_extension() {
        let derived = sidecar_path(Path::new("/tmp/out/result.json"));
        assert_eq!(derived, Path::new("/tmp/out/result.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("coloring.json");
        fs::write(&artifact, "{}").unwrap();

        let path = write_sidecar(&artifact, json!({"mode": "bnb"})).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(doc["params"]["mode"], "bnb");
        assert_eq!(doc["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(doc["crate_version"], dsatur::VERSION);
    }
}
