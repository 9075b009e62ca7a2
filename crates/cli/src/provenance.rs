use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to generated inputs so a run can be replayed.
pub struct Payload {
    pub generator: &'static str,
    pub params: Value,
    pub seed: u64,
}

impl Payload {
    pub fn new(generator: &'static str, params: Value, seed: u64) -> Self {
        Self {
            generator,
            params,
            seed,
        }
    }
}

/// Render the provenance document for `outputs`: git commit, callsite,
/// generator name, params, and seed.
///
/// Callers stage the result together with the artifacts it describes, so the
/// sidecar is never left behind from an earlier run.
#[track_caller]
pub fn render_sidecar(outputs: &[PathBuf], payload: Payload) -> Result<String> {
    let callsite = Location::caller();
    let outputs: Vec<String> = outputs
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect();
    let doc = json!({
        "code_rev": current_git_rev(),
        "version": facegen::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "generator": payload.generator,
        "seed": payload.seed,
        "params": payload.params,
        "outputs": outputs
    });
    serde_json::to_string_pretty(&doc).context("serializing provenance")
}

/// `<dir>/<stem>.provenance.json` for a single-file artifact.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_path_rewrites_extension() {
        let base = Path::new("/tmp/output/halfplanes.in");
        assert_eq!(
            sidecar_path(base),
            Path::new("/tmp/output/halfplanes.provenance.json")
        );
    }

    #[test]
    fn sidecar_records_seed_and_outputs() {
        let artifact = PathBuf::from("data/point.in");
        let payload = Payload::new("faces", json!({"face_count": 2}), 99);
        let body = render_sidecar(&[artifact.clone()], payload).unwrap();
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["seed"], 99);
        assert_eq!(parsed["generator"], "faces");
        assert_eq!(parsed["params"]["face_count"], 2);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["callsite"]["file"], file!());
    }
}
