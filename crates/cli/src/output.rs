use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write a group of artifacts into `dir` so that either all of them are replaced or none.
///
/// Contents are written to `<name>.tmp` siblings first and renamed into place
/// only after every write succeeded. On failure the temporaries are removed.
/// The rename phase itself is not transactional across files.
pub fn write_staged(dir: &Path, files: &[(&str, &str)]) -> Result<Vec<PathBuf>> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir).with_context(|| format!("creating output dir {}", dir.display()))?;
    }
    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(files.len());
    for (name, body) in files {
        let target = dir.join(name);
        let tmp = dir.join(format!("{name}.tmp"));
        if let Err(err) = fs::write(&tmp, body) {
            discard(&staged);
            let _ = fs::remove_file(&tmp);
            return Err(err).with_context(|| format!("writing {}", tmp.display()));
        }
        staged.push((tmp, target));
    }
    let mut written = Vec::with_capacity(staged.len());
    for (i, (tmp, target)) in staged.iter().enumerate() {
        if let Err(err) = fs::rename(tmp, target) {
            discard(&staged[i..]);
            return Err(err).with_context(|| format!("moving {} into place", target.display()));
        }
        written.push(target.clone());
    }
    Ok(written)
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (tmp, _) in staged {
        if let Err(err) = fs::remove_file(tmp) {
            tracing::warn!(path = %tmp.display(), %err, "could not remove staged file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_every_file_and_no_leftovers() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested");
        let written = write_staged(&out, &[("a.in", "1\n"), ("b.in", "")]).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(out.join("a.in")).unwrap(), "1\n");
        assert_eq!(fs::read_to_string(out.join("b.in")).unwrap(), "");
        let names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")));
    }

    #[test]
    fn failed_write_leaves_previous_files_untouched() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.in"), "old").unwrap();
        // A directory where the second staging file should go makes its write fail.
        fs::create_dir(dir.path().join("b.in.tmp")).unwrap();
        let res = write_staged(dir.path(), &[("a.in", "new"), ("b.in", "new")]);
        assert!(res.is_err());
        assert_eq!(fs::read_to_string(dir.path().join("a.in")).unwrap(), "old");
        assert!(!dir.path().join("a.in.tmp").exists());
        assert!(!dir.path().join("b.in").exists());
    }
}
