//! Configuration archive creation
//!
//! Packs a Terraform working directory into a gzip-compressed tarball with
//! paths relative to the directory, leaving out state files and the local
//! `.terraform` cache.

use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::archive;
use crate::error::{Result, TfeError};

/// A packed configuration archive on local disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveArtifact {
    /// Absolute path of the archive
    pub path: PathBuf,
    /// Archive size in bytes
    pub size: u64,
}

fn io_error(action: &str, path: &Path, err: impl std::fmt::Display) -> TfeError {
    TfeError::Io {
        message: format!("Failed to {} '{}': {}", action, path.display(), err),
    }
}

/// Whether an entry below the source root belongs in the archive
fn should_include(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    let path = entry.path();
    if path.extension().is_some_and(|ext| ext == archive::STATE_EXTENSION) {
        debug!("Excluding state file: {}", path.display());
        return false;
    }

    if entry.file_type().is_dir() && entry.file_name() == archive::CACHE_DIR {
        debug!("Excluding cache directory: {}", path.display());
        return false;
    }

    true
}

/// Pack `source_dir` into a `.tar.gz` at `dest_path`
///
/// The destination is created or overwritten. When it lives inside
/// `source_dir` it is skipped during the walk.
pub fn pack(source_dir: &Path, dest_path: &Path) -> Result<ArchiveArtifact> {
    let metadata = fs::metadata(source_dir).map_err(|e| {
        TfeError::Config(format!(
            "Cannot read source directory '{}': {}",
            source_dir.display(),
            e
        ))
    })?;
    if !metadata.is_dir() {
        return Err(TfeError::Config(format!(
            "Source path '{}' is not a directory",
            source_dir.display()
        )));
    }

    let file = File::create(dest_path).map_err(|e| io_error("create", dest_path, e))?;
    let dest_abs = fs::canonicalize(dest_path).map_err(|e| io_error("resolve", dest_path, e))?;

    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    builder.follow_symlinks(false);

    builder
        .append_dir(".", source_dir)
        .map_err(|e| io_error("archive", source_dir, e))?;

    let mut entries = 0usize;
    let walker = WalkDir::new(source_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(should_include);

    for entry in walker {
        let entry = entry.map_err(|e| TfeError::Io {
            message: format!("Failed to walk '{}': {}", source_dir.display(), e),
        })?;
        let path = entry.path();
        let name = path
            .strip_prefix(source_dir)
            .map_err(|e| io_error("archive", path, e))?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            builder
                .append_dir(name, path)
                .map_err(|e| io_error("archive", path, e))?;
        } else if file_type.is_file() || file_type.is_symlink() {
            if file_type.is_file() && fs::canonicalize(path).is_ok_and(|p| p == dest_abs) {
                debug!("Skipping the archive itself: {}", path.display());
                continue;
            }
            builder
                .append_path_with_name(path, name)
                .map_err(|e| io_error("archive", path, e))?;
        } else {
            debug!("Skipping special file: {}", path.display());
            continue;
        }
        entries += 1;
    }

    let encoder = builder
        .into_inner()
        .map_err(|e| io_error("finish", dest_path, e))?;
    let mut file = encoder
        .finish()
        .map_err(|e| io_error("compress", dest_path, e))?;
    file.flush().map_err(|e| io_error("flush", dest_path, e))?;

    let size = fs::metadata(&dest_abs)
        .map_err(|e| io_error("stat", &dest_abs, e))?
        .len();

    info!(
        "Packed {} entries from {} into {} ({} bytes)",
        entries,
        source_dir.display(),
        dest_abs.display(),
        size
    );

    Ok(ArchiveArtifact {
        path: dest_abs,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::collections::BTreeSet;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Entry names in the archive, without the leading `./`
    fn archived_names(archive_path: &Path) -> BTreeSet<String> {
        let file = File::open(archive_path).unwrap();
        let mut archive = tar::Archive::new(GzDecoder::new(file));
        archive
            .entries()
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                let name = e.path().unwrap().to_string_lossy().into_owned();
                name.trim_start_matches("./").trim_end_matches('/').to_string()
            })
            .filter(|n| !n.is_empty() && n != ".")
            .collect()
    }

    fn terraform_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "main.tf", "resource \"null_resource\" \"x\" {}");
        write(root, "terraform.tfstate", "{}");
        write(root, "modules/net/vpc.tf", "# vpc");
        write(root, "modules/net/old.tfstate", "{}");
        write(
            root,
            ".terraform/providers/registry.terraform.io/hashicorp/null/provider",
            "binary",
        );
        write(root, "modules/net/.terraform/modules.json", "{}");
        dir
    }

    #[test]
    fn test_pack_excludes_state_and_cache() {
        let src = terraform_tree();
        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("upload.tar.gz");

        let artifact = pack(src.path(), &dest).unwrap();

        let names = archived_names(&artifact.path);
        let expected: BTreeSet<String> = ["main.tf", "modules", "modules/net", "modules/net/vpc.tf"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_pack_returns_absolute_path_and_size() {
        let src = terraform_tree();
        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("upload.tar.gz");

        let artifact = pack(src.path(), &dest).unwrap();

        assert!(artifact.path.is_absolute());
        assert_eq!(artifact.size, fs::metadata(&dest).unwrap().len());
        assert!(artifact.size > 0);
    }

    #[test]
    fn test_pack_does_not_archive_itself() {
        let src = terraform_tree();
        let dest = src.path().join("tfc-upload.tar.gz");

        let artifact = pack(src.path(), &dest).unwrap();

        let names = archived_names(&artifact.path);
        assert!(!names.contains("tfc-upload.tar.gz"));
        assert!(names.contains("main.tf"));
    }

    #[test]
    fn test_pack_keeps_plain_file_named_like_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".terraform", "not a directory");
        write(dir.path(), "terraform.tfstate.backup", "{}");
        let out = tempfile::tempdir().unwrap();

        let artifact = pack(dir.path(), &out.path().join("a.tar.gz")).unwrap();

        let names = archived_names(&artifact.path);
        assert!(names.contains(".terraform"));
        assert!(names.contains("terraform.tfstate.backup"));
    }

    #[test]
    fn test_pack_overwrites_existing_archive() {
        let src = terraform_tree();
        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("upload.tar.gz");
        fs::write(&dest, "stale contents").unwrap();

        let artifact = pack(src.path(), &dest).unwrap();
        assert!(archived_names(&artifact.path).contains("main.tf"));
    }

    #[test]
    fn test_pack_missing_source_is_config_error() {
        let out = tempfile::tempdir().unwrap();
        let err = pack(&out.path().join("nope"), &out.path().join("a.tar.gz")).unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
    }

    #[test]
    fn test_pack_file_as_source_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "main.tf", "");
        let err = pack(&dir.path().join("main.tf"), &dir.path().join("a.tar.gz")).unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
    }
}
