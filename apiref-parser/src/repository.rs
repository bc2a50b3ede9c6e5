//! Metadata of the documentation repository a document was checked out from.
//!
//! Reference documents live at `<repo>/<rest_api dir>/<category>/<name>.adoc`
//! and the checkout tracks an `enterprise-<major.minor>` branch, which is
//! where the documentation version comes from.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Error;

const VERSION_BRANCH_PREFIX: &str = "enterprise-";
const REF_PREFIX: &str = "ref: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// Locate the repository containing `document`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDocumentPath`] when the path is not nested at
    /// least two directories deep (`<rest_api dir>/<category>/<name>.adoc`).
    pub fn for_document(document: &Path) -> Result<Self, Error> {
        let root = document
            .parent()
            .and_then(Path::parent)
            .filter(|rest_api| rest_api.file_name().is_some())
            .and_then(Path::parent)
            .ok_or_else(|| Error::InvalidDocumentPath(document.to_path_buf()))?;
        let root = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };
        tracing::debug!(root = %root.display(), "repository");
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }

    fn head(&self) -> Result<String, Error> {
        let head = fs::read_to_string(self.git_dir().join("HEAD"))?;
        Ok(head.lines().next().unwrap_or_default().trim_end().to_string())
    }

    /// The documentation version, `major.minor` of the checked-out
    /// `enterprise-<major.minor>` branch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VersionNotFound`] when `.git/HEAD` cannot be read or
    /// does not end with such a branch name.
    #[tracing::instrument(level = "debug")]
    pub fn version(&self) -> Result<String, Error> {
        let head = self.head().map_err(|error| {
            Error::VersionNotFound(format!("{}: {error}", self.git_dir().join("HEAD").display()))
        })?;
        let version = head
            .rsplit_once(VERSION_BRANCH_PREFIX)
            .map(|(_, version)| version)
            .filter(|version| is_major_minor(version))
            .ok_or_else(|| Error::VersionNotFound(head.clone()))?;
        tracing::debug!(version, "documentation version");
        Ok(version.to_string())
    }

    /// The commit id HEAD points at.
    ///
    /// Follows a symbolic `ref:` to its loose ref file, then to
    /// `packed-refs`. A HEAD without `ref:` is a detached commit id.
    #[tracing::instrument(level = "debug")]
    pub fn revision(&self) -> Option<String> {
        let head = match self.head() {
            Ok(head) => head,
            Err(error) => {
                tracing::warn!(%error, "could not read HEAD");
                return None;
            }
        };
        let Some(reference) = head.strip_prefix(REF_PREFIX) else {
            return Some(head);
        };
        let loose = self.git_dir().join(reference);
        if let Ok(commit) = fs::read_to_string(&loose) {
            return Some(commit.trim().to_string());
        }
        let revision = fs::read_to_string(self.git_dir().join("packed-refs"))
            .ok()
            .and_then(|packed| {
                packed.lines().find_map(|line| {
                    line.split_once(' ')
                        .filter(|(_, name)| *name == reference)
                        .map(|(commit, _)| commit.to_string())
                })
            });
        if revision.is_none() {
            tracing::warn!(reference, "could not resolve HEAD to a commit");
        }
        revision
    }
}

fn is_major_minor(version: &str) -> bool {
    version.split_once('.').is_some_and(|(major, minor)| {
        [major, minor]
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit()))
    })
}

/// Published URL of a document:
/// `<prefix>/<version>/<rest_api dir>/<category>/<name>.html`.
///
/// # Errors
///
/// Returns [`Error::InvalidDocumentPath`] when the path has no file name or
/// fewer than two parent directories.
pub fn document_url(document: &Path, url_prefix: &str, version: &str) -> Result<String, Error> {
    let invalid = || Error::InvalidDocumentPath(document.to_path_buf());
    let name = document.file_name().ok_or_else(invalid)?.to_string_lossy();
    let category_dir = document.parent().ok_or_else(invalid)?;
    let category = category_dir.file_name().ok_or_else(invalid)?.to_string_lossy();
    let rest_api = category_dir
        .parent()
        .and_then(Path::file_name)
        .ok_or_else(invalid)?
        .to_string_lossy();
    Ok(format!(
        "{}/{version}/{rest_api}/{category}/{}",
        url_prefix.trim_end_matches('/'),
        name.replace(".adoc", ".html")
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COMMIT: &str = "3f9c2d0e8b7a6f5e4d3c2b1a09f8e7d6c5b4a392";

    fn checkout(head: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/refs/heads")).unwrap();
        fs::create_dir_all(dir.path().join("rest_api/workloads_apis")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), head).unwrap();
        let document = dir.path().join("rest_api/workloads_apis/pod-core-v1.adoc");
        fs::write(&document, "= Pod [core/v1]\n").unwrap();
        (dir, document)
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_version_from_branch() {
        let (dir, document) = checkout("ref: refs/heads/enterprise-4.8\n");
        let repository = Repository::for_document(&document).unwrap();
        assert_eq!(repository.root(), dir.path());
        assert_eq!(repository.version().unwrap(), "4.8");
    }

    #[rstest::rstest]
    #[case::main_branch("ref: refs/heads/main\n")]
    #[case::no_minor("ref: refs/heads/enterprise-4\n")]
    #[case::suffix("ref: refs/heads/enterprise-4.8-rc\n")]
    fn test_version_not_found(#[case] head: &str) {
        let (_dir, document) = checkout(head);
        let error = Repository::for_document(&document)
            .unwrap()
            .version()
            .unwrap_err();
        assert!(matches!(error, Error::VersionNotFound(_)), "{error}");
    }

    #[test]
    fn test_version_without_git_dir() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("rest_api/objects/index.adoc");
        let error = Repository::for_document(&document)
            .unwrap()
            .version()
            .unwrap_err();
        assert!(matches!(error, Error::VersionNotFound(_)));
    }

    #[test]
    fn test_revision_from_loose_ref() {
        let (dir, document) = checkout("ref: refs/heads/enterprise-4.8\n");
        fs::write(
            dir.path().join(".git/refs/heads/enterprise-4.8"),
            format!("{COMMIT}\n"),
        )
        .unwrap();
        let repository = Repository::for_document(&document).unwrap();
        assert_eq!(repository.revision().as_deref(), Some(COMMIT));
    }

    #[test]
    fn test_revision_from_packed_refs() {
        let (dir, document) = checkout("ref: refs/heads/enterprise-4.8\n");
        fs::write(
            dir.path().join(".git/packed-refs"),
            format!(
                "# pack-refs with: peeled fully-peeled sorted\n\
                 0000000000000000000000000000000000000000 refs/heads/main\n\
                 {COMMIT} refs/heads/enterprise-4.8\n"
            ),
        )
        .unwrap();
        let repository = Repository::for_document(&document).unwrap();
        assert_eq!(repository.revision().as_deref(), Some(COMMIT));
    }

    #[test]
    fn test_revision_detached() {
        let (_dir, document) = checkout(&format!("{COMMIT}\n"));
        let repository = Repository::for_document(&document).unwrap();
        assert_eq!(repository.revision().as_deref(), Some(COMMIT));
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_revision_unresolved() {
        let (_dir, document) = checkout("ref: refs/heads/enterprise-4.8\n");
        let repository = Repository::for_document(&document).unwrap();
        assert_eq!(repository.revision(), None);
        assert!(logs_contain("could not resolve HEAD"));
    }

    #[test]
    fn test_relative_document_path() {
        let repository =
            Repository::for_document(Path::new("rest_api/objects/index.adoc")).unwrap();
        assert_eq!(repository.root(), Path::new("."));
    }

    #[rstest::rstest]
    #[case::bare_file("index.adoc")]
    #[case::one_level("objects/index.adoc")]
    fn test_shallow_document_path(#[case] path: &str) {
        let error = Repository::for_document(Path::new(path)).unwrap_err();
        assert!(matches!(error, Error::InvalidDocumentPath(_)));
    }

    #[test]
    fn test_document_url() {
        let url = document_url(
            Path::new("/src/openshift-docs/rest_api/workloads_apis/pod-core-v1.adoc"),
            "https://docs.openshift.com/container-platform/",
            "4.8",
        )
        .unwrap();
        assert_eq!(
            url,
            "https://docs.openshift.com/container-platform/4.8/rest_api/workloads_apis/pod-core-v1.html"
        );
    }
}
