//! Destination-name derivation.
//!
//! When `--dest` is not given, the checkout directory is named after the
//! repository URL: the final path segment with any trailing `.git` stripped
//! (`https://github.com/org/repo.git` becomes `repo`).

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};

/// Derive the default destination directory from a repository URL.
pub fn derive_dest_dir(repo_url: &str) -> Result<PathBuf> {
    // Absolute URLs contribute their path component; anything else (local
    // paths, scp-style remotes) is taken verbatim, where the final segment
    // falls out of the same split.
    let path_part = match Url::parse(repo_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => repo_url.to_string(),
    };

    let tail = path_part
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");

    let name = tail.strip_suffix(".git").unwrap_or(tail);

    if name.is_empty() {
        return Err(Error::Path {
            message: format!("could not derive a repository name from '{}'", repo_url),
        });
    }

    Ok(PathBuf::from(name))
}
