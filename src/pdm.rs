//! Dependency environment installation via pdm.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Run `pdm install` with `repo_dir` as the working directory
///
/// pdm resolves the manifest and lock files already present in the checkout
/// and materializes the project environment next to them. A missing pdm
/// binary surfaces as an install error from the spawn failure; there is no
/// up-front tool check.
pub fn install(repo_dir: &Path) -> Result<()> {
    let install_error = |message: String, hint: Option<String>| Error::Install {
        dir: repo_dir.display().to_string(),
        message,
        hint,
    };

    debug!("pdm install (in {})", repo_dir.display());
    let output = Command::new("pdm")
        .arg("install")
        .current_dir(repo_dir)
        .output()
        .map_err(|e| {
            let hint = if e.kind() == std::io::ErrorKind::NotFound {
                Some("Is pdm installed and on PATH?".to_string())
            } else {
                None
            };
            install_error(e.to_string(), hint)
        })?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let mut message = output.status.to_string();
        if !stdout.trim().is_empty() {
            message.push_str(&format!("\nstdout:\n{}", stdout.trim()));
        }
        if !stderr.trim().is_empty() {
            message.push_str(&format!("\nstderr:\n{}", stderr.trim()));
        }

        return Err(install_error(message, None));
    }

    Ok(())
}
