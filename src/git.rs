use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::error::{Error, Result};

/// Clone a repository into `dest` with every branch and tag
///
/// The clone is performed as a mirror into `dest/.git` and then converted to
/// a normal working-tree checkout, so the result carries the complete ref
/// set rather than just the default branch.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
///
/// The destination must not already exist; a pre-existing path is a hard
/// error and nothing is modified.
pub fn clone(url: &str, dest: &Path) -> Result<()> {
    if dest.exists() {
        return Err(Error::GitClone {
            url: url.to_string(),
            dest: dest.display().to_string(),
            message: "destination already exists".to_string(),
            hint: Some(
                "pass --dest to choose a different directory, or remove the existing one"
                    .to_string(),
            ),
        });
    }

    let clone_error = |message: String, hint: Option<String>| Error::GitClone {
        url: url.to_string(),
        dest: dest.display().to_string(),
        message,
        hint,
    };

    // Mirror clone into dest/.git to get all branches and refs
    debug!("git clone --mirror {} {}", url, dest.join(".git").display());
    let output = Command::new("git")
        .args(["clone", "--mirror", url])
        .arg(dest.join(".git"))
        .output()
        .map_err(|e| clone_error(e.to_string(), spawn_hint(&e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        // Provide helpful error message for common auth failures
        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            Some(
                "Authentication failed. Make sure you have access to the repository.\n\
                For private repos, ensure you have:\n\
                - SSH key added to ssh-agent\n\
                - Git credentials configured\n\
                - Personal access token set up"
                    .to_string(),
            )
        } else {
            None
        };

        return Err(clone_error(failure_message(&output), hint));
    }

    // Convert bare repo to normal repo
    let output = git_in(dest, &["config", "--bool", "core.bare", "false"])
        .map_err(|e| clone_error(e.to_string(), spawn_hint(&e)))?;
    if !output.status.success() {
        return Err(clone_error(failure_message(&output), None));
    }

    // Checkout to create the working directory
    let output = git_in(dest, &["checkout"]).map_err(|e| clone_error(e.to_string(), None))?;
    if !output.status.success() {
        return Err(clone_error(failure_message(&output), None));
    }

    Ok(())
}

/// Set `user.name` and `user.email` in the repository-local configuration
///
/// Both writes are scoped with `--local`, so only `<repo_dir>/.git/config`
/// is touched. Global and system configuration are never read or written.
pub fn set_local_identity(repo_dir: &Path, name: &str, email: &str) -> Result<()> {
    set_local_config(repo_dir, "user.name", name)?;
    set_local_config(repo_dir, "user.email", email)
}

fn set_local_config(repo_dir: &Path, key: &str, value: &str) -> Result<()> {
    let config_error = |message: String| Error::GitConfig {
        key: key.to_string(),
        dir: repo_dir.display().to_string(),
        message,
    };

    let output = git_in(repo_dir, &["config", "--local", key, value])
        .map_err(|e| config_error(e.to_string()))?;

    if !output.status.success() {
        return Err(config_error(failure_message(&output)));
    }

    Ok(())
}

/// Push the clone to a second remote, preserving all history
///
/// Adds `target_url` as a remote named `target` and pushes every branch and
/// tag. Pull-request style refs are not included. Commit timestamps survive
/// unchanged because the objects are transferred as-is.
pub fn push_mirror(repo_dir: &Path, target_url: &str) -> Result<()> {
    let push_error = |message: String| Error::Push {
        url: target_url.to_string(),
        message,
    };

    let steps: [&[&str]; 3] = [
        &["remote", "add", "target", target_url],
        &["push", "target", "refs/heads/*:refs/heads/*"],
        &["push", "target", "refs/tags/*:refs/tags/*"],
    ];

    for args in steps {
        let output = git_in(repo_dir, args).map_err(|e| push_error(e.to_string()))?;
        if !output.status.success() {
            return Err(push_error(failure_message(&output)));
        }
    }

    Ok(())
}

/// Run git with the given arguments inside `dir`, capturing output.
fn git_in(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    debug!("git {} (in {})", args.join(" "), dir.display());
    Command::new("git").args(args).current_dir(dir).output()
}

/// Format a non-zero exit into a message carrying the captured output.
fn failure_message(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut message = output.status.to_string();
    if !stdout.trim().is_empty() {
        message.push_str(&format!("\nstdout:\n{}", stdout.trim()));
    }
    if !stderr.trim().is_empty() {
        message.push_str(&format!("\nstderr:\n{}", stderr.trim()));
    }
    message
}

/// Hint for spawn failures where the git binary itself is missing.
fn spawn_hint(e: &std::io::Error) -> Option<String> {
    if e.kind() == std::io::ErrorKind::NotFound {
        Some("Is git installed and on PATH?".to_string())
    } else {
        None
    }
}
