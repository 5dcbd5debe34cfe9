//! # Repository Bootstrap Library
//!
//! This library provides the building blocks for bootstrapping a local
//! development checkout: cloning a repository with its full ref set, setting
//! repository-local identity configuration, and installing the project's
//! dependency environment with pdm. It is used by the `repo-bootstrap`
//! command-line tool but can also be driven from other applications.
//!
//! ## Quick Example
//!
//! ```no_run
//! use repo_bootstrap::{git, path, pdm};
//!
//! # fn main() -> repo_bootstrap::error::Result<()> {
//! let url = "https://github.com/org/project.git";
//! let dest = path::derive_dest_dir(url)?; // "project"
//!
//! git::clone(url, &dest)?;
//! git::set_local_identity(&dest, "Jane Doe", "jane@example.com")?;
//! pdm::install(&dest)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! - **Git operations (`git`)**: mirror clone converted to a working-tree
//!   checkout, repository-local identity configuration, and an optional
//!   history-preserving push to a second remote.
//! - **Environment install (`pdm`)**: invoking `pdm install` inside the
//!   checkout.
//! - **Destination derivation (`path`)**: naming the checkout directory
//!   after the repository URL when no explicit destination is given.
//! - **Errors (`error`)**: one variant per bootstrap step, carrying the
//!   failing tool's captured output verbatim.
//!
//! Every operation shells out to the system `git` or `pdm` binary and blocks
//! until the child exits. The sequence is strictly gated: a failing step
//! aborts the run, and nothing that was already written to disk is rolled
//! back.

pub mod error;
pub mod git;
pub mod output;
pub mod path;
pub mod pdm;
