//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `repo-bootstrap` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to one step of
//!   the bootstrap sequence and includes contextual information to aid in
//!   debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures.
//!
//! Every failure is terminal for the run: there is no retry layer and no
//! distinction between transient and permanent failures. The captured stdout
//! and stderr of the failing external tool are embedded verbatim in the
//! `message` field so the user sees exactly what the tool reported.

use thiserror::Error;

/// Main error type for repo-bootstrap operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while cloning the repository.
    ///
    /// Includes the repository URL, the destination path, the captured git
    /// output, and an optional hint for resolution. A destination that
    /// already exists is reported through this variant as well, since the
    /// check belongs to the clone step.
    #[error("Git clone error for {url} into {dest}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        dest: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// An error occurred while setting repository-local configuration.
    ///
    /// Names the configuration key that failed to be written.
    #[error("Git config error for {key} in {dir}: {message}")]
    GitConfig {
        key: String,
        dir: String,
        message: String,
    },

    /// An error occurred while installing the dependency environment.
    #[error("Environment install error in {dir}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Install {
        dir: String,
        message: String,
        /// Optional hint for how to resolve the install issue
        hint: Option<String>,
    },

    /// An error occurred while pushing the clone to a target remote.
    #[error("Git push error for {url}: {message}")]
    Push { url: String, message: String },

    /// An error occurred while deriving the destination path from the URL.
    #[error("Path derivation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
