//! CLI argument parsing and the bootstrap sequence

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use repo_bootstrap::error;
use repo_bootstrap::git;
use repo_bootstrap::output::{emoji, OutputConfig};
use repo_bootstrap::path;
use repo_bootstrap::pdm;

/// Clone a repository, set repo-local git identity, and run `pdm install`
#[derive(Parser, Debug)]
#[command(name = "repo-bootstrap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository URL to clone (e.g. https://github.com/org/project.git)
    #[arg(value_name = "REPO_URL")]
    pub repo_url: String,

    /// Git user.name to set locally in the cloned repository
    #[arg(long, value_name = "NAME")]
    pub user_name: String,

    /// Git user.email to set locally in the cloned repository
    #[arg(long, value_name = "EMAIL")]
    pub user_email: String,

    /// Destination directory; defaults to the repository name from the URL
    #[arg(long, value_name = "PATH")]
    pub dest: Option<PathBuf>,

    /// Push the clone to this URL after install, preserving commit history
    #[arg(long, value_name = "URL")]
    pub push_to: Option<String>,

    /// Show detailed progress information
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Execute the bootstrap sequence.
    pub fn execute(self) -> Result<()> {
        // try_init so repeated calls in tests don't panic
        let _ = env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .try_init();

        let out = OutputConfig::from_env_and_flag(&self.color);
        let start_time = Instant::now();

        let dest = match &self.dest {
            Some(dest) => dest.clone(),
            None => {
                let derived = path::derive_dest_dir(&self.repo_url)?;
                if self.verbose {
                    println!("Derived destination from URL: {}", derived.display());
                }
                derived
            }
        };

        if !self.quiet {
            println!(
                "{} Bootstrapping {} into {}",
                emoji(&out, "🔍", "[SETUP]"),
                self.repo_url,
                dest.display()
            );
            println!();
        }

        match self.run_steps(&dest, &out) {
            Ok(()) => {
                let duration = start_time.elapsed();

                if !self.quiet {
                    println!(
                        "{} Checkout ready in {:.2}s",
                        emoji(&out, "✅", "[OK]"),
                        duration.as_secs_f64()
                    );
                    println!("   Location: {}", dest.display());
                }

                Ok(())
            }
            Err(e) => {
                if !self.quiet {
                    println!("{} Bootstrap failed", emoji(&out, "❌", "[FAILED]"));
                    println!();
                }
                Err(e.into())
            }
        }
    }

    /// The three sequential steps, plus the optional push.
    ///
    /// Each step runs only if the previous one succeeded. Nothing already
    /// written to disk is removed when a later step fails.
    fn run_steps(&self, dest: &Path, out: &OutputConfig) -> error::Result<()> {
        if !self.quiet {
            println!("{} Cloning repository ...", emoji(out, "📥", "[CLONE]"));
        }
        git::clone(&self.repo_url, dest)?;

        if !self.quiet {
            println!(
                "{} Setting local git user.name/user.email ...",
                emoji(out, "👤", "[CONFIG]")
            );
        }
        git::set_local_identity(dest, &self.user_name, &self.user_email)?;

        if !self.quiet {
            println!(
                "{} Installing environment with pdm ...",
                emoji(out, "📦", "[INSTALL]")
            );
        }
        pdm::install(dest)?;

        if let Some(target) = &self.push_to {
            if !self.quiet {
                println!("{} Pushing to {} ...", emoji(out, "🚀", "[PUSH]"), target);
            }
            git::push_mirror(dest, target)?;
        }

        Ok(())
    }
}
