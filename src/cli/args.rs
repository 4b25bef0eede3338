use clap::{Parser, Subcommand, ValueEnum};
use lockstage::{ArtifactKind, DEFAULT_LOCK_FILE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lockstage",
    version,
    about = "Back up, mock and restore a dependency lock file",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Namespace directory under storage/ (storage/<NAMESPACE>/updater)
    #[arg(long, value_name = "NAMESPACE", global = true, default_value = "statamic")]
    pub namespace: String,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short = 'q', long, conflicts_with = "verbose", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy the lock file to its backup artifact
    Backup {
        /// Lock file to copy
        #[arg(value_name = "LOCK_FILE", default_value = DEFAULT_LOCK_FILE)]
        lock_file: PathBuf,
    },

    /// Copy the lock file to its mock artifact
    Mock {
        /// Lock file to copy
        #[arg(value_name = "LOCK_FILE", default_value = DEFAULT_LOCK_FILE)]
        lock_file: PathBuf,
    },

    /// Copy an artifact back over the lock file
    Restore {
        /// Lock file to restore
        #[arg(value_name = "LOCK_FILE", default_value = DEFAULT_LOCK_FILE)]
        lock_file: PathBuf,

        /// Artifact to restore from
        #[arg(long, value_enum, default_value_t = ArtifactArg::Backup)]
        from: ArtifactArg,
    },

    /// Show the lock file and its artifacts
    Status {
        /// Lock file to inspect
        #[arg(value_name = "LOCK_FILE", default_value = DEFAULT_LOCK_FILE)]
        lock_file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactArg {
    Backup,
    Mock,
}

impl From<ArtifactArg> for ArtifactKind {
    fn from(arg: ArtifactArg) -> Self {
        match arg {
            ArtifactArg::Backup => ArtifactKind::Backup,
            ArtifactArg::Mock => ArtifactKind::Mock,
        }
    }
}
