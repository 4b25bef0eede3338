mod args;
mod restore_command;
mod stash_command;
mod status_command;

pub use args::{Args, Command};
use lockstage::{ArtifactKind, Result, StorageLayout};

pub fn run(args: Args) -> Result<()> {
    let layout = StorageLayout::with_namespace(&args.namespace)?;
    let verbose = args.verbose > 0;

    match args.command {
        Command::Backup { lock_file } => {
            stash_command::execute_stash(&layout, &lock_file, ArtifactKind::Backup, verbose)
        }
        Command::Mock { lock_file } => {
            stash_command::execute_stash(&layout, &lock_file, ArtifactKind::Mock, verbose)
        }
        Command::Restore { lock_file, from } => {
            restore_command::execute_restore(&layout, &lock_file, from.into(), verbose)
        }
        Command::Status { lock_file } => status_command::execute_status(&layout, &lock_file),
    }
}
