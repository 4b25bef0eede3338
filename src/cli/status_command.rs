use lockstage::{status_with, ArtifactKind, FileInfo, Result, StorageLayout};
use std::path::Path;

pub fn execute_status(layout: &StorageLayout, lock_file: &Path) -> Result<()> {
    let status = status_with(layout, Some(lock_file))?;

    println!(
        "{:<8} {}",
        "lock",
        describe(status.source.as_ref(), &status.paths.source, None)
    );

    for kind in ArtifactKind::ALL {
        let path = status.paths.artifact(kind);
        let line = match status.artifact(kind) {
            Some(info) => describe(Some(&info.file), path, Some(info.matches_source)),
            None => describe(None, path, None),
        };
        println!("{:<8} {}", kind.to_string(), line);
    }

    Ok(())
}

fn describe(file: Option<&FileInfo>, path: &Path, matches_source: Option<bool>) -> String {
    let Some(file) = file else {
        return format!("{} (missing)", path.display());
    };

    let modified = file
        .modified
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut line = format!("{} ({} bytes, modified {})", path.display(), file.len, modified);
    match matches_source {
        Some(true) => line.push_str(" [matches lock]"),
        Some(false) => line.push_str(" [differs]"),
        None => {}
    }
    line
}
