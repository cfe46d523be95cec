use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

use crate::error::GenError;
use crate::model::SceneFile;
use crate::settings::GeneratorSettings;

/// Recursively collect scene files below `root`.
///
/// Each directory lists its files before descending into sub-directories,
/// and both are visited in file-name order. Paths containing one of the
/// configured exclusions are dropped. A root that cannot be listed is an
/// error; unreadable sub-directories are skipped with a warning.
pub fn find_scene_files(
    root: &Path,
    settings: &GeneratorSettings,
) -> Result<Vec<SceneFile>, GenError> {
    let entries = read_sorted(root).map_err(|source| GenError::Walk {
        path: root.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    visit(root, entries, settings, &mut found);
    Ok(found)
}

fn read_sorted(dir: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn visit(
    root: &Path,
    entries: Vec<DirEntry>,
    settings: &GeneratorSettings,
    found: &mut Vec<SceneFile>,
) {
    let (dirs, files): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false));

    for entry in files {
        if !entry
            .file_name()
            .to_string_lossy()
            .ends_with(settings.scene_extension.as_str())
        {
            continue;
        }

        let relative = project_path(root, &entry.path());
        if is_excluded(&relative, settings) {
            log::debug!("Ignoring template scene {relative}");
            continue;
        }
        found.push(SceneFile::new(relative));
    }

    for entry in dirs {
        let dir = entry.path();
        match read_sorted(&dir) {
            Ok(children) => visit(root, children, settings, found),
            Err(e) => log::warn!("Skipping unreadable directory {}: {e}", dir.display()),
        }
    }
}

/// `/`-prefixed, `/`-separated path of `path` relative to `root`.
fn project_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut out = String::new();
    for component in relative.components() {
        out.push('/');
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}

fn is_excluded(relative: &str, settings: &GeneratorSettings) -> bool {
    settings
        .excluded_paths
        .iter()
        .any(|excluded| relative.contains(excluded.as_str()))
}

/// Print the discovered paths under a header, or nothing when there are none.
pub fn report_discovered(files: &[SceneFile]) {
    if files.is_empty() {
        return;
    }
    println!("Search for spine scenes:");
    for file in files {
        println!("{}", file.path());
    }
}
