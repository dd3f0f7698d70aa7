//! Ordered template search folders for a generator.

use std::path::{Path, PathBuf};

use crate::ports::LibraryManager;

/// Folders searched for a generator's templates, most specific first.
///
/// For each base folder the application's own `<templates_folder>/<base>`
/// comes first, then the same folder inside every library the manager
/// reports. Folders that do not exist on disk are skipped.
pub fn template_folders<M: LibraryManager + ?Sized>(
    base_folders: &[&str],
    templates_folder: &str,
    app_base_path: &Path,
    library_manager: &M,
) -> Vec<PathBuf> {
    let libraries = library_manager.libraries();
    let mut folders = Vec::new();

    for base in base_folders {
        let roots = std::iter::once(app_base_path.to_path_buf()).chain(
            libraries.iter().map(|library| absolutize(app_base_path, &library.path)),
        );
        for root in roots {
            let candidate = root.join(templates_folder).join(base);
            if candidate.is_dir() && !folders.contains(&candidate) {
                folders.push(candidate);
            }
        }
    }

    folders
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
