use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const UPLOADS_PREFIX: &str = "contact_uploads";
pub const UPLOADED_TEMPLATE: &str = "contact_template.csv";

fn in_upload_dir(path: &Path) -> bool {
    path.parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().starts_with(UPLOADS_PREFIX))
        .unwrap_or(false)
}

fn uploaded_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && in_upload_dir(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Contact template uploaded next to the working directory.
/// Per-user `contact_uploads_*` directories win over the shared `contact_uploads`.
pub fn find_uploaded_template(root: &Path) -> Option<PathBuf> {
    let mut found: Vec<PathBuf> = uploaded_files(root)
        .into_iter()
        .filter(|p| p.file_name().is_some_and(|n| n == UPLOADED_TEMPLATE))
        .collect();
    found.sort_by_key(|p| {
        let shared = p.parent().and_then(Path::file_name).is_some_and(|n| n == UPLOADS_PREFIX);
        (shared, p.clone())
    });
    found.into_iter().next()
}

/// Deletes the files left in upload directories; returns how many were removed.
pub fn cleanup_uploads(root: &Path) -> usize {
    let mut removed = 0;
    for path in uploaded_files(root) {
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted {}", path.display());
                removed += 1;
            }
            Err(e) => warn!("Error deleting {}: {}", path.display(), e),
        }
    }
    removed
}
