use std::path::{Path, PathBuf};

use log::info;
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use thiserror::Error;

use crate::shared::constants::{CASCADE_DIR_ENV, FACE_CASCADE_FILE, MOUTH_CASCADE_FILE};

#[derive(Error, Debug)]
pub enum DetectorLoadError {
    #[error("cascade file {name} not found (searched: {searched})")]
    NotFound { name: String, searched: String },
    #[error("cascade file {path} loaded as an empty classifier")]
    Empty { path: PathBuf },
    #[error("failed to load cascade {path}: {source}")]
    Backend {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
}

/// Resolve a cascade file by name.
///
/// Resolution order:
/// 1. `override_dir` (from the command line)
/// 2. The directory named by `MOUTHTONE_CASCADE_DIR`
/// 3. Standard OpenCV data directories
pub fn resolve(name: &str, override_dir: Option<&Path>) -> Result<PathBuf, DetectorLoadError> {
    let dirs = search_dirs(override_dir);
    for dir in &dirs {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    let searched = dirs
        .iter()
        .map(|d| d.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(", ");
    Err(DetectorLoadError::NotFound {
        name: name.to_string(),
        searched,
    })
}

fn search_dirs(override_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = override_dir {
        dirs.push(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CASCADE_DIR_ENV) {
        dirs.push(PathBuf::from(dir));
    }
    dirs.push(PathBuf::from("/usr/share/opencv4/haarcascades"));
    dirs.push(PathBuf::from("/usr/local/share/opencv4/haarcascades"));
    dirs.push(PathBuf::from("/opt/homebrew/share/opencv4/haarcascades"));
    dirs
}

/// Load a cascade from disk, rejecting files the backend reads as an
/// empty classifier (wrong format, truncated download).
pub fn load(path: &Path) -> Result<CascadeClassifier, DetectorLoadError> {
    let classifier =
        CascadeClassifier::new(&path.to_string_lossy()).map_err(|e| DetectorLoadError::Backend {
            path: path.to_path_buf(),
            source: e,
        })?;
    let empty = classifier.empty().map_err(|e| DetectorLoadError::Backend {
        path: path.to_path_buf(),
        source: e,
    })?;
    if empty {
        return Err(DetectorLoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(classifier)
}

/// Load the face and mouth cascades, in that order. Fails on the first
/// missing or unreadable file so a broken install is caught before any
/// camera or window is opened.
pub fn load_cascades(
    override_dir: Option<&Path>,
) -> Result<(CascadeClassifier, CascadeClassifier), DetectorLoadError> {
    let face_path = resolve(FACE_CASCADE_FILE, override_dir)?;
    let face = load(&face_path)?;
    info!("Loaded face cascade from {}", face_path.display());

    let mouth_path = resolve(MOUTH_CASCADE_FILE, override_dir)?;
    let mouth = load(&mouth_path)?;
    info!("Loaded mouth cascade from {}", mouth_path.display());

    Ok((face, mouth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_override_dir() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("haarcascade_frontalface_default.xml");
        fs::write(&file, b"<opencv_storage/>").unwrap();

        let resolved = resolve("haarcascade_frontalface_default.xml", Some(tmp.path())).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_resolve_missing_reports_searched_dirs() {
        let tmp = TempDir::new().unwrap();
        let err = resolve("no_such_cascade.xml", Some(tmp.path())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("no_such_cascade.xml"));
        assert!(message.contains(&tmp.path().to_string_lossy().into_owned()));
        assert!(message.contains("/usr/share/opencv4/haarcascades"));
    }

    #[test]
    fn test_search_dirs_override_comes_first() {
        let tmp = TempDir::new().unwrap();
        let dirs = search_dirs(Some(tmp.path()));
        assert_eq!(dirs[0], tmp.path());
        assert!(dirs.contains(&PathBuf::from("/usr/share/opencv4/haarcascades")));
    }

    #[test]
    fn test_load_rejects_garbage_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.xml");
        fs::write(&path, b"this is not a cascade").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_system_face_cascade() {
        // Skip on machines without the OpenCV data package installed.
        let Ok(path) = resolve(FACE_CASCADE_FILE, None) else {
            return;
        };
        let classifier = load(&path).unwrap();
        assert!(!classifier.empty().unwrap());
    }
}
