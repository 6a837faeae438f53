//! Reading and writing scene files on disk.
//!
//! Scene files live at `<scenes_dir>/<name>.<extension>`. Loading always
//! resets the target scene first, so a failed load leaves it in the default
//! state rather than half-populated.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::codec::{decode_scene, encode_scene, FormatVersion};
use crate::scene::Scene;

/// Errors that can occur while loading or saving a scene file.
#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene name is empty")]
    EmptyName,

    #[error("Scene file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for scene file operations.
pub type SceneFileResult<T> = Result<T, SceneFileError>;

/// Build the path of a named scene file.
pub fn scene_path(dir: impl AsRef<Path>, name: &str, extension: &str) -> SceneFileResult<PathBuf> {
    if name.is_empty() {
        return Err(SceneFileError::EmptyName);
    }
    Ok(dir.as_ref().join(format!("{}.{}", name, extension)))
}

/// Reset `scene` and populate it from the file at `path`.
///
/// Returns the format version announced by the file.
pub fn load_scene_file(
    scene: &mut Scene,
    path: impl AsRef<Path>,
) -> SceneFileResult<FormatVersion> {
    let path = path.as_ref();
    scene.reset();

    if !path.is_file() {
        return Err(SceneFileError::NotFound(path.to_path_buf()));
    }

    let text = readable_lines(&fs::read(path)?);
    let version = decode_scene(&text, scene);

    log::info!(
        "Loaded {} ({:?}): {} materials, {} geometry, {} lights",
        path.display(),
        version,
        scene.materials().len(),
        scene.geometry().len(),
        scene.lights().len()
    );

    Ok(version)
}

/// Keep the lines of `bytes` that are valid UTF-8, dropping the rest.
fn readable_lines(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for (number, line) in bytes.split(|&b| b == b'\n').enumerate() {
        match std::str::from_utf8(line) {
            Ok(line) => {
                text.push_str(line);
                text.push('\n');
            }
            Err(e) => log::debug!("Skipping line {}: {}", number + 1, e),
        }
    }
    text
}

/// Write `scene` to `path`, creating the parent directory if needed.
pub fn save_scene_file(
    scene: &Scene,
    path: impl AsRef<Path>,
    version: FormatVersion,
) -> SceneFileResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, encode_scene(scene, version))?;
    log::info!("Saved {} ({:?})", path.display(), version);
    Ok(())
}
