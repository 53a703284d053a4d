//! JSON writer for chapter files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::chapter_file_name;
use crate::error::{PipelineError, Result};
use crate::types::Chapter;

/// Render a chapter as pretty-printed JSON.
///
/// Two-space indentation, non-ASCII text written as-is, no trailing newline.
pub fn generate_json(chapter: &Chapter) -> Result<String> {
    Ok(serde_json::to_string_pretty(chapter)?)
}

/// Save a chapter as `chapter{N}.json` inside `output_dir`.
///
/// Writes to a temp file, syncs to disk, then renames over the target so an
/// interrupted run never leaves a truncated chapter behind. The directory is
/// created if missing.
///
/// # Returns
/// Path to the saved file
pub fn save_chapter(chapter: &Chapter, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let file_name = chapter_file_name(chapter.chapter);
    let output_file = output_dir.join(&file_name);
    let temp_file = output_dir.join(format!(".{file_name}.tmp"));

    let content = generate_json(chapter)?;

    let write_err = |source: std::io::Error| PipelineError::WriteFile {
        path: output_file.clone(),
        source,
    };

    {
        let mut file = File::create(&temp_file).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file).map_err(write_err)?;
    }

    fs::rename(&temp_file, &output_file).map_err(write_err)?;

    tracing::debug!(path = %output_file.display(), bytes = content.len(), "Saved chapter");
    Ok(output_file)
}
