//! File handling for the CLI frontend.
//!
//! Finds song files and writes rendered tables to an output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{ChordError, Result};

/// Suffix appended to the song's file stem for the rendered table.
pub const OUTPUT_SUFFIX: &str = "_notes.txt";

/// Song files named by `path`: the file itself, or every regular file in
/// the directory, sorted by name.
pub fn song_paths(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| read_error(path, e))? {
        let entry_path = entry.map_err(|e| read_error(path, e))?.path();
        if entry_path.is_file() {
            paths.push(entry_path);
        }
    }
    paths.sort();
    debug!("found {} song file(s) in {}", paths.len(), path.display());
    Ok(paths)
}

/// Read a song file into memory.
pub fn read_song(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

/// File stem used to name a song in messages and output files.
pub fn song_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Write `table` to `<out_dir>/<stem>_notes.txt`, creating `out_dir`.
pub fn write_table(out_dir: &Path, song_path: &Path, table: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|e| write_error(out_dir, e))?;
    let out_file = out_dir.join(format!("{}{}", song_name(song_path), OUTPUT_SUFFIX));
    fs::write(&out_file, table).map_err(|e| write_error(&out_file, e))?;
    debug!("wrote {}", out_file.display());
    Ok(out_file)
}

fn read_error(path: &Path, source: io::Error) -> ChordError {
    ChordError::FileReadError {
        path: path.display().to_string(),
        source,
    }
}

fn write_error(path: &Path, source: io::Error) -> ChordError {
    ChordError::FileWriteError {
        path: path.display().to_string(),
        source,
    }
}
