//! Corpus traversal.
//!
//! A corpus path is a single file or a directory walked recursively in file
//! name order. Plain files are one unit each; every file entry of a `.zip`
//! archive is one unit. Units are Latin-1 decoded before they are visited.

use crate::loader::decode_latin1;
use crate::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files under `root` in visiting order.
pub fn corpus_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

pub fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Call `visit(unit_name, content)` for every unit under `root`; returns the unit count.
///
/// The first error, from I/O or from `visit`, stops the traversal. Errors
/// raised for a unit are wrapped in [`Error::Unit`] naming it.
pub fn visit_units<F>(root: &Path, mut visit: F) -> Result<usize>
where
    F: FnMut(&str, &str) -> Result<()>,
{
    let mut units = 0;
    for path in corpus_files(root)? {
        if is_zip(&path) {
            units += visit_archive(&path, &mut visit)?;
        } else {
            let bytes = std::fs::read(&path).map_err(|source| Error::File { path: path.clone(), source })?;
            let unit = path.display().to_string();
            let content = decode_latin1(&bytes);
            visit(&unit, &*content).map_err(|e| e.in_unit(&unit))?;
            units += 1;
        }
    }
    Ok(units)
}

fn visit_archive<F>(path: &Path, visit: &mut F) -> Result<usize>
where
    F: FnMut(&str, &str) -> Result<()>,
{
    tracing::info!(archive = %path.display(), "reading archive");
    let file = File::open(path).map_err(|source| Error::File { path: path.to_path_buf(), source })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| Error::from(e).in_unit(path.display().to_string()))?;
    let mut units = 0;
    let mut buf = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| Error::from(e).in_unit(path.display().to_string()))?;
        if entry.is_dir() {
            continue;
        }
        let unit = format!("{}:{}", path.display(), entry.name());
        buf.clear();
        entry.read_to_end(&mut buf).map_err(|e| Error::from(e).in_unit(&unit))?;
        let content = decode_latin1(&buf);
        visit(&unit, &*content).map_err(|e| e.in_unit(&unit))?;
        units += 1;
    }
    Ok(units)
}
