// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::data::ManagementRecord;
use crate::error::OutputError;

/// Write all records as one indented JSON array, replacing any previous file.
/// Non-ASCII text is written as-is (UTF-8), not escaped.
/// Returns the final path written to.
pub fn write_records(path: &Path, records: &[ManagementRecord]) -> Result<PathBuf, OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    records.serialize(&mut ser)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(path.to_path_buf())
}

/// Read a file produced by [`write_records`].
pub fn read_records(path: &Path) -> Result<Vec<ManagementRecord>, OutputError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn ensure_directory(dir: &Path) -> Result<(), OutputError> {
    if dir.exists() && !dir.is_dir() {
        return Err(OutputError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
