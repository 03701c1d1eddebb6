// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem edge: reading declarations and writing rendered artifacts.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::GenError;
use crate::parse::parse_declarations;
use crate::registry::Registry;
use crate::render::{render_declarations, render_mapping};

/// The two headers a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Fragment included by `resources.rc`.
    Declarations,
    /// Name → identifier lookup table.
    Mapping,
}

impl ArtifactKind {
    /// Render this artifact for `registry`.
    pub fn render(self, registry: &Registry) -> String {
        match self {
            Self::Declarations => render_declarations(registry),
            Self::Mapping => render_mapping(registry),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Declarations => "resource declarations",
            Self::Mapping => "resource mapping",
        })
    }
}

/// What [`write_artifact`] did to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or overwritten.
    Written,
    /// The file already held identical bytes and was left untouched.
    Unchanged,
}

/// Write `text` to `writer` and flush it.
pub fn write_to<W: Write>(mut writer: W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// Write `text` to `path`, creating parent directories as needed.
///
/// A destination that already holds exactly `text` is not rewritten, so its
/// modification time stays put and the resource compiler does not rebuild.
pub fn write_artifact(path: &Path, text: &str) -> Result<WriteOutcome, GenError> {
    if fs::read(path).is_ok_and(|existing| existing == text.as_bytes()) {
        return Ok(WriteOutcome::Unchanged);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| GenError::io(path, e))?;
    write_to(BufWriter::new(file), text).map_err(|e| GenError::io(path, e))?;
    Ok(WriteOutcome::Written)
}

/// Load and parse a declarations fragment from `path`.
pub fn read_declarations(path: &Path) -> Result<Registry, GenError> {
    let text = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    Ok(parse_declarations(&text)?)
}
