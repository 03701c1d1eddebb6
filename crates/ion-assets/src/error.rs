// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for asset generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a generation run. None are retried.
#[derive(Debug, Error)]
pub enum GenError {
    /// No asset list was supplied.
    #[error("no asset list given")]
    MissingInput,
    /// No output path was supplied, so there is nothing to generate.
    #[error("no output requested")]
    NothingToDo,
    /// Reading or writing `path` failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
    /// A declarations file did not follow the registry layout.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from [`parse_declarations`](crate::parse_declarations).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A declaration carried an identifier out of sequence.
    #[error("line {line}: expected identifier {expected}, found {found}")]
    UnexpectedId {
        /// 1-based line number.
        line: usize,
        /// Identifier required at this position.
        expected: u32,
        /// Identifier present in the input.
        found: u32,
    },
}
