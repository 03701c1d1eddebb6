// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface and its validated form.

use std::path::PathBuf;

use clap::Parser;
use ion_assets::{read_declarations, ArtifactKind, GenError, Registry};

#[derive(Parser, Debug)]
#[command(
    name = "ion-assets",
    version,
    about = "Generate the ion simulator's Windows resource headers"
)]
pub(crate) struct Cli {
    /// Asset names, relative to the assets directory. Identifiers follow this order.
    #[arg(long, num_args = 0.., value_name = "NAME", conflicts_with = "from_rc")]
    pub(crate) files: Option<Vec<String>>,
    /// Take asset names from an existing declarations fragment instead of --files.
    #[arg(long, value_name = "PATH")]
    pub(crate) from_rc: Option<PathBuf>,
    /// Header to generate for inclusion in resources.rc.
    #[arg(long, value_name = "PATH")]
    pub(crate) header_resource_rc: Option<PathBuf>,
    /// Header to generate mapping resource names to identifiers.
    #[arg(long, value_name = "PATH")]
    pub(crate) header_resource_mapping: Option<PathBuf>,
}

/// Where the asset list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Names(Vec<String>),
    Declarations(PathBuf),
}

impl Source {
    pub(crate) fn load(self) -> Result<Registry, GenError> {
        match self {
            Self::Names(names) => Ok(Registry::build(names)),
            Self::Declarations(path) => read_declarations(&path),
        }
    }
}

/// A run that passed configuration checks: one source, at least one output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Plan {
    pub(crate) source: Source,
    pub(crate) outputs: Vec<(ArtifactKind, PathBuf)>,
}

impl TryFrom<Cli> for Plan {
    type Error = GenError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let source = match (cli.files, cli.from_rc) {
            (Some(names), _) => Source::Names(names),
            (None, Some(path)) => Source::Declarations(path),
            (None, None) => return Err(GenError::MissingInput),
        };
        let outputs: Vec<_> = [
            (ArtifactKind::Declarations, cli.header_resource_rc),
            (ArtifactKind::Mapping, cli.header_resource_mapping),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.map(|p| (kind, p)))
        .collect();
        if outputs.is_empty() {
            return Err(GenError::NothingToDo);
        }
        Ok(Self { source, outputs })
    }
}
