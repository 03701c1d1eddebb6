// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Asset registrar for the ion Windows simulator.
//!
//! Turns an ordered list of asset names into a [`Registry`] of sequential
//! resource identifiers, then renders that registry into the two headers the
//! simulator build consumes:
//!
//! - the declarations fragment included by `resources.rc`
//!   ([`render_declarations`]), and
//! - the name → identifier lookup table included by the simulator sources
//!   ([`render_mapping`]).
//!
//! # Determinism Invariant
//!
//! Identifiers are `BASE_ID + index` in input order. Both renderers take the
//! same immutable [`Registry`], so the two artifacts can never disagree about an
//! asset's identifier. Rendering is a pure function of the registry.
//!
//! Filesystem access is confined to [`artifact`].

pub mod artifact;
mod error;
mod parse;
mod registry;
mod render;

pub use artifact::{read_declarations, write_artifact, write_to, ArtifactKind, WriteOutcome};
pub use error::{GenError, ParseError};
pub use parse::parse_declarations;
pub use registry::{AssetEntry, Registry, BASE_ID};
pub use render::{render_declarations, render_mapping, ASSETS_DIR, INCLUDE_GUARD};
