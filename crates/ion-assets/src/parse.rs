// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Reader for existing declarations fragments.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ParseError;
use crate::registry::{Registry, BASE_ID};

/// One asset declaration. Each quote around the path is optional on its own.
const DECLARATION_PATTERN: &str = r#"^(\d{1,4}) RCDATA "?\.\./assets/(.*?)"?$"#;

static DECLARATION: OnceLock<Regex> = OnceLock::new();

// The pattern is a compile-time constant exercised by every parse test.
#[allow(clippy::expect_used)]
fn declaration() -> &'static Regex {
    DECLARATION.get_or_init(|| {
        Regex::new(DECLARATION_PATTERN).expect("declaration pattern must compile")
    })
}

/// Rebuild a [`Registry`] from a `resources.rc` declarations fragment.
///
/// Accepts both `300 RCDATA ../assets/a.png` and the quoted
/// `300 RCDATA "../assets/a.png"` form. Lines that are not asset declarations
/// are skipped. Names are kept verbatim, trailing whitespace included. The
/// k-th declaration must carry `BASE_ID + k`.
pub fn parse_declarations(text: &str) -> Result<Registry, ParseError> {
    let mut names = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let Some((found, name)) = parse_line(line) else {
            continue;
        };
        let expected = BASE_ID.saturating_add(u32::try_from(names.len()).unwrap_or(u32::MAX));
        if found != expected {
            return Err(ParseError::UnexpectedId {
                line: index + 1,
                expected,
                found,
            });
        }
        names.push(name);
    }
    Ok(Registry::build(names))
}

fn parse_line(line: &str) -> Option<(u32, &str)> {
    let captures = declaration().captures(line)?;
    // `\d` also matches non-ASCII digits, which do not name a resource id.
    let id = captures.get(1)?.as_str().parse().ok()?;
    Some((id, captures.get(2)?.as_str()))
}
