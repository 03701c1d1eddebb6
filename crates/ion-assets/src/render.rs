// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Text renderers for the two generated headers.
//!
//! Token text is reproduced exactly: the simulator sources include the mapping
//! header by guard name and index `resourcesIdentifiers` directly.

use std::fmt::Write as _;

use crate::registry::Registry;

/// Include guard of the mapping header.
pub const INCLUDE_GUARD: &str = "ION_SIMULATOR_WINDOWS_RESOURCES_H";

/// Path prefix under which `resources.rc` resolves asset names.
pub const ASSETS_DIR: &str = "../assets/";

const RESOURCE_TYPE: &str = "RCDATA";

const MAPPING_BANNER: &str = "// This file is auto-generated by assets.py";

const MAPPING_ARRAY_OPEN: &str =
    "constexpr struct {const char * identifier; int id; } resourcesIdentifiers[] = {";

/// Render the `resources.rc` fragment: one `<id> RCDATA ../assets/<name>` line per entry.
pub fn render_declarations(registry: &Registry) -> String {
    let mut out = String::new();
    for entry in registry {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{} {RESOURCE_TYPE} {ASSETS_DIR}{}",
            entry.id(),
            entry.name()
        );
    }
    out
}

/// Render the guarded lookup table mapping asset names to identifiers.
pub fn render_mapping(registry: &Registry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#ifndef {INCLUDE_GUARD}");
    let _ = writeln!(out, "#define {INCLUDE_GUARD}");
    out.push('\n');
    let _ = writeln!(out, "{MAPPING_BANNER}");
    out.push('\n');
    let _ = writeln!(out, "{MAPPING_ARRAY_OPEN}");
    for entry in registry {
        let _ = writeln!(out, "{{\"{}\", {}}},", entry.name(), entry.id());
    }
    out.push_str("};\n\n#endif\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_MAPPING: &str = "#ifndef ION_SIMULATOR_WINDOWS_RESOURCES_H\n\
#define ION_SIMULATOR_WINDOWS_RESOURCES_H\n\
\n\
// This file is auto-generated by assets.py\n\
\n\
constexpr struct {const char * identifier; int id; } resourcesIdentifiers[] = {\n\
};\n\
\n\
#endif\n";

    #[test]
    fn declarations_match_resource_script_format() {
        let registry = Registry::build(["image1.png", "sound2.wav"]);
        assert_eq!(
            render_declarations(&registry),
            "300 RCDATA ../assets/image1.png\n301 RCDATA ../assets/sound2.wav\n"
        );
    }

    #[test]
    fn mapping_matches_header_format() {
        let registry = Registry::build(["image1.png", "sound2.wav"]);
        let expected = EMPTY_MAPPING.replace(
            "resourcesIdentifiers[] = {\n",
            "resourcesIdentifiers[] = {\n{\"image1.png\", 300},\n{\"sound2.wav\", 301},\n",
        );
        assert_eq!(render_mapping(&registry), expected);
    }

    #[test]
    fn empty_registry_renders_skeletons() {
        let registry = Registry::default();
        assert_eq!(render_declarations(&registry), "");
        assert_eq!(render_mapping(&registry), EMPTY_MAPPING);
    }

    #[test]
    fn rendering_is_deterministic() {
        let registry = Registry::build(["a.png", "b/c.bin", "a.png"]);
        assert_eq!(render_declarations(&registry), render_declarations(&registry));
        assert_eq!(render_mapping(&registry), render_mapping(&registry));
    }

    #[test]
    fn both_artifacts_agree_on_every_id() {
        let registry = Registry::build(["logo.png", "calculation_icon.png", "sfx/beep.wav"]);
        let declarations = render_declarations(&registry);
        let mapping = render_mapping(&registry);

        for line in declarations.lines() {
            let (id, rest) = line.split_once(" RCDATA ../assets/").unwrap();
            let row = format!("{{\"{rest}\", {id}}},");
            assert!(mapping.contains(&row), "mapping lacks {row}");
        }
        assert_eq!(declarations.lines().count(), registry.len());
    }

    #[test]
    fn names_are_emitted_verbatim() {
        let registry = Registry::build(["dir with space/ünïcode.png"]);
        assert_eq!(
            render_declarations(&registry),
            "300 RCDATA ../assets/dir with space/ünïcode.png\n"
        );
        assert!(render_mapping(&registry).contains("{\"dir with space/ünïcode.png\", 300},\n"));
    }
}
