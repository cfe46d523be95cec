//! Text rendering for the two generated files: the `embedded_components`
//! blocks of the game object and the Lua table of animation names.

use crate::model::ComponentEntry;
use crate::settings::GeneratorSettings;

/// Append one `embedded_components` block, followed by a blank line.
pub fn push_component_block(out: &mut String, entry: &ComponentEntry, settings: &GeneratorSettings) {
    out.push_str("embedded_components {\n");
    out.push_str(&format!("  id: \"{}\"\n", entry.identifier));
    out.push_str(&format!("  type: \"{}\"\n", settings.component_type));
    out.push_str(&format!(
        r#"  data: "spine_scene: \"{}\"\n""#,
        entry.scene_path
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"  "default_animation: \"{}\"\n""#,
        entry.animations.default_animation()
    ));
    out.push('\n');
    out.push_str(r#"  "skin: \"\"\n""#);
    out.push('\n');
    out.push_str(&format!(r#"  "material: \"{}\"\n""#, settings.material));
    out.push('\n');
    out.push_str("  \"\"\n");
    out.push_str("}\n\n");
}

pub fn render_lookup_table(entries: &[ComponentEntry]) -> String {
    let mut out = String::from("local M = {\n");
    for entry in entries {
        out.push_str(&format!(
            "  [\"{}\"] = {{{}}},\n",
            entry.component_url,
            quoted_list(entry.animations.names())
        ));
    }
    out.push_str("}\n");
    out.push_str("return M\n");
    out
}

/// `"a", "b"` as written inside a lookup-table entry.
fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `<url> -> a, b` as printed while generating.
pub fn summary_line(entry: &ComponentEntry) -> String {
    format!(
        "{} -> {}",
        entry.component_url,
        entry.animations.names().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnimationSet;

    fn entry(id: &str, scene: &str, names: &[&str]) -> ComponentEntry {
        ComponentEntry::new(
            id.to_string(),
            "/go#",
            scene,
            AnimationSet::new(names.iter().map(|n| n.to_string()).collect()),
        )
    }

    #[test]
    fn component_block_exact_text() {
        let mut out = String::new();
        push_component_block(
            &mut out,
            &entry("hero", "/chars/hero.spinescene", &["idle", "run"]),
            &GeneratorSettings::default(),
        );

        let expected = concat!(
            "embedded_components {\n",
            "  id: \"hero\"\n",
            "  type: \"spinemodel\"\n",
            "  data: \"spine_scene: \\\"/chars/hero.spinescene\\\"\\n\"\n",
            "  \"default_animation: \\\"idle\\\"\\n\"\n",
            "  \"skin: \\\"\\\"\\n\"\n",
            "  \"material: \\\"/defold-spine/assets/spine.material\\\"\\n\"\n",
            "  \"\"\n",
            "}\n",
            "\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn block_without_animations_has_empty_default() {
        let mut out = String::new();
        push_component_block(
            &mut out,
            &entry("ghost", "/ghost.spinescene", &[]),
            &GeneratorSettings::default(),
        );
        assert!(out.contains("  \"default_animation: \\\"\\\"\\n\"\n"));
    }

    #[test]
    fn lookup_table_exact_text() {
        let table = render_lookup_table(&[
            entry("hero", "/hero.spinescene", &["idle", "run"]),
            entry("ghost", "/ghost.spinescene", &[]),
        ]);

        let expected = concat!(
            "local M = {\n",
            "  [\"/go#hero\"] = {\"idle\", \"run\"},\n",
            "  [\"/go#ghost\"] = {},\n",
            "}\n",
            "return M\n",
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn empty_lookup_table() {
        assert_eq!(render_lookup_table(&[]), "local M = {\n}\nreturn M\n");
    }

    #[test]
    fn summary_joins_names() {
        assert_eq!(
            summary_line(&entry("hero", "/hero.spinescene", &["idle", "run"])),
            "/go#hero -> idle, run"
        );
        assert_eq!(
            summary_line(&entry("ghost", "/ghost.spinescene", &[])),
            "/go#ghost -> "
        );
    }
}
