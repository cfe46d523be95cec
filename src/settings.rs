use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFY_APP_NAME: &str = "spine-tester-gen";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    pub scene_extension: String,
    /// Substrings of the slash-prefixed relative path that are never collected.
    pub excluded_paths: Vec<String>,
    /// Relative to the scan root.
    pub output_dir: PathBuf,
    pub resource_file: String,
    pub lookup_file: String,
    pub component_type: String,
    pub material: String,
    pub url_prefix: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            scene_extension: ".spinescene".to_string(),
            excluded_paths: vec![
                "assets/template/template.spinescene".to_string(),
                "editor/resources/templates/template.spinescene".to_string(),
            ],
            output_dir: PathBuf::from("spine_tester").join("generated"),
            resource_file: "go.go".to_string(),
            lookup_file: "data.lua".to_string(),
            component_type: "spinemodel".to_string(),
            material: "/defold-spine/assets/spine.material".to_string(),
            url_prefix: "/go#".to_string(),
        }
    }
}

impl GeneratorSettings {
    pub fn load() -> Self {
        match confy::load(CONFY_APP_NAME, "generator") {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Falling back to default generator settings: {e}");
                Self::default()
            }
        }
    }

    pub fn resource_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.resource_file)
    }

    pub fn lookup_path(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir).join(&self.lookup_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_locations() {
        let settings = GeneratorSettings::default();
        let root = Path::new("/project");
        assert_eq!(
            settings.resource_path(root),
            PathBuf::from("/project/spine_tester/generated/go.go")
        );
        assert_eq!(
            settings.lookup_path(root),
            PathBuf::from("/project/spine_tester/generated/data.lua")
        );
    }
}
