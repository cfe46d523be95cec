use std::path::{Path, PathBuf};

/// A discovered scene description, addressed by its slash-prefixed path
/// relative to the scan root (`/characters/hero/hero.spinescene`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFile {
    path: String,
}

impl SceneFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// File name with the scene extension removed.
    pub fn base_name(&self, extension: &str) -> &str {
        let name = self.path.rsplit('/').next().unwrap_or(&self.path);
        name.strip_suffix(extension).unwrap_or(name)
    }

    pub fn location(&self, root: &Path) -> PathBuf {
        resolve_project_path(root, &self.path)
    }
}

/// Joins a project path such as `/data/hero.json` onto the scan root.
pub fn resolve_project_path(root: &Path, project_path: &str) -> PathBuf {
    root.join(project_path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_extension_only_at_end() {
        let scene = SceneFile::new("/chars/hero.spinescene");
        assert_eq!(scene.base_name(".spinescene"), "hero");

        let scene = SceneFile::new("/odd.spinescene.bak.spinescene");
        assert_eq!(scene.base_name(".spinescene"), "odd.spinescene.bak");
    }

    #[test]
    fn location_ignores_leading_slashes() {
        let root = Path::new("/project");
        assert_eq!(
            SceneFile::new("/a/b.spinescene").location(root),
            PathBuf::from("/project/a/b.spinescene")
        );
        assert_eq!(
            resolve_project_path(root, "//data/hero.json"),
            PathBuf::from("/project/data/hero.json")
        );
    }
}
