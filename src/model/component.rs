/// Animation names in the order they are declared in the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimationSet {
    names: Vec<String>,
}

impl AnimationSet {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// First declared animation, or `""` when there is none.
    pub fn default_animation(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }
}

impl From<Vec<String>> for AnimationSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    pub identifier: String,
    pub component_url: String,
    pub scene_path: String,
    pub animations: AnimationSet,
}

impl ComponentEntry {
    pub fn new(
        identifier: String,
        url_prefix: &str,
        scene_path: &str,
        animations: AnimationSet,
    ) -> Self {
        Self {
            component_url: format!("{url_prefix}{identifier}"),
            identifier,
            scene_path: scene_path.to_string(),
            animations,
        }
    }
}
