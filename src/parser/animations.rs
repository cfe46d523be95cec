use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::GenError;
use crate::model::AnimationSet;

const ANIMATIONS_KEY: &str = "animations";

/// Read a Spine JSON export and return the keys of its top-level
/// `animations` object in declaration order.
///
/// A document without `animations` (or one that is not an object at the top
/// level) has no animations and yields an empty list.
pub fn load_animation_names(path: &Path) -> Result<Vec<String>, GenError> {
    let bytes = fs::read(path).map_err(|e| GenError::from_read(path, e))?;
    let document: Value = serde_json::from_slice(&bytes).map_err(|source| GenError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match document.get(ANIMATIONS_KEY) {
        None => Ok(Vec::new()),
        Some(Value::Object(animations)) => Ok(animations.keys().cloned().collect()),
        Some(_) => Err(GenError::InvalidAnimations {
            path: path.to_path_buf(),
        }),
    }
}

/// Like [`load_animation_names`], but every failure is logged and turned
/// into an empty set so generation can carry on.
pub fn extract_animations(path: &Path) -> AnimationSet {
    match load_animation_names(path) {
        Ok(names) => AnimationSet::new(names),
        Err(e) => {
            log::error!("{e}");
            AnimationSet::default()
        }
    }
}
