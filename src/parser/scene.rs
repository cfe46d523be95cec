use std::fs;
use std::path::Path;

use crate::error::GenError;

const SPINE_JSON_TOKEN: &str = "spine_json:";

/// Find the data-file reference in the text of a `.spinescene` file.
///
/// Only the first line containing `spine_json:` is considered; its value is
/// the text between the first two double quotes after the token. Returns
/// `Ok(None)` when no line carries the token.
pub fn find_spine_json_reference(text: &str, path: &Path) -> Result<Option<String>, GenError> {
    let Some((index, line)) = text
        .lines()
        .enumerate()
        .find(|(_, line)| line.contains(SPINE_JSON_TOKEN))
    else {
        return Ok(None);
    };

    let malformed = || GenError::MalformedReference {
        path: path.to_path_buf(),
        line: index + 1,
    };

    let start = line.find(SPINE_JSON_TOKEN).ok_or_else(malformed)? + SPINE_JSON_TOKEN.len();
    let mut parts = line[start..].split('"');
    parts.next();
    match (parts.next(), parts.next()) {
        (Some(value), Some(_)) => Ok(Some(value.to_string())),
        _ => Err(malformed()),
    }
}

pub fn read_scene_reference(path: &Path) -> Result<Option<String>, GenError> {
    let text = fs::read_to_string(path).map_err(|e| GenError::from_read(path, e))?;
    find_spine_json_reference(&text, path)
}
