use log::debug;

use crate::error::{FindError, Result};
use crate::input::read_path;

/// Reads the names file and splits it into one name per line.
///
/// Fails with [`FindError::EmptyNamesFile`] when nothing but whitespace is left
/// after trimming. With `skip_blank` unset, blank lines are kept as empty names,
/// which match every target.
pub fn load_names(path: &str, skip_blank: bool) -> Result<Vec<String>> {
    let content = read_path(path)?;
    if content.trim().is_empty() {
        return Err(FindError::EmptyNamesFile);
    }

    let mut names = split_names(&content);
    if skip_blank {
        names.retain(|name| !name.is_empty());
    }
    debug!("loaded {} names from {path}", names.len());
    Ok(names)
}

/// Splits on `\r\n`, `\n` or a lone `\r`. Trailing empty lines are dropped,
/// blank lines in between are not.
pub fn split_names(content: &str) -> Vec<String> {
    let mut names: Vec<String> = content
        .replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect();
    while names.last().is_some_and(String::is_empty) {
        names.pop();
    }
    names
}
