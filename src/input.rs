use std::fs::File;
use std::io::{self, Read};

use crate::error::{FindError, Result};

fn read_text(mut input: impl Read) -> io::Result<String> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Loads a whole file as UTF-8 text, replacing invalid sequences.
/// The handle is closed before this returns.
pub fn read_path(path: &str) -> Result<String> {
    let failure = |source: io::Error| FindError::ReadFailure {
        path: path.to_string(),
        source,
    };
    let file = File::open(path).map_err(failure)?;
    read_text(file).map_err(failure)
}
