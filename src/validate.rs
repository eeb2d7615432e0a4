use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, trace};

use crate::error::{DuplicateGroup, FindError, Result};

/// Checks the argument list before any searching happens.
///
/// Needs a names file plus at least one target, every path must exist and open
/// for reading, and no two arguments (names file included) may share a byte size.
pub fn validate_arguments(paths: &[String]) -> Result<()> {
    match paths.len() {
        0 => return Err(FindError::NoArguments),
        1 => return Err(FindError::SingleArgument),
        _ => {}
    }

    let mut sizes = Vec::with_capacity(paths.len());
    for path in paths {
        let size = readable_size(path)?;
        trace!("{path}: {size} bytes");
        sizes.push((file_name(path), size));
    }

    let groups = group_by_size(sizes);
    if groups.is_empty() {
        debug!("{} arguments validated", paths.len());
        Ok(())
    } else {
        Err(FindError::DuplicateFiles(groups))
    }
}

fn readable_size(path: &str) -> Result<u64> {
    if !Path::new(path).exists() {
        return Err(FindError::FileNotFound(path.to_string()));
    }
    let unreadable = |_: io::Error| FindError::FileUnreadable(path.to_string());
    let file = File::open(path).map_err(unreadable)?;
    let metadata = file.metadata().map_err(unreadable)?;
    Ok(metadata.len())
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Buckets names by size, smallest size first, keeping argument order within a
/// bucket. Only buckets holding more than one name are returned.
pub fn group_by_size(entries: impl IntoIterator<Item = (String, u64)>) -> Vec<DuplicateGroup> {
    let mut buckets: BTreeMap<u64, Vec<String>> = BTreeMap::new();
    for (name, size) in entries {
        buckets.entry(size).or_default().push(name);
    }
    buckets
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(size, files)| DuplicateGroup { size, files })
        .collect()
}
