use log::debug;

use crate::error::Result;
use crate::input::read_path;

/// Names contained in `content`, in list order. Plain case-sensitive substring
/// test, so each name shows up at most once however often it occurs.
pub fn matching_names<'a>(content: &str, names: &'a [String]) -> Vec<&'a str> {
    names
        .iter()
        .map(String::as_str)
        .filter(|name| content.contains(*name))
        .collect()
}

pub fn search_file<'a>(path: &str, names: &'a [String]) -> Result<Vec<&'a str>> {
    let content = read_path(path)?;
    let found = matching_names(&content, names);
    debug!("{path}: {} of {} names matched", found.len(), names.len());
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FindError;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn finds_names_in_list_order() {
        let list = names(&["Jones", "Adams", "Baker", "Smith"]);
        let content = "Baker met Adams, then Jones. Adams left.";
        assert_eq!(matching_names(content, &list), vec!["Jones", "Adams", "Baker"]);
    }

    #[test]
    fn match_is_case_sensitive_substring() {
        let list = names(&["adams", "Ada", "Adams Baker"]);
        assert_eq!(matching_names("Adamson", &list), vec!["Ada"]);
    }

    #[test]
    fn empty_name_matches_anything() {
        let list = names(&["", "Adams"]);
        assert_eq!(matching_names("nothing here", &list), vec![""]);
    }

    #[test]
    fn no_matches_for_unrelated_text() {
        let list = names(&["Adams", "Baker"]);
        assert!(matching_names("lorem ipsum", &list).is_empty());
    }

    #[test]
    fn searches_file_on_disk() {
        let list = names(&["Adams", "Baker", "Jones", "Smith"]);
        let found = search_file("tests/data/MultipleNameMatch.txt", &list).unwrap();
        assert_eq!(found, vec!["Adams", "Baker", "Jones"]);
    }

    #[test]
    fn missing_target_is_read_failure() {
        let list = names(&["Adams"]);
        let err = search_file("tests/data/nope.txt", &list).unwrap_err();
        assert!(matches!(err, FindError::ReadFailure { .. }));
    }
}
