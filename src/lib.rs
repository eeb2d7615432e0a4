use anyhow::{Context, Result};

use std::env;
use std::io::Write;

pub mod error;
mod input;
pub mod names;
pub mod search;
pub mod validate;

pub use error::{DuplicateGroup, FindError};

const MANUAL: &str = "\
================================================================================================
                                         User Manuals
NAME
   findnames namesFile targetFile ...
DESCRIPTION
   Indicate which given files have occurrence of the names given by the namesFile.
================================================================================================";

#[derive(Debug, Default, Clone, Copy)]
pub struct SearchOptions {
    /// Drop blank lines from the names file instead of treating them as empty names.
    pub skip_blank: bool,
}

#[derive(Debug)]
pub enum Outcome {
    Completed,
    Aborted(FindError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Runs the whole pipeline, writing the report to `out`.
///
/// `paths` holds the names file followed by the targets. Problems with the
/// inputs are reported to `out` and come back as [`Outcome::Aborted`]; the
/// `Err` case is reserved for failing to write the report itself.
pub fn run(paths: &[String], options: SearchOptions, out: &mut impl Write) -> Result<Outcome> {
    print_working_directory(out)?;

    match search_all(paths, options, out) {
        Ok(()) => {
            writeln!(out, "[INFO] File search complete")?;
            Ok(Outcome::Completed)
        }
        Err(SearchAbort::Input(err)) => {
            log::debug!("aborting: {err:?}");
            writeln!(out, "[ERROR] {err}")?;
            if err.wants_usage() {
                writeln!(out, "{MANUAL}")?;
            }
            Ok(Outcome::Aborted(err))
        }
        Err(SearchAbort::Output(err)) => Err(err),
    }
}

enum SearchAbort {
    Input(FindError),
    Output(anyhow::Error),
}

impl From<FindError> for SearchAbort {
    fn from(err: FindError) -> Self {
        SearchAbort::Input(err)
    }
}

impl From<std::io::Error> for SearchAbort {
    fn from(err: std::io::Error) -> Self {
        SearchAbort::Output(anyhow::Error::new(err).context("failed to write report"))
    }
}

fn search_all(
    paths: &[String],
    options: SearchOptions,
    out: &mut impl Write,
) -> std::result::Result<(), SearchAbort> {
    validate::validate_arguments(paths)?;
    writeln!(out, "[INFO] No errors found with the file\n")?;

    let names = names::load_names(&paths[0], options.skip_blank)?;
    for target in &paths[1..] {
        for name in search::search_file(target, &names)? {
            writeln!(out, "Name <{name}> in: ")?;
            writeln!(out, "{target}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_working_directory(out: &mut impl Write) -> Result<()> {
    let cwd = env::current_dir().context("cannot resolve current working directory")?;
    writeln!(out, "[INFO] Current working directory: ")?;
    writeln!(out, "{}", cwd.display())?;
    writeln!(out)?;
    Ok(())
}
