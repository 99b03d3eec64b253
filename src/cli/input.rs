//! Resolve command text from arguments, files, or standard input.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use tracing::debug;

use super::{CompareArgs, TextArgs};
use crate::error::{HgError, Result, ResultExt};

impl TextArgs {
    /// Read the text this command operates on.
    pub fn read(&self) -> Result<String> {
        self.read_from(io::stdin())
    }

    /// Same as [`Self::read`] with an explicit stdin stand-in.
    pub fn read_from<R: Read>(&self, stdin: R) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return read_file(path);
        }
        read_all(stdin)
    }
}

impl CompareArgs {
    /// Read both sides of a comparison.
    ///
    /// A side given as a file takes no positional text; positional texts fill
    /// the remaining sides in order. Leftover texts are rejected.
    pub fn read_pair(&self) -> Result<(String, String)> {
        let mut texts = [self.text1.as_deref(), self.text2.as_deref()]
            .into_iter()
            .flatten();
        let first = side(self.file1.as_deref(), &mut texts, 1)?;
        let second = side(self.file2.as_deref(), &mut texts, 2)?;
        if let Some(extra) = texts.next() {
            return Err(HgError::ExtraInput(format!(
                "text '{extra}' given but both sides are already set"
            )));
        }
        Ok((first, second))
    }
}

fn side<'a>(
    file: Option<&Path>,
    texts: &mut impl Iterator<Item = &'a str>,
    which: u8,
) -> Result<String> {
    if let Some(path) = file {
        return read_file(path);
    }
    texts.next().map(str::to_string).ok_or_else(|| {
        HgError::MissingInput(format!(
            "text {which} not given (pass it as an argument or with --file{which})"
        ))
    })
}

fn read_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading text from file");
    fs::read_to_string(path).map_err(|e| {
        HgError::MissingInput(format!("cannot read {}: {e}", path.display()))
    })
}

fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| "reading standard input")?;
    debug!(bytes = text.len(), "Read text from stdin");
    Ok(text)
}

/// True when stdin is an interactive terminal (nothing piped in).
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}
