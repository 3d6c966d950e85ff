use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Where command output goes.
pub(crate) struct Output {
    pub(crate) writer: Box<dyn Write>,
    /// True when writing to the terminal or a pipe rather than a file.
    pub(crate) is_stdout: bool,
}

fn is_stdio(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p == Path::new("-"))
}

/// Opens `path` for reading, or stdin if it is absent or `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub(crate) fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(p) if !is_stdio(path) => Ok(Box::new(BufReader::new(File::open(p)?))),
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// Opens `path` for writing, or stdout if it is absent or `-`.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub(crate) fn open_output(path: Option<&Path>) -> io::Result<Output> {
    match path {
        Some(p) if !is_stdio(path) => Ok(Output {
            writer: Box::new(BufWriter::new(File::create(p)?)),
            is_stdout: false,
        }),
        _ => Ok(Output {
            writer: Box::new(BufWriter::new(io::stdout().lock())),
            is_stdout: true,
        }),
    }
}

/// Reads the whole of `reader` as text and strips surrounding whitespace,
/// so input produced by `encode` (which ends with a newline on stdout) can
/// be fed straight back.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub(crate) fn read_encoded<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let trimmed = text.trim();
    if trimmed.len() == text.len() {
        Ok(text)
    } else {
        Ok(trimmed.to_owned())
    }
}
