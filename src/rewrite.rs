use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write}; // RUST LEARNING: Traits must be in scope to call their methods
use std::path::{Path, PathBuf};
use thiserror::Error;

// RUST LEARNING: `{prefix:?}` formats the field with Debug (adds quotes)
// - `.path.display()` refers to the variant's `path` field
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No line containing {prefix:?} in {}", .path.display())]
    PrefixNotFound { prefix: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, RewriteError>;

/// A file and the literal prefix of the line whose value gets replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteTarget {
    pub path: PathBuf,
    pub prefix: String,
}

impl RewriteTarget {
    /// Replace the value after `prefix` with `version`.
    pub fn apply(&self, version: &str) -> Result<()> {
        rewrite_file(&self.path, &self.prefix, version)
    }
}

/// Append `KEY=value` to an environment file such as `$GITHUB_ENV`.
///
/// Appends on every call, so repeated runs leave duplicate lines behind.
/// A file left without a trailing newline by an earlier step gets one first,
/// so the new line never fuses with the previous variable.
pub fn append_env_line<P: AsRef<Path>>(path: P, key: &str, value: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Appending {}={} to {}", key, value, path.display());

    // RUST LEARNING: Builder pattern for opening files with specific modes
    // - Append mode always writes at the end, whatever the read position is
    let mut file = OpenOptions::new()
        .read(true)
        .create(true)
        .append(true)
        .open(path)?;

    if ends_without_newline(&mut file)? {
        writeln!(file)?;
    }
    writeln!(file, "{}={}", key, value)?;
    Ok(())
}

fn ends_without_newline(file: &mut fs::File) -> Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Replace everything after `prefix` up to end-of-line on every line
/// containing it. Returns `None` when no line contains the prefix.
pub fn replace_line_suffix(text: &str, prefix: &str, value: &str) -> Option<String> {
    let mut result = String::with_capacity(text.len() + value.len());
    let mut replaced = false;

    // RUST LEARNING: `split_inclusive` keeps the '\n' on each piece
    // - Lets untouched lines be copied back byte for byte
    for line in text.split_inclusive('\n') {
        match line.find(prefix) {
            Some(start) => {
                let body_len = line
                    .strip_suffix("\r\n")
                    .or_else(|| line.strip_suffix('\n'))
                    .map_or(line.len(), str::len);
                let value_start = start + prefix.len();

                // Never eat into the line terminator.
                let value_start = value_start.min(body_len);
                result.push_str(&line[..value_start]);
                result.push_str(value);
                result.push_str(&line[body_len..]);
                replaced = true;
            }
            None => result.push_str(line),
        }
    }

    replaced.then_some(result)
}

/// Read the whole file, replace the prefixed lines' values and write it back.
///
/// The write is not atomic: an interrupted write can leave a truncated file.
pub fn rewrite_file<P: AsRef<Path>>(path: P, prefix: &str, value: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Rewriting {} after {:?}", path.display(), prefix);

    let contents = fs::read_to_string(path)?;
    let updated =
        replace_line_suffix(&contents, prefix, value).ok_or_else(|| RewriteError::PrefixNotFound {
            prefix: prefix.to_string(),
            path: path.to_path_buf(),
        })?;

    fs::write(path, updated)?;
    debug!("Rewrote {}", path.display());
    Ok(())
}
