//! Reading documents from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use tracing::warn;

/// Minimum characters of text (after trimming) a document must carry.
pub const MIN_CHARS: usize = 50;

/// Upper bound on documents accepted by `rank`.
pub const MAX_DOCUMENTS: usize = 8;

/// A named document ready for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub name: String,
    pub text: String,
}

impl Input {
    /// Wrap `text`, rejecting documents below [`MIN_CHARS`].
    pub fn new(name: impl Into<String>, text: String) -> anyhow::Result<Self> {
        let name = name.into();
        let chars = text.trim().chars().count();
        if chars < MIN_CHARS {
            bail!("{name}: too short ({chars} characters, minimum {MIN_CHARS})");
        }
        Ok(Self { name, text })
    }
}

/// Load one document. `-` reads stdin; files are named by their stem.
pub fn load(path: &Path) -> anyhow::Result<Input> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Input::new("stdin", text);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Input::new(display_name(path), text)
}

/// Load every path, keeping at most [`MAX_DOCUMENTS`].
pub fn load_many(paths: &[impl AsRef<Path>]) -> anyhow::Result<Vec<Input>> {
    if paths.len() > MAX_DOCUMENTS {
        warn!(
            supplied = paths.len(),
            kept = MAX_DOCUMENTS,
            "too many documents, ignoring the extras"
        );
    }
    paths
        .iter()
        .take(MAX_DOCUMENTS)
        .map(|p| load(p.as_ref()))
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_text() {
        let err = Input::new("tiny", "   Too short.   ".into()).unwrap_err();
        assert!(err.to_string().contains("minimum 50"));
    }

    #[test]
    fn accepts_exact_minimum() {
        let text = "x".repeat(MIN_CHARS);
        assert!(Input::new("edge", text).is_ok());
    }

    #[test]
    fn whitespace_does_not_count() {
        let text = format!("  {}  \n", "y".repeat(MIN_CHARS - 1));
        assert!(Input::new("padded", text).is_err());
    }

    #[test]
    fn name_from_file_stem() {
        assert_eq!(display_name(Path::new("/tmp/lease-2024.txt")), "lease-2024");
        assert_eq!(display_name(Path::new("terms")), "terms");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Path::new("/nonexistent/clausewise/terms.txt")).unwrap_err();
        assert!(err.to_string().contains("reading"));
    }
}
