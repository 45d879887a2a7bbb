use clausewise_core::{CoreError, normalize};

/// A normalised document ready for rule evaluation.
///
/// Holds both the normalised text (for evidence and captures) and its
/// lower-cased form (for presence checks), so each is computed once.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    lower: String,
}

impl Document {
    /// Normalise `raw`; fails when nothing but whitespace remains.
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(CoreError::EmptyDocument);
        }
        let lower = text.to_lowercase();
        Ok(Self { text, lower })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Length in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
