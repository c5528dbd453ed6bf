use crate::error::{PfResult, PhraseForgeError};
use crate::geometry::KeyLayout;
use fastrand::Rng;

/// Source words plus the subset long enough to be drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct WordList {
    source: Vec<String>,
    filtered: Vec<String>,
    min_len: usize,
}

impl WordList {
    /// Keeps words of at least `min_len` characters, preserving order.
    pub fn new(source: Vec<String>, min_len: usize) -> Self {
        let filtered = source
            .iter()
            .filter(|w| w.chars().count() >= min_len)
            .cloned()
            .collect();
        Self {
            source,
            filtered,
            min_len,
        }
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Drops filtered words containing keys the layout cannot type.
    pub fn retain_typeable(&mut self, layout: &KeyLayout) -> usize {
        let before = self.filtered.len();
        self.filtered.retain(|w| layout.can_type_word(w));
        before - self.filtered.len()
    }

    pub fn ensure_non_empty(&self) -> PfResult<()> {
        if self.filtered.is_empty() {
            return Err(PhraseForgeError::EmptyWordList {
                min_len: self.min_len,
            });
        }
        Ok(())
    }
}

/// Builds `n` phrases of `word_count` words drawn uniformly with
/// replacement from `words`, joined by single spaces.
pub fn generate(
    words: &[String],
    n: usize,
    word_count: usize,
    rng: &mut Rng,
) -> PfResult<Vec<String>> {
    if words.is_empty() {
        return Err(PhraseForgeError::EmptyWordPool);
    }

    let mut phrases = Vec::with_capacity(n);
    let mut picked: Vec<&str> = Vec::with_capacity(word_count);
    for _ in 0..n {
        picked.clear();
        picked.extend((0..word_count).map(|_| words[rng.usize(..words.len())].as_str()));
        phrases.push(picked.join(" "));
    }
    Ok(phrases)
}

/// [`generate`] over the filtered half of a [`WordList`].
pub fn generate_from(
    list: &WordList,
    n: usize,
    word_count: usize,
    rng: &mut Rng,
) -> PfResult<Vec<String>> {
    list.ensure_non_empty()?;
    generate(list.filtered(), n, word_count, rng)
}
