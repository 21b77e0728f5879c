use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").expect("valid regex");
}

/// How raw text is split into terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TokenizerKind {
    /// Maximal runs of word characters (letters, digits, underscore).
    #[default]
    Word,
    /// Whitespace-separated chunks, punctuation kept.
    Whitespace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub kind: TokenizerKind,
    /// NFKC-normalize and lowercase every term. Off by default: terms keep their original case.
    pub case_fold: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Split `text` into terms in text order. Repeated terms are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = self.fold(text);
        match self.config.kind {
            TokenizerKind::Word => WORD_RE.find_iter(&text).map(|m| m.as_str().to_owned()).collect(),
            TokenizerKind::Whitespace => text.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Apply the case policy to a single query term.
    pub fn normalize_term<'a>(&self, term: &'a str) -> Cow<'a, str> {
        self.fold(term)
    }

    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.config.case_fold {
            Cow::Owned(text.nfkc().collect::<String>().to_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Tokenize with the default policy: word runs, case preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Running, runner's run!");
        assert_eq!(t, vec!["Running", "runner", "s", "run"]);
    }

    #[test]
    fn whitespace_keeps_punctuation() {
        let t = Tokenizer::new(TokenizerConfig { kind: TokenizerKind::Whitespace, case_fold: false });
        assert_eq!(t.tokenize("  U.S. officials,\n said "), vec!["U.S.", "officials,", "said"]);
    }

    #[test]
    fn case_fold_applies_to_terms_and_queries() {
        let t = Tokenizer::new(TokenizerConfig { kind: TokenizerKind::Word, case_fold: true });
        assert_eq!(t.tokenize("The CAFÉ"), vec!["the", "café"]);
        assert_eq!(t.normalize_term("Café"), "café");
        assert_eq!(Tokenizer::default().normalize_term("Café"), "Café");
    }
}
