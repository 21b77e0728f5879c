//! Command-line arguments shared by the binaries that build an index.

use crate::{IndexBuilder, InvertedIndex, Result, TokenizerConfig, TokenizerKind};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Corpus path: a file, a .zip archive or a directory of them
    #[arg(long, default_value = "data")]
    pub corpus: PathBuf,
    /// Term splitting policy
    #[arg(long, value_enum, default_value_t = TokenizerKind::Word)]
    pub tokenizer: TokenizerKind,
    /// NFKC-normalize and lowercase terms (index and queries)
    #[arg(long, default_value_t = false)]
    pub case_fold: bool,
}

impl IndexArgs {
    pub fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig { kind: self.tokenizer, case_fold: self.case_fold }
    }

    /// Build an in-memory index over `corpus`.
    pub fn build_index(&self) -> Result<InvertedIndex> {
        let start = Instant::now();
        let mut builder = IndexBuilder::new(self.tokenizer_config());
        builder.index_corpus(&self.corpus)?;
        let index = builder.finish();
        tracing::info!(
            docs = index.num_docs(),
            terms = index.num_terms(),
            took_s = start.elapsed().as_secs_f64(),
            "index build complete"
        );
        Ok(index)
    }
}
