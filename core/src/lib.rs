//! Term-level inverted index over `<DOC>`-tagged corpora with Boolean
//! retrieval driven by postfix (RPN) queries.

pub mod algebra;
pub mod builder;
#[cfg(feature = "clap")]
pub mod cli;
pub mod corpus;
pub mod error;
pub mod index;
pub mod loader;
pub mod query;
pub mod retrieval;
pub mod stats;
pub mod tokenizer;

/// Internal document identifier, dense and assigned from 1 in arrival order.
pub type DocId = u32;

pub use builder::IndexBuilder;
pub use error::{Error, QueryError, Result};
pub use index::{DocIdMap, InvertedIndex};
pub use loader::Document;
pub use tokenizer::{Tokenizer, TokenizerConfig, TokenizerKind};
