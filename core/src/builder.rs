use crate::corpus;
use crate::index::DocIdMap;
use crate::loader::{parse_documents, Document};
use crate::tokenizer::{Tokenizer, TokenizerConfig};
use crate::{DocId, Error, InvertedIndex, Result};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::path::Path;

/// Owns the index while it is being built.
///
/// Internal ids are handed out in arrival order and each document is absorbed
/// once, in id order, so every posting list is appended to in increasing order
/// and never needs sorting.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    tokenizer: Tokenizer,
    postings: IndexMap<String, Vec<DocId>>,
    doc_ids: DocIdMap,
    last_absorbed: DocId,
}

impl IndexBuilder {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { tokenizer: Tokenizer::new(config), ..Self::default() }
    }

    pub fn num_docs(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn assign_internal_id(&mut self, original_id: &str) -> Result<DocId> {
        let original_id = original_id.trim();
        if original_id.is_empty() {
            return Err(Error::EmptyDocId);
        }
        Ok(self.doc_ids.push(original_id.to_owned()))
    }

    /// Add `internal_id` to the posting list of every distinct term in `tokens`.
    pub fn absorb<I>(&mut self, tokens: I, internal_id: DocId) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if !self.doc_ids.contains(internal_id) {
            return Err(Error::UnregisteredDocId(internal_id));
        }
        if internal_id <= self.last_absorbed {
            return Err(Error::OutOfOrderAbsorb { id: internal_id, last: self.last_absorbed });
        }
        self.last_absorbed = internal_id;

        for token in tokens {
            let term = token.as_ref();
            match self.postings.get_mut(term) {
                // ids only grow, so a repeat within this document is already the last posting
                Some(list) if list.last() == Some(&internal_id) => {}
                Some(list) => list.push(internal_id),
                None => {
                    self.postings.insert(term.to_owned(), vec![internal_id]);
                }
            }
        }
        Ok(())
    }

    pub fn add_document(&mut self, doc: Document<'_>) -> Result<DocId> {
        let internal_id = self.assign_internal_id(doc.original_id)?;
        let tokens = self.tokenizer.tokenize(doc.text);
        self.absorb(&tokens, internal_id)?;
        Ok(internal_id)
    }

    /// Index every record of one unit of corpus content and return how many were added.
    ///
    /// All records are parsed before any id is assigned, so a malformed record
    /// leaves the builder untouched. Tokenizing runs in parallel; id assignment
    /// and absorption stay sequential.
    pub fn index_content(&mut self, content: &str) -> Result<usize> {
        let docs = parse_documents(content).collect::<Result<Vec<_>>>()?;
        let tokenizer = self.tokenizer;
        let tokenized: Vec<Vec<String>> = docs.par_iter().map(|doc| tokenizer.tokenize(doc.text)).collect();
        for (doc, tokens) in docs.iter().zip(&tokenized) {
            let internal_id = self.assign_internal_id(doc.original_id)?;
            self.absorb(tokens, internal_id)?;
        }
        Ok(docs.len())
    }

    /// Index a corpus file, zip archive or directory tree. Any error aborts the build.
    pub fn index_corpus(&mut self, path: &Path) -> Result<usize> {
        let mut added = 0;
        let units = corpus::visit_units(path, |unit, content| {
            let n = self.index_content(content)?;
            tracing::debug!(unit, docs = n, "indexed unit");
            added += n;
            Ok(())
        })?;
        tracing::info!(units, docs = added, terms = self.postings.len(), "indexed corpus");
        Ok(added)
    }

    pub fn finish(self) -> InvertedIndex {
        let index = InvertedIndex::from_parts(self.postings, self.doc_ids, self.tokenizer);
        debug_assert!(index.check_invariants().is_ok());
        index
    }
}
