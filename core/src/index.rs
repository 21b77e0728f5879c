use crate::tokenizer::Tokenizer;
use crate::{DocId, Error, Result};
use indexmap::IndexMap;

/// Append-only mapping from internal ids (1-based) to original document ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocIdMap {
    originals: Vec<String>,
}

impl DocIdMap {
    /// Register `original` under the next internal id and return that id.
    pub(crate) fn push(&mut self, original: String) -> DocId {
        self.originals.push(original);
        self.originals.len() as DocId
    }

    pub fn get(&self, id: DocId) -> Option<&str> {
        let slot = id.checked_sub(1)? as usize;
        self.originals.get(slot).map(String::as_str)
    }

    pub fn contains(&self, id: DocId) -> bool {
        id >= 1 && (id as usize) <= self.originals.len()
    }

    pub fn len(&self) -> usize {
        self.originals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.originals.is_empty()
    }

    /// `(internal, original)` pairs in internal id order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> + '_ {
        self.originals.iter().enumerate().map(|(i, o)| (i as DocId + 1, o.as_str()))
    }
}

/// Read-only term index produced by [`IndexBuilder::finish`](crate::IndexBuilder::finish).
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: IndexMap<String, Vec<DocId>>, // first-appearance order; each list strictly increasing
    doc_ids: DocIdMap,
    tokenizer: Tokenizer,
}

impl InvertedIndex {
    pub(crate) fn from_parts(postings: IndexMap<String, Vec<DocId>>, doc_ids: DocIdMap, tokenizer: Tokenizer) -> Self {
        Self { postings, doc_ids, tokenizer }
    }

    /// Posting list of `term` after the index's case policy. Unknown terms give an empty list.
    pub fn postings(&self, term: &str) -> &[DocId] {
        let term = self.tokenizer.normalize_term(term);
        self.postings.get(term.as_ref()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_term(&self, term: &str) -> bool {
        !self.postings(term).is_empty()
    }

    pub fn doc_frequency(&self, term: &str) -> usize {
        self.postings(term).len()
    }

    pub fn num_docs(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }

    /// Every indexed term with its posting list, in order of first appearance in the corpus.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[DocId])> + '_ {
        self.postings.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    pub fn doc_ids(&self) -> &DocIdMap {
        &self.doc_ids
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn original_id(&self, id: DocId) -> Result<&str> {
        self.doc_ids.get(id).ok_or(Error::UnknownInternalId(id))
    }

    /// Map internal ids to original ids, keeping order.
    pub fn translate(&self, ids: &[DocId]) -> Result<Vec<&str>> {
        ids.iter().map(|&id| self.original_id(id)).collect()
    }

    /// Verify that every posting list is strictly increasing and only references registered ids.
    pub fn check_invariants(&self) -> Result<()> {
        for (term, list) in &self.postings {
            if list.windows(2).any(|w| w[0] >= w[1]) {
                return Err(Error::UnsortedPostings { term: term.clone() });
            }
            if let Some(&id) = list.iter().find(|&&id| !self.doc_ids.contains(id)) {
                return Err(Error::UnknownInternalId(id));
            }
        }
        Ok(())
    }
}
