//! Read-only collection statistics over a finished index.

use crate::{DocId, InvertedIndex, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Default document-frequency bounds for [`find_similar_terms`] callers.
pub const SIMILAR_MIN_DF: usize = 20;
pub const SIMILAR_MAX_DF: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermFrequency {
    pub term: String,
    pub doc_frequency: usize,
}

/// Two distinct terms that occur in exactly the same documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarTerms {
    pub terms: (String, String),
    pub internal_ids: Vec<DocId>,
    pub original_ids: Vec<String>,
}

/// All terms by document frequency, highest first. Ties keep first-appearance order.
pub fn frequency_ranking(index: &InvertedIndex) -> Vec<TermFrequency> {
    let mut ranking: Vec<TermFrequency> = index
        .terms()
        .map(|(term, postings)| TermFrequency { term: term.to_owned(), doc_frequency: postings.len() })
        .collect();
    ranking.sort_by(|a, b| b.doc_frequency.cmp(&a.doc_frequency));
    ranking
}

pub fn top_terms(index: &InvertedIndex, n: usize) -> Vec<TermFrequency> {
    let mut ranking = frequency_ranking(index);
    ranking.truncate(n);
    ranking
}

/// The `n` least frequent terms, in ranking order (least frequent last).
pub fn bottom_terms(index: &InvertedIndex, n: usize) -> Vec<TermFrequency> {
    let mut ranking = frequency_ranking(index);
    let skip = ranking.len().saturating_sub(n);
    ranking.split_off(skip)
}

/// Find two purely alphabetic terms with identical posting lists.
///
/// With `df_bounds`, only posting lists whose length falls in the range are
/// considered. Terms are scanned in order of first appearance in the corpus and
/// the first collision is reported as `(earlier term, later term)`.
pub fn find_similar_terms(index: &InvertedIndex, df_bounds: Option<RangeInclusive<usize>>) -> Result<Option<SimilarTerms>> {
    let candidates = index
        .terms()
        .filter(|(term, _)| !term.is_empty() && term.chars().all(char::is_alphabetic))
        .filter(|(_, postings)| df_bounds.as_ref().map_or(true, |r| r.contains(&postings.len())));

    let mut first_by_postings: HashMap<&[DocId], &str> = HashMap::new();
    for (term, postings) in candidates {
        if let Some(&first) = first_by_postings.get(postings) {
            let original_ids = index.translate(postings)?.into_iter().map(str::to_owned).collect();
            return Ok(Some(SimilarTerms {
                terms: (first.to_owned(), term.to_owned()),
                internal_ids: postings.to_vec(),
                original_ids,
            }));
        }
        first_by_postings.insert(postings, term);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexBuilder;

    fn index(docs: &[(&str, &str)]) -> InvertedIndex {
        let mut b = IndexBuilder::default();
        for (id, text) in docs {
            let internal = b.assign_internal_id(id).unwrap();
            b.absorb(text.split_whitespace(), internal).unwrap();
        }
        b.finish()
    }

    fn pairs(v: &[TermFrequency]) -> Vec<(&str, usize)> {
        v.iter().map(|t| (t.term.as_str(), t.doc_frequency)).collect()
    }

    #[test]
    fn ranking_orders_by_frequency_then_first_appearance() {
        let idx = index(&[("A", "the sat cat"), ("B", "the dog sat"), ("C", "the end")]);
        assert_eq!(
            pairs(&frequency_ranking(&idx)),
            vec![("the", 3), ("sat", 2), ("cat", 1), ("dog", 1), ("end", 1)]
        );
        assert_eq!(pairs(&top_terms(&idx, 2)), vec![("the", 3), ("sat", 2)]);
        assert_eq!(pairs(&bottom_terms(&idx, 2)), vec![("dog", 1), ("end", 1)]);
        assert_eq!(bottom_terms(&idx, 99).len(), 5);
    }

    #[test]
    fn equal_frequencies_are_not_reordered_alphabetically() {
        let idx = index(&[("A", "zebra yak apple"), ("B", "zebra yak apple")]);
        assert_eq!(pairs(&top_terms(&idx, 3)), vec![("zebra", 2), ("yak", 2), ("apple", 2)]);
        let found = find_similar_terms(&idx, None).unwrap().unwrap();
        assert_eq!(found.terms, ("zebra".to_owned(), "yak".to_owned()));
    }

    #[test]
    fn similar_terms_share_postings() {
        let idx = index(&[("A", "red apple 42"), ("B", "red apple pear 42"), ("C", "pear")]);
        let found = find_similar_terms(&idx, None).unwrap().unwrap();
        assert_eq!(found.terms, ("red".to_owned(), "apple".to_owned()));
        assert_eq!(found.internal_ids, vec![1, 2]);
        assert_eq!(found.original_ids, vec!["A", "B"]);
    }

    #[test]
    fn similar_terms_respect_bounds_and_alphabetic_filter() {
        let idx = index(&[("A", "x1 y1 solo"), ("B", "x1 y1 pair twin"), ("C", "pair twin")]);
        assert!(find_similar_terms(&idx, Some(1..=1)).unwrap().is_none());
        let found = find_similar_terms(&idx, Some(2..=2)).unwrap().unwrap();
        assert_eq!(found.terms, ("pair".to_owned(), "twin".to_owned()));
        assert_eq!(found.original_ids, vec!["B", "C"]);
    }

    #[test]
    fn default_bounds_skip_small_posting_lists() {
        let idx = index(&[("A", "red apple"), ("B", "red apple")]);
        assert!(find_similar_terms(&idx, Some(SIMILAR_MIN_DF..=SIMILAR_MAX_DF)).unwrap().is_none());
        assert!(find_similar_terms(&idx, None).unwrap().is_some());
    }

    #[test]
    fn translation_failure_is_reported() {
        let mut doc_ids = crate::DocIdMap::default();
        doc_ids.push("A".into());
        let postings = indexmap::IndexMap::from([("red".to_string(), vec![1, 4]), ("apple".to_string(), vec![1, 4])]);
        let idx = InvertedIndex::from_parts(postings, doc_ids, crate::Tokenizer::default());
        assert!(matches!(find_similar_terms(&idx, None), Err(crate::Error::UnknownInternalId(4))));
    }
}
