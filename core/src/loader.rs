//! Extraction of `<DOC>` records from raw corpus text.
//!
//! A unit of corpus content embeds any number of records:
//!
//! ```text
//! <DOC>
//! <DOCNO> AP890101-0001 </DOCNO>
//! <TEXT>
//!    body, possibly over many lines
//! </TEXT>
//! </DOC>
//! ```

use crate::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    static ref DOC_RE: Regex = Regex::new(r"(?s)<DOC>(.*?)</DOC>").expect("valid regex");
    static ref DOCNO_RE: Regex = Regex::new(r"(?s)<DOCNO>(.*?)</DOCNO>").expect("valid regex");
    static ref TEXT_RE: Regex = Regex::new(r"(?s)<TEXT>(.*?)</TEXT>").expect("valid regex");
}

/// One record, borrowed from the unit it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    pub original_id: &'a str,
    pub text: &'a str,
}

/// Lazily yield the documents in `content`.
///
/// A record whose `<DOCNO>` is missing or blank yields [`Error::MissingDocNo`].
/// A record without `<TEXT>`, or with only whitespace in it, is skipped.
/// Only the first `<TEXT>` field of a record is used.
pub fn parse_documents(content: &str) -> impl Iterator<Item = Result<Document<'_>>> + '_ {
    DOC_RE.captures_iter(content).enumerate().filter_map(|(i, caps)| {
        let block = caps.get(1).map_or("", |m| m.as_str());
        let original_id = match field(&DOCNO_RE, block) {
            Some(id) if !id.is_empty() => id,
            _ => return Some(Err(Error::MissingDocNo { record: i + 1 })),
        };
        match field(&TEXT_RE, block) {
            Some(text) if !text.is_empty() => Some(Ok(Document { original_id, text })),
            _ => None,
        }
    })
}

fn field<'a>(re: &Regex, block: &'a str) -> Option<&'a str> {
    re.captures(block).and_then(|c| c.get(1)).map(|m| m.as_str().trim())
}

/// Decode ISO-8859-1 bytes. Every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> Cow<'_, str> {
    encoding_rs::mem::decode_latin1(bytes)
}
