use crate::query::Operator;
use crate::DocId;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A `<DOC>` record without a usable `<DOCNO>`; the corpus is malformed.
    #[error("document record #{record} has no <DOCNO> field")]
    MissingDocNo { record: usize },
    #[error("original document id is empty")]
    EmptyDocId,
    #[error("internal document id {0} was never assigned")]
    UnregisteredDocId(DocId),
    #[error("internal document id {id} absorbed after {last}; postings must be built in id order")]
    OutOfOrderAbsorb { id: DocId, last: DocId },
    /// A posting list references an id missing from the doc id map.
    #[error("internal consistency: no original id for internal document id {0}")]
    UnknownInternalId(DocId),
    #[error("internal consistency: posting list for {term:?} is not strictly increasing")]
    UnsortedPostings { term: String },
    #[error("{unit}: {source}")]
    Unit {
        unit: String,
        #[source]
        source: Box<Error>,
    },
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    pub(crate) fn in_unit(self, unit: impl Into<String>) -> Self {
        Error::Unit { unit: unit.into(), source: Box::new(self) }
    }
}

/// Failure to evaluate a single RPN query. Never fatal for a batch.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("empty query")]
    Empty,
    #[error("operator {operator} at token {position} needs two operands, found {available}")]
    MissingOperands { operator: Operator, position: usize, available: usize },
    #[error("query left {remaining} operands on the stack; expected exactly one")]
    DanglingOperands { remaining: usize },
}
