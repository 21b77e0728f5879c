//! RPN Boolean query evaluation.
//!
//! A query is a whitespace-separated token list such as `cat dog AND bird NOT`.
//! Terms push their posting list; an operator pops the right then the left
//! operand and pushes `left <op> right`. `NOT` is binary: `left AND NOT right`.

use crate::algebra::{difference, intersect, union};
use crate::{DocId, InvertedIndex, QueryError};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
    Not,
}

impl Operator {
    /// Operators are the literal upper-case tokens `AND`, `OR`, `NOT`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "NOT" => Some(Operator::Not),
            _ => None,
        }
    }

    pub fn apply(self, left: &[DocId], right: &[DocId]) -> Vec<DocId> {
        match self {
            Operator::And => intersect(left, right),
            Operator::Or => union(left, right),
            Operator::Not => difference(left, right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Term(&'a str),
    Operator(Operator),
}

pub fn parse(query: &str) -> Vec<Token<'_>> {
    query
        .split_whitespace()
        .map(|t| Operator::from_token(t).map_or(Token::Term(t), Token::Operator))
        .collect()
}

/// Evaluate `query` against `index`, returning sorted internal ids.
pub fn evaluate(index: &InvertedIndex, query: &str) -> Result<Vec<DocId>, QueryError> {
    evaluate_tokens(index, &parse(query))
}

pub fn evaluate_tokens(index: &InvertedIndex, tokens: &[Token<'_>]) -> Result<Vec<DocId>, QueryError> {
    // Term lists are borrowed straight from the index; only merge results are owned.
    let mut stack: Vec<Cow<'_, [DocId]>> = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        match *token {
            Token::Term(term) => stack.push(Cow::Borrowed(index.postings(term))),
            Token::Operator(operator) => {
                if stack.len() < 2 {
                    return Err(QueryError::MissingOperands { operator, position: position + 1, available: stack.len() });
                }
                let right = stack.pop().unwrap_or_default();
                let left = stack.pop().unwrap_or_default();
                stack.push(Cow::Owned(operator.apply(&left, &right)));
            }
        }
    }
    match stack.len() {
        0 => Err(QueryError::Empty),
        1 => Ok(stack.pop().unwrap_or_default().into_owned()),
        remaining => Err(QueryError::DanglingOperands { remaining }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndexBuilder, TokenizerConfig};

    fn animals() -> InvertedIndex {
        let mut b = IndexBuilder::new(TokenizerConfig::default());
        for (id, text) in [("D1", "cat dog"), ("D2", "dog bird"), ("D3", "bird fish cat")] {
            let internal = b.assign_internal_id(id).unwrap();
            b.absorb(text.split(' '), internal).unwrap();
        }
        b.finish()
    }

    #[test]
    fn parse_recognizes_only_upper_case_operators() {
        assert_eq!(
            parse("  cat and\tdog AND "),
            vec![Token::Term("cat"), Token::Term("and"), Token::Term("dog"), Token::Operator(Operator::And)]
        );
    }

    #[test]
    fn operators_take_left_then_right() {
        let idx = animals();
        assert_eq!(evaluate(&idx, "cat dog AND").unwrap(), vec![1]);
        assert_eq!(evaluate(&idx, "cat bird OR").unwrap(), vec![1, 2, 3]);
        assert_eq!(evaluate(&idx, "dog cat NOT").unwrap(), vec![2]);
        assert_eq!(evaluate(&idx, "cat dog NOT").unwrap(), vec![3]);
    }

    #[test]
    fn nested_expression() {
        let idx = animals();
        // (cat OR dog) AND NOT (bird AND fish)
        assert_eq!(evaluate(&idx, "cat dog OR bird fish AND NOT").unwrap(), vec![1, 2]);
    }

    #[test]
    fn single_term_and_unknown_term() {
        let idx = animals();
        assert_eq!(evaluate(&idx, "bird").unwrap(), vec![2, 3]);
        assert_eq!(evaluate(&idx, "elephant").unwrap(), Vec::<DocId>::new());
        assert_eq!(evaluate(&idx, "cat elephant OR").unwrap(), vec![1, 3]);
    }

    #[test]
    fn malformed_queries_are_reported() {
        let idx = animals();
        assert_eq!(
            evaluate(&idx, "cat AND"),
            Err(QueryError::MissingOperands { operator: Operator::And, position: 2, available: 1 })
        );
        assert_eq!(
            evaluate(&idx, "OR"),
            Err(QueryError::MissingOperands { operator: Operator::Or, position: 1, available: 0 })
        );
        assert_eq!(evaluate(&idx, "cat dog"), Err(QueryError::DanglingOperands { remaining: 2 }));
        assert_eq!(evaluate(&idx, "   "), Err(QueryError::Empty));
    }
}
