//! Batch evaluation of a query file into a result file.

use crate::query::evaluate;
use crate::{InvertedIndex, QueryError, Result};
use rayon::prelude::*;
use std::io::{BufRead, Write};

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Non-blank query lines evaluated.
    pub queries: usize,
    /// `(1-based input line, error)` for every query that could not be evaluated.
    pub failures: Vec<(usize, QueryError)>,
}

/// Evaluate one RPN query per non-blank line of `queries` and write one result line each.
///
/// Result lines are the space-joined original ids in internal id order. A malformed
/// query is logged, recorded in the report and written as an empty line so that
/// output stays aligned with input. Translation and write failures abort the batch.
pub fn run_batch<R: BufRead, W: Write>(index: &InvertedIndex, queries: R, mut out: W) -> Result<BatchReport> {
    let mut lines = Vec::new();
    for (i, line) in queries.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((i + 1, line));
        }
    }

    let results: Vec<_> = lines.par_iter().map(|(_, query)| evaluate(index, query)).collect();

    let mut report = BatchReport { queries: lines.len(), failures: Vec::new() };
    for ((line_no, query), result) in lines.iter().zip(results) {
        match result {
            Ok(ids) => {
                tracing::debug!(line = line_no, query = query.trim(), hits = ids.len(), "evaluated query");
                let originals = index.translate(&ids)?;
                writeln!(out, "{}", originals.join(" "))?;
            }
            Err(err) => {
                tracing::warn!(line = line_no, query = query.trim(), error = %err, "skipping malformed query");
                writeln!(out)?;
                report.failures.push((*line_no, err));
            }
        }
    }
    out.flush()?;
    Ok(report)
}
