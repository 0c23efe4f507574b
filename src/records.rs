// src/records.rs
//! Line-oriented reader shared by the graph and building loaders.
//!
//! Both input formats are a count header followed by whitespace-separated
//! records. Blank lines are skipped; line numbers are 1-based and refer to
//! the original text.

use crate::error::{CampusError, Result};
use std::str::FromStr;

/// A non-blank input line with its 1-based line number.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub line: usize,
    pub text: &'a str,
}

impl<'a> Record<'a> {
    /// Splits the record into exactly `N` whitespace-separated tokens.
    ///
    /// # Errors
    /// Returns `Parse` if the token count differs.
    pub fn fields<const N: usize>(&self, origin: &str) -> Result<[&'a str; N]> {
        let tokens: Vec<&'a str> = self.text.split_whitespace().collect();
        let found = tokens.len();
        tokens.try_into().map_err(|_| {
            CampusError::parse(origin, self.line, format!("expected {N} fields, found {found}"))
        })
    }
}

/// Parses `token` as a number, naming `what` in the error.
///
/// # Errors
/// Returns `Parse` if the token is not a valid `T`.
pub fn number<T: FromStr>(token: &str, what: &str, origin: &str, line: usize) -> Result<T> {
    token.parse().map_err(|_| {
        let message = if token.starts_with('-') && token[1..].parse::<f64>().is_ok() {
            format!("negative {what} '{token}'")
        } else {
            format!("{what} '{token}' is not a non-negative integer")
        };
        CampusError::parse(origin, line, message)
    })
}

/// The leading count line of a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub count: usize,
    pub line: usize,
}

/// Reads the count header and returns it with the remaining records.
///
/// # Errors
/// Returns `Parse` if the input has no header or the header is not a count.
pub fn split_header<'a>(
    source: &'a str,
    origin: &str,
    what: &str,
) -> Result<(Header, Vec<Record<'a>>)> {
    let mut records = source
        .lines()
        .enumerate()
        .map(|(idx, text)| Record { line: idx + 1, text: text.trim() })
        .filter(|r| !r.text.is_empty());

    let Some(header) = records.next() else {
        return Err(CampusError::parse(origin, 1, format!("missing {what} count")));
    };
    let [token] = header.fields::<1>(origin)?;
    let count = number(token, &format!("{what} count"), origin, header.line)?;

    Ok((Header { count, line: header.line }, records.collect()))
}
