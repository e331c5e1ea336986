use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{parse_number, Error, Result};
use crate::token_iterator::TokenIterator;

/// A two-sum instance: the sequence to scan and the sum to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub nums: Vec<i32>,
    pub target: i32,
}

impl Problem {
    pub fn new(nums: Vec<i32>, target: i32) -> Self {
        Problem { nums, target }
    }

    /// Opens and parses the input file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("reading problem from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Parses a problem in either of the two supported layouts.
    ///
    /// Plain: the first line holds the sequence, the next token after it is the target.
    ///
    /// ```text
    /// 2 7 11 15
    /// 9
    /// ```
    ///
    /// Parameters: `key = value` assignments, on one line or several.
    ///
    /// ```text
    /// nums = [2,7,11,15], target = 9
    /// ```
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut first_line = String::new();
        reader.read_line(&mut first_line)?;

        if first_line.contains('=') {
            let mut text = first_line;
            reader.read_to_string(&mut text)?;
            return Self::from_parameters(&text);
        }

        let nums = first_line
            .split_whitespace()
            .map(parse_number)
            .collect::<Result<Vec<_>>>()?;

        // Anything after the target is ignored.
        let target = match TokenIterator::new(reader).next() {
            Some(token) => parse_number(&token?)?,
            // Reported, never defaulted to zero.
            None => return Err(Error::MissingTarget),
        };

        log::debug!("parsed {} values, target {}", nums.len(), target);
        Ok(Problem::new(nums, target))
    }

    fn from_parameters(text: &str) -> Result<Self> {
        let nums = assignment(text, "nums").ok_or(Error::MissingNums)?;
        let nums = parse_list(nums)?;

        let target = assignment(text, "target").ok_or(Error::MissingTarget)?;
        let target = target
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .next()
            .filter(|token| !token.is_empty())
            .ok_or(Error::MissingTarget)?;
        let target = parse_number(target)?;

        log::debug!(
            "parsed {} values, target {} from parameters",
            nums.len(),
            target
        );
        Ok(Problem::new(nums, target))
    }
}

/// Returns the text following `key =`, with leading whitespace removed.
fn assignment<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.match_indices(key).find_map(|(at, _)| {
        let standalone = text[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        if !standalone {
            return None;
        }

        text[at + key.len()..]
            .trim_start()
            .strip_prefix('=')
            .map(str::trim_start)
    })
}

/// Parses a `[1,2,3]` or `{1,2,3}` list from the start of `text`.
fn parse_list(text: &str) -> Result<Vec<i32>> {
    let close = match text.chars().next() {
        Some('[') => ']',
        Some('{') => '}',
        _ => return Err(Error::MalformedList(preview(text))),
    };
    let end = text
        .find(close)
        .ok_or_else(|| Error::MalformedList(preview(text)))?;

    text[1..end]
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_number)
        .collect()
}

fn preview(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}
