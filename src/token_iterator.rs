use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Yields whitespace separated tokens from a reader, one line at a time.
pub struct TokenIterator<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenIterator<R> {
    pub fn new(reader: R) -> Self {
        TokenIterator {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Iterator for TokenIterator<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // End of input
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_string)),
                Err(e) => return Some(Err(e)),
            }
        }
        self.pending.pop_front().map(Ok)
    }
}
