//! Line-oriented input: trims lines and skips blanks and `#` comments.

use crate::error::{Error, Result};
use std::io::BufRead;

pub struct InputReader<R> {
    inner: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// 1-based number of the line most recently returned.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// The next meaningful line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<&str>> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let trimmed = self.buf.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some(self.buf.trim()));
        }
    }

    pub fn expect_line(&mut self, expected: &'static str) -> Result<&str> {
        self.next_line()?.ok_or(Error::UnexpectedEof { expected })
    }

    /// Reads a line holding a single non-negative count.
    pub fn read_count(&mut self, expected: &'static str) -> Result<usize> {
        let text = self.expect_line(expected)?;
        match text.parse::<usize>() {
            Ok(n) => Ok(n),
            Err(_) => {
                let message = format!("expected {expected}, found {text:?}");
                Err(Error::Parse {
                    line: self.line,
                    message,
                })
            }
        }
    }
}
