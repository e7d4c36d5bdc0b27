//! Line scanner for `name=value` files.
//!
//! Each line is cut at the first `#`, truncated to the configured limit and
//! stripped of trailing spaces and NUL bytes. Bytes past the limit are
//! skipped up to the next newline without being buffered.

use std::io::{self, BufRead};

/// Default maximum number of bytes kept from one line.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

/// One scanned line, borrowed from the scanner's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based physical line number
    pub number: usize,
    pub text: &'a [u8],
}

impl Line<'_> {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Reads lines one at a time, reusing a single buffer.
#[derive(Debug)]
pub struct LineScanner {
    limit: Option<usize>,
    buf: Vec<u8>,
    line_number: usize,
}

impl LineScanner {
    /// Create a scanner. `None` means lines are never truncated.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            buf: Vec::with_capacity(limit.unwrap_or(DEFAULT_MAX_LINE_LEN)),
            line_number: 0,
        }
    }

    /// Read the next line, or `None` at end of stream.
    ///
    /// A final line without a trailing newline is still returned.
    pub fn next_line<R: BufRead + ?Sized>(
        &mut self,
        reader: &mut R,
    ) -> io::Result<Option<Line<'_>>> {
        self.buf.clear();
        let mut read_any = false;
        let mut in_comment = false;

        loop {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if chunk.is_empty() {
                break;
            }
            read_any = true;

            let (segment, used, at_newline) = match chunk.iter().position(|&b| b == b'\n') {
                Some(i) => (&chunk[..i], i + 1, true),
                None => (chunk, chunk.len(), false),
            };

            if !in_comment {
                let kept = match segment.iter().position(|&b| b == b'#') {
                    Some(hash) => {
                        in_comment = true;
                        &segment[..hash]
                    }
                    None => segment,
                };
                let room = match self.limit {
                    Some(limit) => limit.saturating_sub(self.buf.len()).min(kept.len()),
                    None => kept.len(),
                };
                self.buf.extend_from_slice(&kept[..room]);
            }

            reader.consume(used);
            if at_newline {
                break;
            }
        }

        if !read_any {
            return Ok(None);
        }

        while matches!(self.buf.last(), Some(b' ') | Some(0)) {
            self.buf.pop();
        }
        self.line_number += 1;

        Ok(Some(Line {
            number: self.line_number,
            text: &self.buf,
        }))
    }
}
