//! Forward-only line reader with a single line of pushback.

use std::str::SplitInclusive;

use crate::{
    error::{Detail, Error},
    model::Location,
};

/// A line of input, terminator included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub(crate) text: &'a str,
    /// 1-based line number.
    pub(crate) number: usize,
    /// Byte offset of the line in the input.
    pub(crate) offset: usize,
}

impl Line<'_> {
    pub(crate) fn location(&self) -> Location {
        let content = self.text.trim_end_matches(['\n', '\r']);
        Location::new(self.number, self.offset, self.offset + content.len())
    }

    pub(crate) fn detail(&self) -> Detail {
        Detail::from(self.location())
    }

    /// The line without its terminator.
    pub(crate) fn content(&self) -> &str {
        self.text.trim_end_matches(['\n', '\r'])
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug)]
pub(crate) struct LineSource<'a> {
    lines: SplitInclusive<'a, char>,
    pending: Option<Line<'a>>,
    number: usize,
    offset: usize,
    last: Option<Location>,
}

impl<'a> LineSource<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            lines: input.split_inclusive('\n'),
            pending: None,
            number: 0,
            offset: 0,
            last: None,
        }
    }

    /// Re-queue a line that was read one step too far.
    ///
    /// Only one line may be pending at a time.
    pub(crate) fn pushback(&mut self, line: Line<'a>) -> Result<(), Error> {
        if self.pending.is_some() {
            tracing::error!(line = line.number, "pushback requested with a line already pending");
            return Err(Error::PushbackOverflow(line.detail()));
        }
        tracing::trace!(line = line.number, "pushback");
        self.pending = Some(line);
        Ok(())
    }

    /// Location of the most recently returned line, or of the start of input.
    pub(crate) fn location(&self) -> Location {
        self.last.unwrap_or_else(|| Location::new(self.number, self.offset, self.offset))
    }

    pub(crate) fn detail(&self) -> Detail {
        Detail::from(self.location())
    }
}

impl<'a> Iterator for LineSource<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.pending.take() {
            Some(line) => line,
            None => {
                let text = self.lines.next()?;
                self.number += 1;
                let line = Line {
                    text,
                    number: self.number,
                    offset: self.offset,
                };
                self.offset += text.len();
                line
            }
        };
        self.last = Some(line.location());
        Some(line)
    }
}
