use snafu::OptionExt;

use super::lexer::{classify, Line};
use super::{error, Result};
use crate::ast::Document;

/// Line-oriented state machine that drives the classifier over an input and
/// populates a [`Document`].
///
/// The parser starts outside of any section; the first key-value line before
/// a `[section]` header is an error rather than an implicit default section.
/// A section header opens (or re-opens) the named section and every
/// following key-value line lands in it until the next header.
pub struct Parser<'source> {
    input: &'source str,
    current: Option<String>,
    document: Document,
}

impl<'source> Parser<'source> {
    pub fn new(input: &'source str) -> Self {
        Self {
            input,
            current: None,
            document: Document::default(),
        }
    }

    /// Consume every line of the input and return the populated document.
    ///
    /// Parsing is all-or-nothing: the first malformed line aborts with an
    /// error carrying its 1-based line number, and the partially populated
    /// document is dropped with the parser.
    pub fn parse(mut self) -> Result<Document> {
        for (index, raw) in self.input.lines().enumerate() {
            let line = index + 1;
            match classify(raw, line)? {
                Line::Blank | Line::Comment => continue,
                Line::Section(name) => {
                    self.document.open_section(name);
                    self.current = Some(name.to_string());
                }
                Line::KeyValue(key, value) => {
                    let section = self
                        .current
                        .as_deref()
                        .context(error::NoSectionSnafu { line })?;
                    self.document
                        .open_section(section)
                        .insert(key.to_string(), value.to_string());
                }
            }
        }
        Ok(self.document)
    }
}
