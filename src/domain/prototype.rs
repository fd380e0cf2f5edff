//! Prototype: new documents are produced by copying a configured template.

use std::fmt;
use std::io::{self, Write};

use super::Locale;

/// Anything that can hand out independent copies of itself.
///
/// `clone_box` makes the capability object safe, so heterogeneous
/// prototypes can sit behind `Box<dyn Prototype>` and still be cloned.
pub trait Prototype: fmt::Debug {
    fn clone_box(&self) -> Box<dyn Prototype>;

    /// Write a one-line description of this prototype.
    fn show(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()>;
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A titled text document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    title: String,
    content: String,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The stock template document in the given language.
    pub fn sample(locale: Locale) -> Self {
        Self::new(locale.sample_title(), locale.sample_content())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

impl Prototype for Document {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn show(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        writeln!(out, "{}", locale.document_line(&self.title, &self.content))
    }
}
