//! Template Method: a fixed open/edit/save skeleton with a pluggable edit step.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Locale;

/// Which concrete processor handles a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Pdf,
}

impl DocumentKind {
    pub fn processor(self) -> Box<dyn DocumentProcessor> {
        match self {
            DocumentKind::Text => Box::new(TextDocumentProcessor),
            DocumentKind::Pdf => Box::new(PdfDocumentProcessor),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Text => write!(f, "text"),
            DocumentKind::Pdf => write!(f, "pdf"),
        }
    }
}

/// The primitive steps of document processing.
///
/// `open` and `save` are shared; implementors supply `edit`. The sequence
/// itself lives in [`Process`] and cannot be overridden.
pub trait DocumentProcessor {
    fn kind(&self) -> DocumentKind;

    fn open(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        writeln!(out, "{}", locale.opening())
    }

    fn edit(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()>;

    fn save(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        writeln!(out, "{}", locale.saving())
    }
}

/// The template method.
///
/// Blanket-implemented for every [`DocumentProcessor`], so the open → edit →
/// save order is the same for all of them.
pub trait Process {
    fn process(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()>;
}

impl<P: DocumentProcessor + ?Sized> Process for P {
    fn process(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        debug!(kind = %self.kind(), "processing document");
        self.open(out, locale)?;
        self.edit(out, locale)?;
        self.save(out, locale)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextDocumentProcessor;

impl DocumentProcessor for TextDocumentProcessor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Text
    }

    fn edit(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        writeln!(out, "{}", locale.editing_text())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocumentProcessor;

impl DocumentProcessor for PdfDocumentProcessor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn edit(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        writeln!(out, "{}", locale.editing_pdf())
    }
}
