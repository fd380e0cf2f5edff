//! The demonstration driver: runs each pattern section in a fixed order.

use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{Document, FileLeaf, Folder, Process, Prototype};

/// One demonstration block of the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Prototype,
    Composite,
    Template,
}

impl Section {
    /// Every section, in the order the full walkthrough prints them.
    pub const ALL: [Section; 3] = [Section::Prototype, Section::Composite, Section::Template];

    pub fn header(self) -> &'static str {
        match self {
            Section::Prototype => "=== Prototype ===",
            Section::Composite => "=== Composite ===",
            Section::Template => "=== Template Method ===",
        }
    }
}

/// The folder hierarchy shown by the composite section:
///
/// ```text
/// Root
/// ├── file1.txt
/// ├── file2.pdf
/// └── Documents
///     ├── doc1.docx
///     └── doc2.docx
/// ```
pub fn sample_tree() -> Folder {
    let mut root = Folder::new("Root");
    root.add(FileLeaf::new("file1.txt"));
    root.add(FileLeaf::new("file2.pdf"));

    let mut docs = Folder::new("Documents");
    docs.add(FileLeaf::new("doc1.docx"));
    docs.add(FileLeaf::new("doc2.docx"));

    root.add(docs);
    root
}

/// Runs the pattern sections against a writer, driven by [`Settings`].
#[derive(Debug, Clone)]
pub struct Showcase {
    settings: Settings,
    color: bool,
}

impl Showcase {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            color: false,
        }
    }

    /// Colour section headers. `colored` still honours NO_COLOR and CLICOLOR.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Print `sections` in the given order, separated by blank lines.
    #[instrument(level = "debug", skip(self, out))]
    pub fn run(&self, out: &mut dyn Write, sections: &[Section]) -> ApplicationResult<()> {
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                writeln!(out).with_context("write section separator")?;
            }
            self.write_header(out, *section)?;
            match section {
                Section::Prototype => self.run_prototype(out)?,
                Section::Composite => self.run_composite(out)?,
                Section::Template => self.run_template(out)?,
            }
        }
        Ok(())
    }

    fn write_header(&self, out: &mut dyn Write, section: Section) -> ApplicationResult<()> {
        let header = section.header();
        let written = if self.color {
            writeln!(out, "{}", header.cyan().bold())
        } else {
            writeln!(out, "{header}")
        };
        written.with_context("write section header")
    }

    /// The template document, with configured title/content overrides applied.
    pub fn template_document(&self) -> Document {
        let locale = self.settings.locale;
        let mut document = Document::sample(locale);
        if let Some(title) = &self.settings.prototype.title {
            document.set_title(title.as_str());
        }
        if let Some(content) = &self.settings.prototype.content {
            document.set_content(content.as_str());
        }
        document
    }

    pub fn run_prototype(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let template: Box<dyn Prototype> = Box::new(self.template_document());
        let copies = self.settings.prototype.copies;
        debug!(copies, "cloning template document");

        for _ in 0..copies {
            let copy = template.clone();
            copy.show(out, self.settings.locale)
                .with_context("write prototype section")?;
        }
        Ok(())
    }

    pub fn run_composite(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let root = sample_tree();
        debug!(nodes = root.node_count(), depth = root.depth(), "built sample tree");
        root.render(out, self.settings.locale, self.settings.composite.style)
            .with_context("write composite section")
    }

    pub fn run_template(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        for (i, kind) in self.settings.template.kinds.iter().enumerate() {
            if i > 0 {
                writeln!(out).with_context("write template separator")?;
            }
            kind.processor()
                .process(out, self.settings.locale)
                .with_context("write template section")?;
        }
        Ok(())
    }
}
