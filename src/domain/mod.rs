//! Domain layer: the pattern types themselves
//!
//! This layer is independent of external concerns (no config loading, no CLI).
//! Output goes to whatever `std::io::Write` the caller provides.

pub mod composite;
pub mod locale;
pub mod prototype;
pub mod template;

pub use composite::{Component, FileLeaf, Folder, Node, PreOrder, TreeStyle, Visit};
pub use locale::Locale;
pub use prototype::{Document, Prototype};
pub use template::{
    DocumentKind, DocumentProcessor, PdfDocumentProcessor, Process, TextDocumentProcessor,
};
