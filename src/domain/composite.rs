//! Composite: files and folders answer the same display request.
//!
//! A [`Folder`] owns its children by value, so the hierarchy is a strict tree:
//! no sharing, and no way to move a folder into its own subtree. Display walks
//! the tree in pre-order with an explicit work stack ([`PreOrder`]), so nesting
//! depth is bounded by heap, not by the call stack.

use std::fmt;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use termtree::Tree;
use tracing::instrument;

use super::Locale;

/// The capability every tree node shares: it can display itself.
pub trait Component: fmt::Debug {
    fn name(&self) -> &str;

    fn is_leaf(&self) -> bool;

    /// Ordered children; always empty for leaves.
    fn children(&self) -> &[Node] {
        &[]
    }

    /// The single line describing this node, without its descendants.
    fn label(&self, locale: Locale) -> String;

    /// Write this node and all its descendants in pre-order, one line each.
    fn display_to(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()>;

    /// Display to stdout in the default locale.
    fn display(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.display_to(&mut handle, Locale::default())
    }
}

/// An indivisible named item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLeaf {
    name: String,
}

impl FileLeaf {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Component for FileLeaf {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_leaf(&self) -> bool {
        true
    }

    fn label(&self, locale: Locale) -> String {
        locale.file_line(&self.name)
    }

    fn display_to(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        writeln!(out, "{}", self.label(locale))
    }
}

/// A named container of files and folders, displayed in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    children: Vec<Node>,
}

/// A child slot in a folder: either kind of component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File(FileLeaf),
    Folder(Folder),
}

impl From<FileLeaf> for Node {
    fn from(leaf: FileLeaf) -> Self {
        Node::File(leaf)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Node::Folder(folder)
    }
}

impl Component for Node {
    fn name(&self) -> &str {
        match self {
            Node::File(leaf) => leaf.name(),
            Node::Folder(folder) => folder.name(),
        }
    }

    fn is_leaf(&self) -> bool {
        matches!(self, Node::File(_))
    }

    fn children(&self) -> &[Node] {
        match self {
            Node::File(_) => &[],
            Node::Folder(folder) => folder.children(),
        }
    }

    fn label(&self, locale: Locale) -> String {
        match self {
            Node::File(leaf) => leaf.label(locale),
            Node::Folder(folder) => folder.label(locale),
        }
    }

    fn display_to(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        match self {
            Node::File(leaf) => leaf.display_to(out, locale),
            Node::Folder(folder) => folder.display_to(out, locale),
        }
    }
}

/// How the composite demonstration lays out its lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    /// One line per node, no decoration
    #[default]
    Plain,
    /// Two spaces of indent per nesting level
    Indented,
    /// Box-drawing connectors
    Tree,
}

impl Folder {
    /// An empty folder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append `child` after all existing children.
    pub fn add(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Builder form of [`Folder::add`].
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add(child);
        self
    }

    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Number of nodes in the tree, this folder included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels; a folder without children has depth 1.
    pub fn depth(&self) -> usize {
        self.iter().map(|visit| visit.depth + 1).max().unwrap_or(1)
    }

    /// Names of all files, in display order.
    pub fn leaf_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|visit| visit.node.is_leaf())
            .map(|visit| visit.node.name())
            .collect()
    }

    /// Convert to a `termtree` for box-drawing output.
    ///
    /// Recursive, unlike [`Folder::display_to`].
    pub fn to_tree(&self, locale: Locale) -> Tree<String> {
        build_tree(self, locale)
    }

    #[instrument(level = "debug", skip(self, out), fields(folder = %self.name))]
    pub fn render(&self, out: &mut dyn Write, locale: Locale, style: TreeStyle) -> io::Result<()> {
        match style {
            TreeStyle::Plain => self.display_to(out, locale),
            TreeStyle::Indented => {
                for visit in self.iter() {
                    writeln!(
                        out,
                        "{:indent$}{}",
                        "",
                        visit.node.label(locale),
                        indent = visit.depth * 2
                    )?;
                }
                Ok(())
            }
            TreeStyle::Tree => write!(out, "{}", self.to_tree(locale)),
        }
    }
}

impl Component for Folder {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_leaf(&self) -> bool {
        false
    }

    fn children(&self) -> &[Node] {
        &self.children
    }

    fn label(&self, locale: Locale) -> String {
        locale.folder_line(&self.name)
    }

    fn display_to(&self, out: &mut dyn Write, locale: Locale) -> io::Result<()> {
        for visit in self.iter() {
            writeln!(out, "{}", visit.node.label(locale))?;
        }
        Ok(())
    }
}

fn build_tree(node: &dyn Component, locale: Locale) -> Tree<String> {
    let leaves: Vec<_> = node
        .children()
        .iter()
        .map(|child| build_tree(child, locale))
        .collect();
    Tree::new(node.label(locale)).with_leaves(leaves)
}

/// One step of a pre-order walk.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Distance from the root; the root itself is 0
    pub depth: usize,
    pub node: &'a dyn Component,
}

/// Pre-order iterator driven by an explicit stack.
pub struct PreOrder<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a dyn Component) -> Self {
        Self {
            stack: vec![Visit {
                depth: 0,
                node: root,
            }],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in visit.node.children().iter().rev() {
            self.stack.push(Visit {
                depth: visit.depth + 1,
                node: child,
            });
        }
        Some(visit)
    }
}
