//! Tests for the file/folder composite and its pre-order display

use std::env;
use std::process::Command;

use patternlab::application::sample_tree;
use patternlab::domain::{Component, FileLeaf, Folder, Locale, Node};
use patternlab::util::testing;
use rstest::{fixture, rstest};

#[fixture]
fn setup() {
    testing::init_test_setup();
}

fn lines_of(component: &dyn Component, locale: Locale) -> Vec<String> {
    let mut buf = Vec::new();
    component.display_to(&mut buf, locale).unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Straightforward recursive dispatch, the behaviour the iterative walk must match.
fn recursive_lines(node: &dyn Component, out: &mut Vec<String>) {
    out.push(node.label(Locale::En));
    for child in node.children() {
        recursive_lines(child, out);
    }
}

// ============================================================
// End-to-end scenario
// ============================================================

#[rstest]
fn given_sample_tree_when_displayed_then_six_lines_in_preorder(#[from(setup)] _setup: ()) {
    let root = sample_tree();

    assert_eq!(
        lines_of(&root, Locale::En),
        vec![
            "Folder: Root",
            "File: file1.txt",
            "File: file2.pdf",
            "Folder: Documents",
            "File: doc1.docx",
            "File: doc2.docx",
        ]
    );
}

#[rstest]
fn given_sample_tree_when_displayed_in_ukrainian_then_original_labels(#[from(setup)] _setup: ()) {
    let root = sample_tree();

    assert_eq!(
        lines_of(&root, Locale::Uk),
        vec![
            "Папка: Root",
            "Файл: file1.txt",
            "Файл: file2.pdf",
            "Папка: Documents",
            "Файл: doc1.docx",
            "Файл: doc2.docx",
        ]
    );
}

// ============================================================
// Ordering and traversal properties
// ============================================================

#[rstest]
#[case(vec!["a"])]
#[case(vec!["z", "y", "x"])]
#[case(vec!["b", "a", "b", "c"])]
fn given_add_sequence_when_listing_children_then_same_sequence(#[case] names: Vec<&str>) {
    let mut folder = Folder::new("f");
    for name in &names {
        folder.add(FileLeaf::new(*name));
    }

    let listed: Vec<_> = folder.children().iter().map(|c| c.name()).collect();
    assert_eq!(listed, names);
}

#[rstest]
fn given_irregular_tree_when_displayed_then_matches_recursive_dispatch(#[from(setup)] _setup: ()) {
    let tree = Folder::new("top")
        .with_child(Folder::new("empty"))
        .with_child(
            Folder::new("a")
                .with_child(FileLeaf::new("a1"))
                .with_child(Folder::new("b").with_child(FileLeaf::new("b1")))
                .with_child(FileLeaf::new("a2")),
        )
        .with_child(FileLeaf::new("last"));

    let mut expected = Vec::new();
    recursive_lines(&tree, &mut expected);

    assert_eq!(lines_of(&tree, Locale::En), expected);
    assert_eq!(tree.node_count(), expected.len());
}

#[rstest]
fn given_tree_when_iterating_then_every_node_visited_once() {
    let tree = sample_tree();
    let names: Vec<_> = tree.iter().map(|v| v.node.name()).collect();

    assert_eq!(names.len(), 6);
    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), names.len());
}

#[rstest]
fn given_nested_folder_when_displayed_then_children_follow_parent_before_next_sibling() {
    let lines = lines_of(&sample_tree(), Locale::En);
    let pos = |line: &str| lines.iter().position(|l| l == line).unwrap();

    assert!(pos("Folder: Documents") < pos("File: doc1.docx"));
    assert!(pos("File: doc1.docx") < pos("File: doc2.docx"));
    assert!(pos("File: file2.pdf") < pos("Folder: Documents"));
}

// ============================================================
// Idempotence and edge cases
// ============================================================

#[rstest]
fn given_leaf_when_displayed_twice_then_same_line_twice() {
    let leaf = FileLeaf::new("file1.txt");
    let mut buf = Vec::new();
    leaf.display_to(&mut buf, Locale::En).unwrap();
    leaf.display_to(&mut buf, Locale::En).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "File: file1.txt\nFile: file1.txt\n"
    );
    assert_eq!(leaf, FileLeaf::new("file1.txt"));
}

#[rstest]
fn given_unmodified_tree_when_displayed_twice_then_byte_identical() {
    let tree = sample_tree();
    let mut first = Vec::new();
    let mut second = Vec::new();
    tree.display_to(&mut first, Locale::En).unwrap();
    tree.display_to(&mut second, Locale::En).unwrap();

    assert_eq!(first, second);
}

#[rstest]
fn given_empty_folder_when_displayed_then_exactly_one_line() {
    let folder = Folder::new("Nothing");
    assert_eq!(lines_of(&folder, Locale::En), vec!["Folder: Nothing"]);
}

#[rstest]
fn given_folder_wrapped_in_node_when_displayed_then_same_as_folder() {
    let folder = sample_tree();
    let node = Node::from(folder.clone());

    assert_eq!(lines_of(&node, Locale::En), lines_of(&folder, Locale::En));
    assert!(!node.is_leaf());
    assert!(Node::from(FileLeaf::new("x")).is_leaf());
}

#[rstest]
fn given_deeply_nested_folders_when_displayed_then_no_stack_overflow() {
    const DEPTH: usize = 2_000;

    let mut tree = Folder::new(format!("level{DEPTH}")).with_child(FileLeaf::new("bottom"));
    for level in (0..DEPTH).rev() {
        tree = Folder::new(format!("level{level}")).with_child(tree);
    }

    let lines = lines_of(&tree, Locale::En);
    assert_eq!(lines.len(), DEPTH + 2);
    assert_eq!(lines[0], "Folder: level0");
    assert_eq!(lines[DEPTH + 1], "File: bottom");
    assert_eq!(tree.depth(), DEPTH + 2);
}

// ============================================================
// display() on the real stdout
// ============================================================

const DISPLAY_CHILD_VAR: &str = "COMPOSITE_TEST_DISPLAY_CHILD";

/// Re-runs this test in a child process, where `display()` writes to a real stdout.
#[test]
fn given_sample_tree_when_display_called_then_stdout_has_preorder_lines() {
    if env::var_os(DISPLAY_CHILD_VAR).is_some() {
        sample_tree().display().unwrap();
        FileLeaf::new("extra.txt").display().unwrap();
        return;
    }

    let output = Command::new(env::current_exe().unwrap())
        .args([
            "--exact",
            "given_sample_tree_when_display_called_then_stdout_has_preorder_lines",
            "--nocapture",
            "--test-threads=1",
        ])
        .env(DISPLAY_CHILD_VAR, "1")
        .output()
        .unwrap();

    assert!(output.status.success(), "child failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains(
            "Folder: Root\nFile: file1.txt\nFile: file2.pdf\nFolder: Documents\nFile: doc1.docx\nFile: doc2.docx\nFile: extra.txt\n"
        ),
        "unexpected stdout: {stdout}"
    );
}
