//! Penn Treebank bracketed tree I/O
//!
//! Reads trees such as `(TOP (S (NP (DT The) (NN dog)) (VP (VBZ barks))))`
//! into [`Tree`] arenas and writes them back on a single line. Head marks
//! (`=H` on a child label) are translated to and from `Node::head`.

use pest::Parser;
use pest::error::LineColLocation;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use thiserror::Error;

use crate::tree::{HEAD_MARK, NodeId, Tree};

#[derive(Parser)]
#[grammar = "penn_grammar.pest"]
struct PennParser;

/// Error while reading bracketed trees
#[derive(Debug, Error)]
pub enum TreeParseError {
    #[error("Parse error at line {line_num}: {message}")]
    Syntax { line_num: usize, message: String },

    #[error("Parse error at line {line_num}: unbalanced brackets")]
    Unbalanced { line_num: usize },

    #[error("Parse error: empty tree")]
    Empty,

    #[error("IO error at line {line_num}: {source}")]
    Io {
        line_num: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a single bracketed tree
///
/// Children whose label ends in `=H` become the head of their parent; the
/// marker is removed from the stored label.
pub fn parse_tree(input: &str) -> Result<Tree, TreeParseError> {
    parse_tree_at(input, 1)
}

fn parse_tree_at(input: &str, first_line: usize) -> Result<Tree, TreeParseError> {
    if input.trim().is_empty() {
        return Err(TreeParseError::Empty);
    }

    let mut pairs = PennParser::parse(Rule::tree, input).map_err(|e| {
        let line = match e.line_col {
            LineColLocation::Pos((line, _)) | LineColLocation::Span((line, _), _) => line,
        };
        TreeParseError::Syntax {
            line_num: first_line + line - 1,
            message: e.variant.message().to_string(),
        }
    })?;

    let mut tree = Tree::new();
    let root = pairs
        .next()
        .and_then(|tree_pair| tree_pair.into_inner().find(|p| p.as_rule() == Rule::node))
        .ok_or(TreeParseError::Empty)?;
    build_node(&mut tree, root, None, first_line)?;
    Ok(tree)
}

/// Convert a `node` pair into arena nodes under `parent`
fn build_node(
    tree: &mut Tree,
    pair: Pair<Rule>,
    parent: Option<NodeId>,
    first_line: usize,
) -> Result<NodeId, TreeParseError> {
    let (line, _) = pair.line_col();
    let mut inner = pair.into_inner().peekable();

    let label = match inner.peek() {
        Some(p) if p.as_rule() == Rule::label => {
            let text = p.as_str();
            inner.next();
            text
        }
        _ => "",
    };

    let id = match parent {
        Some(parent_id) => tree.add_child(parent_id, label),
        None => tree.add_node(label),
    };

    for child in inner {
        match child.as_rule() {
            Rule::node => {
                build_node(tree, child, Some(id), first_line)?;
            }
            Rule::leaf => {
                tree.add_child(id, child.as_str());
            }
            _ => {}
        }
    }

    if label.is_empty() && tree.nodes[id].children.is_empty() {
        return Err(TreeParseError::Syntax {
            line_num: first_line + line - 1,
            message: "empty constituent".to_string(),
        });
    }

    take_head_mark(tree, id);
    Ok(id)
}

/// Move a `=H` marker from a child label into the parent's head slot
fn take_head_mark(tree: &mut Tree, id: NodeId) {
    let children = tree.nodes[id].children.clone();
    for (pos, child) in children.into_iter().enumerate() {
        let node = &mut tree.nodes[child];
        if node.is_leaf() {
            continue;
        }
        if let Some(stripped) = node.label.strip_suffix(HEAD_MARK) {
            node.label = stripped.to_string();
            if tree.nodes[id].head.is_none() {
                tree.nodes[id].head = Some(pos);
            }
        }
    }
}

impl Tree {
    /// Render the tree as a single bracketed line
    ///
    /// Head children carry the `=H` suffix; words are never marked.
    pub fn to_bracketed(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root_id {
            self.write_node(root, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id];
        if node.is_leaf() && node.parent.is_some() {
            out.push_str(&node.label);
            return;
        }
        out.push('(');
        out.push_str(&self.marked_label(id));
        for &child in &node.children {
            out.push(' ');
            self.write_node(child, out);
        }
        out.push(')');
    }
}

/// Reader yielding one tree per balanced bracket group
///
/// Trees may span several lines and several trees may share a line. Blank
/// lines and lines starting with `#` between trees are skipped.
pub struct TreeReader<R: BufRead> {
    lines: Lines<R>,
    line_num: usize,
    buf: String,
    buf_start: usize,
    depth: usize,
    pending: VecDeque<(usize, String)>,
}

impl TreeReader<BufReader<File>> {
    /// Create a reader from a file path
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl TreeReader<BufReader<std::io::Cursor<String>>> {
    /// Create a reader from a string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let cursor = std::io::Cursor::new(text.to_string());
        Self::new(BufReader::new(cursor))
    }
}

impl<R: BufRead> TreeReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
            buf: String::new(),
            buf_start: 0,
            depth: 0,
            pending: VecDeque::new(),
        }
    }

    fn reset(&mut self) {
        self.buf.clear();
        self.depth = 0;
    }

    /// Split a line into complete bracket groups
    fn scan(&mut self, line: &str) -> Result<(), TreeParseError> {
        for ch in line.chars() {
            if self.depth == 0 && self.buf.is_empty() {
                if ch.is_whitespace() {
                    continue;
                }
                if ch != '(' {
                    return Err(TreeParseError::Syntax {
                        line_num: self.line_num,
                        message: format!("unexpected '{}' outside brackets", ch),
                    });
                }
                self.buf_start = self.line_num;
            }

            self.buf.push(ch);
            match ch {
                '(' => self.depth += 1,
                ')' => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        let group = std::mem::take(&mut self.buf);
                        self.pending.push_back((self.buf_start, group));
                    }
                }
                _ => {}
            }
        }
        if !self.buf.is_empty() {
            self.buf.push('\n');
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for TreeReader<R> {
    type Item = Result<Tree, TreeParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((line_num, text)) = self.pending.pop_front() {
                return Some(parse_tree_at(&text, line_num));
            }

            match self.lines.next() {
                None => {
                    if self.buf.trim().is_empty() {
                        return None;
                    }
                    let line_num = self.buf_start;
                    self.reset();
                    return Some(Err(TreeParseError::Unbalanced { line_num }));
                }
                Some(Err(e)) => {
                    self.line_num += 1;
                    self.reset();
                    return Some(Err(TreeParseError::Io {
                        line_num: self.line_num,
                        source: e,
                    }));
                }
                Some(Ok(line)) => {
                    self.line_num += 1;
                    let trimmed = line.trim();
                    if self.depth == 0 && (trimmed.is_empty() || trimmed.starts_with('#')) {
                        continue;
                    }
                    if let Err(e) = self.scan(&line) {
                        self.reset();
                        return Some(Err(e));
                    }
                }
            }
        }
    }
}
