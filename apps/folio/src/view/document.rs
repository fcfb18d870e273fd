#![allow(dead_code)]

//! The live page tree and the only place nodes are mutated.
//!
//! Lookups take a small selector language: descendant combinators (space)
//! between compound parts of the form `tag#id.class.class[attr=value]`, plus
//! the `:last-child` pseudo-class. Every mutation helper returns `false` and
//! leaves the tree untouched when the anchor is missing.

use crate::view::node::{Element, Node};

/// Child indices from the root down to an element.
pub type NodePath = Vec<usize>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
    mutations: usize,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root, mutations: 0 }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Number of successful mutations applied since construction.
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }

    // ── queries ────────────────────────────────────────────────────────────

    pub fn query(&self, selector: &str) -> Option<&Element> {
        let path = self.find_path(selector)?;
        self.at_path(&path)
    }

    pub fn query_all(&self, selector: &str) -> Vec<&Element> {
        self.find_all_paths(selector)
            .iter()
            .filter_map(|p| self.at_path(p))
            .collect()
    }

    pub fn count(&self, selector: &str) -> usize {
        self.find_all_paths(selector).len()
    }

    pub fn exists(&self, selector: &str) -> bool {
        self.find_path(selector).is_some()
    }

    pub fn find_path(&self, selector: &str) -> Option<NodePath> {
        self.find_all_paths(selector).into_iter().next()
    }

    /// Paths of every matching element, in document order.
    pub fn find_all_paths(&self, selector: &str) -> Vec<NodePath> {
        let parts = parse_selector(selector);
        if parts.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut ancestors: Vec<&Element> = Vec::new();
        let mut path = Vec::new();
        collect_matches(&self.root, &parts, &mut ancestors, &mut path, &mut out);
        out
    }

    pub fn at_path(&self, path: &[usize]) -> Option<&Element> {
        let mut current = &self.root;
        for &i in path {
            current = current.children.get(i)?.as_element()?;
        }
        Some(current)
    }

    fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut current = &mut self.root;
        for &i in path {
            current = current.children.get_mut(i)?.as_element_mut()?;
        }
        Some(current)
    }

    // ── mutation ───────────────────────────────────────────────────────────

    /// Runs `f` on the first match. Counts as one mutation when found.
    pub fn update<F>(&mut self, selector: &str, f: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        let Some(path) = self.find_path(selector) else {
            return false;
        };
        self.update_at(&path, f)
    }

    pub fn update_at<F>(&mut self, path: &[usize], f: F) -> bool
    where
        F: FnOnce(&mut Element),
    {
        match self.at_path_mut(path) {
            Some(element) => {
                f(element);
                self.mutations += 1;
                true
            }
            None => false,
        }
    }

    /// Runs `f` on every match, returning how many elements were touched.
    pub fn update_all<F>(&mut self, selector: &str, mut f: F) -> usize
    where
        F: FnMut(&mut Element),
    {
        let mut touched = 0;
        for path in self.find_all_paths(selector) {
            if self.update_at(&path, &mut f) {
                touched += 1;
            }
        }
        touched
    }

    /// Clear-and-rebuild: drops every existing child, then appends `nodes`.
    pub fn replace_children(&mut self, selector: &str, nodes: Vec<Node>) -> bool {
        self.update(selector, |e| e.children = nodes)
    }

    pub fn set_text(&mut self, selector: &str, value: &str) -> bool {
        self.update(selector, |e| e.children = vec![Node::Text(value.to_string())])
    }

    pub fn set_attr(&mut self, selector: &str, name: &'static str, value: &str) -> bool {
        self.update(selector, |e| e.set_attr(name, value))
    }

    pub fn add_class(&mut self, selector: &str, class: &str) -> bool {
        self.update(selector, |e| e.add_class(class))
    }

    pub fn remove_class(&mut self, selector: &str, class: &str) -> bool {
        self.update(selector, |e| e.remove_class(class))
    }

    pub fn set_style(&mut self, selector: &str, property: &str, value: &str) -> bool {
        self.update(selector, |e| e.set_style(property, value))
    }

    /// Reveals a section hidden with `display:none`.
    pub fn show(&mut self, selector: &str) -> bool {
        self.set_style(selector, "display", "block")
    }

    pub fn hide(&mut self, selector: &str) -> bool {
        self.set_style(selector, "display", "none")
    }

    pub fn append_child(&mut self, selector: &str, node: impl Into<Node>) -> bool {
        let node = node.into();
        self.update(selector, |e| e.children.push(node))
    }

    /// Inserts before the last element child, or appends if there is none.
    pub fn insert_before_last(&mut self, selector: &str, node: impl Into<Node>) -> bool {
        let node = node.into();
        self.update(selector, |e| {
            match e.children.iter().rposition(|c| c.as_element().is_some()) {
                Some(i) => e.children.insert(i, node),
                None => e.children.push(node),
            }
        })
    }

    /// Removes the first matching element from its parent.
    pub fn remove(&mut self, selector: &str) -> bool {
        let Some(mut path) = self.find_path(selector) else {
            return false;
        };
        let Some(index) = path.pop() else {
            // The root itself cannot be removed.
            return false;
        };
        self.update_at(&path, |parent| {
            parent.children.remove(index);
        })
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>");
        self.root.write_html(&mut out);
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Selector matching
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
    last_child: bool,
}

fn parse_selector(selector: &str) -> Vec<Compound> {
    selector.split_whitespace().map(parse_compound).collect()
}

fn parse_compound(part: &str) -> Compound {
    let mut compound = Compound::default();
    let mut rest = part;

    if let Some(stripped) = rest.strip_suffix(":last-child") {
        compound.last_child = true;
        rest = stripped;
    }

    // Attribute filters close the compound: `[name]`, `[name=value]`.
    if let Some(open) = rest.find('[') {
        for filter in rest[open..].split('[').filter(|f| !f.is_empty()) {
            let inner = filter.trim_end_matches(']');
            compound.attrs.push(match inner.split_once('=') {
                Some((k, v)) => (k.to_string(), Some(v.trim_matches('"').to_string())),
                None => (inner.to_string(), None),
            });
        }
        rest = &rest[..open];
    }

    let mut token = String::new();
    let mut kind = '\0';
    for ch in rest.chars().chain(std::iter::once('.')) {
        if ch == '#' || ch == '.' {
            if !token.is_empty() {
                let value = std::mem::take(&mut token);
                match kind {
                    '#' => compound.id = Some(value),
                    '.' => compound.classes.push(value),
                    _ => compound.tag = Some(value),
                }
            }
            kind = ch;
        } else {
            token.push(ch);
        }
    }
    compound
}

/// Position of an element within its parent, needed for `:last-child`.
struct Position<'a> {
    parent: Option<&'a Element>,
    index: usize,
}

fn matches_compound(element: &Element, position: &Position<'_>, c: &Compound) -> bool {
    if let Some(tag) = &c.tag {
        if element.tag != tag.as_str() {
            return false;
        }
    }
    if let Some(id) = &c.id {
        if element.get_attr("id") != Some(id.as_str()) {
            return false;
        }
    }
    if !c.classes.iter().all(|cls| element.has_class(cls)) {
        return false;
    }
    for (name, value) in &c.attrs {
        match (element.get_attr(name), value) {
            (None, _) => return false,
            (Some(actual), Some(expected)) if actual != expected => return false,
            _ => {}
        }
    }
    if c.last_child {
        let Some(parent) = position.parent else {
            return false;
        };
        let last = parent
            .children
            .iter()
            .rposition(|n| n.as_element().is_some());
        if last != Some(position.index) {
            return false;
        }
    }
    true
}

/// Right-to-left descendant matching. `ancestors[d]` sits at depth `d` and
/// `path[d]` is the index of the next element down inside it.
fn matches_chain(element: &Element, ancestors: &[&Element], path: &[usize], parts: &[Compound]) -> bool {
    let Some((last, rest)) = parts.split_last() else {
        return false;
    };
    let position = Position {
        parent: ancestors.last().copied(),
        index: path.last().copied().unwrap_or(0),
    };
    if !matches_compound(element, &position, last) {
        return false;
    }
    let mut remaining = rest.iter().rev().peekable();
    for depth in (0..ancestors.len()).rev() {
        let Some(part) = remaining.peek() else {
            break;
        };
        let position = Position {
            parent: depth.checked_sub(1).map(|d| ancestors[d]),
            index: depth.checked_sub(1).map(|d| path[d]).unwrap_or(0),
        };
        if matches_compound(ancestors[depth], &position, part) {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}

fn collect_matches<'a>(
    element: &'a Element,
    parts: &[Compound],
    ancestors: &mut Vec<&'a Element>,
    path: &mut Vec<usize>,
    out: &mut Vec<NodePath>,
) {
    if matches_chain(element, ancestors, path, parts) {
        out.push(path.clone());
    }
    ancestors.push(element);
    for (i, child) in element.children.iter().enumerate() {
        if let Node::Element(child) = child {
            path.push(i);
            collect_matches(child, parts, ancestors, path, out);
            path.pop();
        }
    }
    ancestors.pop();
}
