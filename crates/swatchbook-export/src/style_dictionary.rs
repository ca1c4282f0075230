//! Style Dictionary token tree, from the light mapping.
//!
//! Stripped names are split on `-` into a path under one of three roots:
//! `font` (any name containing "font", leading `font` segment dropped),
//! `color` (color values) and `size` (dimensions). Other tokens are skipped.
//!
//! When a name is both a token and the prefix of longer names
//! (`primary` and `primary-bg-subtle`), its leaf moves to the child key
//! `base`. A token landing on a path that already holds a leaf (`--bs-gap`
//! and `--gap`, or `primary-base` next to `primary`) is skipped; the first in
//! name order wins.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use swatchbook_tokens::{Token, TokenKind, TokenMapping};

use crate::error::ExportError;
use crate::skipped::SkipLog;
use crate::ExportOptions;

const LEAF_KEY: &str = "base";
const LEAF_PATH: &[&str] = &[LEAF_KEY];

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Leaf {
    value: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// One path segment: an optional token plus the longer names below it.
#[derive(Debug, Clone, Default, PartialEq)]
struct Branch {
    leaf: Option<Leaf>,
    children: BTreeMap<String, Branch>,
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.leaf {
            Some(leaf) if self.children.is_empty() => leaf.serialize(serializer),
            leaf => {
                let mut map = serializer.serialize_map(None)?;
                if let Some(leaf) = leaf {
                    map.serialize_entry(LEAF_KEY, leaf)?;
                }
                for (key, child) in &self.children {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

/// Whether a leaf at `path` would clash with what `root` already holds.
fn is_taken(root: &BTreeMap<String, Branch>, path: &[&str]) -> bool {
    let mut children = root;
    let mut current: Option<&Branch> = None;
    for segment in path {
        if *segment == LEAF_KEY && current.is_some_and(|b| b.leaf.is_some()) {
            return true;
        }
        match children.get(*segment) {
            Some(branch) => {
                current = Some(branch);
                children = &branch.children;
            }
            None => return false,
        }
    }
    current.is_some_and(|b| b.leaf.is_some() || b.children.contains_key(LEAF_KEY))
}

fn insert(root: &mut BTreeMap<String, Branch>, path: &[&str], leaf: Leaf) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    let mut branch = root.entry(first.to_string()).or_default();
    for segment in rest {
        branch = branch.children.entry(segment.to_string()).or_default();
    }
    branch.leaf = Some(leaf);
}

enum Rejected {
    Unbucketed(&'static str),
    Taken(String),
}

#[derive(Debug, Default, Serialize)]
struct Tree {
    color: BTreeMap<String, Branch>,
    font: BTreeMap<String, Branch>,
    size: BTreeMap<String, Branch>,
}

impl Tree {
    fn add(&mut self, name: &str, token: &Token<'_>) -> Result<(), Rejected> {
        let segments: Vec<&str> = name.split('-').filter(|s| !s.is_empty()).collect();

        let (root_key, root, path) = if name.contains("font") {
            let path = match segments.split_first() {
                Some((&"font", rest)) if !rest.is_empty() => rest,
                Some((&"font", _)) => LEAF_PATH,
                _ => &segments[..],
            };
            ("font", &mut self.font, path)
        } else if segments.is_empty() {
            return Err(Rejected::Unbucketed("empty token name"));
        } else if token.kind == TokenKind::Color {
            ("color", &mut self.color, &segments[..])
        } else if token.kind == TokenKind::Dimension {
            ("size", &mut self.size, &segments[..])
        } else {
            return Err(Rejected::Unbucketed("not a color, dimension or font token"));
        };

        if is_taken(root, path) {
            return Err(Rejected::Taken(format!("{}.{}", root_key, path.join("."))));
        }
        insert(
            root,
            path,
            Leaf {
                value: token.value.to_string(),
                kind: token.kind.as_str(),
            },
        );
        Ok(())
    }
}

pub(crate) fn render(
    light: &TokenMapping,
    opts: &ExportOptions,
    log: &mut SkipLog,
) -> Result<String, ExportError> {
    let mut tree = Tree::default();
    for token in light.tokens() {
        let name = opts.namespace.strip(token.name);
        match tree.add(name, &token) {
            Ok(()) => {}
            Err(Rejected::Unbucketed(reason)) => log.skip(None, token.name, token.value, reason),
            Err(Rejected::Taken(key)) => log.collision(None, token.name, token.value, &key),
        }
    }
    Ok(serde_json::to_string_pretty(&tree)?)
}
