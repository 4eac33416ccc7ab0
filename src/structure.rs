use indexmap::IndexMap;
use serde::Deserialize;

/// A named level of the hierarchy, mapping child names to child nodes.
///
/// Insertion order follows author order so materialization and previews walk
/// the structure in the order it was written.
pub type Directory = IndexMap<String, Node>;

/// One node of a parsed structure: either a directory of further nodes or a
/// file holding its literal body text (possibly empty).
///
/// Deserialization is untagged so the yaml schema maps directly onto it:
/// mappings become directories, scalar strings become files. Anything else
/// (a yaml `null`, a list) fails deserialization and surfaces as a parse
/// error in the loader.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Directory(Directory),
    File(String),
}

impl Node {
    /// An empty directory node.
    pub fn dir() -> Self {
        Node::Directory(Directory::new())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }
}
