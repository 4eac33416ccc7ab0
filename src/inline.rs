use crate::structure::{Directory, Node};

/// Parses the compact single-line grammar: semicolon-separated
/// `path/to/target[:content]` entries.
///
/// Entries without a colon get empty content; a trailing `/` on the path
/// marks the final segment as a directory. Empty path segments are discarded,
/// so stray or doubled slashes are tolerated. Entries that are blank after
/// trimming are skipped. Entries sharing a path prefix merge into the same
/// directory. There is no comment handling here: content is the literal
/// remainder after the first colon.
pub fn parse_inline(input: &str) -> Directory {
    let mut root = Directory::new();

    for entry in input.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (path, content) = match entry.split_once(':') {
            Some((path, content)) => (path, content),
            None => (entry, ""),
        };

        let wants_directory = path.ends_with('/');
        let segments: Vec<&str> = path
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        let mut current = &mut root;
        for (i, segment) in segments.iter().enumerate() {
            if i + 1 == segments.len() {
                if wants_directory {
                    // never replace whatever already lives at this exact node
                    current.entry((*segment).to_owned()).or_insert_with(Node::dir);
                } else {
                    current.insert((*segment).to_owned(), Node::File(content.trim().to_owned()));
                }
            } else {
                let slot = current.entry((*segment).to_owned()).or_insert_with(Node::dir);
                if !slot.is_dir() {
                    // an earlier entry claimed this segment as a file; the
                    // deeper path wins and the file is replaced
                    *slot = Node::dir();
                }
                let Node::Directory(children) = slot else {
                    unreachable!("slot was just reset to a directory");
                };
                current = children;
            }
        }
    }

    root
}

/// Serializes a structure back into the inline grammar.
///
/// Lossless only when no name contains `/`, `;`, or `:` and no file content
/// contains `;` or surrounding whitespace, since the grammar has no escaping.
pub fn to_inline_string(structure: &Directory) -> String {
    let mut entries = Vec::new();

    collect_entries(structure, "", &mut entries);

    entries.join("; ")
}

fn collect_entries(directory: &Directory, prefix: &str, out: &mut Vec<String>) {
    for (name, node) in directory {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };

        match node {
            Node::File(content) => out.push(format!("{}:{}", path, content)),
            Node::Directory(children) if children.is_empty() => out.push(format!("{}/", path)),
            Node::Directory(children) => collect_entries(children, &path, out),
        }
    }
}
