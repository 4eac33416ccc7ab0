use crate::structure::{Directory, Node};
use crate::text::{normalize_text, split_name_and_comment};

/// Tunables for the tree-text parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Treat only names with a trailing `/` as directories.
    ///
    /// The default classification also treats any dot-free name as a
    /// directory, which misreads extensionless files such as `Makefile`.
    /// That heuristic is kept for compatibility with existing tree-text
    /// inputs; this flag opts into the stricter rule instead.
    pub require_slash_for_directories: bool,
}

lazy_static::lazy_static! {
    static ref BOX_GLYPHS: regex::Regex =
        regex::Regex::new(r"[├└│─]").expect("a valid regex pattern");
    static ref DASH_RULE: regex::Regex =
        regex::Regex::new(r"^-{4,}").expect("a valid regex pattern");
}

/// Header/footer noise from directory-listing tools, e.g. the
/// `Folder PATH listing` banner and dash rules printed by `tree /F`.
fn is_banner_line(line: &str) -> bool {
    line.starts_with("Folder") || line.starts_with("File(s)") || DASH_RULE.is_match(line)
}

fn is_directory_name(name: &str, options: &ParseOptions) -> bool {
    if options.require_slash_for_directories {
        name.ends_with('/')
    } else {
        !name.contains('.') || name.ends_with('/')
    }
}

/// One level of the parse stack: the directory being populated at `indent`.
/// The bottom frame is a sentinel at indent -1 holding the result root.
struct Frame {
    indent: isize,
    name: String,
    entries: Directory,
}

/// Pops the top frame and attaches its finished directory to the frame below.
fn attach_top(stack: &mut Vec<Frame>) {
    if let Some(child) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.entries.insert(child.name, Node::Directory(child.entries));
        }
    }
}

/// Reconstructs a nested structure from `tree`-command-style indented text.
///
/// Blank lines and listing banners are dropped, box-drawing connectors are
/// stripped, and the remaining leading spaces are the sole nesting signal: a
/// line becomes a child of the nearest preceding line with strictly smaller
/// indentation. Directory lines open a new nesting level; file lines store
/// their trailing comment as the file body.
pub fn parse_tree(input: &str, options: &ParseOptions) -> Directory {
    let mut stack = vec![Frame {
        indent: -1,
        name: String::new(),
        entries: Directory::new(),
    }];

    for raw in input.lines() {
        if raw.trim().is_empty() {
            continue;
        }

        let line = normalize_text(raw.trim_end());
        if is_banner_line(&line) {
            continue;
        }

        let line = BOX_GLYPHS.replace_all(&line, "");
        let indent = line.chars().take_while(|c| *c == ' ').count() as isize;

        let text = line.trim();
        if text.is_empty() {
            // the line held only connector glyphs
            continue;
        }

        let (name, comment) = split_name_and_comment(text);

        // Walk back to the nearest ancestor with strictly smaller indent.
        // The sentinel at -1 never pops, so the stack stays non-empty.
        while stack.len() > 1 && stack[stack.len() - 1].indent >= indent {
            attach_top(&mut stack);
        }

        if is_directory_name(&name, options) {
            let dir_name = name.trim_end_matches('/').to_owned();

            stack.push(Frame {
                indent,
                name: dir_name,
                entries: Directory::new(),
            });
        } else if let Some(parent) = stack.last_mut() {
            parent.entries.insert(name, Node::File(comment));
        }
    }

    while stack.len() > 1 {
        attach_top(&mut stack);
    }

    stack.pop().map(|frame| frame.entries).unwrap_or_default()
}
