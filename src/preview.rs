use crate::structure::{Directory, Node};
use colored::Colorize;
use std::path::Path;

/// Print one node with tree connectors, then recurse into directories.
fn print_node(name: &str, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let label = match node {
        Node::Directory(_) => name.blue(),
        Node::File(_) => name.green(),
    };
    println!("{}{}{}", prefix.yellow(), connector.yellow(), label);

    if let Node::Directory(children) = node {
        let child_prefix = if is_last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };

        let len = children.len();
        for (i, (child_name, child)) in children.iter().enumerate() {
            print_node(child_name, child, &child_prefix, i + 1 == len);
        }
    }
}

/// Renders the parsed structure as an ASCII tree rooted at `destination`,
/// so the user sees exactly what a generate run would create.
pub fn print_structure(structure: &Directory, destination: &Path) {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    println!(
        "Legend: {} = (directory), {} = (file)\n",
        "blue".blue(),
        "green".green()
    );

    println!("{}", root_name.blue());

    let len = structure.len();
    for (i, (name, node)) in structure.iter().enumerate() {
        print_node(name, node, "", i + 1 == len);
    }

    println!();
}
