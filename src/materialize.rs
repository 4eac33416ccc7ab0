use crate::errors::{FileOperation, IoError};
use crate::preview::print_structure;
use crate::prompt::{self, PromptError};
use crate::structure::{Directory, Node};
use crate::transactions::{Active, RollbackOperation, Transaction};
use colored::Colorize;
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error("I/O error while creating the structure")]
    #[diagnostic(code(dircraft::materialize::io))]
    Io(#[from] IoError),

    #[error("error occurred trying to prompt user")]
    #[diagnostic(code(dircraft::materialize::prompt))]
    Prompt(#[from] PromptError),
}

/// How a generate run ended once the transaction was resolved.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Applied,
    Canceled,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Skip the confirmation prompt and apply immediately.
    pub assume_yes: bool,
}

/// Previews the structure, asks for confirmation, and creates it under
/// `destination` inside a rollback transaction.
///
/// Declining the prompt writes nothing. Any I/O failure mid-walk drops the
/// active transaction, which removes everything created so far.
pub fn try_generate(
    structure: &Directory,
    destination: &Path,
    options: GenerateOptions,
) -> Result<Outcome, MaterializeError> {
    print_structure(structure, destination);

    if !options.assume_yes && !prompt::apply_changes()? {
        println!("{}", "no changes applied".yellow());

        return Ok(Outcome::Canceled);
    }

    let mut trx = Transaction::<Active>::new();

    apply(&mut trx, destination, structure)?;

    let _committed = trx.commit();

    Ok(Outcome::Applied)
}

/// Depth-first walk: directories are created then recursed into, files are
/// written after their parent directory exists.
pub fn apply(
    trx: &mut Transaction<Active>,
    base: &Path,
    directory: &Directory,
) -> Result<(), MaterializeError> {
    for (name, node) in directory {
        let path = base.join(name);

        match node {
            Node::Directory(children) => {
                create_directory(trx, &path)?;

                apply(trx, &path, children)?;
            }
            Node::File(content) => {
                if let Some(parent) = path.parent() {
                    create_directory(trx, parent)?;
                }

                write_file(trx, &path, content)?;
            }
        }
    }

    Ok(())
}

/// Creates the directory (and any missing parents) and registers its removal
/// for rollback. A directory that already existed is left untouched and not
/// registered, so rollback never deletes pre-existing data.
fn create_directory(trx: &mut Transaction<Active>, path: &Path) -> Result<(), MaterializeError> {
    if path.exists() {
        return Ok(());
    }

    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    trx.add_operation(RollbackOperation::RemoveDir(path.to_path_buf()));

    Ok(())
}

/// Writes the file contents and registers its removal for rollback when the
/// file did not exist before.
fn write_file(
    trx: &mut Transaction<Active>,
    path: &Path,
    contents: &str,
) -> Result<(), MaterializeError> {
    let existed = path.exists();

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    println!("{} {}", "create".green(), path.display());

    if !existed {
        trx.add_operation(RollbackOperation::RemoveFile(path.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::parse_inline;

    #[test]
    fn creates_directories_and_files_on_disk() {
        let scratch = tempfile::tempdir().unwrap();
        let destination = scratch.path().join("out");
        let structure = parse_inline("src/main.py:entry; src/utils/; README.md");

        let outcome = try_generate(
            &structure,
            &destination,
            GenerateOptions { assume_yes: true },
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(
            fs::read_to_string(destination.join("src/main.py")).unwrap(),
            "entry"
        );
        assert!(destination.join("src/utils").is_dir());
        assert_eq!(
            fs::read_to_string(destination.join("README.md")).unwrap(),
            ""
        );
    }

    #[test]
    fn empty_structure_writes_nothing() {
        let scratch = tempfile::tempdir().unwrap();
        let destination = scratch.path().join("out");

        let outcome = try_generate(
            &Directory::new(),
            &destination,
            GenerateOptions { assume_yes: true },
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Applied);
        assert!(!destination.exists());
    }

    #[test]
    fn failed_walk_rolls_back_created_entries() {
        let scratch = tempfile::tempdir().unwrap();
        let destination = scratch.path().join("out");
        let structure = parse_inline("a.txt:first; blocked/inner.txt:second");

        // Occupy `blocked` with a file so creating the directory fails.
        fs::create_dir_all(&destination).unwrap();
        fs::write(destination.join("blocked"), "in the way").unwrap();

        let result = try_generate(
            &structure,
            &destination,
            GenerateOptions { assume_yes: true },
        );

        assert!(result.is_err());
        assert!(!destination.join("a.txt").exists());
        assert_eq!(
            fs::read_to_string(destination.join("blocked")).unwrap(),
            "in the way"
        );
    }
}
