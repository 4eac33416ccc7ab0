use crate::errors::{FileOperation, IoError};
use crate::inline::parse_inline;
use crate::structure::Directory;
use crate::tree::{parse_tree, ParseOptions};
use miette::Diagnostic;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("I/O error within loader domain")]
    #[diagnostic(code(dircraft::loader::io))]
    Io(#[from] IoError),

    #[error("unable to parse yaml file at '{path}'")]
    #[diagnostic(
        code(dircraft::loader::parse_yaml),
        help("Directories must be mappings and files must be strings")
    )]
    ParseYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

fn from_yaml_file(path: &Path) -> Result<Directory, LoadError> {
    let content = fs::read_to_string(path)
        .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

    serde_yaml_ng::from_str(&content).map_err(|error| LoadError::ParseYaml {
        path: path.to_path_buf(),
        source: error,
    })
}

fn from_tree_file(path: &Path, options: &ParseOptions) -> Result<Directory, LoadError> {
    let content = fs::read_to_string(path)
        .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

    Ok(parse_tree(&content, options))
}

/// Routes an input source to the right parser.
///
/// An existing file with a `.yaml`/`.yml` extension is deserialized as yaml;
/// any other existing file (`.txt` or otherwise) is read as tree-text; a
/// string that names no existing file is parsed as the inline grammar. The
/// existence and extension check is this module's only filesystem probing.
pub fn load_structure(input: &str, options: &ParseOptions) -> Result<Directory, LoadError> {
    let path = Path::new(input);

    if path.exists() {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => {
                log::debug!("loading '{}' as yaml", input);
                from_yaml_file(path)
            }
            // .txt, and the fallback for any other existing file
            _ => {
                log::debug!("loading '{}' as tree-text", input);
                from_tree_file(path, options)
            }
        }
    } else {
        log::debug!("no file named '{}', parsing it as an inline structure string", input);
        Ok(parse_inline(input))
    }
}
