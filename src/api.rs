use crate::{
    loader::{self, LoadError},
    materialize::{self, GenerateOptions, MaterializeError, Outcome},
    preview::print_structure,
    tree::ParseOptions,
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DircraftError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] MaterializeError),
}

/// Parses `input` (yaml file, tree-text file, or inline structure string)
/// and creates the described directories and files under `destination`.
///
/// # Errors
///
/// Returns a [`DircraftError`] if:
///
/// - The input file cannot be read, or its yaml does not describe a
///   mapping-of-mappings/strings structure.
/// - The confirmation prompt fails.
/// - A directory or file cannot be created or written to.
pub fn generate(
    input: &str,
    destination: &str,
    parse_options: ParseOptions,
    generate_options: GenerateOptions,
) -> Result<Outcome, DircraftError> {
    log::debug!("loading structure from: {}", input);

    let structure = loader::load_structure(input, &parse_options)?;

    let outcome = materialize::try_generate(&structure, Path::new(destination), generate_options)?;

    Ok(outcome)
}

/// Parses `input` and prints the resulting tree without touching the
/// filesystem beyond the dispatcher's existence check and file read.
///
/// # Errors
///
/// Returns a [`DircraftError`] if the input file cannot be read or parsed.
pub fn preview(input: &str, parse_options: ParseOptions) -> Result<(), DircraftError> {
    log::debug!("loading structure from: {}", input);

    let structure = loader::load_structure(input, &parse_options)?;

    print_structure(&structure, Path::new(input));

    Ok(())
}
