use inquire::Confirm;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("unable to read confirmation from the terminal")]
    #[diagnostic(
        code(dircraft::prompt::confirm),
        help("Re-run with --yes to skip the prompt")
    )]
    Confirm(#[from] inquire::InquireError),
}

/// Asks whether the previewed structure should be written to disk.
pub fn apply_changes() -> Result<bool, PromptError> {
    let confirmed = Confirm::new("Apply these changes?")
        .with_default(true)
        .with_help_message("Nothing has been written yet")
        .prompt()?;

    Ok(confirmed)
}
