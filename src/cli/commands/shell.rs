//! Shell completions command.

use crate::error::PlannerError;
use crate::features::shell::{completion_install_instructions, generate_completions, shell_from_str};

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the shell name is not recognised.
pub fn completions(shell: &str, install: bool) -> Result<String, PlannerError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        PlannerError::invalid_input(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}
