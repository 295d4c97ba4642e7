//! User prompt utilities for interactive confirmation

use anyhow::Result;
use dialoguer::Confirm;

/// Ask user for yes/no confirmation
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_prompt_module_exists() {
        // Basic compile test - actual prompts can't be tested in CI
    }
}
