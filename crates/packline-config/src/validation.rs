//! Synchronous option validation.

use crate::error::{ConfigError, Result};
use crate::options::CompileOptions;

/// Checks that every required option is present.
pub fn validate(options: &CompileOptions) -> Result<()> {
    if options.target.is_none() {
        return Err(ConfigError::MissingConfiguration("target"));
    }
    Ok(())
}
