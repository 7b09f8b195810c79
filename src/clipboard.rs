//! Clipboard integration for copying calculator results
//!
//! Uses arboard for cross-platform clipboard access

use anyhow::Result;
use arboard::Clipboard;

/// Copy text to system clipboard
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(()); // Nothing to copy
    }

    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_copy() {
        // Should not touch the clipboard at all
        assert!(copy("").is_ok());
    }
}
