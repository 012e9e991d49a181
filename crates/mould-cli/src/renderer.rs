//! Terminal rendering for markdown and JSON output
//!
//! Markdown goes through termimad when color is enabled and is printed as-is
//! otherwise. JSON output is never styled.

use anyhow::{Context, Result};
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Tables need the whole block at once; everything else is inline.
            if markdown.lines().any(|line| line.starts_with('|')) {
                self.skin.print_text(markdown);
            } else {
                for line in markdown.lines() {
                    if line.starts_with('#') {
                        println!("\x1b[36m{line}\x1b[0m");
                    } else {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Print a value as pretty JSON.
    pub fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_render_json_accepts_slices() {
        let renderer = TerminalRenderer::new(false);
        let values: Vec<u32> = vec![1, 2];
        assert!(renderer.render_json(values.as_slice()).is_ok());
    }
}
