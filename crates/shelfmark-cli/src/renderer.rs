//! Terminal output for the `shelf` binary.
//!
//! Everything the core crate formats is lightweight markdown: `##` headings
//! per book or friend, bullet lists for loan details and contacts, bold
//! status markers. The renderer styles that through termimad, or with
//! `--no-color` passes it through untouched so the output stays stable for
//! scripts and the integration tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    color_enabled: bool,
    skin: MadSkin,
}

/// Skin tuned to the catalog and loan listings: cyan headings, green bold
/// for status markers like "In stock", dim italics for secondary detail.
fn library_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Cyan);
    skin.bold.set_fg(Color::Green);
    skin.italic.set_fg(Color::AnsiValue(245));
    skin
}

impl TerminalRenderer {
    pub fn new(color_enabled: bool) -> Self {
        Self {
            color_enabled,
            skin: library_skin(),
        }
    }

    /// Prints a block of markdown. Heading lines keep their hash markers so
    /// the colored and plain renditions stay line-for-line identical.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.color_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
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
    fn test_plain_mode_for_scripts() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.color_enabled);
    }

    #[test]
    fn test_default_is_colored() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.color_enabled);
    }

    #[test]
    fn test_render_accepts_listing_markdown() {
        let renderer = TerminalRenderer::new(false);
        let listing = "# Books\n\n## Dune (ISBN: 9780441013593)\n- Status: In stock\n";
        assert!(renderer.render(listing).is_ok());
    }
}
