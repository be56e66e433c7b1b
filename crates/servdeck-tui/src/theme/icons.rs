//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use servdeck_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn server(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f233}", // nf-fa-server
            IconMode::Unicode => "\u{25a4}",   // ▤
        }
    }

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f007}", // nf-fa-user
            IconMode::Unicode => "@",
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn lock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f023}", // nf-fa-lock
            IconMode::Unicode => "\u{2298}",   // ⊘
        }
    }

    pub fn external_link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f08e}", // nf-fa-external_link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn link_broken(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f127}", // nf-fa-chain_broken
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }
}
