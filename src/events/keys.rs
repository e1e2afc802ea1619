//! Key binding definitions.

use crossterm::event::{KeyCode, KeyEvent};

/// Key binding configuration.
///
/// With vim mode enabled, j/k/h/l act as movement aliases alongside the
/// arrow keys.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    /// Whether vim-style bindings are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    /// Whether this key moves the cursor up.
    pub fn is_up(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Up || (self.vim_mode && key.code == KeyCode::Char('k'))
    }

    /// Whether this key moves the cursor down.
    pub fn is_down(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Down || (self.vim_mode && key.code == KeyCode::Char('j'))
    }

    /// Whether this key moves to the previous page.
    pub fn is_left(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Left || (self.vim_mode && key.code == KeyCode::Char('h'))
    }

    /// Whether this key moves to the next page.
    pub fn is_right(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Right || (self.vim_mode && key.code == KeyCode::Char('l'))
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}
