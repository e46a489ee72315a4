//! Abstract input key event, independent of terminal library.
//!
//! Converted from crossterm::event::KeyEvent at the frontend boundary, so
//! this crate stays free of terminal-specific types.

/// Abstract input key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}
