//! Integration tests for the TUI front end
//!
//! Rendering runs against ratatui's `TestBackend` and asserts on the drawn
//! buffer text, so layout changes that drop captions, legends, or tabs are
//! caught without a real terminal.
