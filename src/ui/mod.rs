//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Screen and dialog drawing
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Card grid layout
//! - `emoji_card.rs` - Emoji card widget

mod draw;
pub mod emoji_card;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use layout::GridLayout;
pub use theme::Theme;
