//! Theme Module
//!
//! Color constants and frame/button builders for the dark cosmic look.
//!
//! ```rust,ignore
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::GOLD, "Today's Cosmic Wonder");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
