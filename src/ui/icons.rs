//! Shared UI icons.
//!
//! Each icon carries a plain-text fallback for terminals without emoji
//! support; plain output mode always uses the fallback.

use console::Emoji;

// Classification feedback
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[X] ");

// Board
pub static PIVOT: Emoji<'_, '_> = Emoji("📌 ", "");
pub static LEFT: Emoji<'_, '_> = Emoji("⬅️  ", "");
pub static RIGHT: Emoji<'_, '_> = Emoji("➡️  ", "");

// Game end
pub static TROPHY: Emoji<'_, '_> = Emoji("🏆 ", "");
pub static KEY: Emoji<'_, '_> = Emoji("🔑 ", "");
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "*");
