// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the calculus CLI.
//!
//! Marks and frames are painted with OneDark colors on dark terminals and One
//! Light colors on light ones. `CALCULUS_THEME` picks the palette; otherwise
//! the background from `COLORFGBG` decides, and dark wins when neither says.
//! Nothing is painted when `NO_COLOR` is set or stdout is not a terminal.

use std::sync::OnceLock;

/// Inner width of a frame, borders excluded.
pub const FRAME_WIDTH: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    OneDark,
    OneLight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Cyan,
    Gray,
}

impl Color {
    fn rgb(self, palette: Palette) -> (u8, u8, u8) {
        match (palette, self) {
            (Palette::OneDark, Color::Red) => (224, 108, 117),
            (Palette::OneDark, Color::Green) => (152, 195, 121),
            (Palette::OneDark, Color::Yellow) => (229, 192, 123),
            (Palette::OneDark, Color::Cyan) => (86, 182, 194),
            (Palette::OneDark, Color::Gray) => (92, 99, 112),
            (Palette::OneLight, Color::Red) => (228, 86, 73),
            (Palette::OneLight, Color::Green) => (80, 161, 79),
            (Palette::OneLight, Color::Yellow) => (193, 132, 1),
            (Palette::OneLight, Color::Cyan) => (1, 132, 188),
            (Palette::OneLight, Color::Gray) => (160, 161, 167),
        }
    }
}

static PALETTE: OnceLock<Palette> = OnceLock::new();

/// Palette named by `CALCULUS_THEME`, if it names one.
fn palette_from_setting(value: &str) -> Option<Palette> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" | "d" => Some(Palette::OneDark),
        "light" | "l" => Some(Palette::OneLight),
        _ => None,
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). Backgrounds 7 and
/// 9 to 15 are light.
fn palette_from_colorfgbg(value: &str) -> Option<Palette> {
    let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Palette::OneLight
    } else {
        Palette::OneDark
    })
}

pub fn palette() -> Palette {
    *PALETTE.get_or_init(|| {
        std::env::var("CALCULUS_THEME")
            .ok()
            .and_then(|v| palette_from_setting(&v))
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| palette_from_colorfgbg(&v))
            })
            .unwrap_or(Palette::OneDark)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// PAINTING
// ═══════════════════════════════════════════════════════════════════════════

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in color codes when the terminal wants them.
pub fn paint(color: Color, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = color.rgb(palette());
    let weight = if bold { BOLD } else { "" };
    format!("{}\x1b[38;2;{};{};{}m{}{}", weight, r, g, b, text, RESET)
}

/// Width as seen on screen, ignoring SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut rest = s;
    while let Some(start) = rest.find('\x1b') {
        width += rest[..start].chars().count();
        rest = match rest[start..].find('m') {
            Some(end) => &rest[start + end + 1..],
            None => "",
        };
    }
    width + rest.chars().count()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pass_mark() -> String {
    paint(Color::Green, true, "✓")
}

pub fn fail_mark() -> String {
    paint(Color::Red, true, "✗")
}

pub fn warn_mark() -> String {
    paint(Color::Yellow, true, "!")
}

// ═══════════════════════════════════════════════════════════════════════════
// FRAMES
// ═══════════════════════════════════════════════════════════════════════════

/// `┌─ LABEL ─────┐`
pub fn frame_top(label: &str) {
    let title = format!("─ {} ", paint(Color::Cyan, true, label));
    let rule = "─".repeat(FRAME_WIDTH.saturating_sub(visible_len(&title)));
    println!(
        "{}{}{}",
        paint(Color::Gray, false, "┌"),
        title,
        paint(Color::Gray, false, &format!("{}┐", rule))
    );
}

/// `│ content     │`
pub fn frame_row(content: &str) {
    let side = paint(Color::Gray, false, "│");
    println!("{}{}{}", side, pad_right(content, FRAME_WIDTH), side);
}

/// `└─────────────┘`
pub fn frame_bottom() {
    let rule = format!("└{}┘", "─".repeat(FRAME_WIDTH));
    println!("{}", paint(Color::Gray, false, &rule));
}
