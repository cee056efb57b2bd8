//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. The `--no-color` flag sets an
//! in-process flag that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

/// Global override: when true, forces color off (set by `--no-color` flag).
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const TEAL: Rgb = Rgb::from_hex(0x5FB3B3); // Session and window names
const MOSS: Rgb = Rgb::from_hex(0x87A96B); // Success
const AMBER: Rgb = Rgb::from_hex(0xD7A65F); // Warning, step labels
const BRICK: Rgb = Rgb::from_hex(0xC2675A); // Error
const SLATE: Rgb = Rgb::from_hex(0x6C7380); // Secondary info

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, stream: owo_colors::Stream, color: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(stream, |t| t.truecolor(color.r, color.g, color.b))
        .to_string()
}

/// Session and window names.
pub fn teal(text: &str) -> String {
    paint(text, Stdout, TEAL)
}

/// Success headlines.
pub fn moss(text: &str) -> String {
    paint(text, Stdout, MOSS)
}

/// Step labels in `plan` output.
pub fn amber(text: &str) -> String {
    paint(text, Stdout, AMBER)
}

/// Labels and secondary info.
pub fn muted(text: &str) -> String {
    paint(text, Stdout, SLATE)
}

pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Error styling for stderr messages.
pub fn error(text: &str) -> String {
    paint(text, Stderr, BRICK)
}

/// Warning styling for stderr messages.
pub fn warning(text: &str) -> String {
    paint(text, Stderr, AMBER)
}

/// Hint styling for stderr messages.
pub fn hint(text: &str) -> String {
    paint(text, Stderr, SLATE)
}
