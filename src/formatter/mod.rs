//! Pattern rendering and locale substitution

mod glyph;
mod number;

pub use glyph::{neutral, substitute, Glyph};
use number::render_number;

use crate::ast::Pattern;
use crate::formatter::glyph::push_str;
use crate::locale::LocaleDefinition;

impl Pattern {
    /// Render a value into neutral glyphs.
    ///
    /// Non-finite values render as `NaN`, `Infinity` or `-Infinity`.
    pub fn render(&self, value: f64) -> Vec<Glyph> {
        if value.is_nan() {
            return text_glyphs("NaN");
        }
        if value.is_infinite() {
            return text_glyphs(if value.is_sign_positive() {
                "Infinity"
            } else {
                "-Infinity"
            });
        }

        render_number(value, self)
    }

    /// Format a value with this pattern and a locale's glyphs.
    pub fn format(&self, value: f64, locale: &LocaleDefinition) -> String {
        substitute(&self.render(value), locale)
    }

    /// Format a value with the neutral US-style glyphs (`$0,0.00` as written).
    pub fn format_neutral(&self, value: f64) -> String {
        neutral(&self.render(value))
    }
}

fn text_glyphs(s: &str) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(s.len());
    push_str(&mut glyphs, s);
    glyphs
}
