//! Letter row layout
//!
//! Letters sit side by side on one baseline, each followed by its own
//! trailing space, and the whole row is centered on x = 0. Glyph widths come
//! from the host (it owns the font); this module only places them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Letter;
use crate::error::{Result, SimError};

/// One entry of the letter row, before placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LetterSpec {
    pub glyph: char,
    /// Measured glyph width
    pub width: f32,
    /// Gap after this glyph (layout only)
    pub space_right: f32,
}

impl LetterSpec {
    pub fn new(glyph: char, width: f32, space_right: f32) -> Self {
        Self {
            glyph,
            width,
            space_right,
        }
    }
}

/// The landing page's word and its hand-tuned trailing spaces
const PAGE_WORD: [(char, f32); 10] = [
    ('B', 3.0),
    ('L', 4.0),
    ('A', 0.0),
    ('C', 3.0),
    ('K', 12.0),
    ('J', 3.0),
    ('E', 3.0),
    ('L', 3.0),
    ('L', 3.0),
    ('Y', 0.0),
];

/// The page's "BLACK JELLY" row, with widths from the host's glyph measure
pub fn default_word(measure: impl Fn(char) -> f32) -> Vec<LetterSpec> {
    PAGE_WORD
        .iter()
        .map(|&(glyph, space_right)| LetterSpec::new(glyph, measure(glyph), space_right))
        .collect()
}

/// Place letters left to right, centered on x = 0, at baseline `letter_y`.
///
/// Ids are assigned in layout order and never reused.
pub fn layout_letters(specs: &[LetterSpec], letter_y: f32) -> Result<Vec<Letter>> {
    if specs.is_empty() {
        return Err(SimError::EmptyLayout);
    }
    for (index, spec) in specs.iter().enumerate() {
        if !spec.width.is_finite() || spec.width <= 0.0 {
            return Err(SimError::NonPositiveExtent {
                index,
                width: spec.width,
            });
        }
        if !spec.space_right.is_finite() || spec.space_right < 0.0 {
            return Err(SimError::NegativeSpacing {
                index,
                space: spec.space_right,
            });
        }
    }

    let text_width: f32 = specs.iter().map(|s| s.width + s.space_right).sum();
    let mut next_x = -0.5 * text_width;

    let letters = specs
        .iter()
        .enumerate()
        .map(|(id, spec)| {
            let half_width = spec.width / 2.0;
            let letter = Letter {
                id: id as u32,
                glyph: spec.glyph,
                pos: Vec2::new(next_x + half_width, letter_y),
                half_width,
                space_right: spec.space_right,
            };
            next_x += spec.width + spec.space_right;
            letter
        })
        .collect();

    Ok(letters)
}
