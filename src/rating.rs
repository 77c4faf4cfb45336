//! Star Rating
//!
//! Converts a 0-10 score into five star glyphs.

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⯪';
pub const EMPTY_STAR: char = '☆';

const SLOTS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl Stars {
    /// Halve the rating to a 0-5 scale; a remainder of at least .5 earns a half star
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() { rating.clamp(0.0, 10.0) } else { 0.0 };
        let scaled = rating / 2.0;
        let full = scaled.floor() as u8;
        let half = u8::from(scaled - scaled.floor() >= 0.5);
        Self { full, half, empty: SLOTS - full - half }
    }

    pub fn glyphs(&self) -> String {
        let mut out = String::with_capacity(SLOTS as usize * 3);
        out.extend(std::iter::repeat(FULL_STAR).take(self.full as usize));
        out.extend(std::iter::repeat(HALF_STAR).take(self.half as usize));
        out.extend(std::iter::repeat(EMPTY_STAR).take(self.empty as usize));
        out
    }
}

/// `7.5/10` style label, integers without decimals
pub fn rating_label(rating: f64) -> String {
    format!("{}/10", rating)
}
