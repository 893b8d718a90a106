//! Color palettes.
//!
//! Entry `n*4 + g` colors group `g` of nibble `n`, i.e. the palette is indexed
//! by absolute bit position in the 16-bit value. Lookups past the end return
//! [`ERROR_COLOR`] so a short palette shows up as red instead of failing.

use crate::types::{Rgb, DEFAULT_ACTIVE_COLOR, DEFAULT_INACTIVE_COLOR, ERROR_COLOR, NEUTRAL_COLOR, PALETTE_LEN};

/// How far a palette edit spreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brush {
    /// Only the picked entry
    #[default]
    Pixel,
    /// The four entries of the picked entry's nibble band
    Nibble,
    /// All sixteen entries
    Global,
}

impl Brush {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pixel" => Some(Brush::Pixel),
            "nibble" => Some(Brush::Nibble),
            "global" => Some(Brush::Global),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Gold on dark grey, the palette of a fresh slot.
    pub fn standard() -> Self {
        let mut colors = vec![NEUTRAL_COLOR; PALETTE_LEN];
        colors[0] = DEFAULT_ACTIVE_COLOR;
        colors[1] = DEFAULT_INACTIVE_COLOR;
        Self { colors }
    }

    /// Teal and gold bands: nibble 0 dark teal, 1 dark gold, 2 teal, 3 gold.
    pub fn teal_gold() -> Self {
        let bands = [
            Rgb::new(0x00, 0x7E, 0x7F),
            Rgb::new(0x7F, 0x63, 0x00),
            Rgb::new(0x00, 0xFC, 0xFF),
            Rgb::new(0xFF, 0xC7, 0x00),
        ];
        let colors = bands.iter().flat_map(|&c| [c; 4]).collect();
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at `index`, or [`ERROR_COLOR`] when the palette is too short.
    #[inline]
    pub fn color_at(&self, index: usize) -> Rgb {
        self.colors.get(index).copied().unwrap_or(ERROR_COLOR)
    }

    /// Color of group `group` in the band of nibble `nibble`.
    #[inline]
    pub fn band_color(&self, nibble: u8, group: u8) -> Rgb {
        self.color_at(nibble as usize * 4 + group as usize)
    }

    /// Copy padded with the neutral color up to sixteen entries, and cut to
    /// sixteen if longer. This is the form an editor works on.
    pub fn padded(&self) -> Self {
        let mut colors: Vec<Rgb> = self.colors.iter().copied().take(PALETTE_LEN).collect();
        colors.resize(PALETTE_LEN, NEUTRAL_COLOR);
        Self { colors }
    }

    /// Apply `color` at `index` with the given brush.
    ///
    /// The palette is padded to sixteen entries first. Indices past the
    /// palette are ignored.
    pub fn paint(&mut self, index: usize, color: Rgb, brush: Brush) {
        if index >= PALETTE_LEN {
            return;
        }
        if self.colors.len() < PALETTE_LEN {
            self.colors.resize(PALETTE_LEN, NEUTRAL_COLOR);
        }
        let range = match brush {
            Brush::Pixel => index..index + 1,
            Brush::Nibble => {
                let start = index / 4 * 4;
                start..start + 4
            }
            Brush::Global => 0..PALETTE_LEN,
        };
        for c in &mut self.colors[range] {
            *c = color;
        }
    }
}
