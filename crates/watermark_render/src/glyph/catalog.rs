use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::bitmap::Bitmap;
use super::font::{self, GLYPH_COLS, GLYPH_ROWS};

/// Unscaled bitmap for a single symbol.
pub type Glyph = Bitmap;

/// Byte-keyed table of fixed-size glyphs.
///
/// Built from the embedded symbol table and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct GlyphCatalog {
    glyphs: BTreeMap<u8, Glyph>,
}

static GLOBAL: OnceLock<GlyphCatalog> = OnceLock::new();

impl GlyphCatalog {
    pub fn builtin() -> Self {
        let mut glyphs = BTreeMap::new();
        for (offset, pattern) in font::LETTERS.iter().enumerate() {
            glyphs.insert(b'A' + offset as u8, Bitmap::from_pattern(pattern));
        }
        for (code, pattern) in font::SPECIALS.iter() {
            glyphs.insert(*code, Bitmap::from_pattern(pattern));
        }
        Self { glyphs }
    }

    /// Process-wide catalog, built on first use.
    pub fn global() -> &'static GlyphCatalog {
        GLOBAL.get_or_init(Self::builtin)
    }

    pub fn lookup(&self, code: u8) -> Option<&Glyph> {
        self.glyphs.get(&code)
    }

    /// Glyph placed between adjacent characters.
    pub fn separator(&self) -> &Glyph {
        &self.glyphs[&font::SEPARATOR]
    }

    pub fn contains(&self, code: u8) -> bool {
        self.glyphs.contains_key(&code)
    }

    /// Supported symbols in ascending code order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().map(|&code| char::from(code))
    }

    /// Base glyph size as `(rows, cols)`.
    pub fn glyph_size(&self) -> (usize, usize) {
        (GLYPH_ROWS, GLYPH_COLS)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for GlyphCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
