use std::fmt;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGB colour carried by a leaf block.
///
/// Boards are built from the fixed [`Colour::PALETTE`], but any RGB triple can be stored.
///
/// # Serialization
///
/// Colours serialize as `"#rrggbb"` strings:
///
/// ```
/// use blocky_engine::Colour;
///
/// let json = serde_json::to_string(&Colour::REAL_RED).unwrap();
/// assert_eq!(json, "\"#c72c3a\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    pub const PACIFIC_POINT: Self = Self::new(1, 128, 181);
    pub const REAL_RED: Self = Self::new(199, 44, 58);
    pub const OLD_OLIVE: Self = Self::new(138, 151, 71);
    pub const DAFFODIL_DELIGHT: Self = Self::new(255, 211, 92);

    /// The legal leaf colours, in palette order.
    pub const PALETTE: [Self; 4] = [
        Self::PACIFIC_POINT,
        Self::REAL_RED,
        Self::OLD_OLIVE,
        Self::DAFFODIL_DELIGHT,
    ];

    const NAMES: [&'static str; 4] = ["Pacific Point", "Real Red", "Old Olive", "Daffodil Delight"];

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Position of this colour in [`Self::PALETTE`], if it is a palette colour.
    #[must_use]
    pub fn palette_index(self) -> Option<usize> {
        Self::PALETTE.iter().position(|&c| c == self)
    }

    /// Human-readable name of a palette colour.
    ///
    /// ```
    /// use blocky_engine::Colour;
    ///
    /// assert_eq!(Colour::OLD_OLIVE.name(), Some("Old Olive"));
    /// assert_eq!(Colour::new(0, 0, 0).name(), None);
    /// ```
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        self.palette_index().map(|i| Self::NAMES[i])
    }

    fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str(&self.to_hex()),
        }
    }
}

impl Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid colour: expected '#rrggbb', got '{s}'"))
        })
    }
}

/// Samples a palette colour uniformly, enabling `rng.random::<Colour>()`.
impl Distribution<Colour> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Colour {
        Colour::PALETTE[rng.random_range(0..Colour::PALETTE.len())]
    }
}
