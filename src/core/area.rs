//! Area-of-effect shapes and ground marker colors.

use serde::{Deserialize, Serialize};

/// Shape of an ability's area of effect, centered on the target cell.
///
/// The animation core never rasterizes these; it forwards them to the
/// ground marker. The only property it reads is whether the shape covers
/// more than the target cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    #[default]
    SingleCell,
    Circle1,
    Circle2,
    Circle3,
    Plus1,
    Plus2,
    Plus3,
    X1,
    X2,
    X3,
    Square1,
    Square2,
}

impl Area {
    /// `true` if the shape is just the target cell.
    #[must_use]
    pub const fn is_single_cell(self) -> bool {
        matches!(self, Self::SingleCell)
    }
}

/// An RGB marker color.
///
/// Serialized as a `#rrggbb` string so recipes stay readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub const RED: Self = Self::rgb(0xff0000);
    pub const GREEN: Self = Self::rgb(0x00ff00);
    pub const BLUE: Self = Self::rgb(0x0000ff);
    pub const YELLOW: Self = Self::rgb(0xffff00);
    pub const WHITE: Self = Self::rgb(0xffffff);
    /// Debuff areas.
    pub const PURPLE: Self = Self::rgb(0x9f00ef);
    /// Poison areas.
    pub const MAGENTA: Self = Self::rgb(0xea5ef9);
    /// Default accent for damage-return areas.
    pub const AGILITY: Self = Self::rgb(0x45a2ff);

    #[must_use]
    pub const fn rgb(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok().map(Self::rgb),
            3 => {
                let short = u32::from_str_radix(hex, 16).ok()?;
                let r = (short >> 8) & 0xf;
                let g = (short >> 4) & 0xf;
                let b = short & 0xf;
                Some(Self::rgb((r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid color '{value}'"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
