//! [`Color`] and related data structures.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Text color.
///
/// Either one of the named book colors or a `#RRGGBB` hex code. Hex codes
/// are kept exactly as supplied (including digit casing) and re-emitted
/// verbatim when the component is rendered.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Color {
    /// One of the 15 named book colors.
    Named(NamedColor),
    /// A `#RRGGBB` hex color.
    Hex(HexColor),
}

/// A validated `#RRGGBB` hex color, stored verbatim.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct HexColor(Cow<'static, str>);

/// Named text color recognized by the book format.
///
/// Note that this palette has 15 entries; `dark_aqua` is not part of it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NamedColor {
    /// Name: `black`
    Black = 0,
    /// Name: `dark_blue`
    DarkBlue,
    /// Name: `dark_green`
    DarkGreen,
    /// Name: `dark_red`
    DarkRed,
    /// Name: `dark_purple`
    DarkPurple,
    /// Name: `gold`
    Gold,
    /// Name: `gray`
    Gray,
    /// Name: `dark_gray`
    DarkGray,
    /// Name: `blue`
    Blue,
    /// Name: `green`
    Green,
    /// Name: `aqua`
    Aqua,
    /// Name: `red`
    Red,
    /// Name: `light_purple`
    LightPurple,
    /// Name: `yellow`
    Yellow,
    /// Name: `white`
    White,
}

/// Color parsing error.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("'{0}' is not a named color or a '#RRGGBB' hex code")]
pub struct ColorError(pub String);

impl Color {
    pub const AQUA: Self = Self::Named(NamedColor::Aqua);
    pub const BLACK: Self = Self::Named(NamedColor::Black);
    pub const BLUE: Self = Self::Named(NamedColor::Blue);
    pub const DARK_BLUE: Self = Self::Named(NamedColor::DarkBlue);
    pub const DARK_GRAY: Self = Self::Named(NamedColor::DarkGray);
    pub const DARK_GREEN: Self = Self::Named(NamedColor::DarkGreen);
    pub const DARK_PURPLE: Self = Self::Named(NamedColor::DarkPurple);
    pub const DARK_RED: Self = Self::Named(NamedColor::DarkRed);
    pub const GOLD: Self = Self::Named(NamedColor::Gold);
    pub const GRAY: Self = Self::Named(NamedColor::Gray);
    pub const GREEN: Self = Self::Named(NamedColor::Green);
    pub const LIGHT_PURPLE: Self = Self::Named(NamedColor::LightPurple);
    pub const RED: Self = Self::Named(NamedColor::Red);
    pub const WHITE: Self = Self::Named(NamedColor::White);
    pub const YELLOW: Self = Self::Named(NamedColor::Yellow);

    /// Constructs a new hex color from red, green, and blue components.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Hex(HexColor(format!("#{r:02x}{g:02x}{b:02x}").into()))
    }
}

impl HexColor {
    /// The color token, exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl NamedColor {
    /// All 15 recognized named colors, in palette order.
    pub const ALL: [Self; 15] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Returns the identifier of the color.
    pub const fn name(self) -> &'static str {
        [
            "black",
            "dark_blue",
            "dark_green",
            "dark_red",
            "dark_purple",
            "gold",
            "gray",
            "dark_gray",
            "blue",
            "green",
            "aqua",
            "red",
            "light_purple",
            "yellow",
            "white",
        ][self as usize]
    }
}

impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        Self::Named(value)
    }
}

impl From<HexColor> for Color {
    fn from(value: HexColor) -> Self {
        Self::Hex(value)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.starts_with('#') {
            return Ok(Self::Hex(HexColor::try_from(value)?));
        }

        Ok(Self::Named(NamedColor::try_from(value)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.starts_with('#') {
            return Ok(Self::Hex(HexColor::try_from(value)?));
        }

        Ok(Self::Named(NamedColor::try_from(value.as_str())?))
    }
}

impl TryFrom<&str> for NamedColor {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "black" => Ok(NamedColor::Black),
            "dark_blue" => Ok(NamedColor::DarkBlue),
            "dark_green" => Ok(NamedColor::DarkGreen),
            "dark_red" => Ok(NamedColor::DarkRed),
            "dark_purple" => Ok(NamedColor::DarkPurple),
            "gold" => Ok(NamedColor::Gold),
            "gray" => Ok(NamedColor::Gray),
            "dark_gray" => Ok(NamedColor::DarkGray),
            "blue" => Ok(NamedColor::Blue),
            "green" => Ok(NamedColor::Green),
            "aqua" => Ok(NamedColor::Aqua),
            "red" => Ok(NamedColor::Red),
            "light_purple" => Ok(NamedColor::LightPurple),
            "yellow" => Ok(NamedColor::Yellow),
            "white" => Ok(NamedColor::White),
            _ => Err(ColorError(value.into())),
        }
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_hex(value)?;
        Ok(HexColor(value.to_owned().into()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_hex(&value)?;
        Ok(HexColor(value.into()))
    }
}

fn validate_hex(value: &str) -> Result<(), ColorError> {
    match value.as_bytes() {
        [b'#', digits @ ..] if digits.len() == 6 => {
            if digits.iter().all(u8::is_ascii_hexdigit) {
                Ok(())
            } else {
                Err(ColorError(value.into()))
            }
        }
        _ => Err(ColorError(value.into())),
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            Color::Named(named) => named.name(),
            Color::Hex(hex) => hex.as_str(),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Named(named) => named.fmt(f),
            Color::Hex(hex) => hex.fmt(f),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
