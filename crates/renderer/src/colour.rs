// SPDX-License-Identifier: MIT

//!
//! Generate, manipulate, and manage colours used when drawing a timeline
//!

use eframe::egui;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The `Colour` type.  Serialised as a hex string (e.g. `"#008000"`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for egui::Color32 {
    fn from(value: Colour) -> Self {
        egui::Color32::from_rgb(value.r, value.g, value.b)
    }
}

impl From<egui::Color32> for Colour {
    fn from(value: egui::Color32) -> Self {
        Colour::from_rgb(value.r(), value.g(), value.b())
    }
}

impl From<Colour> for [u8; 3] {
    fn from(value: Colour) -> Self {
        [value.r, value.g, value.b]
    }
}

impl From<[u8; 3]> for Colour {
    fn from(value: [u8; 3]) -> Self {
        Colour::from_rgb(value[0], value[1], value[2])
    }
}

impl Colour {
    pub const BLACK: Colour = Colour::from_rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::from_rgb(255, 255, 255);
    pub const GREEN: Colour = Colour::from_rgb(0, 128, 0);
    pub const BLUE: Colour = Colour::from_rgb(0, 0, 255);
    pub const LIGHT_BLUE: Colour = Colour::from_rgb(173, 216, 230);
    pub const GREY: Colour = Colour::from_rgb(190, 190, 190);

    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: AsRef<str>>(hex_colour: S) -> Result<Self, ()> {
        let hex_colour = hex_colour.as_ref().trim();
        let hex_colour = hex_colour.strip_prefix('#').unwrap_or(hex_colour);

        // Drop any alpha component
        let hex_colour = match hex_colour.len() {
            6 => hex_colour,
            8 => &hex_colour[0..6],
            _ => return Err(()),
        };
        if !hex_colour.is_ascii() {
            return Err(());
        }

        // Convert RGB hex digits to u8s
        let r = u8::from_str_radix(&hex_colour[0..2], 16);
        let g = u8::from_str_radix(&hex_colour[2..4], 16);
        let b = u8::from_str_radix(&hex_colour[4..6], 16);
        match (r, g, b) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Colour::from_rgb(r, g, b)),
            _ => Err(()),
        }
    }

    /// To get RGB as, say, #0affc3
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Get a lighter shade of the specified colour
    pub fn lightened_colour(colour: Colour) -> Colour {
        let old_r: f64 = colour.r.into();
        let old_g: f64 = colour.g.into();
        let old_b: f64 = colour.b.into();
        let new_r: f64 = (old_r + (0.5 * (255.0 - old_r))).round();
        let new_g: f64 = (old_g + (0.5 * (255.0 - old_g))).round();
        let new_b: f64 = (old_b + (0.5 * (255.0 - old_b))).round();
        Colour::from_rgb(new_r as u8, new_g as u8, new_b as u8)
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
        let hex = String::deserialize(deserializer)?;
        Colour::from_hex(&hex)
            .map_err(|_| serde::de::Error::custom(format!("`{hex}` is not a hex colour")))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(Colour::from_hex("#008000"), Ok(Colour::GREEN));
        assert_eq!(Colour::from_hex("008000"), Ok(Colour::GREEN));
        assert_eq!(Colour::from_hex("#008000ff"), Ok(Colour::GREEN));
        assert!(Colour::from_hex("#00800").is_err());
        assert!(Colour::from_hex("#zz8000").is_err());
        assert!(Colour::from_hex("#00800é").is_err());
    }

    #[test]
    fn to_hex() {
        assert_eq!(Colour::from_rgb(10, 255, 195).to_hex(), "#0affc3");
        assert_eq!(Colour::from_hex(Colour::LIGHT_BLUE.to_hex()), Ok(Colour::LIGHT_BLUE));
    }

    #[test]
    fn lightened() {
        assert_eq!(
            Colour::lightened_colour(Colour::BLACK),
            Colour::from_rgb(128, 128, 128)
        );
        assert_eq!(Colour::lightened_colour(Colour::WHITE), Colour::WHITE);
    }

    #[test]
    fn serde_as_hex_string() {
        let json = serde_json::to_string(&Colour::GREEN).unwrap();
        assert_eq!(json, r##""#008000""##);
        let colour: Colour = serde_json::from_str(r##""#ADD8E6""##).unwrap();
        assert_eq!(colour, Colour::LIGHT_BLUE);
        assert!(serde_json::from_str::<Colour>(r#""green""#).is_err());
    }
}
