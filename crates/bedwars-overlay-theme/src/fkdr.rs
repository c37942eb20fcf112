//! Final kill/death ratio colour bands
//!
//! Upper edges are inclusive: a ratio of exactly 1.0 is `UpToOne`.

use ratatui::style::Color;

/// Bucket a numeric FKDR falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkdrBand {
    UpToTenth,
    UpToHalf,
    UpToOne,
    UpToTwo,
    UpToThree,
    UpToFour,
    UpToFive,
    UpToSix,
    AboveSix,
}

impl FkdrBand {
    pub fn of(ratio: f64) -> Self {
        match ratio {
            r if r <= 0.1 => Self::UpToTenth,
            r if r <= 0.5 => Self::UpToHalf,
            r if r <= 1.0 => Self::UpToOne,
            r if r <= 2.0 => Self::UpToTwo,
            r if r <= 3.0 => Self::UpToThree,
            r if r <= 4.0 => Self::UpToFour,
            r if r <= 5.0 => Self::UpToFive,
            r if r <= 6.0 => Self::UpToSix,
            _ => Self::AboveSix,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::UpToTenth => Color::Rgb(0x87, 0x87, 0x87),
            Self::UpToHalf => Color::Rgb(0xAD, 0xAD, 0xAD),
            Self::UpToOne => Color::Rgb(0xFF, 0xC7, 0xBA),
            Self::UpToTwo => Color::Rgb(0xFF, 0xA3, 0x84),
            Self::UpToThree => Color::Rgb(0xFF, 0x7A, 0x4D),
            Self::UpToFour => Color::Rgb(0xFF, 0x55, 0x00),
            Self::UpToFive => Color::Rgb(0xE6, 0x4D, 0x00),
            Self::UpToSix => Color::Rgb(0xCC, 0x44, 0x00),
            Self::AboveSix => Color::Rgb(0xF0, 0x7F, 0x65),
        }
    }
}

/// Neutral colour for an unknown ratio
pub const UNKNOWN_FKDR_COLOR: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Colour of the FKDR cell; `None` means the ratio is unknown
pub fn fkdr_color(ratio: Option<f64>) -> Color {
    ratio.map_or(UNKNOWN_FKDR_COLOR, |r| FkdrBand::of(r).color())
}
