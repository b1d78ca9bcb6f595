use serde::{
    Deserialize,
    Serialize,
};

/// Chat palette color.
#[derive(Serialize, Deserialize, PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl TextColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Black => [0, 0, 0],
            Self::DarkBlue => [0, 0, 170],
            Self::DarkGreen => [0, 170, 0],
            Self::DarkAqua => [0, 170, 170],
            Self::DarkRed => [170, 0, 0],
            Self::DarkPurple => [170, 0, 170],
            Self::Gold => [255, 170, 0],
            Self::Gray => [170, 170, 170],
            Self::DarkGray => [85, 85, 85],
            Self::Blue => [85, 85, 255],
            Self::Green => [85, 255, 85],
            Self::Aqua => [85, 255, 255],
            Self::Red => [255, 85, 85],
            Self::LightPurple => [255, 85, 255],
            Self::Yellow => [255, 255, 85],
            Self::White => [255, 255, 255],
        }
    }
}
