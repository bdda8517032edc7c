use serde_derive::{Deserialize, Serialize};

pub mod menu;

/// Indices into the game's HUD colour table.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HudColor {
    PureWhite,
    White,
    Black,
    Grey,
    GreyLight,
    GreyDark,
    Red,
    RedLight,
    RedDark,
    Blue,
    BlueLight,
    BlueDark,
    Yellow,
    YellowLight,
    YellowDark,
    Orange,
    OrangeLight,
    OrangeDark,
    Green,
    GreenLight,
    GreenDark,
    Purple,
    PurpleLight,
    PurpleDark,
    Pink,
    RadarHealth,
    RadarArmour,
    RadarDamage,
    Gold = 107,
    Freemode = 116,
    Michael = 143,
    Franklin = 144,
    Trevor = 145
}

impl HudColor {
    pub fn id(self) -> i32 {
        self as i32
    }
}
