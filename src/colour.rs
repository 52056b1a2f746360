use strum_macros::{Display, EnumCount, EnumIter};

/// Console colour slots, plus the elemental pseudo-colours the feature
/// table uses for animated tiles. Resolving an elemental colour to a
/// concrete terminal colour per frame is the renderer's business, outside
/// this crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumCount, EnumIter)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    LightGrey,
    DarkGrey,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    Yellow,
    White,

    ElementalFire,
    ElementalRock,
    ElementalFloor,
    ElementalTree,
    ElementalMangrove,
    ElementalPoison,
    ElementalWarp,
    ElementalShimmerBlue,
    ElementalSlime,
    ElementalGold,
    ElementalUnholy,
    ElementalDark,
    ElementalRandom,
}

impl Colour {
    pub fn is_elemental(self) -> bool {
        self as usize > Colour::White as usize
    }
}
