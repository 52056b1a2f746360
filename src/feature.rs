use bitflags::bitflags;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::colour::Colour;
use crate::session::Session;
use crate::tables::features::FEATURE_DEFS;

bitflags! {
    /// Behavioural flags for dungeon features.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatFlags: u32 {
        const OPAQUE = 0x01;
        const SOLID = 0x02;
        const WALL = 0x04;
        const TRAP = 0x08;
        const NOTABLE = 0x10;
        const EXAMINE_HINT = 0x20;
    }
}

/// Glyph classes for drawing a feature. The concrete character per class
/// comes from the player's display options.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIter)]
pub enum DChar {
    Wall,
    WallMagic,
    PermaWall,
    Floor,
    FloorMagic,
    DoorOpen,
    DoorClosed,
    Trap,
    StairsDown,
    StairsUp,
    Grate,
    Tree,
    Arch,
    Fountain,
    Wavy,
    Statue,
    Altar,
    Transporter,
    TransporterLanding,
}

/// How a feature shows up on the minimap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumIter)]
pub enum MapFeature {
    Unseen,
    Floor,
    Wall,
    Door,
    Water,
    DeepWater,
    Lava,
    Trap,
    Portal,
    StairUp,
    StairDown,
    StairBranch,
    Feature,
    Transporter,
    TransporterLanding,
}

/// Dungeon tile types known to the renderer and the description screens.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumCount, EnumIter)]
pub enum FeatureType {
    Unseen,
    ExploreHorizon,
    TravelTrail,

    ClosedDoor,
    RunedDoor,
    SealedDoor,
    OpenDoor,

    Tree,
    Mangrove,
    DemonicTree,
    PetrifiedTree,

    MetalWall,
    CrystalWall,
    RockWall,
    SlimyWall,
    StoneWall,
    PermarockWall,
    ClearRockWall,
    ClearStoneWall,
    ClearPermarockWall,
    Grate,

    OpenSea,
    LavaSea,
    EndlessSalt,
    OrcishIdol,
    GraniteStatue,
    MalignGateway,

    Lava,
    DeepWater,
    ShallowWater,
    ToxicBog,
    Floor,
    ExpiredPortal,

    TrapArrow,
    TrapSpear,
    TrapBlade,
    TrapDart,
    TrapBolt,
    TrapNet,
    TrapPlate,
    TrapDispersal,
    TrapTeleport,
    TrapTeleportPermanent,
    TrapAlarm,
    TrapZot,
    PassageOfGolubria,
    TrapShaft,
    TrapWeb,

    EnterShop,
    AbandonedShop,
    StoneArch,
    UnknownPortal,

    StoneStairsDownI,
    StoneStairsDownII,
    StoneStairsDownIII,
    StoneStairsUpI,
    StoneStairsUpII,
    StoneStairsUpIII,
    EscapeHatchDown,
    EscapeHatchUp,

    EnterDis,
    EnterGehenna,
    EnterCocytus,
    EnterTartarus,
    EnterHell,
    ExitHell,
    EnterAbyss,
    ExitAbyss,
    EnterPandemonium,
    TransitPandemonium,
    ExitPandemonium,
    EnterZot,
    ExitZot,
    ExitDungeon,

    EnterTemple,
    ExitTemple,
    EnterOrc,
    ExitOrc,
    EnterLair,
    ExitLair,
    EnterSwamp,
    ExitSwamp,

    UnknownAltar,
    AltarZin,
    AltarShiningOne,
    AltarKikubaaqudgha,
    AltarYredelemnul,
    AltarXom,
    AltarOkawaru,
    AltarMakhleb,
    AltarTrog,
    AltarElyvilon,
    AltarJiyva,
    AltarGozag,
    AltarEcumenical,

    FountainBlue,
    FountainSparkling,
    FountainBlood,
    DryFountain,

    Transporter,
    TransporterLanding,
    SealedStairsUp,
    SealedStairsDown,
    AbyssalStair,
}

/// The five colour slots of a feature.
#[derive(Clone, Copy, Debug)]
pub struct FeatColours {
    pub colour: Colour,
    pub unseen: Colour,
    pub seen: Colour,
    pub em: Colour,
    pub seen_em: Colour,
}

// In the default case, these translations hold:
// unseen_colour -> seen_colour
// seen_colour -> seen_em_colour
// colour -> em_colour
impl FeatColours {
    /// Explicit colour and map colour.
    pub(crate) const fn with_map(colour: Colour, map: Colour) -> Self {
        FeatColours { colour, unseen: map, seen: map, em: colour, seen_em: map }
    }

    /// The default (darkgrey) map colour.
    pub(crate) const fn of(colour: Colour) -> Self {
        Self::with_map(colour, Colour::DarkGrey)
    }

    /// For when colour and unseen colour are equal.
    pub(crate) const fn and_map(colour: Colour) -> Self {
        Self::with_map(colour, colour)
    }

    pub(crate) const fn full(
        colour: Colour,
        unseen: Colour,
        seen: Colour,
        em: Colour,
        seen_em: Colour,
    ) -> Self {
        FeatColours { colour, unseen, seen, em, seen_em }
    }
}

/// Everything the renderer and the description screens need to know about
/// one tile type. Static, read-only, one entry per [`FeatureType`].
#[derive(Clone, Copy, Debug)]
pub struct FeatureDef {
    pub feat: FeatureType,
    /// Display name msgid; empty for features that are never shown.
    pub name: &'static str,
    /// Name used by vault (map builder) definitions.
    pub vaultname: &'static str,
    pub dchar: Option<DChar>,
    pub magic_dchar: Option<DChar>,
    pub colours: FeatColours,
    pub flags: FeatFlags,
    pub minimap: MapFeature,
}

/// Look up the descriptor for a feature.
///
/// ## Panics
/// Panics if the table has a gap or is out of order. That is a bug in the
/// table itself, and the table tests cover it, so a released build cannot
/// hit this.
pub fn feature_def(feat: FeatureType) -> &'static FeatureDef {
    let def = &FEATURE_DEFS[feat as usize];
    assert!(def.feat == feat, "feature table out of order at {feat}");
    def
}

/// The localized display name of a feature.
pub fn feature_name<'a>(feat: FeatureType, session: &'a Session) -> &'a str {
    session.gettext(feature_def(feat).name)
}

/// Reverse lookup from the name used in vault definitions.
pub fn feature_by_vaultname(name: &str) -> Option<FeatureType> {
    FEATURE_DEFS.iter().find(|def| def.vaultname == name).map(|def| def.feat)
}
