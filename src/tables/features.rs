//! The static descriptor table backing [`crate::feature`].
//!
//! Entries must stay in [`FeatureType`] declaration order; the table tests
//! check that, along with vaultname uniqueness.

use crate::colour::Colour::{self, *};
use crate::feature::{DChar, FeatColours, FeatFlags, FeatureDef, FeatureType, MapFeature};

const fn trap(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
    colour: Colour,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(DChar::Trap),
        magic_dchar: None,
        colours: FeatColours::and_map(colour),
        flags: FeatFlags::TRAP,
        minimap: MapFeature::Trap,
    }
}

const fn portal_entrance(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
    colour: Colour,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(DChar::Arch),
        magic_dchar: None,
        colours: FeatColours::full(colour, LightGrey, colour, colour, colour),
        flags: FeatFlags::NOTABLE,
        minimap: MapFeature::Portal,
    }
}

const fn portal_exit(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
    colour: Colour,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(DChar::Arch),
        magic_dchar: None,
        colours: FeatColours::full(colour, LightGrey, colour, colour, colour),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Portal,
    }
}

const fn branch_entrance(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(DChar::StairsDown),
        magic_dchar: None,
        colours: FeatColours::full(Yellow, Red, Yellow, Yellow, Yellow),
        flags: FeatFlags::NOTABLE,
        minimap: MapFeature::StairBranch,
    }
}

const fn branch_exit(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(DChar::StairsUp),
        magic_dchar: None,
        colours: FeatColours::full(Yellow, Green, Yellow, Yellow, Yellow),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairUp,
    }
}

const fn altar(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
    colour: Colour,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(DChar::Altar),
        magic_dchar: None,
        colours: FeatColours::full(colour, DarkGrey, colour, colour, colour),
        flags: FeatFlags::NOTABLE,
        minimap: MapFeature::Feature,
    }
}

const fn fountain(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
    colour: Colour,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(DChar::Fountain),
        magic_dchar: None,
        colours: FeatColours::of(colour),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Floor,
    }
}

const fn wall(
    feat: FeatureType,
    name: &'static str,
    vaultname: &'static str,
    dchar: DChar,
    colour: Colour,
    flags: FeatFlags,
) -> FeatureDef {
    FeatureDef {
        feat,
        name,
        vaultname,
        dchar: Some(dchar),
        magic_dchar: Some(DChar::WallMagic),
        colours: FeatColours::of(colour),
        flags,
        minimap: MapFeature::Wall,
    }
}

const fn stone_stairs_down(feat: FeatureType, vaultname: &'static str) -> FeatureDef {
    FeatureDef {
        feat,
        name: "stone staircase leading down",
        vaultname,
        dchar: Some(DChar::StairsDown),
        magic_dchar: None,
        colours: FeatColours::full(Red, Red, Red, White, White),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairDown,
    }
}

const fn stone_stairs_up(feat: FeatureType, vaultname: &'static str) -> FeatureDef {
    FeatureDef {
        feat,
        name: "stone staircase leading up",
        vaultname,
        dchar: Some(DChar::StairsUp),
        magic_dchar: None,
        colours: FeatColours::full(Green, Green, Green, White, White),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairUp,
    }
}

const OPAQUE_SOLID: FeatFlags = FeatFlags::OPAQUE.union(FeatFlags::SOLID);
const OPAQUE_WALL: FeatFlags =
    FeatFlags::OPAQUE.union(FeatFlags::WALL).union(FeatFlags::SOLID);
const CLEAR_WALL: FeatFlags = FeatFlags::WALL.union(FeatFlags::SOLID);

pub static FEATURE_DEFS: &[FeatureDef] = &[
    FeatureDef {
        feat: FeatureType::Unseen,
        name: "",
        vaultname: "unseen",
        dchar: None,
        magic_dchar: None,
        colours: FeatColours::full(Black, DarkGrey, DarkGrey, Black, DarkGrey),
        flags: OPAQUE_SOLID,
        minimap: MapFeature::Unseen,
    },
    FeatureDef {
        feat: FeatureType::ExploreHorizon,
        name: "explore horizon",
        vaultname: "explore_horizon",
        dchar: None,
        magic_dchar: None,
        colours: FeatColours::of(Black),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Unseen,
    },
    FeatureDef {
        feat: FeatureType::TravelTrail,
        name: "travel trail",
        vaultname: "travel_trail",
        dchar: None,
        magic_dchar: None,
        colours: FeatColours::of(Black),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Unseen,
    },
    FeatureDef {
        feat: FeatureType::ClosedDoor,
        name: "closed door",
        vaultname: "closed_door",
        dchar: Some(DChar::DoorClosed),
        magic_dchar: None,
        colours: FeatColours::of(LightGrey),
        flags: OPAQUE_SOLID,
        minimap: MapFeature::Door,
    },
    FeatureDef {
        feat: FeatureType::RunedDoor,
        name: "runed door",
        vaultname: "runed_door",
        dchar: Some(DChar::DoorClosed),
        magic_dchar: None,
        colours: FeatColours::and_map(LightBlue),
        flags: OPAQUE_SOLID.union(FeatFlags::NOTABLE),
        minimap: MapFeature::Door,
    },
    FeatureDef {
        feat: FeatureType::SealedDoor,
        name: "sealed door",
        vaultname: "sealed_door",
        dchar: Some(DChar::DoorClosed),
        magic_dchar: None,
        colours: FeatColours::and_map(LightGreen),
        flags: OPAQUE_SOLID,
        minimap: MapFeature::Door,
    },
    FeatureDef {
        feat: FeatureType::OpenDoor,
        name: "open door",
        vaultname: "open_door",
        dchar: Some(DChar::DoorOpen),
        magic_dchar: None,
        colours: FeatColours::of(LightGrey),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Door,
    },
    wall(FeatureType::Tree, "tree", "tree", DChar::Tree, ElementalTree, OPAQUE_SOLID),
    wall(FeatureType::Mangrove, "mangrove", "mangrove", DChar::Tree, ElementalMangrove, OPAQUE_SOLID),
    wall(FeatureType::DemonicTree, "demonic tree", "demonic_tree", DChar::Tree, ElementalRandom, OPAQUE_SOLID),
    wall(FeatureType::PetrifiedTree, "petrified tree", "petrified_tree", DChar::Tree, DarkGrey, OPAQUE_SOLID),
    wall(FeatureType::MetalWall, "metal wall", "metal_wall", DChar::Wall, Cyan, OPAQUE_WALL),
    wall(FeatureType::CrystalWall, "crystal wall", "crystal_wall", DChar::Wall, Green, OPAQUE_WALL),
    wall(FeatureType::RockWall, "rock wall", "rock_wall", DChar::Wall, ElementalRock, OPAQUE_WALL),
    wall(FeatureType::SlimyWall, "slime covered rock wall", "slimy_wall", DChar::Wall, LightGreen, OPAQUE_WALL),
    wall(FeatureType::StoneWall, "stone wall", "stone_wall", DChar::Wall, LightGrey, OPAQUE_WALL),
    wall(FeatureType::PermarockWall, "unnaturally hard rock wall", "permarock_wall", DChar::PermaWall, ElementalRock, OPAQUE_WALL),
    wall(FeatureType::ClearRockWall, "translucent rock wall", "clear_rock_wall", DChar::Wall, LightCyan, CLEAR_WALL),
    wall(FeatureType::ClearStoneWall, "translucent stone wall", "clear_stone_wall", DChar::Wall, LightCyan, CLEAR_WALL),
    wall(FeatureType::ClearPermarockWall, "translucent unnaturally hard rock wall", "clear_permarock_wall", DChar::PermaWall, LightCyan, CLEAR_WALL),
    FeatureDef {
        feat: FeatureType::Grate,
        name: "iron grate",
        vaultname: "iron_grate",
        dchar: Some(DChar::Grate),
        magic_dchar: Some(DChar::WallMagic),
        colours: FeatColours::of(LightBlue),
        flags: FeatFlags::SOLID,
        minimap: MapFeature::Wall,
    },
    FeatureDef {
        feat: FeatureType::OpenSea,
        name: "the open sea",
        vaultname: "open_sea",
        dchar: Some(DChar::Wall),
        magic_dchar: None,
        colours: FeatColours::of(Blue),
        flags: FeatFlags::SOLID,
        minimap: MapFeature::DeepWater,
    },
    FeatureDef {
        feat: FeatureType::LavaSea,
        name: "the endless lava",
        vaultname: "endless_lava",
        dchar: Some(DChar::Wall),
        magic_dchar: None,
        colours: FeatColours::of(Red),
        flags: FeatFlags::SOLID,
        minimap: MapFeature::Lava,
    },
    FeatureDef {
        feat: FeatureType::EndlessSalt,
        name: "endless expanse of salt",
        vaultname: "endless_salt",
        dchar: Some(DChar::Wall),
        magic_dchar: None,
        colours: FeatColours::of(White),
        flags: FeatFlags::SOLID,
        minimap: MapFeature::Floor,
    },
    FeatureDef {
        feat: FeatureType::OrcishIdol,
        name: "orcish idol",
        vaultname: "orcish_idol",
        dchar: Some(DChar::Statue),
        magic_dchar: None,
        colours: FeatColours::of(Brown),
        flags: FeatFlags::SOLID,
        minimap: MapFeature::Wall,
    },
    FeatureDef {
        feat: FeatureType::GraniteStatue,
        name: "granite statue",
        vaultname: "granite_statue",
        dchar: Some(DChar::Statue),
        magic_dchar: None,
        colours: FeatColours::of(DarkGrey),
        flags: FeatFlags::SOLID,
        minimap: MapFeature::Wall,
    },
    FeatureDef {
        feat: FeatureType::MalignGateway,
        name: "portal to somewhere",
        vaultname: "malign_gateway",
        dchar: Some(DChar::Arch),
        magic_dchar: None,
        colours: FeatColours::with_map(ElementalShimmerBlue, LightGrey),
        flags: FeatFlags::SOLID,
        minimap: MapFeature::StairUp,
    },
    FeatureDef {
        feat: FeatureType::Lava,
        name: "some lava",
        vaultname: "lava",
        dchar: Some(DChar::Wavy),
        magic_dchar: None,
        colours: FeatColours::of(Red),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Lava,
    },
    FeatureDef {
        feat: FeatureType::DeepWater,
        name: "some deep water",
        vaultname: "deep_water",
        dchar: Some(DChar::Wavy),
        magic_dchar: None,
        colours: FeatColours::of(Blue),
        flags: FeatFlags::empty(),
        minimap: MapFeature::DeepWater,
    },
    FeatureDef {
        feat: FeatureType::ShallowWater,
        name: "some shallow water",
        vaultname: "shallow_water",
        dchar: Some(DChar::Wavy),
        magic_dchar: None,
        colours: FeatColours::of(Cyan),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Water,
    },
    FeatureDef {
        feat: FeatureType::ToxicBog,
        name: "a toxic bog",
        vaultname: "toxic_bog",
        dchar: Some(DChar::Wavy),
        magic_dchar: None,
        colours: FeatColours::of(ElementalPoison),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Water,
    },
    FeatureDef {
        feat: FeatureType::Floor,
        name: "floor",
        vaultname: "floor",
        dchar: Some(DChar::Floor),
        magic_dchar: Some(DChar::FloorMagic),
        colours: FeatColours::of(ElementalFloor),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Floor,
    },
    FeatureDef {
        feat: FeatureType::ExpiredPortal,
        name: "collapsed entrance",
        vaultname: "expired_portal",
        dchar: Some(DChar::Floor),
        magic_dchar: Some(DChar::FloorMagic),
        colours: FeatColours::of(Brown),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Floor,
    },
    trap(FeatureType::TrapArrow, "arrow trap", "trap_arrow", LightCyan),
    trap(FeatureType::TrapSpear, "spear trap", "trap_spear", LightCyan),
    trap(FeatureType::TrapBlade, "blade trap", "trap_blade", LightCyan),
    trap(FeatureType::TrapDart, "dart trap", "trap_dart", LightCyan),
    trap(FeatureType::TrapBolt, "bolt trap", "trap_bolt", LightCyan),
    trap(FeatureType::TrapNet, "net trap", "trap_net", LightCyan),
    trap(FeatureType::TrapPlate, "pressure plate", "trap_plate", LightCyan),
    trap(FeatureType::TrapDispersal, "dispersal trap", "trap_dispersal", Magenta),
    trap(FeatureType::TrapTeleport, "teleport trap", "trap_teleport", LightBlue),
    trap(FeatureType::TrapTeleportPermanent, "permanent teleport trap", "trap_teleport_permanent", LightBlue),
    trap(FeatureType::TrapAlarm, "alarm trap", "trap_alarm", LightRed),
    trap(FeatureType::TrapZot, "Zot trap", "trap_zot", LightMagenta),
    trap(FeatureType::PassageOfGolubria, "passage of Golubria", "passage_of_golubria", Green),
    trap(FeatureType::TrapShaft, "shaft", "shaft", Brown),
    trap(FeatureType::TrapWeb, "web", "trap_web", LightGrey),
    FeatureDef {
        feat: FeatureType::EnterShop,
        name: "shop",
        vaultname: "enter_shop",
        dchar: Some(DChar::Arch),
        magic_dchar: None,
        colours: FeatColours::full(Yellow, LightGrey, Yellow, Yellow, LightGrey),
        flags: FeatFlags::NOTABLE,
        minimap: MapFeature::Feature,
    },
    FeatureDef {
        feat: FeatureType::AbandonedShop,
        name: "abandoned shop",
        vaultname: "abandoned_shop",
        dchar: Some(DChar::Arch),
        magic_dchar: None,
        colours: FeatColours::and_map(LightGrey),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Floor,
    },
    FeatureDef {
        feat: FeatureType::StoneArch,
        name: "empty arch of ancient stone",
        vaultname: "stone_arch",
        dchar: Some(DChar::Arch),
        magic_dchar: None,
        colours: FeatColours::and_map(LightGrey),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Floor,
    },
    FeatureDef {
        feat: FeatureType::UnknownPortal,
        name: "detected shop or portal",
        vaultname: "unknown_portal",
        dchar: Some(DChar::Arch),
        magic_dchar: None,
        colours: FeatColours::with_map(Black, LightGrey),
        flags: FeatFlags::empty(),
        minimap: MapFeature::Portal,
    },
    stone_stairs_down(FeatureType::StoneStairsDownI, "stone_stairs_down_i"),
    stone_stairs_down(FeatureType::StoneStairsDownII, "stone_stairs_down_ii"),
    stone_stairs_down(FeatureType::StoneStairsDownIII, "stone_stairs_down_iii"),
    stone_stairs_up(FeatureType::StoneStairsUpI, "stone_stairs_up_i"),
    stone_stairs_up(FeatureType::StoneStairsUpII, "stone_stairs_up_ii"),
    stone_stairs_up(FeatureType::StoneStairsUpIII, "stone_stairs_up_iii"),
    FeatureDef {
        feat: FeatureType::EscapeHatchDown,
        name: "escape hatch in the floor",
        vaultname: "escape_hatch_down",
        dchar: Some(DChar::StairsDown),
        magic_dchar: None,
        colours: FeatColours::and_map(Brown),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairDown,
    },
    FeatureDef {
        feat: FeatureType::EscapeHatchUp,
        name: "escape hatch in the ceiling",
        vaultname: "escape_hatch_up",
        dchar: Some(DChar::StairsUp),
        magic_dchar: None,
        colours: FeatColours::and_map(Brown),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairUp,
    },
    portal_entrance(FeatureType::EnterDis, "gateway to the Iron City of Dis", "enter_dis", Cyan),
    portal_entrance(FeatureType::EnterGehenna, "gateway to the ashen valley of Gehenna", "enter_gehenna", Red),
    portal_entrance(FeatureType::EnterCocytus, "gateway to the freezing wastes of Cocytus", "enter_cocytus", LightCyan),
    portal_entrance(FeatureType::EnterTartarus, "gateway to the decaying netherworld of Tartarus", "enter_tartarus", Magenta),
    portal_entrance(FeatureType::EnterHell, "gateway to Hell", "enter_hell", Red),
    portal_exit(FeatureType::ExitHell, "gateway back into the Dungeon", "exit_hell", LightRed),
    portal_entrance(FeatureType::EnterAbyss, "one-way gate to the infinite horrors of the Abyss", "enter_abyss", ElementalWarp),
    portal_exit(FeatureType::ExitAbyss, "gateway leading out of the Abyss", "exit_abyss", ElementalWarp),
    portal_entrance(FeatureType::EnterPandemonium, "one-way gate leading to the halls of Pandemonium", "enter_pandemonium", LightBlue),
    portal_exit(FeatureType::TransitPandemonium, "gate leading to another region of Pandemonium", "transit_pandemonium", LightGreen),
    portal_exit(FeatureType::ExitPandemonium, "gate leading out of Pandemonium", "exit_pandemonium", LightBlue),
    portal_entrance(FeatureType::EnterZot, "gate to the Realm of Zot", "enter_zot", Magenta),
    portal_exit(FeatureType::ExitZot, "gate leading back out of this place", "exit_zot", Magenta),
    FeatureDef {
        feat: FeatureType::ExitDungeon,
        name: "staircase leading out of the dungeon",
        vaultname: "exit_dungeon",
        dchar: Some(DChar::StairsUp),
        magic_dchar: None,
        colours: FeatColours::full(LightBlue, Green, LightBlue, LightBlue, LightBlue),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairUp,
    },
    branch_entrance(FeatureType::EnterTemple, "staircase to the Ecumenical Temple", "enter_temple"),
    branch_exit(FeatureType::ExitTemple, "staircase back to the Dungeon", "exit_temple"),
    branch_entrance(FeatureType::EnterOrc, "staircase to the Orcish Mines", "enter_orcish_mines"),
    branch_exit(FeatureType::ExitOrc, "staircase back to the Dungeon", "exit_orcish_mines"),
    branch_entrance(FeatureType::EnterLair, "staircase to the Lair", "enter_lair"),
    branch_exit(FeatureType::ExitLair, "staircase back to the Dungeon", "exit_lair"),
    branch_entrance(FeatureType::EnterSwamp, "staircase to the Swamp", "enter_swamp"),
    branch_exit(FeatureType::ExitSwamp, "staircase back to the Lair", "exit_swamp"),
    altar(FeatureType::UnknownAltar, "detected altar", "unknown_altar", DarkGrey),
    altar(FeatureType::AltarZin, "glowing silver altar of Zin", "altar_zin", LightGrey),
    altar(FeatureType::AltarShiningOne, "glowing golden altar of the Shining One", "altar_the_shining_one", Yellow),
    altar(FeatureType::AltarKikubaaqudgha, "ancient bone altar of Kikubaaqudgha", "altar_kikubaaqudgha", DarkGrey),
    altar(FeatureType::AltarYredelemnul, "basalt altar of Yredelemnul", "altar_yredelemnul", ElementalUnholy),
    altar(FeatureType::AltarXom, "shimmering altar of Xom", "altar_xom", ElementalRandom),
    altar(FeatureType::AltarOkawaru, "iron altar of Okawaru", "altar_okawaru", Cyan),
    altar(FeatureType::AltarMakhleb, "burning altar of Makhleb", "altar_makhleb", ElementalFire),
    altar(FeatureType::AltarTrog, "bloodstained altar of Trog", "altar_trog", Red),
    altar(FeatureType::AltarElyvilon, "white marble altar of Elyvilon", "altar_elyvilon", White),
    altar(FeatureType::AltarJiyva, "viscous altar of Jiyva", "altar_jiyva", ElementalSlime),
    altar(FeatureType::AltarGozag, "opulent altar of Gozag", "altar_gozag", ElementalGold),
    altar(FeatureType::AltarEcumenical, "faded altar of an unknown god", "altar_ecumenical", ElementalDark),
    fountain(FeatureType::FountainBlue, "fountain of clear blue water", "fountain_blue", Blue),
    fountain(FeatureType::FountainSparkling, "fountain of sparkling water", "fountain_sparkling", LightBlue),
    fountain(FeatureType::FountainBlood, "fountain of blood", "fountain_blood", Red),
    fountain(FeatureType::DryFountain, "dry fountain", "dry_fountain", LightGrey),
    FeatureDef {
        feat: FeatureType::Transporter,
        name: "transporter",
        vaultname: "transporter",
        dchar: Some(DChar::Transporter),
        magic_dchar: None,
        colours: FeatColours::full(Red, Red, Red, White, White),
        flags: FeatFlags::NOTABLE,
        minimap: MapFeature::Transporter,
    },
    FeatureDef {
        feat: FeatureType::TransporterLanding,
        name: "transporter landing site",
        vaultname: "transporter_landing",
        dchar: Some(DChar::TransporterLanding),
        magic_dchar: None,
        colours: FeatColours::and_map(DarkGrey),
        flags: FeatFlags::empty(),
        minimap: MapFeature::TransporterLanding,
    },
    FeatureDef {
        feat: FeatureType::SealedStairsUp,
        name: "sealed passage leading up",
        vaultname: "sealed_stair_up",
        dchar: Some(DChar::StairsUp),
        magic_dchar: None,
        colours: FeatColours::and_map(LightGreen),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairUp,
    },
    FeatureDef {
        feat: FeatureType::SealedStairsDown,
        name: "sealed passage leading down",
        vaultname: "sealed_stair_down",
        dchar: Some(DChar::StairsDown),
        magic_dchar: None,
        colours: FeatColours::and_map(LightGreen),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairDown,
    },
    FeatureDef {
        feat: FeatureType::AbyssalStair,
        name: "gateway leading deeper into the Abyss",
        vaultname: "abyssal_stair",
        dchar: Some(DChar::StairsDown),
        magic_dchar: None,
        colours: FeatColours::and_map(LightCyan),
        flags: FeatFlags::empty(),
        minimap: MapFeature::StairBranch,
    },
];
