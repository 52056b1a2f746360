//! Weapon brand name tables, indexed by [`WeaponBrand`].

use strum::EnumCount;

use crate::item::WeaponBrand;

pub const WEAPON_BRANDS_TERSE: &[&str] = &[
    "", "flame", "freeze", "holy", "elec", "venom", "protect", "drain", "speed", "vorpal", "vamp",
    "pain", "antimagic", "distort", "chaos", "penet", "reap", "spect", "acid", "confuse",
];

pub const WEAPON_BRANDS_VERBOSE: &[&str] = &[
    "",
    "flaming",
    "freezing",
    "holy wrath",
    "electrocution",
    "venom",
    "protection",
    "draining",
    "speed",
    "vorpality",
    "vampirism",
    "pain",
    "antimagic",
    "distortion",
    "chaos",
    "penetration",
    "reaping",
    "spectralizing",
    "acid",
    "confusion",
];

pub const WEAPON_BRANDS_ADJ: &[&str] = &[
    "",
    "flaming",
    "freezing",
    "holy",
    "electric",
    "venomous",
    "protective",
    "draining",
    "fast",
    "vorpal",
    "vampiric",
    "painful",
    "antimagic",
    "distorting",
    "chaotic",
    "penetrating",
    "reaping",
    "spectral",
    "acidic",
    "confusing",
];

const _: () = assert!(WEAPON_BRANDS_TERSE.len() == WeaponBrand::COUNT);
const _: () = assert!(WEAPON_BRANDS_VERBOSE.len() == WeaponBrand::COUNT);
const _: () = assert!(WEAPON_BRANDS_ADJ.len() == WeaponBrand::COUNT);
