//! Item classes, subtypes and their brand/ego enums, with the source-language
//! name of each. Everything here is a msgid; display code routes the names
//! through the active [`crate::session::Session`].

use strum_macros::{EnumCount, EnumIter};

use crate::tables::brands::{WEAPON_BRANDS_ADJ, WEAPON_BRANDS_TERSE, WEAPON_BRANDS_VERBOSE};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum WeaponType {
    Club,
    Whip,
    Mace,
    Flail,
    MorningStar,
    GreatMace,
    Dagger,
    ShortSword,
    LongSword,
    Scimitar,
    GreatSword,
    HandAxe,
    WarAxe,
    BroadAxe,
    BattleAxe,
    ExecutionersAxe,
    Spear,
    Trident,
    Halberd,
    Glaive,
    Quarterstaff,
    Lajatang,
    Shortbow,
    Longbow,
    Arbalest,
}

impl WeaponType {
    pub fn base_name(self) -> &'static str {
        match self {
            WeaponType::Club => "club",
            WeaponType::Whip => "whip",
            WeaponType::Mace => "mace",
            WeaponType::Flail => "flail",
            WeaponType::MorningStar => "morningstar",
            WeaponType::GreatMace => "great mace",
            WeaponType::Dagger => "dagger",
            WeaponType::ShortSword => "short sword",
            WeaponType::LongSword => "long sword",
            WeaponType::Scimitar => "scimitar",
            WeaponType::GreatSword => "great sword",
            WeaponType::HandAxe => "hand axe",
            WeaponType::WarAxe => "war axe",
            WeaponType::BroadAxe => "broad axe",
            WeaponType::BattleAxe => "battleaxe",
            WeaponType::ExecutionersAxe => "executioner's axe",
            WeaponType::Spear => "spear",
            WeaponType::Trident => "trident",
            WeaponType::Halberd => "halberd",
            WeaponType::Glaive => "glaive",
            WeaponType::Quarterstaff => "quarterstaff",
            WeaponType::Lajatang => "lajatang",
            WeaponType::Shortbow => "shortbow",
            WeaponType::Longbow => "longbow",
            WeaponType::Arbalest => "arbalest",
        }
    }
}

/// Weapon brands. The name tables in [`crate::tables::brands`] are indexed
/// by this enum and must stay in step with it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum WeaponBrand {
    Normal,
    Flaming,
    Freezing,
    HolyWrath,
    Electrocution,
    Venom,
    Protection,
    Draining,
    Speed,
    Vorpal,
    Vampirism,
    Pain,
    Antimagic,
    Distortion,
    Chaos,
    Penetration,
    Reaping,
    Spectral,
    Acid,
    Confusion,
}

impl WeaponBrand {
    pub fn name(self, terse: bool) -> &'static str {
        if terse {
            WEAPON_BRANDS_TERSE[self as usize]
        } else {
            WEAPON_BRANDS_VERBOSE[self as usize]
        }
    }

    pub fn adjective(self) -> &'static str {
        WEAPON_BRANDS_ADJ[self as usize]
    }

    /// Brands whose verbose name reads better as an adjective than as
    /// "X of Y".
    pub(crate) fn prefers_adjective(self) -> bool {
        matches!(
            self,
            WeaponBrand::Vampirism
                | WeaponBrand::Antimagic
                | WeaponBrand::Vorpal
                | WeaponBrand::Spectral
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum MissileType {
    Stone,
    LargeRock,
    Boomerang,
    Javelin,
    Dart,
    ThrowingNet,
}

impl MissileType {
    pub fn base_name(self) -> &'static str {
        match self {
            MissileType::Stone => "stone",
            MissileType::LargeRock => "large rock",
            MissileType::Boomerang => "boomerang",
            MissileType::Javelin => "javelin",
            MissileType::Dart => "dart",
            MissileType::ThrowingNet => "throwing net",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum MissileBrand {
    Normal,
    Poisoned,
    Curare,
    Blinding,
    Frenzy,
    Silver,
    Chaos,
    Dispersal,
}

impl MissileBrand {
    pub fn name(self, terse: bool) -> &'static str {
        match self {
            MissileBrand::Normal => "",
            MissileBrand::Poisoned => {
                if terse {
                    "poison"
                } else {
                    "poisoned"
                }
            }
            MissileBrand::Curare => {
                if terse {
                    "curare"
                } else {
                    "curare-tipped"
                }
            }
            MissileBrand::Blinding => {
                if terse {
                    "atropa"
                } else {
                    "atropa-tipped"
                }
            }
            MissileBrand::Frenzy => {
                if terse {
                    "datura"
                } else {
                    "datura-tipped"
                }
            }
            MissileBrand::Silver => "silver",
            MissileBrand::Chaos => "chaos",
            MissileBrand::Dispersal => {
                if terse {
                    "disperse"
                } else {
                    "dispersal"
                }
            }
        }
    }

    /// Brands that read as a prefix ("silver boomerang").
    pub(crate) fn is_prefix(self) -> bool {
        matches!(
            self,
            MissileBrand::Poisoned
                | MissileBrand::Curare
                | MissileBrand::Blinding
                | MissileBrand::Frenzy
                | MissileBrand::Silver
        )
    }

    /// Brands that read as "X of Y" ("boomerang of dispersal").
    pub(crate) fn is_postfix(self) -> bool {
        self != MissileBrand::Normal && !self.is_prefix()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum ArmourType {
    Robe,
    LeatherArmour,
    RingMail,
    ScaleMail,
    ChainMail,
    PlateArmour,
    CrystalPlateArmour,
    AnimalSkin,
    TrollLeatherArmour,
    Cloak,
    Scarf,
    Gloves,
    Boots,
    Hat,
    Helmet,
    Buckler,
    KiteShield,
    TowerShield,
}

impl ArmourType {
    pub fn base_name(self) -> &'static str {
        match self {
            ArmourType::Robe => "robe",
            ArmourType::LeatherArmour => "leather armour",
            ArmourType::RingMail => "ring mail",
            ArmourType::ScaleMail => "scale mail",
            ArmourType::ChainMail => "chain mail",
            ArmourType::PlateArmour => "plate armour",
            ArmourType::CrystalPlateArmour => "crystal plate armour",
            ArmourType::AnimalSkin => "animal skin",
            ArmourType::TrollLeatherArmour => "troll leather armour",
            ArmourType::Cloak => "cloak",
            ArmourType::Scarf => "scarf",
            ArmourType::Gloves => "gloves",
            ArmourType::Boots => "boots",
            ArmourType::Hat => "hat",
            ArmourType::Helmet => "helmet",
            ArmourType::Buckler => "buckler",
            ArmourType::KiteShield => "kite shield",
            ArmourType::TowerShield => "tower shield",
        }
    }

    /// Gloves and boots come in pairs.
    pub(crate) fn is_paired(self) -> bool {
        matches!(self, ArmourType::Gloves | ArmourType::Boots)
    }

    /// Soft armour is "embroidered" where hard armour is "shiny".
    pub(crate) fn is_soft(self) -> bool {
        matches!(
            self,
            ArmourType::Robe
                | ArmourType::Cloak
                | ArmourType::Scarf
                | ArmourType::Gloves
                | ArmourType::Boots
                | ArmourType::Hat
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum ArmourEgo {
    Normal,
    FireResistance,
    ColdResistance,
    PoisonResistance,
    SeeInvisible,
    Invisibility,
    Strength,
    Dexterity,
    Intelligence,
    Ponderousness,
    Flying,
    Willpower,
    Protection,
    Stealth,
    Resistance,
    PositiveEnergy,
    Archmagi,
    Preservation,
    Reflection,
    SpiritShield,
    Archery,
    Repulsion,
    Harm,
    Shadows,
    Rampaging,
}

impl ArmourEgo {
    pub fn name(self, terse: bool) -> &'static str {
        if terse {
            match self {
                ArmourEgo::Normal => "",
                ArmourEgo::FireResistance => "rF+",
                ArmourEgo::ColdResistance => "rC+",
                ArmourEgo::PoisonResistance => "rPois",
                ArmourEgo::SeeInvisible => "SInv",
                ArmourEgo::Invisibility => "+Inv",
                ArmourEgo::Strength => "Str+3",
                ArmourEgo::Dexterity => "Dex+3",
                ArmourEgo::Intelligence => "Int+3",
                ArmourEgo::Ponderousness => "ponderous",
                ArmourEgo::Flying => "Fly",
                ArmourEgo::Willpower => "Will+",
                ArmourEgo::Protection => "AC+3",
                ArmourEgo::Stealth => "Stlth+",
                ArmourEgo::Resistance => "rC+ rF+",
                ArmourEgo::PositiveEnergy => "rN+",
                ArmourEgo::Archmagi => "Archmagi",
                ArmourEgo::Preservation => "rCorr",
                ArmourEgo::Reflection => "reflect",
                ArmourEgo::SpiritShield => "Spirit",
                ArmourEgo::Archery => "archery",
                ArmourEgo::Repulsion => "repulsion",
                ArmourEgo::Harm => "harm",
                ArmourEgo::Shadows => "shadows",
                ArmourEgo::Rampaging => "rampage",
            }
        } else {
            match self {
                ArmourEgo::Normal => "",
                ArmourEgo::FireResistance => "fire resistance",
                ArmourEgo::ColdResistance => "cold resistance",
                ArmourEgo::PoisonResistance => "poison resistance",
                ArmourEgo::SeeInvisible => "see invisible",
                ArmourEgo::Invisibility => "invisibility",
                ArmourEgo::Strength => "strength",
                ArmourEgo::Dexterity => "dexterity",
                ArmourEgo::Intelligence => "intelligence",
                ArmourEgo::Ponderousness => "ponderousness",
                ArmourEgo::Flying => "flying",
                ArmourEgo::Willpower => "willpower",
                ArmourEgo::Protection => "protection",
                ArmourEgo::Stealth => "stealth",
                ArmourEgo::Resistance => "resistance",
                ArmourEgo::PositiveEnergy => "positive energy",
                ArmourEgo::Archmagi => "the Archmagi",
                ArmourEgo::Preservation => "preservation",
                ArmourEgo::Reflection => "reflection",
                ArmourEgo::SpiritShield => "spirit shield",
                ArmourEgo::Archery => "archery",
                ArmourEgo::Repulsion => "repulsion",
                ArmourEgo::Harm => "harm",
                ArmourEgo::Shadows => "shadows",
                ArmourEgo::Rampaging => "rampaging",
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum WandType {
    Flame,
    Paralysis,
    Digging,
    Iceblast,
    Polymorph,
    Charming,
    Acid,
    Mindburst,
}

impl WandType {
    pub fn name(self) -> &'static str {
        match self {
            WandType::Flame => "flame",
            WandType::Paralysis => "paralysis",
            WandType::Digging => "digging",
            WandType::Iceblast => "iceblast",
            WandType::Polymorph => "polymorph",
            WandType::Charming => "charming",
            WandType::Acid => "acid",
            WandType::Mindburst => "mindburst",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum PotionType {
    Curing,
    HealWounds,
    Haste,
    Might,
    Attraction,
    Brilliance,
    Flight,
    Cancellation,
    Ambrosia,
    Invisibility,
    Degeneration,
    Experience,
    Magic,
    BerserkRage,
    Mutation,
    Resistance,
    Lignification,
}

impl PotionType {
    pub fn name(self) -> &'static str {
        match self {
            PotionType::Curing => "curing",
            PotionType::HealWounds => "heal wounds",
            PotionType::Haste => "haste",
            PotionType::Might => "might",
            PotionType::Attraction => "attraction",
            PotionType::Brilliance => "brilliance",
            PotionType::Flight => "flight",
            PotionType::Cancellation => "cancellation",
            PotionType::Ambrosia => "ambrosia",
            PotionType::Invisibility => "invisibility",
            PotionType::Degeneration => "degeneration",
            PotionType::Experience => "experience",
            PotionType::Magic => "magic",
            PotionType::BerserkRage => "berserk rage",
            PotionType::Mutation => "mutation",
            PotionType::Resistance => "resistance",
            PotionType::Lignification => "lignification",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum ScrollType {
    Identify,
    Teleportation,
    Fear,
    Noise,
    Summoning,
    EnchantWeapon,
    EnchantArmour,
    Torment,
    Immolation,
    Blinking,
    MagicMapping,
    Fog,
    Acquirement,
    BrandWeapon,
    HolyWord,
    Vulnerability,
    Silence,
    Amnesia,
}

impl ScrollType {
    pub fn name(self) -> &'static str {
        match self {
            ScrollType::Identify => "identify",
            ScrollType::Teleportation => "teleportation",
            ScrollType::Fear => "fear",
            ScrollType::Noise => "noise",
            ScrollType::Summoning => "summoning",
            ScrollType::EnchantWeapon => "enchant weapon",
            ScrollType::EnchantArmour => "enchant armour",
            ScrollType::Torment => "torment",
            ScrollType::Immolation => "immolation",
            ScrollType::Blinking => "blinking",
            ScrollType::MagicMapping => "magic mapping",
            ScrollType::Fog => "fog",
            ScrollType::Acquirement => "acquirement",
            ScrollType::BrandWeapon => "brand weapon",
            ScrollType::HolyWord => "holy word",
            ScrollType::Vulnerability => "vulnerability",
            ScrollType::Silence => "silence",
            ScrollType::Amnesia => "amnesia",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum JewelleryType {
    RingProtection,
    RingProtectionFromFire,
    RingPoisonResistance,
    RingProtectionFromCold,
    RingStrength,
    RingSlaying,
    RingSeeInvisible,
    RingResistCorrosion,
    RingEvasion,
    RingStealth,
    RingDexterity,
    RingIntelligence,
    RingWizardry,
    RingMagicalPower,
    RingFlight,
    RingPositiveEnergy,
    RingWillpower,
    RingFire,
    RingIce,

    AmuletManaRegeneration,
    AmuletAcrobat,
    AmuletNothing,
    AmuletGuardianSpirit,
    AmuletFaith,
    AmuletReflection,
    AmuletRegeneration,
}

impl JewelleryType {
    pub fn is_amulet(self) -> bool {
        self as usize >= JewelleryType::AmuletManaRegeneration as usize
    }

    pub fn effect_name(self) -> &'static str {
        match self {
            JewelleryType::RingProtection => "protection",
            JewelleryType::RingProtectionFromFire => "protection from fire",
            JewelleryType::RingPoisonResistance => "poison resistance",
            JewelleryType::RingProtectionFromCold => "protection from cold",
            JewelleryType::RingStrength => "strength",
            JewelleryType::RingSlaying => "slaying",
            JewelleryType::RingSeeInvisible => "see invisible",
            JewelleryType::RingResistCorrosion => "resist corrosion",
            JewelleryType::RingEvasion => "evasion",
            JewelleryType::RingStealth => "stealth",
            JewelleryType::RingDexterity => "dexterity",
            JewelleryType::RingIntelligence => "intelligence",
            JewelleryType::RingWizardry => "wizardry",
            JewelleryType::RingMagicalPower => "magical power",
            JewelleryType::RingFlight => "flight",
            JewelleryType::RingPositiveEnergy => "positive energy",
            JewelleryType::RingWillpower => "willpower",
            JewelleryType::RingFire => "fire",
            JewelleryType::RingIce => "ice",
            JewelleryType::AmuletManaRegeneration => "magic regeneration",
            JewelleryType::AmuletAcrobat => "the acrobat",
            JewelleryType::AmuletNothing => "nothing",
            JewelleryType::AmuletGuardianSpirit => "guardian spirit",
            JewelleryType::AmuletFaith => "faith",
            JewelleryType::AmuletReflection => "reflection",
            JewelleryType::AmuletRegeneration => "regeneration",
        }
    }

    /// Rings whose power shows as a numeric plus in the name.
    pub(crate) fn has_plus(self) -> bool {
        matches!(
            self,
            JewelleryType::RingProtection
                | JewelleryType::RingStrength
                | JewelleryType::RingSlaying
                | JewelleryType::RingEvasion
                | JewelleryType::RingDexterity
                | JewelleryType::RingIntelligence
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumCount, EnumIter)]
pub enum StaffType {
    Fire,
    Cold,
    Poison,
    Death,
    Conjuration,
    Air,
    Earth,
}

impl StaffType {
    pub fn name(self) -> &'static str {
        match self {
            StaffType::Fire => "fire",
            StaffType::Cold => "cold",
            StaffType::Poison => "poison",
            StaffType::Death => "death",
            StaffType::Conjuration => "conjuration",
            StaffType::Air => "air",
            StaffType::Earth => "earth",
        }
    }
}
