use std::collections::BTreeSet;
use std::path::Path;

use strum::{EnumCount, IntoEnumIterator};

use delve_loca::feature::{feature_by_vaultname, feature_def, feature_name, FeatureType};
use delve_loca::item::{
    make_name, pluralise, ArmourEgo, ArmourType, DescLevel, Item, ItemFlags, ItemKind,
    JewelleryType, MissileBrand, MissileType, NameOpts, NameStyle, PotionType, ScrollType,
    StaffType, WandType, WeaponBrand, WeaponType,
};
use delve_loca::tables::features::FEATURE_DEFS;
use delve_loca::{Lang, Reports, Session};

fn ru() -> Session {
    let mut reports = Reports::new();
    let session =
        Session::load(Path::new("tests/files/lang"), Lang::new("ru").unwrap(), &mut reports)
            .expect("ru catalogs should load");
    assert!(reports.is_empty());
    session
}

#[test]
fn feature_table_is_complete_and_in_order() {
    assert_eq!(FEATURE_DEFS.len(), FeatureType::COUNT);
    for feat in FeatureType::iter() {
        let def = feature_def(feat);
        assert_eq!(def.feat, feat);
    }
}

#[test]
fn feature_vaultnames_are_unique() {
    let mut seen = BTreeSet::new();
    for def in FEATURE_DEFS {
        assert!(seen.insert(def.vaultname), "duplicate vaultname {}", def.vaultname);
        assert!(!def.vaultname.is_empty());
    }
}

#[test]
fn feature_names_are_present_except_for_sentinels() {
    for def in FEATURE_DEFS {
        let sentinel = matches!(def.feat, FeatureType::Unseen);
        assert_eq!(def.name.is_empty(), sentinel, "bad name for {}", def.feat);
    }
}

#[test]
fn feature_lookup_by_vaultname() {
    assert_eq!(feature_by_vaultname("closed_door"), Some(FeatureType::ClosedDoor));
    assert_eq!(feature_by_vaultname("altar_trog"), Some(FeatureType::AltarTrog));
    assert_eq!(feature_by_vaultname("no_such_feature"), None);
}

#[test]
fn feature_names_localize_and_fall_back() {
    let session = ru();
    assert_eq!(feature_name(FeatureType::ClosedDoor, &session), "закрытая дверь");
    assert_eq!(feature_name(FeatureType::FountainBlood, &session), "фонтан крови");
    // Untranslated features keep their source name.
    assert_eq!(feature_name(FeatureType::TrapArrow, &session), "arrow trap");
    let default = Session::new();
    assert_eq!(feature_name(FeatureType::ClosedDoor, &default), "closed door");
}

fn weapon(sub: WeaponType, brand: WeaponBrand) -> Item {
    Item::new(ItemKind::Weapon { sub, brand })
}

#[test]
fn plain_weapon_names() {
    let session = Session::new();
    let dagger = weapon(WeaponType::Dagger, WeaponBrand::Normal);
    assert_eq!(dagger.name(&session, DescLevel::Plain), "dagger");
    assert_eq!(dagger.name(&session, DescLevel::A), "a dagger");
    assert_eq!(dagger.name(&session, DescLevel::The), "the dagger");
    assert_eq!(dagger.name(&session, DescLevel::Your), "your dagger");

    let axe = weapon(WeaponType::ExecutionersAxe, WeaponBrand::Normal);
    assert_eq!(axe.name(&session, DescLevel::A), "an executioner's axe");
}

#[test]
fn identified_weapon_shows_plus_and_brand() {
    let session = Session::new();
    let mut dagger = weapon(WeaponType::Dagger, WeaponBrand::Flaming);
    dagger.plus = 3;
    dagger.flags = ItemFlags::KNOW_TYPE | ItemFlags::KNOW_PLUSES;
    assert_eq!(dagger.name(&session, DescLevel::The), "the +3 dagger of flaming");

    let opts = NameOpts { terse: true, ..NameOpts::default() };
    assert_eq!(dagger.name_with(&session, DescLevel::The, &opts), "+3 dagger (flame)");
}

#[test]
fn adjective_brands_read_as_adjectives() {
    let session = Session::new();
    let mut dagger = weapon(WeaponType::Dagger, WeaponBrand::Vampirism);
    dagger.plus = -1;
    dagger.flags = ItemFlags::KNOW_TYPE | ItemFlags::KNOW_PLUSES;
    assert_eq!(dagger.name(&session, DescLevel::A), "a -1 vampiric dagger");
}

#[test]
fn unidentified_weapon_shows_cosmetics_and_curse() {
    let session = Session::new();
    let mut sword = weapon(WeaponType::LongSword, WeaponBrand::Flaming);
    sword.flags = ItemFlags::CURSED | ItemFlags::RUNED;
    assert_eq!(sword.name(&session, DescLevel::A), "a cursed runed long sword");

    // Once the type is known the cosmetic text gives way to the brand.
    sword.flags |= ItemFlags::KNOW_TYPE;
    assert_eq!(sword.name(&session, DescLevel::A), "a cursed long sword of flaming");
}

#[test]
fn artefact_weapons_take_the_definite_article() {
    let session = Session::new();
    let mut sword = weapon(WeaponType::LongSword, WeaponBrand::Normal);
    sword.artefact = Some("Singing Sword".to_string());
    sword.flags = ItemFlags::KNOW_TYPE;
    assert_eq!(sword.name(&session, DescLevel::A), "the Singing Sword");
    assert_eq!(sword.name(&session, DescLevel::Plain), "Singing Sword");
}

#[test]
fn missile_brands_sit_before_or_after_the_name() {
    let session = Session::new();
    let mut boomerang = Item::new(ItemKind::Missile {
        sub: MissileType::Boomerang,
        brand: MissileBrand::Silver,
    });
    assert_eq!(boomerang.name(&session, DescLevel::A), "a silver boomerang");
    boomerang.quantity = 2;
    assert_eq!(boomerang.name(&session, DescLevel::Plain), "2 silver boomerangs");

    let javelin = Item::new(ItemKind::Missile {
        sub: MissileType::Javelin,
        brand: MissileBrand::Dispersal,
    });
    assert_eq!(javelin.name(&session, DescLevel::A), "a javelin of dispersal");

    let opts = NameOpts { terse: true, ..NameOpts::default() };
    assert_eq!(javelin.name_with(&session, DescLevel::Plain, &opts), "javelin (disperse)");
}

#[test]
fn armour_egos_and_pairs() {
    let session = Session::new();
    let mut gloves = Item::new(ItemKind::Armour {
        sub: ArmourType::Gloves,
        ego: ArmourEgo::ColdResistance,
    });
    gloves.flags = ItemFlags::KNOW_TYPE;
    assert_eq!(gloves.name(&session, DescLevel::A), "a pair of gloves of cold resistance");

    let opts = NameOpts { terse: true, ..NameOpts::default() };
    assert_eq!(gloves.name_with(&session, DescLevel::Plain, &opts), "pair of gloves {rC+}");

    let mut robe = Item::new(ItemKind::Armour { sub: ArmourType::Robe, ego: ArmourEgo::Normal });
    robe.flags = ItemFlags::EMBROIDERED;
    assert_eq!(robe.name(&session, DescLevel::A), "an embroidered robe");

    robe.flags |= ItemFlags::KNOW_TYPE;
    assert_eq!(robe.name(&session, DescLevel::A), "an enchanted robe");
}

#[test]
fn unidentified_wands_and_potions_use_their_appearance() {
    let session = Session::new();
    let mut wand = Item::new(ItemKind::Wand(WandType::Flame));
    assert_eq!(wand.name(&session, DescLevel::A), "an iron wand");
    wand.appearance = 13;
    assert_eq!(wand.name(&session, DescLevel::A), "a jewelled brass wand");
    wand.flags = ItemFlags::KNOW_TYPE;
    assert_eq!(wand.name(&session, DescLevel::A), "a wand of flame");

    let mut potion = Item::new(ItemKind::Potion(PotionType::Curing));
    potion.appearance = 23;
    assert_eq!(potion.name(&session, DescLevel::A), "a bubbling black potion");
    potion.flags = ItemFlags::KNOW_TYPE;
    potion.quantity = 2;
    assert_eq!(potion.name(&session, DescLevel::Plain), "2 potions of curing");
}

#[test]
fn unidentified_scrolls_are_labelled() {
    let session = Session::new();
    let mut scroll = Item::new(ItemKind::Scroll(ScrollType::Identify));
    scroll.appearance = 42;
    let name = scroll.name(&session, DescLevel::A);
    let label = name.strip_prefix("a scroll labelled ").expect("label prefix");
    assert!(!label.is_empty());
    assert_eq!(label, label.to_uppercase());
    // The label is stable for the same appearance seed.
    assert_eq!(name, scroll.name(&session, DescLevel::A));

    scroll.flags = ItemFlags::KNOW_TYPE;
    assert_eq!(scroll.name(&session, DescLevel::A), "a scroll of identify");
}

#[test]
fn jewellery_names() {
    let session = Session::new();
    let mut ring = Item::new(ItemKind::Jewellery(JewelleryType::RingProtection));
    assert_eq!(ring.name(&session, DescLevel::A), "a wooden ring");
    ring.flags = ItemFlags::KNOW_TYPE | ItemFlags::KNOW_PLUSES;
    ring.plus = 4;
    assert_eq!(ring.name(&session, DescLevel::A), "a +4 ring of protection");

    let mut amulet = Item::new(ItemKind::Jewellery(JewelleryType::AmuletFaith));
    amulet.appearance = 1;
    assert_eq!(amulet.name(&session, DescLevel::A), "a dented zirconium amulet");
    amulet.flags = ItemFlags::KNOW_TYPE;
    assert_eq!(amulet.name(&session, DescLevel::A), "an amulet of faith");
}

#[test]
fn staff_names() {
    let session = Session::new();
    let mut staff = Item::new(ItemKind::Staff(StaffType::Fire));
    assert_eq!(staff.name(&session, DescLevel::A), "a crooked glowing staff");
    staff.flags = ItemFlags::KNOW_TYPE;
    assert_eq!(staff.name(&session, DescLevel::A), "a staff of fire");
    staff.quantity = 2;
    assert_eq!(staff.name(&session, DescLevel::Plain), "2 staves of fire");
}

#[test]
fn basename_and_qualname_hide_detail() {
    let session = Session::new();
    let mut dagger = weapon(WeaponType::Dagger, WeaponBrand::Flaming);
    dagger.plus = 3;
    dagger.flags = ItemFlags::KNOW_TYPE | ItemFlags::KNOW_PLUSES;
    assert_eq!(dagger.name(&session, DescLevel::BaseName), "dagger");
    assert_eq!(dagger.name(&session, DescLevel::QualName), "dagger");

    let wand = Item::new(ItemKind::Wand(WandType::Flame));
    assert_eq!(wand.name(&session, DescLevel::BaseName), "wand");
}

#[test]
fn inscriptions_are_appended() {
    let session = Session::new();
    let mut dagger = weapon(WeaponType::Dagger, WeaponBrand::Normal);
    dagger.inscription = "pickpocket bait".to_string();
    assert_eq!(dagger.name(&session, DescLevel::A), "a dagger {pickpocket bait}");

    let opts = NameOpts { with_inscription: false, ..NameOpts::default() };
    assert_eq!(dagger.name_with(&session, DescLevel::A, &opts), "a dagger");
}

#[test]
fn item_atoms_translate_through_the_session() {
    let session = ru();
    let dagger = weapon(WeaponType::Dagger, WeaponBrand::Normal);
    assert_eq!(dagger.name(&session, DescLevel::Plain), "кинжал");

    let mut cursed = weapon(WeaponType::Dagger, WeaponBrand::Normal);
    cursed.flags = ItemFlags::CURSED;
    assert_eq!(cursed.name(&session, DescLevel::Plain), "проклятый кинжал");

    let mut scroll = Item::new(ItemKind::Scroll(ScrollType::Identify));
    scroll.flags = ItemFlags::KNOW_TYPE;
    assert_eq!(scroll.name(&session, DescLevel::Plain), "свиток опознания");
}

#[test]
fn make_name_is_deterministic() {
    for seed in 0..64 {
        assert_eq!(
            make_name(seed, NameStyle::Default),
            make_name(seed, NameStyle::Default)
        );
    }
}

#[test]
fn make_name_shapes() {
    for seed in 0..500 {
        let name = make_name(seed, NameStyle::Default);
        assert!(name.len() >= 4, "too short: `{name}` from {seed}");
        assert!(!name.contains("  "), "double space in `{name}`");
        assert!(!name.ends_with(' '));

        let scroll = make_name(seed, NameStyle::Scroll);
        assert_eq!(scroll, scroll.to_uppercase(), "scroll label not in capitals: `{scroll}`");

        let jiyva = make_name(seed, NameStyle::Jiyva);
        assert!(jiyva.starts_with('J'), "jiyva name `{jiyva}` from {seed}");
        assert!(jiyva.len() <= 8);
        assert!(!jiyva.contains(' '));
    }
}

#[test]
fn pluralisation() {
    assert_eq!(pluralise("dagger"), "daggers");
    assert_eq!(pluralise("potion of curing"), "potions of curing");
    assert_eq!(pluralise("staff of fire"), "staves of fire");
    assert_eq!(pluralise("quarterstaff"), "quarterstaves");
    assert_eq!(pluralise("pair of gloves"), "pairs of gloves");
    assert_eq!(pluralise("scroll labelled XUQA"), "scrolls labelled XUQA");
    assert_eq!(pluralise("fox"), "foxes");
    assert_eq!(pluralise("ruby"), "rubies");
}
