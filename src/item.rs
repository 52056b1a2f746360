//! Item display names.
//!
//! The engine owns item lifecycles; this module consumes a snapshot of one
//! item's identity and composes the string the player sees, routing every
//! translatable atom through the active [`Session`].

use bitflags::bitflags;

use crate::format::{format_args, FmtArg};
use crate::session::Session;
use crate::tables::descriptors::{
    AMULET_PRIMARY, AMULET_SECONDARY, POTION_COLOURS, POTION_QUALIFIERS, RING_PRIMARY,
    RING_SECONDARY, STAFF_PRIMARY, STAFF_SECONDARY, WAND_PRIMARY, WAND_SECONDARY,
};

mod kinds;
mod makename;

pub use kinds::{
    ArmourEgo, ArmourType, JewelleryType, MissileBrand, MissileType, PotionType, ScrollType,
    StaffType, WandType, WeaponBrand, WeaponType,
};
pub use makename::{make_name, NameStyle};

bitflags! {
    /// Identification and cosmetic state for an item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u32 {
        const KNOW_TYPE = 0x01;
        const KNOW_PLUSES = 0x02;
        const CURSED = 0x04;
        const RUNED = 0x08;
        const GLOWING = 0x10;
        const EMBROIDERED = 0x20;
    }
}

impl ItemFlags {
    pub const COSMETIC_MASK: ItemFlags =
        ItemFlags::RUNED.union(ItemFlags::GLOWING).union(ItemFlags::EMBROIDERED);
}

/// How much of a name the caller wants, and with which article.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DescLevel {
    /// "the runed dagger"
    The,
    /// "a runed dagger"
    A,
    /// "your runed dagger"
    Your,
    /// "its runed dagger"
    Its,
    /// "runed dagger"
    Plain,
    /// "dagger"
    BaseName,
    /// Like Plain, but without pluses or inscriptions.
    QualName,
    /// The name to use for description database lookups.
    DbName,
    /// No name at all.
    None,
}

/// Naming switches with the same defaults the engine passes.
#[derive(Clone, Copy, Debug)]
pub struct NameOpts {
    /// Short form for the HUD.
    pub terse: bool,
    /// Name the item as if it were fully identified.
    pub ident: bool,
    pub with_inscription: bool,
    /// Identification flags on the item to ignore.
    pub ignore_flags: ItemFlags,
}

impl Default for NameOpts {
    fn default() -> Self {
        NameOpts {
            terse: false,
            ident: false,
            with_inscription: true,
            ignore_flags: ItemFlags::empty(),
        }
    }
}

/// The class and subtype of an item, with its brand where the class has
/// them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemKind {
    Weapon { sub: WeaponType, brand: WeaponBrand },
    Missile { sub: MissileType, brand: MissileBrand },
    Armour { sub: ArmourType, ego: ArmourEgo },
    Wand(WandType),
    Potion(PotionType),
    Scroll(ScrollType),
    Jewellery(JewelleryType),
    Staff(StaffType),
}

/// A snapshot of everything that affects an item's display name.
#[derive(Clone, Debug)]
pub struct Item {
    pub kind: ItemKind,
    pub quantity: u32,
    /// Enchantment value, shown as a signed prefix when known.
    pub plus: i32,
    pub flags: ItemFlags,
    /// Appearance seed for unidentified subtypes and scroll labels.
    pub appearance: u32,
    /// Artefact display name, without article.
    pub artefact: Option<String>,
    pub inscription: String,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Item {
            kind,
            quantity: 1,
            plus: 0,
            flags: ItemFlags::empty(),
            appearance: 0,
            artefact: None,
            inscription: String::new(),
        }
    }

    fn cursed(&self) -> bool {
        self.flags.contains(ItemFlags::CURSED)
    }

    fn known_type(&self, ident: bool) -> bool {
        ident || self.flags.contains(ItemFlags::KNOW_TYPE)
    }

    fn use_basename(&self, desc: DescLevel, ident: bool) -> bool {
        desc == DescLevel::BaseName || (desc == DescLevel::DbName && !self.known_type(ident))
    }

    /// Should identifiable properties be mentioned at all?
    fn know_any_ident(&self, desc: DescLevel, ident: bool) -> bool {
        desc != DescLevel::QualName
            && desc != DescLevel::DbName
            && !self.use_basename(desc, ident)
    }

    fn know_pluses(&self, desc: DescLevel, opts: &NameOpts) -> bool {
        self.know_any_ident(desc, opts.ident)
            && !opts.ignore_flags.contains(ItemFlags::KNOW_PLUSES)
            && (opts.ident || self.flags.contains(ItemFlags::KNOW_PLUSES))
    }

    fn know_ego(&self, desc: DescLevel, opts: &NameOpts) -> bool {
        self.know_any_ident(desc, opts.ident)
            && !opts.ignore_flags.contains(ItemFlags::KNOW_TYPE)
            && self.known_type(opts.ident)
    }

    fn show_cosmetic(&self, desc: DescLevel, opts: &NameOpts) -> bool {
        !self.use_basename(desc, opts.ident)
            && desc != DescLevel::QualName
            && desc != DescLevel::DbName
            && !self.know_pluses(desc, opts)
            && !self.know_ego(desc, opts)
            && !opts.terse
            && !opts.ignore_flags.intersects(ItemFlags::COSMETIC_MASK)
    }

    pub fn name(&self, session: &Session, desc: DescLevel) -> String {
        self.name_with(session, desc, &NameOpts::default())
    }

    pub fn name_with(&self, session: &Session, desc: DescLevel, opts: &NameOpts) -> String {
        if desc == DescLevel::None {
            return String::new();
        }
        let desc =
            if opts.terse && desc != DescLevel::DbName { DescLevel::Plain } else { desc };

        let auxname = self.name_aux(session, desc, opts);
        let startvowel = auxname.chars().next().is_some_and(is_vowel);
        let qualname = desc == DescLevel::QualName;

        let mut buff = String::new();

        if self.artefact.is_some() && self.known_type(opts.ident) {
            // Artefacts always get "the" unless we just want the plain name.
            match desc {
                DescLevel::Plain
                | DescLevel::DbName
                | DescLevel::BaseName
                | DescLevel::QualName => (),
                _ => buff.push_str(session.gettext("the ")),
            }
        } else if self.quantity > 1 {
            match desc {
                DescLevel::The => buff.push_str(session.gettext("the ")),
                DescLevel::Your => buff.push_str(session.gettext("your ")),
                DescLevel::Its => buff.push_str(session.gettext("its ")),
                _ => (),
            }
            if !matches!(desc, DescLevel::BaseName | DescLevel::QualName | DescLevel::DbName) {
                buff.push_str(&self.quantity.to_string());
                buff.push(' ');
            }
        } else {
            match desc {
                DescLevel::The => buff.push_str(session.gettext("the ")),
                DescLevel::Your => buff.push_str(session.gettext("your ")),
                DescLevel::Its => buff.push_str(session.gettext("its ")),
                DescLevel::A => {
                    buff.push_str(session.gettext(if startvowel { "an " } else { "a " }));
                }
                _ => (),
            }
        }

        buff.push_str(&auxname);

        if opts.with_inscription
            && !matches!(desc, DescLevel::BaseName | DescLevel::DbName)
            && !self.inscription.is_empty()
        {
            buff.push_str(&compose(session, " {%s}", &[FmtArg::Str(&self.inscription)]));
        }

        // Cursed artefacts get the marker after the inscription.
        if opts.terse
            && !matches!(desc, DescLevel::DbName | DescLevel::BaseName)
            && !qualname
            && self.artefact.is_some()
            && self.cursed()
        {
            buff.push_str(session.gettext(" (curse)"));
        }

        buff
    }

    fn name_aux(&self, session: &Session, desc: DescLevel, opts: &NameOpts) -> String {
        let basename = self.use_basename(desc, opts.ident);
        let qualname = desc == DescLevel::QualName;
        let dbname = desc == DescLevel::DbName;

        let buff = match self.kind {
            ItemKind::Weapon { sub, brand } => self.name_weapon(session, sub, brand, desc, opts),
            ItemKind::Missile { sub, brand } => self.name_missile(session, sub, brand, desc, opts),
            ItemKind::Armour { sub, ego } => self.name_armour(session, sub, ego, desc, opts),
            ItemKind::Wand(sub) => self.name_wand(session, sub, desc, opts),
            ItemKind::Potion(sub) => self.name_potion(session, sub, desc, opts),
            ItemKind::Scroll(sub) => self.name_scroll(session, sub, desc, opts),
            ItemKind::Jewellery(sub) => self.name_jewellery(session, sub, desc, opts),
            ItemKind::Staff(sub) => self.name_staff(session, sub, desc, opts),
        };

        // One plural to rule them all.
        if self.quantity > 1 && !basename && !dbname && !qualname {
            pluralise(&buff)
        } else {
            buff
        }
    }

    fn weapon_cosmetic<'a>(&self, session: &'a Session, ignore: ItemFlags) -> &'a str {
        if self.flags.contains(ItemFlags::RUNED) && !ignore.contains(ItemFlags::RUNED) {
            session.gettext("runed ")
        } else if self.flags.contains(ItemFlags::GLOWING) && !ignore.contains(ItemFlags::GLOWING) {
            session.gettext("glowing ")
        } else {
            ""
        }
    }

    /// Surrounds the base name with the brand-describing prefix or suffix.
    fn weapon_brand_desc(
        &self,
        session: &Session,
        body: &str,
        brand: WeaponBrand,
        terse: bool,
    ) -> String {
        let brand_name = session.gettext(brand.name(terse));
        if brand_name.is_empty() {
            return body.to_string();
        }
        if terse {
            return compose(session, "%s (%s)", &[FmtArg::Str(body), FmtArg::Str(brand_name)]);
        }
        if brand.prefers_adjective() {
            let adj = session.gettext(brand.adjective());
            compose(session, "%s %s", &[FmtArg::Str(adj), FmtArg::Str(body)])
        } else {
            compose(session, "%s of %s", &[FmtArg::Str(body), FmtArg::Str(brand_name)])
        }
    }

    fn name_weapon(
        &self,
        session: &Session,
        sub: WeaponType,
        brand: WeaponBrand,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        let dbname = desc == DescLevel::DbName;
        let qualname = desc == DescLevel::QualName;
        let know_pluses = self.know_pluses(desc, opts);
        let know_ego = self.know_ego(desc, opts);

        let curse_prefix = if !dbname && !opts.terse && self.cursed() {
            session.gettext("cursed ")
        } else {
            ""
        };
        let plus_text =
            if know_pluses { format!("{:+} ", self.plus) } else { String::new() };

        if let Some(artefact) = &self.artefact {
            if !dbname {
                return format!("{curse_prefix}{plus_text}{}", session.gettext(artefact));
            }
        }

        let cosmetic_text = if self.show_cosmetic(desc, opts) {
            self.weapon_cosmetic(session, opts.ignore_flags)
        } else {
            ""
        };
        let base_name = session.gettext(sub.base_name());
        let name_with_ego = if know_ego {
            self.weapon_brand_desc(session, base_name, brand, opts.terse)
        } else {
            base_name.to_string()
        };
        let curse_suffix = if self.cursed() && opts.terse && !dbname && !qualname {
            session.gettext(" (curse)")
        } else {
            ""
        };
        format!("{curse_prefix}{plus_text}{cosmetic_text}{name_with_ego}{curse_suffix}")
    }

    fn name_missile(
        &self,
        session: &Session,
        sub: MissileType,
        brand: MissileBrand,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        let dbname = desc == DescLevel::DbName;
        let basename = self.use_basename(desc, opts.ident);

        let base = session.gettext(sub.base_name());
        let body = if !opts.terse && !dbname && !basename && brand.is_prefix() {
            let prefix = session.gettext(brand.name(false));
            compose(session, "%s %s", &[FmtArg::Str(prefix), FmtArg::Str(base)])
        } else {
            base.to_string()
        };

        if brand == MissileBrand::Normal || basename || dbname {
            return body;
        }
        if opts.terse {
            let terse_name = session.gettext(brand.name(true));
            compose(session, "%s (%s)", &[FmtArg::Str(&body), FmtArg::Str(terse_name)])
        } else if brand.is_postfix() {
            let brand_name = session.gettext(brand.name(false));
            compose(session, "%s of %s", &[FmtArg::Str(&body), FmtArg::Str(brand_name)])
        } else {
            body
        }
    }

    fn name_armour(
        &self,
        session: &Session,
        sub: ArmourType,
        ego: ArmourEgo,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        let dbname = desc == DescLevel::DbName;
        let qualname = desc == DescLevel::QualName;
        let know_pluses = self.know_pluses(desc, opts);
        let know_ego = self.know_ego(desc, opts);

        let mut buff = String::new();
        if !opts.terse && self.cursed() {
            buff.push_str(session.gettext("cursed "));
        }

        // If we know enough to know it has *something* ('shiny' etc),
        // but we know it has no ego, it must have a plus. (or maybe a curse.)
        // If we don't know what the plus is, call it 'enchanted'.
        if !opts.terse
            && know_ego
            && ego == ArmourEgo::Normal
            && !know_pluses
            && self.artefact.is_none()
            && self.flags.intersects(ItemFlags::COSMETIC_MASK)
        {
            buff.push_str(session.gettext("enchanted "));
        }

        if know_pluses {
            buff.push_str(&format!("{:+} ", self.plus));
        }

        if sub.is_paired() {
            buff.push_str(session.gettext("pair of "));
        }

        if let Some(artefact) = &self.artefact {
            if !dbname {
                buff.push_str(session.gettext(artefact));
                return buff;
            }
        }

        if self.show_cosmetic(desc, opts) {
            if self.flags.contains(ItemFlags::EMBROIDERED)
                && !opts.ignore_flags.contains(ItemFlags::EMBROIDERED)
            {
                if sub.is_soft() {
                    buff.push_str(session.gettext("embroidered "));
                } else if sub != ArmourType::LeatherArmour && sub != ArmourType::AnimalSkin {
                    buff.push_str(session.gettext("shiny "));
                } else {
                    buff.push_str(session.gettext("dyed "));
                }
            } else if self.flags.contains(ItemFlags::RUNED)
                && !opts.ignore_flags.contains(ItemFlags::RUNED)
            {
                buff.push_str(session.gettext("runed "));
            } else if self.flags.contains(ItemFlags::GLOWING)
                && !opts.ignore_flags.contains(ItemFlags::GLOWING)
            {
                buff.push_str(session.gettext("glowing "));
            }
        }

        buff.push_str(session.gettext(sub.base_name()));

        if know_ego && self.artefact.is_none() && ego != ArmourEgo::Normal {
            if opts.terse {
                buff.push_str(&compose(
                    session,
                    " {%s}",
                    &[FmtArg::Str(session.gettext(ego.name(true)))],
                ));
            } else {
                buff.push_str(session.gettext(" of "));
                buff.push_str(session.gettext(ego.name(false)));
            }
        }

        if self.cursed() && opts.terse && !dbname && !qualname {
            buff.push_str(session.gettext(" (curse)"));
        }
        buff
    }

    fn name_wand(
        &self,
        session: &Session,
        sub: WandType,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        if self.use_basename(desc, opts.ident) {
            return session.gettext("wand").to_string();
        }
        if self.known_type(opts.ident) {
            let mut buff = String::from(session.gettext("wand of "));
            buff.push_str(session.gettext(sub.name()));
            buff
        } else {
            let rnd = self.appearance as usize;
            let secondary = WAND_SECONDARY[(rnd / WAND_PRIMARY.len()) % WAND_SECONDARY.len()];
            let primary = WAND_PRIMARY[rnd % WAND_PRIMARY.len()];
            format!(
                "{}{}{}",
                session.gettext(secondary),
                session.gettext(primary),
                session.gettext(" wand")
            )
        }
    }

    fn name_potion(
        &self,
        session: &Session,
        sub: PotionType,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        if self.use_basename(desc, opts.ident) {
            return session.gettext("potion").to_string();
        }
        if self.known_type(opts.ident) {
            let mut buff = String::from(session.gettext("potion of "));
            buff.push_str(session.gettext(sub.name()));
            buff
        } else {
            let rnd = self.appearance as usize;
            let qualifier = POTION_QUALIFIERS[(rnd / POTION_COLOURS.len()) % POTION_QUALIFIERS.len()];
            let colour = POTION_COLOURS[rnd % POTION_COLOURS.len()];
            format!(
                "{}{}{}",
                session.gettext(qualifier),
                session.gettext(colour),
                session.gettext(" potion")
            )
        }
    }

    fn name_scroll(
        &self,
        session: &Session,
        sub: ScrollType,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        if self.use_basename(desc, opts.ident) {
            return session.gettext("scroll").to_string();
        }
        if self.known_type(opts.ident) {
            let mut buff = String::from(session.gettext("scroll of "));
            buff.push_str(session.gettext(sub.name()));
            buff
        } else {
            format!(
                "{}{}",
                session.gettext("scroll labelled "),
                make_name(u64::from(self.appearance), NameStyle::Scroll)
            )
        }
    }

    fn name_jewellery(
        &self,
        session: &Session,
        sub: JewelleryType,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        if self.use_basename(desc, opts.ident) {
            return session
                .gettext(if sub.is_amulet() { "amulet" } else { "ring" })
                .to_string();
        }
        let dbname = desc == DescLevel::DbName;
        let qualname = desc == DescLevel::QualName;

        let mut buff = String::new();
        if !opts.terse && self.cursed() {
            buff.push_str(session.gettext("cursed "));
        }

        if let Some(artefact) = &self.artefact {
            if !dbname {
                buff.push_str(session.gettext(artefact));
                return buff;
            }
        }

        if self.known_type(opts.ident) {
            if !dbname && sub.has_plus() && self.know_pluses(desc, opts) {
                buff.push_str(&format!("{:+} ", self.plus));
            }
            let class = if sub.is_amulet() { "amulet of" } else { "ring of" };
            buff.push_str(&compose(
                session,
                "%s %s",
                &[
                    FmtArg::Str(session.gettext(class)),
                    FmtArg::Str(session.gettext(sub.effect_name())),
                ],
            ));
        } else {
            let rnd = self.appearance as usize;
            if sub.is_amulet() {
                let secondary =
                    AMULET_SECONDARY[(rnd / AMULET_PRIMARY.len()) % AMULET_SECONDARY.len()];
                let primary = AMULET_PRIMARY[rnd % AMULET_PRIMARY.len()];
                buff.push_str(session.gettext(secondary));
                buff.push_str(session.gettext(primary));
                buff.push_str(session.gettext(" amulet"));
            } else {
                let secondary = RING_SECONDARY[(rnd / RING_PRIMARY.len()) % RING_SECONDARY.len()];
                let primary = RING_PRIMARY[rnd % RING_PRIMARY.len()];
                buff.push_str(session.gettext(secondary));
                buff.push_str(session.gettext(primary));
                buff.push_str(session.gettext(" ring"));
            }
        }
        if self.cursed() && opts.terse && !dbname && !qualname {
            buff.push_str(session.gettext(" (curse)"));
        }
        buff
    }

    fn name_staff(
        &self,
        session: &Session,
        sub: StaffType,
        desc: DescLevel,
        opts: &NameOpts,
    ) -> String {
        let dbname = desc == DescLevel::DbName;
        let qualname = desc == DescLevel::QualName;
        let basename = self.use_basename(desc, opts.ident);

        let mut buff = String::new();
        if !opts.terse && self.cursed() {
            buff.push_str(session.gettext("cursed "));
        }
        if self.known_type(opts.ident) {
            buff.push_str(session.gettext("staff of "));
            buff.push_str(session.gettext(sub.name()));
        } else {
            if !basename {
                let rnd = self.appearance as usize;
                let secondary = STAFF_SECONDARY[(rnd / STAFF_PRIMARY.len()) % STAFF_SECONDARY.len()];
                let primary = STAFF_PRIMARY[rnd % STAFF_PRIMARY.len()];
                buff.push_str(session.gettext(secondary));
                buff.push_str(session.gettext(primary));
            }
            buff.push_str(session.gettext("staff"));
        }
        if self.cursed() && opts.terse && !dbname && !qualname {
            buff.push_str(session.gettext(" (curse)"));
        }
        buff
    }
}

/// Substitute into a translatable composition pattern. A broken translated
/// pattern falls back to the source-language pattern, like any other
/// missing translation.
fn compose(session: &Session, pattern: &'static str, args: &[FmtArg]) -> String {
    match format_args(session.gettext(pattern), args) {
        Ok(s) => s,
        Err(_) => format_args(pattern, args).unwrap_or_else(|_| pattern.to_string()),
    }
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Pluralise a composed display name. The "X of Y" and "X labelled Y"
/// shapes pluralise the head noun.
pub fn pluralise(name: &str) -> String {
    for sep in [" of ", " labelled "] {
        if let Some((head, tail)) = name.split_once(sep) {
            return format!("{}{sep}{tail}", pluralise(head));
        }
    }
    if let Some(stem) = name.strip_suffix("staff") {
        return format!("{stem}staves");
    }
    if let Some(stem) = name.strip_suffix("knife") {
        return format!("{stem}knives");
    }
    if name.ends_with('s')
        || name.ends_with('x')
        || name.ends_with('z')
        || name.ends_with("ch")
        || name.ends_with("sh")
    {
        return format!("{name}es");
    }
    let mut chars = name.chars().rev();
    if let (Some('y'), Some(prev)) = (chars.next(), chars.next()) {
        if !is_vowel(prev) {
            return format!("{}ies", &name[..name.len() - 1]);
        }
    }
    format!("{name}s")
}
