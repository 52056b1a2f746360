//! Appearance words for unidentified item subtypes. Picked by the item's
//! appearance seed; the trailing spaces on the secondary words keep the
//! composed names from needing a join step.

pub const WAND_PRIMARY: &[&str] = &[
    "iron", "brass", "bone", "wooden", "copper", "gold", "silver", "bronze", "ivory", "glass",
    "lead", "fluorescent",
];

pub const WAND_SECONDARY: &[&str] = &[
    "",
    "jewelled ",
    "curved ",
    "long ",
    "short ",
    "twisted ",
    "crooked ",
    "forked ",
    "shiny ",
    "blackened ",
    "tapered ",
    "glowing ",
    "worn ",
    "encrusted ",
    "runed ",
    "sharpened ",
];

pub const POTION_QUALIFIERS: &[&str] = &[
    "",
    "bubbling ",
    "fuming ",
    "fizzy ",
    "viscous ",
    "lumpy ",
    "smoky ",
    "glowing ",
    "sedimented ",
    "metallic ",
    "murky ",
    "gluggy ",
    "oily ",
    "slimy ",
    "emulsified ",
];

pub const POTION_COLOURS: &[&str] = &[
    "blue", "black", "silvery", "cyan", "purple", "orange", "inky", "red", "yellow", "green",
    "brown", "ruby", "white", "emerald", "grey", "pink", "coppery", "golden", "dark", "puce",
    "amethyst", "sapphire",
];

pub const RING_PRIMARY: &[&str] = &[
    "wooden",
    "silver",
    "golden",
    "iron",
    "steel",
    "tourmaline",
    "brass",
    "copper",
    "granite",
    "ivory",
    "ruby",
    "marble",
    "jade",
    "glass",
    "agate",
    "bone",
    "diamond",
    "emerald",
    "peridot",
    "garnet",
    "opal",
    "pearl",
    "coral",
    "sapphire",
    "cabochon",
    "gilded",
    "onyx",
    "bronze",
    "moonstone",
];

pub const RING_SECONDARY: &[&str] = &[
    "",
    "encrusted ",
    "glowing ",
    "tubular ",
    "runed ",
    "blackened ",
    "scratched ",
    "small ",
    "large ",
    "twisted ",
    "shiny ",
    "notched ",
    "knobbly ",
];

pub const AMULET_PRIMARY: &[&str] = &[
    "sapphire",
    "zirconium",
    "golden",
    "emerald",
    "garnet",
    "bronze",
    "brass",
    "copper",
    "ruby",
    "citrine",
    "bone",
    "platinum",
    "jade",
    "fluorescent",
    "amethyst",
    "cameo",
    "pearl",
    "blue",
    "peridot",
    "jasper",
    "diamond",
    "malachite",
    "steel",
    "cabochon",
    "silver",
    "soapstone",
    "lapis lazuli",
    "filigree",
    "beryl",
];

pub const AMULET_SECONDARY: &[&str] = &[
    "dented ",
    "square ",
    "thick ",
    "thin ",
    "runed ",
    "blackened ",
    "glowing ",
    "small ",
    "large ",
    "twisted ",
    "tiny ",
    "triangular ",
    "lumpy ",
];

pub const STAFF_PRIMARY: &[&str] = &["glowing ", "jewelled ", "runed ", "smoking "];

pub const STAFF_SECONDARY: &[&str] = &[
    "crooked ",
    "knobbly ",
    "weird ",
    "gnarled ",
    "thin ",
    "curved ",
    "twisted ",
    "thick ",
    "long ",
    "short ",
];

const _: () = assert!(RING_PRIMARY.len() == AMULET_PRIMARY.len());
const _: () = assert!(RING_SECONDARY.len() == AMULET_SECONDARY.len());
