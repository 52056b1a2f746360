//! The seeded random name generator behind scroll labels and similar
//! flavor names. The same seed always gives the same name, so an item's
//! label survives save and restore without being stored.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Which flavour of name to generate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameStyle {
    Default,
    /// Longer, and rendered in capitals ("scroll labelled XUQAPH GOLD").
    Scroll,
    /// Jiyva names: start with J, at most 8 letters, no spaces.
    Jiyva,
}

const MAX_ITERS: usize = 150;

pub fn make_name(seed: u64, style: NameStyle) -> String {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut name = String::new();
    let mut has_space = false;

    let mut len = 3 + rng.gen_range(0..5)
        + if rng.gen_range(0..5) == 0 { rng.gen_range(0..6) } else { 1 };
    if style == NameStyle::Scroll {
        // scrolls have longer names
        len += 6;
    }
    let maxlen = if style == NameStyle::Jiyva { 8 } else { usize::MAX };
    len = len.min(maxlen);

    for _ in 0..MAX_ITERS {
        if name.len() >= len {
            break;
        }
        let prev_char = name.chars().last().unwrap_or('\0');
        let penult_char = if name.len() > 1 {
            name.chars().rev().nth(1).unwrap_or('\0')
        } else {
            '\0'
        };

        if name.is_empty() && style == NameStyle::Jiyva {
            // Start the name with a predefined letter.
            name.push('j');
        } else if name.is_empty() || prev_char == ' ' {
            // Start the word with any letter.
            name.push(char::from(b'a' + rng.gen_range(0..26u8)));
        } else if !has_space
            && style != NameStyle::Jiyva
            && name.len() > 5
            && name.len() < len - 4
            && rng.gen_range(0..5) != 0
        {
            // Hand out a space.
            name.push(' ');
        } else if is_consonant(prev_char)
            || (name.len() > 1
                && !is_consonant(prev_char)
                && is_consonant(penult_char)
                && rng.gen_range(0..5) <= 1)
        {
            // Place a vowel.
            let vowel = random_vowel(&mut rng);

            if vowel == ' ' {
                if len < 7
                    || name.len() <= 2
                    || name.len() >= len - 3
                    || prev_char == ' '
                    || penult_char == ' '
                    || style == NameStyle::Jiyva
                    || (name.len() > 2 && is_consonant(prev_char) && is_consonant(penult_char))
                {
                    // Replace the space with something else if ...
                    // * the name is really short
                    // * we're close to the start/end of the name
                    // * we just got a space
                    // * the last two letters were consonants
                    continue;
                }
            } else if name.len() > 1
                && vowel == prev_char
                && (vowel == 'y' || vowel == 'i' || rng.gen_range(0..5) <= 1)
            {
                // Replace a doubled vowel, always for 'y' and 'i'.
                continue;
            }

            name.push(vowel);
        } else {
            // We want a consonant.
            let beg = name.is_empty() || prev_char == ' ';
            let end = name.len() >= len - 2;

            // Use one of a number of predefined letter combinations.
            if (len > 3 || !name.is_empty()) && rng.gen_range(0..7) <= 1 && (!beg || !end) {
                let first = if beg { RCS_BB } else if end { RCS_BE } else { RCS_BM };
                let last = if beg { RCS_EB } else if end { RCS_EE } else { RCS_EM };

                let cons_seed = rng.gen_range(0..last - first) + first;
                let consonant_set = CONSONANT_SETS[cons_seed];

                // Triples increase the target length.
                len += consonant_set.len() - 2;
                name.push_str(consonant_set);
            } else {
                name.push(random_cons(&mut rng));
            }
        }

        if name.ends_with(' ') {
            has_space = true;
        }
    }

    // Catch early exit and try to give a final letter.
    let last_char = name.chars().last().unwrap_or('\0');
    if !name.is_empty()
        && last_char != ' '
        && last_char != 'y'
        && !is_consonant(last_char)
        && (name.len() < len || (len < 8 && rng.gen_range(0..3) != 0))
    {
        name.push(random_cons(&mut rng));
    }

    if maxlen != usize::MAX {
        name.truncate(maxlen);
    }
    let mut name = name.trim_end().to_string();

    // Fallback if the name ended up too short.
    if name.len() < 4 {
        if style == NameStyle::Jiyva {
            // convolute & recurse
            return make_name(rng.gen(), NameStyle::Jiyva);
        }
        name = "plog".to_string();
    }

    let mut uppercased = String::with_capacity(name.len());
    let mut prev = ' ';
    for (i, c) in name.chars().enumerate() {
        if style == NameStyle::Scroll || i == 0 || prev == ' ' {
            uppercased.push(c.to_ascii_uppercase());
        } else {
            uppercased.push(c);
        }
        prev = c;
    }
    uppercased
}

/// Is the given character a lower-case ascii consonant?
///
/// For our purposes, y is not a consonant.
fn is_consonant(c: char) -> bool {
    matches!(
        c,
        'b' | 'c'
            | 'd'
            | 'f'
            | 'g'
            | 'h'
            | 'j'
            | 'k'
            | 'l'
            | 'm'
            | 'n'
            | 'p'
            | 'q'
            | 'r'
            | 's'
            | 't'
            | 'v'
            | 'w'
            | 'x'
            | 'z'
    )
}

// Returns a random vowel (a, e, i, o, u with equal probability) or space
// or 'y' with lower chances.
fn random_vowel(rng: &mut StdRng) -> char {
    const VOWELS: &[u8] = b"aeiouaeiouaeiouy  ";
    char::from(VOWELS[rng.gen_range(0..VOWELS.len())])
}

// Returns a random consonant with not quite equal probability.
// Does not include 'y'.
fn random_cons(rng: &mut StdRng) -> char {
    const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxzcdfghlmnrstlmnrst";
    char::from(CONSONANTS[rng.gen_range(0..CONSONANTS.len())])
}

// Ranges into CONSONANT_SETS:
//   begin  -> [RCS_BB, RCS_EB) = [ 0, 27)
//   middle -> [RCS_BM, RCS_EM) = [ 0, 67)
//   end    -> [RCS_BE, RCS_EE) = [14, 56)
const RCS_BB: usize = 0;
const RCS_EB: usize = 27;
const RCS_BM: usize = 0;
const RCS_EM: usize = 67;
const RCS_BE: usize = 14;
const RCS_EE: usize = 56;

const CONSONANT_SETS: &[&str] = &[
    // 0-13: start, middle
    "kl", "gr", "cl", "cr", "fr", "pr", "tr", "tw", "br", "pl", "bl", "str", "shr", "thr",
    // 14-26: start, middle, end
    "sm", "sh", "ch", "th", "ph", "pn", "kh", "gh", "mn", "ps", "st", "sk", "sch",
    // 27-55: middle, end
    "ts", "cs", "xt", "nt", "ll", "rr", "ss", "wk", "wn", "ng", "cw", "mp", "ck", "nk", "dd",
    "tt", "bb", "pp", "nn", "mm", "kk", "gg", "ff", "pt", "tz", "dgh", "rgh", "rph", "rch",
    // 56-66: middle only
    "cz", "xk", "zx", "xz", "cv", "vv", "nl", "rh", "dw", "nw", "khl",
];

const _: () = assert!(CONSONANT_SETS.len() == RCS_EM);
