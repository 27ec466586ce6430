// Copyright (c) 2025 Squatwatch Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Typosquat permutation fixtures shared by integration tests and benchmarks.
//!
//! Generates lookalike variants of a handful of protected names, in the
//! spirit of the external generators that feed squatwatch in production.
//! Only single-edit variants are produced.

#![allow(dead_code)]

/// Protected names the fixture pattern set is derived from.
pub const SOURCES: &[&str] = &[
    "google",
    "google.com",
    "microsoft",
    "microsoft.com",
    "grooveid",
    "grooveid.com",
    "groove.id",
    "missing.info",
];

/// Observed domains used across tests and benchmarks.
pub const DOMAINS: &[&str] = &[
    "www-go0gledrive.co",
    "dzombak.com",
    "goodll.co",
    "www.www-micro-soft.com",
    "hjkhgrdhghghghmcimicrospfccm8978787097890yiuouihhjklfgjhklfgjhkfgkjhlfgdjhklfgdjm.xxx",
    "groveid.com",
    "groove.id",
    "cob.archive.nrtfa.fa.namdmz.dmzroot.net",
    "www-grooveid.online.tk",
    "testing.com",
    "example.com",
    "mising.info",
];

const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyz0123456789";
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// A single-edit permutation strategy.
pub type Attack = fn(&str) -> Vec<String>;

/// Every attack, in generation order.
pub const ATTACKS: &[Attack] = &[
    addition,
    vowel_swap,
    transposition,
    replacement,
    repetition,
    omission,
    bitsquatting,
    homograph,
    subdomain,
    hyphenation,
];

fn keyboard_neighbours(c: char) -> &'static str {
    match c {
        '1' => "2q",
        '2' => "3wq1",
        '3' => "4ew2",
        '4' => "5re3",
        '5' => "6tr4",
        '6' => "7yt5",
        '7' => "8uy6",
        '8' => "9iu7",
        '9' => "0oi8",
        '0' => "po9",
        'q' => "12wa",
        'w' => "3esaq2",
        'e' => "4rdsw3",
        'r' => "5tfde4",
        't' => "6ygfr5",
        'y' => "7uhgt6",
        'u' => "8ijhy7",
        'i' => "9okju8",
        'o' => "0plki9",
        'p' => "lo0",
        'a' => "qwsz",
        's' => "edxzaw",
        'd' => "rfcxse",
        'f' => "tgvcdr",
        'g' => "yhbvft",
        'h' => "ujnbgy",
        'j' => "ikmnhu",
        'k' => "olmji",
        'l' => "kop",
        'z' => "asx",
        'x' => "zsdc",
        'c' => "xdfv",
        'v' => "cfgb",
        'b' => "vghn",
        'n' => "bhjm",
        'm' => "njk",
        _ => "",
    }
}

fn homoglyphs(c: char) -> &'static [&'static str] {
    match c {
        'a' => &["à", "á", "â", "а"],
        'c' => &["с", "ç"],
        'd' => &["ԁ"],
        'e' => &["é", "è", "е", "ë"],
        'g' => &["ɡ"],
        'i' => &["í", "ì", "і", "1", "l"],
        'l' => &["1", "ӏ"],
        'm' => &["rn"],
        'o' => &["0", "ο", "о", "ö"],
        's' => &["ѕ"],
        't' => &["ţ"],
        'w' => &["vv"],
        _ => &[],
    }
}

fn is_separator(c: char) -> bool {
    c == '.' || c == '-'
}

/// Replaces `len` codepoints at `at` with `with`.
fn splice(chars: &[char], at: usize, len: usize, with: &str) -> String {
    let mut out: String = chars[..at].iter().collect();
    out.push_str(with);
    out.extend(&chars[at + len..]);
    out
}

/// Appends one alphanumeric character.
pub fn addition(name: &str) -> Vec<String> {
    ALPHANUMERIC.chars().map(|c| format!("{name}{c}")).collect()
}

/// Drops one character.
pub fn omission(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    (0..chars.len()).map(|i| splice(&chars, i, 1, "")).collect()
}

/// Doubles one alphanumeric character.
pub fn repetition(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    (0..chars.len())
        .filter(|&i| chars[i].is_ascii_alphanumeric())
        .map(|i| splice(&chars, i, 1, &format!("{0}{0}", chars[i])))
        .collect()
}

/// Swaps two adjacent, different characters.
pub fn transposition(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    (0..chars.len().saturating_sub(1))
        .filter(|&i| chars[i] != chars[i + 1])
        .map(|i| splice(&chars, i, 2, &format!("{}{}", chars[i + 1], chars[i])))
        .collect()
}

/// Replaces one vowel with another.
pub fn vowel_swap(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if VOWELS.contains(&c) {
            for &v in VOWELS.iter().filter(|&&v| v != c) {
                out.push(splice(&chars, i, 1, &v.to_string()));
            }
        }
    }
    out
}

/// Replaces one character with a QWERTY neighbour.
pub fn replacement(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        for neighbour in keyboard_neighbours(c).chars() {
            out.push(splice(&chars, i, 1, &neighbour.to_string()));
        }
    }
    out
}

/// Flips one bit of one character, keeping valid hostname characters.
pub fn bitsquatting(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        for bit in 0..8 {
            let flipped = char::from_u32(c as u32 ^ (1 << bit))
                .filter(|f| f.is_ascii_lowercase() || f.is_ascii_digit() || *f == '-');
            if let Some(f) = flipped {
                out.push(splice(&chars, i, 1, &f.to_string()));
            }
        }
    }
    out
}

/// Replaces one character with a lookalike glyph.
pub fn homograph(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut out = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        for glyph in homoglyphs(c) {
            out.push(splice(&chars, i, 1, glyph));
        }
    }
    out
}

fn insert_between(name: &str, sep: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    (1..chars.len())
        .filter(|&i| !is_separator(chars[i - 1]) && !is_separator(chars[i]))
        .map(|i| splice(&chars, i, 0, sep))
        .collect()
}

/// Inserts a dot between two label characters.
pub fn subdomain(name: &str) -> Vec<String> {
    insert_between(name, ".")
}

/// Inserts a hyphen between two label characters.
pub fn hyphenation(name: &str) -> Vec<String> {
    insert_between(name, "-")
}

/// All permutations of `name`, without the name itself.
pub fn permutations(name: &str) -> Vec<String> {
    ATTACKS.iter().flat_map(|attack| attack(name)).collect()
}

/// The fixture pattern set: every source followed by every permutation.
/// Contains duplicates.
pub fn build_patterns() -> Vec<String> {
    build_patterns_from(SOURCES)
}

/// Sources followed by their permutations.
pub fn build_patterns_from(sources: &[&str]) -> Vec<String> {
    let mut patterns: Vec<String> = sources.iter().map(|s| s.to_string()).collect();
    for source in sources {
        patterns.extend(permutations(source));
    }
    patterns
}
