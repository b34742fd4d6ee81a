//! Ukrainian alphabetical ordering for crop names
//!
//! Strings are NFC-normalised and compared letter by letter on primary
//! weights: whitespace, then punctuation, then digits, then Cyrillic in
//! Ukrainian alphabet order (`ґ` after `г`, `є` after `е`, `і ї` after `и`),
//! then Latin. Case only breaks ties, lowercase first.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

/// Ukrainian alphabet in collation order
const UK_ALPHABET: [char; 33] = [
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к', 'л', 'м',
    'н', 'о', 'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ю', 'я',
];

const WHITESPACE: u32 = 1;
const PUNCTUATION: u32 = 2;
const DIGIT_BASE: u32 = 10;
const CYRILLIC_BASE: u32 = 100;
const LATIN_BASE: u32 = 300;
const OTHER_BASE: u32 = 1_000;

/// Primary weight of a lowercase character
fn primary_weight(c: char) -> u32 {
    if c.is_whitespace() {
        return WHITESPACE;
    }
    if let Some(digit) = c.to_digit(10) {
        return DIGIT_BASE + digit;
    }
    if let Some(pos) = UK_ALPHABET.iter().position(|&letter| letter == c) {
        // Leave a gap after every letter for the non-Ukrainian Cyrillic below.
        return CYRILLIC_BASE + pos as u32 * 2;
    }
    match c {
        'ё' => return CYRILLIC_BASE + 6 * 2 + 1,
        'ъ' => return CYRILLIC_BASE + 29 * 2 + 1,
        'ы' => return CYRILLIC_BASE + 30 * 2 + 1,
        'э' => return CYRILLIC_BASE + 30 * 2 + 1,
        _ => {}
    }
    if c.is_ascii_lowercase() {
        return LATIN_BASE + (c as u32 - 'a' as u32);
    }
    if c.is_ascii_punctuation() || c == '\u{2bc}' || c == '\u{2019}' {
        return PUNCTUATION;
    }
    OTHER_BASE + c as u32
}

/// Primary collation key of `s`: case-folded letter weights
pub fn collation_key(s: &str) -> Vec<u32> {
    s.nfc()
        .flat_map(char::to_lowercase)
        .map(primary_weight)
        .collect()
}

/// Compare two strings in Ukrainian alphabetical order
pub fn compare_uk(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// Tie-break on case: at the first differing letter, lowercase sorts first
fn case_order(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.nfc().zip(b.nfc()) {
        if ca != cb {
            match (ca.is_lowercase(), cb.is_lowercase()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
    }
    Ordering::Equal
}
