//! Single-byte decoding for markup character data.
//!
//! The data file stores text in Windows-1250. Runs set in the phonetic font
//! (`\f1`) reuse the `0x80..=0x9F` slots for IPA-like glyphs instead.

/// Upper half (`0x80..=0xFF`) of Windows-1250.
///
/// Slots the code page leaves undefined map to the C1 control of the same value.
const CP1250_HIGH: [char; 128] = [
    // 0x80
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0083}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{0088}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{015A}', '\u{0164}', '\u{017D}', '\u{0179}',
    // 0x90
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{0098}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{015B}', '\u{0165}', '\u{017E}', '\u{017A}',
    // 0xA0
    '\u{00A0}', '\u{02C7}', '\u{02D8}', '\u{0141}', '\u{00A4}', '\u{0104}', '\u{00A6}', '\u{00A7}',
    '\u{00A8}', '\u{00A9}', '\u{015E}', '\u{00AB}', '\u{00AC}', '\u{00AD}', '\u{00AE}', '\u{017B}',
    // 0xB0
    '\u{00B0}', '\u{00B1}', '\u{02DB}', '\u{0142}', '\u{00B4}', '\u{00B5}', '\u{00B6}', '\u{00B7}',
    '\u{00B8}', '\u{0105}', '\u{015F}', '\u{00BB}', '\u{013D}', '\u{02DD}', '\u{013E}', '\u{017C}',
    // 0xC0
    '\u{0154}', '\u{00C1}', '\u{00C2}', '\u{0102}', '\u{00C4}', '\u{0139}', '\u{0106}', '\u{00C7}',
    '\u{010C}', '\u{00C9}', '\u{0118}', '\u{00CB}', '\u{011A}', '\u{00CD}', '\u{00CE}', '\u{010E}',
    // 0xD0
    '\u{0110}', '\u{0143}', '\u{0147}', '\u{00D3}', '\u{00D4}', '\u{0150}', '\u{00D6}', '\u{00D7}',
    '\u{0158}', '\u{016E}', '\u{00DA}', '\u{0170}', '\u{00DC}', '\u{00DD}', '\u{0162}', '\u{00DF}',
    // 0xE0
    '\u{0155}', '\u{00E1}', '\u{00E2}', '\u{0103}', '\u{00E4}', '\u{013A}', '\u{0107}', '\u{00E7}',
    '\u{010D}', '\u{00E9}', '\u{0119}', '\u{00EB}', '\u{011B}', '\u{00ED}', '\u{00EE}', '\u{010F}',
    // 0xF0
    '\u{0111}', '\u{0144}', '\u{0148}', '\u{00F3}', '\u{00F4}', '\u{0151}', '\u{00F6}', '\u{00F7}',
    '\u{0159}', '\u{016F}', '\u{00FA}', '\u{0171}', '\u{00FC}', '\u{00FD}', '\u{0163}', '\u{02D9}',
];

const fn build_legacy_table() -> [char; 256] {
    let mut table = ['\0'; 256];
    let mut i = 0;
    while i < 0x80 {
        table[i] = i as u8 as char;
        i += 1;
    }
    table[0x7F] = '~';
    while i < 0x100 {
        table[i] = CP1250_HIGH[i - 0x80];
        i += 1;
    }
    table
}

/// Byte → character table for non-phonetic text.
///
/// ASCII passes through, except `0x7F` which the dictionary uses for `~`.
pub static LEGACY_TABLE: [char; 256] = build_legacy_table();

/// Glyphs for bytes `0x80..=0x9F` in phonetic mode.
///
/// Slots without a known glyph render as `?` so gaps stay visible.
pub static PHONETIC_TABLE: [&str; 32] = [
    "?", "?", "ɔ", "ʒ", "?", "ʃ", "ɛ", "ʌ",
    "ə", "θ", "ɪ", "ɑ", "?", "ː", "ˈ", "?",
    "ŋ", "?", "?", "?", "?", "?", "?", "ð",
    "æ", "?", "?", "?", "?", "?", "?", "?",
];

/// Phonetic glyph for `byte`, if it falls inside the overridden range.
#[inline]
pub fn phonetic_symbol(byte: u8) -> Option<&'static str> {
    match byte {
        0x80..=0x9F => Some(PHONETIC_TABLE[usize::from(byte - 0x80)]),
        _ => None,
    }
}

/// Legacy code page character for `byte`.
#[inline]
pub fn legacy_char(byte: u8) -> char {
    LEGACY_TABLE[usize::from(byte)]
}

/// Decode one byte and append it to `out`.
pub fn push_decoded(out: &mut String, byte: u8, phonetic: bool) {
    match phonetic.then(|| phonetic_symbol(byte)).flatten() {
        Some(symbol) => out.push_str(symbol),
        None => out.push(legacy_char(byte)),
    }
}
