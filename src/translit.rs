//! Romanised Nepali to Devanagari conversion for incoming queries.
//!
//! Longest-match scan over a fixed romanisation scheme. A consonant token
//! takes its vowel from the following vowel token ("ka" is क, "ki" is कि)
//! and carries a halanta when none follows, so clusters render as
//! conjuncts ("sta" is स्त). Capitals T, D and N select the retroflex
//! series, and "Sh" the sibilant ष. Characters outside the scheme,
//! Devanagari included, pass through unchanged.

/// Joining sign placed between consonants of a cluster
const HALANTA: char = '\u{094d}';

/// Nasalisation signs, written as "*" and "**"
const ANUSVARA: char = '\u{0902}';
const CANDRABINDU: char = '\u{0901}';

/// Independent and dependent (matra) forms of one vowel
struct VowelForm {
    independent: char,
    matra: Option<char>,
}

/// Deterministic romanised-input converter
#[derive(Debug, Clone, Default)]
pub struct Romanizer;

impl Romanizer {
    pub fn new() -> Self {
        Self
    }

    /// Convert romanised text to Devanagari.
    ///
    /// A halanta produced by a bare consonant is dropped before whitespace
    /// and at the end of the input, so word-final consonants read
    /// naturally ("ram" is रम, not रम्).
    pub fn transliterate(&self, roman: &str) -> String {
        let raw: Vec<char> = roman.chars().collect();
        let chars: Vec<char> = raw
            .iter()
            .enumerate()
            .map(|(i, &c)| match c {
                // Retroflex markers keep their case.
                'T' | 'D' | 'N' => c,
                // ष is written "Sh"; a lone capital S is plain s.
                'S' if matches!(raw.get(i + 1).copied(), Some('h' | 'H')) => 'S',
                _ => c.to_ascii_lowercase(),
            })
            .collect();

        let mut out = String::new();
        let mut pending_halanta = false;
        let mut i = 0;

        while i < chars.len() {
            if let Some((dev, used)) = consonant_at(&chars, i) {
                out.push_str(dev);
                i += used;
                if let Some((form, used)) = vowel_at(&chars, i) {
                    if let Some(matra) = form.matra {
                        out.push(matra);
                    }
                    i += used;
                    pending_halanta = false;
                } else {
                    out.push(HALANTA);
                    pending_halanta = true;
                }
                continue;
            }

            if let Some((form, used)) = vowel_at(&chars, i) {
                out.push(form.independent);
                i += used;
                pending_halanta = false;
                continue;
            }

            let c = chars[i];

            if let Some(digit) = devanagari_digit(c) {
                out.push(digit);
                i += 1;
                pending_halanta = false;
                continue;
            }

            if c == '*' {
                if chars.get(i + 1) == Some(&'*') {
                    out.push(CANDRABINDU);
                    i += 2;
                } else {
                    out.push(ANUSVARA);
                    i += 1;
                }
                pending_halanta = false;
                continue;
            }

            // Outside the scheme: pass through. A word boundary ends the
            // current cluster, same as the end of input.
            if pending_halanta && c.is_whitespace() {
                out.pop();
            }
            out.push(c);
            i += 1;
            pending_halanta = false;
        }

        if pending_halanta {
            out.pop();
        }
        out
    }
}

/// Longest consonant token starting at `at`, with its length in input
/// characters. Tokens are up to three characters ("chh", "ksh").
fn consonant_at(chars: &[char], at: usize) -> Option<(&'static str, usize)> {
    let longest = 3.min(chars.len() - at);
    for len in (1..=longest).rev() {
        let token: String = chars[at..at + len].iter().collect();
        if let Some(dev) = consonant(&token) {
            return Some((dev, len));
        }
    }
    None
}

fn consonant(token: &str) -> Option<&'static str> {
    let dev = match token {
        "chh" => "छ",
        "ksh" => "क्ष",
        "kh" => "ख",
        "gh" => "घ",
        "ng" => "ङ",
        "ch" => "च",
        "jh" => "झ",
        "Th" => "ठ",
        "Dh" => "ढ",
        "th" => "थ",
        "dh" => "ध",
        "ph" => "फ",
        "bh" => "भ",
        "sh" => "श",
        "Sh" => "ष",
        "gy" => "ज्ञ",
        "tr" => "त्र",
        "k" => "क",
        "q" => "क",
        "g" => "ग",
        "c" => "च",
        "j" => "ज",
        "z" => "ज",
        "T" => "ट",
        "D" => "ड",
        "N" => "ण",
        "t" => "त",
        "d" => "द",
        "n" => "न",
        "p" => "प",
        "f" => "फ",
        "b" => "ब",
        "m" => "म",
        "y" => "य",
        "r" => "र",
        "l" => "ल",
        "v" => "व",
        "w" => "व",
        "s" => "स",
        "h" => "ह",
        "x" => "क्ष",
        _ => return None,
    };
    Some(dev)
}

/// Longest vowel token starting at `at`. Tokens are one or two characters.
fn vowel_at(chars: &[char], at: usize) -> Option<(VowelForm, usize)> {
    let longest = 2.min(chars.len().saturating_sub(at));
    for len in (1..=longest).rev() {
        let token: String = chars[at..at + len].iter().collect();
        if let Some(form) = vowel(&token) {
            return Some((form, len));
        }
    }
    None
}

fn vowel(token: &str) -> Option<VowelForm> {
    let (independent, matra) = match token {
        // "a" is the inherent vowel and needs no matra.
        "a" => ('अ', None),
        "aa" => ('आ', Some('ा')),
        "i" => ('इ', Some('ि')),
        "ii" | "ee" => ('ई', Some('ी')),
        "u" => ('उ', Some('ु')),
        "uu" | "oo" => ('ऊ', Some('ू')),
        "e" => ('ए', Some('े')),
        "ai" => ('ऐ', Some('ै')),
        "o" => ('ओ', Some('ो')),
        "au" => ('औ', Some('ौ')),
        _ => return None,
    };
    Some(VowelForm { independent, matra })
}

fn devanagari_digit(c: char) -> Option<char> {
    let digit = match c {
        '0' => '०',
        '1' => '१',
        '2' => '२',
        '3' => '३',
        '4' => '४',
        '5' => '५',
        '6' => '६',
        '7' => '७',
        '8' => '८',
        '9' => '९',
        _ => return None,
    };
    Some(digit)
}
