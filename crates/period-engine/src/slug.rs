//! ASCII slugs for report titles.

use std::sync::LazyLock;

use regex::Regex;

// ASCII separators plus their typographic forms: no-break space, en/em dash,
// curly quotes, guillemets and ellipsis.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r##"[\t !"#$%&'()*\-/<=>?@\[\\\]^_`{|},."##,
        r"\x{a0}\x{2013}\x{2014}\x{2018}\x{2019}\x{201c}\x{201d}\x{ab}\x{bb}\x{2026}]+",
    ))
    .expect("valid punctuation pattern")
});

/// Generate an ASCII-only, `-`-delimited slug.
///
/// Letters from Latin-1 and Latin Extended-A lose their diacritics
/// (`é` → `e`, `ß` → `ss`), and a few common symbols are spelled out
/// (`€` → `eur`, `©` → `c`). Other non-ASCII characters, such as CJK,
/// Cyrillic, Greek or emoji, are dropped.
///
/// ```
/// use period_engine::slug::slugify;
///
/// assert_eq!(slugify("Q1 Report: Café Sales!"), "q1-report:-cafe-sales");
/// ```
pub fn slugify(text: &str) -> String {
    slugify_with(text, "-")
}

/// [`slugify`] with a custom delimiter.
pub fn slugify_with(text: &str, delim: &str) -> String {
    PUNCTUATION
        .split(&text.to_lowercase())
        .map(transliterate)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(delim)
}

/// Fold a word to ASCII; characters without a rendering are dropped.
fn transliterate(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else if let Some(folded) = fold_char(ch) {
            out.push_str(folded);
        }
    }
    out
}

// Lowercase only: callers lowercase before folding.
fn fold_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'ď' | 'đ' | 'ð' => "d",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'ĥ' | 'ħ' => "h",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'ĳ' => "ij",
        'ĵ' => "j",
        'ķ' => "k",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'ñ' | 'ń' | 'ņ' | 'ň' | 'ŉ' => "n",
        'ŋ' => "ng",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'œ' => "oe",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'ś' | 'ŝ' | 'ş' | 'š' | 'ſ' => "s",
        'ß' => "ss",
        'ţ' | 'ť' | 'ŧ' => "t",
        'þ' => "th",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'ŵ' => "w",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'ź' | 'ż' | 'ž' => "z",
        'ĸ' => "q",
        '€' => "eur",
        '£' => "gbp",
        '¥' => "yen",
        '¢' | '©' => "c",
        '®' => "r",
        '™' => "tm",
        '°' => "deg",
        '×' => "x",
        'µ' => "u",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic_title() {
        assert_eq!(slugify("Monthly Throughput Report"), "monthly-throughput-report");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("  Hello,   World!!  "), "hello-world");
        assert_eq!(slugify("a_b-c/d.e"), "a-b-c-d-e");
    }

    #[test]
    fn test_slugify_keeps_unlisted_ascii_symbols() {
        // ':' and ';' and '+' are not separators
        assert_eq!(slugify("c++ ratio:1;2"), "c++-ratio:1;2");
    }

    #[test]
    fn test_slugify_transliterates_latin() {
        assert_eq!(slugify("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugify("Straße Œuvre"), "strasse-oeuvre");
    }

    #[test]
    fn test_slugify_drops_non_latin() {
        assert_eq!(slugify("日本 report"), "report");
        assert_eq!(slugify("Ελλάδα Отчёт report"), "report");
    }

    #[test]
    fn test_slugify_typographic_punctuation_splits_like_ascii() {
        assert_eq!(slugify("Don\u{2019}t \u{201c}Panic\u{201d}"), slugify("Don't \"Panic\""));
        assert_eq!(slugify("Q1 \u{2013} Q2 \u{2014} Q3"), "q1-q2-q3");
        assert_eq!(slugify("Sales\u{a0}Report\u{2026}"), "sales-report");
        assert_eq!(slugify("\u{ab}Draft\u{bb}"), "draft");
    }

    #[test]
    fn test_slugify_spells_out_symbols() {
        assert_eq!(slugify("Budget 5€"), "budget-5eur");
        assert_eq!(slugify("Acme™ 20°"), "acmetm-20deg");
    }

    #[test]
    fn test_slugify_empty_and_punctuation_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!..."), "");
    }

    #[test]
    fn test_slugify_custom_delimiter() {
        assert_eq!(slugify_with("Week 10 Summary", "_"), "week_10_summary");
    }
}
