//! Text sanitization and normalization.
//!
//! Sanitization (trim, length cap, HTML-escape) is applied exactly once to
//! every raw text value, either at ingestion or when a query is validated.
//! Normalization (lowercase plus a fixed diacritic remap) is only used for
//! comparing text and brand filters, never for storage.

use regex::Regex;
use std::sync::LazyLock;

/// Accented Latin letters the search form accepts, lowercase and uppercase.
const ACCENTED_LETTERS: &str = "äàáâãåçčćďëèéêěïìíîñňöòóôõøřßšśťüùúûůýÿžźż\
                                ÄÀÁÂÃÅÇČĆĎËÈÉÊĚÏÌÍÎÑŇÖÒÓÔÕØŘŠŚŤÜÙÚÛŮÝŸŽŹŻ";

/// Letters, digits, whitespace, hyphen and period.
static ALLOWED_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^[a-zA-Z0-9\s\-.{}]*$", ACCENTED_LETTERS)).unwrap()
});

/// Sanitize a raw text value: trim, cap at `max_len` characters, HTML-escape.
///
/// Escaping is not skipped for input that already contains entities, so a
/// second application double-escapes. Apply once per raw value.
///
/// # Examples
///
/// ```
/// use salon_core::sanitize::sanitize_string;
///
/// assert_eq!(sanitize_string("  <b>BMW</b> ", 100), "&lt;b&gt;BMW&lt;/b&gt;");
/// assert_eq!(sanitize_string("Golf GTI", 4), "Golf");
/// ```
pub fn sanitize_string(input: &str, max_len: usize) -> String {
    let trimmed = input.trim();
    let truncated: String = if trimmed.chars().count() > max_len {
        trimmed.chars().take(max_len).collect()
    } else {
        trimmed.to_string()
    };
    escape_html(&truncated)
}

/// Replace `&`, `<`, `>`, `"` and `'` with their HTML entities.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Lowercase and fold accented Latin letters to their ASCII base letter.
///
/// This is a literal character remap, not Unicode normalization: letters
/// outside the table are kept as they are.
pub fn normalize_text(input: &str) -> String {
    input.to_lowercase().chars().map(fold_diacritic).collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'ä' | 'à' | 'á' | 'â' | 'ã' | 'å' => 'a',
        'ç' | 'č' | 'ć' => 'c',
        'ď' => 'd',
        'ë' | 'è' | 'é' | 'ê' | 'ě' => 'e',
        'ï' | 'ì' | 'í' | 'î' => 'i',
        'ñ' | 'ň' => 'n',
        'ö' | 'ò' | 'ó' | 'ô' | 'õ' | 'ø' => 'o',
        'ř' => 'r',
        'ß' | 'š' | 'ś' => 's',
        'ť' => 't',
        'ü' | 'ù' | 'ú' | 'û' | 'ů' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        other => other,
    }
}

/// Check a raw value against the search-form character allow-list.
pub fn is_allowed_text(input: &str) -> bool {
    ALLOWED_TEXT.is_match(input)
}
