//! Slug derivation from post titles.

/// Derives a URL slug from a title.
///
/// Lowercases, folds common Latin diacritics to ASCII, drops everything
/// outside `[a-z0-9]`, and joins the remaining words with single hyphens.
/// The output never has leading, trailing, or doubled hyphens. An empty
/// result is possible (titles with no usable characters); callers fall
/// back to a generated id in that case.
pub fn slugify(title: &str) -> String {
    let mut cleaned = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if let Some(folded) = fold_diacritic(c) {
            cleaned.push(folded);
        } else if c.is_ascii_alphanumeric() {
            cleaned.push(c);
        } else if c.is_whitespace() || c == '-' {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

/// ASCII replacement for accented Latin letters, lowercase input only.
/// Letters without a plain-ASCII base (ø, æ, ß) are not folded and get
/// dropped by the caller, like any other non-ASCII character.
fn fold_diacritic(c: char) -> Option<char> {
    Some(match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    })
}
