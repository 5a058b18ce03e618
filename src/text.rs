pub const PUNCTUATION: &'static str = r###",."'!?&-/:;()#$%*+<=>@[\]^_`{|}~"###;

/// Whether the char is a punctuation.
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Returns an iterator over all words of the text.
pub fn words(txt: &str) -> impl Iterator<Item = &str> {
    txt.split(|c: char| c.is_whitespace() || is_punctuation(c))
        .filter(|s| !s.is_empty())
}

/// Splits the text into sentences.
///
/// A sentence ends at a run of terminal punctuation (`.`, `!`, `?`, possibly
/// followed by a closing quote or parenthesis) when the next word starts with
/// an uppercase letter, a digit or an opening quote, or when the text ends.
/// This is a rule-based stand-in for a corpus-trained tokenizer and is
/// deliberately best-effort around abbreviations.
pub fn sentences(txt: &str) -> Vec<&str> {
    let txt = txt.trim();
    if txt.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = txt.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        // swallow the whole terminator run, trailing quotes included
        let mut end = i + c.len_utf8();
        while let Some(&(j, d)) = chars.peek() {
            if matches!(d, '.' | '!' | '?' | '"' | '\'' | '\u{201d}' | '\u{2019}' | ')') {
                end = j + d.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        // a boundary needs whitespace after the run, then an uppercase
        // letter, digit or opening quote; "U.S." stays in one piece
        let rest = &txt[end..];
        let boundary = if rest.is_empty() {
            true
        } else if rest.starts_with(|c: char| c.is_whitespace()) {
            match rest.trim_start().chars().next() {
                None => true,
                Some(next) => {
                    next.is_uppercase()
                        || next.is_numeric()
                        || matches!(next, '"' | '\'' | '\u{201c}' | '\u{2018}' | '(')
                }
            }
        } else {
            false
        };

        if boundary {
            let sentence = txt[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = txt[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// A copy of the text suitable for frequency scoring: every non alphabetic
/// char becomes a space, whitespace runs collapse to a single space, all
/// lowercase.
pub fn normalize_for_scoring(txt: &str) -> String {
    let mut out = String::with_capacity(txt.len());
    let mut pending_space = false;
    for c in txt.chars() {
        if c.is_ascii_alphabetic() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Folds all whitespace runs, newlines included, to single spaces and trims.
pub fn fold_whitespace(txt: &str) -> String {
    txt.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of chars in the text. All length thresholds in this crate count
/// chars, not bytes.
pub fn char_len(txt: &str) -> usize {
    txt.chars().count()
}

/// Truncates to at most `max` chars, always on a char boundary.
pub fn truncate_chars(txt: &str, max: usize) -> &str {
    match txt.char_indices().nth(max) {
        Some((idx, _)) => &txt[..idx],
        None => txt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_punctuation() {
        let words: Vec<_> = words("The mayor's office, reportedly, declined.").collect();
        assert_eq!(
            words,
            vec!["The", "mayor", "s", "office", "reportedly", "declined"]
        );
    }

    #[test]
    fn sentences_basic() {
        let text = "The vote passed. Opponents promised an appeal! Will it hold?";
        assert_eq!(
            sentences(text),
            vec![
                "The vote passed.",
                "Opponents promised an appeal!",
                "Will it hold?"
            ]
        );
    }

    #[test]
    fn sentences_without_terminal_punctuation() {
        assert_eq!(sentences("no full stop here"), vec!["no full stop here"]);
    }

    #[test]
    fn sentences_keep_abbreviations_followed_by_lowercase() {
        let text = "The U.S. economy grew. Markets cheered.";
        assert_eq!(
            sentences(text),
            vec!["The U.S. economy grew.", "Markets cheered."]
        );
    }

    #[test]
    fn sentences_empty() {
        assert!(sentences("   ").is_empty());
    }

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(
            normalize_for_scoring("Prices rose 4.2% in May,  again!"),
            "prices rose in may again"
        );
    }

    #[test]
    fn fold_whitespace_collapses_blank_lines() {
        assert_eq!(fold_whitespace("a b\n\n\n c\t d"), "a b c d");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(char_len("héllo"), 5);
    }
}
