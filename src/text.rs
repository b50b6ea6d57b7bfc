//! Small text helpers shared by the plan builders.

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drops trailing sentence punctuation so the topic can sit mid-sentence.
pub fn strip_sentence_end(text: &str) -> &str {
    text.trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | '…'))
        .trim_end()
}

/// Prefixes `word` with "a" or "an" by its first letter.
/// Silent-h words take "an"; "u"/"eu" words sounding like "you" and
/// "one" take "a".
pub fn with_article(word: &str) -> String {
    const SILENT_H: [&str; 4] = ["honest", "honor", "hour", "heir"];
    const CONSONANT_SOUND: [&str; 10] =
        ["uni", "use", "usu", "uti", "ura", "ure", "eu", "ewe", "one", "once"];

    let lower = word.to_lowercase();
    let vowel_sound = if SILENT_H.iter().any(|p| lower.starts_with(p)) {
        true
    } else if CONSONANT_SOUND.iter().any(|p| lower.starts_with(p)) {
        false
    } else {
        lower
            .chars()
            .next()
            .map_or(false, |c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
    };
    if vowel_sound {
        format!("an {}", word)
    } else {
        format!("a {}", word)
    }
}
