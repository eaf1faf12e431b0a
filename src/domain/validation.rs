//! Input validation for entries, mood notes and owner ids
//!
//! Everything here runs before a repository call, so a rejected draft never
//! reaches storage.

use crate::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

pub const MAX_ENTRY_CHARS: usize = 2000;
pub const MAX_NOTE_CHARS: usize = 280;
pub const MAX_TAG_CHARS: usize = 32;
pub const MAX_TAGS: usize = 10;

fn owner_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,63}$").unwrap())
}

/// Trim entry text and check its length in characters.
pub fn validate_content(content: &str) -> Result<String, ValidationError> {
    let trimmed = content.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(ValidationError::EntryTooShort);
    }
    if len > MAX_ENTRY_CHARS {
        return Err(ValidationError::EntryTooLong {
            len,
            max: MAX_ENTRY_CHARS,
        });
    }

    Ok(trimmed.to_string())
}

/// Normalize tags: trimmed, lowercase, no blanks, no duplicates (first wins).
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Result<Vec<String>, ValidationError> {
    let mut normalized: Vec<String> = Vec::new();

    for tag in tags {
        let tag = tag.as_ref().trim().to_lowercase();
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        if tag.chars().count() > MAX_TAG_CHARS {
            return Err(ValidationError::TagTooLong {
                tag,
                max: MAX_TAG_CHARS,
            });
        }
        normalized.push(tag);
    }

    if normalized.len() > MAX_TAGS {
        return Err(ValidationError::TooManyTags {
            count: normalized.len(),
            max: MAX_TAGS,
        });
    }

    Ok(normalized)
}

/// Trim an optional mood note; blank notes become `None`.
pub fn validate_note(note: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(note) = note.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(None);
    };

    let len = note.chars().count();
    if len > MAX_NOTE_CHARS {
        return Err(ValidationError::NoteTooLong {
            len,
            max: MAX_NOTE_CHARS,
        });
    }

    Ok(Some(note.to_string()))
}

/// Owner ids become directory names, so they are restricted to a safe set.
pub fn validate_owner(owner: &str) -> Result<(), ValidationError> {
    if owner_regex().is_match(owner) {
        Ok(())
    } else {
        Err(ValidationError::InvalidOwner(owner.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_trimmed() {
        assert_eq!(validate_content("  hello \n").unwrap(), "hello");
    }

    #[test]
    fn test_blank_content_is_too_short() {
        assert_eq!(validate_content(""), Err(ValidationError::EntryTooShort));
        assert_eq!(
            validate_content("   \n\t"),
            Err(ValidationError::EntryTooShort)
        );
    }

    #[test]
    fn test_content_limit_counts_chars() {
        let exact = "é".repeat(MAX_ENTRY_CHARS);
        assert!(validate_content(&exact).is_ok());

        let over = "a".repeat(MAX_ENTRY_CHARS + 1);
        assert_eq!(
            validate_content(&over),
            Err(ValidationError::EntryTooLong {
                len: MAX_ENTRY_CHARS + 1,
                max: MAX_ENTRY_CHARS
            })
        );
    }

    #[test]
    fn test_tags_normalized_and_deduplicated() {
        let tags = normalize_tags(&["Grateful", " calm ", "grateful", "", "CALM"]).unwrap();
        assert_eq!(tags, vec!["grateful", "calm"]);
    }

    #[test]
    fn test_too_many_tags() {
        let tags: Vec<String> = (0..=MAX_TAGS).map(|i| format!("t{}", i)).collect();
        assert!(matches!(
            normalize_tags(&tags[..]),
            Err(ValidationError::TooManyTags { count: 11, .. })
        ));
    }

    #[test]
    fn test_long_tag_rejected() {
        let long = "x".repeat(MAX_TAG_CHARS + 1);
        assert!(matches!(
            normalize_tags(&[long]),
            Err(ValidationError::TagTooLong { .. })
        ));
    }

    #[test]
    fn test_note_validation() {
        assert_eq!(validate_note(None).unwrap(), None);
        assert_eq!(validate_note(Some("   ")).unwrap(), None);
        assert_eq!(
            validate_note(Some(" slept well ")).unwrap(),
            Some("slept well".to_string())
        );

        let long = "n".repeat(MAX_NOTE_CHARS + 1);
        assert!(matches!(
            validate_note(Some(&long)),
            Err(ValidationError::NoteTooLong { .. })
        ));
    }

    #[test]
    fn test_owner_ids() {
        assert!(validate_owner("alex").is_ok());
        assert!(validate_owner("sam_01.k-r").is_ok());
        assert!(validate_owner("").is_err());
        assert!(validate_owner("../etc").is_err());
        assert!(validate_owner("has space").is_err());
        assert!(validate_owner(".hidden").is_err());
    }
}
