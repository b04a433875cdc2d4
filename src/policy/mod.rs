//! Character policy for file and directory names.
//!
//! A name is clean when it only uses ASCII letters, digits, `_`, `-` and `.`.
//! Anything else gets rewritten by [`sanitize_name`].

use once_cell::sync::Lazy;
use regex::Regex;

// Whole-name match: non-empty, permitted characters only
static VALID_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-.]+$").unwrap());

// Any single character outside the permitted set
static INVALID_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-.]").unwrap());

static HYPHEN_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Check whether a base name satisfies the character policy
pub fn is_valid_name(name: &str) -> bool {
    VALID_NAME_REGEX.is_match(name)
}

/// Rewrite a name so that it satisfies the character policy
///
/// Spaces and square brackets become hyphens, every other disallowed
/// character is dropped, hyphen runs collapse and the name is trimmed of
/// hyphens. Finally a non-alphanumeric character sitting directly before
/// the extension dot is removed, so `file[name].txt` ends up as
/// `file-name.txt` rather than `file-name-.txt`.
///
/// Names made only of disallowed characters collapse to an empty string.
pub fn sanitize_name(name: &str) -> String {
    let name = name.replace(' ', "-").replace(['[', ']'], "-");
    let name = INVALID_CHAR_REGEX.replace_all(&name, "");
    let name = HYPHEN_RUN_REGEX.replace_all(&name, "-");
    let name = name.trim_matches('-');

    strip_before_extension(name)
}

/// Drop the character in front of the last `.` unless it is alphanumeric.
///
/// Operates on chars; at this point the name is ASCII only.
fn strip_before_extension(name: &str) -> String {
    let Some(dot) = name.rfind('.') else {
        return name.to_string();
    };

    // A leading dot has nothing in front of it
    let Some(prior) = name[..dot].chars().next_back() else {
        return name.to_string();
    };

    if prior.is_ascii_alphanumeric() {
        return name.to_string();
    }

    let cut = dot - prior.len_utf8();
    format!("{}{}", &name[..cut], &name[dot..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("file.txt"));
        assert!(is_valid_name("file-name.txt"));
        assert!(is_valid_name("file.name.txt"));
        assert!(is_valid_name("file_name.txt"));
        assert!(is_valid_name("README"));
        assert!(is_valid_name(".hidden"));
        assert!(is_valid_name("..."));
        assert!(is_valid_name("A-Z_0-9"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name("file name.txt"));
        assert!(!is_valid_name("file[name].txt"));
        assert!(!is_valid_name("file!name.txt"));
        assert!(!is_valid_name("café.txt"));
        assert!(!is_valid_name("tab\there"));
        assert!(!is_valid_name("trailing\n"));
        assert!(!is_valid_name("a/b"));
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_sanitize_clean_names_unchanged() {
        assert_eq!(sanitize_name("file.txt"), "file.txt");
        assert_eq!(sanitize_name("file-name.txt"), "file-name.txt");
        assert_eq!(sanitize_name("file.name.txt"), "file.name.txt");
        assert_eq!(sanitize_name("file_name.txt"), "file_name.txt");
    }

    #[test]
    fn test_sanitize_spaces() {
        assert_eq!(sanitize_name("file name.txt"), "file-name.txt");
        assert_eq!(sanitize_name("my  holiday   photos"), "my-holiday-photos");
    }

    #[test]
    fn test_sanitize_brackets() {
        assert_eq!(sanitize_name("file[name].txt"), "file-name.txt");
        assert_eq!(sanitize_name("[2021] report.pdf"), "2021-report.pdf");
    }

    #[test]
    fn test_sanitize_strips_other_characters() {
        assert_eq!(sanitize_name("file!name.txt"), "filename.txt");
        assert_eq!(sanitize_name("what?(final).doc"), "whatfinal.doc");
        assert_eq!(sanitize_name("naïve café.md"), "nave-caf.md");
    }

    #[test]
    fn test_sanitize_collapses_hyphens() {
        assert_eq!(sanitize_name("file--name.txt"), "file-name.txt");
        assert_eq!(sanitize_name("a - b"), "a-b");
    }

    #[test]
    fn test_sanitize_trims_hyphens() {
        assert_eq!(sanitize_name("-file-.txt"), "file.txt");
        assert_eq!(sanitize_name(" padded "), "padded");
    }

    #[test]
    fn test_sanitize_removes_char_before_last_period() {
        assert_eq!(sanitize_name("archive (old).tar.gz"), "archive-old.tar.gz");
        assert_eq!(sanitize_name("notes_!.md"), "notes.md");
        // Only the last period is considered
        assert_eq!(sanitize_name("a [b].c [d].e"), "a-b-.c-d.e");
    }

    #[test]
    fn test_sanitize_leading_period() {
        assert_eq!(sanitize_name(" .txt"), ".txt");
        assert_eq!(sanitize_name(".my config"), ".my-config");
    }

    #[test]
    fn test_sanitize_all_invalid_is_empty() {
        assert_eq!(sanitize_name("!!!"), "");
        assert_eq!(sanitize_name("日本語"), "");
        assert_eq!(sanitize_name("[ ]"), "");
    }

    #[test]
    fn test_sanitized_output_is_valid() {
        let inputs = [
            "file name.txt",
            "file[name].txt",
            "file!name.txt",
            "-file-.txt",
            "Quarterly Report (Q3) [draft].xlsx",
            "über grün",
        ];

        for input in inputs {
            let sanitized = sanitize_name(input);
            assert!(is_valid_name(&sanitized), "{input:?} -> {sanitized:?}");
        }
    }

    #[test]
    fn test_sanitize_idempotent_common_case() {
        let inputs = [
            "file name.txt",
            "file[name].txt",
            "file!name.txt",
            "file--name.txt",
            "-file-.txt",
            "Quarterly Report (Q3) [draft].xlsx",
        ];

        for input in inputs {
            let once = sanitize_name(input);
            assert_eq!(sanitize_name(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_sanitize_not_idempotent_when_second_pass_hits_extension_rule() {
        // "a _.txt" -> "a-_.txt" -> "_" removed -> "a-.txt", a valid name.
        // Running again removes the hyphen that now precedes the period.
        let once = sanitize_name("a _.txt");
        assert_eq!(once, "a-.txt");
        assert!(is_valid_name(&once));
        assert_eq!(sanitize_name(&once), "a.txt");
    }
}
