use data_error::{DirectoryError, Result};
use profile_index::{ProfileIndex, UserProfile};

use crate::{BaseStorage, FIELD_COUNT};

/// Load the persisted index, starting empty if it cannot be read.
///
/// The failure is logged and otherwise ignored, so the caller can keep
/// working in memory.
pub fn load_or_empty<S: BaseStorage>(storage: &S) -> ProfileIndex {
    match storage.read_fs() {
        Ok(index) => index,
        Err(err) => {
            log::warn!("starting with an empty index: {}", err);
            ProfileIndex::new()
        }
    }
}

/// Parses the plaintext profile format and returns the records it holds.
///
/// The content is read as a stream of whitespace-separated tokens, five per
/// record:
/// ```text
/// 1 Alice alice@example.com alice.png 0
/// 3 Carol carol@example.com carol.png 2
/// ```
///
/// Reading stops at the first record that is incomplete or whose numeric
/// fields fail to parse; everything before it is returned.
pub fn parse_records(content: &str) -> Vec<UserProfile> {
    let tokens: Vec<&str> = content.split_whitespace().collect();

    let mut profiles = Vec::with_capacity(tokens.len() / FIELD_COUNT);
    for fields in tokens.chunks(FIELD_COUNT) {
        match parse_record(fields) {
            Ok(profile) => profiles.push(profile),
            Err(_) => {
                log::warn!(
                    "stopped reading at record {}: {:?}",
                    profiles.len() + 1,
                    fields
                );
                break;
            }
        }
    }
    profiles
}

/// Parse a single record from its tokens
pub fn parse_record(fields: &[&str]) -> Result<UserProfile> {
    match fields {
        [id, name, email, picture, follow_count] => Ok(UserProfile::restore(
            id.parse()?,
            *name,
            *email,
            *picture,
            follow_count.parse()?,
        )),
        _ => Err(DirectoryError::Parse),
    }
}

/// Render a profile as one line of the plaintext format, without newline.
///
/// Text fields are written as they are. A field that is empty or contains
/// whitespace cannot be read back correctly; such profiles are logged but
/// still written.
pub fn format_record(profile: &UserProfile) -> String {
    let text_fields = [profile.name(), profile.email(), profile.picture()];
    if !text_fields.iter().all(|field| is_token(field)) {
        log::warn!(
            "user {} has a field that will not survive reloading",
            profile.id()
        );
    }

    format!(
        "{} {} {} {} {}",
        profile.id(),
        profile.name(),
        profile.email(),
        profile.picture(),
        profile.follow_count()
    )
}

fn is_token(field: &str) -> bool {
    !field.is_empty() && !field.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileStorage;
    use rstest::rstest;
    use tempdir::TempDir;

    #[test]
    fn load_or_empty_tolerates_missing_file() {
        let temp_dir = TempDir::new("utils").unwrap();
        let storage = FileStorage::new(
            "users".to_owned(),
            &temp_dir.path().join("absent.txt"),
        );

        assert!(load_or_empty(&storage).is_empty());
    }

    #[test]
    fn parse_well_formed_records() {
        let content = "1 A a@x p1 0\n5 B b@x p2 3\n";
        let profiles = parse_records(content);

        assert_eq!(
            profiles,
            vec![
                UserProfile::restore(1, "A", "a@x", "p1", 0),
                UserProfile::restore(5, "B", "b@x", "p2", 3),
            ]
        );
    }

    #[test]
    fn records_may_span_lines() {
        let profiles = parse_records("7 G\ng@x p7\n  1");
        assert_eq!(profiles, vec![UserProfile::restore(7, "G", "g@x", "p7", 1)]);
    }

    #[rstest]
    #[case::bad_id("1 A a@x p1 0\nx B b@x p2 0\n3 C c@x p3 0")]
    #[case::bad_count("1 A a@x p1 0\n2 B b@x p2 many\n3 C c@x p3 0")]
    #[case::negative_count("1 A a@x p1 0\n2 B b@x p2 -1\n3 C c@x p3 0")]
    #[case::truncated("1 A a@x p1 0\n2 B b@x")]
    fn parsing_stops_at_first_bad_record(#[case] content: &str) {
        let profiles = parse_records(content);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id(), 1);
    }

    #[test]
    fn empty_content_has_no_records() {
        assert!(parse_records("").is_empty());
        assert!(parse_records(" \n\n").is_empty());
    }

    #[test]
    fn parse_record_rejects_wrong_arity() {
        assert!(matches!(
            parse_record(&["1", "A", "a@x", "p1"]),
            Err(DirectoryError::Parse)
        ));
    }

    #[test]
    fn format_joins_fields_with_single_spaces() {
        let profile = UserProfile::restore(-4, "D", "d@x", "p4", 2);
        assert_eq!(format_record(&profile), "-4 D d@x p4 2");
    }

    #[test]
    fn embedded_space_corrupts_reload() {
        let profile = UserProfile::new(1, "Ann Lee", "a@x", "p1");
        let line = format_record(&profile);

        // the picture token lands in the follow count slot
        assert!(parse_records(&line).is_empty());
    }
}
