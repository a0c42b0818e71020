/// Initials for the avatar placeholder.
///
/// First letter of each name when both are non-empty, otherwise the first two
/// characters of the first name. Short first names yield whatever is there:
/// `"J"` gives `"J"` and an empty first name gives `""`.
pub fn initials(first_name: &str, last_name: Option<&str>) -> String {
    let last_name = last_name.unwrap_or_default();

    let picked: Vec<char> = match (first_name.chars().next(), last_name.chars().next()) {
        (Some(first), Some(last)) => vec![first, last],
        _ => first_name.chars().take(2).collect(),
    };

    picked.into_iter().flat_map(char::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_names_use_first_letter_of_each() {
        assert_eq!(initials("jane", Some("doe")), "JD");
    }

    #[test]
    fn missing_last_name_uses_first_two_letters() {
        assert_eq!(initials("jane", None), "JA");
        assert_eq!(initials("jane", Some("")), "JA");
    }

    #[test]
    fn short_first_name_truncates_instead_of_failing() {
        assert_eq!(initials("j", None), "J");
        assert_eq!(initials("", None), "");
        assert_eq!(initials("", Some("doe")), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(initials("élodie", None), "ÉL");
        assert_eq!(initials("ö", Some("ünal")), "ÖÜ");
    }
}
