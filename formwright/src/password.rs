//! SQL Server password policy.

/// User name checked against when a field does not name one.
pub const DEFAULT_SQL_USER_NAME: &str = "sa";

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

/// Check a password against the SQL Server complexity policy.
///
/// The password must not contain `user_name` (case-insensitive), must be
/// 8 to 128 characters long, and must satisfy at least three of: an uppercase
/// letter, a lowercase letter, a digit, a character outside `[A-Za-z0-9_]`.
pub fn is_valid_sql_password(password: &str, user_name: &str) -> bool {
    let contains_user_name =
        !password.is_empty() && password.to_uppercase().contains(&user_name.to_uppercase());

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_non_word = password
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || c == '_'));
    let classes = [has_upper, has_lower, has_digit, has_non_word]
        .into_iter()
        .filter(|&held| held)
        .count();

    let length = password.chars().count();
    !contains_user_name && (MIN_LENGTH..=MAX_LENGTH).contains(&length) && classes >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_classes_suffice() {
        assert!(is_valid_sql_password("Abcdefg1", DEFAULT_SQL_USER_NAME));
        assert!(is_valid_sql_password("abcdef1!", DEFAULT_SQL_USER_NAME));
        assert!(is_valid_sql_password("ABCDEF1!", DEFAULT_SQL_USER_NAME));
        assert!(is_valid_sql_password("Abcdefg!", DEFAULT_SQL_USER_NAME));
    }

    #[test]
    fn single_class_fails() {
        assert!(!is_valid_sql_password("abcdefgh", DEFAULT_SQL_USER_NAME));
    }

    #[test]
    fn two_classes_fail() {
        assert!(!is_valid_sql_password("abcdefg1", DEFAULT_SQL_USER_NAME));
    }

    #[test]
    fn user_name_is_rejected_case_insensitively() {
        assert!(!is_valid_sql_password("sa12345!", DEFAULT_SQL_USER_NAME));
        assert!(!is_valid_sql_password("xSA2345!Q", DEFAULT_SQL_USER_NAME));
        assert!(!is_valid_sql_password("Admin#2024x", "ADMIN"));
        assert!(is_valid_sql_password("Admin#2024x", "root"));
    }

    #[test]
    fn length_bounds() {
        assert!(!is_valid_sql_password("Ab1!xyz", DEFAULT_SQL_USER_NAME));
        let longest = format!("Ab1!{}", "x".repeat(124));
        assert_eq!(longest.len(), 128);
        assert!(is_valid_sql_password(&longest, DEFAULT_SQL_USER_NAME));
        let too_long = format!("Ab1!{}", "x".repeat(125));
        assert!(!is_valid_sql_password(&too_long, DEFAULT_SQL_USER_NAME));
    }

    #[test]
    fn underscore_is_a_word_character() {
        assert!(!is_valid_sql_password("abcdefg_", DEFAULT_SQL_USER_NAME));
        assert!(!is_valid_sql_password("abcdef1_", DEFAULT_SQL_USER_NAME));
    }

    #[test]
    fn empty_password_fails() {
        assert!(!is_valid_sql_password("", DEFAULT_SQL_USER_NAME));
    }

    #[test]
    fn any_password_containing_the_user_name_fails() {
        let samples = ["Abcdefg1", "P@ssw0rd!", "Zz9$Zz9$Zz9$"];
        for password in samples {
            let user_name = &password[1..4];
            assert!(!is_valid_sql_password(password, user_name));
            assert!(!is_valid_sql_password(password, &user_name.to_lowercase()));
        }
    }
}
