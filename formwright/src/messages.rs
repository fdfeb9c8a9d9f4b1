//! User-facing strings, routed through the host's [`Localizer`].

use formwright_types::Localizer;

pub fn invalid_sql_password(localizer: &dyn Localizer, field_label: &str) -> String {
    localizer.localize(
        "invalidSQLPassword",
        "{0} doesn't meet the password complexity requirement. For more information: https://docs.microsoft.com/sql/relational-databases/security/password-policy",
        &[field_label],
    )
}

pub fn password_mismatch(localizer: &dyn Localizer, field_label: &str) -> String {
    localizer.localize(
        "passwordNotMatch",
        "{0} doesn't match the confirmation password",
        &[field_label],
    )
}

pub fn confirm_label(localizer: &dyn Localizer, field_label: &str) -> String {
    localizer.localize("confirmPassword", "Confirm {0}", &[field_label])
}

pub fn missing_required_information(localizer: &dyn Localizer) -> String {
    localizer.localize(
        "deployCluster.MissingRequiredInfoError",
        "Please fill out the required fields marked with red asterisks.",
        &[],
    )
}
