//! Property-based test generators using proptest.
//!
//! Provides strategies for generating log messages, severities, and
//! usernames within the shapes the library accepts.

use caplog::{Environment, Severity};
use proptest::prelude::*;

/// Strategy for single-line printable messages, brackets included.
pub fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,200}").expect("Invalid regex")
}

/// Strategy for messages containing embedded newlines and carriage returns.
pub fn multiline_message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\r\n]{1,200}").expect("Invalid regex")
}

/// Strategy for the four known severities.
pub fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warning),
        Just(Severity::Notice),
        Just(Severity::Debug),
    ]
}

/// Strategy for the three environments.
pub fn environment_strategy() -> impl Strategy<Value = Environment> {
    prop_oneof![
        Just(Environment::Silent),
        Just(Environment::Production),
        Just(Environment::Development),
    ]
}

/// Strategy for arbitrary severity weights, known or not.
pub fn weight_strategy() -> impl Strategy<Value = u8> {
    any::<u8>()
}

/// Strategy for weights that map to no known severity.
pub fn unknown_weight_strategy() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("must not be a known severity weight", |w| {
        Severity::from_weight(*w).is_none()
    })
}

/// Strategy for plausible usernames (never empty).
pub fn username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("Invalid regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_messages_are_single_line(msg in message_strategy()) {
            prop_assert!(!msg.contains('\n'));
            prop_assert!(!msg.contains('\r'));
        }

        #[test]
        fn test_unknown_weights_have_no_severity(w in unknown_weight_strategy()) {
            prop_assert!(Severity::from_weight(w).is_none());
        }

        #[test]
        fn test_usernames_are_never_empty(name in username_strategy()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.is_ascii());
        }
    }
}
