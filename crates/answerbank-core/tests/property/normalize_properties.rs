use answerbank_core::normalize_input;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalization_is_idempotent(s in "[ -~]{0,64}") {
        let once = normalize_input(&s);
        let twice = normalize_input(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(s in "[ -~]{0,64}", left in "[ \t\n]{0,4}", right in "[ \t\n]{0,4}") {
        let padded = format!("{left}{s}{right}");
        prop_assert_eq!(normalize_input(&padded), normalize_input(&s));
    }

    #[test]
    fn casing_variants_collapse(s in "[a-zA-Z ?]{0,40}") {
        prop_assert_eq!(normalize_input(&s.to_uppercase()), normalize_input(&s.to_lowercase()));
    }

    #[test]
    fn output_never_has_surrounding_whitespace(s in "\\PC{0,40}") {
        let out = normalize_input(&s);
        prop_assert_eq!(out.trim(), out.as_str());
    }
}
