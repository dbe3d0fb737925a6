//! Tests for token classification.

use super::ParseError;
use super::shape::{Shape, classify};

/// Helper for the expected named shape
const fn named<'a>(name: &'a str, value: Option<&'a str>) -> Shape<'a> {
    Shape::Named { name, value }
}

mod named_options {
    use super::*;

    #[test]
    fn long_option_without_value() {
        assert_eq!(classify("--nthreads"), Ok(named("nthreads", None)));
    }

    #[test]
    fn long_option_with_attached_value() {
        assert_eq!(classify("--nthreads=4"), Ok(named("nthreads", Some("4"))));
    }

    #[test]
    fn long_option_with_empty_attached_value() {
        assert_eq!(classify("--spp="), Ok(named("spp", Some(""))));
    }

    #[test]
    fn value_is_split_at_first_equals() {
        assert_eq!(
            classify("--input=a=b.txt"),
            Ok(named("input", Some("a=b.txt")))
        );
    }

    #[test]
    fn short_option_without_value() {
        assert_eq!(classify("-n"), Ok(named("n", None)));
    }

    #[test]
    fn short_option_with_attached_value() {
        assert_eq!(classify("-n=4"), Ok(named("n", Some("4"))));
        assert_eq!(classify("-n=false"), Ok(named("n", Some("false"))));
    }

    #[test]
    fn multibyte_short_option_with_attached_value() {
        assert_eq!(classify("-é=1"), Ok(named("é", Some("1"))));
    }

    #[test]
    fn extra_dashes_are_stripped() {
        assert_eq!(classify("---quiet"), Ok(named("quiet", None)));
    }

    #[test]
    fn double_dash_single_character() {
        assert_eq!(classify("--q"), Ok(named("q", None)));
    }

    #[test]
    fn dashes_only_give_empty_name() {
        assert_eq!(classify("-"), Ok(named("", None)));
        assert_eq!(classify("--"), Ok(named("", None)));
    }

    #[test]
    fn leading_equals_gives_empty_name() {
        assert_eq!(classify("-=x"), Ok(named("", Some("x"))));
    }
}

mod clusters {
    use super::*;

    #[test]
    fn single_dash_multiple_characters() {
        assert_eq!(classify("-qlp"), Ok(Shape::Cluster { members: "qlp" }));
    }

    #[test]
    fn single_dash_long_name_is_a_cluster() {
        assert_eq!(
            classify("-quiet"),
            Ok(Shape::Cluster { members: "quiet" })
        );
    }

    #[test]
    fn cluster_with_value_is_ambiguous() {
        assert_eq!(
            classify("-pqs=5"),
            Err(ParseError::AmbiguousClusterValue {
                name: "pqs".to_string(),
                token: "-pqs=5".to_string(),
            })
        );
    }

    #[test]
    fn long_name_with_single_dash_and_value_is_ambiguous() {
        assert!(matches!(
            classify("-nthreads=4"),
            Err(ParseError::AmbiguousClusterValue { .. })
        ));
    }

    #[test]
    fn ambiguous_message_suggests_two_dashes() {
        let err = classify("-pqs=5").unwrap_err();
        let message = err.to_string();

        assert!(message.starts_with("Unrecognized option pqs in -pqs=5\n"));
        assert!(message.contains("Did you mean to use two dashes"));
    }
}

mod malformed {
    use super::*;

    #[test]
    fn token_without_dash() {
        assert_eq!(
            classify("nthreads"),
            Err(ParseError::MalformedToken {
                token: "nthreads".to_string(),
            })
        );
    }

    #[test]
    fn empty_token() {
        assert!(matches!(
            classify(""),
            Err(ParseError::MalformedToken { .. })
        ));
    }

    #[test]
    fn value_like_token() {
        assert!(matches!(
            classify("4"),
            Err(ParseError::MalformedToken { .. })
        ));
    }

    #[test]
    fn message_shows_token() {
        let err = classify("scene.txt").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Expected -[option] or --[option], got scene.txt"
        );
    }
}
