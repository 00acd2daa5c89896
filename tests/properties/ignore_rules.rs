//! Property tests for ignore rules.

use proptest::prelude::*;

use hashdeploy::domain::value_objects::{matches, IgnorePatterns};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap()
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a literal name ignores that entry at any depth.
    #[test]
    fn property_literal_name_matches_any_depth(segs in segments()) {
        let path = segs.join("/");
        let name = segs.last().unwrap().clone();
        let ignore = IgnorePatterns::new([name.as_str()]).unwrap();
        prop_assert!(ignore.is_ignored(&path));
    }

    /// PROPERTY: an extension glob ignores every file with that extension.
    #[test]
    fn property_extension_glob(segs in segments()) {
        let stem = segs.join("/");
        let log = format!("{stem}.log");
        let txt = format!("{stem}.txt");
        let ignore = IgnorePatterns::new(["*.log"]).unwrap();
        prop_assert!(ignore.is_ignored(&log));
        prop_assert!(!ignore.is_ignored(&txt));
    }

    /// PROPERTY: a literal name never ignores a path whose segments all differ from it.
    #[test]
    fn property_literal_name_needs_a_whole_segment(segs in segments()) {
        let path = segs.join("/");
        let ignore = IgnorePatterns::new(["node_modules"]).unwrap();
        prop_assert!(!ignore.is_ignored(&path));
    }

    /// PROPERTY: matching never panics on arbitrary input.
    #[test]
    fn property_matches_never_panics(
        pattern in "(?s).{0,32}",
        path in "(?s).{0,64}"
    ) {
        let _ = matches(&pattern, &path);
    }
}
