//! Property tests for remote path resolution.

use proptest::prelude::*;

use hashdeploy::domain::services::PathMapper;
use hashdeploy::domain::value_objects::PathMappings;

fn rel_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9._-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: unmapped paths land directly below the base.
    #[test]
    fn property_fallback_joins_base(rel in rel_path(), slashes in 0usize..3) {
        let base = format!("/public_html{}", "/".repeat(slashes));
        let mapper = PathMapper::new(PathMappings::empty(), base);
        prop_assert_eq!(mapper.resolve(&rel), format!("/public_html/{}", rel));
    }

    /// PROPERTY: `dir/*` keeps everything below `dir` under the remote.
    #[test]
    fn property_directory_rule_strips_its_prefix(rel in rel_path()) {
        let mappings = PathMappings::new([("src/*", "/private_html/src/")]).unwrap();
        let mapper = PathMapper::new(mappings, "/");
        prop_assert_eq!(
            mapper.resolve(&format!("src/{}", rel)),
            format!("/private_html/src/{}", rel)
        );
    }

    /// PROPERTY: an exact rule beats a catch-all pattern declared before it.
    #[test]
    fn property_exact_rule_wins(rel in rel_path()) {
        let mappings = PathMappings::new([
            ("*".to_string(), "/all".to_string()),
            (rel.clone(), "/exact/file".to_string()),
        ])
        .unwrap();
        let mapper = PathMapper::new(mappings, "/");
        prop_assert_eq!(mapper.resolve(&rel), "/exact/file");
    }

    /// PROPERTY: resolution never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(
        pattern in "[a-z*?/]{0,12}",
        rel in "(?s).{0,64}"
    ) {
        if let Ok(mappings) = PathMappings::new([(pattern.as_str(), "/remote")]) {
            let _ = PathMapper::new(mappings, "/").resolve(&rel);
        }
    }
}
