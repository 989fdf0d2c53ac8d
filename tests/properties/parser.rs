//! Property tests for registry output parsing.

use proptest::prelude::*;

use ecr_deploy::parse_candidates;

fn tag() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._\\-]{1,24}").unwrap()
}

/// Mix of well-formed ISO-8601 timestamps and junk that fails normalization.
fn timestamp() -> impl Strategy<Value = String> {
    prop_oneof![
        (2000u32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(
            |(y, mo, d, h, mi)| format!("{:04}-{:02}-{:02}T{:02}:{:02}:00", y, mo, d, h, mi)
        ),
        proptest::string::string_regex("[a-z ]{0,12}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: valid `[tag, timestamp]` arrays parse with the same count and
    /// order, and entries are never dropped even when normalization fails.
    #[test]
    fn property_parse_preserves_count_and_order(
        entries in proptest::collection::vec((tag(), timestamp()), 0..20)
    ) {
        let json = serde_json::to_string(&entries).unwrap();
        let parsed = parse_candidates(&json)
            .expect("expected valid pair arrays to decode");

        prop_assert_eq!(parsed.candidates.len(), entries.len());
        for (candidate, (tag, _)) in parsed.candidates.iter().zip(&entries) {
            prop_assert_eq!(&candidate.tag, tag);
        }
        // One warning per unnormalizable timestamp, never more than entries.
        prop_assert!(parsed.warnings.len() <= entries.len());
    }

    /// PROPERTY: a failed normalization keeps the raw timestamp verbatim.
    #[test]
    fn property_unnormalized_timestamps_are_kept_raw(
        raw in proptest::string::string_regex("[a-z ]{1,12}").unwrap()
    ) {
        let json = format!(r#"[["v1",{}]]"#, serde_json::to_string(&raw).unwrap());
        let parsed = parse_candidates(&json).unwrap();
        prop_assert_eq!(parsed.candidates.len(), 1);
        prop_assert_eq!(&parsed.candidates[0].pushed_at, &raw);
        prop_assert_eq!(parsed.warnings.len(), 1);
    }

    /// PROPERTY: the parser never panics on arbitrary input; it either
    /// decodes or returns an error.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,256}") {
        let _ = parse_candidates(&raw);
    }
}
