//! Property-based tests for coordinate parsing and document comparison.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::document::contents_equal_ignore_eol;
    use crate::registry::CoordinateRegistry;
    use proptest::prelude::*;

    // ============================================================================
    // CoordinateRegistry::put property tests
    // ============================================================================

    proptest! {
        /// Property: a well-formed triple is returned unchanged by get
        #[test]
        fn put_then_get_returns_triple(
            id in "[a-z][a-z0-9-]{0,12}",
            group in "[a-z][a-z.]{0,16}",
            artifact in "[a-z][a-z0-9-]{0,16}",
            version in "[0-9]{1,3}(\\.[0-9]{1,3}){0,2}",
        ) {
            let mut registry = CoordinateRegistry::new();
            registry.put(&id, &format!("{} {} {}", group, artifact, version)).unwrap();
            let entry = registry.get(&id).unwrap();
            prop_assert_eq!(entry.group(), group.as_str());
            prop_assert_eq!(entry.artifact(), artifact.as_str());
            prop_assert_eq!(entry.version(), version.as_str());
        }

        /// Property: anything other than three tokens fails and leaves the registry empty
        #[test]
        fn wrong_token_count_never_mutates(
            tokens in prop::collection::vec("[a-z0-9.]{1,8}", 0..8),
        ) {
            prop_assume!(tokens.len() != 3);
            let mut registry = CoordinateRegistry::new();
            let raw = tokens.join(" ");
            prop_assert!(registry.put("x", &raw).is_err());
            prop_assert!(registry.is_empty());
        }
    }

    // ============================================================================
    // contents_equal_ignore_eol property tests
    // ============================================================================

    proptest! {
        /// Property: swapping LF for CRLF never makes documents differ
        #[test]
        fn crlf_and_lf_compare_equal(lines in prop::collection::vec("[^\r\n]{0,20}", 0..10)) {
            let lf = lines.join("\n");
            let crlf = lines.join("\r\n");
            prop_assert!(contents_equal_ignore_eol(&lf, &crlf));
        }

        /// Property: comparison is symmetric
        #[test]
        fn comparison_is_symmetric(a in "[a-c\r\n]{0,20}", b in "[a-c\r\n]{0,20}") {
            prop_assert_eq!(
                contents_equal_ignore_eol(&a, &b),
                contents_equal_ignore_eol(&b, &a)
            );
        }
    }
}
