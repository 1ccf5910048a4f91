use asset_map::{HeaderResolver, SynonymTable, slugify};
use proptest::prelude::{ProptestConfig, proptest};

#[test]
fn synonym_closure_per_field() {
    // Every listed synonym of a canonical field resolves to that field.
    let resolver = HeaderResolver::default();
    for entry in SynonymTable::builtin().entries() {
        for synonym in entry.synonyms {
            assert_eq!(
                resolver.resolve(synonym),
                entry.field,
                "synonym {synonym:?} did not resolve to {}",
                entry.field
            );
        }
    }
}

#[test]
fn mfg_synonym_variants() {
    let resolver = HeaderResolver::default();
    for header in ["Vendor", "Supplier", "Make", "MANUFACTURER", " brand "] {
        assert_eq!(resolver.resolve(header), "mfg");
    }
}

#[test]
fn unmapped_header_slugged_not_dropped() {
    let resolver = HeaderResolver::default();
    assert_eq!(resolver.resolve("Serial#"), "serial");
    assert_eq!(resolver.resolve("Rack Position"), "rack_position");
    // Whitespace runs become `_` before punctuation is stripped, so spaced-out
    // punctuation leaves its separators behind.
    assert_eq!(resolver.resolve("Site / Location"), "site__location");
    assert_eq!(resolver.resolve("Price ($)"), "price_");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resolve_is_total(header in ".*") {
        let resolver = HeaderResolver::default();
        let resolved = resolver.resolve(&header);
        // Always a string, and any non-synonym result obeys slug rules.
        assert!(
            resolved
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
        );
    }

    #[test]
    fn resolve_is_idempotent_on_slugs(header in ".*") {
        let resolver = HeaderResolver::default();
        let once = resolver.resolve(&header);
        // A canonical name or slug resolves to itself on a second pass,
        // unless it happens to be a synonym of a canonical field.
        let twice = resolver.resolve(&once);
        if SynonymTable::builtin().lookup(&once).is_none() {
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn slugify_output_alphabet(raw in ".*") {
        let slug = slugify(&raw);
        assert!(
            slug.chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
        );
    }
}
