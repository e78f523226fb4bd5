//! Property tests for filter rule lists.

use proptest::prelude::*;

use hgsync::{build_filters, FilterRule, SyncDirection};

fn direction() -> impl Strategy<Value = SyncDirection> {
    prop_oneof![Just(SyncDirection::Pull), Just(SyncDirection::Push)]
}

fn file_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_]{1,8}(\\.[A-Za-z0-9_]{1,6}){0,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: include_all yields no rules, whatever else is set.
    #[test]
    fn property_include_all_is_unfiltered(direction in direction(), yaml in any::<bool>()) {
        let set = build_filters(direction, true, yaml);
        prop_assert!(set.rules().is_empty());
    }

    /// PROPERTY: the list ends with the catch-all exclude and the descend
    /// include precedes every file include.
    #[test]
    fn property_descend_before_file_includes(direction in direction(), yaml in any::<bool>()) {
        let set = build_filters(direction, false, yaml);
        let rules = set.rules();

        prop_assert!(rules.last().is_some_and(FilterRule::is_catch_all_exclude));

        let descend = rules.iter().position(FilterRule::is_directory_descend);
        prop_assert!(descend.is_some());
        let descend = descend.unwrap_or_default();

        for (i, rule) in rules.iter().enumerate() {
            if rule.is_include() && !rule.is_directory_descend() && rule.pattern != "*.yaml" {
                prop_assert!(i > descend, "{} before descend rule", rule);
            }
        }
    }

    /// PROPERTY: first match wins, so a file is admitted iff its first
    /// matching rule is an include.
    #[test]
    fn property_first_match_wins(direction in direction(), yaml in any::<bool>(), name in file_name()) {
        let set = build_filters(direction, false, yaml);
        let first = set.rules().iter().find(|r| r.matches(&name, false));
        prop_assert_eq!(set.admits(&name, false), first.is_some_and(FilterRule::is_include));
    }

    /// PROPERTY: bulky grid and soil folders are never pulled.
    #[test]
    fn property_pull_skips_gb_and_soil(
        yaml in any::<bool>(),
        parent in "[A-Za-z0-9]{1,8}",
        folder in prop_oneof![Just("gb"), Just("soil")],
        name in file_name(),
    ) {
        let set = build_filters(SyncDirection::Pull, false, yaml);
        let path = format!("{}/{}/{}", parent, folder, name);
        prop_assert!(!set.transfers(&path));
    }
}
