//! Property tests for the directional path resolver.

use proptest::prelude::*;

use hgsync::domain::services::{PathRequest, SyncRoots};
use hgsync::domain::value_objects::ProjectPath;
use hgsync::{resolve_paths, SyncDirection};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_.-]{0,10}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn root() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=4).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: derived endpoints differ and both end with `{project}/`.
    #[test]
    fn property_endpoints_differ_and_end_with_project(
        project in segment(),
        host_root in root(),
        data_root in root(),
        pull in any::<bool>(),
        local_host in any::<bool>(),
    ) {
        prop_assume!(!local_host || host_root != data_root);

        let direction = if pull { SyncDirection::Pull } else { SyncDirection::Push };
        let roots = SyncRoots {
            host: Some("cluster".to_string()),
            host_root: Some(host_root),
            data_root: Some(data_root),
            local_host,
        };
        let request = PathRequest {
            project: Some(project.as_str()),
            direction,
            explicit_source: None,
            explicit_destination: None,
        };

        let (source, destination) = resolve_paths(&request, &roots, &ProjectPath::default()).unwrap();

        prop_assert_ne!(&source, &destination);
        let suffix = format!("/{}/", project);
        prop_assert!(source.path.ends_with(&suffix), "{}", source);
        prop_assert!(destination.path.ends_with(&suffix), "{}", destination);

        let host_side = if pull { &source } else { &destination };
        prop_assert_eq!(host_side.is_remote(), !local_host);
    }

    /// PROPERTY: explicit endpoints come back exactly as given.
    #[test]
    fn property_explicit_endpoints_verbatim(
        src in root(),
        dst in root(),
        pull in any::<bool>(),
    ) {
        prop_assume!(src.trim_end_matches('/') != dst.trim_end_matches('/'));

        let request = PathRequest {
            project: None,
            direction: if pull { SyncDirection::Pull } else { SyncDirection::Push },
            explicit_source: Some(src.as_str()),
            explicit_destination: Some(dst.as_str()),
        };

        let (source, destination) =
            resolve_paths(&request, &SyncRoots::default(), &ProjectPath::default()).unwrap();

        prop_assert_eq!(source.to_string(), src);
        prop_assert_eq!(destination.to_string(), dst);
    }
}
