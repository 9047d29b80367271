//! Integration tests for descendant queries.

mod helpers;

use folder_forest::{DescendantLookup, Folder, FolderRegistry, FolderService, OrganizationId};

use helpers::{name_paths, names};

fn two_orgs() -> (OrganizationId, OrganizationId, FolderRegistry) {
    let org1 = OrganizationId::new();
    let org2 = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("alpha", org1, "alpha"),
        Folder::new("bravo", org1, "alpha.bravo"),
        Folder::new("charlie", org1, "alpha.bravo.charlie"),
        Folder::new("delta", org1, "alpha.delta"),
        Folder::new("echo", org1, "echo"),
        Folder::new("foxtrot", org2, "foxtrot"),
    ]);
    (org1, org2, registry)
}

#[test]
fn test_descendant_cases() {
    let (org1, org2, registry) = two_orgs();

    struct Case {
        label: &'static str,
        org: OrganizationId,
        base: &'static str,
        want: Vec<&'static str>,
    }

    let cases = [
        Case {
            label: "multiple child folders",
            org: org1,
            base: "alpha",
            want: vec!["bravo", "charlie", "delta"],
        },
        Case {
            label: "single child folder",
            org: org1,
            base: "bravo",
            want: vec!["charlie"],
        },
        Case {
            label: "leaf folder",
            org: org1,
            base: "charlie",
            want: vec![],
        },
        Case {
            label: "non-existent folder",
            org: org1,
            base: "nonexistent",
            want: vec![],
        },
        Case {
            label: "folder from another org",
            org: org2,
            base: "alpha",
            want: vec![],
        },
        Case {
            label: "name only exists in a different org",
            org: org1,
            base: "foxtrot",
            want: vec![],
        },
        Case {
            label: "root without children",
            org: org2,
            base: "foxtrot",
            want: vec![],
        },
        Case {
            label: "empty base name",
            org: org1,
            base: "",
            want: vec![],
        },
        Case {
            label: "nil organization",
            org: OrganizationId::nil(),
            base: "alpha",
            want: vec![],
        },
    ];

    for case in cases {
        let got = registry.descendants_of(case.org, case.base).into_folders();
        assert_eq!(names(&got), case.want, "case: {}", case.label);
    }
}

#[test]
fn test_scenario_alpha_bravo_charlie() {
    let org = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("alpha", org, "alpha"),
        Folder::new("bravo", org, "alpha.bravo"),
        Folder::new("charlie", org, "alpha.bravo.charlie"),
    ]);

    let got = registry.descendants_of(org, "alpha").into_folders();
    assert_eq!(names(&got), vec!["bravo", "charlie"]);
}

#[test]
fn test_base_folder_is_root() {
    let org = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("root", org, "root"),
        Folder::new("child1", org, "root.child1"),
        Folder::new("child2", org, "root.child2"),
    ]);

    let got = registry.descendants_of(org, "root").into_folders();
    assert_eq!(
        name_paths(&got),
        vec![("child1", "root.child1"), ("child2", "root.child2")]
    );
}

#[test]
fn test_prefix_match_is_case_sensitive() {
    let org = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("Alpha", org, "Alpha"),
        Folder::new("Bravo", org, "Alpha.Bravo"),
        Folder::new("charlie", org, "alpha.bravo.charlie"),
    ]);

    let got = registry.descendants_of(org, "Alpha").into_folders();
    assert_eq!(name_paths(&got), vec![("Bravo", "Alpha.Bravo")]);
}

#[test]
fn test_special_characters_in_names() {
    let org = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("alpha@", org, "alpha@"),
        Folder::new("bravo#", org, "alpha@.bravo#"),
        Folder::new("charlie$", org, "alpha@.bravo#.charlie$"),
    ]);

    let got = registry.descendants_of(org, "alpha@").into_folders();
    assert_eq!(names(&got), vec!["bravo#", "charlie$"]);
}

#[test]
fn test_self_referencing_paths_terminate() {
    let org = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("alpha", org, "alpha"),
        Folder::new("bravo", org, "alpha.bravo"),
        Folder::new("alpha", org, "alpha.bravo.alpha"),
    ]);

    let got = registry.descendants_of(org, "alpha").into_folders();
    assert_eq!(
        name_paths(&got),
        vec![("bravo", "alpha.bravo"), ("alpha", "alpha.bravo.alpha")]
    );
}

#[test]
fn test_sibling_with_shared_name_prefix_is_not_a_descendant() {
    let org = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("alpha", org, "alpha"),
        Folder::new("alphabet", org, "alphabet"),
        Folder::new("letters", org, "alphabet.letters"),
        Folder::new("bravo", org, "alpha.bravo"),
    ]);

    let got = registry.descendants_of(org, "alpha").into_folders();
    assert_eq!(names(&got), vec!["bravo"]);
}

#[test]
fn test_results_partition_the_organization() {
    let (org1, _, registry) = two_orgs();

    for base in ["alpha", "bravo", "charlie", "delta", "echo"] {
        let base_ref = registry
            .folders_by_organization(org1)
            .into_iter()
            .find(|f| f.name() == base)
            .unwrap();
        let prefix = format!("{}.", base_ref.path());
        let got = registry.descendants_of(org1, base).into_folders();

        for folder in registry.folders_by_organization(org1) {
            let returned = got.contains(&folder);
            let expected = folder != base_ref && folder.path().starts_with(&prefix);
            assert_eq!(returned, expected, "base {base}, folder {}", folder.name());
        }
    }
}

#[test]
fn test_outcome_tags() {
    let (org1, org2, registry) = two_orgs();

    assert_eq!(
        registry.descendants_of(OrganizationId::new(), "alpha"),
        DescendantLookup::NoFoldersForOrganization
    );
    assert_eq!(
        registry.descendants_of(org2, "alpha"),
        DescendantLookup::FolderNotFound
    );
    assert_eq!(
        registry.descendants_of(org1, "echo"),
        DescendantLookup::NoDescendants
    );
    match registry.descendants_of(org1, "bravo") {
        DescendantLookup::Found(folders) => assert_eq!(names(&folders), vec!["charlie"]),
        other => panic!("expected descendants, got {other:?}"),
    }
}

#[test]
fn test_service_returns_plain_lists() {
    let (org1, org2, registry) = two_orgs();
    let service = FolderService::new(registry);

    assert_eq!(names(&service.descendants_of(org1, "alpha")).len(), 3);
    assert!(service.descendants_of(org2, "missing").is_empty());
    assert!(service.descendants_of(OrganizationId::new(), "alpha").is_empty());
}
