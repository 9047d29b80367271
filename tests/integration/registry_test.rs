//! Integration tests for organization-scoped folder listing.

mod helpers;

use folder_forest::{Folder, FolderRegistry, OrganizationId};

use helpers::name_paths;

struct Orgs {
    org1: OrganizationId,
    org2: OrganizationId,
    mixed_case: OrganizationId,
}

fn sample() -> (Orgs, Vec<Folder>) {
    let orgs = Orgs {
        org1: OrganizationId::new(),
        org2: OrganizationId::new(),
        mixed_case: OrganizationId::new(),
    };
    let folders = vec![
        Folder::new("alpha", orgs.org1, "alpha"),
        Folder::new("bravo", orgs.org1, "alpha.bravo"),
        Folder::new("charlie", orgs.org1, "alpha.bravo.charlie"),
        Folder::new("delta", orgs.org2, "delta"),
        Folder::new("echo", orgs.org2, "delta.echo"),
        Folder::new("Alpha", orgs.mixed_case, "Alpha"),
        Folder::new("beta", orgs.mixed_case, "Alpha.beta"),
        Folder::new("Gamma", orgs.mixed_case, "Alpha.Gamma"),
    ];
    (orgs, folders)
}

#[test]
fn test_org_with_multiple_folders() {
    let (orgs, folders) = sample();
    let registry = FolderRegistry::new(folders);

    let got = registry.folders_by_organization(orgs.org1);
    assert_eq!(
        name_paths(&got),
        vec![
            ("alpha", "alpha"),
            ("bravo", "alpha.bravo"),
            ("charlie", "alpha.bravo.charlie"),
        ]
    );
}

#[test]
fn test_org_with_two_folders() {
    let (orgs, folders) = sample();
    let registry = FolderRegistry::new(folders);

    let got = registry.folders_by_organization(orgs.org2);
    assert_eq!(
        name_paths(&got),
        vec![("delta", "delta"), ("echo", "delta.echo")]
    );
}

#[test]
fn test_unknown_org_is_empty() {
    let (_, folders) = sample();
    let registry = FolderRegistry::new(folders);
    assert!(registry.folders_by_organization(OrganizationId::new()).is_empty());
}

#[test]
fn test_empty_registry_is_empty() {
    let registry = FolderRegistry::new(Vec::new());
    assert!(registry.is_empty());
    assert!(registry.folders_by_organization(OrganizationId::new()).is_empty());
}

#[test]
fn test_names_keep_their_case() {
    let (orgs, folders) = sample();
    let registry = FolderRegistry::new(folders);

    let got = registry.folders_by_organization(orgs.mixed_case);
    assert_eq!(
        name_paths(&got),
        vec![
            ("Alpha", "Alpha"),
            ("beta", "Alpha.beta"),
            ("Gamma", "Alpha.Gamma"),
        ]
    );
}

#[test]
fn test_same_names_across_orgs() {
    let org1 = OrganizationId::new();
    let org2 = OrganizationId::new();
    let registry = FolderRegistry::new(vec![
        Folder::new("alpha", org1, "alpha"),
        Folder::new("alpha", org2, "alpha"),
        Folder::new("bravo", org1, "alpha.bravo"),
    ]);

    let got = registry.folders_by_organization(org1);
    assert_eq!(
        name_paths(&got),
        vec![("alpha", "alpha"), ("bravo", "alpha.bravo")]
    );
    assert!(got.iter().all(|f| f.org_id() == org1));
}

#[test]
fn test_nil_org_matches_only_explicit_registrations() {
    let (_, folders) = sample();
    let registry = FolderRegistry::new(folders.clone());
    assert!(registry.folders_by_organization(OrganizationId::nil()).is_empty());

    let mut with_nil = folders;
    with_nil.push(Folder::new("orphan", OrganizationId::nil(), "orphan"));
    let registry = FolderRegistry::new(with_nil);
    let got = registry.folders_by_organization(OrganizationId::nil());
    assert_eq!(name_paths(&got), vec![("orphan", "orphan")]);
}

#[test]
fn test_listing_never_crosses_organizations() {
    let (orgs, folders) = sample();
    let registry = FolderRegistry::new(folders);

    for org in [orgs.org1, orgs.org2, orgs.mixed_case] {
        let got = registry.folders_by_organization(org);
        assert!(!got.is_empty());
        assert!(got.iter().all(|f| f.org_id() == org));
    }
    let total: usize = [orgs.org1, orgs.org2, orgs.mixed_case]
        .iter()
        .map(|&org| registry.folders_by_organization(org).len())
        .sum();
    assert_eq!(total, registry.len());
}

#[test]
fn test_path_links_are_consistent_on_load() {
    let (_, folders) = sample();
    let registry = FolderRegistry::new(folders);
    helpers::assert_paths_follow_links(&registry);
    assert_eq!(registry.roots().count(), 3);
}
