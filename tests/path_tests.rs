// tests/path_tests.rs
use markring::history::ring::{HistoryRing, JumpOutcome};
use markring::path::{ExactPaths, KeyNormalizer, NormalizedPaths, PathEquivalence};

fn paths() -> NormalizedPaths {
    NormalizedPaths::new()
        .with_home("/home/alice")
        .with_cwd("/home/alice/projects")
        .resolve_symlinks(false)
}

#[test]
fn test_equivalent_spellings_of_home_paths() {
    let paths = paths();

    assert!(paths.equivalent("~/a/../b", "/home/alice/b"));
    assert!(paths.equivalent("/home/alice/./b/", "~/b"));
    assert!(paths.equivalent("../b", "~/b"));
    assert!(!paths.equivalent("~/b", "~/c"));
}

#[test]
fn test_case_folding_is_opt_in() {
    assert!(!paths().equivalent("~/Notes", "~/notes"));
    assert!(paths().case_insensitive(true).equivalent("~/Notes", "~/notes"));
}

#[test]
fn test_exact_paths_compare_strings() {
    assert!(ExactPaths.equivalent("~/b", "~/b"));
    assert!(!ExactPaths.equivalent("~/b", "/home/alice/b"));
    assert_eq!(ExactPaths.normalize("./x"), "./x");
}

#[test]
fn test_normalized_keys() {
    let paths = paths();

    assert_eq!(paths.normalize("notes/bm"), "~/projects/notes/bm");
    assert_eq!(paths.normalize("/etc/../srv/bm"), "/srv/bm");
}

#[test]
fn test_symlinks_resolved_when_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let real = dir.path().join("real");
    std::fs::write(&real, "bookmark\n").unwrap();

    #[cfg(unix)]
    {
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let resolving = NormalizedPaths::new();
        let literal = NormalizedPaths::new().resolve_symlinks(false);
        let (real, link) = (real.to_string_lossy(), link.to_string_lossy());

        assert!(resolving.equivalent(&real, &link));
        assert!(!literal.equivalent(&real, &link));
    }
}

#[test]
fn test_ring_with_normalized_paths() {
    let mut ring = HistoryRing::with_equivalence(5, paths());

    assert_eq!(ring.insert("~/bm"), JumpOutcome::FirstInsert);
    assert_eq!(ring.insert("/home/alice/./bm"), JumpOutcome::NoOp);
    assert_eq!(ring.insert("~/other"), JumpOutcome::Inserted);
    assert_eq!(ring.insert("../bm"), JumpOutcome::Promoted);
    assert_eq!(ring.to_vec(), vec!["~/bm", "~/other"]);
}
