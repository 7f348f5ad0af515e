use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use wick::connectivity::is_connected;
use wick::{evaluate, evaluate_str, Ignore, Mode, Options, WickError};

#[test]
fn test_single_pair_report() {
    let report = evaluate_str(&["phi1", "phi1"], "console", None).unwrap();
    assert_eq!(report.labels.labels(), &[1, 1]);
    assert_eq!(report.n_matchings, 1);
    assert_eq!(report.render(Mode::Console), "<0|T[1, 1]|0> = \n\n1 x [[1, 1]]");
}

#[test]
fn test_four_field_report() {
    let report = evaluate_str(&["phi", "phi", "psi", "psi"], "console", None).unwrap();
    assert_eq!(
        report.to_string(),
        "<0|T[1, 1, 2, 2]|0> = \n\n2 x [[1, 2], [1, 2]] + 1 x [[1, 1], [2, 2]]"
    );
}

#[test]
fn test_vacuum_filter_report() {
    let report = evaluate_str(&["phi", "phi", "psi", "psi"], "console", Some("vac")).unwrap();
    assert_eq!(report.ignore, Ignore::Vacuum);
    assert_eq!(report.to_string(), "<0|T[1, 1, 2, 2]|0> = \n\n2 x [[1, 2], [1, 2]]");
}

#[test]
fn test_vacuum_filter_can_remove_everything() {
    let report = evaluate_str(&["a", "b", "c", "d"], "console", Some("vac")).unwrap();
    assert!(report.terms.is_empty());
    assert_eq!(report.to_string(), "<0|T[1, 2, 3, 4]|0> = \n\n0");
}

#[test]
fn test_empty_input_is_one_empty_term() {
    let none: [&str; 0] = [];
    let report = evaluate(&none, &Options::default()).unwrap();
    assert_eq!(report.n_matchings, 1);
    assert_eq!(report.to_string(), "<0|T[]|0> = \n\n1 x []");
}

#[test]
fn test_odd_input_fails_before_options() {
    let err = evaluate_str(&["a", "b", "c"], "console", Some("bogus")).unwrap_err();
    assert!(matches!(err, WickError::OddFieldCount { count: 3 }), "got {err:?}");
}

#[test]
fn test_unknown_ignore_value() {
    let err = evaluate_str(&["a", "a"], "console", Some("bogus")).unwrap_err();
    assert!(matches!(err, WickError::UnsupportedIgnore(ref v) if v == "bogus"));
    assert_eq!(err.to_string(), "ignore does not support the value: bogus");
}

#[test]
fn test_unknown_mode_value() {
    let err = evaluate_str(&["a", "a"], "latex", None).unwrap_err();
    assert!(matches!(err, WickError::UnsupportedMode(ref v) if v == "latex"), "got {err:?}");
    assert_eq!(err.to_string(), "ignore does not support the value: latex");

    // the vacuum filter bypasses the formatter
    assert!(evaluate_str(&["a", "a"], "latex", Some("vac")).is_ok());
}

#[test]
fn test_parallel_matches_serial() {
    let names = ["a", "b", "a", "c", "b", "c", "a", "a"];
    let serial = evaluate(&names, &Options::default()).unwrap();
    let parallel = evaluate(&names, &Options { parallel: true, ..Options::default() }).unwrap();
    assert_eq!(serial.terms, parallel.terms);
    assert_eq!(serial.to_string(), parallel.to_string());
}

#[test]
fn test_branch_hook_runs_once_per_branch() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = AtomicUsize::new(0);
    let names = ["a"; 6];
    let opts = Options { parallel: true, ..Options::default() };
    wick::evaluate_with(&names, &opts, || {
        calls.fetch_add(1, Ordering::Relaxed);
    })
    .unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 5);
}

#[test]
fn test_term_structure_invariant_under_field_order() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let base = ["phi", "phi", "psi", "psi", "chi", "chi", "phi", "psi"];

    let summary = |names: &[&str], ignore: Ignore| {
        let opts = Options { ignore, ..Options::default() };
        let report = evaluate(names, &opts).unwrap();
        let mut mult: Vec<u64> = report.terms.iter().map(|t| t.multiplicity).collect();
        mult.sort_unstable();
        (report.total_multiplicity(), mult)
    };
    let expected_all = summary(&base, Ignore::None);
    let expected_vac = summary(&base, Ignore::Vacuum);
    assert_eq!(expected_all.0, 105);

    for _ in 0..10 {
        let mut names = base;
        names.shuffle(&mut rng);
        assert_eq!(summary(&names, Ignore::None), expected_all, "order {names:?}");
        assert_eq!(summary(&names, Ignore::Vacuum), expected_vac, "order {names:?}");
    }
}

#[test]
fn test_filtered_terms_are_all_connected() {
    let vac = Options { ignore: Ignore::Vacuum, ..Options::default() };
    let report = evaluate(&["a", "a", "b", "b", "c", "c"], &vac).unwrap();
    assert!(!report.terms.is_empty());
    assert!(report.terms.iter().all(|t| is_connected(&t.pattern)));
}
