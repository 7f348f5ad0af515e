use wick::{Ignore, Mode, Options, WickError};

#[test]
fn test_defaults() {
    let opts = Options::default();
    assert_eq!(opts.mode, Mode::Console);
    assert_eq!(opts.ignore, Ignore::None);
    assert!(!opts.parallel);
}

#[test]
fn test_display_uses_accepted_spellings() {
    assert_eq!(Mode::Console.to_string(), "console");
    assert_eq!(Ignore::None.to_string(), "none");
    assert_eq!(Ignore::Vacuum.to_string(), "vac");

    for ignore in [Ignore::None, Ignore::Vacuum] {
        let opts = Options::parse(&Mode::Console.to_string(), Some(&ignore.to_string())).unwrap();
        assert_eq!(opts.ignore, ignore);
    }
}

#[test]
fn test_parse_rejects_unknown_ignore() {
    let err = Options::parse("console", Some("bogus")).unwrap_err();
    assert!(matches!(err, WickError::UnsupportedIgnore(ref v) if v == "bogus"), "got {err:?}");
}
