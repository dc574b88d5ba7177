use beamstat::api::{analyze, content_digest, MemoizedAnalyzer};
use beamstat::config::SeverityThresholds;
use beamstat::{BeamStatError, Severity};

const MACRO: &str = "/run/initialize\n/gun/particle gamma\n/run/beamOn 1000\n";
const OUTPUT: &str = "# mesh\n0,0,0,1000.0,1100.0,1000\n0,0,1,0,0,0\n";

#[test]
fn test_analyze_end_to_end() {
    let analysis = analyze(MACRO, OUTPUT, &SeverityThresholds::default()).unwrap();
    assert_eq!(analysis.run_count.get(), 1000);
    assert_eq!(analysis.directive_line, 3);
    assert_eq!(analysis.rows.len(), 2);
    assert!((analysis.rows[0].relative_error_pct - 1.0).abs() < 1e-6);
    assert_eq!(analysis.rows[0].severity, Severity::Good);
    assert_eq!(analysis.summary().total, 2);
}

#[test]
fn test_missing_directive_halts_before_parsing() {
    // The output is broken too, but the macro error comes first.
    let err = analyze("/run/initialize", "garbage", &SeverityThresholds::default()).unwrap_err();
    assert!(matches!(err, BeamStatError::MissingRunDirective));
}

#[test]
fn test_empty_output_is_an_error() {
    let err = analyze(MACRO, "# no data\n", &SeverityThresholds::default()).unwrap_err();
    assert!(matches!(err, BeamStatError::EmptyScoreTable));
}

#[test]
fn test_malformed_output_yields_no_partial_rows() {
    let text = "0,0,0,1,1,1\n0,0,1,1,1\n";
    let err = analyze(MACRO, text, &SeverityThresholds::default()).unwrap_err();
    assert!(matches!(err, BeamStatError::MalformedScoreLine { line: 2, .. }));
}

#[test]
fn test_digest_is_byte_exact() {
    assert_eq!(content_digest("abc"), content_digest("abc"));
    assert_ne!(content_digest("abc"), content_digest("abc\n"));
    assert_eq!(content_digest("").len(), 64);
}

#[test]
fn test_memoized_matches_direct() {
    let t = SeverityThresholds::default();
    let mut memo = MemoizedAnalyzer::new();

    let first = memo.analyze(MACRO, OUTPUT, &t).unwrap();
    assert_eq!(memo.misses(), 2);
    assert_eq!(memo.hits(), 0);

    let second = memo.analyze(MACRO, OUTPUT, &t).unwrap();
    assert_eq!(memo.hits(), 2);
    assert_eq!(first, second);
    assert_eq!(first, analyze(MACRO, OUTPUT, &t).unwrap());
}

#[test]
fn test_memoized_thresholds_not_cached() {
    let mut memo = MemoizedAnalyzer::new();
    let strict = SeverityThresholds {
        warning_at: 0.5,
        bad_at: 0.9,
    };

    let relaxed = memo.analyze(MACRO, OUTPUT, &SeverityThresholds::default()).unwrap();
    let tight = memo.analyze(MACRO, OUTPUT, &strict).unwrap();

    assert_eq!(relaxed.rows[0].severity, Severity::Good);
    assert_eq!(tight.rows[0].severity, Severity::Bad);
}

#[test]
fn test_memoized_errors_are_repeatable() {
    let t = SeverityThresholds::default();
    let mut memo = MemoizedAnalyzer::new();

    for _ in 0..2 {
        let err = memo.analyze(MACRO, "0,0,0,1", &t).unwrap_err();
        assert!(matches!(err, BeamStatError::MalformedScoreLine { .. }));
    }

    memo.clear();
    assert!(memo.analyze(MACRO, OUTPUT, &t).is_ok());
}

#[test]
fn test_memoized_clear_resets_counters() {
    let t = SeverityThresholds::default();
    let mut memo = MemoizedAnalyzer::new();
    memo.analyze(MACRO, OUTPUT, &t).unwrap();
    memo.analyze(MACRO, OUTPUT, &t).unwrap();
    assert_eq!((memo.hits(), memo.misses()), (2, 2));

    memo.clear();
    assert_eq!((memo.hits(), memo.misses()), (0, 0));

    memo.analyze(MACRO, OUTPUT, &t).unwrap();
    assert_eq!((memo.hits(), memo.misses()), (0, 2));
}
