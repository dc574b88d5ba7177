use beamstat::macro_file::{extract_run_count, RunConfig};
use beamstat::BeamStatError;
use rstest::rstest;

#[rstest]
#[case("/run/beamOn 1000", 1000)]
#[case("/run/beamOn 100\n/run/beamOn 500", 500)]
#[case("/control/verbose 2\n/run/initialize\n/run/beamOn   42  \n", 42)]
#[case("/run/beamOn 7\r\n/gun/energy 6 MeV\r\n", 7)]
#[case("   /run/beamOn\t250", 250)]
fn test_extracts_last_directive(#[case] text: &str, #[case] expected: u64) {
    let n = extract_run_count(text).unwrap().unwrap();
    assert_eq!(n.get(), expected);
}

#[test]
fn test_later_directive_overrides_earlier() {
    let text = ["/run/beamOn 100", "/run/beamOn 500"].join("\n");
    assert_eq!(extract_run_count(&text).unwrap().unwrap().get(), 500);
}

#[rstest]
#[case("")]
#[case("/run/initialize\n/gun/particle proton\n")]
#[case("/run/beamon 10")]
fn test_missing_directive_is_none(#[case] text: &str) {
    assert!(extract_run_count(text).unwrap().is_none());
}

#[test]
fn test_require_directive_reports_missing() {
    let config = RunConfig::parse("/run/initialize").unwrap();
    assert!(matches!(
        config.require_directive(),
        Err(BeamStatError::MissingRunDirective)
    ));
}

#[rstest]
#[case("/run/beamOn ten")]
#[case("/run/beamOn 1e3")]
#[case("/run/beamOn 0")]
#[case("/run/beamOn -5")]
#[case("/run/beamOn")]
fn test_malformed_run_count(#[case] text: &str) {
    let err = extract_run_count(text).unwrap_err();
    assert!(
        matches!(err, BeamStatError::MalformedRunCount { line: 1, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_only_last_directive_is_parsed() {
    // A broken early directive is irrelevant once a later one overrides it.
    let n = extract_run_count("/run/beamOn abc\n/run/beamOn 12").unwrap();
    assert_eq!(n.unwrap().get(), 12);

    let err = extract_run_count("/run/beamOn 12\n/run/beamOn abc").unwrap_err();
    match err {
        BeamStatError::MalformedRunCount { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_run_config_diagnostics() {
    let text = "/run/initialize\n/run/beamOn 10\n/gun/energy 1 GeV\n/run/beamOn 20\n";
    let config = RunConfig::parse(text).unwrap();

    assert_eq!(config.lines().len(), 4);
    assert_eq!(config.directive_count(), 2);
    let d = config.directive().unwrap();
    assert_eq!(d.line, 4);
    assert_eq!(d.run_count.get(), 20);
}
