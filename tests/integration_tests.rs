//! Integration tests for the drum tab compiler
//!
//! Tests the full pipeline from source text to events, score grid and
//! playback windows through the public API.

use assert_approx_eq::assert_approx_eq;
use drumtab::{
    check, parse_score, playback_data, render_score, Config, DrumTabError, Frame, Instrument,
    ViewMode, Viewer, DEFAULT_WINDOW,
};

const GROOVE: &str = include_str!("../demos/groove.tab");

#[test]
fn test_parse_demo_groove() {
    let score = parse_score(GROOVE).expect("demo groove should parse");
    assert_eq!(score.tempo.bpm(), 100);
    assert_eq!(score.events.len(), 15);

    // First group is a rest, so the opening fill lands on the second beat
    let first: Vec<_> = score.events[..3].iter().map(|e| e.instrument).collect();
    assert_eq!(
        first,
        vec![Instrument::Tom1, Instrument::Tom2, Instrument::Kick]
    );
    for event in &score.events[..3] {
        assert_approx_eq!(event.time, 0.6);
    }
    assert_approx_eq!(score.events[14].time, 4.2);
}

#[test]
fn test_render_demo_groove() {
    let score = parse_score(GROOVE).unwrap();
    let lines = render_score(&score.events);
    assert_eq!(
        lines[0],
        "Tempo:            |    0.60s|    1.20s|    1.80s|    2.40s|    3.00s|    3.60s|    4.20s|"
    );
    assert_eq!(
        lines[2],
        "Bumbo             |    K    |         |    K    |    K    |         |         |         |"
    );
    assert_eq!(
        lines[3],
        "Caixa             |         |         |         |         |         |    S    |    S    |"
    );
    assert_eq!(
        lines[7],
        "Hi-hat fechado    |         |         |    H    |         |    H    |         |         |"
    );
}

#[test]
fn test_tempo_change_between_lines() {
    let source = "K|S|H\n[tempo=60]\nK|S|H\n";
    let score = parse_score(source).unwrap();
    assert_eq!(score.tempo.bpm(), 60);
    let times: Vec<f64> = score.events.iter().map(|e| e.time).collect();
    assert_eq!(times, vec![0.0, 0.5, 1.0, 0.0, 1.0, 2.0]);
}

#[test]
fn test_carriage_return_separates_lines() {
    let score = parse_score("[tempo=60]\rK|S\rH").unwrap();
    assert_eq!(score.tempo.bpm(), 60);
    let times: Vec<f64> = score.events.iter().map(|e| e.time).collect();
    assert_eq!(times, vec![0.0, 1.0, 0.0]);
    match parse_score("K|\rS H O") {
        Err(DrumTabError::IllegalCombination { line, .. }) => assert_eq!(line, 2),
        other => panic!("Expected IllegalCombination, got {:?}", other),
    }
}

#[test]
fn test_errors_abort_whole_parse() {
    let source = "K S|H\n[tempo=90]\nK|S H O|\nK";
    match parse_score(source) {
        Err(DrumTabError::IllegalCombination { line, time }) => {
            assert_eq!(line, 3);
            assert_approx_eq!(time, 60.0 / 90.0);
        }
        other => panic!("Expected IllegalCombination, got {:?}", other),
    }
}

#[test]
fn test_error_kinds() {
    assert!(matches!(
        parse_score("[tempo=250]"),
        Err(DrumTabError::InvalidTempo { value: 250, .. })
    ));
    assert!(matches!(
        parse_score("K S H O T1|"),
        Err(DrumTabError::TooManySimultaneous { count: 5, .. })
    ));
    assert!(matches!(
        parse_score("S H O|"),
        Err(DrumTabError::IllegalCombination { .. })
    ));
    match parse_score("Z|") {
        Err(DrumTabError::UnknownToken { token, .. }) => assert_eq!(token, "Z"),
        other => panic!("Expected UnknownToken, got {:?}", other),
    }
}

#[test]
fn test_check() {
    assert!(check(GROOVE).is_ok());
    assert!(check("").is_ok());
    assert!(check("K S X").is_err());
}

#[test]
fn test_playback_data_for_demo() {
    let data = playback_data(GROOVE, DEFAULT_WINDOW).unwrap();
    assert_eq!(data.tempo.bpm(), 100);
    assert_approx_eq!(data.duration, 4.2 + DEFAULT_WINDOW);

    let json = serde_json::to_string(&data).unwrap();
    assert!(json.contains("\"tempo\":100"));
    assert!(json.contains("\"instrument\":\"T1\""));
}

#[test]
fn test_live_view_session() {
    let score = parse_score(GROOVE).unwrap();
    let mut viewer = Viewer::from_config(score, &Config::default());

    // Nothing sounds during the opening rest
    match viewer.frame(0.1) {
        Frame::Graphic { active, tempo } => {
            assert!(active.is_empty());
            assert_eq!(tempo.bpm(), 100);
        }
        other => panic!("Expected graphic frame, got {:?}", other),
    }
    match viewer.frame(0.7) {
        Frame::Graphic { active, .. } => {
            assert!(active.contains(&Instrument::Kick));
            assert!(active.contains(&Instrument::Tom1));
            assert!(active.contains(&Instrument::Tom2));
        }
        other => panic!("Expected graphic frame, got {:?}", other),
    }

    viewer.toggle();
    assert_eq!(viewer.mode(), ViewMode::Score);
    match viewer.frame(0.7) {
        Frame::Score(lines) => assert_eq!(lines, render_score(viewer.playback().events())),
        other => panic!("Expected score frame, got {:?}", other),
    }
}
