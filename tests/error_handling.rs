use lineqa::{
    CorpusError, DEFAULT_MIN_SCORE, FileCorpus, LineqaError, MatchConfig, MatchError, MatchOutcome,
    Matcher, StaticCorpus, answer, find_best_match, matcher_with_min_score, rank,
};

#[test]
fn empty_query_never_matches() {
    let outcome = find_best_match("", &["anything at all"]);
    assert_eq!(outcome, MatchOutcome::NoMatch);
    assert_eq!(outcome.into_answer(), (String::new(), false));
}

#[test]
fn punctuation_only_query_never_matches() {
    let outcome = find_best_match("?!... --", &["anything at all", "?!"]);
    assert!(!outcome.is_match());
}

#[test]
fn empty_corpus_never_matches() {
    let lines: [&str; 0] = [];
    assert_eq!(find_best_match("gaming", &lines), MatchOutcome::NoMatch);
}

#[test]
fn blank_and_table_rule_lines_are_not_candidates() {
    let corpus = StaticCorpus::from_text("\n   \n|  |\r\n| gaming |\r\n");
    assert_eq!(corpus.lines().to_vec(), vec!["gaming".to_string()]);
}

#[test]
fn missing_corpus_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = FileCorpus::new(dir.path().join("nope.md"));
    let result = answer("gaming", &corpus, &Matcher::default());
    assert!(matches!(
        result,
        Err(LineqaError::Corpus(CorpusError::Unavailable { .. }))
    ));
}

#[test]
fn corpus_file_with_invalid_utf8_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.md");
    let mut bytes = b"Gen Z loves gaming \xff\n".to_vec();
    bytes.extend_from_slice(b"Millennials prefer hiking\n");
    std::fs::write(&path, bytes).unwrap();

    let outcome = answer("gaming", &FileCorpus::new(&path), &Matcher::default()).unwrap();
    assert!(outcome.line().unwrap().starts_with("Gen Z loves gaming"));
}

#[test]
fn invalid_thresholds_are_rejected() {
    for bad in [-0.1, 1.0, 2.0, f64::NAN] {
        assert!(
            matches!(
                Matcher::new(MatchConfig::with_min_score(bad)),
                Err(MatchError::InvalidConfig(_))
            ),
            "{bad} should be rejected"
        );
    }
    assert!(matcher_with_min_score(0.0).is_ok());
    assert_eq!(MatchConfig::default().min_score, DEFAULT_MIN_SCORE);
}

#[test]
fn score_equal_to_threshold_is_not_a_match() {
    // One shared token out of four on each side scores exactly 0.25.
    let lines = ["alpha beta gamma delta"];
    let query = "alpha zeta eta theta";

    let at = Matcher::new(MatchConfig::with_min_score(0.25)).unwrap();
    assert!(!at.find_best_match(query, &lines).is_match());

    let below = Matcher::new(MatchConfig::with_min_score(0.24)).unwrap();
    assert_eq!(below.find_best_match(query, &lines).score(), Some(0.25));
}

#[test]
fn rank_with_no_matches_is_empty() {
    let corpus = StaticCorpus::from_text("alpha\nbeta\n");
    let ranked = rank("gamma", &corpus, &Matcher::default(), 5).unwrap();
    assert!(ranked.is_empty());
}
