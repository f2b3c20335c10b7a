use lineqa::{Matcher, StaticCorpus, TermVector, answer, cosine_similarity, tokenize_words};

const CORPUS: &str = "\
| Gen Z in Nashville loves gaming, 42% engagement |
| Millennials prefer outdoor activities |
| Boomers in Austin enjoy gardening |
";

#[test]
fn equivalent_spellings_tokenize_identically() {
    let a = tokenize_words(" Hello,   WORLD!! ");
    let b = tokenize_words("hello world");
    assert_eq!(a, b);
}

#[test]
fn term_vectors_ignore_case_and_punctuation() {
    let a = TermVector::from_text("Gaming; gaming -- GAMING");
    let b = TermVector::from_text("gaming gaming gaming");
    assert_eq!(a, b);
    assert_eq!(a.weight("gaming"), 3.0);
}

#[test]
fn repeated_answers_are_identical() {
    let corpus = StaticCorpus::from_text(CORPUS);
    let matcher = Matcher::default();
    let query = "What percentage of Gen Z in Nashville are interested in gaming?";

    let first = answer(query, &corpus, &matcher).expect("first answer");
    for _ in 0..50 {
        let again = answer(query, &corpus, &matcher).expect("repeat answer");
        assert_eq!(first, again);
    }
}

#[test]
fn similarity_is_symmetric() {
    let pairs = [
        ("gen z gaming", "gaming in nashville"),
        ("a a b", "b b c c"),
        ("outdoor activities", "activities outdoor outdoor"),
    ];
    for (x, y) in pairs {
        let (vx, vy) = (TermVector::from_text(x), TermVector::from_text(y));
        assert_eq!(cosine_similarity(&vx, &vy), cosine_similarity(&vy, &vx));
    }
}

#[test]
fn identical_text_scores_exactly_one() {
    let text = "Boomers in Austin enjoy gardening";
    let v = TermVector::from_text(text);
    assert_eq!(cosine_similarity(&v, &v), 1.0);
    assert_eq!(
        cosine_similarity(&TermVector::from_text(text), &TermVector::from_text(text)),
        1.0
    );
}
