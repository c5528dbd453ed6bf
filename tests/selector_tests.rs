mod common;

use common::{classic_scorer, scorer_with, words};
use phraseforge::config::UnmappedPolicy;
use phraseforge::error::PhraseForgeError;
use phraseforge::layouts::Fingering;
use phraseforge::search::{best_of, by_cost, select_best, select_top, Podium, ScoredCandidate};

#[test]
fn test_best_of_returns_literal_minimum_pair() {
    let pairs = vec![
        ("alpha beta".to_string(), 3.5),
        ("gamma delta".to_string(), 1.25),
        ("epsilon zeta".to_string(), 2.0),
    ];
    let best = best_of(pairs).unwrap();
    assert_eq!(best.phrase, "gamma delta");
    assert_eq!(best.cost, 1.25);
    assert_eq!(best.index, 1);
}

#[test]
fn test_select_best_prefers_home_row_phrase() {
    let scorer = classic_scorer();
    let candidates = words(&["aaa bbb", "fff jjj"]);
    let best = select_best(&candidates, &scorer).unwrap();
    assert_eq!(best.phrase, "fff jjj");
    assert_eq!(best.cost, scorer.score("fff jjj").unwrap());
}

#[test]
fn test_ties_keep_first_found() {
    let scorer = classic_scorer();
    let candidates = words(&["fff", "jjj", "kkk"]);
    let best = select_best(&candidates, &scorer).unwrap();
    assert_eq!(best.phrase, "fff");
    assert_eq!(best.index, 0);
}

#[test]
fn test_select_top_returns_sorted_podium() {
    let scorer = classic_scorer();
    let candidates = words(&["qqq ppp", "fff", "rfr", "zb", "jkl"]);
    let top = select_top(&candidates, &scorer, 3).unwrap();
    assert_eq!(top.len(), 3);
    assert!(top.windows(2).all(|w| by_cost(&w[0], &w[1]).is_lt()));

    let mut all: Vec<f64> = candidates.iter().map(|c| scorer.score(c).unwrap()).collect();
    all.sort_by(f64::total_cmp);
    let got: Vec<f64> = top.iter().map(|s| s.cost).collect();
    assert_eq!(got, all[..3].to_vec());
}

#[test]
fn test_top_larger_than_input_keeps_everything() {
    let scorer = classic_scorer();
    let candidates = words(&["fff", "rrr"]);
    assert_eq!(select_top(&candidates, &scorer, 10).unwrap().len(), 2);
}

#[test]
fn test_empty_candidate_set_is_an_error() {
    let scorer = classic_scorer();
    let none: Vec<String> = Vec::new();
    assert!(matches!(
        select_best(&none, &scorer),
        Err(PhraseForgeError::EmptyCandidates)
    ));
}

#[test]
fn test_zero_k_is_rejected() {
    let scorer = classic_scorer();
    let err = select_top(&words(&["fff"]), &scorer, 0).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_scoring_error_surfaces_from_selection() {
    let strict = classic_scorer();
    let candidates = words(&["fff", "it's"]);
    assert!(matches!(
        select_best(&candidates, &strict),
        Err(PhraseForgeError::MissingKey { key: '\'', .. })
    ));

    let lenient = scorer_with(Fingering::Classic, UnmappedPolicy::Skip);
    assert_eq!(select_best(&candidates, &lenient).unwrap().phrase, "fff");
}

#[test]
fn test_podium_rejects_worse_entries_when_full() {
    let mut podium = Podium::new(2, by_cost);
    let entry = |cost: f64, index: usize| ScoredCandidate {
        phrase: format!("p{}", index),
        cost,
        index,
    };
    assert!(podium.offer(entry(5.0, 0)));
    assert!(podium.offer(entry(3.0, 1)));
    assert!(!podium.offer(entry(9.0, 2)));
    assert!(!podium.offer(entry(5.0, 3)));
    assert!(podium.offer(entry(1.0, 4)));
    let costs: Vec<f64> = podium.into_sorted_vec().iter().map(|e| e.cost).collect();
    assert_eq!(costs, vec![1.0, 3.0]);
}
