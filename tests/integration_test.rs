// Integration tests for simx
use serde_json::Value;
use simx_core::{Feature, FeatureSet, Sample, Vector};
use simx_knn::{Knn, KnnMixedData, KnnRegression, MostSimilar, Ranking};
use simx_similarity::{CosineMetric, EuclideanMetric, Metric};

fn measured(height: f64, age: f64, weight: f64) -> FeatureSet {
    FeatureSet::default()
        .with(Feature::numeric("height", height))
        .with(Feature::numeric("age", age))
        .with(Feature::numeric("weight", weight))
}

fn people_measurements() -> Vec<FeatureSet> {
    vec![
        measured(5.0, 45.0, 77.0),
        measured(5.1, 26.0, 47.0),
        measured(5.6, 30.0, 55.0),
        measured(5.9, 34.0, 59.0),
        measured(4.8, 40.0, 72.0),
        measured(5.8, 36.0, 60.0),
        measured(5.3, 20.0, 40.0),
        measured(5.8, 28.0, 60.0),
        measured(5.5, 42.0, 58.0),
        measured(6.0, 32.0, 58.0),
    ]
}

#[test]
fn test_knn_regression_predicts_weight() {
    let dataset = people_measurements();
    let query = FeatureSet::default()
        .with(Feature::numeric("height", 5.5))
        .with(Feature::numeric("age", 38.0));

    let predicted = KnnRegression::new(&dataset, 3).classify(&query).unwrap();
    assert!((predicted[2] - 57.67).abs() < 0.01);

    // reading the feature off the ranked neighbors agrees
    let result = Knn::new(&dataset, 3).fit(&query).unwrap();
    assert!((result.predict("weight").unwrap() - 57.67).abs() < 0.01);
}

fn citizen(age: f64, race: &str, height: f64, income: f64, gender: &str, politic: &str) -> FeatureSet {
    FeatureSet::default()
        .with(Feature::numeric("age", age))
        .with(Feature::categorical("race", race))
        .with(Feature::numeric("height", height))
        .with(Feature::numeric("income", income))
        .with(Feature::categorical("gender", gender))
        .with(Feature::categorical("politic", politic))
}

#[test]
fn test_gower_mixed_knn_classifies_and_predicts() {
    let dataset = vec![
        citizen(30.0, "white", 5.8, 60_000.0, "m", "dem"),
        citizen(35.0, "asian", 5.5, 65_000.0, "f", "dem"),
        citizen(40.0, "asian", 5.9, 70_000.0, "m", "rep"),
        citizen(28.0, "white", 5.4, 50_000.0, "f", "dem"),
    ];
    let query = dataset[1].clone();

    let result = KnnMixedData::new(&dataset, 3).fit(&query).unwrap();
    assert_eq!(result.len(), 3);

    // majority race among the nearest three (the query itself, the
    // younger woman and the older man, in that order)
    let race = result.classify("race").unwrap();
    assert_eq!(race.value, Value::from("white"));
    assert_eq!(race.votes, 2);
    assert!((race.probability.fraction() - 2.0 / 3.0).abs() < 1e-9);

    let age = result.predict("age").unwrap();
    assert!((age - 31.0).abs() < 0.1);
}

fn hobbyist(age: f64, music: bool, sport: bool) -> FeatureSet {
    FeatureSet::default()
        .with(Feature::numeric("age", age))
        .with(Feature::categorical("hobby_music", music))
        .with(Feature::categorical("hobby_sport", sport))
}

#[test]
fn test_one_hot_multi_label_decode() {
    // memberships: {music}, {music, sport}, {sport, music}, {music}, {sport}
    let dataset = vec![
        hobbyist(30.0, true, false),
        hobbyist(31.0, true, true),
        hobbyist(29.0, true, true),
        hobbyist(50.0, true, false),
        hobbyist(55.0, false, true),
    ];
    let query = FeatureSet::default().with(Feature::numeric("age", 30.0));

    let result = Knn::new(&dataset, 3).fit(&query).unwrap();
    let labels = result
        .classify_one_hot(|name| name.starts_with("hobby_"))
        .unwrap();

    // both labels re-activate, music first on vote count
    assert_eq!(labels, vec!["hobby_music", "hobby_sport"]);
}

#[test]
fn test_most_similar_prefers_the_matching_profile() {
    let dataset = people_measurements();
    let query = measured(5.9, 34.0, 59.0);

    let engine = MostSimilar::new(&dataset, Box::new(CosineMetric));
    let best = engine.find(&query).unwrap();
    assert_eq!(best.to_vector(), Vector::new(vec![5.9, 34.0, 59.0]));
}

#[test]
fn test_even_k_warns_but_still_classifies() {
    let dataset = vec![
        hobbyist(30.0, true, false),
        hobbyist(31.0, false, true),
        hobbyist(32.0, true, false),
        hobbyist(33.0, false, true),
    ];
    let query = FeatureSet::default().with(Feature::numeric("age", 30.0));

    // k = 4 splits the vote 2/2; the tie resolves to the value ranked
    // first, it never becomes an error
    let result = Knn::new(&dataset, 4).fit(&query).unwrap();
    let music = result.classify("hobby_music").unwrap();
    assert_eq!(music.value, Value::Bool(true));
}

#[test]
fn test_ranking_is_deterministic_across_runs() {
    let dataset = people_measurements();
    let query = FeatureSet::default()
        .with(Feature::numeric("height", 5.5))
        .with(Feature::numeric("age", 33.0));

    let baseline: Vec<f64> = Knn::new(&dataset, 10)
        .fit(&query)
        .unwrap()
        .neighbors()
        .iter()
        .map(|n| n.score)
        .collect();

    for _ in 0..10 {
        let run: Vec<f64> = Knn::new(&dataset, 10)
            .fit(&query)
            .unwrap()
            .neighbors()
            .iter()
            .map(|n| n.score)
            .collect();
        assert_eq!(baseline, run);
    }
}

#[test]
fn test_injected_metric_direction() {
    let dataset = people_measurements();
    let query = measured(5.5, 38.0, 58.0);

    // sigmoid-Euclidean grows with distance, so ranking it descending
    // surfaces the *farthest* sample first - the documented quirk
    let result = Knn::new(&dataset, 10)
        .with_metric(Box::new(EuclideanMetric), Ranking::Descending)
        .fit(&query)
        .unwrap();
    let scores: Vec<f64> = result.neighbors().iter().map(|n| n.score).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }

    let direct = EuclideanMetric;
    let same = direct
        .score(&Vector::new(vec![0.0]), &Vector::new(vec![0.0]))
        .unwrap();
    assert!((same - 0.5).abs() < 1e-12);
}
