//! End-to-end tests: two annotations in, merged clusters and resolved text out

use corefmerge_core::*;

fn tokens(layout: &[(&str, &str, Pos, &str)]) -> Document {
    Document::new(
        layout.iter()
            .map(|(text, ws, pos, tag)| Token::new(*text, *ws, *pos, *tag))
            .collect(),
    )
}

/// "Marie Curie won the prize . She shared it with her husband ."
fn curie() -> Document {
    tokens(&[
        ("Marie", " ", Pos::Propn, "NNP"),
        ("Curie", " ", Pos::Propn, "NNP"),
        ("won", " ", Pos::Verb, "VBD"),
        ("the", " ", Pos::Det, "DT"),
        ("prize", "", Pos::Noun, "NN"),
        (".", " ", Pos::Punct, "."),
        ("She", " ", Pos::Pron, "PRP"),
        ("shared", " ", Pos::Verb, "VBD"),
        ("it", " ", Pos::Pron, "PRP"),
        ("with", " ", Pos::Adp, "IN"),
        ("her", " ", Pos::Pron, "PRP$"),
        ("husband", "", Pos::Noun, "NN"),
        (".", "", Pos::Punct, "."),
    ])
}

#[test]
fn test_strict_exact_match() {
    let a = cluster_set(vec![vec![(0, 0), (2, 2)]]);
    let b = cluster_set(vec![vec![(0, 0), (2, 2)]]);
    assert_eq!(
        StrictIntersection.reconcile(&a, &b),
        cluster_set(vec![vec![(0, 0), (2, 2)]])
    );

    let b = cluster_set(vec![vec![(0, 0), (3, 3)]]);
    assert!(StrictIntersection.reconcile(&a, &b).is_empty());
}

#[test]
fn test_possessive_suffixing() {
    let doc = tokens(&[
        ("Alice", " ", Pos::Propn, "NNP"),
        ("and", " ", Pos::Cconj, "CC"),
        ("her", " ", Pos::Pron, "PRP$"),
        ("cat", "", Pos::Noun, "NN"),
    ]);
    let clusters = cluster_set(vec![vec![(0, 0), (2, 2)]]);
    assert_eq!(resolve(&doc, &clusters), "Alice and Alice's cat");
}

#[test]
fn test_nested_span_protection() {
    let doc = tokens(&[
        ("A", " ", Pos::Det, "DT"),
        ("friend", " ", Pos::Noun, "NN"),
        ("of", " ", Pos::Adp, "IN"),
        ("Tom", " ", Pos::Propn, "NNP"),
        ("Sawyer", " ", Pos::Propn, "NNP"),
        ("arrived", " ", Pos::Verb, "VBD"),
        ("with", " ", Pos::Adp, "IN"),
        ("Huck", "", Pos::Propn, "NNP"),
    ]);
    // [1,3] sits inside [0,4], which belongs to a different cluster
    let clusters = cluster_set(vec![vec![(0, 4)], vec![(7, 7), (1, 3)]]);
    let resolved = resolve(&doc, &clusters);
    assert_eq!(resolved, doc.text());
    assert!(resolved.starts_with("A friend of Tom Sawyer "));
}

#[test]
fn test_head_never_rewritten() {
    let doc = curie();
    let clusters = cluster_set(vec![
        vec![(6, 6), (0, 1), (10, 10)],
        vec![(3, 4), (8, 8)],
    ]);
    let resolved = resolve(&doc, &clusters);
    assert_eq!(
        resolved,
        "Marie Curie won the prize. Marie Curie shared the prize with Marie Curie's husband."
    );
    assert!(resolved.starts_with("Marie Curie won the prize."));
}

#[test]
fn test_full_pipeline_per_strategy() {
    // a marks "the prize" and "Marie Curie", b marks "prize" and "Curie"
    let input = AnnotatedDocument::new(
        curie(),
        cluster_set(vec![vec![(0, 1), (6, 6), (10, 10)], vec![(3, 4), (8, 8)]]),
        cluster_set(vec![vec![(1, 1), (6, 6), (10, 10)], vec![(4, 4), (8, 8)]]),
    );

    let strict = merge_with_strategy(&input, StrategyKind::Strict).unwrap();
    assert!(strict.clusters.is_empty());
    assert_eq!(strict.resolved, curie().text());

    let partial = merge_with_strategy(&input, StrategyKind::Partial).unwrap();
    assert_eq!(partial.clusters, cluster_set(vec![vec![(6, 6), (10, 10)]]));
    // no nominal mention survived, so nothing is rewritten
    assert_eq!(partial.resolved, curie().text());

    let fuzzy = merge_with_strategy(&input, StrategyKind::Fuzzy).unwrap();
    assert_eq!(
        fuzzy.clusters,
        cluster_set(vec![vec![(1, 1), (6, 6), (10, 10)], vec![(4, 4), (8, 8)]])
    );
    assert_eq!(
        fuzzy.resolved,
        "Marie Curie won the prize. Curie shared prize with Curie's husband."
    );
}

#[test]
fn test_summaries_of_merged_clusters() {
    let input = AnnotatedDocument::new(
        curie(),
        cluster_set(vec![vec![(0, 1), (6, 6), (10, 10)]]),
        cluster_set(vec![vec![(0, 1), (6, 6), (10, 10)]]),
    );
    let output = merge(&input).unwrap();
    assert_eq!(
        summarize(&input.tokens, &output.clusters),
        vec!["Marie Curie - [Marie Curie; She; her]"]
    );
}

#[test]
fn test_deterministic_repeated_runs() {
    let input = AnnotatedDocument::new(
        curie(),
        cluster_set(vec![vec![(0, 1), (6, 6), (10, 10)], vec![(3, 4), (8, 8)]]),
        cluster_set(vec![vec![(1, 1), (6, 6), (10, 10)], vec![(4, 4), (8, 8)]]),
    );
    let merger = CorefMerger::new();
    let first = merger.process(&input).unwrap();
    for _ in 0..20 {
        let again = merger.process(&input).unwrap();
        assert_eq!(again.clusters, first.clusters);
        assert_eq!(again.resolved, first.resolved);
    }
}

#[test]
fn test_json_round_trip_of_output() {
    let input: AnnotatedDocument = serde_json::from_str(
        r#"{
            "id": "doc-1",
            "tokens": [
                {"text": "Bob", "whitespace": " ", "pos": "PROPN", "tag": "NNP"},
                {"text": "says", "whitespace": " ", "pos": "VERB", "tag": "VBZ"},
                {"text": "he", "whitespace": " ", "pos": "PRON", "tag": "PRP"},
                {"text": "agrees", "whitespace": "", "pos": "VERB", "tag": "VBZ"}
            ],
            "clusters_a": [[[0, 0], [2, 2]]],
            "clusters_b": [[[0, 0], [2, 2]]]
        }"#,
    )
    .unwrap();

    let output = CorefMerger::with_strategy(StrategyKind::Partial)
        .process(&input)
        .unwrap();
    assert_eq!(output.resolved, "Bob says Bob agrees");

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["id"], "doc-1");
    assert_eq!(json["clusters"], serde_json::json!([[[0, 0], [2, 2]]]));
    assert_eq!(json["metadata"]["strategy"], "partial");
}
