// Integration tests for errx
use std::io::Write;

use errx_core::{Catalog, CatalogIndex, Error};
use errx_similarity::{analysis_prompt, MatchReport, RankOptions, Ranker};

const CATALOG_CSV: &str = "\
,EventTemplate,Level,Component,type
0,Receiving block blk_<*> src: /<*> dest: /<*>,INFO,dfs.DataNode,HDFS
1,Got exception while serving blk_<*> to /<*>:,WARN,dfs.DataNode,HDFS
2,PacketResponder <*> for block blk_<*> terminating,INFO,dfs.DataNode,HDFS
3,Verification succeeded for blk_<*>,INFO,dfs.DataBlockScanner,HDFS
4,BLOCK* NameSystem.delete: blk_<*> is added to invalidSet of <*>,INFO,dfs.FSNamesystem,HDFS
";

fn build_index() -> CatalogIndex {
    let catalog = Catalog::from_csv_reader(CATALOG_CSV.as_bytes()).unwrap();
    CatalogIndex::build(catalog).unwrap()
}

#[test]
fn test_load_from_csv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CATALOG_CSV.as_bytes()).unwrap();

    let catalog = Catalog::from_csv_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.get(4).unwrap().component, "dfs.FSNamesystem");
}

#[test]
fn test_missing_catalog_file_propagates_io_error() {
    let err = Catalog::from_csv_path("/nonexistent/combined_error.csv").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_end_to_end_classification_flow() {
    let index = build_index();
    let ranker = Ranker::with_defaults();

    let query =
        "10.251.35.1:50010:Got exception while serving blk_7940316270494947483 to /10.251.122.38:";
    let matches = ranker.rank(query, &index).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].ordinal, 1);
    assert_eq!(matches[0].entry.level, "WARN");
    assert!(matches[0].lexical_score > 0.5);
    assert!(matches[0].score > 0.4);

    let report = MatchReport::new(query, &matches);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["errorMessage"], query);
    assert_eq!(json["matches"][0]["type"], "HDFS");
    assert_eq!(
        json["matches"][0]["eventTemplate"],
        "Got exception while serving blk_<*> to /<*>:"
    );

    let prompt = analysis_prompt(&report.error_message, &report.matches);
    assert!(prompt.contains(query));
    assert!(prompt.contains("Got exception while serving blk_<*> to /<*>:"));
}

#[test]
fn test_ranking_is_deterministic_across_calls() {
    let index = build_index();
    let ranker = Ranker::new(RankOptions::with_top_n(5)).unwrap();
    let query = "PacketResponder 2 for block blk_8229193803249955061 terminating";

    let baseline = ranker.rank(query, &index).unwrap();
    for _ in 0..10 {
        let run = ranker.rank(query, &index).unwrap();
        for (a, b) in baseline.iter().zip(&run) {
            assert_eq!(a.ordinal, b.ordinal);
            assert_eq!(a.score, b.score);
        }
    }
}

#[test]
fn test_default_scores_stay_in_unit_range() {
    let index = build_index();
    let ranker = Ranker::new(RankOptions::with_top_n(5)).unwrap();

    let queries = [
        "Verification succeeded for blk_-4980916519894289629",
        "BLOCK* NameSystem.delete: blk_1608999687919862906 is added to invalidSet of 10.251.73.220:50010",
        "something entirely unrelated to the catalog",
    ];
    for query in queries {
        for m in ranker.rank(query, &index).unwrap() {
            assert!(m.score >= 0.0, "negative score for {:?}", query);
            assert!(m.score <= 1.0 + 1e-6, "score above 1.0 for {:?}", query);
        }
    }
}

#[test]
fn test_index_shared_across_threads() {
    let index = build_index();
    let ranker = Ranker::new(RankOptions::with_top_n(3)).unwrap();
    let expected = ranker
        .rank("Receiving block blk_42 src: /10.0.0.2 dest: /10.0.0.3", &index)
        .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let index_ref = &index;
            let ranker_ref = &ranker;
            let expected_ref = &expected;
            scope.spawn(move || {
                let matches = ranker_ref
                    .rank("Receiving block blk_42 src: /10.0.0.2 dest: /10.0.0.3", index_ref)
                    .unwrap();
                for (a, b) in matches.iter().zip(expected_ref.iter()) {
                    assert_eq!(a.ordinal, b.ordinal);
                    assert_eq!(a.score, b.score);
                }
            });
        }
    });
}

#[test]
fn test_prelude_covers_the_flow() {
    use errx::prelude::*;

    let catalog = Catalog::new(vec![TemplateEntry::new(
        "Deleting block blk_<*> file <*>",
        "INFO",
        "dfs.DataNode",
        "HDFS",
    )])
    .unwrap();
    let index = CatalogIndex::build(catalog).unwrap();

    let matches = Ranker::with_defaults()
        .rank("Deleting block blk_90 file /tmp/hadoop/data", &index)
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert!(matches[0].entry.event_template.contains(WILDCARD));
}
