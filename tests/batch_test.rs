//! Batch, streaming and file-level processing tests.

use std::fs;
use std::sync::Arc;

use schooldoc::summary::{GENERIC_FALLBACK, NOTICE_FALLBACK};
use schooldoc::{
    process, process_batch, process_stream, Analyzer, BatchItem, BatchOptions, DocumentCategory,
    Pipeline, Summarizer, SummaryOutcome, SummaryRequest,
};

fn scans() -> Vec<String> {
    (0..40)
        .map(|i| match i % 4 {
            0 => format!("CS{:03} DATA STRUCTURES 4\n{}.50", 100 + i, 40 + i),
            1 => format!("Dear Students, submit form {} by 0{}/02/2024", i, i % 9 + 1),
            2 => "   \n\t ".to_string(),
            _ => format!("Timetable page {}", i),
        })
        .collect()
}

#[test]
fn test_batch_matches_single_processing() {
    let documents = scans();
    let results =
        process_batch(&documents, &Pipeline::new(), &BatchOptions::new().with_max_threads(4))
            .unwrap();

    assert_eq!(results.len(), documents.len());
    for (raw, result) in documents.iter().zip(&results) {
        assert_eq!(result, &process(raw));
    }
}

#[test]
fn test_batch_sequential_and_single_thread_agree() {
    let documents = scans();
    let pipeline = Pipeline::new();
    let sequential = process_batch(&documents, &pipeline, &BatchOptions::new().sequential()).unwrap();
    let single = process_batch(&documents, &pipeline, &BatchOptions::new().with_max_threads(1)).unwrap();
    assert_eq!(sequential, single);
}

#[test]
fn test_batch_empty() {
    let documents: Vec<String> = Vec::new();
    let results = process_batch(&documents, &Pipeline::new(), &BatchOptions::default()).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_stream_delivers_every_index() {
    let documents = scans();
    let expected: Vec<_> = documents.iter().map(|raw| process(raw)).collect();

    let receiver = process_stream(documents, Pipeline::new(), &BatchOptions::new()).unwrap();
    let mut items: Vec<BatchItem> = receiver.into_iter().collect();
    items.sort_by_key(|item| item.index);

    assert_eq!(items.len(), expected.len());
    for (position, item) in items.iter().enumerate() {
        assert_eq!(item.index, position);
        assert_eq!(item.result, expected[position]);
    }
}

struct CountingSummarizer;

impl Summarizer for CountingSummarizer {
    fn summarize(&self, request: &SummaryRequest) -> SummaryOutcome {
        match request.category {
            DocumentCategory::Academic if request.has_records() => {
                SummaryOutcome::Ok(format!("{} subjects", request.subjects.len()))
            }
            _ => SummaryOutcome::Unavailable("quota exceeded".to_string()),
        }
    }
}

#[test]
fn test_analyzer_batch_with_summarizer() {
    let session = Analyzer::new()
        .with_threads(2)
        .with_summarizer(Arc::new(CountingSummarizer))
        .build()
        .unwrap();

    let reports = session
        .analyze_batch(&[
            "CS301 DATA STRUCTURES 4 85.50 MA201 CALCULUS 3 45.00",
            "Dear Students, pay by 01/02/2024",
            "blank page",
        ])
        .unwrap();

    assert_eq!(reports[0].insights, "2 subjects");
    assert_eq!(reports[1].insights, NOTICE_FALLBACK);
    assert_eq!(reports[2].insights, GENERIC_FALLBACK);
}

#[test]
fn test_analyzer_custom_options() {
    let session = Analyzer::new()
        .with_min_marks(50.0)
        .with_keyword("circular")
        .sequential()
        .build()
        .unwrap();

    let report = session.analyze("CS301 DATA STRUCTURES 4 45.00 85.50");
    assert_eq!(report.result.subject_records[0].marks, 85.5);

    let report = session.analyze("CIRCULAR No. 12 dated 03/04/2024");
    assert!(report.result.is_notice());
    assert_eq!(report.result.deadlines[0].text, "03/04/2024");
}

#[test]
fn test_analyze_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planner.txt");
    fs::write(&path, "TERM PLANNER\nKindly complete it by\nNovember 30, 2024").unwrap();

    let session = Analyzer::new().build().unwrap();
    let report = session.analyze_file(&path).unwrap();

    assert!(report.result.is_notice());
    assert_eq!(report.result.deadlines[0].text, "November 30, 2024");
    assert_eq!(
        report.result.normalized_text,
        "TERM PLANNER Kindly complete it by November 30, 2024"
    );
}

#[test]
fn test_analyze_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let session = Analyzer::new().build().unwrap();
    assert!(session.analyze_file(dir.path().join("none.txt")).is_err());
}
