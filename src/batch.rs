//! Batch processing of many documents.
//!
//! Documents share nothing, so they are processed as independent rayon
//! tasks. The worker count is bounded by [`BatchOptions::max_threads`].

use crossbeam_channel::{unbounded, Receiver};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;
use crate::model::PipelineResult;
use crate::pipeline::Pipeline;

/// Options for batch processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Whether to use parallel processing
    pub parallel: bool,

    /// Maximum worker threads (0 = one per logical CPU)
    pub max_threads: usize,
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Bound the number of worker threads.
    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    fn thread_count(&self) -> usize {
        if self.parallel {
            self.max_threads
        } else {
            1
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_threads: 0,
        }
    }
}

/// One finished document from [`process_stream`].
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Position of the document in the input batch
    pub index: usize,
    /// Pipeline output for that document
    pub result: PipelineResult,
}

/// Process a batch of raw texts, returning results in input order.
pub fn process_batch<S>(
    documents: &[S],
    pipeline: &Pipeline,
    options: &BatchOptions,
) -> Result<Vec<PipelineResult>>
where
    S: AsRef<str> + Sync,
{
    if !options.parallel {
        return Ok(documents
            .iter()
            .map(|raw| pipeline.process(raw.as_ref()))
            .collect());
    }

    let pool = build_pool(options)?;
    log::debug!(
        "Processing {} documents on {} threads",
        documents.len(),
        pool.current_num_threads()
    );
    Ok(pool.install(|| {
        documents
            .par_iter()
            .map(|raw| pipeline.process(raw.as_ref()))
            .collect()
    }))
}

/// Process a batch in the background, streaming results as they finish.
///
/// Items arrive in completion order; use [`BatchItem::index`] to restore
/// input order. The channel closes once every document is done.
pub fn process_stream(
    documents: Vec<String>,
    pipeline: Pipeline,
    options: &BatchOptions,
) -> Result<Receiver<BatchItem>> {
    let pool = build_pool(options)?;
    let (sender, receiver) = unbounded();

    pool.spawn(move || {
        documents
            .par_iter()
            .enumerate()
            .for_each_with(sender, |sender, (index, raw)| {
                let result = pipeline.process(raw);
                if sender.send(BatchItem { index, result }).is_err() {
                    log::debug!("Batch receiver dropped before document {}", index);
                }
            });
    });

    Ok(receiver)
}

fn build_pool(options: &BatchOptions) -> Result<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(options.thread_count())
        .thread_name(|i| format!("schooldoc-worker-{}", i))
        .build()?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentCategory;

    fn documents() -> Vec<String> {
        vec![
            "CS301 DATA STRUCTURES 4\n85.50".to_string(),
            "Dear Students, pay fees by 01/02/2024".to_string(),
            String::new(),
        ]
    }

    #[test]
    fn test_batch_options_builder() {
        let options = BatchOptions::new().with_max_threads(4).sequential();
        assert!(!options.parallel);
        assert_eq!(options.max_threads, 4);
        assert_eq!(options.thread_count(), 1);
        assert_eq!(BatchOptions::default().thread_count(), 0);
    }

    #[test]
    fn test_process_batch_preserves_order() {
        let pipeline = Pipeline::new();
        let results = process_batch(&documents(), &pipeline, &BatchOptions::new()).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].category, DocumentCategory::Academic);
        assert_eq!(results[1].category, DocumentCategory::Notice);
        assert!(results[2].normalized_text.is_empty());
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let pipeline = Pipeline::new();
        let parallel =
            process_batch(&documents(), &pipeline, &BatchOptions::new().with_max_threads(2))
                .unwrap();
        let sequential =
            process_batch(&documents(), &pipeline, &BatchOptions::new().sequential()).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_process_stream() {
        let receiver =
            process_stream(documents(), Pipeline::new(), &BatchOptions::new().with_max_threads(2))
                .unwrap();
        let mut items: Vec<BatchItem> = receiver.iter().collect();
        items.sort_by_key(|item| item.index);

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].result.deadlines[0].text, "01/02/2024");
    }
}
