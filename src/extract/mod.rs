//! Classification and structured-field extraction over normalized OCR text.
//!
//! Every function in this module is total: any input string, including
//! empty or non-ASCII text, yields a value (possibly an empty collection).

mod academic;
mod classify;
mod deadline;
mod normalize;
mod options;

pub use academic::{align_records, extract_academic, AcademicExtractor, CoursePair};
pub use classify::{classify, Classifier};
pub use deadline::{extract_deadlines, DeadlineExtractor};
pub use normalize::normalize;
pub use options::{ExtractOptions, DEFAULT_MIN_MARKS, DEFAULT_NOTICE_KEYWORDS};
