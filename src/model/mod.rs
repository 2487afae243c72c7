//! Data model for classified and extracted school documents.
//!
//! Every value here is created fresh per document and carries no
//! cross-document state. The types are plain data and serialize with serde
//! so they can be handed to renderers and external collaborators unchanged.

mod category;
mod deadline;
mod result;
mod subject;

pub use category::DocumentCategory;
pub use deadline::{DeadlineKind, DeadlineMatch};
pub use result::{ExtractionStats, PipelineResult};
pub use subject::{format_marks, SubjectRecord};
