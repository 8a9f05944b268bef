//! ID type wrappers for type safety.

pub mod subject_id;

pub use subject_id::SubjectId;
