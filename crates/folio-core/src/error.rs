use thiserror::Error;

/// Errors raised while assembling page content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("duplicate section id `{0}`")]
    DuplicateSectionId(String),
    #[error("section id must not be empty (title `{0}`)")]
    EmptySectionId(String),
}
