use crate::types::MovieId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: MovieId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Two records would share an identifier. Only reachable under
    /// [`IdAssignment::SequenceLength`](crate::store::IdAssignment).
    #[error("Duplicate identifier: {0}")]
    DuplicateId(MovieId),
}
