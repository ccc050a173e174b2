use thiserror::Error;

pub type FlowResult<T> = Result<T, FlowError>;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("wrong number of {role} series: expected {expected}, got {actual}")]
    ArityMismatch {
        role: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("transform has no data source bound; call set_data_source first")]
    NotConfigured,

    #[error("no transform registered under name '{0}'")]
    UnregisteredTransform(String),

    #[error("invalid transform state: {0}")]
    InvalidState(String),
}
