use thiserror::Error;

pub type VsResult<T> = Result<T, VsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VsError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
