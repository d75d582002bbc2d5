use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument {input:?}: {reason}")]
    InvalidArgument { input: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(input: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidArgument {
            input: input.into(),
            reason,
        }
    }
}
