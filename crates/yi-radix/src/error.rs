use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// The empty key would be a prefix of every probe.
    #[error("radix keys must not be empty")]
    EmptyKey,
}
