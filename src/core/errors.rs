use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid action \"{0}\", expected \"copy\" or \"cut\"")]
    InvalidAction(String),

    #[error("invalid target, expected an element attached to the document host")]
    InvalidTarget,

    #[error("multiple sources supplied, use either target or text")]
    AmbiguousSource,

    #[error("no source supplied, use either target or text")]
    MissingSource,
}
