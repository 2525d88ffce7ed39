use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidDelay {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{var} must be a boolean flag, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}
