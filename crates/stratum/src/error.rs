#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid layout option `{name}`: {value}")]
    InvalidOption { name: &'static str, value: f64 },

    #[error("node #{index} has an invalid {dimension}: {value}")]
    InvalidNodeSize {
        index: usize,
        dimension: &'static str,
        value: f64,
    },

    #[error("invalid alignment `{value}`: expected one of ul, ur, dl, dr")]
    InvalidAlignment { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
