pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] stratum::Error),

    #[error("layout failed internally: {message}")]
    Internal { message: String },

    #[error("layout references unknown block {id}")]
    UnknownBlock { id: String },
}
