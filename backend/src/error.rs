pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    AsyncIo(#[from] tokio::io::Error),
    #[error("web server error {0}")]
    WebServer(String),
}
