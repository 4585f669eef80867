use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipError {
    #[error("price before tip must be a positive, finite amount, got {0}")]
    InvalidPrice(f64),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

pub type Result<T> = std::result::Result<T, TipError>;
