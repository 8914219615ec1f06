//! Errors raised by the draw tools.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("a map view is required to create draw tools")]
    MissingView,

    #[error("unsupported geometry kind '{0}': only point and extent draw tools are enabled")]
    UnsupportedGeometry(String),
}
