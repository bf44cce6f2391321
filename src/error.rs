//! .
//!
//! Hand-written error type, following the layout `error_chain!` would expand to, minus the chain
//! state. Foreign errors that only appear with the `drawing` feature are gated the same way.
//! ```ignore
//! errors {
//!   InvalidConfiguration(String)
//!   InvalidArgument(String)
//! }
//! foreign_links {
//!   IoError(std::io::Error);
//!   ImageError(image::ImageError);
//! }
//! ```

#[derive(Debug)]
pub enum Error {
  /// Configuration that makes a sweep undefined: no seeds, zero resolution, empty canvas, ...
  InvalidConfiguration(String),
  /// Malformed command line input.
  InvalidArgument(String),
  IoError(std::io::Error),
  #[cfg(feature = "image")]
  ImageError(image::ImageError),
}

impl Error {
  pub fn invalid_configuration(msg: impl Into<String>) -> Self {
    Error::InvalidConfiguration(msg.into())
  }

  pub fn invalid_argument(msg: impl Into<String>) -> Self {
    Error::InvalidArgument(msg.into())
  }

  /// A short name of the error kind.
  pub fn description(&self) -> &str {
    use Error::*;
    match *self {
      InvalidConfiguration(_) => stringify!(InvalidConfiguration),
      InvalidArgument(_) => stringify!(InvalidArgument),
      IoError(_) => stringify!(IoError),
      #[cfg(feature = "image")]
      ImageError(_) => stringify!(ImageError),
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::IoError(e)
  }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error::ImageError(e)
  }
}

impl ::std::fmt::Display for Error {
  fn fmt(&self, fmt: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
    use Error::*;
    match *self {
      InvalidConfiguration(ref msg) => write!(fmt, "invalid configuration: {}", msg),
      InvalidArgument(ref msg) => write!(fmt, "invalid argument: {}", msg),
      IoError(ref err) => write!(fmt, "{}", err),
      #[cfg(feature = "image")]
      ImageError(ref err) => write!(fmt, "{}", err),
    }
  }
}

impl ::std::error::Error for Error {
  fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
    match *self {
      Error::IoError(ref err) => Some(err),
      #[cfg(feature = "image")]
      Error::ImageError(ref err) => Some(err),
      _ => None
    }
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = ::std::result::Result<T, Error>;
