#[doc(hidden)]
pub use log as __log;

/// Evaluate an expression and log how long it took, at debug level.
#[macro_export]
macro_rules! profile(
  ($title: expr, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    $crate::util::__log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human readable byte count, `1.17 MiB`.
pub fn byte_size(bytes: usize) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::BINARY)
    .unwrap_or_else(|_| format!("{} B", bytes))
}
