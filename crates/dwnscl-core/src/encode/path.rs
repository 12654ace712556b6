//! Output file naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended after the scale text.
const SUFFIX: &str = "dwnscl.png";

/// Path of the pixelated output for `input`.
///
/// The input's extension is dropped and `_<scale_text>dwnscl.png` is
/// appended, so `photos/cat.jpg` at scale `8` becomes
/// `photos/cat_8dwnscl.png`. `scale_text` is used verbatim, as typed.
pub fn output_path(input: &Path, scale_text: &str) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(format!("_{}{}", scale_text, SUFFIX));

    input.with_file_name(name)
}
