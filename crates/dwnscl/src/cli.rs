//! Command line parsing.
//!
//! Anything that is not exactly `<path> [scale]` with an integer scale is a
//! usage error: the caller prints [`USAGE`] and exits successfully without
//! touching the file system.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

pub const USAGE: &str = "dwnscl: downscales images\nusage: dwnscl <path/to/image> [strength int]\n";

/// Scale text used when none is given.
pub const DEFAULT_SCALE: &str = "8";

#[derive(Debug, Parser)]
#[command(name = "dwnscl", about = "downscales images", disable_version_flag = true)]
struct Args {
    /// Image to pixelate (PNG or JPEG)
    input: PathBuf,

    /// Block size in pixels
    #[arg(allow_hyphen_values = true)]
    scale: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseScaleError {
    #[error("empty scale")]
    Empty,

    #[error("{0:?} is not an integer")]
    Invalid(String),

    #[error("{0:?} is out of range")]
    OutOfRange(String),
}

#[derive(Debug, Error)]
pub enum UsageError {
    #[error(transparent)]
    Arguments(#[from] clap::Error),

    #[error("bad scale: {0}")]
    Scale(#[from] ParseScaleError),
}

/// A validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    /// The scale exactly as typed; it becomes part of the output file name.
    pub scale_text: String,
    pub scale_value: i64,
}

/// Parse the full argument list, program name included.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    let scale_text = args.scale.unwrap_or_else(|| DEFAULT_SCALE.to_string());
    let scale_value = parse_scale(&scale_text)?;

    Ok(Invocation {
        input: args.input,
        scale_text,
        scale_value,
    })
}

/// Parse an integer literal with an optional sign and base prefix.
///
/// `0x`, `0o` and `0b` select hex, octal and binary; a bare leading `0`
/// selects octal. Underscores may separate digits or follow a prefix.
pub fn parse_scale(text: &str) -> Result<i64, ParseScaleError> {
    let invalid = || ParseScaleError::Invalid(text.to_string());

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'+') => (false, &text[1..]),
        Some(b'-') => (true, &text[1..]),
        Some(_) => (false, text),
        None => return Err(ParseScaleError::Empty),
    };

    let prefix = unsigned.get(..2).map(|p| p.to_ascii_lowercase());
    let (radix, digits, prefixed) = match prefix.as_deref() {
        Some("0x") => (16, &unsigned[2..], true),
        Some("0o") => (8, &unsigned[2..], true),
        Some("0b") => (2, &unsigned[2..], true),
        _ if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..], true),
        _ => (10, unsigned, false),
    };

    if (digits.starts_with('_') && !prefixed) || digits.ends_with('_') || digits.contains("__") {
        return Err(invalid());
    }
    let digits = digits.replace('_', "");
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    let out_of_range = || ParseScaleError::OutOfRange(text.to_string());
    let magnitude = u64::from_str_radix(&digits, radix).map_err(|_| out_of_range())?;

    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(out_of_range());
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).map_err(|_| out_of_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_argument_uses_default_scale() {
        let inv = parse_args(["dwnscl", "cat.png"]).unwrap();
        assert_eq!(inv.input, PathBuf::from("cat.png"));
        assert_eq!(inv.scale_text, "8");
        assert_eq!(inv.scale_value, 8);
    }

    #[test]
    fn test_explicit_scale() {
        let inv = parse_args(["dwnscl", "cat.png", "16"]).unwrap();
        assert_eq!(inv.scale_text, "16");
        assert_eq!(inv.scale_value, 16);
    }

    #[test]
    fn test_zero_arguments_is_usage() {
        assert!(matches!(parse_args(["dwnscl"]), Err(UsageError::Arguments(_))));
    }

    #[test]
    fn test_three_arguments_is_usage() {
        let result = parse_args(["dwnscl", "a.png", "8", "extra"]);
        assert!(matches!(result, Err(UsageError::Arguments(_))));
    }

    #[test]
    fn test_help_flag_is_usage() {
        assert!(parse_args(["dwnscl", "--help"]).is_err());
    }

    #[test]
    fn test_non_integer_scale_is_usage() {
        let result = parse_args(["dwnscl", "a.png", "big"]);
        assert!(matches!(
            result,
            Err(UsageError::Scale(ParseScaleError::Invalid(_)))
        ));
    }

    #[test]
    fn test_negative_scale_parses() {
        // Rejected later as an invalid scale, not as a usage error.
        let inv = parse_args(["dwnscl", "a.png", "-3"]).unwrap();
        assert_eq!(inv.scale_value, -3);
    }

    #[test]
    fn test_negative_prefixed_scale_reaches_parser() {
        for (text, value) in [("-0x8", -8), ("-0b1", -1), ("-1_000", -1000), ("-010", -8)] {
            let inv = parse_args(["dwnscl", "a.png", text]).unwrap();
            assert_eq!(inv.scale_value, value, "{text:?}");
            assert_eq!(inv.scale_text, text);
        }
    }

    #[test]
    fn test_parse_scale_decimal() {
        assert_eq!(parse_scale("8"), Ok(8));
        assert_eq!(parse_scale("+12"), Ok(12));
        assert_eq!(parse_scale("0"), Ok(0));
        assert_eq!(parse_scale("1_000"), Ok(1000));
    }

    #[test]
    fn test_parse_scale_prefixes() {
        assert_eq!(parse_scale("0x10"), Ok(16));
        assert_eq!(parse_scale("0XfF"), Ok(255));
        assert_eq!(parse_scale("0o17"), Ok(15));
        assert_eq!(parse_scale("0b101"), Ok(5));
        assert_eq!(parse_scale("010"), Ok(8));
        assert_eq!(parse_scale("0x_1f"), Ok(31));
        assert_eq!(parse_scale("-0x8"), Ok(-8));
    }

    #[test]
    fn test_parse_scale_rejects_malformed() {
        for text in ["", "-", "abc", "1.5", "08", "0x", "_1", "1_", "1__0", "0x+5", " 8", "8px"] {
            assert!(parse_scale(text).is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn test_parse_scale_limits() {
        assert_eq!(parse_scale("9223372036854775807"), Ok(i64::MAX));
        assert_eq!(parse_scale("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            parse_scale("9223372036854775808"),
            Err(ParseScaleError::OutOfRange("9223372036854775808".to_string()))
        );
        assert!(matches!(
            parse_scale("0x1_0000_0000_0000_0000"),
            Err(ParseScaleError::OutOfRange(_))
        ));
    }
}
