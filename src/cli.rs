//! Command-line flag handling for the `uuid` binary.
//!
//! Flags are parsed into an explicit [`Options`] value that [`run`] dispatches to exactly one of
//! the entry point functions.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::{entry, timestamp, Error};

/// UUID version selected by `-4`, `-6` or `-7`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UuidVersion {
    /// Random UUID.
    V4,
    /// Time-ordered UUID with a Gregorian timestamp.
    V6,
    /// Time-ordered UUID with a Unix millisecond timestamp.
    V7,
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::V4 => "4",
            Self::V6 => "6",
            Self::V7 => "7",
        })
    }
}

/// Parsed generation flags.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Options {
    /// Explicitly requested version, if any.
    pub version: Option<UuidVersion>,
    /// Raw value of `-t`/`--timestamp`, parsed only when dispatched.
    pub timestamp: Option<String>,
}

/// What the command line asks for.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Command {
    /// Print one UUID.
    Generate(Options),
    /// Print the usage text.
    Help,
    /// Print the version string.
    Version,
}

/// Errors in the command-line arguments themselves.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum UsageError {
    /// An argument matched no known flag.
    #[error("unrecognized argument '{0}'")]
    UnrecognizedArgument(String),

    /// `-t` or `--timestamp` was the last argument.
    #[error("argument to option 'timestamp' missing")]
    MissingTimestamp,

    /// `-t` or `--timestamp` was given twice.
    #[error("option 'timestamp' given more than once")]
    DuplicateTimestamp,

    /// Two different version flags were given.
    #[error("flags -{0} and -{1} are mutually exclusive")]
    ConflictingVersions(UuidVersion, UuidVersion),

    /// A timestamp was combined with `-4` or `-6`.
    #[error("timestamp flag (-t) is only supported with UUIDv7; use 'uuid -t {0}' or 'uuid -7 -t {0}'")]
    TimestampRequiresV7(String),
}

/// Returns the usage text for the program named `program`.
pub fn usage(program: &str) -> String {
    format!(
        "Generate UUIDs from the command line.

Usage: {program} [-4 | -6 | -7] [-t <timestamp>]

Options:
  -4                          Generate UUIDv4 (default)
  -6                          Generate UUIDv6
  -7                          Generate UUIDv7 (contains timestamp)
  -t, --timestamp <value>     Generate UUIDv7 from a timestamp (Unix seconds or
                              milliseconds, RFC3339, ISO date, or date-time)
  -h, --help                  Print this help
  -v, --version               Print version

UUIDv6 and UUIDv7 embed their creation time. Use UUIDv4 when that is not acceptable.

Examples:
  {program}                          # UUIDv4
  {program} -7                       # UUIDv7 from the current time
  {program} -t 1686742245            # UUIDv7 from Unix seconds
  {program} -t 2023-06-14            # UUIDv7 from a date
  {program} -t '2023-06-14 10:30:45' # UUIDv7 from a date-time
"
    )
}

/// Returns the package version, suffixed with `+<build>` when `UUIDGEN_BUILD` was set at compile
/// time.
pub fn version_string() -> String {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    match option_env!("UUIDGEN_BUILD") {
        Some(build) if !build.is_empty() && build != "unknown" => format!("{VERSION}+{build}"),
        _ => VERSION.to_owned(),
    }
}

/// Parses the command-line arguments following the program name.
///
/// # Errors
///
/// Returns [`UsageError`] on an unknown argument, a missing or repeated timestamp, two different
/// version flags, or a timestamp combined with `-4` or `-6`.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, UsageError> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if let Some(value) = arg.strip_prefix("--timestamp=") {
            set_timestamp(&mut options, value.to_owned())?;
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-v" | "--version" => return Ok(Command::Version),
            "-4" => set_version(&mut options, UuidVersion::V4)?,
            "-6" => set_version(&mut options, UuidVersion::V6)?,
            "-7" => set_version(&mut options, UuidVersion::V7)?,
            "-t" | "--timestamp" => {
                let value = args.next().ok_or(UsageError::MissingTimestamp)?;
                set_timestamp(&mut options, value)?;
            }
            other => return Err(UsageError::UnrecognizedArgument(other.to_owned())),
        }
    }

    if let (Some(value), Some(UuidVersion::V4 | UuidVersion::V6)) =
        (&options.timestamp, options.version)
    {
        return Err(UsageError::TimestampRequiresV7(value.clone()));
    }
    Ok(Command::Generate(options))
}

fn set_version(options: &mut Options, version: UuidVersion) -> Result<(), UsageError> {
    match options.version.replace(version) {
        Some(prev) if prev != version => Err(UsageError::ConflictingVersions(prev, version)),
        _ => Ok(()),
    }
}

fn set_timestamp(options: &mut Options, value: String) -> Result<(), UsageError> {
    if options.timestamp.is_some() {
        return Err(UsageError::DuplicateTimestamp);
    }
    options.timestamp = Some(value);
    Ok(())
}

/// Generates the one UUID string that `options` asks for.
///
/// A timestamp always selects UUIDv7; [`parse_args`] is responsible for rejecting it alongside
/// another version. Without flags, a UUIDv4 is generated.
///
/// # Errors
///
/// Returns [`Error::Timestamp`] if the timestamp cannot be parsed, or any error of the entry point
/// function called.
pub fn run(options: &Options) -> Result<String, Error> {
    if let Some(input) = &options.timestamp {
        let timestamp = timestamp::parse_timestamp(input)?;
        debug!(%input, %timestamp, "generating UUIDv7 from timestamp");
        return entry::generate_v7_with_timestamp(timestamp);
    }

    let version = options.version.unwrap_or(UuidVersion::V4);
    debug!(%version, "generating UUID");
    match version {
        UuidVersion::V4 => entry::generate_v4(),
        UuidVersion::V6 => entry::generate_v6(),
        UuidVersion::V7 => entry::generate_v7(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, run, usage, version_string, Command, Options, UsageError, UuidVersion};
    use crate::{timestamp::ParseTimestampError, Error, Uuid};
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Command, UsageError> {
        parse_args(args.iter().map(|&e| e.to_owned()))
    }

    fn generate(version: Option<UuidVersion>, timestamp: Option<&str>) -> Options {
        Options {
            version,
            timestamp: timestamp.map(str::to_owned),
        }
    }

    /// Accepts every valid flag combination
    #[test]
    fn accepts_every_valid_flag_combination() {
        let cases: &[(&[&str], Options)] = &[
            (&[], generate(None, None)),
            (&["-4"], generate(Some(UuidVersion::V4), None)),
            (&["-6"], generate(Some(UuidVersion::V6), None)),
            (&["-7"], generate(Some(UuidVersion::V7), None)),
            (&["-7", "-7"], generate(Some(UuidVersion::V7), None)),
            (&["-t", "2023-06-14"], generate(None, Some("2023-06-14"))),
            (&["--timestamp", "1686742245"], generate(None, Some("1686742245"))),
            (&["--timestamp=1686742245"], generate(None, Some("1686742245"))),
            (
                &["-7", "-t", "2023-06-14 10:30:45"],
                generate(Some(UuidVersion::V7), Some("2023-06-14 10:30:45")),
            ),
            (
                &["-t", "2023-06-14", "-7"],
                generate(Some(UuidVersion::V7), Some("2023-06-14")),
            ),
        ];

        for (args, expected) in cases {
            assert_eq!(parse(args), Ok(Command::Generate(expected.clone())), "{args:?}");
        }
    }

    /// Recognizes help and version flags
    #[test]
    fn recognizes_help_and_version_flags() {
        assert_eq!(parse(&["-h"]), Ok(Command::Help));
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
        assert_eq!(parse(&["-7", "--help"]), Ok(Command::Help));
        assert_eq!(parse(&["-v"]), Ok(Command::Version));
        assert_eq!(parse(&["--version"]), Ok(Command::Version));
    }

    /// Rejects invalid flag combinations
    #[test]
    fn rejects_invalid_flag_combinations() {
        use UuidVersion::{V4, V6, V7};
        let cases: &[(&[&str], UsageError)] = &[
            (&["-4", "-6"], UsageError::ConflictingVersions(V4, V6)),
            (&["-6", "-7"], UsageError::ConflictingVersions(V6, V7)),
            (&["-7", "-4"], UsageError::ConflictingVersions(V7, V4)),
            (
                &["-4", "-t", "1686742245"],
                UsageError::TimestampRequiresV7("1686742245".to_owned()),
            ),
            (
                &["-t", "2023-06-14", "-6"],
                UsageError::TimestampRequiresV7("2023-06-14".to_owned()),
            ),
            (&["-t"], UsageError::MissingTimestamp),
            (&["--timestamp"], UsageError::MissingTimestamp),
            (&["-t", "1", "-t", "2"], UsageError::DuplicateTimestamp),
            (&["-t", "1", "--timestamp=2"], UsageError::DuplicateTimestamp),
            (&["-5"], UsageError::UnrecognizedArgument("-5".to_owned())),
            (&["v4"], UsageError::UnrecognizedArgument("v4".to_owned())),
        ];

        for (args, expected) in cases {
            assert_eq!(parse(args), Err(expected.clone()), "{args:?}");
        }
    }

    /// Explains how to combine the timestamp flag
    #[test]
    fn explains_how_to_combine_timestamp_flag() {
        let message = parse(&["-6", "-t", "2023-06-14"]).unwrap_err().to_string();
        assert!(message.contains("only supported with UUIDv7"));
        assert!(message.contains("'uuid -7 -t 2023-06-14'"));
        assert_eq!(
            parse(&["-4", "-7"]).unwrap_err().to_string(),
            "flags -4 and -7 are mutually exclusive"
        );
    }

    /// Dispatches to the requested version
    #[test]
    fn dispatches_to_requested_version() {
        let cases = [
            (None, 4),
            (Some(UuidVersion::V4), 4),
            (Some(UuidVersion::V6), 6),
            (Some(UuidVersion::V7), 7),
        ];
        for (version, expected) in cases {
            let text = run(&generate(version, None)).unwrap();
            assert_eq!(text.len(), 36);
            assert_eq!(text.parse::<Uuid>().unwrap().version(), Some(expected));
        }
    }

    /// Dispatches a timestamp to UUIDv7 with the parsed time embedded
    #[test]
    fn dispatches_timestamp_to_uuid_v7() {
        for input in [
            "1686742245",
            "1686742245123",
            "2023-06-14T10:30:45Z",
            "2023-06-14T10:30:45-05:00",
            "2023-06-14T10:30:45",
            "2023-06-14",
            "2023-06-14 10:30:45",
        ] {
            let expected = crate::timestamp::parse_timestamp(input).unwrap();
            let e: Uuid = run(&generate(None, Some(input))).unwrap().parse().unwrap();
            assert_eq!(e.version(), Some(7), "{input}");
            assert_eq!(e.unix_ts_ms() as i64, expected.timestamp_millis(), "{input}");
        }
    }

    /// Propagates timestamp errors without generating anything
    #[test]
    fn propagates_timestamp_errors() {
        assert!(matches!(
            run(&generate(None, Some("not-a-timestamp"))),
            Err(Error::Timestamp(ParseTimestampError::Unrecognized(_)))
        ));
        assert!(matches!(
            run(&generate(None, Some(""))),
            Err(Error::Timestamp(ParseTimestampError::Empty))
        ));
        assert!(matches!(
            run(&generate(None, Some("1969-12-31"))),
            Err(Error::TimestampOutOfRange(_))
        ));
    }

    /// Prints usage and version text
    #[test]
    fn prints_usage_and_version_text() {
        let text = usage("uuid");
        assert!(text.contains("Usage: uuid [-4 | -6 | -7] [-t <timestamp>]"));
        assert!(text.contains("--timestamp"));
        assert!(version_string().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
