//! Env-style configuration files.
//!
//! Each line holds one `key=value` or `key:value` pair. Blank lines, comments,
//! section headers and lines that don't split into exactly two parts are
//! skipped.

use std::path::{Path, PathBuf};

use toml::Value;
use tracing::{debug, trace};

use super::source::{read_source, RawSource};
use super::LoadError;
use crate::RawMapping;

/// File read when no path is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Lines starting with any of these are never key/value pairs.
const SKIPPED_LINE_PREFIXES: &[char] = &['/', '!', '@', '#', ';', ':', '=', '[', ']'];

/// Splits one line into a key/value pair.
///
/// The line is trimmed, then split on every `=` and `:` with empty pieces
/// dropped. The pieces themselves are returned untrimmed, so `a = b` yields
/// `("a ", " b")`.
///
/// ```
/// use envbind::parse_line;
///
/// assert_eq!(parse_line("name=alice"), Some(("name", "alice")));
/// assert_eq!(parse_line("age:30"), Some(("age", "30")));
/// assert_eq!(parse_line("# comment"), None);
/// assert_eq!(parse_line("justtext"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(SKIPPED_LINE_PREFIXES) {
        return None;
    }

    let mut parts = line.split(['=', ':']).filter(|part| !part.is_empty());
    let (key, value) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    if key.starts_with('[') && value.ends_with(']') {
        return None;
    }

    Some((key, value))
}

/// A configuration source that loads from an env-style file.
///
/// Every value is kept as the string found in the file; the binder parses it
/// into the field's type.
#[derive(Debug, Clone)]
pub struct EnvFileSource {
    path: PathBuf,
    required: bool,
}

impl EnvFileSource {
    /// Creates a new env file source; an empty path means [`DEFAULT_ENV_FILE`].
    ///
    /// If `required` is true, loading fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        let path = path.as_ref();
        let path = if path.as_os_str().is_empty() {
            Path::new(DEFAULT_ENV_FILE)
        } else {
            path
        };
        Self {
            path: path.to_path_buf(),
            required,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses file contents into a raw mapping. Later keys win.
    pub fn parse(&self, contents: &str) -> RawMapping {
        let mut mapping = RawMapping::new();

        for (index, line) in contents.lines().enumerate() {
            let Some((key, value)) = parse_line(line) else {
                trace!(line = index + 1, "skipping line");
                continue;
            };

            mapping.insert(key.to_string(), Value::String(value.to_string()));
        }

        mapping
    }
}

impl Default for EnvFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_FILE, true)
    }
}

impl RawSource for EnvFileSource {
    fn load(&self) -> Result<RawMapping, LoadError> {
        let Some(contents) = read_source(&self.path, self.required)? else {
            debug!(path = %self.path.display(), "optional env file not found");
            return Ok(RawMapping::new());
        };

        let mapping = self.parse(&contents);
        debug!(path = %self.path.display(), entries = mapping.len(), "loaded env file");
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_pairs() {
        assert_eq!(parse_line("name=alice"), Some(("name", "alice")));
        assert_eq!(parse_line("  age:30  "), Some(("age", "30")));
        assert_eq!(parse_line("a = b"), Some(("a ", " b")));
        assert_eq!(parse_line("key==value"), Some(("key", "value")));
    }

    #[test]
    fn test_parse_line_skips() {
        for line in [
            "",
            "   ",
            "# comment",
            "// comment",
            "; comment",
            "!bang",
            "@at",
            "[section]",
            "]x",
            "=value",
            ":value",
            "justtext",
            "url=http://example.com",
            "key=",
        ] {
            assert_eq!(parse_line(line), None, "line {line:?}");
        }
    }

    #[test]
    fn test_parse_line_bracketed_pair() {
        assert_eq!(parse_line("x[a=b]"), Some(("x[a", "b]")));
    }

    #[test]
    fn test_parse_contents() {
        let source = EnvFileSource::default();
        let mapping = source.parse("name=alice\nage:30\n# comment\n[section]\njusttext\n");

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["name"], Value::String("alice".into()));
        assert_eq!(mapping["age"], Value::String("30".into()));
    }

    #[test]
    fn test_later_keys_win() {
        let mapping = EnvFileSource::default().parse("a=1\na=2\n");
        assert_eq!(mapping["a"], Value::String("2".into()));
    }

    #[test]
    fn test_values_stay_verbatim() {
        let mapping = EnvFileSource::default().parse("version=1.10\nzip=007\nflag=TRUE\n");

        assert_eq!(mapping["version"], Value::String("1.10".into()));
        assert_eq!(mapping["zip"], Value::String("007".into()));
        assert_eq!(mapping["flag"], Value::String("TRUE".into()));
    }

    #[test]
    fn test_empty_path_defaults() {
        let source = EnvFileSource::new("", true);
        assert_eq!(source.path(), Path::new(DEFAULT_ENV_FILE));
    }

    #[test]
    fn test_env_file_loads() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host=localhost").unwrap();
        writeln!(file, "port:5432").unwrap();

        let mapping = EnvFileSource::new(file.path(), true).load().unwrap();
        assert_eq!(mapping["host"], Value::String("localhost".into()));
        assert_eq!(mapping["port"], Value::String("5432".into()));
    }

    #[test]
    fn test_env_file_required_missing() {
        let result = EnvFileSource::new("/nonexistent/path/.env", true).load();
        assert!(matches!(result, Err(LoadError::Missing(_))));
    }

    #[test]
    fn test_env_file_optional_missing() {
        let mapping = EnvFileSource::new("/nonexistent/path/.env", false)
            .load()
            .unwrap();
        assert!(mapping.is_empty());
    }
}
