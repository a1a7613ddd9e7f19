//! Source locations attached to frames

use std::fmt;

/// A point in the source where an error was raised or re-annotated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Source file name (basename when captured by `here!`)
    pub file: String,

    /// Line number within `file`
    pub line: u32,

    /// Enclosing function name, without module path
    pub function: String,
}

impl Location {
    /// Create a location from explicit parts
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Build a location from raw `file!()` output and a type-name probe.
    ///
    /// This is what `here!()` expands to; the path is reduced to its basename
    /// and the function path to its last segment.
    #[doc(hidden)]
    pub fn capture(file: &str, line: u32, function_path: &str) -> Self {
        Self::new(file_basename(file), line, function_name(function_path))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} | {}()", self.file, self.line, self.function)
    }
}

/// Strip directories from a source path, accepting both `/` and `\` separators
pub fn file_basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Reduce a type-name probe such as `my_crate::io::flush::__here` to `flush`.
///
/// Closure and async-block suffixes are dropped so a frame raised inside a
/// closure still names the function that owns it.
pub fn function_name(probe: &str) -> &str {
    let mut path = probe.strip_suffix("::__here").unwrap_or(probe);
    while let Some(stripped) = path
        .strip_suffix("::{{closure}}")
        .or_else(|| path.strip_suffix("::{{async_block}}"))
    {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}
