// src/graph/lang.rs
//! Language detection from file extensions.

const EXTENSIONS: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".ts", "TypeScript"),
    (".java", "Java"),
    (".cpp", "C++"),
    (".c", "C"),
    (".go", "Go"),
    (".rb", "Ruby"),
    (".kt", "Kotlin"),
    (".swift", "Swift"),
];

pub const UNKNOWN: &str = "Unknown";

/// Returns the language name for a file name, or `Unknown`.
#[must_use]
pub fn detect(file_name: &str) -> &'static str {
    EXTENSIONS
        .iter()
        .find(|(ext, _)| file_name.ends_with(ext))
        .map_or(UNKNOWN, |(_, lang)| *lang)
}
