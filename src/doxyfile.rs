//! Doxyfile generation from typed configuration.
//!
//! Renders the subset of Doxygen settings this server manages into Doxyfile
//! text. `GENERATE_XML` is always on: the query engine reads the XML output.

use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Source language presets controlling file patterns and output optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    C,
    Python,
    Java,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::Python => "python",
            Self::Java => "java",
        }
    }

    /// FILE_PATTERNS for this language.
    pub fn file_patterns(self) -> &'static [&'static str] {
        match self {
            Self::Cpp => &["*.cpp", "*.hpp", "*.cc", "*.hh", "*.cxx", "*.hxx"],
            Self::C => &["*.c", "*.h"],
            Self::Python => &["*.py"],
            Self::Java => &["*.java"],
        }
    }

    fn optimize_output_for_c(self) -> bool {
        self == Self::C
    }

    /// Doxygen uses its Java mode for Python output as well.
    fn optimize_output_java(self) -> bool {
        matches!(self, Self::Python | Self::Java)
    }
}

/// Typed Doxygen configuration rendered by [`DoxyfileConfig::to_doxyfile`].
#[derive(Debug, Clone)]
pub struct DoxyfileConfig {
    pub project_name: String,
    pub output_directory: String,
    pub input: String,
    pub file_patterns: Vec<String>,
    pub recursive: bool,
    pub extract_all: bool,
    pub extract_private: bool,
    pub optimize_output_for_c: bool,
    pub optimize_output_java: bool,
    pub source_browser: bool,
    pub generate_html: bool,
    pub generate_latex: bool,
    pub generate_xml: bool,
    pub quiet: bool,
}

impl Default for DoxyfileConfig {
    fn default() -> Self {
        Self {
            project_name: "My Project".to_string(),
            output_directory: "./docs".to_string(),
            input: ".".to_string(),
            file_patterns: Language::Cpp
                .file_patterns()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            recursive: true,
            extract_all: true,
            extract_private: false,
            optimize_output_for_c: false,
            optimize_output_java: false,
            source_browser: true,
            generate_html: true,
            generate_latex: false,
            generate_xml: true,
            quiet: true,
        }
    }
}

impl DoxyfileConfig {
    /// Default configuration with a language preset applied.
    pub fn for_language(language: Language) -> Self {
        Self {
            file_patterns: language
                .file_patterns()
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            optimize_output_for_c: language.optimize_output_for_c(),
            optimize_output_java: language.optimize_output_java(),
            ..Self::default()
        }
    }

    /// Renders the configuration as Doxyfile text.
    ///
    /// Keys are left-padded to 23 columns, booleans render `YES`/`NO`, the
    /// project name and output directory are quoted, and file patterns are
    /// space-joined, matching the layout `doxygen -g` itself produces.
    pub fn to_doxyfile(&self) -> String {
        let mut out = String::new();
        entry(&mut out, "PROJECT_NAME", &format!("\"{}\"", self.project_name));
        entry(
            &mut out,
            "OUTPUT_DIRECTORY",
            &format!("\"{}\"", self.output_directory),
        );
        entry(&mut out, "INPUT", &self.input);
        entry(&mut out, "FILE_PATTERNS", &self.file_patterns.join(" "));
        entry(&mut out, "RECURSIVE", yes_no(self.recursive));
        entry(&mut out, "EXTRACT_ALL", yes_no(self.extract_all));
        entry(&mut out, "EXTRACT_PRIVATE", yes_no(self.extract_private));
        entry(
            &mut out,
            "OPTIMIZE_OUTPUT_FOR_C",
            yes_no(self.optimize_output_for_c),
        );
        entry(
            &mut out,
            "OPTIMIZE_OUTPUT_JAVA",
            yes_no(self.optimize_output_java),
        );
        entry(&mut out, "SOURCE_BROWSER", yes_no(self.source_browser));
        entry(&mut out, "GENERATE_HTML", yes_no(self.generate_html));
        entry(&mut out, "GENERATE_LATEX", yes_no(self.generate_latex));
        entry(&mut out, "GENERATE_XML", yes_no(self.generate_xml));
        entry(&mut out, "QUIET", yes_no(self.quiet));
        out
    }
}

fn entry(out: &mut String, key: &str, value: &str) {
    // String's fmt::Write never fails.
    let _ = writeln!(out, "{key:<23}= {value}");
}

const fn yes_no(value: bool) -> &'static str {
    if value { "YES" } else { "NO" }
}
