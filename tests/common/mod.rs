//! Shared test fixtures for integration tests.
//!
//! [`TempProject`] is a temporary project directory with helpers for laying
//! down Doxygen-shaped XML fixtures (an `index.xml` plus per-compound detail
//! files under `docs/xml/`). Each test gets its own directory, cleaned up on
//! drop, so tests can run in parallel without interference.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempProject {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempProject {
    /// Creates a new empty temporary project.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this project.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Returns the Doxygen XML output directory (`docs/xml`).
    pub fn xml_dir(&self) -> PathBuf {
        self.root.join("docs").join("xml")
    }

    /// Creates a directory (and all parents) within this project.
    pub fn create_dir(&self, path: &str) {
        let full_path = self.root.join(path);
        std::fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("Failed to create directory '{}': {}", path, e));
    }

    /// Creates a file with the given content, creating parents as needed.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Writes a Doxygen `index.xml` listing the given `(name, kind, refid)`
    /// compounds, in order.
    pub fn write_index(&self, compounds: &[(&str, &str, &str)]) {
        let mut xml = String::from(
            "<?xml version='1.0' encoding='UTF-8' standalone='no'?>\n<doxygenindex version=\"1.9.4\">\n",
        );
        for (name, kind, refid) in compounds {
            xml.push_str(&format!(
                "  <compound refid=\"{refid}\" kind=\"{kind}\"><name>{name}</name></compound>\n"
            ));
        }
        xml.push_str("</doxygenindex>\n");
        self.create_file("docs/xml/index.xml", &xml);
    }

    /// Writes a per-compound detail file as `docs/xml/<refid>.xml`.
    pub fn write_compound(&self, refid: &str, xml: &str) {
        self.create_file(&format!("docs/xml/{refid}.xml"), xml);
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

#[fixture]
#[allow(dead_code)]
pub fn temp_project() -> TempProject {
    TempProject::new()
}

/// Detail document for the Calculator fixture. The descriptions mix plain
/// text with inline markup so flattening (including tail text) is exercised
/// end to end.
#[allow(dead_code)]
pub const CALCULATOR_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.4">
  <compounddef id="classCalculator" kind="class">
    <compoundname>Calculator</compoundname>
    <briefdescription>
      <para>A basic calculator class with <emphasis>arithmetic</emphasis> operations.</para>
    </briefdescription>
    <detaileddescription>
      <para>Maintains a history of calculations. See <ref refid="namespaceMathUtils" kindref="compound">MathUtils</ref> for constants.</para>
    </detaileddescription>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classCalculator_1a01">
        <type>int</type>
        <name>add</name>
        <argsstring>(int, int)</argsstring>
        <briefdescription><para>Adds two numbers.</para></briefdescription>
      </memberdef>
    </sectiondef>
  </compounddef>
</doxygen>
"#;

/// A project with a generated-looking Doxygen XML tree: one class and one
/// namespace in the index, plus the Calculator detail file.
#[allow(dead_code)]
pub fn calculator_project() -> TempProject {
    let project = TempProject::new();
    project.write_index(&[
        ("Calculator", "class", "classCalculator"),
        ("MathUtils", "namespace", "namespaceMathUtils"),
    ]);
    project.write_compound("classCalculator", CALCULATOR_XML);
    project
}

#[fixture]
#[allow(dead_code)]
pub fn calculator_fixture() -> TempProject {
    calculator_project()
}
