//! Compound index loading, symbol resolution, and detail fetching.

use super::text::flatten;
use crate::error::FetchError;
use regex::Regex;
use roxmltree::{Document, Node};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Doxygen refids are used as file names; reject anything that could walk
/// out of the XML directory.
static REFID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap());

/// One entry from `index.xml`: a documented compound and the refid that
/// locates its detail document.
#[derive(Debug, Clone)]
pub struct CompoundRef {
    pub name: String,
    pub kind: String,
    pub refid: String,
}

/// Fully resolved compound details, built fresh for every lookup.
#[derive(Debug, Clone)]
pub struct CompoundDetail {
    pub name: String,
    pub kind: String,
    pub brief: String,
    pub detailed: String,
    pub members: Vec<MemberInfo>,
}

/// One member declaration from a compound's detail document.
#[derive(Debug, Clone)]
pub struct MemberInfo {
    pub name: String,
    pub kind: String,
    pub type_text: String,
    pub args: String,
    pub brief: String,
}

/// Query engine over one Doxygen XML output directory.
///
/// The compound table is read once at construction and never refreshed;
/// rebuild the engine after regenerating documentation. Detail files are
/// re-read and re-parsed per query, a deliberate simplicity/latency
/// trade-off since Doxygen projects are typically small to moderate.
#[derive(Debug)]
pub struct QueryEngine {
    xml_dir: PathBuf,
    compounds: Vec<CompoundRef>,
}

impl QueryEngine {
    /// Creates an engine over the given XML directory.
    ///
    /// A missing `index.xml` is not an error: callers may query before
    /// documentation has been generated and simply find nothing. A malformed
    /// index is logged and treated the same way.
    pub fn new<P: AsRef<Path>>(xml_dir: P) -> Self {
        let xml_dir = xml_dir.as_ref().to_path_buf();
        let compounds = load_index(&xml_dir);
        Self { xml_dir, compounds }
    }

    /// All known compounds, in index order.
    pub fn compounds(&self) -> &[CompoundRef] {
        &self.compounds
    }

    pub fn compound_count(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Looks up a compound by name and fetches its details.
    ///
    /// Exact name match wins; otherwise the first compound (in index order)
    /// whose name contains `name` case-insensitively is used. `Ok(None)`
    /// means no compound matched at all, which is a normal outcome distinct
    /// from a fetch error for a compound whose detail file is missing or
    /// corrupt.
    pub fn query_symbol(&self, name: &str) -> Result<Option<CompoundDetail>, FetchError> {
        if let Some(compound) = self.compounds.iter().find(|c| c.name == name) {
            return self.fetch(&compound.refid).map(Some);
        }

        // First substring match in insertion order, deliberately unranked.
        let needle = name.to_lowercase();
        if let Some(compound) = self
            .compounds
            .iter()
            .find(|c| c.name.to_lowercase().contains(&needle))
        {
            return self.fetch(&compound.refid).map(Some);
        }

        Ok(None)
    }

    /// All compound names in index order, optionally restricted to one kind.
    pub fn list_symbols(&self, kind_filter: Option<&str>) -> Vec<String> {
        self.compounds
            .iter()
            .filter(|c| kind_filter.is_none_or(|kind| c.kind == kind))
            .map(|c| c.name.clone())
            .collect()
    }

    /// Loads and parses the detail document for a refid.
    pub fn fetch(&self, refid: &str) -> Result<CompoundDetail, FetchError> {
        if !REFID_RE.is_match(refid) {
            return Err(FetchError::InvalidRefid {
                refid: refid.to_string(),
            });
        }

        let path = self.xml_dir.join(format!("{refid}.xml"));
        if !path.exists() {
            return Err(FetchError::MissingDetail { path });
        }

        let xml = std::fs::read_to_string(&path).map_err(|e| FetchError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let doc = Document::parse(&xml).map_err(|e| FetchError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let compounddef = find_child(doc.root_element(), "compounddef").ok_or_else(|| {
            FetchError::Parse {
                path: path.clone(),
                message: "missing <compounddef> element".to_string(),
            }
        })?;

        let mut members = Vec::new();
        for section in compounddef
            .children()
            .filter(|n| n.has_tag_name("sectiondef"))
        {
            for member in section.children().filter(|n| n.has_tag_name("memberdef")) {
                members.push(MemberInfo {
                    name: child_text(member, "name"),
                    kind: member.attribute("kind").unwrap_or_default().to_string(),
                    type_text: flatten(find_child(member, "type")),
                    args: flatten(find_child(member, "argsstring")),
                    brief: flatten(find_child(member, "briefdescription")),
                });
            }
        }

        Ok(CompoundDetail {
            name: child_text(compounddef, "compoundname"),
            kind: compounddef.attribute("kind").unwrap_or_default().to_string(),
            brief: flatten(find_child(compounddef, "briefdescription")),
            detailed: flatten(find_child(compounddef, "detaileddescription")),
            members,
        })
    }
}

/// Reads the compound table from `index.xml`, if present and well-formed.
fn load_index(xml_dir: &Path) -> Vec<CompoundRef> {
    let index_path = xml_dir.join("index.xml");
    if !index_path.exists() {
        tracing::debug!(
            path = %index_path.display(),
            "No index.xml found, starting with an empty compound table"
        );
        return Vec::new();
    }

    match parse_index(&index_path) {
        Ok(compounds) => {
            tracing::info!(
                path = %index_path.display(),
                compounds = compounds.len(),
                "Loaded compound index"
            );
            compounds
        }
        Err(e) => {
            // A partially failed documentation run must not break the query
            // path; treat it as "no index available".
            tracing::warn!(
                path = %index_path.display(),
                error = %e,
                "Failed to load compound index"
            );
            Vec::new()
        }
    }
}

fn parse_index(path: &Path) -> crate::error::Result<Vec<CompoundRef>> {
    let xml = std::fs::read_to_string(path)?;
    let doc = Document::parse(&xml)?;

    let mut compounds: Vec<CompoundRef> = Vec::new();
    for compound in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("compound"))
    {
        let Some(name) = find_child(compound, "name").and_then(|n| n.text()) else {
            continue;
        };
        let name = name.to_string();

        // First-seen wins for duplicate names so exact match, substring
        // match, and listing all observe the same entry.
        if compounds.iter().any(|c| c.name == name) {
            tracing::debug!(name = %name, "Duplicate compound name in index, keeping first entry");
            continue;
        }

        compounds.push(CompoundRef {
            name,
            kind: compound.attribute("kind").unwrap_or_default().to_string(),
            refid: compound.attribute("refid").unwrap_or_default().to_string(),
        });
    }

    Ok(compounds)
}

fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn child_text(node: Node<'_, '_>, tag: &str) -> String {
    find_child(node, tag)
        .and_then(|n| n.text())
        .unwrap_or("")
        .trim()
        .to_string()
}
