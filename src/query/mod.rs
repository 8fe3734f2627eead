//! Query engine over Doxygen's generated XML.
//!
//! Doxygen writes an `index.xml` listing every documented compound (class,
//! struct, namespace, file) plus one `<refid>.xml` detail file per compound.
//! The engine loads the index once at construction and reads detail files
//! on demand; details are never cached, each lookup re-reads the file.

mod engine;
mod text;

pub use engine::{CompoundDetail, CompoundRef, MemberInfo, QueryEngine};
pub use text::flatten;
