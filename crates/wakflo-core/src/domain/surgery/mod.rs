//! Text surgery on generated files.
//!
//! Three pure string-to-string operations, each working on the whole content
//! of one file. None of them touch the filesystem; the resource service loads
//! the files, runs these, and stages the results.

mod anchor;
mod declarations;
mod section;

pub use anchor::{RegistryAnchor, insert_after_anchor};
pub use declarations::{declaration_identifier, merge_declarations};
pub use section::{find_section, upsert_section};
