pub mod change_set;
pub mod manifest;
pub mod render_context;
pub mod resource;

pub use change_set::{ChangeSet, StagedWrite};
pub use manifest::{INITIAL_VERSION, IntegrationManifest, parse_authors};
pub use render_context::RenderContext;
pub use resource::ResourceMetadata;
