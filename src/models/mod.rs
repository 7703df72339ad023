//! deps.dev API model types.

mod advisory;
mod dependencies;
mod keys;
mod package;
mod project;
mod search;
pub mod requirements;
mod version;

pub use advisory::*;
pub use dependencies::*;
pub use keys::*;
pub use package::*;
pub use project::*;
pub use search::*;
pub use requirements::Requirements;
pub use version::*;
