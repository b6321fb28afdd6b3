// RUST LEARNING: Each subcommand lives in its own file and is re-exported here
pub mod completions;
pub mod resolve;
pub mod update_file;

pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use update_file::{TargetKind, UpdateFileCommand};
