//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input,
//! dispatched statically from `main`. Adding a command means adding one
//! file and one match arm.

mod init;
mod parse;
mod patch;
mod version;

pub use init::InitStrategy;
pub use parse::{ParseInput, ParseStrategy};
pub use patch::{PatchInput, PatchStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
