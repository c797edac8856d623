use tracing::info;
use xuangu_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/xuangu/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let path = Config::write_default()?;
        info!("Wrote default config to {}", path.display());
        println!("Created {}", path.display());
        Ok(())
    }
}
