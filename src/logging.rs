use {
  super::*,
  anyhow::{Context, anyhow},
  std::{fs::OpenOptions, sync::Mutex},
  tracing_subscriber::{EnvFilter, filter::LevelFilter},
};

const LOG_ENV_VAR: &str = "THREADS_LOG";

/// Logs go to a file; the terminal belongs to the interface.
pub(crate) fn init(config: &Config) -> Result {
  let Some(path) = config.log_path() else {
    return Ok(());
  };

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).with_context(|| {
      format!("failed to create log directory {}", parent.display())
    })?;
  }

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(&path)
    .with_context(|| format!("failed to open log file {}", path.display()))?;

  let env_filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .with_env_var(LOG_ENV_VAR)
    .from_env_lossy();

  tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|error| anyhow!("failed to install log subscriber: {error}"))?;

  tracing::info!(path = %path.display(), "logging initialized");

  Ok(())
}
