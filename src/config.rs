use {
  super::*,
  anyhow::{Context, bail},
  reqwest::Url,
};

const CONFIG_DIR_NAME: &str = "threads";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) base_url: String,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) page_size: usize,
  pub(crate) post_id: Option<u64>,
  pub(crate) posts: bool,
  pub(crate) request_timeout_secs: u64,
  pub(crate) sort_by: SortField,
  pub(crate) sort_order: SortOrder,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:8080".into(),
      log_file: None,
      page_size: 10,
      post_id: None,
      posts: false,
      request_timeout_secs: 10,
      sort_by: SortField::CreatedAt,
      sort_order: SortOrder::Desc,
    }
  }
}

impl Config {
  pub(crate) const MAX_PAGE_SIZE: usize = 100;

  fn apply_overrides(
    &mut self,
    lookup: impl Fn(&str) -> Option<String>,
  ) -> Result {
    if let Some(url) = lookup("THREADS_URL") {
      self.base_url = url;
    }

    if let Some(page_size) = lookup("THREADS_PAGE_SIZE") {
      self.page_size = page_size
        .trim()
        .parse()
        .with_context(|| format!("invalid THREADS_PAGE_SIZE `{page_size}`"))?;
    }

    if let Some(post_id) = lookup("THREADS_POST_ID") {
      self.post_id = Some(
        post_id
          .trim()
          .parse()
          .with_context(|| format!("invalid THREADS_POST_ID `{post_id}`"))?,
      );
    }

    Ok(())
  }

  pub(crate) fn base_url(&self) -> Result<Url> {
    Url::parse(&self.base_url)
      .with_context(|| format!("invalid base_url `{}`", self.base_url))
  }

  fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("THREADS_CONFIG") {
      return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
  }

  pub(crate) fn load() -> Result<Self> {
    let mut config = match Self::config_path() {
      Some(path) => Self::load_from(&path)?,
      None => Self::default(),
    };

    config.apply_overrides(|key| env::var(key).ok())?;

    config.validate()?;

    Ok(config)
  }

  /// A missing file yields the defaults.
  pub(crate) fn load_from(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let raw = fs::read_to_string(path)
      .with_context(|| format!("failed to read config file at {}", path.display()))?;

    toml::from_str(&raw).with_context(|| {
      format!("failed to parse TOML config file at {}", path.display())
    })
  }

  pub(crate) fn log_path(&self) -> Option<PathBuf> {
    self.log_file.clone().or_else(|| {
      dirs::cache_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("threads.log"))
    })
  }

  pub(crate) fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.request_timeout_secs)
  }

  fn validate(&self) -> Result {
    self.base_url()?;

    if !(1..=Self::MAX_PAGE_SIZE).contains(&self.page_size) {
      bail!(
        "page_size must be between 1 and {}, got {}",
        Self::MAX_PAGE_SIZE,
        self.page_size
      );
    }

    if self.request_timeout_secs == 0 {
      bail!("request_timeout_secs must be greater than zero");
    }

    Ok(())
  }
}
