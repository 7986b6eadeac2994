use {
  super::*,
  anyhow::Context,
  reqwest::{RequestBuilder, Response, Url},
};

#[derive(Clone)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
}

impl Client {
  /// Turns a non-success status into an error carrying the backend's
  /// plain-text message.
  async fn checked(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
      return Ok(response);
    }

    let url = response.url().clone();

    let body = response.text().await.unwrap_or_default();

    let message = match body.trim() {
      "" => status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string(),
      text => truncate(text, 200),
    };

    tracing::warn!(%url, %status, %message, "backend rejected request");

    Err(Error::Status { message, status })
  }

  fn comment_url(&self, id: u64) -> Url {
    self.endpoint(&format!("comments/{id}"))
  }

  fn comments_request(&self, query: &QueryState) -> RequestBuilder {
    self
      .client
      .get(self.endpoint("comments"))
      .query(&query.build_query())
  }

  pub(crate) async fn create_comment(
    &self,
    comment: &NewComment,
  ) -> Result<Comment, Error> {
    let response = Self::checked(
      self
        .client
        .post(self.endpoint("comments"))
        .json(comment)
        .send()
        .await?,
    )
    .await?;

    let created = response.json::<Comment>().await?;

    tracing::info!(id = created.id, parent = ?created.parent_id, "created comment");

    Ok(created)
  }

  pub(crate) async fn create_post(&self, post: &NewPost) -> Result<Post, Error> {
    let response = Self::checked(
      self
        .client
        .post(self.endpoint("posts"))
        .json(post)
        .send()
        .await?,
    )
    .await?;

    let created = response.json::<Post>().await?;

    tracing::info!(id = created.id, "created post");

    Ok(created)
  }

  pub(crate) async fn delete_comment(&self, id: u64) -> Result<(), Error> {
    Self::checked(self.client.delete(self.comment_url(id)).send().await?).await?;

    tracing::info!(id, "deleted comment");

    Ok(())
  }

  fn endpoint(&self, path: &str) -> Url {
    let mut url = self.base_url.clone();

    let base = url.path().trim_end_matches('/').to_string();

    url.set_path(&format!("{base}/{path}"));

    url
  }

  pub(crate) async fn fetch_comments(
    &self,
    query: &QueryState,
  ) -> Result<CommentPage, Error> {
    let request = self.comments_request(query);

    tracing::debug!(page = query.page, search = %query.search, "fetching comments");

    Ok(Self::checked(request.send().await?).await?.json().await?)
  }

  pub(crate) async fn fetch_posts(
    &self,
    page: usize,
    page_size: usize,
  ) -> Result<PostPage, Error> {
    tracing::debug!(page, "fetching posts");

    Ok(
      Self::checked(self.posts_request(page, page_size).send().await?)
        .await?
        .json()
        .await?,
    )
  }

  pub(crate) fn new(config: &Config) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.request_timeout())
      .build()
      .context("failed to build HTTP client")?;

    Ok(Self {
      base_url: config.base_url()?,
      client,
    })
  }

  fn posts_request(&self, page: usize, page_size: usize) -> RequestBuilder {
    self
      .client
      .get(self.endpoint("posts"))
      .query(&[("page", page), ("page_size", page_size)])
  }

  pub(crate) fn web_url(&self) -> String {
    self.base_url.to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base_url: &str) -> Client {
    Client::new(&Config {
      base_url: base_url.into(),
      ..Config::default()
    })
    .unwrap()
  }

  #[test]
  fn list_request_carries_query_parameters() {
    let client = client("http://localhost:8080");

    let mut query = QueryState::new(&Config::default());
    query.set_search("foo bar");

    let request = client.comments_request(&query).build().unwrap();

    assert_eq!(request.method(), reqwest::Method::GET);

    assert_eq!(
      request.url().as_str(),
      "http://localhost:8080/comments?page=1&page_size=10&sort_by=created_at&sort_order=desc&search=foo+bar"
    );
  }

  #[test]
  fn endpoints_respect_base_path() {
    let client = client("https://example.com/api/");

    assert_eq!(
      client.comment_url(42).as_str(),
      "https://example.com/api/comments/42"
    );

    assert_eq!(
      client.posts_request(2, 10).build().unwrap().url().as_str(),
      "https://example.com/api/posts?page=2&page_size=10"
    );
  }

  #[test]
  fn invalid_base_url_is_rejected() {
    assert!(
      Client::new(&Config {
        base_url: "::nope".into(),
        ..Config::default()
      })
      .is_err()
    );
  }
}
