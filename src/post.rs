use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Post {
  pub(crate) author: String,
  #[serde(default)]
  pub(crate) comments_count: usize,
  pub(crate) content: String,
  pub(crate) created_at: DateTime<Utc>,
  pub(crate) id: u64,
  pub(crate) title: String,
}

impl Post {
  pub(crate) fn detail(&self) -> String {
    let comments = match self.comments_count {
      1 => "1 comment".to_string(),
      count => format!("{count} comments"),
    };

    format!(
      "{} · {} · {comments}",
      self.author,
      format_timestamp(&self.created_at)
    )
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostPage {
  pub(crate) page: usize,
  pub(crate) page_size: usize,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) posts: Vec<Post>,
  pub(crate) total: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct NewPost {
  pub(crate) author: String,
  pub(crate) content: String,
  pub(crate) title: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_with_null_posts_is_empty() {
    let page = serde_json::from_str::<PostPage>(
      r#"{"posts": null, "total": 0, "page": 1, "page_size": 10, "has_next": false, "has_prev": false}"#,
    )
    .unwrap();

    assert!(page.posts.is_empty());
    assert_eq!(page.total, 0);
  }

  #[test]
  fn detail_pluralizes_comment_count() {
    let mut post = serde_json::from_str::<Post>(
      r#"{
        "id": 1,
        "title": "Hello",
        "content": "First post",
        "author": "alice",
        "created_at": "2025-03-01T12:00:00Z",
        "updated_at": "2025-03-01T12:00:00Z",
        "comments_count": 1
      }"#,
    )
    .unwrap();

    assert!(post.detail().ends_with("1 comment"));

    post.comments_count = 4;

    assert!(post.detail().ends_with("4 comments"));
  }
}
