use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Comment {
  pub(crate) author: String,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) children: Vec<Comment>,
  pub(crate) content: String,
  pub(crate) created_at: DateTime<Utc>,
  pub(crate) id: u64,
  #[serde(default)]
  pub(crate) parent_id: Option<u64>,
  #[serde(default)]
  pub(crate) post_id: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct NewComment {
  pub(crate) author: String,
  pub(crate) content: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) parent_id: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) post_id: Option<u64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn null_children_deserialize_as_empty() {
    let comment = serde_json::from_str::<Comment>(
      r#"{
        "id": 4,
        "parent_id": null,
        "author": "alice",
        "content": "hello",
        "created_at": "2025-03-01T12:30:00.123456+03:00",
        "children": null
      }"#,
    )
    .unwrap();

    assert!(comment.children.is_empty());
    assert_eq!(comment.parent_id, None);
    assert_eq!(comment.created_at.to_rfc3339(), "2025-03-01T09:30:00.123456+00:00");
  }

  #[test]
  fn nested_children_keep_their_order() {
    let comment = serde_json::from_str::<Comment>(
      r#"{
        "id": 1,
        "author": "alice",
        "content": "root",
        "created_at": "2025-03-01T12:30:00Z",
        "children": [
          {"id": 2, "parent_id": 1, "author": "bob", "content": "a", "created_at": "2025-03-01T12:31:00Z"},
          {"id": 3, "parent_id": 1, "author": "carol", "content": "b", "created_at": "2025-03-01T12:32:00Z"}
        ]
      }"#,
    )
    .unwrap();

    let ids = comment
      .children
      .iter()
      .map(|child| child.id)
      .collect::<Vec<_>>();

    assert_eq!(ids, vec![2, 3]);
    assert_eq!(comment.children[0].parent_id, Some(1));
  }

  #[test]
  fn new_comment_omits_missing_parent() {
    let top_level = NewComment {
      author: "alice".into(),
      content: "hi".into(),
      parent_id: None,
      post_id: None,
    };

    assert_eq!(
      serde_json::to_value(&top_level).unwrap(),
      serde_json::json!({"author": "alice", "content": "hi"})
    );

    let reply = NewComment {
      parent_id: Some(7),
      ..top_level
    };

    assert_eq!(
      serde_json::to_value(&reply).unwrap(),
      serde_json::json!({"author": "alice", "content": "hi", "parent_id": 7})
    );
  }
}
