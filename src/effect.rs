use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  CreateComment {
    comment: NewComment,
    request_id: u64,
  },
  CreatePost {
    post: NewPost,
    request_id: u64,
  },
  DeleteComment {
    id: u64,
    request_id: u64,
  },
  FetchComments {
    query: QueryState,
    request_id: u64,
  },
  FetchPosts {
    page: usize,
    page_size: usize,
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
}
