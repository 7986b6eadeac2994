use super::*;

pub(crate) enum Event {
  CommentCreated {
    request_id: u64,
    result: Result<Comment, Error>,
  },
  CommentDeleted {
    id: u64,
    request_id: u64,
    result: Result<(), Error>,
  },
  Comments {
    request_id: u64,
    result: Result<CommentPage, Error>,
  },
  PostCreated {
    request_id: u64,
    result: Result<Post, Error>,
  },
  Posts {
    request_id: u64,
    result: Result<PostPage, Error>,
  },
}
