#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Back,
  CancelInput,
  ClearSearch,
  ComposeComment,
  ComposePost,
  CycleSortField,
  DeleteSelected,
  FocusThread,
  HideHelp,
  NextPage,
  None,
  OpenInBrowser,
  OpenSelectedPost,
  PreviousPage,
  Quit,
  Reload,
  ReplyToSelected,
  ShowHelp,
  ShowPosts,
  StartSearch,
  SubmitInput,
  ToggleSortOrder,
}
