use super::*;

#[derive(Clone, Debug)]
pub(crate) struct CommentNode {
  pub(crate) author: String,
  pub(crate) children: Vec<CommentNode>,
  pub(crate) date: Option<String>,
  pub(crate) id: u64,
  pub(crate) link: String,
  pub(crate) pingback: bool,
  pub(crate) post: Option<u64>,
  pub(crate) text: String,
}
