use super::*;

#[derive(Clone, Debug)]
pub(crate) struct CommentThread {
  pub(crate) focus: Option<u64>,
  pub(crate) roots: Vec<CommentNode>,
}

impl CommentThread {
  pub(crate) fn build(
    site: &SiteUrl,
    comments: &Normalized<Comment>,
    focus: Option<u64>,
  ) -> Self {
    let mut order = Vec::new();
    let mut seen = HashSet::new();

    for &id in comments.order() {
      if seen.insert(id) {
        order.push(id);
      }
    }

    // Replies arrive flat behind `parent` ids; bucket them in input order.
    // A parent outside the fetched collection promotes its replies to roots.
    let mut children: HashMap<u64, Vec<u64>> = HashMap::new();
    let mut root_ids = Vec::new();

    for &id in &order {
      let Some(comment) = comments.get(id) else {
        continue;
      };

      match comment.parent_id() {
        Some(parent) if parent != id && comments.get(parent).is_some() => {
          children.entry(parent).or_default().push(id);
        }
        _ => root_ids.push(id),
      }
    }

    let roots = root_ids
      .iter()
      .filter_map(|&id| {
        comments
          .get(id)
          .map(|record| Self::node(site, comments, &children, id, record))
      })
      .collect();

    Self { focus, roots }
  }

  fn node(
    site: &SiteUrl,
    comments: &Normalized<Comment>,
    children: &HashMap<u64, Vec<u64>>,
    id: u64,
    comment: &Comment,
  ) -> CommentNode {
    let child_nodes = children
      .get(&id)
      .into_iter()
      .flatten()
      .filter_map(|&child| {
        comments
          .get(child)
          .map(|record| Self::node(site, comments, children, child, record))
      })
      .collect();

    CommentNode {
      author: comment.author().to_string(),
      children: child_nodes,
      date: comment.date.clone(),
      id,
      link: site.resolve(&comment.link),
      pingback: comment.is_pingback(),
      post: comment.post,
      text: comment.content.text(),
    }
  }
}
