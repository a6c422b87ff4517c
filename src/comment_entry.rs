use super::*;

pub(crate) struct CommentEntry {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) children: Vec<usize>,
  pub(crate) date: Option<String>,
  pub(crate) depth: usize,
  pub(crate) expanded: bool,
  pub(crate) id: u64,
  pub(crate) link: String,
  pub(crate) parent: Option<usize>,
  pub(crate) pingback: bool,
  pub(crate) post: Option<u64>,
}

impl CommentEntry {
  pub(crate) fn body(&self) -> &str {
    self.body.as_str()
  }

  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  pub(crate) fn header(&self) -> String {
    let kind = if self.pingback { " (pingback)" } else { "" };

    match &self.date {
      Some(date) => {
        format!("{}{kind} on {}", self.author, format_date(date))
      }
      None => format!("{}{kind}", self.author),
    }
  }

  pub(crate) fn to_bookmark_entry(&self) -> ListEntry {
    let title = if self.pingback {
      format!("Pingback from {}", self.author)
    } else {
      format!("Comment by {}", self.author)
    };

    let mut snippet = String::new();
    let mut char_count: usize = 0;

    for word in self.body().split_whitespace() {
      if !snippet.is_empty() {
        snippet.push(' ');
        char_count = char_count.saturating_add(1);
      }

      snippet.push_str(word);
      char_count = char_count.saturating_add(word.chars().count());

      if char_count >= 120 {
        break;
      }
    }

    let detail = {
      let trimmed = snippet.trim();

      if trimmed.is_empty() {
        None
      } else {
        Some(truncate(trimmed, 120))
      }
    };

    ListEntry {
      detail,
      focus: Some(self.id),
      id: format!("comment-{}", self.id),
      post: self.post,
      title,
      url: (!self.link.is_empty()).then(|| self.link.clone()),
    }
  }
}
