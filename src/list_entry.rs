use super::*;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct ListEntry {
  pub(crate) detail: Option<String>,
  #[serde(default)]
  pub(crate) focus: Option<u64>,
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) post: Option<u64>,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl ListEntry {
  pub(crate) fn from_comment(
    site: &SiteUrl,
    id: u64,
    comment: Comment,
  ) -> Self {
    let author = comment.author().to_string();

    let snippet = html2text::from_read(
      comment.content.rendered.as_bytes(),
      usize::MAX,
    )
    .ok()
    .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
    .filter(|text| !text.is_empty())
    .map(|text| truncate(&text, 120));

    let detail = snippet.map(|text| format!("{author}: {text}"));

    let title = if comment.is_pingback() {
      format!("Pingback from {author}")
    } else {
      format!("Comment by {author}")
    };

    let url = (!comment.link.is_empty()).then(|| site.resolve(&comment.link));

    Self {
      detail,
      focus: Some(id),
      id: format!("comment-{id}"),
      post: comment.post,
      title,
      url,
    }
  }

  pub(crate) fn from_post(site: &SiteUrl, id: u64, post: Post) -> Self {
    let title = {
      let text = post.title.text();

      if text.is_empty() {
        "Untitled".to_string()
      } else {
        text
      }
    };

    let excerpt = {
      let text = post.excerpt.text();

      (!text.is_empty()).then(|| truncate(&text, 120))
    };

    let date = post.date.as_deref().map(format_date);

    let detail = match (date, excerpt) {
      (Some(date), Some(excerpt)) => Some(format!("{date} • {excerpt}")),
      (Some(date), None) => Some(date),
      (None, Some(excerpt)) => Some(excerpt),
      _ => None,
    };

    let url = (!post.link.is_empty()).then(|| site.resolve(&post.link));

    Self {
      detail,
      focus: None,
      id: format!("post-{id}"),
      post: Some(id),
      title,
      url,
    }
  }

  pub(crate) fn from_search(id: u64, hit: SearchHit) -> Self {
    let title = if hit.title.is_empty() {
      "Untitled".to_string()
    } else {
      strip_markup(&hit.title)
    };

    let subtype = hit
      .subtype
      .clone()
      .unwrap_or_else(|| "result".to_string());

    let post = matches!(subtype.as_str(), "post" | "page").then_some(id);

    Self {
      detail: hit.subtype,
      focus: None,
      id: format!("{subtype}-{id}"),
      post,
      title,
      url: hit.url,
    }
  }

  pub(crate) fn open_url(&self) -> Option<String> {
    self.url.clone().filter(|url| !url.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn site() -> SiteUrl {
    SiteUrl::parse("https://example.com").expect("site url parses")
  }

  #[test]
  fn post_entries_carry_date_and_excerpt() {
    let post = Post {
      date: Some("2024-05-02T09:30:00".to_string()),
      excerpt: Rendered {
        protected: false,
        rendered: "<p>An excerpt.</p>".to_string(),
      },
      id: Some(101),
      link: "/2024/05/an-entry/".to_string(),
      title: Rendered {
        protected: false,
        rendered: "An entry".to_string(),
      },
    };

    let entry = ListEntry::from_post(&site(), 101, post);

    assert_eq!(entry.id, "post-101");
    assert_eq!(entry.post, Some(101));
    assert_eq!(entry.title, "An entry");
    assert_eq!(entry.detail.as_deref(), Some("2024-05-02 • An excerpt."));
    assert_eq!(
      entry.url.as_deref(),
      Some("https://example.com/2024/05/an-entry/")
    );
  }

  #[test]
  fn comment_entries_point_back_at_their_post() {
    let comment = Comment {
      author_name: "Ada".to_string(),
      content: Rendered {
        protected: false,
        rendered: "<p>nice post</p>".to_string(),
      },
      date: None,
      id: Some(9),
      link: "/post/1#comment-9".to_string(),
      parent: None,
      post: Some(1),
      r#type: None,
    };

    let entry = ListEntry::from_comment(&site(), 9, comment);

    assert_eq!(entry.id, "comment-9");
    assert_eq!(entry.post, Some(1));
    assert_eq!(entry.focus, Some(9));
    assert_eq!(entry.title, "Comment by Ada");
    assert_eq!(entry.detail.as_deref(), Some("Ada: nice post"));
  }

  #[test]
  fn search_hits_for_pages_can_open_threads() {
    let hit = SearchHit {
      id: Some(7),
      subtype: Some("page".to_string()),
      title: "About".to_string(),
      url: Some("https://example.com/about/".to_string()),
    };

    let entry = ListEntry::from_search(7, hit);

    assert_eq!(entry.id, "page-7");
    assert_eq!(entry.post, Some(7));
    assert_eq!(entry.detail.as_deref(), Some("page"));
  }

  #[test]
  fn open_url_skips_empty_links() {
    let entry = ListEntry {
      detail: None,
      focus: None,
      id: "post-1".to_string(),
      post: Some(1),
      title: "Entry".to_string(),
      url: Some(String::new()),
    };

    assert!(entry.open_url().is_none());
  }
}
