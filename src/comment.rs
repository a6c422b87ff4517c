use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  #[serde(default)]
  pub(crate) author_name: String,
  #[serde(default)]
  pub(crate) content: Rendered,
  #[serde(default)]
  pub(crate) date: Option<String>,
  #[serde(default, deserialize_with = "deserialize_lenient_id")]
  pub(crate) id: Option<u64>,
  #[serde(default)]
  pub(crate) link: String,
  #[serde(default, deserialize_with = "deserialize_lenient_id")]
  pub(crate) parent: Option<u64>,
  #[serde(default, deserialize_with = "deserialize_lenient_id")]
  pub(crate) post: Option<u64>,
  #[serde(default)]
  pub(crate) r#type: Option<String>,
}

impl Comment {
  pub(crate) fn author(&self) -> &str {
    if self.author_name.is_empty() {
      "anonymous"
    } else {
      &self.author_name
    }
  }

  pub(crate) fn is_pingback(&self) -> bool {
    matches!(self.r#type.as_deref(), Some("pingback" | "trackback"))
  }

  pub(crate) fn parent_id(&self) -> Option<u64> {
    // WordPress encodes "top level" as parent 0.
    self.parent.filter(|&parent| parent != 0)
  }
}

impl Entity for Comment {
  fn key(&self) -> Option<u64> {
    self.id
  }

  fn rewrite_link(&mut self, rewrite: &dyn Fn(&str) -> String) {
    self.link = rewrite(&self.link);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_a_rest_comment() {
    let comment = serde_json::from_str::<Comment>(
      r#"{
        "id": 9,
        "post": 1,
        "parent": 0,
        "author_name": "Ada",
        "date": "2024-05-02T09:30:00",
        "content": {"rendered": "<p>nice post</p>"},
        "link": "https://example.com/post/1#comment-9",
        "type": "comment"
      }"#,
    )
    .unwrap();

    assert_eq!(comment.id, Some(9));
    assert_eq!(comment.post, Some(1));
    assert_eq!(comment.parent_id(), None);
    assert_eq!(comment.author(), "Ada");
    assert_eq!(comment.content.text(), "nice post");
    assert!(!comment.is_pingback());
  }

  #[test]
  fn accepts_string_ids() {
    let comment =
      serde_json::from_str::<Comment>(r#"{"id": "12", "parent": "3"}"#)
        .unwrap();

    assert_eq!(comment.id, Some(12));
    assert_eq!(comment.parent_id(), Some(3));
  }

  #[test]
  fn missing_author_becomes_anonymous() {
    let comment = serde_json::from_str::<Comment>(r#"{"id": 1}"#).unwrap();

    assert_eq!(comment.author(), "anonymous");
  }

  #[test]
  fn pingbacks_and_trackbacks_are_flagged() {
    for kind in ["pingback", "trackback"] {
      let comment = serde_json::from_str::<Comment>(&format!(
        r#"{{"id": 1, "type": "{kind}"}}"#
      ))
      .unwrap();

      assert!(comment.is_pingback());
    }
  }
}
