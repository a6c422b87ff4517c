use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Post {
  #[serde(default)]
  pub(crate) date: Option<String>,
  #[serde(default)]
  pub(crate) excerpt: Rendered,
  #[serde(default, deserialize_with = "deserialize_lenient_id")]
  pub(crate) id: Option<u64>,
  #[serde(default)]
  pub(crate) link: String,
  #[serde(default)]
  pub(crate) title: Rendered,
}

impl Entity for Post {
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
  fn deserializes_a_rest_post() {
    let post = serde_json::from_str::<Post>(
      r#"{
        "id": 101,
        "date": "2024-04-30T12:00:00",
        "link": "https://example.com/2024/04/hello-world/",
        "title": {"rendered": "Hello &amp; welcome"},
        "excerpt": {"rendered": "<p>First post.</p>", "protected": false}
      }"#,
    )
    .unwrap();

    assert_eq!(post.id, Some(101));
    assert_eq!(post.title.text(), "Hello & welcome");
    assert_eq!(post.excerpt.text(), "First post.");
  }
}
