use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
  #[serde(default, deserialize_with = "deserialize_lenient_id")]
  pub(crate) id: Option<u64>,
  #[serde(default)]
  pub(crate) subtype: Option<String>,
  #[serde(default)]
  pub(crate) title: String,
  #[serde(default)]
  pub(crate) url: Option<String>,
}
