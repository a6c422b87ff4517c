use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct Rendered {
  #[serde(default)]
  pub(crate) protected: bool,
  #[serde(default)]
  pub(crate) rendered: String,
}

impl Rendered {
  pub(crate) fn text(&self) -> String {
    if self.protected {
      return String::new();
    }

    strip_markup(&self.rendered)
  }
}
