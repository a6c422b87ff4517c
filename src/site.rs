use {super::*, reqwest::Url};

#[derive(Clone, Debug)]
pub(crate) struct SiteUrl {
  base: Url,
}

impl SiteUrl {
  pub(crate) fn api(&self, route: &str) -> Url {
    let mut url = self.base.clone();

    let prefix = self.base.path().trim_end_matches('/');

    url.set_path(&format!("{prefix}/wp-json/wp/v2/{route}"));
    url.set_query(None);
    url.set_fragment(None);

    url
  }

  pub(crate) fn parse(input: &str) -> Result<Self> {
    let trimmed = input.trim().trim_end_matches('/');

    anyhow::ensure!(!trimmed.is_empty(), "site url is empty");

    let candidate = if trimmed.contains("://") {
      trimmed.to_string()
    } else {
      format!("https://{trimmed}")
    };

    let base = Url::parse(&candidate)
      .with_context(|| format!("invalid site url `{input}`"))?;

    anyhow::ensure!(base.host_str().is_some(), "site url `{input}` has no host");

    Ok(Self { base })
  }

  pub(crate) fn relativize(&self, link: &str) -> String {
    let Ok(url) = Url::parse(link) else {
      return link.to_string();
    };

    // Same-site means same host and explicit port; the scheme may differ.
    if url.host_str() != self.base.host_str() || url.port() != self.base.port()
    {
      return link.to_string();
    }

    let mut relative = url.path().to_string();

    if let Some(query) = url.query() {
      relative.push('?');
      relative.push_str(query);
    }

    if let Some(fragment) = url.fragment() {
      relative.push('#');
      relative.push_str(fragment);
    }

    relative
  }

  pub(crate) fn resolve(&self, link: &str) -> String {
    if link.starts_with('/')
      && !link.starts_with("//")
      && let Ok(url) = self.base.join(link)
    {
      return url.to_string();
    }

    link.to_string()
  }
}
