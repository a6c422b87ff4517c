use {super::*, reqwest::Url, serde::de::DeserializeOwned};

#[derive(Clone)]
pub(crate) struct Client {
  http: reqwest::Client,
  site: SiteUrl,
}

impl Client {
  const COMMENT_FIELDS: &str =
    "author_name,content,date,id,link,parent,post,type";

  const POST_FIELDS: &str = "date,excerpt,id,link,title";

  const SEARCH_FIELDS: &str = "id,subtype,title,url";

  const THREAD_CONCURRENCY: usize = 4;

  // The REST API caps per_page at 100.
  const THREAD_PAGE_SIZE: usize = 100;

  pub(crate) async fn fetch_category_items(
    &self,
    category: Category,
    offset: usize,
    count: usize,
  ) -> Result<Vec<ListEntry>> {
    match category.kind {
      CategoryKind::Listing(route) => {
        self.fetch_listing(route, offset, count).await
      }
      CategoryKind::Comments => {
        self.fetch_recent_comments(offset, count).await
      }
      CategoryKind::Bookmarks | CategoryKind::Search => Ok(Vec::new()),
    }
  }

  async fn fetch_listing(
    &self,
    route: &str,
    offset: usize,
    count: usize,
  ) -> Result<Vec<ListEntry>> {
    let url = Self::with_query(
      self.site.api(route),
      &[
        ("_fields", Self::POST_FIELDS),
        ("offset", &offset.to_string()),
        ("per_page", &count.to_string()),
      ],
    );

    let (posts, _) = self.get_json::<Vec<Post>>(url).await?;

    let normalized = normalize(posts, |link| self.site.relativize(link))
      .with_context(|| format!("malformed record in {route} response"))?;

    Ok(
      normalized
        .into_entries()
        .into_iter()
        .map(|(id, post)| ListEntry::from_post(&self.site, id, post))
        .collect(),
    )
  }

  async fn fetch_recent_comments(
    &self,
    offset: usize,
    count: usize,
  ) -> Result<Vec<ListEntry>> {
    let url = Self::with_query(
      self.site.api("comments"),
      &[
        ("_fields", Self::COMMENT_FIELDS),
        ("offset", &offset.to_string()),
        ("per_page", &count.to_string()),
      ],
    );

    let (comments, _) = self.get_json::<Vec<Comment>>(url).await?;

    let normalized = normalize(comments, |link| self.site.relativize(link))
      .context("malformed record in comments response")?;

    Ok(
      normalized
        .into_entries()
        .into_iter()
        .map(|(id, comment)| ListEntry::from_comment(&self.site, id, comment))
        .collect(),
    )
  }

  pub(crate) async fn fetch_thread(
    &self,
    post_id: u64,
    focus: Option<u64>,
  ) -> Result<CommentThread> {
    let (mut comments, total_pages) = self
      .get_json::<Vec<Comment>>(self.thread_page_url(post_id, 1))
      .await
      .context("failed to load comments")?;

    if total_pages > 1 {
      let pages = stream::iter((2..=total_pages).map(|page| {
        let client = self.clone();

        async move {
          client
            .get_json::<Vec<Comment>>(client.thread_page_url(post_id, page))
            .await
        }
      }))
      .buffered(Self::THREAD_CONCURRENCY)
      .collect::<Vec<_>>()
      .await;

      for page in pages {
        let (mut batch, _) = page?;
        comments.append(&mut batch);
      }
    }

    let normalized = normalize(comments, |link| self.site.relativize(link))
      .context("malformed record in thread response")?;

    Ok(CommentThread::build(&self.site, &normalized, focus))
  }

  async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<(T, usize)> {
    let response = self
      .http
      .get(url.clone())
      .send()
      .await?
      .error_for_status()?;

    let total_pages = response
      .headers()
      .get("x-wp-totalpages")
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.parse::<usize>().ok())
      .unwrap_or(1);

    let parsed = response
      .json::<T>()
      .await
      .with_context(|| format!("unexpected response from {url}"))?;

    Ok((parsed, total_pages))
  }

  pub(crate) async fn load_tabs(
    &self,
    limit: usize,
  ) -> Result<Vec<(Tab, ListView<ListEntry>)>> {
    let tasks = Category::all().iter().map(|category| {
      let client = self.clone();

      let category = *category;

      async move {
        let entries = client
          .fetch_category_items(category, 0, limit)
          .await
          .with_context(|| {
            format!("failed to load {} entries", category.label)
          })?;

        let tab = Tab {
          category,
          has_more: entries.len() == limit,
          label: category.label,
        };

        Ok((tab, ListView::new(entries)))
      }
    });

    let tabs = join_all(tasks)
      .await
      .into_iter()
      .collect::<Result<Vec<_>>>()?;

    Ok(tabs)
  }

  pub(crate) fn new(site: SiteUrl) -> Result<Self> {
    let http = reqwest::Client::builder()
      .user_agent(concat!("press/", env!("CARGO_PKG_VERSION")))
      .build()
      .context("could not build http client")?;

    Ok(Self { http, site })
  }

  pub(crate) async fn search(
    &self,
    query: &str,
    offset: usize,
    count: usize,
  ) -> Result<(Vec<ListEntry>, bool)> {
    let page = offset / count.max(1) + 1;

    let url = Self::with_query(
      self.site.api("search"),
      &[
        ("_fields", Self::SEARCH_FIELDS),
        ("page", &page.to_string()),
        ("per_page", &count.to_string()),
        ("search", query),
      ],
    );

    let (hits, total_pages) = self
      .get_json::<Vec<SearchHit>>(url)
      .await
      .context("search request failed")?;

    let entries = hits
      .into_iter()
      .filter_map(|hit| {
        let id = hit.id?;

        Some(ListEntry::from_search(id, hit))
      })
      .collect();

    Ok((entries, page < total_pages))
  }

  fn thread_page_url(&self, post_id: u64, page: usize) -> Url {
    Self::with_query(
      self.site.api("comments"),
      &[
        ("_fields", Self::COMMENT_FIELDS),
        ("order", "asc"),
        ("page", &page.to_string()),
        ("per_page", &Self::THREAD_PAGE_SIZE.to_string()),
        ("post", &post_id.to_string()),
      ],
    )
  }

  fn with_query(mut url: Url, pairs: &[(&str, &str)]) -> Url {
    {
      let mut query = url.query_pairs_mut();

      for (key, value) in pairs {
        query.append_pair(key, value);
      }
    }

    url
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client() -> Client {
    Client::new(SiteUrl::parse("https://example.com").expect("site parses"))
      .expect("client builds")
  }

  #[test]
  fn thread_page_url_targets_the_post() {
    let url = client().thread_page_url(42, 2);

    assert_eq!(url.path(), "/wp-json/wp/v2/comments");

    let query = url.query().unwrap_or_default();

    assert!(query.contains("post=42"));
    assert!(query.contains("page=2"));
    assert!(query.contains("order=asc"));
    assert!(query.contains("per_page=100"));
  }

  #[test]
  fn with_query_appends_all_pairs() {
    let url = Client::with_query(
      SiteUrl::parse("https://example.com")
        .expect("site parses")
        .api("posts"),
      &[("offset", "20"), ("per_page", "20")],
    );

    assert_eq!(
      url.as_str(),
      "https://example.com/wp-json/wp/v2/posts?offset=20&per_page=20"
    );
  }
}
