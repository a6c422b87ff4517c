#[derive(Clone, Copy)]
pub enum CategoryKind {
  Bookmarks,
  Comments,
  Listing(&'static str),
  Search,
}

#[derive(Clone, Copy)]
pub struct Category {
  pub kind: CategoryKind,
  pub label: &'static str,
}

impl Category {
  pub fn all() -> &'static [Category] {
    &[
      Category {
        label: "posts",
        kind: CategoryKind::Listing("posts"),
      },
      Category {
        label: "pages",
        kind: CategoryKind::Listing("pages"),
      },
      Category {
        label: "comments",
        kind: CategoryKind::Comments,
      },
    ]
  }
}
