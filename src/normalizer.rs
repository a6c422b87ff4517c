use {super::*, thiserror::Error};

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("record at index {index} has no id")]
pub(crate) struct MalformedEntity {
  pub(crate) index: usize,
}

pub(crate) trait Entity {
  fn key(&self) -> Option<u64>;

  fn rewrite_link(&mut self, rewrite: &dyn Fn(&str) -> String);
}

#[derive(Debug)]
pub(crate) struct Normalized<T> {
  entities: HashMap<u64, T>,
  order: Vec<u64>,
}

impl<T> Normalized<T> {
  pub(crate) fn get(&self, id: u64) -> Option<&T> {
    self.entities.get(&id)
  }

  pub(crate) fn into_entries(self) -> Vec<(u64, T)>
  where
    T: Clone,
  {
    let Self { entities, order } = self;

    order
      .into_iter()
      .filter_map(|id| entities.get(&id).cloned().map(|record| (id, record)))
      .collect()
  }

  pub(crate) fn order(&self) -> &[u64] {
    &self.order
  }
}

pub(crate) fn normalize<T, F>(
  records: Vec<T>,
  rewrite: F,
) -> Result<Normalized<T>, MalformedEntity>
where
  T: Entity,
  F: Fn(&str) -> String,
{
  let mut entities = HashMap::with_capacity(records.len());
  let mut order = Vec::with_capacity(records.len());

  for (index, mut record) in records.into_iter().enumerate() {
    let id = record.key().ok_or(MalformedEntity { index })?;

    record.rewrite_link(&rewrite);

    order.push(id);

    // Duplicate ids keep every position in the order but the last record
    // wins in the entity map.
    entities.insert(id, record);
  }

  Ok(Normalized { entities, order })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Clone, Debug, PartialEq)]
  struct Record {
    id: Option<u64>,
    link: String,
    text: String,
  }

  impl Entity for Record {
    fn key(&self) -> Option<u64> {
      self.id
    }

    fn rewrite_link(&mut self, rewrite: &dyn Fn(&str) -> String) {
      self.link = rewrite(&self.link);
    }
  }

  fn record(id: u64, link: &str, text: &str) -> Record {
    Record {
      id: Some(id),
      link: link.to_string(),
      text: text.to_string(),
    }
  }

  fn strip_origin(link: &str) -> String {
    link
      .strip_prefix("https://example.com")
      .map_or_else(|| link.to_string(), ToString::to_string)
  }

  #[test]
  fn order_matches_input_length_and_sequence() {
    let records = vec![
      record(3, "/c", "c"),
      record(1, "/a", "a"),
      record(2, "/b", "b"),
    ];

    let normalized = normalize(records, strip_origin).unwrap();

    assert_eq!(normalized.order(), [3, 1, 2]);
  }

  #[test]
  fn links_are_rewritten_and_other_fields_preserved() {
    let records =
      vec![record(1, "https://example.com/post/1", "hi")];

    let normalized = normalize(records, strip_origin).unwrap();

    let entity = normalized.get(1).unwrap();

    assert_eq!(entity.link, "/post/1");
    assert_eq!(entity.text, "hi");
  }

  #[test]
  fn already_relative_links_pass_through_unchanged() {
    let records = vec![record(5, "/already/relative", "")];

    let normalized = normalize(records, strip_origin).unwrap();

    assert_eq!(normalized.get(5).unwrap().link, "/already/relative");
  }

  #[test]
  fn empty_input_yields_empty_collection() {
    let normalized = normalize(Vec::<Record>::new(), strip_origin).unwrap();

    assert!(normalized.order().is_empty());
    assert!(normalized.into_entries().is_empty());
  }

  #[test]
  fn missing_id_reports_offending_index() {
    let records = vec![
      record(1, "/a", "a"),
      Record {
        id: None,
        link: "/b".to_string(),
        text: "b".to_string(),
      },
    ];

    let error = normalize(records, strip_origin).unwrap_err();

    assert_eq!(error, MalformedEntity { index: 1 });
  }

  #[test]
  fn duplicate_ids_keep_order_and_last_record_wins() {
    let records = vec![
      record(1, "/first", "first"),
      record(2, "/other", "other"),
      record(1, "/second", "second"),
    ];

    let normalized = normalize(records, strip_origin).unwrap();

    assert_eq!(normalized.order(), [1, 2, 1]);
    assert_eq!(normalized.get(1).unwrap().text, "second");
  }

  #[test]
  fn into_entries_follows_order() {
    let records = vec![record(2, "/b", "b"), record(1, "/a", "a")];

    let entries = normalize(records, strip_origin).unwrap().into_entries();

    let ids = entries.iter().map(|(id, _)| *id).collect::<Vec<_>>();

    assert_eq!(ids, [2, 1]);
    assert_eq!(entries[1].1.text, "a");
  }
}
