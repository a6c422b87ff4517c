use super::*;

pub(crate) fn deserialize_lenient_id<'de, D>(
  deserializer: D,
) -> Result<Option<u64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::Number(number)) => number.as_u64().map(Some).ok_or_else(|| {
      de::Error::invalid_value(
        Unexpected::Other("non-integer id"),
        &"an unsigned integer id",
      )
    }),
    Some(Value::String(text)) => match text.trim().parse::<u64>() {
      Ok(id) => Ok(Some(id)),
      Err(_) => Err(de::Error::invalid_value(
        Unexpected::Str(&text),
        &"a numeric id string",
      )),
    },
    Some(Value::Bool(value)) => Err(de::Error::invalid_type(
      Unexpected::Bool(value),
      &"number or numeric string",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"number or numeric string",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"number or numeric string",
    )),
  }
}

pub(crate) fn format_date(date: &str) -> String {
  date.split(['T', ' ']).next().unwrap_or(date).to_string()
}

pub(crate) fn strip_markup(text: &str) -> String {
  let mut cleaned = String::with_capacity(text.len());
  let mut inside_tag = false;
  let mut last_was_space = false;

  for ch in text.chars() {
    match ch {
      '<' => {
        inside_tag = true;

        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      '>' => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ if ch.is_whitespace() => {
        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      _ => {
        cleaned.push(ch);
        last_was_space = false;
      }
    }
  }

  let decoded = html_escape::decode_html_entities(cleaned.trim());

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use {super::*, serde::Deserialize};

  #[derive(Deserialize, Debug, PartialEq)]
  struct IdWrapper {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    id: Option<u64>,
  }

  fn parse_id(input: &str) -> Result<Option<u64>, serde_json::Error> {
    serde_json::from_str::<IdWrapper>(input).map(|wrapper| wrapper.id)
  }

  #[test]
  fn lenient_id_accepts_numbers_and_numeric_strings() {
    assert_eq!(parse_id(r#"{"id": 42}"#).unwrap(), Some(42));
    assert_eq!(parse_id(r#"{"id": "42"}"#).unwrap(), Some(42));
    assert_eq!(parse_id(r#"{"id": null}"#).unwrap(), None);
    assert_eq!(parse_id(r"{}").unwrap(), None);
  }

  #[test]
  fn lenient_id_rejects_non_numeric_values() {
    assert!(parse_id(r#"{"id": "forty-two"}"#).is_err());
    assert!(parse_id(r#"{"id": true}"#).is_err());
    assert!(parse_id(r#"{"id": -3}"#).is_err());
    assert!(parse_id(r#"{"id": []}"#).is_err());
  }

  #[test]
  fn format_date_keeps_the_date_part() {
    assert_eq!(format_date("2024-05-02T09:30:00"), "2024-05-02");
    assert_eq!(format_date("2024-05-02 09:30:00"), "2024-05-02");
    assert_eq!(format_date("2024-05-02"), "2024-05-02");
  }

  #[test]
  fn strip_markup_removes_tags_and_decodes_entities() {
    assert_eq!(
      strip_markup(
        "<p>Hello &amp; <em>goodbye</em></p>\n<ul><li>First</li><li>Second</li></ul>"
      ),
      "Hello & goodbye First Second"
    );
  }

  #[test]
  fn strip_markup_collapses_whitespace() {
    assert_eq!(
      strip_markup("<div>Multiple   spaces<br/>and\tlines</div>"),
      "Multiple spaces and lines"
    );
  }

  #[test]
  fn strip_markup_decodes_numeric_entities() {
    assert_eq!(
      strip_markup("https:&#x2F;&#x2F;example.com&#47;path"),
      "https://example.com/path"
    );
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }

  #[test]
  fn wrap_text_does_not_wrap_when_within_width() {
    assert_eq!(wrap_text("short text", 20), vec!["short text".to_string()]);
  }
}
