use std::fmt;

/// One step of a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// All-digit segment addressing an array index.
    Index(usize),
    /// Object key. `local` carries the part after the last `:` when the
    /// literal is namespaced (`wb:longitude` → local `longitude`).
    Key {
        literal: String,
        local: Option<String>,
    },
}

impl Segment {
    fn parse(text: &str) -> Segment {
        if text.bytes().all(|b| b.is_ascii_digit())
            && let Ok(index) = text.parse::<usize>()
        {
            return Segment::Index(index);
        }
        let local = text
            .rsplit_once(':')
            .map(|(_, suffix)| suffix.to_string());
        Segment::Key {
            literal: text.to_string(),
            local,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Index(index) => write!(f, "{index}"),
            Segment::Key { literal, .. } => write!(f, "{literal}"),
        }
    }
}

/// Parsed field-path expression, e.g. `data.0.wb:longitude` or
/// `rows[2].name`.
///
/// Segments are separated by `.`; `[` and `]` act as additional
/// separators so dotted and bracketed spellings parse alike; empty
/// segments are dropped; a leading `$.` prefix is stripped. An empty
/// expression parses to the empty path, which resolves to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn parse(expr: &str) -> Self {
        let trimmed = expr.trim();
        let trimmed = trimmed.strip_prefix("$.").unwrap_or(trimmed);
        let segments = trimmed
            .split(['.', '[', ']'])
            .filter(|segment| !segment.is_empty())
            .map(Segment::parse)
            .collect();
        FieldPath { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Copy of this path with every namespaced key replaced by its local
    /// name (`wb:longitude` → `longitude`).
    pub fn without_namespaces(&self) -> FieldPath {
        let segments = self
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Key {
                    local: Some(local), ..
                } => Segment::Key {
                    literal: local.clone(),
                    local: None,
                },
                other => other.clone(),
            })
            .collect();
        FieldPath { segments }
    }

    /// True when any segment carries a namespace prefix.
    pub fn has_namespaces(&self) -> bool {
        self.segments.iter().any(|segment| {
            matches!(
                segment,
                Segment::Key {
                    local: Some(_),
                    ..
                }
            )
        })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(expr: &str) -> Self {
        FieldPath::parse(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(literal: &str) -> Segment {
        Segment::Key {
            literal: literal.to_string(),
            local: None,
        }
    }

    #[test]
    fn parses_dotted_and_bracketed_alike() {
        assert_eq!(
            FieldPath::parse("rows[2].name"),
            FieldPath::parse("rows.2.name")
        );
        assert_eq!(
            FieldPath::parse("rows.2.name").segments(),
            &[key("rows"), Segment::Index(2), key("name")]
        );
    }

    #[test]
    fn strips_dollar_prefix_and_empty_segments() {
        assert_eq!(FieldPath::parse("$.a..b"), FieldPath::parse("a.b"));
        assert!(FieldPath::parse("").is_empty());
        assert!(FieldPath::parse("$.").is_empty());
    }

    #[test]
    fn namespaced_segments_keep_local_name() {
        let path = FieldPath::parse("data.wb:adm0_name");
        assert_eq!(
            path.segments()[1],
            Segment::Key {
                literal: "wb:adm0_name".to_string(),
                local: Some("adm0_name".to_string()),
            }
        );
        assert!(path.has_namespaces());
        assert_eq!(path.without_namespaces(), FieldPath::parse("data.adm0_name"));
    }

    #[test]
    fn huge_digit_runs_fall_back_to_keys() {
        let path = FieldPath::parse("99999999999999999999999999");
        assert!(matches!(path.segments()[0], Segment::Key { .. }));
    }
}
