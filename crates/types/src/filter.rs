use serde::{Deserialize, Serialize};

use crate::DocumentKind;

/// Type filter applied on top of the free-text search
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
  #[default]
  All,
  Only(DocumentKind),
}

impl TypeFilter {
  pub fn matches(&self, kind: &DocumentKind) -> bool {
    match self {
      Self::All => true,
      Self::Only(wanted) => wanted == kind,
    }
  }

  pub fn is_all(&self) -> bool {
    matches!(self, Self::All)
  }
}

impl From<DocumentKind> for TypeFilter {
  fn from(kind: DocumentKind) -> Self {
    Self::Only(kind)
  }
}

impl std::fmt::Display for TypeFilter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::All => write!(f, "all"),
      Self::Only(kind) => write!(f, "{}", kind),
    }
  }
}

impl std::str::FromStr for TypeFilter {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.trim().eq_ignore_ascii_case("all") {
      return Ok(Self::All);
    }
    s.parse::<DocumentKind>().map(Self::Only)
  }
}

impl TryFrom<String> for TypeFilter {
  type Error = String;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<TypeFilter> for String {
  fn from(filter: TypeFilter) -> Self {
    filter.to_string()
  }
}
