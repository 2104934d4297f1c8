use serde::{Deserialize, Serialize};

/// Classification of a stored artifact.
///
/// Serialized as its string tag. Tags outside the known six are kept verbatim
/// in `Unrecognized` so a payload written by a newer version survives a
/// load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentKind {
  Resume,
  CoverLetter,
  Certificate,
  Transcript,
  Portfolio,
  #[default]
  Other,
  Unrecognized(String),
}

impl DocumentKind {
  /// The six kinds a document can be explicitly classified as.
  pub const KNOWN: [DocumentKind; 6] = [
    DocumentKind::Resume,
    DocumentKind::CoverLetter,
    DocumentKind::Certificate,
    DocumentKind::Transcript,
    DocumentKind::Portfolio,
    DocumentKind::Other,
  ];

  pub fn tag(&self) -> &str {
    match self {
      Self::Resume => "resume",
      Self::CoverLetter => "cover-letter",
      Self::Certificate => "certificate",
      Self::Transcript => "transcript",
      Self::Portfolio => "portfolio",
      Self::Other => "other",
      Self::Unrecognized(raw) => raw,
    }
  }

  pub fn is_known(&self) -> bool {
    !matches!(self, Self::Unrecognized(_))
  }

  /// Display metadata for this kind. Never fails.
  pub fn descriptor(&self) -> TypeDescriptor {
    match self {
      Self::Resume => TypeDescriptor::new("Resume", "blue"),
      Self::CoverLetter => TypeDescriptor::new("Cover Letter", "green"),
      Self::Certificate => TypeDescriptor::new("Certificate", "yellow"),
      Self::Transcript => TypeDescriptor::new("Transcript", "purple"),
      Self::Portfolio => TypeDescriptor::new("Portfolio", "pink"),
      Self::Other => TypeDescriptor::new("Other", "gray"),
      Self::Unrecognized(_) => UNKNOWN_DESCRIPTOR,
    }
  }
}

impl From<String> for DocumentKind {
  fn from(tag: String) -> Self {
    match tag.as_str() {
      "resume" => Self::Resume,
      "cover-letter" => Self::CoverLetter,
      "certificate" => Self::Certificate,
      "transcript" => Self::Transcript,
      "portfolio" => Self::Portfolio,
      "other" => Self::Other,
      _ => Self::Unrecognized(tag),
    }
  }
}

impl From<DocumentKind> for String {
  fn from(kind: DocumentKind) -> Self {
    match kind {
      DocumentKind::Unrecognized(raw) => raw,
      known => known.tag().to_string(),
    }
  }
}

impl std::fmt::Display for DocumentKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.tag())
  }
}

/// Lenient parse for user input. Only the known kinds are accepted here;
/// stored payloads go through `From<String>` instead.
impl std::str::FromStr for DocumentKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "resume" | "cv" => Ok(Self::Resume),
      "cover-letter" | "cover_letter" | "coverletter" => Ok(Self::CoverLetter),
      "certificate" => Ok(Self::Certificate),
      "transcript" => Ok(Self::Transcript),
      "portfolio" => Ok(Self::Portfolio),
      "other" => Ok(Self::Other),
      _ => Err(format!("Unknown document type: {}", s)),
    }
  }
}

/// Static display metadata for a document kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
  pub label: &'static str,
  pub color: &'static str,
}

impl TypeDescriptor {
  const fn new(label: &'static str, color: &'static str) -> Self {
    Self { label, color }
  }
}

/// Returned for any stored type tag outside the known set
pub const UNKNOWN_DESCRIPTOR: TypeDescriptor = TypeDescriptor::new("Unknown", "gray");

/// Look up the descriptor for a raw type tag as it appears in storage.
pub fn describe(tag: &str) -> TypeDescriptor {
  DocumentKind::from(tag.to_string()).descriptor()
}
