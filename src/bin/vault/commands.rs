use clap::{Parser, Subcommand};
use std::path::PathBuf;

use jobvault::config::BackendType;
use jobvault::types::{DocumentKind, TypeFilter};

#[derive(Parser)]
#[command(name = "vault", about = "Job-search document vault", version)]
pub struct VaultArgs {
  /// Config file (defaults to ./jobvault.yaml if present)
  #[arg(short, long, env = "JOBVAULT_CONFIG")]
  pub config: Option<String>,
  /// Storage backend
  #[arg(long, env = "JOBVAULT_BACKEND")]
  pub backend: Option<BackendType>,
  /// SQLite database file, or directory for the file backend
  #[arg(long, env = "JOBVAULT_PATH")]
  pub path: Option<String>,
  #[arg(long)]
  pub log_level: Option<String>,
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
  /// Add files to the vault (metadata only; content is not stored)
  Add {
    #[arg(required = true)]
    files: Vec<PathBuf>,
  },
  /// List documents, optionally filtered
  #[command(alias = "ls")]
  List {
    /// Case-insensitive match on name, description or tags
    #[arg(short, long, default_value = "")]
    search: String,
    /// Document type, or "all"
    #[arg(short = 't', long = "type", default_value = "all")]
    type_filter: TypeFilter,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
  },
  /// Show one document
  Show { id: String },
  /// Edit document metadata
  Edit {
    id: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(short = 't', long = "type")]
    kind: Option<DocumentKind>,
    #[arg(long)]
    version: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
  },
  /// Add tags to a document
  Tag {
    id: String,
    #[arg(required = true)]
    tags: Vec<String>,
  },
  /// Remove tags from a document
  Untag {
    id: String,
    #[arg(required = true)]
    tags: Vec<String>,
  },
  /// Delete a document
  #[command(alias = "rm")]
  Delete { id: String },
  /// Document counts per type
  Stats,
  /// All tags in use
  Tags,
}
