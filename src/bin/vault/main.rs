mod commands;

use clap::Parser;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use std::sync::Arc;

use commands::{Commands, VaultArgs};
use jobvault::catalog::{CatalogEngine, Notification, NotificationSink, RawFile, SystemClock};
use jobvault::config::VaultConfig;
use jobvault::types::{Document, DocumentId, DocumentPatch};

/// Prints notifications to the terminal
struct ConsoleSink;

impl NotificationSink for ConsoleSink {
  fn notify(&self, notification: Notification) {
    if notification.is_error() {
      eprintln!(
        "{} {}",
        format!("{}:", notification.title).red().bold(),
        notification.description
      );
    } else {
      println!(
        "{} {}",
        format!("{}:", notification.title).green().bold(),
        notification.description
      );
    }
  }
}

fn main() -> Result<(), anyhow::Error> {
  let args = VaultArgs::parse();

  // Load config: explicit path > auto-detect > defaults
  let mut config = if let Some(path) = &args.config {
    VaultConfig::from_file(path)?
  } else {
    VaultConfig::find_and_load()?.unwrap_or_default()
  };

  // CLI args override config file
  if let Some(backend) = args.backend {
    config.storage.backend = backend;
  }
  if let Some(path) = args.path {
    config.storage.path = Some(path);
  }
  if let Some(level) = args.log_level {
    config.logging.level = level;
  }

  jobvault::logging::init(&config.logging);

  let store = config.open_store()?;
  let mut engine = CatalogEngine::open(store, Arc::new(SystemClock), Arc::new(ConsoleSink));

  match args.command {
    Commands::Add { files } => {
      let mut raw = Vec::with_capacity(files.len());
      for path in &files {
        match RawFile::from_path(path) {
          Ok(file) => raw.push(file),
          Err(e) => eprintln!("{} {}: {}", "skipped".yellow(), path.display(), e),
        }
      }
      engine.ingest(raw)?;
    }
    Commands::List {
      search,
      type_filter,
      json,
    } => {
      engine.set_search_term(search);
      engine.set_type_filter(type_filter);
      let visible = engine.visible();
      if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
      } else if visible.is_empty() {
        println!("{}", "No documents found".dimmed());
      } else {
        print_documents(&visible);
      }
    }
    Commands::Show { id } => {
      print_document(find_document(&engine, &id)?);
    }
    Commands::Edit {
      id,
      name,
      kind,
      version,
      description,
    } => {
      let patch = DocumentPatch {
        name,
        kind,
        version,
        description,
        ..Default::default()
      };
      if patch.is_empty() {
        anyhow::bail!("Nothing to change; pass --name, --type, --version or --description");
      }
      apply_patch(&mut engine, &id, patch)?;
    }
    Commands::Tag { id, tags } => {
      let patch = DocumentPatch {
        add_tags: tags,
        ..Default::default()
      };
      apply_patch(&mut engine, &id, patch)?;
    }
    Commands::Untag { id, tags } => {
      let patch = DocumentPatch {
        remove_tags: tags,
        ..Default::default()
      };
      apply_patch(&mut engine, &id, patch)?;
    }
    Commands::Delete { id } => {
      let id = resolve_id(&engine, &id)?;
      engine.delete(id)?;
    }
    Commands::Stats => {
      let stats = engine.stats();
      let mut table = Table::new();
      table.load_preset(UTF8_FULL);
      table.set_header(vec!["Type", "Documents"]);
      for (kind, count) in stats.known_counts() {
        table.add_row(vec![kind.descriptor().label.to_string(), count.to_string()]);
      }
      let unknown = stats.unrecognized();
      if unknown > 0 {
        table.add_row(vec!["Unknown".to_string(), unknown.to_string()]);
      }
      table.add_row(vec!["Total".to_string(), stats.total.to_string()]);
      println!("{table}");
    }
    Commands::Tags => {
      for tag in engine.all_tags() {
        println!("{}", tag);
      }
    }
  }

  Ok(())
}

/// Accept a full id or an unambiguous prefix of one
fn resolve_id(engine: &CatalogEngine, input: &str) -> Result<DocumentId, anyhow::Error> {
  if let Ok(id) = input.parse::<DocumentId>() {
    return Ok(id);
  }

  let prefix = input.trim().to_lowercase();
  if prefix.is_empty() {
    anyhow::bail!("Document id must not be empty");
  }
  let matches: Vec<DocumentId> = engine
    .documents()
    .iter()
    .map(|doc| doc.id)
    .filter(|id| id.to_string().starts_with(&prefix))
    .collect();

  match matches.as_slice() {
    [id] => Ok(*id),
    [] => anyhow::bail!("No document matches '{}'", input),
    _ => anyhow::bail!("'{}' matches {} documents; use more characters", input, matches.len()),
  }
}

fn find_document<'a>(
  engine: &'a CatalogEngine,
  input: &str,
) -> Result<&'a Document, anyhow::Error> {
  let id = resolve_id(engine, input)?;
  engine
    .get(id)
    .ok_or_else(|| anyhow::anyhow!("No document matches '{}'", input))
}

fn apply_patch(
  engine: &mut CatalogEngine,
  input: &str,
  patch: DocumentPatch,
) -> Result<(), anyhow::Error> {
  let id = resolve_id(engine, input)?;
  if engine.update(id, patch)?.is_none() {
    anyhow::bail!("No document matches '{}'", input);
  }
  Ok(())
}

fn print_documents(documents: &[&Document]) {
  let mut table = Table::new();
  table.load_preset(UTF8_FULL);
  table.set_header(vec!["ID", "Name", "Type", "Size", "Modified", "Version", "Tags"]);
  for doc in documents {
    let id = doc.id.to_string();
    table.add_row(vec![
      id[..8].to_string(),
      doc.name.clone(),
      doc.descriptor().label.to_string(),
      doc.size.clone(),
      doc.date_modified.to_string(),
      doc.version.clone(),
      doc.tags.join(", "),
    ]);
  }
  println!("{table}");
}

fn print_document(doc: &Document) {
  println!("{}", doc.name.bold());
  println!("  {:<12} {}", "id", doc.id);
  println!("  {:<12} {} ({})", "type", doc.descriptor().label, doc.kind);
  println!("  {:<12} {}", "size", doc.size);
  println!("  {:<12} {}", "version", doc.version);
  println!("  {:<12} {}", "created", doc.date_created);
  println!("  {:<12} {}", "modified", doc.date_modified);
  if !doc.tags.is_empty() {
    println!("  {:<12} {}", "tags", doc.tags.join(", "));
  }
  if !doc.description.is_empty() {
    println!("  {:<12} {}", "description", doc.description);
  }
}
