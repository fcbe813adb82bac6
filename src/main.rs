//! Debug Inspector - CLI Entry Point
//!
//! Commands:
//! - `debug-inspector view <payload>` - Interactive inspector dialog
//! - `debug-inspector dump <payload>` - Print the initially visible tree
//! - `debug-inspector expand <keys>... --level N` - Explain a node's initial state

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "debug-inspector")]
#[command(version)]
#[command(about = "Inspect the debug metadata describing how content was generated")]
struct Cli {
    /// Write logs to this file (the terminal UI owns the screen)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive inspector on a payload
    View {
        /// Path to the JSON payload
        payload: PathBuf,
        /// Start in the loading state
        #[arg(long)]
        loading: bool,
        /// Text of a custom trigger replacing the default button
        #[arg(short, long)]
        trigger: Option<String>,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the rows the tree shows before any interaction
    Dump {
        /// Path to the JSON payload
        payload: PathBuf,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show whether a node starts expanded and which rule decided it
    Expand {
        /// Key path from the top-level field down
        keys: Vec<String>,
        /// Nesting level (top-level fields are level 1)
        #[arg(short, long)]
        level: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref());

    match cli.command {
        Some(Commands::View { payload, loading, trigger, config }) => {
            view_payload(&payload, loading, trigger, config.as_deref());
        }
        Some(Commands::Dump { payload, config }) => {
            dump_payload(&payload, config.as_deref());
        }
        Some(Commands::Expand { keys, level }) => {
            explain_expansion(&keys, level);
        }
        None => {
            println!("Debug Inspector v{}", env!("CARGO_PKG_VERSION"));
            println!("Inspect how a piece of content was generated");
            println!();
            println!("Use --help for available commands");
        }
    }
}

fn init_logging(log_file: Option<&Path>) {
    use tracing_subscriber::EnvFilter;

    // Without a log file, stay silent: stderr would tear the alternate screen.
    let Some(path) = log_file else {
        return;
    };

    match std::fs::File::create(path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        Err(e) => {
            eprintln!("❌ Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> debug_inspector::InspectorConfig {
    use debug_inspector::InspectorConfig;

    match InspectorConfig::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {}", e);
            std::process::exit(1);
        }
    }
}

fn load(path: &Path) -> debug_inspector::DebugPayload {
    match debug_inspector::load_payload(path) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("❌ Failed to load payload: {}", e);
            std::process::exit(1);
        }
    }
}

fn view_payload(path: &Path, loading: bool, trigger: Option<String>, config: Option<&Path>) {
    use debug_inspector::tui::{run_inspector, RunOptions};

    let config = load_config(config);
    let payload = load(path);

    let options = RunOptions {
        source: path.display().to_string(),
        loading,
        trigger,
        config,
    };

    if let Err(e) = run_inspector(payload, options) {
        eprintln!("❌ Inspector error: {}", e);
        std::process::exit(1);
    }
}

/// Heading printed above rendered content; string types appear unquoted.
fn content_heading(content_type: Option<&serde_json::Value>) -> String {
    match content_type {
        Some(ct) => {
            let label = ct.as_str().map_or_else(|| ct.to_string(), str::to_string);
            format!("━━━ content ({}) ━━━", label)
        }
        None => "━━━ content ━━━".to_string(),
    }
}

fn dump_payload(path: &Path, config: Option<&Path>) {
    use debug_inspector::inspector::{select_view_with, InspectorProps, InspectorView};
    use debug_inspector::tree::{initial_expansion, TreeState};

    let config = load_config(config);
    let payload = load(path);
    let props = InspectorProps::<()>::new(Some(&payload));

    match select_view_with(&props, config.tree_settings()) {
        Some(InspectorView::Content { content, content_type }) => {
            println!("{}", content_heading(content_type));
            match content {
                serde_json::Value::String(s) => println!("{}", s),
                other => println!("{:#}", other),
            }
        }
        Some(InspectorView::Tree { data, settings }) => {
            let rows = TreeState::new().rows(data, &settings.options, &initial_expansion);
            for row in rows {
                let depth = if settings.options.hide_root { row.level.saturating_sub(1) } else { row.level };
                let arrow = match (row.kind.is_collection(), row.expanded) {
                    (true, true) => "▼ ",
                    (true, false) => "▶ ",
                    _ => "  ",
                };
                let label = if row.label.is_empty() { String::new() } else { format!("{}: ", row.label) };
                println!("{}{}{}{}", "  ".repeat(depth), arrow, label, row.value);
            }
        }
        Some(InspectorView::Loading) | None => {}
    }
}

fn explain_expansion(keys: &[String], level: Option<usize>) {
    use debug_inspector::tree::{matching_rule, KeyPath, KeySegment};

    let path: KeyPath = keys
        .iter()
        .map(|k| match k.parse::<usize>() {
            Ok(i) => KeySegment::Index(i),
            Err(_) => KeySegment::Key(k.clone()),
        })
        .collect();
    let level = level.unwrap_or(path.len());
    let rule = matching_rule(&path, level);

    println!(
        "{} (level {}): {} by rule '{}'",
        if path.is_empty() { "<root>".to_string() } else { path.to_string() },
        level,
        if rule.expand { "expanded" } else { "collapsed" },
        rule.name,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_heading_unquotes_string_types() {
        assert_eq!(content_heading(Some(&json!("text/markdown"))), "━━━ content (text/markdown) ━━━");
        assert_eq!(content_heading(Some(&json!(42))), "━━━ content (42) ━━━");
        assert_eq!(content_heading(None), "━━━ content ━━━");
    }
}
