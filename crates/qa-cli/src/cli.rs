use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "qa-edit")]
#[command(about = "Load, edit, and resubmit question & answer posts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides QA_API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a post and print the populated form
    Show {
        #[command(flatten)]
        target: RecordTarget,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Write the inline image preview to this path
        #[arg(long, value_name = "PATH")]
        save_preview: Option<PathBuf>,
    },
    /// Load a post, apply edits, and submit them
    Edit(EditArgs),
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Which post to open: a bare id or a full edit-page URL.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct RecordTarget {
    /// Record id
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,
    /// Edit page URL carrying an `id` query parameter
    #[arg(long, value_name = "PAGE_URL")]
    pub url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    #[command(flatten)]
    pub target: RecordTarget,
    /// New writer name
    #[arg(long)]
    pub writer: Option<String>,
    /// New contact email
    #[arg(long)]
    pub email: Option<String>,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// Edit password
    #[arg(long)]
    pub password: Option<String>,
    /// New HTML content
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,
    /// Read new HTML content from a file
    #[arg(long, value_name = "PATH")]
    pub content_file: Option<PathBuf>,
    /// Hide or show the post in the public list
    #[arg(long, value_name = "BOOL")]
    pub hidden: Option<bool>,
    /// Replace the attachment with this file
    #[arg(long, value_name = "PATH", conflicts_with = "remove_attachment")]
    pub attach: Option<PathBuf>,
    /// Delete the existing attachment
    #[arg(long)]
    pub remove_attachment: bool,
}
