use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "content-blocks")]
#[command(version, about = "Render CMS page-builder blocks to DSFR HTML")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a body stream (list of blocks) to an HTML fragment
    Render {
        /// JSON or YAML file holding the blocks
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page index used to resolve internal links
        #[arg(long, value_name = "FILE")]
        pages: Option<PathBuf>,

        /// Write the HTML to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render even if the content has problems
        #[arg(long)]
        skip_validation: bool,
    },

    /// Render a page (title and body) to a full HTML document
    Page {
        /// JSON or YAML file holding the page
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page index used to resolve internal links
        #[arg(long, value_name = "FILE")]
        pages: Option<PathBuf>,

        /// Site configuration (YAML)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write the HTML to a file instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        /// Render even if the content has problems
        #[arg(long)]
        skip_validation: bool,
    },

    /// Check content for problems without rendering
    Validate {
        /// JSON or YAML file holding the blocks
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// The file holds a page rather than a bare body stream
        #[arg(long)]
        page: bool,

        /// Page index used to check internal links
        #[arg(long, value_name = "FILE")]
        pages: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
