use clap::Parser;
use content_blocks::cli::{handle_page, handle_render, handle_validate, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            file,
            pages,
            output,
            skip_validation,
        } => handle_render(file, pages, output, skip_validation),
        Commands::Page {
            file,
            pages,
            config,
            output,
            skip_validation,
        } => handle_page(file, pages, config, output, skip_validation),
        Commands::Validate {
            file,
            page,
            pages,
            json,
        } => handle_validate(file, page, pages, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
