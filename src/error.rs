use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Invalid content:\n{}", format_problems(.0))]
    InvalidContent(Vec<String>),

    #[error("Validation failed with {0} problem(s)")]
    ValidationFailed(usize),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn format_problems(problems: &[String]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {}", p))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, BlockError>;
