//! Error types for the wg-cli demo program.

use std::path::PathBuf;

use wg_graph::GraphError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read graph file: {path}")]
    GraphFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse graph file: {path}")]
    GraphFileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}
