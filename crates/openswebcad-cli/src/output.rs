use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use param_types::Artifact;
use tracing::debug;

/// Geometry dialects artifacts can be written as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Openscad,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Openscad => "scad",
        }
    }
}

/// Where and how artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub directory: PathBuf,
    pub format: OutputFormat,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: OutputFormat::default(),
        }
    }
}

impl WriteOptions {
    /// The file an artifact of the given name is written to.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.directory
            .join(format!("{name}.{}", self.format.extension()))
    }
}

/// Errors while writing artifacts.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("artifact name {name:?} is not a plain file name")]
    InvalidArtifactName { name: String },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write each artifact to `<directory>/<name>.<extension>`.
///
/// Artifact names are checked before anything touches the disk. The
/// directory (and its parents) is created when absent. Returns the
/// written paths in artifact order.
pub fn write_artifacts(
    options: &WriteOptions,
    artifacts: &[Artifact],
) -> Result<Vec<PathBuf>, OutputError> {
    for artifact in artifacts {
        if !is_plain_file_name(&artifact.name) {
            return Err(OutputError::InvalidArtifactName {
                name: artifact.name.clone(),
            });
        }
    }

    let dir = &options.directory;
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
    }
    if !dir.is_dir() {
        return Err(OutputError::NotADirectory { path: dir.clone() });
    }

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = options.artifact_path(&artifact.name);
        fs::write(&path, &artifact.content).map_err(|source| io_error(&path, source))?;
        debug!(path = %path.display(), bytes = artifact.content.len(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

fn io_error(path: &Path, source: io::Error) -> OutputError {
    OutputError::Io {
        path: path.to_path_buf(),
        source,
    }
}
