use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use schemapath_compiler::SourceMap;

/// File extension of schema files picked up from directories.
pub const SCHEMA_EXTENSION: &str = "schema";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("schema is required: use positional arguments or -t/--text")]
    NoInput,

    #[error("schema cannot be empty")]
    Empty,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .schema files found in directory '{}'", .0.display())]
    EmptyDirectory(PathBuf),
}

/// Collect every schema source: inline text first, then paths in order.
///
/// A directory contributes its `*.schema` files sorted by path; `-` reads stdin.
pub fn load_schema_sources(paths: &[PathBuf], text: Option<&str>) -> Result<SourceMap, LoadError> {
    if paths.is_empty() && text.is_none() {
        return Err(LoadError::NoInput);
    }

    let mut map = SourceMap::new();
    if let Some(text) = text {
        map.add_inline(text);
    }

    for path in paths {
        if path.as_os_str() == "-" {
            load_stdin(&mut map)?;
        } else if path.is_dir() {
            load_directory(&mut map, path)?;
        } else {
            load_file(&mut map, path)?;
        }
    }

    Ok(map)
}

fn load_stdin(map: &mut SourceMap) -> Result<(), LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    map.add_stdin(&buf);
    Ok(())
}

fn load_file(map: &mut SourceMap, path: &Path) -> Result<(), LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded schema file");
    map.add_file(&path.to_string_lossy(), &content);
    Ok(())
}

fn load_directory(map: &mut SourceMap, dir: &Path) -> Result<(), LoadError> {
    let read_error = |source| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(read_error)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == SCHEMA_EXTENSION))
        .collect();

    if files.is_empty() {
        return Err(LoadError::EmptyDirectory(dir.to_path_buf()));
    }

    // Sort for deterministic ordering
    files.sort();

    for file in files {
        load_file(map, &file)?;
    }
    Ok(())
}
