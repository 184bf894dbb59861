//! Server code generation for apigraph.
//!
//! A [`Resolution`] carries no knowledge of any server framework; an
//! [`Emitter`] turns it into source text. [`ExpressEmitter`] is the reference
//! implementation, and [`generate`] runs it and writes the result to disk.
//!
//! # Modules
//!
//! - [`error`] -- Error types for emission failures
//! - [`express`] -- Express.js emitter and its canned response table

pub mod error;
pub mod express;

pub use error::CodegenError;
pub use express::{ExpressEmitter, DEFAULT_PORT};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use apigraph_policy::Resolution;

/// Renders a resolved route table into server source text.
pub trait Emitter {
    fn emit(&self, resolution: &Resolution) -> String;
}

/// Options controlling server generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Where the generated server file is written.
    pub output_path: PathBuf,

    /// Port the generated server listens on.
    pub port: u16,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            output_path: PathBuf::from("./server.js"),
            port: DEFAULT_PORT,
        }
    }
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitResult {
    /// Path of the written server file.
    pub output_path: PathBuf,

    /// Number of route handlers emitted.
    pub route_count: usize,

    /// Size of the written file in bytes.
    pub bytes_written: u64,
}

/// Emits with `emitter` and writes the source to `output_path`, creating
/// missing parent directories.
pub fn write_server(
    emitter: &dyn Emitter,
    resolution: &Resolution,
    output_path: &Path,
) -> Result<EmitResult, CodegenError> {
    let source = emitter.emit(resolution);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, &source)?;

    let result = EmitResult {
        output_path: output_path.to_path_buf(),
        route_count: resolution.routes.len(),
        bytes_written: source.len() as u64,
    };
    tracing::info!(
        path = %result.output_path.display(),
        routes = result.route_count,
        bytes = result.bytes_written,
        "generated server"
    );
    Ok(result)
}

/// Generates an Express server according to `options`.
pub fn generate(resolution: &Resolution, options: &EmitOptions) -> Result<EmitResult, CodegenError> {
    write_server(
        &ExpressEmitter::new(options.port),
        resolution,
        &options.output_path,
    )
}
