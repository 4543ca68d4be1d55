use crate::error::CliError;
use crate::sinks::ExportSink;
use crate::util::{canonicalize_cli_path, collect_inputs, output_path};
use argh::FromArgs;
use bytesize::ByteSize;
use mh4u_assets_api::file_io::load_texture_file;
#[cfg(feature = "multithreaded")]
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(FromArgs, Debug)]
/// Decode .tex files to PNG
#[argh(subcommand, name = "texture")]
pub struct TextureCmd {
    /// a .tex file or a directory searched recursively for them
    #[argh(option)]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,
}

pub fn handle_texture_command(cmd: TextureCmd) -> Result<(), CliError> {
    let entries = collect_inputs(&cmd.input, "tex")?;
    if entries.is_empty() {
        println!("No .tex files found.");
        return Ok(());
    }
    tracing::info!(count = entries.len(), "decoding textures");

    let start = Instant::now();
    let bytes_processed = AtomicU64::new(0);
    let failures = AtomicUsize::new(0);

    let process = |path: &PathBuf| {
        if let Err(error) = export_texture(path, &cmd.input, &cmd.output, &bytes_processed) {
            failures.fetch_add(1, Ordering::Relaxed);
            tracing::error!(path = %path.display(), %error, "failed to export texture");
        }
    };

    #[cfg(feature = "multithreaded")]
    entries.par_iter().for_each(process);
    #[cfg(not(feature = "multithreaded"))]
    entries.iter().for_each(process);

    let failed = failures.load(Ordering::Relaxed);
    println!(
        "Exported {} of {} textures ({}) in {:.2?}",
        entries.len() - failed,
        entries.len(),
        ByteSize(bytes_processed.load(Ordering::Relaxed)),
        start.elapsed()
    );
    Ok(())
}

fn export_texture(
    path: &Path,
    input_root: &Path,
    output_root: &Path,
    bytes_processed: &AtomicU64,
) -> Result<(), CliError> {
    let target = output_path(path, input_root, output_root, "png");
    let mut sink = ExportSink::new(target);
    load_texture_file(path, &mut sink)?;

    if let Ok(metadata) = std::fs::metadata(path) {
        bytes_processed.fetch_add(metadata.len(), Ordering::Relaxed);
    }
    Ok(())
}
