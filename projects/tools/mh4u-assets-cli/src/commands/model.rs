use crate::error::CliError;
use crate::sinks::ExportSink;
use crate::util::{canonicalize_cli_path, output_path};
use argh::FromArgs;
use mh4u_assets_api::file_io::{load_model_file, load_texture_file};
use mh4u_assets_api::{LoadSettings, MeshDecodeSettings, StripMode};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Convert a .mod model to OBJ, optionally with a .tex texture applied
#[argh(subcommand, name = "model")]
pub struct ModelCmd {
    /// the .mod file to convert
    #[argh(option)]
    pub input: PathBuf,

    /// output directory path
    #[argh(option, from_str_fn(canonicalize_cli_path))]
    pub output: PathBuf,

    /// a .tex file exported next to the model and bound as its material
    #[argh(option)]
    pub texture: Option<PathBuf>,

    /// skip submeshes that fail to decode instead of stopping
    #[argh(switch)]
    pub continue_on_error: bool,

    /// do not export UVs
    #[argh(switch)]
    pub no_uvs: bool,

    /// do not decode bone indices and weights
    #[argh(switch)]
    pub no_skin: bool,

    /// reject strips with fewer than two indices
    #[argh(switch)]
    pub strict_strips: bool,
}

impl ModelCmd {
    fn settings(&self) -> LoadSettings {
        LoadSettings {
            mesh: MeshDecodeSettings {
                decode_uvs: !self.no_uvs,
                decode_skin: !self.no_skin,
                strip_mode: if self.strict_strips {
                    StripMode::Strict
                } else {
                    StripMode::Lenient
                },
            },
            continue_on_error: self.continue_on_error,
        }
    }
}

pub fn handle_model_command(cmd: ModelCmd) -> Result<(), CliError> {
    let obj_path = output_path(&cmd.input, &cmd.input, &cmd.output, "obj");
    let texture_path = match &cmd.texture {
        Some(texture) => Some(output_path(texture, texture, &cmd.output, "png")),
        None => None,
    };

    let mut sink = ExportSink::new(texture_path.clone().unwrap_or_default());
    if let Some(texture) = &cmd.texture {
        load_texture_file(texture, &mut sink)?;
    }

    let summary = load_model_file(&cmd.input, &mut sink, &cmd.settings())?;
    sink.write_model(&obj_path, texture_path.as_deref())?;

    println!(
        "Exported {} of {} submeshes to {}",
        summary.delivered,
        summary.header.mesh_count(),
        obj_path.display()
    );
    if !summary.skipped.is_empty() {
        println!("Skipped submeshes: {:?}", summary.skipped);
    }
    Ok(())
}
