use crate::error::CliError;
use crate::util::has_extension;
use argh::FromArgs;
use bytesize::ByteSize;
use mh4u_assets_mod::constants::MOD_MAGIC;
use mh4u_assets_mod::{material_names, parse_mod_header, submesh_descriptor};
use mh4u_assets_tex::constants::TEX_MAGIC;
use mh4u_assets_tex::parse_tex_header;
use std::fs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print the header of a .tex or .mod file
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// the file to inspect
    #[argh(positional)]
    pub input: PathBuf,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), CliError> {
    let data = fs::read(&cmd.input)?;
    println!("{} ({})", cmd.input.display(), ByteSize(data.len() as u64));

    if data.starts_with(&MOD_MAGIC) || has_extension(&cmd.input, "mod") {
        print_model_info(&data)
    } else if data.starts_with(&TEX_MAGIC) || has_extension(&cmd.input, "tex") {
        print_texture_info(&data)
    } else {
        Err(CliError::UnknownFormat(cmd.input))
    }
}

fn print_texture_info(data: &[u8]) -> Result<(), CliError> {
    let header = parse_tex_header(data)?;
    let format = header.pixel_format()?;
    println!(
        "Texture {}x{}, {:?}, {} mipmap(s)",
        header.width(),
        header.height(),
        format,
        header.mipmap_count()
    );
    println!(
        "Top level: {} at offset {}",
        ByteSize(format.payload_len(header.width(), header.height()) as u64),
        header.data_offset()
    );
    Ok(())
}

fn print_model_info(data: &[u8]) -> Result<(), CliError> {
    let header = parse_mod_header(data)?;
    println!(
        "Model version {:#x}: {} bone(s), {} submesh(es), {} material(s), {} vertices",
        header.version(),
        header.bone_count(),
        header.mesh_count(),
        header.material_count(),
        header.vertex_count
    );

    match material_names(data, &header) {
        Ok(names) if !names.is_empty() => println!("Materials: {}", names.join(", ")),
        Ok(_) => {}
        Err(error) => println!("Materials: unreadable ({error})"),
    }

    for index in 0..header.mesh_count() {
        let descriptor = submesh_descriptor(data, &header, index)?;
        println!(
            "  submesh {index}: {} vertices (stride {}, start {}), {} indices{}{}",
            descriptor.vertex_count(),
            descriptor.stride(),
            descriptor.vertex_start_index,
            descriptor.index_count,
            if descriptor.has_uvs() { ", uv" } else { "" },
            if descriptor.has_skin() { ", skinned" } else { "" },
        );
    }
    Ok(())
}
