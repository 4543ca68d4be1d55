//! Wavefront OBJ/MTL output.

use mh4u_assets_api::Mesh;
use std::io::{self, Write};

/// Writes submeshes as one OBJ object each. Indices are offset so every object
/// addresses its own vertices in the shared, 1-based numbering.
///
/// `material` is the `.mtl` file to reference and the material every object uses.
pub fn write_obj<W: Write>(
    writer: &mut W,
    meshes: &[(usize, Mesh)],
    material_names: &[String],
    material: Option<(String, &str)>,
) -> io::Result<()> {
    if !material_names.is_empty() {
        writeln!(writer, "# materials: {}", material_names.join(", "))?;
    }
    if let Some((library, _)) = &material {
        writeln!(writer, "mtllib {library}")?;
    }

    let mut vertex_base = 1;
    let mut uv_base = 1;
    for (index, mesh) in meshes {
        writeln!(writer, "o submesh_{index}")?;
        if let Some((_, name)) = &material {
            writeln!(writer, "usemtl {name}")?;
        }

        for [x, y, z] in &mesh.positions {
            writeln!(writer, "v {x} {y} {z}")?;
        }
        for [u, v] in &mesh.uvs {
            writeln!(writer, "vt {u} {v}")?;
        }

        let textured = mesh.has_uvs();
        for triangle in &mesh.triangles {
            let [a, b, c] = triangle.map(|i| i as usize);
            if textured {
                let (va, vb, vc) = (a + vertex_base, b + vertex_base, c + vertex_base);
                let (ta, tb, tc) = (a + uv_base, b + uv_base, c + uv_base);
                writeln!(writer, "f {va}/{ta} {vb}/{tb} {vc}/{tc}")?;
            } else {
                writeln!(
                    writer,
                    "f {} {} {}",
                    a + vertex_base,
                    b + vertex_base,
                    c + vertex_base
                )?;
            }
        }

        vertex_base += mesh.positions.len();
        uv_base += mesh.uvs.len();
    }
    writer.flush()
}

/// Writes a single material that maps `texture` as its diffuse colour.
pub fn write_mtl<W: Write>(writer: &mut W, name: &str, texture: &str) -> io::Result<()> {
    writeln!(writer, "newmtl {name}")?;
    writeln!(writer, "Kd 1.0 1.0 1.0")?;
    writeln!(writer, "map_Kd {texture}")?;
    writer.flush()
}
