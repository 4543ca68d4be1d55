#![no_main]

// Arbitrary bytes must load or fail cleanly, and every delivered triangle must stay
// inside its submesh.

use libfuzzer_sys::fuzz_target;
use mh4u_assets_api::{load_model_from_slice, LoadSettings, MemorySink};

fuzz_target!(|data: &[u8]| {
    let settings = LoadSettings {
        continue_on_error: true,
        ..Default::default()
    };
    let mut sink = MemorySink::default();
    if load_model_from_slice(data, &mut sink, &settings).is_ok() {
        for (_, mesh) in &sink.meshes {
            let vertex_count = mesh.vertex_count();
            assert!(mesh
                .triangles
                .iter()
                .flatten()
                .all(|&index| (index as usize) < vertex_count));
        }
    }
});
