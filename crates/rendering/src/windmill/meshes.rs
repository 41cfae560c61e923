use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

/// Boxes per blade: one spar, two rails, six crossbars.
pub(crate) const BLADE_BOX_COUNT: usize = 9;

/// Build a lattice sail blade from thin boxes: a central spar along +Y with
/// two side rails and crossbars, like a traditional windmill sail frame.
/// The blade spans `[0, length]` on Y and `[-width/2, width/2]` on X.
pub(crate) fn build_blade_mesh(length: f32, width: f32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    let r = 0.03 * length; // lattice bar half-thickness

    // Helper: add an axis-aligned box between two corners.
    let mut add_box = |min: [f32; 3], max: [f32; 3]| {
        let base = positions.len() as u32;
        let (x0, y0, z0) = (min[0], min[1], min[2]);
        let (x1, y1, z1) = (max[0], max[1], max[2]);

        #[rustfmt::skip]
        let verts: [[f32; 3]; 8] = [
            [x0, y0, z0], [x1, y0, z0], [x1, y1, z0], [x0, y1, z0],
            [x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1],
        ];

        // 6 faces x 2 triangles = 36 indices
        #[rustfmt::skip]
        let face_indices: [u32; 36] = [
            0, 1, 2, 0, 2, 3,
            4, 6, 5, 4, 7, 6,
            0, 3, 7, 0, 7, 4,
            1, 5, 6, 1, 6, 2,
            0, 4, 5, 0, 5, 1,
            3, 2, 6, 3, 6, 7,
        ];

        #[rustfmt::skip]
        let corner_normals: [[f32; 3]; 8] = [
            [-0.577, -0.577, -0.577], [ 0.577, -0.577, -0.577],
            [ 0.577,  0.577, -0.577], [-0.577,  0.577, -0.577],
            [-0.577, -0.577,  0.577], [ 0.577, -0.577,  0.577],
            [ 0.577,  0.577,  0.577], [-0.577,  0.577,  0.577],
        ];

        positions.extend_from_slice(&verts);
        normals.extend_from_slice(&corner_normals);
        for idx in &face_indices {
            indices.push(base + idx);
        }
    };

    let half = width / 2.0;

    // Central spar, root to tip.
    add_box([-r, 0.0, -r], [r, length, r]);

    // Side rails over the outer two thirds, where the sail hangs.
    let rail_start = length / 3.0;
    for &x in &[-half, half] {
        add_box([x - r, rail_start, -r], [x + r, length, r]);
    }

    // Crossbars between the rails.
    let bars = 6;
    for i in 0..bars {
        let y = rail_start + (length - rail_start) * (i as f32 / (bars - 1) as f32);
        add_box([-half, y - r, -r], [half, y + r, r]);
    }

    debug_assert_eq!(positions.len(), BLADE_BOX_COUNT * 8);

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}
