//! Hexagonal terrain tile field around the windmill.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use world::config::TILE_THICKNESS;
use world::hexgrid::HexCoord;
use world::settings::ViewerSettings;

/// One terrain tile and the cell it occupies.
#[derive(Component)]
pub struct TerrainTile {
    pub coord: HexCoord,
}

/// Startup system: spawn a tile for every cell within the configured radius,
/// placed by the hex layout.
pub fn spawn_terrain(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
) {
    // Slight shrink leaves a visible seam between tiles.
    let tile_mesh = meshes.add(build_hex_tile_mesh(settings.hex_size * 0.98, TILE_THICKNESS));
    let grass = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.62, 0.30),
        perceptual_roughness: 0.9,
        ..default()
    });

    for coord in HexCoord::ORIGIN.range(settings.terrain_radius) {
        let pos = coord.world_pos(settings.hex_size, tile_height(coord));
        commands.spawn((
            TerrainTile { coord },
            Mesh3d(tile_mesh.clone()),
            MeshMaterial3d(grass.clone()),
            Transform::from_translation(pos),
            Visibility::default(),
        ));
    }
}

/// Deterministic per-tile height jitter so the field is not a dead-flat
/// plane. The origin cell stays level: the windmill stands on it.
fn tile_height(coord: HexCoord) -> f32 {
    if coord == HexCoord::ORIGIN {
        return 0.0;
    }
    let hash = coord.q.wrapping_mul(7).wrapping_add(coord.r.wrapping_mul(13));
    hash.rem_euclid(5) as f32 * 0.08 - 0.16
}

/// Build a pointy-top hexagonal prism: a fan-triangulated top face plus six
/// side walls. The underside is never visible and is left open. Top surface
/// sits at y = 0 so the tile's transform height is the walkable height.
pub(crate) fn build_hex_tile_mesh(size: f32, thickness: f32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Pointy-top corner k sits at 30 + 60k degrees.
    let corner = |k: usize| -> (f32, f32) {
        let angle = std::f32::consts::FRAC_PI_3 * k as f32 + std::f32::consts::FRAC_PI_6;
        (size * angle.cos(), size * angle.sin())
    };

    // Top face: fan around the centre, wound for a +Y normal.
    positions.push([0.0, 0.0, 0.0]);
    normals.push([0.0, 1.0, 0.0]);
    for k in 0..6 {
        let (x, z) = corner(k);
        positions.push([x, 0.0, z]);
        normals.push([0.0, 1.0, 0.0]);
    }
    for k in 0..6u32 {
        let a = 1 + k;
        let b = 1 + (k + 1) % 6;
        indices.extend_from_slice(&[0, b, a]);
    }

    // Side walls: one quad per edge with a flat outward normal.
    for k in 0..6 {
        let (x0, z0) = corner(k);
        let (x1, z1) = corner((k + 1) % 6);
        let nx = (x0 + x1) * 0.5;
        let nz = (z0 + z1) * 0.5;
        let len = (nx * nx + nz * nz).sqrt().max(f32::EPSILON);
        let normal = [nx / len, 0.0, nz / len];

        let base = positions.len() as u32;
        positions.extend_from_slice(&[
            [x0, 0.0, z0],
            [x1, 0.0, z1],
            [x1, -thickness, z1],
            [x0, -thickness, z0],
        ]);
        normals.extend_from_slice(&[normal; 4]);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn tile_mesh_has_expected_geometry() {
        let mesh = build_hex_tile_mesh(4.0, 0.6);

        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .expect("tile mesh should have positions");
        match positions {
            VertexAttributeValues::Float32x3(v) => {
                // 7 top-fan vertices + 4 per side wall.
                assert_eq!(v.len(), 7 + 6 * 4);
            }
            _ => panic!("unexpected vertex attribute type"),
        }

        if let Some(Indices::U32(idx)) = mesh.indices() {
            // 6 top triangles + 2 triangles per side wall.
            assert_eq!(idx.len(), 6 * 3 + 6 * 6);
        } else {
            panic!("tile mesh should have u32 indices");
        }
    }

    #[test]
    fn top_face_corners_lie_on_the_tile_radius() {
        let size = 4.0;
        let mesh = build_hex_tile_mesh(size, 0.6);
        let Some(VertexAttributeValues::Float32x3(v)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("tile mesh should have positions");
        };
        for corner in &v[1..7] {
            let radius = (corner[0] * corner[0] + corner[2] * corner[2]).sqrt();
            assert!((radius - size).abs() < 1e-4);
            assert_eq!(corner[1], 0.0);
        }
    }

    #[test]
    fn origin_tile_is_level() {
        assert_eq!(tile_height(HexCoord::ORIGIN), 0.0);
    }

    #[test]
    fn tile_heights_are_deterministic_and_bounded() {
        for coord in HexCoord::ORIGIN.range(3) {
            let h = tile_height(coord);
            assert_eq!(h, tile_height(coord));
            assert!((-0.17..=0.17).contains(&h));
        }
    }
}
