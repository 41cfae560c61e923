#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use bevy::render::mesh::{Indices, VertexAttributeValues};

    use super::super::meshes::{build_blade_mesh, BLADE_BOX_COUNT};

    #[test]
    fn blade_mesh_has_geometry() {
        let mesh = build_blade_mesh(4.5, 0.9);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .expect("blade mesh should have positions");
        match positions {
            VertexAttributeValues::Float32x3(v) => {
                assert_eq!(v.len(), BLADE_BOX_COUNT * 8);
            }
            _ => panic!("unexpected vertex attribute type"),
        }
    }

    #[test]
    fn blade_mesh_index_count() {
        let mesh = build_blade_mesh(4.5, 0.9);
        if let Some(Indices::U32(idx)) = mesh.indices() {
            // Each box = 36 indices (12 triangles).
            assert_eq!(idx.len(), BLADE_BOX_COUNT * 36);
        } else {
            panic!("blade mesh should have u32 indices");
        }
    }

    #[test]
    fn blade_spans_its_length_along_y() {
        let length = 4.5;
        let mesh = build_blade_mesh(length, 0.9);
        let Some(VertexAttributeValues::Float32x3(v)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("blade mesh should have positions");
        };
        let max_y = v.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        let min_y = v.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
        assert!((max_y - length).abs() < 1e-4);
        assert!(min_y <= 0.0);
    }
}
