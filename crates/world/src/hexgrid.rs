//! Axial coordinates for the pointy-top hex terrain layout.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// sqrt(3), the horizontal spacing unit of a pointy-top layout.
pub const SQRT_3: f32 = 1.732_050_8;

/// Axial (q, r) address of one hex cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord { q: 0, r: 0 };

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// World-space centre of this cell for tiles of the given corner radius,
    /// lifted to `height` on the Y axis.
    pub fn world_pos(self, size: f32, height: f32) -> Vec3 {
        let x = size * (SQRT_3 * self.q as f32 + SQRT_3 / 2.0 * self.r as f32);
        let z = size * (3.0 / 2.0 * self.r as f32);
        Vec3::new(x, height, z)
    }

    /// Hex-grid distance in cells, via cube coordinates.
    pub fn distance(self, other: Self) -> u32 {
        let dq = self.q - other.q;
        let dr = self.r - other.r;
        let sum = dq.abs() + (dq + dr).abs() + dr.abs();
        // The three cube deltas always sum to an even number.
        debug_assert_eq!(sum % 2, 0);
        (sum / 2) as u32
    }

    /// The six adjacent cells, in fixed rotational order: E, NE, NW, W, SW, SE.
    /// Callers rely on this order for deterministic iteration.
    pub fn neighbors(self) -> [HexCoord; 6] {
        const DIRECTIONS: [(i32, i32); 6] = [
            (1, 0),  // E
            (1, -1), // NE
            (0, -1), // NW
            (-1, 0), // W
            (-1, 1), // SW
            (0, 1),  // SE
        ];
        DIRECTIONS.map(|(dq, dr)| HexCoord::new(self.q + dq, self.r + dr))
    }

    /// Every cell within `radius` of this one (inclusive), in deterministic
    /// q-major order. `range(0)` is just the cell itself.
    pub fn range(self, radius: u32) -> Vec<HexCoord> {
        let rad = radius as i32;
        let mut cells = Vec::new();
        for dq in -rad..=rad {
            let lo = (-rad).max(-dq - rad);
            let hi = rad.min(-dq + rad);
            for dr in lo..=hi {
                cells.push(HexCoord::new(self.q + dq, self.r + dr));
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        for (q, r) in [(0, 0), (3, -2), (-7, 5), (100, 100)] {
            let c = HexCoord::new(q, r);
            assert_eq!(c.distance(c), 0);
        }
    }

    #[test]
    fn neighbors_are_six_distinct_adjacent_cells() {
        let c = HexCoord::new(2, -1);
        let neighbors = c.neighbors();
        let unique: std::collections::HashSet<_> = neighbors.iter().copied().collect();
        assert_eq!(unique.len(), 6);
        for n in neighbors {
            assert_eq!(c.distance(n), 1);
        }
    }

    #[test]
    fn neighbor_order_is_fixed() {
        assert_eq!(
            HexCoord::ORIGIN.neighbors(),
            [
                HexCoord::new(1, 0),
                HexCoord::new(1, -1),
                HexCoord::new(0, -1),
                HexCoord::new(-1, 0),
                HexCoord::new(-1, 1),
                HexCoord::new(0, 1),
            ]
        );
    }

    #[test]
    fn origin_maps_to_height_only() {
        for size in [0.5, 1.0, 4.0, -2.0] {
            assert_eq!(
                HexCoord::ORIGIN.world_pos(size, 2.5),
                Vec3::new(0.0, 2.5, 0.0)
            );
        }
    }

    #[test]
    fn world_pos_matches_pointy_top_layout() {
        let east = HexCoord::new(1, 0).world_pos(2.0, 0.0);
        assert!((east.x - 2.0 * SQRT_3).abs() < 1e-5);
        assert_eq!(east.z, 0.0);

        let south_east = HexCoord::new(0, 1).world_pos(2.0, 0.0);
        assert!((south_east.x - SQRT_3).abs() < 1e-5);
        assert!((south_east.z - 3.0).abs() < 1e-5);
    }

    #[test]
    fn range_is_hexagonal_and_inclusive() {
        assert_eq!(HexCoord::ORIGIN.range(0), vec![HexCoord::ORIGIN]);
        assert_eq!(HexCoord::ORIGIN.range(1).len(), 7);
        assert_eq!(HexCoord::ORIGIN.range(2).len(), 19);

        let centre = HexCoord::new(4, -2);
        for cell in centre.range(2) {
            assert!(centre.distance(cell) <= 2);
        }
    }
}
