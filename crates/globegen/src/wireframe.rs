use glam::Vec3;
use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

/// Line-list mesh data that any rendering engine can upload.
///
/// `indices` holds pairs, one pair per edge.
#[derive(Debug, Clone)]
pub struct LineMeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl LineMeshData {
    pub fn edge_count(&self) -> usize {
        self.indices.len() / 2
    }

    /// Wireframe of a UV sphere.
    ///
    /// Vertices form a `(width_segments + 1) x (height_segments + 1)` grid of
    /// latitude rows from the north pole down. The sphere is triangulated and
    /// every distinct triangle edge becomes one line, so the wire pattern
    /// includes the quad diagonals of a triangulated globe.
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);
        let columns = width_segments + 1;

        let mut positions = Vec::with_capacity((columns * (height_segments + 1)) as usize);
        let mut normals = Vec::with_capacity(positions.capacity());

        for iy in 0..=height_segments {
            let v = iy as f32 / height_segments as f32;
            let theta = v * PI;
            for ix in 0..=width_segments {
                let u = ix as f32 / width_segments as f32;
                let phi = u * TAU;
                let normal = Vec3::new(
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                );
                positions.push((normal * radius).to_array());
                normals.push(normal.to_array());
            }
        }

        let grid = |ix: u32, iy: u32| iy * columns + ix;
        let mut edges = EdgeSet::default();
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = grid(ix + 1, iy);
                let b = grid(ix, iy);
                let c = grid(ix, iy + 1);
                let d = grid(ix + 1, iy + 1);

                // The pole rows collapse to a single point, so only one
                // triangle per cell there.
                if iy != 0 {
                    edges.add_triangle(a, b, d);
                }
                if iy != height_segments - 1 {
                    edges.add_triangle(b, c, d);
                }
            }
        }

        Self {
            positions,
            normals,
            indices: edges.indices,
        }
    }
}

#[derive(Default)]
struct EdgeSet {
    seen: HashSet<(u32, u32)>,
    indices: Vec<u32>,
}

impl EdgeSet {
    fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.add(a, b);
        self.add(b, c);
        self.add(c, a);
    }

    fn add(&mut self, a: u32, b: u32) {
        let key = (a.min(b), a.max(b));
        if self.seen.insert(key) {
            self.indices.extend_from_slice(&[key.0, key.1]);
        }
    }
}
