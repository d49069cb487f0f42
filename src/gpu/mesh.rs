use std::f32::consts::{PI, TAU};

/// Unit sphere vertex: position doubles as the normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Position on the unit sphere.
    pub position: [f32; 3],
}

/// UV sphere with `segments` slices and stacks, as an indexed triangle
/// list.
#[must_use]
pub fn unit_sphere(segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let n = segments.max(3);
    let mut vertices = Vec::with_capacity(((n + 1) * (n + 1)) as usize);
    for stack in 0..=n {
        let phi = PI * stack as f32 / n as f32;
        for slice in 0..=n {
            let theta = TAU * slice as f32 / n as f32;
            vertices.push(MeshVertex {
                position: [
                    -phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                ],
            });
        }
    }

    let row = n + 1;
    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for stack in 0..n {
        for slice in 0..n {
            let a = stack * row + slice;
            let b = a + row;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertices_are_unit_length() {
        let (vertices, indices) = unit_sphere(16);
        assert_eq!(vertices.len(), 17 * 17);
        assert_eq!(indices.len(), 16 * 16 * 6);
        for v in &vertices {
            let [x, y, z] = v.position;
            assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < 1e-5);
        }
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }
}
