use super::{ColorVertex, Geometry, TexturedVertex, Topology, Vertices};

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Corner positions of the 2×2×2 cube, four per face, in face order
/// front, back, top, bottom, right, left.
const CUBE_POSITIONS: [[f32; 3]; 24] = [
    // Front
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    // Back
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    // Top
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    // Bottom
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    // Right
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    // Left
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
];

const CUBE_UVS: [[f32; 2]; 24] = [
    // Front
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    // Back
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [0.0, 0.0],
    // Top
    [0.0, 1.0],
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    // Bottom
    [1.0, 1.0],
    [0.0, 1.0],
    [0.0, 0.0],
    [1.0, 0.0],
    // Right
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
    [0.0, 0.0],
    // Left
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
    [0.0, 1.0],
];

/// Two triangles per face, fanned from the face's first corner.
fn cube_indices() -> Vec<u16> {
    (0..6u16)
        .flat_map(|face| {
            let b = face * 4;
            [b, b + 1, b + 2, b, b + 2, b + 3]
        })
        .collect()
}

/// Triangle with red, green and blue corners.
pub fn triangle() -> Geometry {
    Geometry {
        label: "triangle",
        vertices: Vertices::Color(vec![
            ColorVertex::new([0.0, 1.0, 0.0], RED),
            ColorVertex::new([-1.0, -1.0, 0.0], GREEN),
            ColorVertex::new([1.0, -1.0, 0.0], BLUE),
        ]),
        indices: None,
        topology: Topology::TriangleList,
    }
}

/// The same triangle with one colour for all corners.
pub fn flat_triangle(color: [f32; 4]) -> Geometry {
    let mut g = triangle();
    if let Vertices::Color(v) = &mut g.vertices {
        v.iter_mut().for_each(|c| c.color = color);
    }
    g
}

/// 2×2 square drawn as a triangle strip, one colour for all corners.
pub fn square(color: [f32; 4]) -> Geometry {
    Geometry {
        label: "square",
        vertices: Vertices::Color(
            [
                [1.0, 1.0, 0.0],
                [-1.0, 1.0, 0.0],
                [1.0, -1.0, 0.0],
                [-1.0, -1.0, 0.0],
            ]
            .into_iter()
            .map(|p| ColorVertex::new(p, color))
            .collect(),
        ),
        indices: None,
        topology: Topology::TriangleStrip,
    }
}

/// Four-sided pyramid (no base) with red apex corners.
pub fn pyramid() -> Geometry {
    let apex = [0.0, 1.0, 0.0];
    let front_left = [-1.0, -1.0, 1.0];
    let front_right = [1.0, -1.0, 1.0];
    let back_right = [1.0, -1.0, -1.0];
    let back_left = [-1.0, -1.0, -1.0];

    let faces = [
        [front_left, front_right],
        [front_right, back_right],
        [back_right, back_left],
        [back_left, front_left],
    ];

    let vertices = faces
        .iter()
        .enumerate()
        .flat_map(|(i, [a, b])| {
            // Alternate the base colours so neighbouring faces share a colour along
            // their common edge.
            let (ca, cb) = if i % 2 == 0 { (GREEN, BLUE) } else { (BLUE, GREEN) };
            [
                ColorVertex::new(apex, RED),
                ColorVertex::new(*a, ca),
                ColorVertex::new(*b, cb),
            ]
        })
        .collect();

    Geometry {
        label: "pyramid",
        vertices: Vertices::Color(vertices),
        indices: None,
        topology: Topology::TriangleList,
    }
}

/// Indexed cube with one flat colour per face.
pub fn color_cube() -> Geometry {
    const FACE_COLORS: [[f32; 4]; 6] = [
        [1.0, 0.0, 0.0, 1.0], // front
        [1.0, 1.0, 0.0, 1.0], // back
        [0.0, 1.0, 0.0, 1.0], // top
        [1.0, 0.5, 0.5, 1.0], // bottom
        [1.0, 0.0, 1.0, 1.0], // right
        [0.0, 0.0, 1.0, 1.0], // left
    ];

    let vertices = CUBE_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, p)| ColorVertex::new(*p, FACE_COLORS[i / 4]))
        .collect();

    Geometry {
        label: "color cube",
        vertices: Vertices::Color(vertices),
        indices: Some(cube_indices()),
        topology: Topology::TriangleList,
    }
}

/// Indexed cube with the full texture mapped onto each face.
pub fn textured_cube() -> Geometry {
    let vertices = CUBE_POSITIONS
        .iter()
        .zip(CUBE_UVS.iter())
        .map(|(p, uv)| TexturedVertex::new(*p, *uv))
        .collect();

    Geometry {
        label: "textured cube",
        vertices: Vertices::Textured(vertices),
        indices: Some(cube_indices()),
        topology: Topology::TriangleList,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_has_three_coloured_corners() {
        let g = triangle();
        assert_eq!(g.element_count(), 3);
        let Vertices::Color(v) = &g.vertices else { panic!("expected colour vertices") };
        assert_eq!(v[0].color, RED);
        assert_eq!(v[1].color, GREEN);
        assert_eq!(v[2].color, BLUE);
    }

    #[test]
    fn flat_triangle_keeps_positions() {
        let white = [1.0; 4];
        let g = flat_triangle(white);
        let Vertices::Color(v) = &g.vertices else { panic!("expected colour vertices") };
        assert!(v.iter().all(|c| c.color == white));
        assert_eq!(v[0].position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn square_is_a_four_vertex_strip() {
        let g = square([0.5, 0.5, 1.0, 1.0]);
        assert_eq!(g.topology, Topology::TriangleStrip);
        assert_eq!(g.element_count(), 4);
        assert!(g.indices.is_none());
    }

    #[test]
    fn pyramid_faces_share_the_apex() {
        let g = pyramid();
        let Vertices::Color(v) = &g.vertices else { panic!("expected colour vertices") };
        assert_eq!(v.len(), 12);
        for face in v.chunks(3) {
            assert_eq!(face[0].position, [0.0, 1.0, 0.0]);
            assert_eq!(face[0].color, RED);
        }
    }

    #[test]
    fn cubes_have_36_indices_within_bounds() {
        for g in [color_cube(), textured_cube()] {
            assert_eq!(g.vertices.len(), 24, "{}", g.label);
            assert_eq!(g.element_count(), 36, "{}", g.label);
            assert!(g.indices_in_bounds(), "{}", g.label);
        }
    }

    #[test]
    fn cube_face_is_two_triangles_from_its_first_corner() {
        let ix = cube_indices();
        assert_eq!(&ix[..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&ix[30..], &[20, 21, 22, 20, 22, 23]);
    }

    #[test]
    fn color_cube_faces_are_flat_shaded() {
        let g = color_cube();
        let Vertices::Color(v) = &g.vertices else { panic!("expected colour vertices") };
        for face in v.chunks(4) {
            assert!(face.iter().all(|c| c.color == face[0].color));
        }
    }

    #[test]
    fn out_of_range_index_is_detected() {
        let mut g = triangle();
        g.indices = Some(vec![0, 1, 3]);
        assert!(!g.indices_in_bounds());
    }
}
