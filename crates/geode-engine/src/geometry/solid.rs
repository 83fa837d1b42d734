use std::collections::HashMap;
use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::palette::Palette;

const PHI: f32 = 1.618_034;

/// The five regular convex polyhedra.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Tetrahedron,
    Cube,
    Octahedron,
    Dodecahedron,
    #[default]
    Icosahedron,
}

impl SolidKind {
    pub const ALL: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Cube,
        SolidKind::Octahedron,
        SolidKind::Dodecahedron,
        SolidKind::Icosahedron,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron => "Tetrahedron",
            SolidKind::Cube => "Cube",
            SolidKind::Octahedron => "Octahedron",
            SolidKind::Dodecahedron => "Dodecahedron",
            SolidKind::Icosahedron => "Icosahedron",
        }
    }

    /// Polygon faces (a cube has 6, not 12).
    pub const fn face_count(self) -> usize {
        match self {
            SolidKind::Tetrahedron => 4,
            SolidKind::Cube => 6,
            SolidKind::Octahedron => 8,
            SolidKind::Dodecahedron => 12,
            SolidKind::Icosahedron => 20,
        }
    }

    /// Distinct corner positions.
    pub const fn vertex_count(self) -> usize {
        match self {
            SolidKind::Tetrahedron => 4,
            SolidKind::Cube => 8,
            SolidKind::Octahedron => 6,
            SolidKind::Dodecahedron => 20,
            SolidKind::Icosahedron => 12,
        }
    }

    /// Triangles after fan triangulation of each face.
    pub const fn triangle_count(self) -> usize {
        match self {
            SolidKind::Tetrahedron => 4,
            SolidKind::Cube => 12,
            SolidKind::Octahedron => 8,
            SolidKind::Dodecahedron => 36,
            SolidKind::Icosahedron => 20,
        }
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position + flat face color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SolidVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<SolidVertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of distinct positions, ignoring color duplication.
    pub fn distinct_positions(&self) -> usize {
        let mut seen: Vec<[u32; 3]> = self
            .vertices
            .iter()
            .map(|v| v.position.map(f32::to_bits))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// Iterates triangles as position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(self.vertices[i as usize].position))
        })
    }
}

/// Builds a colored mesh for `kind`.
///
/// Face `i` is colored `palette[i % len]`; an empty or non-finite palette is
/// replaced with the default one. Vertices are shared between faces only when
/// both faces carry the same color.
pub fn make_solid(kind: SolidKind, palette: &Palette) -> Mesh {
    let palette = palette.sanitized();
    let (corners, mut faces) = polyhedron(kind);

    for face in &mut faces {
        orient_outward(&corners, face);
    }

    let mut mesh = Mesh::default();
    let mut lookup: HashMap<(usize, [u32; 4]), u16> = HashMap::new();

    for (face_index, face) in faces.iter().enumerate() {
        let color = palette.face_color(face_index).to_array();
        let color_key = color.map(f32::to_bits);

        let mut vertex_of = |corner: usize| -> u16 {
            *lookup.entry((corner, color_key)).or_insert_with(|| {
                mesh.vertices.push(SolidVertex {
                    position: corners[corner].to_array(),
                    color,
                });
                (mesh.vertices.len() - 1) as u16
            })
        };

        let ids: Vec<u16> = face.iter().map(|&c| vertex_of(c)).collect();
        for k in 1..ids.len() - 1 {
            mesh.indices.extend_from_slice(&[ids[0], ids[k], ids[k + 1]]);
        }
    }

    log::debug!(
        "built {kind}: {} vertices, {} triangles",
        mesh.vertices.len(),
        mesh.triangle_count()
    );
    mesh
}

/// Corner positions (already scaled) and polygon faces as corner indices.
fn polyhedron(kind: SolidKind) -> (Vec<Vec3>, Vec<Vec<usize>>) {
    match kind {
        SolidKind::Tetrahedron => {
            let corners = [
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ]
            .map(|v| v.normalize() * 1.2);
            let faces = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
            (corners.to_vec(), faces.iter().map(|f| f.to_vec()).collect())
        }
        SolidKind::Cube => {
            let s = 1.0;
            let corners = vec![
                Vec3::new(-s, -s, s),
                Vec3::new(s, -s, s),
                Vec3::new(s, s, s),
                Vec3::new(-s, s, s),
                Vec3::new(-s, -s, -s),
                Vec3::new(s, -s, -s),
                Vec3::new(s, s, -s),
                Vec3::new(-s, s, -s),
            ];
            let faces = [
                [0, 1, 2, 3],
                [1, 5, 6, 2],
                [5, 4, 7, 6],
                [4, 0, 3, 7],
                [3, 2, 6, 7],
                [4, 5, 1, 0],
            ];
            (corners, faces.iter().map(|f| f.to_vec()).collect())
        }
        SolidKind::Octahedron => {
            let s = 1.3;
            let corners = vec![
                Vec3::new(0.0, s, 0.0),
                Vec3::new(0.0, -s, 0.0),
                Vec3::new(s, 0.0, 0.0),
                Vec3::new(-s, 0.0, 0.0),
                Vec3::new(0.0, 0.0, s),
                Vec3::new(0.0, 0.0, -s),
            ];
            let faces = [
                [0, 4, 2],
                [0, 3, 4],
                [0, 5, 3],
                [0, 2, 5],
                [1, 2, 4],
                [1, 4, 3],
                [1, 3, 5],
                [1, 5, 2],
            ];
            (corners, faces.iter().map(|f| f.to_vec()).collect())
        }
        SolidKind::Dodecahedron => dodecahedron(),
        SolidKind::Icosahedron => {
            let corners = icosahedron_directions()
                .iter()
                .map(|v| v.normalize() * 1.4)
                .collect();
            let faces = [
                [0, 2, 8],
                [0, 10, 2],
                [0, 4, 6],
                [0, 8, 4],
                [0, 6, 10],
                [1, 9, 3],
                [1, 3, 11],
                [1, 6, 4],
                [1, 4, 9],
                [1, 11, 6],
                [2, 7, 5],
                [2, 5, 8],
                [2, 10, 7],
                [3, 5, 7],
                [3, 9, 5],
                [3, 7, 11],
                [4, 8, 9],
                [5, 9, 8],
                [6, 11, 10],
                [7, 10, 11],
            ];
            (corners, faces.iter().map(|f| f.to_vec()).collect())
        }
    }
}

/// The 12 unnormalized icosahedron corners `(0,±1,±φ)`, `(±1,±φ,0)`,
/// `(±φ,0,±1)`.
fn icosahedron_directions() -> [Vec3; 12] {
    [
        Vec3::new(0.0, 1.0, PHI),
        Vec3::new(0.0, 1.0, -PHI),
        Vec3::new(0.0, -1.0, PHI),
        Vec3::new(0.0, -1.0, -PHI),
        Vec3::new(1.0, PHI, 0.0),
        Vec3::new(1.0, -PHI, 0.0),
        Vec3::new(-1.0, PHI, 0.0),
        Vec3::new(-1.0, -PHI, 0.0),
        Vec3::new(PHI, 0.0, 1.0),
        Vec3::new(PHI, 0.0, -1.0),
        Vec3::new(-PHI, 0.0, 1.0),
        Vec3::new(-PHI, 0.0, -1.0),
    ]
}

/// Face normals of the dodecahedron built below: the icosahedron directions
/// in the other cyclic order, `(0,±φ,±1)`, `(±φ,±1,0)`, `(±1,0,±φ)`.
fn dodecahedron_normals() -> [Vec3; 12] {
    icosahedron_directions().map(|d| Vec3::new(d.x, d.z, d.y))
}

/// Dodecahedron from its 20 golden-ratio corners.
///
/// Each pentagon is the set of 5 corners farthest along one face normal,
/// sorted counter-clockwise around that normal.
fn dodecahedron() -> (Vec<Vec3>, Vec<Vec<usize>>) {
    let inv = 1.0 / PHI;
    let mut corners = Vec::with_capacity(20);
    for x in [-1.0, 1.0] {
        for y in [-1.0, 1.0] {
            for z in [-1.0, 1.0] {
                corners.push(Vec3::new(x, y, z));
            }
        }
    }
    for a in [-1.0, 1.0] {
        for b in [-1.0, 1.0] {
            corners.push(Vec3::new(0.0, a * inv, b * PHI));
            corners.push(Vec3::new(a * inv, b * PHI, 0.0));
            corners.push(Vec3::new(a * PHI, 0.0, b * inv));
        }
    }

    let faces = dodecahedron_normals()
        .iter()
        .map(|&normal| {
            let n = normal.normalize();
            let max = corners.iter().map(|c| c.dot(normal)).fold(f32::MIN, f32::max);
            let members: Vec<usize> = (0..corners.len())
                .filter(|&i| corners[i].dot(normal) > max - 1e-3)
                .collect();

            let center = members.iter().map(|&i| corners[i]).sum::<Vec3>() / members.len() as f32;
            let u = (corners[members[0]] - center).normalize();
            let w = n.cross(u);

            let mut ordered: Vec<(f32, usize)> = members
                .iter()
                .map(|&i| {
                    let d = corners[i] - center;
                    (d.dot(w).atan2(d.dot(u)), i)
                })
                .collect();
            ordered.sort_by(|a, b| a.0.total_cmp(&b.0));
            ordered.into_iter().map(|(_, i)| i).collect()
        })
        .collect();

    let corners = corners.into_iter().map(|c| c * 0.9).collect();
    (corners, faces)
}

/// Reverses `face` if its winding points toward the solid's center.
fn orient_outward(corners: &[Vec3], face: &mut [usize]) {
    if face.len() < 3 {
        return;
    }
    let a = corners[face[0]];
    let b = corners[face[1]];
    let c = corners[face[2]];
    let centroid = face.iter().map(|&i| corners[i]).sum::<Vec3>() / face.len() as f32;
    if (b - a).cross(c - a).dot(centroid) < 0.0 {
        face.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ColorRgba;

    fn mesh(kind: SolidKind) -> Mesh {
        make_solid(kind, &Palette::default())
    }

    // ── topology ─────────────────────────────────────────────────────────

    #[test]
    fn indices_are_triangles_in_range() {
        for kind in SolidKind::ALL {
            let m = mesh(kind);
            assert_eq!(m.indices.len() % 3, 0, "{kind}");
            assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()), "{kind}");
        }
    }

    #[test]
    fn distinct_positions_match_solid() {
        let expected = [4, 8, 6, 20, 12];
        for (kind, n) in SolidKind::ALL.into_iter().zip(expected) {
            assert_eq!(mesh(kind).distinct_positions(), n, "{kind}");
            assert_eq!(kind.vertex_count(), n);
        }
    }

    #[test]
    fn triangle_counts_match_solid() {
        let expected = [4, 12, 8, 36, 20];
        for (kind, n) in SolidKind::ALL.into_iter().zip(expected) {
            assert_eq!(mesh(kind).triangle_count(), n, "{kind}");
            assert_eq!(kind.triangle_count(), n);
        }
    }

    #[test]
    fn every_triangle_faces_outward() {
        for kind in SolidKind::ALL {
            for [a, b, c] in mesh(kind).triangles() {
                let normal = (b - a).cross(c - a);
                let centroid = (a + b + c) / 3.0;
                assert!(normal.dot(centroid) > 0.0, "{kind} has an inward triangle");
            }
        }
    }

    #[test]
    fn no_degenerate_triangles() {
        for kind in SolidKind::ALL {
            for [a, b, c] in mesh(kind).triangles() {
                assert!((b - a).cross(c - a).length() > 1e-4, "{kind}");
            }
        }
    }

    #[test]
    fn corners_are_equidistant_from_center() {
        for kind in SolidKind::ALL {
            let m = mesh(kind);
            let r0 = Vec3::from_array(m.vertices[0].position).length();
            for v in &m.vertices {
                let r = Vec3::from_array(v.position).length();
                assert!((r - r0).abs() < 1e-4, "{kind}: {r} vs {r0}");
            }
        }
    }

    #[test]
    fn dodecahedron_corners_each_touch_three_pentagons() {
        let (corners, faces) = dodecahedron();
        assert_eq!(corners.len(), 20);
        let mut seen = [0usize; 20];
        for face in &faces {
            assert_eq!(face.len(), 5, "face {face:?}");
            for &i in face {
                seen[i] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 3), "{seen:?}");

        let m = mesh(SolidKind::Dodecahedron);
        assert_eq!(m.triangle_count(), 36);
        assert_eq!(m.distinct_positions(), 20);
    }

    #[test]
    fn dodecahedron_pentagons_are_planar_and_regular() {
        let (corners, faces) = dodecahedron();
        assert_eq!(faces.len(), 12);
        for face in &faces {
            assert_eq!(face.len(), 5);
            let edges: Vec<f32> = (0..5)
                .map(|k| corners[face[k]].distance(corners[face[(k + 1) % 5]]))
                .collect();
            for e in &edges {
                assert!((e - edges[0]).abs() < 1e-4, "uneven pentagon edges {edges:?}");
            }
        }
    }

    // ── coloring ─────────────────────────────────────────────────────────

    #[test]
    fn faces_take_palette_colors_in_order() {
        let palette = Palette::new(vec![
            ColorRgba::opaque(1.0, 0.0, 0.0),
            ColorRgba::opaque(0.0, 1.0, 0.0),
        ]);
        let m = make_solid(SolidKind::Octahedron, &palette);
        for (t, tri) in m.indices.chunks_exact(3).enumerate() {
            let expected = palette.face_color(t).to_array();
            for &i in tri {
                assert_eq!(m.vertices[i as usize].color, expected);
            }
        }
    }

    #[test]
    fn quad_halves_share_one_color() {
        let m = mesh(SolidKind::Cube);
        for quad in m.indices.chunks_exact(6) {
            let c = m.vertices[quad[0] as usize].color;
            assert!(quad.iter().all(|&i| m.vertices[i as usize].color == c));
        }
    }

    #[test]
    fn single_color_palette_shares_all_corners() {
        let palette = Palette::new(vec![ColorRgba::white()]);
        for kind in SolidKind::ALL {
            let m = make_solid(kind, &palette);
            assert_eq!(m.vertices.len(), kind.vertex_count(), "{kind}");
        }
    }

    #[test]
    fn distinct_face_colors_duplicate_corners() {
        // 12 colors, 8 faces: no two faces share a color, so each face owns
        // its three vertices.
        let m = mesh(SolidKind::Octahedron);
        assert_eq!(m.vertices.len(), 24);
    }

    #[test]
    fn invalid_palette_uses_default() {
        let empty = make_solid(SolidKind::Tetrahedron, &Palette::new(Vec::new()));
        assert_eq!(empty, mesh(SolidKind::Tetrahedron));
    }

    // ── determinism ──────────────────────────────────────────────────────

    #[test]
    fn repeated_builds_are_identical() {
        for kind in SolidKind::ALL {
            assert_eq!(mesh(kind), mesh(kind));
        }
    }
}
