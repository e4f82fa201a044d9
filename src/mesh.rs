//! Wireframe mesh: vertices plus edge index pairs.
//!
//! A [`Mesh`] is an owned value built on demand by a factory constructor and
//! passed by reference into each render call; the renderer never mutates it.
//! Edge indices referencing vertices out of range are a caller error - they
//! are checked in debug builds only.

use std::collections::HashMap;

use crate::math::vec3::Vec3;

/// An edge between two vertices, identified by index.
///
/// Indices are zero-based. A mesh need not reference every vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    edges: Vec<Edge>,
}

impl Mesh {
    /// Create a mesh from vertex and edge lists.
    ///
    /// Every edge index must be `< vertices.len()`; this is debug-asserted,
    /// not validated at runtime.
    pub fn new(vertices: Vec<Vec3>, edges: Vec<Edge>) -> Self {
        debug_assert!(
            edges
                .iter()
                .all(|e| e.a < vertices.len() && e.b < vertices.len()),
            "edge index out of range"
        );
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Unit cube centered at the origin: 8 vertices, 12 edges.
    pub fn cube() -> Self {
        let vertices = vec![
            Vec3::new(-0.5, -0.5, -0.5),
            Vec3::new(0.5, -0.5, -0.5),
            Vec3::new(0.5, 0.5, -0.5),
            Vec3::new(-0.5, 0.5, -0.5),
            Vec3::new(-0.5, -0.5, 0.5),
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-0.5, 0.5, 0.5),
        ];
        let edges = vec![
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 0),
            Edge::new(4, 5),
            Edge::new(5, 6),
            Edge::new(6, 7),
            Edge::new(7, 4),
            Edge::new(0, 4),
            Edge::new(1, 5),
            Edge::new(2, 6),
            Edge::new(3, 7),
        ];
        Self::new(vertices, edges)
    }

    /// Octahedral bipyramid: a square ring of 4 vertices with an apex on
    /// either side. 6 vertices, 12 edges.
    pub fn bipyramid() -> Self {
        let vertices = vec![
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(-0.5, 0.0, 0.0),
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(0.5, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.5),
            Vec3::new(0.0, 0.0, -0.5),
        ];
        let edges = vec![
            Edge::new(0, 1),
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(3, 0),
            Edge::new(0, 4),
            Edge::new(1, 4),
            Edge::new(2, 4),
            Edge::new(3, 4),
            Edge::new(0, 5),
            Edge::new(1, 5),
            Edge::new(2, 5),
            Edge::new(3, 5),
        ];
        Self::new(vertices, edges)
    }

    /// Regular icosahedron inscribed in the unit sphere: 12 vertices,
    /// 30 edges.
    pub fn icosahedron() -> Self {
        let vertices = vec![
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.894, 0.0, -0.447),
            Vec3::new(0.276, 0.851, -0.447),
            Vec3::new(-0.724, 0.526, -0.447),
            Vec3::new(-0.724, -0.526, -0.447),
            Vec3::new(0.276, -0.851, -0.447),
            Vec3::new(0.724, 0.526, 0.447),
            Vec3::new(-0.276, 0.851, 0.447),
            Vec3::new(-0.894, 0.0, 0.447),
            Vec3::new(-0.276, -0.851, 0.447),
            Vec3::new(0.724, -0.526, 0.447),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        #[rustfmt::skip]
        let pairs: [(usize, usize); 30] = [
            (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
            (1, 2), (2, 3), (3, 4), (4, 5), (5, 1),
            (1, 6), (2, 6), (2, 7), (3, 7), (3, 8),
            (4, 8), (4, 9), (5, 9), (5, 10), (1, 10),
            (6, 7), (7, 8), (8, 9), (9, 10), (10, 6),
            (6, 11), (7, 11), (8, 11), (9, 11), (10, 11),
        ];
        let edges = pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect();
        Self::new(vertices, edges)
    }

    /// Soccer ball (truncated icosahedron) on the unit sphere: 60 vertices,
    /// 90 edges.
    ///
    /// Built by cutting each icosahedron vertex: every directed edge `(i, j)`
    /// contributes the point one third of the way from `i` to `j`, pushed
    /// back out to the sphere. The five cut points around each original
    /// vertex form a pentagon; each original edge contributes one bridging
    /// edge between its two cut points. The hexagonal faces emerge from
    /// pentagons and bridges without being stored explicitly.
    pub fn soccer_ball() -> Self {
        let ico = Self::icosahedron();
        let ico_vertices = ico.vertices();

        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); ico_vertices.len()];
        for edge in ico.edges() {
            neighbors[edge.a].push(edge.b);
            neighbors[edge.b].push(edge.a);
        }

        // Order each vertex's five neighbors counterclockwise around the
        // outward normal so pentagon edges connect adjacent cut points.
        for (i, ring) in neighbors.iter_mut().enumerate() {
            let normal = ico_vertices[i].normalize();
            let tangent_of = |j: usize| {
                let d = ico_vertices[j] - ico_vertices[i];
                d - normal * d.dot(normal)
            };
            let e1 = tangent_of(ring[0]).normalize();
            let e2 = normal.cross(e1);
            ring.sort_by(|&a, &b| {
                let angle = |j: usize| {
                    let t = tangent_of(j);
                    t.dot(e2).atan2(t.dot(e1))
                };
                angle(a).partial_cmp(&angle(b)).expect("finite angles")
            });
        }

        let mut vertices = Vec::with_capacity(60);
        let mut cut_point = HashMap::new();
        for (i, ring) in neighbors.iter().enumerate() {
            for &j in ring {
                let p = ico_vertices[i] * (2.0 / 3.0) + ico_vertices[j] * (1.0 / 3.0);
                cut_point.insert((i, j), vertices.len());
                vertices.push(p.normalize());
            }
        }

        let mut edges = Vec::with_capacity(90);
        for (i, ring) in neighbors.iter().enumerate() {
            for k in 0..ring.len() {
                let a = cut_point[&(i, ring[k])];
                let b = cut_point[&(i, ring[(k + 1) % ring.len()])];
                edges.push(Edge::new(a, b));
            }
        }
        for edge in ico.edges() {
            edges.push(Edge::new(
                cut_point[&(edge.a, edge.b)],
                cut_point[&(edge.b, edge.a)],
            ));
        }

        Self::new(vertices, edges)
    }
}
