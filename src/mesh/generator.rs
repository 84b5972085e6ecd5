use super::{Cell, Mesh, Outline, Point};
use crate::base::ElemKind;
use crate::StrError;
use std::collections::HashMap;

/// Holds a triangle of the Bowyer-Watson triangulation with its circumcircle
struct DelTri {
    a: usize,
    b: usize,
    c: usize,
    cx: f64,
    cy: f64,
    rr: f64, // squared circumradius
}

/// Computes the circumcircle of a triangle (center and squared radius)
fn circumcircle(points: &[[f64; 2]], a: usize, b: usize, c: usize) -> Option<(f64, f64, f64)> {
    let [ax, ay] = points[a];
    let [bx, by] = points[b];
    let [cx, cy] = points[c];
    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));
    if f64::abs(d) < 1e-12 {
        return None; // collinear
    }
    let aa = ax * ax + ay * ay;
    let bb = bx * bx + by * by;
    let cc = cx * cx + cy * cy;
    let ux = (aa * (by - cy) + bb * (cy - ay) + cc * (ay - by)) / d;
    let uy = (aa * (cx - bx) + bb * (ax - cx) + cc * (bx - ax)) / d;
    let (dx, dy) = (ax - ux, ay - uy);
    Some((ux, uy, dx * dx + dy * dy))
}

fn make_tri(points: &[[f64; 2]], a: usize, b: usize, c: usize) -> Result<DelTri, StrError> {
    let (cx, cy, rr) = circumcircle(points, a, b, c).ok_or("mesh generator found a degenerate triangle")?;
    Ok(DelTri { a, b, c, cx, cy, rr })
}

/// Performs a Bowyer-Watson Delaunay triangulation of a point set
///
/// Returns the triangles as point-index triples (arbitrary orientation).
fn delaunay(points: &[[f64; 2]]) -> Result<Vec<[usize; 3]>, StrError> {
    let n = points.len();
    if n < 3 {
        return Err("at least 3 points are required for a triangulation");
    }

    // super-triangle comfortably enclosing all points
    let mut min = [f64::MAX, f64::MAX];
    let mut max = [f64::MIN, f64::MIN];
    for p in points {
        for dim in 0..2 {
            min[dim] = f64::min(min[dim], p[dim]);
            max[dim] = f64::max(max[dim], p[dim]);
        }
    }
    let span = f64::max(max[0] - min[0], f64::max(max[1] - min[1], 1.0));
    let (x0, y0) = ((min[0] + max[0]) / 2.0, (min[1] + max[1]) / 2.0);
    let big = 20.0 * span;
    let mut ext = points.to_vec();
    ext.push([x0 - 2.0 * big, y0 - big]);
    ext.push([x0 + 2.0 * big, y0 - big]);
    ext.push([x0, y0 + 2.0 * big]);

    let mut tris = vec![make_tri(&ext, n, n + 1, n + 2)?];
    for p in 0..n {
        let [px, py] = ext[p];

        // cavity: triangles whose closed circumdisk contains the new point
        let mut bad = Vec::new();
        for (t, tri) in tris.iter().enumerate() {
            let (dx, dy) = (px - tri.cx, py - tri.cy);
            if dx * dx + dy * dy <= tri.rr * (1.0 + 1e-9) {
                bad.push(t);
            }
        }

        // cavity boundary: edges that belong to exactly one bad triangle
        let mut edges = Vec::with_capacity(3 * bad.len());
        for t in &bad {
            let tri = &tris[*t];
            edges.push((tri.a, tri.b));
            edges.push((tri.b, tri.c));
            edges.push((tri.c, tri.a));
        }
        let mut boundary = Vec::new();
        for (i, e) in edges.iter().enumerate() {
            let shared = edges
                .iter()
                .enumerate()
                .any(|(j, f)| i != j && ((e.0 == f.0 && e.1 == f.1) || (e.0 == f.1 && e.1 == f.0)));
            if !shared {
                boundary.push(*e);
            }
        }

        // replace the cavity by the star of the new point
        let mut keep = Vec::with_capacity(tris.len());
        for (t, tri) in tris.drain(..).enumerate() {
            if !bad.contains(&t) {
                keep.push(tri);
            }
        }
        tris = keep;
        for (u, v) in boundary {
            tris.push(make_tri(&ext, u, v, p)?);
        }
    }

    // discard triangles attached to the super-triangle
    Ok(tris
        .into_iter()
        .filter(|t| t.a < n && t.b < n && t.c < n)
        .map(|t| [t.a, t.b, t.c])
        .collect())
}

/// Small deterministic perturbation used to break cocircular grid patterns
fn seed_jitter(i: usize, j: usize) -> (f64, f64) {
    let h1 = (i.wrapping_mul(73856093) ^ j.wrapping_mul(19349663)) & 0xffff;
    let h2 = (i.wrapping_mul(83492791) ^ j.wrapping_mul(49979687)) & 0xffff;
    let a = (h1 as f64) / 65535.0 - 0.5;
    let b = (h2 as f64) / 65535.0 - 0.5;
    (a, b)
}

/// Generates a triangular mesh for a closed outline
///
/// The generator resamples the boundary at the target size, seeds interior
/// points on a staggered (jittered) grid, triangulates everything with the
/// Bowyer-Watson algorithm, and discards triangles whose centroid falls
/// outside the outline (which carves the concave notches). All cells are
/// oriented CCW so that the Jacobian determinants are positive. For Tri6
/// meshes, shared mid-edge nodes are appended after the corner nodes.
pub fn mesh_outline(outline: &Outline, kind: ElemKind, target_size: f64) -> Result<Mesh, StrError> {
    if !target_size.is_finite() || target_size <= 0.0 {
        return Err("target size must be positive");
    }

    // boundary points followed by interior seeds
    let mut raw = outline.resample(target_size);
    let (min, max) = outline.bounding_box();
    let dy = target_size * f64::sqrt(3.0) / 2.0;
    let clearance = 0.7 * target_size;
    let mut row = 0;
    loop {
        let y_row = min[1] + dy * (row as f64 + 1.0);
        if y_row >= max[1] {
            break;
        }
        let offset = if row % 2 == 0 { 0.0 } else { 0.5 };
        let mut col = 0;
        loop {
            let x_col = min[0] + target_size * (col as f64 + offset);
            if x_col >= max[0] {
                break;
            }
            let (jx, jy) = seed_jitter(col, row);
            let x = x_col + 0.2 * target_size * jx;
            let y = y_row + 0.2 * target_size * jy;
            if outline.contains(x, y) && outline.distance_to_boundary(x, y) >= clearance {
                raw.push([x, y]);
            }
            col += 1;
        }
        row += 1;
    }

    // triangulate and keep the triangles covering the outline
    let mut triangles = Vec::new();
    for [a, b, c] in delaunay(&raw)? {
        let xc = (raw[a][0] + raw[b][0] + raw[c][0]) / 3.0;
        let yc = (raw[a][1] + raw[b][1] + raw[c][1]) / 3.0;
        if !outline.contains(xc, yc) {
            continue;
        }
        let twice_area = (raw[b][0] - raw[a][0]) * (raw[c][1] - raw[a][1])
            - (raw[b][1] - raw[a][1]) * (raw[c][0] - raw[a][0]);
        if f64::abs(twice_area) < 1e-12 * target_size * target_size {
            continue; // sliver
        }
        if twice_area > 0.0 {
            triangles.push([a, b, c]);
        } else {
            triangles.push([a, c, b]);
        }
    }
    if triangles.is_empty() {
        return Err("mesh generation produced no cells");
    }

    // renumber, keeping only the points referenced by the kept triangles
    let mut used = vec![false; raw.len()];
    for t in &triangles {
        for v in t {
            used[*v] = true;
        }
    }
    let mut renum = vec![usize::MAX; raw.len()];
    let mut points = Vec::new();
    for (old, coords) in raw.iter().enumerate() {
        if used[old] {
            renum[old] = points.len();
            points.push(Point {
                id: points.len(),
                coords: *coords,
            });
        }
    }

    // connectivity (with shared mid-edge nodes for Tri6)
    let mut cells = Vec::with_capacity(triangles.len());
    let mut mid_edge: HashMap<(usize, usize), usize> = HashMap::new();
    for (id, t) in triangles.iter().enumerate() {
        let corners = [renum[t[0]], renum[t[1]], renum[t[2]]];
        let mut conn = corners.to_vec();
        if kind == ElemKind::Tri6 {
            for m in 0..3 {
                let (u, v) = (corners[m], corners[(m + 1) % 3]);
                let key = (usize::min(u, v), usize::max(u, v));
                let mid = match mid_edge.get(&key) {
                    Some(id) => *id,
                    None => {
                        let id_new = points.len();
                        let xm = (points[u].coords[0] + points[v].coords[0]) / 2.0;
                        let ym = (points[u].coords[1] + points[v].coords[1]) / 2.0;
                        points.push(Point {
                            id: id_new,
                            coords: [xm, ym],
                        });
                        mid_edge.insert(key, id_new);
                        id_new
                    }
                };
                conn.push(mid);
            }
        }
        cells.push(Cell {
            id,
            kind,
            points: conn,
        });
    }

    let mesh = Mesh { points, cells };
    mesh.check()?;
    Ok(mesh)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
