// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

//! Simplex bookkeeping and the origin-containment case analysis for GJK.
//!
//! Points are stored oldest first. The last point, `a`, is always the most
//! recent support sample. Every "outside" test is a strict `> 0.0`
//! comparison: an origin lying exactly on an edge or face plane is treated as
//! inside that feature.

use glam::Vec3;

pub const MAX_SIMPLEX_POINTS: usize = 4;

/// Fixed-capacity simplex of up to four Minkowski-difference points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplex {
    points: [Vec3; MAX_SIMPLEX_POINTS],
    len: usize,
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}

impl Simplex {
    pub fn new() -> Self {
        Self {
            points: [Vec3::ZERO; MAX_SIMPLEX_POINTS],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn push(&mut self, point: Vec3) {
        assert!(self.len < MAX_SIMPLEX_POINTS, "simplex already holds a tetrahedron");
        self.points[self.len] = point;
        self.len += 1;
    }

    /// Most recently added point.
    pub fn last(&self) -> Option<Vec3> {
        self.len.checked_sub(1).map(|i| self.points[i])
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.points[..self.len]
    }

    fn set(&mut self, points: &[Vec3]) {
        self.points[..points.len()].copy_from_slice(points);
        self.len = points.len();
    }

    /// Runs the case analysis for the current simplex size.
    ///
    /// Returns `true` once the tetrahedron encloses the origin. Otherwise the
    /// simplex is reduced to the feature closest to the origin and `dir` is set
    /// to the next search direction. The reduced simplex never contains the
    /// next sample yet, so after a call it holds 2 or 3 points.
    pub fn contains_origin(&mut self, dir: &mut Vec3) -> bool {
        match self.len {
            2 => {
                let [b, a] = [self.points[0], self.points[1]];
                *dir = edge_direction(b - a, -a);
                false
            }
            3 => {
                self.triangle(dir);
                false
            }
            4 => self.tetrahedron(dir),
            _ => false,
        }
    }

    fn triangle(&mut self, dir: &mut Vec3) {
        let [c, b, a] = [self.points[0], self.points[1], self.points[2]];
        let ao = -a;
        let ab = b - a;
        let ac = c - a;
        let abc = ab.cross(ac);

        if ab.cross(abc).dot(ao) > 0.0 {
            // Origin is past edge AB, c no longer helps.
            self.set(&[b, a]);
            *dir = edge_direction(ab, ao);
            return;
        }

        if abc.cross(ac).dot(ao) > 0.0 {
            // Origin is past edge AC, drop b.
            self.set(&[c, a]);
            *dir = edge_direction(ac, ao);
            return;
        }

        // Origin is above or below the triangle. Wind it so the next point
        // lands on the origin's side.
        if abc.dot(ao) > 0.0 {
            *dir = abc;
        } else {
            self.set(&[b, c, a]);
            *dir = -abc;
        }
    }

    fn tetrahedron(&mut self, dir: &mut Vec3) -> bool {
        let [d, c, b, a] = self.points;
        let ao = -a;
        let ab = b - a;
        let ac = c - a;
        let ad = d - a;

        // Faces sharing `a`, each given as (B, C) so that its normal is
        // (B - a) x (C - a).
        let faces = [(b, c), (c, d), (d, b)];
        let outside = faces
            .into_iter()
            .map(|(fb, fc)| (fb, fc, (fb - a).cross(fc - a)))
            .find(|(_, _, normal)| normal.dot(ao) > 0.0);

        let Some((fb, fc, normal)) = outside else {
            debug_assert!(ab.cross(ac).dot(ao) <= 0.0);
            debug_assert!(ac.cross(ad).dot(ao) <= 0.0);
            debug_assert!(ad.cross(ab).dot(ao) <= 0.0);
            return true;
        };

        let ab = fb - a;
        let ac = fc - a;
        if ab.cross(normal).dot(ao) > 0.0 {
            self.set(&[fb, a]);
            *dir = edge_direction(ab, ao);
        } else if normal.cross(ac).dot(ao) > 0.0 {
            self.set(&[fc, a]);
            *dir = edge_direction(ac, ao);
        } else {
            self.set(&[fc, fb, a]);
            *dir = normal;
        }
        false
    }
}

/// Component of `ao` perpendicular to `edge`, computed as `(edge x ao) x edge`.
///
/// Zero when the origin lies on the line through the edge.
pub fn edge_direction(edge: Vec3, ao: Vec3) -> Vec3 {
    edge.cross(ao).cross(edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn simplex_of(points: &[Vec3]) -> Simplex {
        let mut simplex = Simplex::new();
        for point in points {
            simplex.push(*point);
        }
        simplex
    }

    #[test]
    fn push_and_clear_track_length() {
        let mut simplex = Simplex::new();
        assert!(simplex.is_empty());
        assert_eq!(simplex.last(), None);

        simplex.push(Vec3::X);
        simplex.push(Vec3::Y);
        assert_eq!(simplex.len(), 2);
        assert_eq!(simplex.last(), Some(Vec3::Y));
        assert_eq!(simplex.as_slice(), &[Vec3::X, Vec3::Y]);

        simplex.clear();
        assert!(simplex.is_empty());
    }

    #[test]
    #[should_panic]
    fn push_past_capacity_panics() {
        let mut simplex = simplex_of(&[Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE]);
        simplex.push(Vec3::NEG_X);
    }

    #[test]
    fn edge_direction_is_perpendicular_toward_origin() {
        let a = Vec3::new(1.0, 1.0, 0.0);
        let b = Vec3::new(-1.0, 1.0, 0.0);
        let dir = edge_direction(b - a, -a);
        assert_approx_eq!(dir.dot(b - a), 0.0, 1e-6);
        assert!(dir.dot(-a) > 0.0);
        assert!(dir.normalize().abs_diff_eq(Vec3::NEG_Y, 1e-6));
    }

    #[test]
    fn edge_direction_collapses_when_origin_on_line() {
        let a = Vec3::new(-1.0, -1.0, -1.0);
        let b = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(edge_direction(b - a, -a), Vec3::ZERO);
    }

    #[test]
    fn line_keeps_both_points() {
        let b = Vec3::new(-1.0, 1.0, 0.0);
        let a = Vec3::new(1.0, 1.0, 0.0);
        let mut simplex = simplex_of(&[b, a]);
        let mut dir = Vec3::ZERO;

        assert!(!simplex.contains_origin(&mut dir));
        assert_eq!(simplex.as_slice(), &[b, a]);
        assert!(dir.dot(Vec3::NEG_Y) > 0.0);
    }

    #[test]
    fn triangle_drops_c_when_origin_beyond_ab() {
        // Origin sits past edge AB, on the far side from C.
        let c = Vec3::new(0.0, 3.0, 0.0);
        let b = Vec3::new(-1.0, 1.0, 0.0);
        let a = Vec3::new(1.0, 1.0, 0.0);
        let mut simplex = simplex_of(&[c, b, a]);
        let mut dir = Vec3::ZERO;

        assert!(!simplex.contains_origin(&mut dir));
        assert_eq!(simplex.as_slice(), &[b, a]);
        assert!(dir.normalize().abs_diff_eq(Vec3::NEG_Y, 1e-6));
    }

    #[test]
    fn triangle_drops_b_when_origin_beyond_ac() {
        let c = Vec3::new(-1.0, 1.0, 0.0);
        let b = Vec3::new(0.0, 3.0, 0.0);
        let a = Vec3::new(1.0, 1.0, 0.0);
        let mut simplex = simplex_of(&[c, b, a]);
        let mut dir = Vec3::ZERO;

        assert!(!simplex.contains_origin(&mut dir));
        assert_eq!(simplex.as_slice(), &[c, a]);
        assert!(dir.normalize().abs_diff_eq(Vec3::NEG_Y, 1e-6));
    }

    #[test]
    fn triangle_above_origin_keeps_winding() {
        // Triangle in the z = -1 plane around the z axis; origin is above it.
        let c = Vec3::new(-1.0, -1.0, -1.0);
        let b = Vec3::new(1.0, -1.0, -1.0);
        let a = Vec3::new(0.0, 1.0, -1.0);
        let mut simplex = simplex_of(&[c, b, a]);
        let mut dir = Vec3::ZERO;

        assert!(!simplex.contains_origin(&mut dir));
        assert!(dir.dot(-a) > 0.0);
        let abc = (b - a).cross(c - a);
        if abc.dot(-a) > 0.0 {
            assert_eq!(simplex.as_slice(), &[c, b, a]);
            assert_eq!(dir, abc);
        } else {
            assert_eq!(simplex.as_slice(), &[b, c, a]);
            assert_eq!(dir, -abc);
        }
    }

    #[test]
    fn triangle_winding_flips_for_either_side() {
        let c = Vec3::new(-1.0, -1.0, 1.0);
        let b = Vec3::new(1.0, -1.0, 1.0);
        let a = Vec3::new(0.0, 1.0, 1.0);

        let mut first = simplex_of(&[c, b, a]);
        let mut first_dir = Vec3::ZERO;
        first.contains_origin(&mut first_dir);

        let mut second = simplex_of(&[b, c, a]);
        let mut second_dir = Vec3::ZERO;
        second.contains_origin(&mut second_dir);

        // Both windings must search toward the origin (negative z).
        assert!(first_dir.z < 0.0);
        assert!(second_dir.z < 0.0);
        // Either input winding settles on the same canonical order.
        assert_eq!(first.as_slice(), &[c, b, a]);
        assert_eq!(second.as_slice(), first.as_slice());
        assert_eq!(first_dir, second_dir);
    }

    #[test]
    fn triangle_containing_origin_in_plane_is_not_outside() {
        // Origin lies inside the triangle: no edge test fires, normal is kept.
        let c = Vec3::new(-1.0, -1.0, 0.0);
        let b = Vec3::new(1.0, -1.0, 0.0);
        let a = Vec3::new(0.0, 1.0, 0.0);
        let mut simplex = simplex_of(&[c, b, a]);
        let mut dir = Vec3::ZERO;

        assert!(!simplex.contains_origin(&mut dir));
        assert_eq!(simplex.len(), 3);
        assert_approx_eq!(dir.x, 0.0, 1e-6);
        assert_approx_eq!(dir.y, 0.0, 1e-6);
        assert!(dir.z != 0.0);
    }

    #[test]
    fn tetrahedron_enclosing_origin_is_contained() {
        // Base wound so that its normal faces the apex, as the triangle case
        // leaves it.
        let d = Vec3::new(1.0, -1.0, -1.0);
        let c = Vec3::new(-1.0, -1.0, -1.0);
        let b = Vec3::new(0.0, 1.0, -1.0);
        let a = Vec3::new(0.0, 0.0, 1.0);
        let mut simplex = simplex_of(&[d, c, b, a]);
        let mut dir = Vec3::ZERO;

        assert!(simplex.contains_origin(&mut dir));
        assert_eq!(simplex.len(), 4);
    }

    #[test]
    fn tetrahedron_origin_on_face_counts_as_inside() {
        // Face ACD lies in the x = 0 plane and contains the origin.
        let a = Vec3::new(0.0, 1.0, 0.0);
        let b = Vec3::new(-1.0, 0.0, 0.0);
        let c = Vec3::new(0.0, -1.0, 1.0);
        let d = Vec3::new(0.0, -1.0, -1.0);
        assert_eq!((c - a).cross(d - a).dot(-a), 0.0);

        let mut simplex = simplex_of(&[d, c, b, a]);
        let mut dir = Vec3::ZERO;
        assert!(simplex.contains_origin(&mut dir));
    }

    #[test]
    fn tetrahedron_reduces_to_outside_face() {
        // The origin is outside face ABC but inside both of its edges.
        let a = Vec3::new(0.0, 0.0, 2.0);
        let b = Vec3::new(2.0, 1.0, 1.0);
        let c = Vec3::new(2.0, -1.0, 1.0);
        let d = Vec3::new(3.0, 0.0, 3.0);
        let mut simplex = simplex_of(&[d, c, b, a]);
        let mut dir = Vec3::ZERO;

        assert!(!simplex.contains_origin(&mut dir));
        assert_eq!(simplex.as_slice(), &[c, b, a]);
        assert_eq!(dir, (b - a).cross(c - a));
        assert!(dir.dot(-a) > 0.0, "next search must head toward the origin");
    }

    #[test]
    fn tetrahedron_reduces_to_edge_of_outside_face() {
        // Apex sits off to the side; the origin is past face ACD and past
        // that face's edge toward d.
        let d = Vec3::new(-1.0, -1.0, 3.0);
        let c = Vec3::new(1.0, -1.0, 3.0);
        let b = Vec3::new(0.0, 1.0, 3.0);
        let a = Vec3::new(3.0, 0.0, 1.0);
        let mut simplex = simplex_of(&[d, c, b, a]);
        let mut dir = Vec3::ZERO;

        assert!(!simplex.contains_origin(&mut dir));
        assert_eq!(simplex.as_slice(), &[d, a]);
        assert_eq!(dir, edge_direction(d - a, -a));
        assert_approx_eq!(dir.dot(d - a), 0.0, 1e-4);
        assert!(dir.dot(-a) > 0.0);
    }

    #[test]
    fn small_simplices_are_never_contained() {
        let mut dir = Vec3::ONE;
        let mut empty = Simplex::new();
        assert!(!empty.contains_origin(&mut dir));
        let mut single = simplex_of(&[Vec3::ZERO]);
        assert!(!single.contains_origin(&mut dir));
        assert_eq!(dir, Vec3::ONE);
    }
}
