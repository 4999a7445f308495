// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use glam::Vec3;

use crate::hull::ConvexHull;

/// Point of `hull` with the largest projection onto `dir`.
///
/// Ties keep the first point encountered. `dir` does not need to be normalized
/// since only the ordering of the projections matters.
pub fn farthest_point<H: ConvexHull + ?Sized>(hull: &H, dir: Vec3) -> Vec3 {
    debug_assert!(hull.point_count() > 0, "support query on an empty hull");

    let mut farthest = hull.point_at(0);
    let mut max_dist = farthest.dot(dir);
    for i in 1..hull.point_count() {
        let point = hull.point_at(i);
        let dist = point.dot(dir);
        if dist > max_dist {
            max_dist = dist;
            farthest = point;
        }
    }
    farthest
}

/// Support point of the Minkowski difference `a - b` along `dir`.
pub fn support<A, B>(a: &A, b: &B, dir: Vec3) -> Vec3
where
    A: ConvexHull + ?Sized,
    B: ConvexHull + ?Sized,
{
    debug_assert!(dir != Vec3::ZERO, "support query along a zero direction");

    let p1 = farthest_point(a, dir);
    let p2 = farthest_point(b, -dir);
    p1 - p2
}
