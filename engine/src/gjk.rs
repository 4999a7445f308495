// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use bevy_ecs::prelude::Resource;
use glam::Vec3;
use rayon::prelude::*;

use crate::hull::ConvexHull;
use crate::simplex::{Simplex, edge_direction};
use crate::support::support;

pub const DEFAULT_MAX_ITERATIONS: usize = 32;
pub const DEFAULT_SEED_DIRECTION: Vec3 = Vec3::ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GjkResult {
    NoIntersection,
    Intersection,
}

impl GjkResult {
    pub fn intersects(self) -> bool {
        matches!(self, GjkResult::Intersection)
    }
}

/// Verdict plus the number of support samples taken after the initial segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GjkReport {
    pub result: GjkResult,
    pub iterations: usize,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GjkParams {
    pub max_iterations: usize,
    /// First search direction. Must not be zero.
    pub seed_direction: Vec3,
}

impl Default for GjkParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed_direction: DEFAULT_SEED_DIRECTION,
        }
    }
}

/// Tests whether two convex hulls overlap.
pub fn gjk_intersect<A, B>(a: &A, b: &B) -> GjkResult
where
    A: ConvexHull + ?Sized,
    B: ConvexHull + ?Sized,
{
    gjk_intersect_with_params(a, b, &GjkParams::default()).result
}

pub fn gjk_intersect_with_params<A, B>(a: &A, b: &B, params: &GjkParams) -> GjkReport
where
    A: ConvexHull + ?Sized,
    B: ConvexHull + ?Sized,
{
    debug_assert!(params.seed_direction != Vec3::ZERO, "GJK seed direction is zero");

    let mut simplex = Simplex::new();
    let mut dir = params.seed_direction;

    let c = support(a, b, dir);
    simplex.push(c);
    dir = -c;
    if is_degenerate(dir) {
        // The first sample is the origin itself.
        return report(GjkResult::Intersection, 0);
    }

    let b_point = support(a, b, dir);
    simplex.push(b_point);
    if b_point.dot(dir) < 0.0 {
        return report(GjkResult::NoIntersection, 0);
    }

    dir = edge_direction(c - b_point, -b_point);

    for iteration in 1..=params.max_iterations {
        if is_degenerate(dir) {
            // The origin lies on the current segment or triangle, which is
            // made of Minkowski points and therefore inside the difference.
            return report(GjkResult::Intersection, iteration - 1);
        }

        let newest = support(a, b, dir);
        simplex.push(newest);
        if newest.dot(dir) <= 0.0 {
            return report(GjkResult::NoIntersection, iteration);
        }

        if simplex.contains_origin(&mut dir) {
            return report(GjkResult::Intersection, iteration);
        }
    }

    log::warn!(
        "GJK gave up after {} iterations, reporting no intersection",
        params.max_iterations
    );
    report(GjkResult::NoIntersection, params.max_iterations)
}

/// Tests every pair independently on the rayon pool. Results keep input order.
pub fn gjk_intersect_pairs<A, B>(pairs: &[(A, B)], params: &GjkParams) -> Vec<GjkResult>
where
    A: ConvexHull + Sync,
    B: ConvexHull + Sync,
{
    pairs
        .par_iter()
        .map(|(a, b)| gjk_intersect_with_params(a, b, params).result)
        .collect()
}

/// Only an exactly zero direction counts. Any non-zero vector still orders
/// support points correctly however small it is.
fn is_degenerate(dir: Vec3) -> bool {
    dir == Vec3::ZERO
}

fn report(result: GjkResult, iterations: usize) -> GjkReport {
    log::trace!("GJK finished with {:?} after {} iterations", result, iterations);
    GjkReport { result, iterations }
}
