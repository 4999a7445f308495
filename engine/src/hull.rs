// Distributed under the GNU Affero General Public License v3.0 or later.
// See accompanying file LICENSE or https://www.gnu.org/licenses/agpl-3.0.html for details.

use glam::{Mat4, Vec3};
use thiserror::Error;

/// Read-only view of a convex polytope as a set of world-space points.
///
/// GJK only ever asks for support points, so edges and faces are never
/// needed. Point order carries no meaning.
pub trait ConvexHull {
    fn point_count(&self) -> usize;

    fn point_at(&self, index: usize) -> Vec3;

    fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.point_count()).map(move |i| self.point_at(i))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HullError {
    #[error("Convex hull needs at least one point")]
    Empty,
}

/// Oriented bounding box stored as its eight world-space corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    corners: [Vec3; 8],
}

impl Obb {
    /// Builds a box from its center, three unit axes and the half-extent along each axis.
    pub fn new(center: Vec3, axes: [Vec3; 3], half_extents: Vec3) -> Self {
        let x = axes[0] * half_extents.x;
        let y = axes[1] * half_extents.y;
        let z = axes[2] * half_extents.z;
        Self {
            corners: [
                center - x - y + z,
                center - x + y + z,
                center + x + y + z,
                center + x - y + z,
                center + x + y - z,
                center + x - y - z,
                center - x + y - z,
                center - x - y - z,
            ],
        }
    }

    pub fn axis_aligned(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center, [Vec3::X, Vec3::Y, Vec3::Z], half_extents)
    }

    /// Transforms model-space corners into world space with the object's pose.
    pub fn from_local_corners(local_corners: &[Vec3; 8], transform: &Mat4) -> Self {
        Self {
            corners: local_corners.map(|corner| transform.transform_point3(corner)),
        }
    }

    pub fn from_corners(corners: [Vec3; 8]) -> Self {
        Self { corners }
    }

    pub fn corners(&self) -> &[Vec3; 8] {
        &self.corners
    }

    /// Average of the corners.
    pub fn center(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() / 8.0
    }

    /// Applies a rigid (or any affine) transform to every corner.
    pub fn transformed(&self, transform: &Mat4) -> Self {
        Self::from_local_corners(&self.corners, transform)
    }
}

impl ConvexHull for Obb {
    fn point_count(&self) -> usize {
        self.corners.len()
    }

    fn point_at(&self, index: usize) -> Vec3 {
        self.corners[index]
    }
}

/// Arbitrary non-empty convex point set.
#[derive(Debug, Clone, PartialEq)]
pub struct PointHull {
    points: Vec<Vec3>,
}

impl PointHull {
    pub fn new(points: Vec<Vec3>) -> Result<Self, HullError> {
        if points.is_empty() {
            return Err(HullError::Empty);
        }
        Ok(Self { points })
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }
}

impl TryFrom<&[Vec3]> for PointHull {
    type Error = HullError;

    fn try_from(points: &[Vec3]) -> Result<Self, Self::Error> {
        Self::new(points.to_vec())
    }
}

impl From<Obb> for PointHull {
    fn from(obb: Obb) -> Self {
        Self {
            points: obb.corners.to_vec(),
        }
    }
}

impl ConvexHull for PointHull {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point_at(&self, index: usize) -> Vec3 {
        self.points[index]
    }
}
