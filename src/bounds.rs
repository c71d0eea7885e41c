//! Axis-aligned bounding boxes over point sets.
//!
//! The same fold serves model-space vertices ([`Vec3`], three axes) and
//! screen pixels ([`Pixel`], two axes). An empty input leaves the box at its
//! sentinel extremes (`min` above `max` on every axis), which
//! [`BoundingBox::is_empty`] reports.

use crate::math::{Pixel, Vec3};

/// A point type a bounding box can be folded over.
pub trait Extent: Copy {
    /// Starting `min`: larger than any real point on every axis.
    const EMPTY_MIN: Self;
    /// Starting `max`: smaller than any real point on every axis.
    const EMPTY_MAX: Self;

    fn component_min(self, other: Self) -> Self;
    fn component_max(self, other: Self) -> Self;

    /// True if every component of `self` is `<=` the matching one of `other`.
    fn all_le(self, other: Self) -> bool;
}

impl Extent for Vec3 {
    const EMPTY_MIN: Self = Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
    const EMPTY_MAX: Self = Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);

    #[inline]
    fn component_min(self, other: Self) -> Self {
        Vec3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    fn component_max(self, other: Self) -> Self {
        Vec3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }
}

impl Extent for Pixel {
    const EMPTY_MIN: Self = Pixel::new(i32::MAX, i32::MAX);
    const EMPTY_MAX: Self = Pixel::new(i32::MIN, i32::MIN);

    #[inline]
    fn component_min(self, other: Self) -> Self {
        Pixel::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    fn component_max(self, other: Self) -> Self {
        Pixel::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    fn all_le(self, other: Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox<P> {
    pub min: P,
    pub max: P,
}

impl<P: Extent> BoundingBox<P> {
    /// The box of no points.
    pub const EMPTY: Self = Self {
        min: P::EMPTY_MIN,
        max: P::EMPTY_MAX,
    };

    /// Component-wise minimum and maximum across `points`.
    pub fn compute<I>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        points.into_iter().fold(Self::EMPTY, |bounds, point| Self {
            min: bounds.min.component_min(point),
            max: bounds.max.component_max(point),
        })
    }

    pub fn is_empty(&self) -> bool {
        !self.min.all_le(self.max)
    }

    pub fn contains(&self, point: P) -> bool {
        self.min.all_le(point) && point.all_le(self.max)
    }
}

impl BoundingBox<Vec3> {
    /// Size of the box along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}
