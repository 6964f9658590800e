//! Ordered point collections
//!
//! Insertion order is meaningful and duplicates are allowed; the transform
//! pipeline packs a set's points into matrix columns in this order. Elements
//! are immutable once stored: the set grows with [`PointSet::push`] and is
//! emptied with [`PointSet::clear`], nothing mutates a point in place.

use crate::point::{Point2h, Point3h};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A generic ordered point container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointSet<P> {
    points: Vec<P>,
}

/// An ordered set of 2D homogeneous points
pub type PointSet2 = PointSet<Point2h>;

/// An ordered set of 3D homogeneous points
pub type PointSet3 = PointSet<Point3h>;

impl<P> PointSet<P> {
    /// Create a new empty point set
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a point set from a vector of points
    pub fn from_points(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Get the number of points in the set
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point to the set
    pub fn push(&mut self, point: P) {
        self.points.push(point);
    }

    /// Get an iterator over the points in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    /// Remove all points from the set
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl<P> Default for PointSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Index<usize> for PointSet<P> {
    type Output = P;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<P> IntoIterator for PointSet<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, P> IntoIterator for &'a PointSet<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<P> Extend<P> for PointSet<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<P> FromIterator<P> for PointSet<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}
