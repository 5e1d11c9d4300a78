//! Type definitions for per-vertex and per-corner attribute data

use nalgebra::{Point3, Vector2};

pub type Position<Real> = Point3<Real>;

/// `(u, v)`, with the origin at the bottom-left of the texture.
pub type Texcoord<Real> = Vector2<Real>;

/// Indices of a triangle's corners within a vertex list, wound counter-clockwise when viewed
/// from outside the surface.
pub type Triangle<Idx> = [Idx; 3];

/// The texture coordinates of each corner of one triangle, in the triangle's corner order.
pub type CornerTexcoords<Real> = [Texcoord<Real>; 3];
