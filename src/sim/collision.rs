//! Collision primitives for axis-aligned rectangles and circles
//!
//! Every test here is strict: shapes that merely touch do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` with its top-left corner at `pos`
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True when width and height are finite and strictly positive
    pub fn has_valid_size(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w > 0.0
            && self.h > 0.0
    }

    /// Point lies in the open interior (edges excluded)
    pub fn contains_point_strict(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }

    /// `other` lies entirely within this rect (shared edges allowed)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Transient collision circle for hazards and coins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub r: f32,
}

impl Circle {
    pub const fn new(center: Vec2, r: f32) -> Self {
        Self { center, r }
    }
}

/// Rectangle vs rectangle overlap of open interiors
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

/// Circle vs rectangle overlap
///
/// Clamps the circle center onto the rectangle to find the nearest point, then
/// compares squared distances. Tangency is not a hit.
#[inline]
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    let closest = Vec2::new(
        circle.center.x.clamp(rect.x, rect.right()),
        circle.center.y.clamp(rect.y, rect.bottom()),
    );
    circle.center.distance_squared(closest) < circle.r * circle.r
}
