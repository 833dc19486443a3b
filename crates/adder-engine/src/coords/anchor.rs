use super::{Rect, Vec2};

/// Reference point of a [`Rect`] that stays fixed when the rectangle is resized.
///
/// Components store a position together with an anchor; whenever their image
/// changes size the rectangle is rebuilt so that `anchor.point(rect)` is still
/// equal to that position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Anchor {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

type Getter = fn(Rect) -> Vec2;
type Setter = fn(&mut Rect, Vec2);

// Indexed by `Anchor as usize`; order must match the enum declaration.
const ACCESSORS: [(Getter, Setter); 9] = [
    (
        |r| r.origin,
        |r, p| r.origin = p,
    ),
    (
        |r| Vec2::new(r.origin.x + r.size.x / 2.0, r.origin.y),
        |r, p| r.origin = Vec2::new(p.x - r.size.x / 2.0, p.y),
    ),
    (
        |r| Vec2::new(r.origin.x + r.size.x, r.origin.y),
        |r, p| r.origin = Vec2::new(p.x - r.size.x, p.y),
    ),
    (
        |r| Vec2::new(r.origin.x, r.origin.y + r.size.y / 2.0),
        |r, p| r.origin = Vec2::new(p.x, p.y - r.size.y / 2.0),
    ),
    (
        |r| r.origin + r.size / 2.0,
        |r, p| r.origin = p - r.size / 2.0,
    ),
    (
        |r| Vec2::new(r.origin.x + r.size.x, r.origin.y + r.size.y / 2.0),
        |r, p| r.origin = Vec2::new(p.x - r.size.x, p.y - r.size.y / 2.0),
    ),
    (
        |r| Vec2::new(r.origin.x, r.origin.y + r.size.y),
        |r, p| r.origin = Vec2::new(p.x, p.y - r.size.y),
    ),
    (
        |r| Vec2::new(r.origin.x + r.size.x / 2.0, r.origin.y + r.size.y),
        |r, p| r.origin = Vec2::new(p.x - r.size.x / 2.0, p.y - r.size.y),
    ),
    (
        |r| r.max(),
        |r, p| r.origin = p - r.size,
    ),
];

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Left,
        Anchor::Center,
        Anchor::Right,
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
    ];

    #[inline]
    fn accessors(self) -> (Getter, Setter) {
        ACCESSORS[self as usize]
    }

    /// Returns the point of `rect` this anchor designates.
    #[inline]
    pub fn point(self, rect: Rect) -> Vec2 {
        (self.accessors().0)(rect)
    }

    /// Moves `rect` (keeping its size) so that its anchor point lands on `p`.
    #[inline]
    pub fn place(self, rect: &mut Rect, p: Vec2) {
        (self.accessors().1)(rect, p)
    }

    /// Builds a rectangle of `size` whose anchor point is `at`.
    #[inline]
    pub fn rect_for(self, size: Vec2, at: Vec2) -> Rect {
        let mut rect = Rect::from_origin_size(Vec2::zero(), size);
        self.place(&mut rect, at);
        rect
    }
}
