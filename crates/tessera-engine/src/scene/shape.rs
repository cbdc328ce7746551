/// Primitive shapes drawable with a flat color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BasicShape {
    Rectangle,
    Triangle,
    /// Circle inscribed in the shape's bounds.
    Circle,
    /// Annulus inscribed in the shape's bounds.
    Ring,
}

impl BasicShape {
    pub const ALL: [BasicShape; 4] = [
        BasicShape::Rectangle,
        BasicShape::Triangle,
        BasicShape::Circle,
        BasicShape::Ring,
    ];
}
