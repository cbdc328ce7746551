use crate::scene::BasicShape;

use super::{Effect, MeshId};

/// Mesh and effect used to draw one basic shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CatalogEntry {
    pub mesh: MeshId,
    pub effect: Effect,
}

/// Fixed basic-shape mapping.
///
/// Circle and ring are masks over the unit square; only the triangle has its own mesh.
pub const fn lookup(shape: BasicShape) -> CatalogEntry {
    match shape {
        BasicShape::Rectangle => CatalogEntry { mesh: MeshId::UnitSquare, effect: Effect::SolidColor },
        BasicShape::Triangle => CatalogEntry { mesh: MeshId::UnitTriangle, effect: Effect::SolidColor },
        BasicShape::Circle => CatalogEntry { mesh: MeshId::UnitSquare, effect: Effect::SolidColorCircle },
        BasicShape::Ring => CatalogEntry { mesh: MeshId::UnitSquare, effect: Effect::SolidColorRing },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_triangle_uses_triangle_mesh() {
        for shape in BasicShape::ALL {
            let expected = if shape == BasicShape::Triangle { MeshId::UnitTriangle } else { MeshId::UnitSquare };
            assert_eq!(lookup(shape).mesh, expected, "{shape:?}");
        }
    }

    #[test]
    fn masks_select_effects() {
        assert_eq!(lookup(BasicShape::Rectangle).effect, Effect::SolidColor);
        assert_eq!(lookup(BasicShape::Triangle).effect, Effect::SolidColor);
        assert_eq!(lookup(BasicShape::Circle).effect, Effect::SolidColorCircle);
        assert_eq!(lookup(BasicShape::Ring).effect, Effect::SolidColorRing);
    }
}
