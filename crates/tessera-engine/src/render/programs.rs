use std::borrow::Cow;

/// Built-in visual effects the program library must provide.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Effect {
    SolidColor,
    SolidColorCircle,
    SolidColorRing,
    Textured,
    AnimatedTextured,
}

impl Effect {
    pub const ALL: [Effect; 5] = [
        Effect::SolidColor,
        Effect::SolidColorCircle,
        Effect::SolidColorRing,
        Effect::Textured,
        Effect::AnimatedTextured,
    ];
}

/// Named vertex/fragment program pair, resolved by the program library.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ProgramPair {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>,
}

impl ProgramPair {
    #[inline]
    pub fn new(vertex: impl Into<Cow<'static, str>>, fragment: impl Into<Cow<'static, str>>) -> Self {
        Self { vertex: vertex.into(), fragment: fragment.into() }
    }
}

/// Program names used by the translator.
///
/// The defaults match the canonical program library. Override individual entries
/// when the backend registers its programs under different names.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProgramTable {
    pub solid_color: ProgramPair,
    pub solid_color_circle: ProgramPair,
    pub solid_color_ring: ProgramPair,
    pub textured: ProgramPair,
    pub animated_textured: ProgramPair,

    /// Vertex program paired with caller-supplied fragment programs.
    pub custom_vertex: Cow<'static, str>,
}

impl Default for ProgramTable {
    fn default() -> Self {
        Self {
            solid_color: ProgramPair::new("quad.vert", "solid_color.frag"),
            solid_color_circle: ProgramPair::new("quad.vert", "solid_color_circle.frag"),
            solid_color_ring: ProgramPair::new("quad.vert", "solid_color_ring.frag"),
            textured: ProgramPair::new("quad.vert", "textured.frag"),
            animated_textured: ProgramPair::new("quad.vert", "animated_textured.frag"),
            custom_vertex: Cow::Borrowed("quad.vert"),
        }
    }
}

impl ProgramTable {
    /// Returns the program pair registered for `effect`.
    pub fn get(&self, effect: Effect) -> &ProgramPair {
        match effect {
            Effect::SolidColor => &self.solid_color,
            Effect::SolidColorCircle => &self.solid_color_circle,
            Effect::SolidColorRing => &self.solid_color_ring,
            Effect::Textured => &self.textured,
            Effect::AnimatedTextured => &self.animated_textured,
        }
    }

    /// Pairs a caller-supplied fragment program with [`custom_vertex`](Self::custom_vertex).
    pub fn custom(&self, fragment: Cow<'static, str>) -> ProgramPair {
        ProgramPair { vertex: self.custom_vertex.clone(), fragment }
    }
}
