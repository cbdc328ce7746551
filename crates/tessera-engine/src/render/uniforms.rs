use std::borrow::Cow;

use glam::{Mat4, Vec2, Vec3, Vec4};
use thiserror::Error;

use crate::scene::TextureHandle;

/// Canonical uniform names shared between the translator and the program library.
pub mod names {
    pub const CAMERA_PROJ: &str = "camera_proj";
    pub const TRANSFORM: &str = "transform";
    pub const COLOR: &str = "color";

    pub const TEXTURE: &str = "texture";
    pub const TILE_REPEAT: &str = "tile_repeat";
    pub const UV_OFFSET: &str = "uv_offset";

    pub const UV_BOTTOM_LEFT: &str = "uv_bottom_left";
    pub const UV_TOP_RIGHT: &str = "uv_top_right";
    pub const FRAME_COUNT: &str = "frame_count";
    pub const FRAME_DURATION: &str = "frame_duration";
    pub const TIME: &str = "time";

    pub const CAMERA_POSITION: &str = "camera_position";
    pub const VIEW_SIZE: &str = "view_size";
    pub const SCROLL_SPEED: &str = "scroll_speed";
    pub const TILE_SIZE: &str = "tile_size";
    pub const OFFSET: &str = "offset";
    pub const DEPTH: &str = "depth";
}

/// A single uniform value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    UInt(u32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
    Texture(TextureHandle),
}

impl UniformValue {
    /// Short type name used in diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            UniformValue::Float(_) => "f32",
            UniformValue::UInt(_) => "u32",
            UniformValue::Vec2(_) => "vec2",
            UniformValue::Vec3(_) => "vec3",
            UniformValue::Vec4(_) => "vec4",
            UniformValue::Mat4(_) => "mat4",
            UniformValue::Texture(_) => "texture",
        }
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        UniformValue::Float(v)
    }
}

impl From<u32> for UniformValue {
    fn from(v: u32) -> Self {
        UniformValue::UInt(v)
    }
}

impl From<Vec2> for UniformValue {
    fn from(v: Vec2) -> Self {
        UniformValue::Vec2(v)
    }
}

impl From<Vec3> for UniformValue {
    fn from(v: Vec3) -> Self {
        UniformValue::Vec3(v)
    }
}

impl From<Vec4> for UniformValue {
    fn from(v: Vec4) -> Self {
        UniformValue::Vec4(v)
    }
}

impl From<Mat4> for UniformValue {
    fn from(v: Mat4) -> Self {
        UniformValue::Mat4(v)
    }
}

impl From<TextureHandle> for UniformValue {
    fn from(v: TextureHandle) -> Self {
        UniformValue::Texture(v)
    }
}

/// Error returned by the typed `require_*` accessors of [`UniformSet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniformError {
    #[error("missing uniform {0:?}")]
    Missing(String),

    #[error("uniform {name:?} has type {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Named uniform values for one draw call.
///
/// Insertion order is preserved. Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformSet {
    entries: Vec<(Cow<'static, str>, UniformValue)>,
}

impl UniformSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Inserts or replaces `name`.
    pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<UniformValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Chaining form of [`set`](Self::set).
    #[inline]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<UniformValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), v))
    }

    pub fn require_f32(&self, name: &str) -> Result<f32, UniformError> {
        self.require(name, "f32", |v| match v {
            UniformValue::Float(f) => Some(*f),
            _ => None,
        })
    }

    pub fn require_u32(&self, name: &str) -> Result<u32, UniformError> {
        self.require(name, "u32", |v| match v {
            UniformValue::UInt(u) => Some(*u),
            _ => None,
        })
    }

    pub fn require_vec2(&self, name: &str) -> Result<Vec2, UniformError> {
        self.require(name, "vec2", |v| match v {
            UniformValue::Vec2(x) => Some(*x),
            _ => None,
        })
    }

    pub fn require_vec3(&self, name: &str) -> Result<Vec3, UniformError> {
        self.require(name, "vec3", |v| match v {
            UniformValue::Vec3(x) => Some(*x),
            _ => None,
        })
    }

    pub fn require_mat4(&self, name: &str) -> Result<Mat4, UniformError> {
        self.require(name, "mat4", |v| match v {
            UniformValue::Mat4(m) => Some(*m),
            _ => None,
        })
    }

    pub fn require_texture(&self, name: &str) -> Result<TextureHandle, UniformError> {
        self.require(name, "texture", |v| match v {
            UniformValue::Texture(t) => Some(*t),
            _ => None,
        })
    }

    fn require<T>(
        &self,
        name: &str,
        expected: &'static str,
        extract: impl FnOnce(&UniformValue) -> Option<T>,
    ) -> Result<T, UniformError> {
        let value = self.get(name).ok_or_else(|| UniformError::Missing(name.to_string()))?;
        extract(value).ok_or_else(|| UniformError::TypeMismatch {
            name: name.to_string(),
            expected,
            found: value.type_name(),
        })
    }
}
