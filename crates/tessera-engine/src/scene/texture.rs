/// Opaque handle to a texture owned by the caller's resource manager.
///
/// The scene never looks inside; it only distinguishes `Some(handle)` from
/// "not loaded yet" (`None`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
