/// Blend configuration attached to every draw call.
///
/// `state` plugs straight into `wgpu::ColorTargetState::blend`; `constant` is
/// applied with `RenderPass::set_blend_constant`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlendConfig {
    pub state: wgpu::BlendState,
    pub constant: wgpu::Color,
}

/// Straight-alpha "over" compositing used by every built-in draw call.
///
/// - color: `src * src_alpha + dst * (1 - src_alpha)`
/// - alpha: `src + dst * (1 - src_alpha)`
/// - blend constant: zero
pub const TRANSPARENT_BLEND: BlendConfig = BlendConfig {
    state: wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    },
    constant: wgpu::Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 },
};

/// Returns the fixed transparent blend configuration.
///
/// Custom draw functions call this to composite the same way built-in draws do.
#[inline]
pub fn transparent_blend() -> BlendConfig {
    TRANSPARENT_BLEND
}
