use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use glam::{Mat4, Vec2, Vec3};

use tessera_engine::camera::OrthoCamera;
use tessera_engine::coords::Viewport;
use tessera_engine::logging::{LoggingConfig, init_logging};
use tessera_engine::paint::Rgb;
use tessera_engine::render::uniforms::names;
use tessera_engine::render::{
    DrawCall, FrameContext, FrameInputs, MeshId, ProgramPair, Translator, UniformSet,
    transparent_blend,
};
use tessera_engine::scene::{
    AnimatedSpriteOptions, BasicShape, ParallaxOptions, Placement, Renderable, TextureHandle,
};
use tessera_engine::time::FrameClock;

const DEFAULT_FRAMES: u32 = 3;
const FRAME_STEP: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let frames = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("frame count must be a non-negative integer, got {arg:?}"))?,
        None => DEFAULT_FRAMES,
    };

    let scene = build_scene().context("failed to build preview scene")?;
    log::info!("preview scene: {} renderables, {} frames", scene.len(), frames);

    let translator = Translator::default();
    let viewport = Viewport::new(1280.0, 720.0);
    anyhow::ensure!(viewport.is_valid(), "preview viewport has zero size");
    let mut camera = OrthoCamera::new(Vec2::ZERO, 64.0);
    let mut clock = FrameClock::new();
    let start = Instant::now();

    for i in 1..=frames {
        let time = clock.tick_at(start + FRAME_STEP * i);
        camera.position.x += 0.25;

        let frame = FrameInputs {
            elapsed: time.elapsed,
            camera: &camera,
            viewport,
            projection: camera.projection(viewport),
        };

        log::info!("frame {} (t = {:.3}s)", time.frame_index, time.elapsed);
        for (n, call) in translator.translate_frame(&scene, frame).enumerate() {
            log::info!("  #{n}: {}", describe(&call));
        }
    }

    Ok(())
}

/// One of each renderable kind, back to front.
fn build_scene() -> Result<Vec<Renderable>> {
    let sky = Some(TextureHandle::new(1));
    let hills = Some(TextureHandle::new(2));
    let hero_sheet = Some(TextureHandle::new(3));

    let ground: Rgb = "#3b7d23".parse().context("ground color")?;
    let accent: Rgb = "#ffd700".parse().context("accent color")?;

    Ok(vec![
        Renderable::parallax_scroll_z(sky, Vec2::splat(0.1), Vec2::new(20.0, 12.0), -10.0),
        Renderable::parallax_scroll_with_options(ParallaxOptions {
            texture: hills,
            scroll_speed: Vec2::new(0.5, 0.0),
            tile_size: Vec2::new(8.0, 4.0),
            depth: -5.0,
            offset: Vec2::new(2.0, 0.0),
        }),
        Renderable::shape(BasicShape::Rectangle, Vec2::new(-10.0, -6.0), Vec2::new(20.0, 2.0), ground),
        Renderable::shape_z(BasicShape::Circle, Vec3::new(6.0, 3.0, -1.0), Vec2::splat(2.0), Rgb::YELLOW),
        Renderable::sprite(None, Vec2::new(-4.0, -4.0), Vec2::splat(1.5)),
        Renderable::animated_sprite_with_options(AnimatedSpriteOptions {
            texture: hero_sheet,
            placement: Placement::new(Vec2::new(0.0, -3.0), Vec2::new(1.0, 2.0)).with_pivot(Vec2::new(0.5, 0.0)),
            uv_bottom_left: Vec2::new(0.0, 0.5),
            uv_top_right: Vec2::ONE,
            frame_count: 8,
            frame_duration: 0.1,
        }),
        Renderable::custom_fragment(
            "shimmer.frag",
            Placement::new(Vec2::new(3.0, -3.0), Vec2::ONE).with_rotation(0.3).with_pivot(Vec2::splat(0.5)),
            move |proj: Mat4, t: f32, transform: Mat4| {
                UniformSet::new()
                    .with(names::CAMERA_PROJ, proj)
                    .with(names::TRANSFORM, transform)
                    .with(names::COLOR, accent.normalized())
                    .with("phase", t.sin())
            },
        ),
        Renderable::custom(|ctx: &FrameContext| {
            DrawCall::new(
                ProgramPair::new("overlay.vert", "vignette.frag"),
                MeshId::UnitSquare,
                UniformSet::new().with(names::CAMERA_PROJ, ctx.projection).with(names::TIME, ctx.elapsed),
                transparent_blend(),
            )
        }),
    ])
}

fn describe(call: &DrawCall) -> String {
    let uniforms: Vec<&str> = call.uniforms.iter().map(|(name, _)| name).collect();
    format!(
        "{} + {} on {:?} [{}]",
        call.program.vertex,
        call.program.fragment,
        call.mesh,
        uniforms.join(", ")
    )
}
