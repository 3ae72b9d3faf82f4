//! One-shot offscreen bloom of a CPU image.

use crate::gpu::{create_render_target, read_texture, upload_hdr_texture, GpuContext, RendererError};
use crate::kernel::HdrImage;

use super::pipeline::BloomPipeline;
use super::types::BloomSettings;

/// Upload `scene`, run the full bloom chain into a target of
/// `output_format`, and read the result back.
pub fn render_bloom(
    ctx: &GpuContext,
    scene: &HdrImage,
    settings: BloomSettings,
    output_format: wgpu::TextureFormat,
) -> Result<HdrImage, RendererError> {
    let (width, height) = (scene.width(), scene.height());
    if width == 0 || height == 0 {
        return Err(RendererError::InvalidImage(format!(
            "cannot render an empty {width}x{height} scene"
        )));
    }

    let (_scene_texture, scene_view) =
        upload_hdr_texture(&ctx.device, &ctx.queue, scene, "bloom scene");
    let (output_texture, output_view) =
        create_render_target(&ctx.device, width, height, output_format, "bloom output");

    let pipeline = BloomPipeline::new(
        &ctx.device,
        &scene_view,
        width,
        height,
        output_format,
        settings,
    );
    pipeline.update_uniforms(&ctx.queue);

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("bloom encoder"),
        });
    pipeline.render(&mut encoder, &output_view);
    ctx.queue.submit(Some(encoder.finish()));

    tracing::debug!(width, height, "bloom frame submitted");
    read_texture(ctx, &output_texture)
}
