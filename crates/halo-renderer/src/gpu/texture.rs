//! Offscreen texture creation, HDR upload and CPU readback.

use half::f16;

use crate::kernel::{HdrImage, Rgba};

use super::context::GpuContext;
use super::types::RendererError;

/// Create a texture that can be rendered into, sampled, and copied out.
pub fn create_render_target(
    device: &wgpu::Device,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    label: &str,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT
            | wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

/// Upload an [`HdrImage`] into a new `Rgba16Float` texture.
pub fn upload_hdr_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &HdrImage,
    label: &str,
) -> (wgpu::Texture, wgpu::TextureView) {
    let size = wgpu::Extent3d {
        width: image.width(),
        height: image.height(),
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba16Float,
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });

    let texels: Vec<f16> = image
        .pixels()
        .iter()
        .flat_map(|p| p.map(f16::from_f32))
        .collect();

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        bytemuck::cast_slice(&texels),
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(image.width() * 8),
            rows_per_image: Some(image.height()),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

/// Copy a texture back to the CPU. Supports `Rgba16Float` and `Rgba8Unorm`.
///
/// Blocks until the GPU has finished all submitted work.
pub fn read_texture(ctx: &GpuContext, texture: &wgpu::Texture) -> Result<HdrImage, RendererError> {
    let format = texture.format();
    let bpp = bytes_per_texel(format)?;
    let (width, height) = (texture.width(), texture.height());
    let padded_row = padded_bytes_per_row(width, bpp);

    let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("halo readback buffer"),
        size: padded_row as u64 * height as u64,
        usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
        mapped_at_creation: false,
    });

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("halo readback encoder"),
        });
    encoder.copy_texture_to_buffer(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        wgpu::TexelCopyBufferInfo {
            buffer: &buffer,
            layout: wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(padded_row),
                rows_per_image: Some(height),
            },
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    ctx.queue.submit(Some(encoder.finish()));

    let slice = buffer.slice(..);
    let (tx, rx) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = tx.send(result);
    });
    ctx.device.poll(wgpu::Maintain::Wait);
    rx.recv()
        .map_err(|e| RendererError::ReadbackError(e.to_string()))??;

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    {
        let data = slice.get_mapped_range();
        let row_len = (width * bpp) as usize;
        for row in data.chunks(padded_row as usize) {
            decode_row(format, &row[..row_len], &mut pixels)?;
        }
    }
    buffer.unmap();

    HdrImage::from_pixels(width, height, pixels)
}

fn bytes_per_texel(format: wgpu::TextureFormat) -> Result<u32, RendererError> {
    match format {
        wgpu::TextureFormat::Rgba16Float => Ok(8),
        wgpu::TextureFormat::Rgba8Unorm => Ok(4),
        other => Err(RendererError::ReadbackError(format!(
            "unsupported readback format {other:?}"
        ))),
    }
}

/// Row pitch rounded up to `COPY_BYTES_PER_ROW_ALIGNMENT` (256).
pub(crate) fn padded_bytes_per_row(width: u32, bytes_per_texel: u32) -> u32 {
    let unpadded = width * bytes_per_texel;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

fn decode_row(
    format: wgpu::TextureFormat,
    row: &[u8],
    out: &mut Vec<Rgba>,
) -> Result<(), RendererError> {
    match format {
        wgpu::TextureFormat::Rgba16Float => {
            for texel in row.chunks_exact(8) {
                let ch = |i: usize| f16::from_le_bytes([texel[2 * i], texel[2 * i + 1]]).to_f32();
                out.push([ch(0), ch(1), ch(2), ch(3)]);
            }
        }
        wgpu::TextureFormat::Rgba8Unorm => {
            for texel in row.chunks_exact(4) {
                out.push(texel_u8_to_f32(texel));
            }
        }
        other => {
            return Err(RendererError::ReadbackError(format!(
                "unsupported readback format {other:?}"
            )))
        }
    }
    Ok(())
}

fn texel_u8_to_f32(texel: &[u8]) -> Rgba {
    [
        texel[0] as f32 / 255.0,
        texel[1] as f32 / 255.0,
        texel[2] as f32 / 255.0,
        texel[3] as f32 / 255.0,
    ]
}

// =============================================================================
// Tests
// =============================================================================
