//! Bloom render pipeline.
//!
//! Pass order per frame:
//! 1. brightness: scene -> bright
//! 2. blur H: bright (or blur_v on later passes) -> blur_h
//! 3. blur V: blur_h -> blur_v, repeated with step 2 for each pass
//! 4. composite: scene + blur_v -> output
//!
//! Every pass is a separate render pass on one encoder, so each stage sees
//! the completed output of the previous one.

use crate::gpu::create_render_target;
use crate::kernel::{HORIZONTAL, VERTICAL};
use crate::shaders::{BloomStage, FRAGMENT_ENTRY, VERTEX_ENTRY};

use super::types::{BloomSettings, BlurUniforms, BrightnessUniforms, CompositeUniforms};

/// Format of the bright and blur intermediate targets.
pub const INTERMEDIATE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Size-dependent resources: intermediate targets and the bind groups that
/// read from them.
struct BloomTargets {
    _bright_texture: wgpu::Texture,
    _blur_h_texture: wgpu::Texture,
    _blur_v_texture: wgpu::Texture,
    bright_view: wgpu::TextureView,
    blur_h_view: wgpu::TextureView,
    blur_v_view: wgpu::TextureView,
    brightness_bind_group: wgpu::BindGroup,
    /// First horizontal pass reads the bright target.
    blur_h_bind_group: wgpu::BindGroup,
    /// Later horizontal passes read the previous vertical output.
    blur_h_repeat_bind_group: wgpu::BindGroup,
    blur_v_bind_group: wgpu::BindGroup,
    composite_bind_group: wgpu::BindGroup,
}

/// Manages the bloom chain: extract -> separable blur -> composite.
pub struct BloomPipeline {
    brightness_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    brightness_buffer: wgpu::Buffer,
    blur_h_buffer: wgpu::Buffer,
    blur_v_buffer: wgpu::Buffer,
    composite_buffer: wgpu::Buffer,
    source_layout: wgpu::BindGroupLayout,
    composite_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    targets: BloomTargets,
    pub settings: BloomSettings,
}

impl BloomPipeline {
    /// Create the bloom pipeline.
    ///
    /// - `scene_view`: the HDR scene to bloom, sampled by the brightness and
    ///   composite passes
    /// - `width`/`height`: size of the scene and of every intermediate target
    /// - `output_format`: format of the view later passed to [`Self::render`]
    pub fn new(
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        width: u32,
        height: u32,
        output_format: wgpu::TextureFormat,
        settings: BloomSettings,
    ) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("bloom sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let create_uniform_buffer = |label: &str, size: usize| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: size as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let brightness_buffer = create_uniform_buffer(
            "bloom brightness uniforms",
            std::mem::size_of::<BrightnessUniforms>(),
        );
        let blur_h_buffer =
            create_uniform_buffer("bloom blur h uniforms", std::mem::size_of::<BlurUniforms>());
        let blur_v_buffer =
            create_uniform_buffer("bloom blur v uniforms", std::mem::size_of::<BlurUniforms>());
        let composite_buffer = create_uniform_buffer(
            "bloom composite uniforms",
            std::mem::size_of::<CompositeUniforms>(),
        );

        // brightness and blur: texture, sampler, uniform
        let source_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bloom source bind group layout"),
            entries: &[texture_entry(0), sampler_entry(1), uniform_entry(2)],
        });
        // composite: scene, bloom, sampler, uniform
        let composite_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bloom composite bind group layout"),
            entries: &[
                texture_entry(0),
                texture_entry(1),
                sampler_entry(2),
                uniform_entry(3),
            ],
        });

        let brightness_pipeline = create_stage_pipeline(
            device,
            BloomStage::Brightness,
            &source_layout,
            INTERMEDIATE_FORMAT,
        );
        let blur_pipeline =
            create_stage_pipeline(device, BloomStage::Blur, &source_layout, INTERMEDIATE_FORMAT);
        let composite_pipeline = create_stage_pipeline(
            device,
            BloomStage::Composite,
            &composite_layout,
            output_format,
        );

        let targets = BloomTargets::new(
            device,
            &source_layout,
            &composite_layout,
            &sampler,
            UniformBuffers {
                brightness: &brightness_buffer,
                blur_h: &blur_h_buffer,
                blur_v: &blur_v_buffer,
                composite: &composite_buffer,
            },
            scene_view,
            width,
            height,
        );

        tracing::debug!(
            width,
            height,
            ?output_format,
            passes = settings.blur.passes,
            enabled = settings.enabled,
            "bloom pipeline created"
        );

        Self {
            brightness_pipeline,
            blur_pipeline,
            composite_pipeline,
            brightness_buffer,
            blur_h_buffer,
            blur_v_buffer,
            composite_buffer,
            source_layout,
            composite_layout,
            sampler,
            targets,
            settings,
        }
    }

    /// Recreate intermediate targets and bind groups after a resize.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        scene_view: &wgpu::TextureView,
        width: u32,
        height: u32,
    ) {
        self.targets = BloomTargets::new(
            device,
            &self.source_layout,
            &self.composite_layout,
            &self.sampler,
            UniformBuffers {
                brightness: &self.brightness_buffer,
                blur_h: &self.blur_h_buffer,
                blur_v: &self.blur_v_buffer,
                composite: &self.composite_buffer,
            },
            scene_view,
            width,
            height,
        );
        tracing::debug!(width, height, "bloom targets resized");
    }

    /// Replace the settings. Takes effect after the next
    /// [`Self::update_uniforms`].
    pub fn set_settings(&mut self, settings: BloomSettings) {
        self.settings = settings;
    }

    /// Upload all four uniform blocks for the current settings.
    pub fn update_uniforms(&self, queue: &wgpu::Queue) {
        let s = &self.settings;
        queue.write_buffer(
            &self.brightness_buffer,
            0,
            bytemuck::bytes_of(&BrightnessUniforms::new(&s.brightness)),
        );
        queue.write_buffer(
            &self.blur_h_buffer,
            0,
            bytemuck::bytes_of(&BlurUniforms::new(&s.blur, HORIZONTAL)),
        );
        queue.write_buffer(
            &self.blur_v_buffer,
            0,
            bytemuck::bytes_of(&BlurUniforms::new(&s.blur, VERTICAL)),
        );
        queue.write_buffer(
            &self.composite_buffer,
            0,
            bytemuck::bytes_of(&CompositeUniforms::new(&s.composite, s.enabled)),
        );
    }

    /// Record the bloom chain into the command encoder, writing the final
    /// image to `output_view`.
    ///
    /// When disabled only the composite pass runs, at zero intensity.
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, output_view: &wgpu::TextureView) {
        let t = &self.targets;

        if self.settings.enabled {
            fullscreen_pass(
                encoder,
                "bloom brightness pass",
                &t.bright_view,
                &self.brightness_pipeline,
                &t.brightness_bind_group,
            );

            for pass in 0..self.settings.blur.passes.max(1) {
                let h_bind_group = if pass == 0 {
                    &t.blur_h_bind_group
                } else {
                    &t.blur_h_repeat_bind_group
                };
                fullscreen_pass(
                    encoder,
                    "bloom h pass",
                    &t.blur_h_view,
                    &self.blur_pipeline,
                    h_bind_group,
                );
                fullscreen_pass(
                    encoder,
                    "bloom v pass",
                    &t.blur_v_view,
                    &self.blur_pipeline,
                    &t.blur_v_bind_group,
                );
            }
        }

        fullscreen_pass(
            encoder,
            "bloom composite pass",
            output_view,
            &self.composite_pipeline,
            &t.composite_bind_group,
        );
    }

    /// The final blurred texture view (output of the last vertical pass).
    pub fn output_view(&self) -> &wgpu::TextureView {
        &self.targets.blur_v_view
    }
}

struct UniformBuffers<'a> {
    brightness: &'a wgpu::Buffer,
    blur_h: &'a wgpu::Buffer,
    blur_v: &'a wgpu::Buffer,
    composite: &'a wgpu::Buffer,
}

impl BloomTargets {
    #[allow(clippy::too_many_arguments)]
    fn new(
        device: &wgpu::Device,
        source_layout: &wgpu::BindGroupLayout,
        composite_layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        buffers: UniformBuffers<'_>,
        scene_view: &wgpu::TextureView,
        width: u32,
        height: u32,
    ) -> Self {
        let (bright_texture, bright_view) =
            create_render_target(device, width, height, INTERMEDIATE_FORMAT, "bloom_bright");
        let (blur_h_texture, blur_h_view) =
            create_render_target(device, width, height, INTERMEDIATE_FORMAT, "bloom_h");
        let (blur_v_texture, blur_v_view) =
            create_render_target(device, width, height, INTERMEDIATE_FORMAT, "bloom_v");

        let source_bind_group = |label: &str, view: &wgpu::TextureView, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: source_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: buffer.as_entire_binding(),
                    },
                ],
            })
        };

        let brightness_bind_group =
            source_bind_group("bloom brightness bind group", scene_view, buffers.brightness);
        let blur_h_bind_group =
            source_bind_group("bloom bind group h", &bright_view, buffers.blur_h);
        let blur_h_repeat_bind_group =
            source_bind_group("bloom bind group h repeat", &blur_v_view, buffers.blur_h);
        let blur_v_bind_group =
            source_bind_group("bloom bind group v", &blur_h_view, buffers.blur_v);

        let composite_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bloom composite bind group"),
            layout: composite_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(scene_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&blur_v_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: buffers.composite.as_entire_binding(),
                },
            ],
        });

        Self {
            _bright_texture: bright_texture,
            _blur_h_texture: blur_h_texture,
            _blur_v_texture: blur_v_texture,
            bright_view,
            blur_h_view,
            blur_v_view,
            brightness_bind_group,
            blur_h_bind_group,
            blur_h_repeat_bind_group,
            blur_v_bind_group,
            composite_bind_group,
        }
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
            view_dimension: wgpu::TextureViewDimension::D2,
            multisampled: false,
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn create_stage_pipeline(
    device: &wgpu::Device,
    stage: BloomStage,
    layout: &wgpu::BindGroupLayout,
    target_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.label()),
        source: wgpu::ShaderSource::Wgsl(stage.source().into()),
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(stage.label()),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(stage.label()),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some(VERTEX_ENTRY),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(FRAGMENT_ENTRY),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn fullscreen_pass(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bind_group: &wgpu::BindGroup,
) {
    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    pass.set_pipeline(pipeline);
    pass.set_bind_group(0, bind_group, &[]);
    pass.draw(0..3, 0..1);
}
