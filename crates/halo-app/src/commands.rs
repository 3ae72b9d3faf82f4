//! Subcommand handlers.

use std::path::{Path, PathBuf};

use halo_common::HaloError;
use halo_config::schema::HaloConfig;
use halo_renderer::bloom::output_texture_format;
use halo_renderer::gpu::GpuContext;
use halo_renderer::kernel::{run_bloom, HdrImage};
use halo_renderer::{render_bloom, BloomSettings, RendererError};

use crate::cli::RenderArgs;
use crate::output::write_png;
use crate::pattern::synthetic_scene;

/// Render the test pattern with bloom and write it out.
pub fn render(config: &HaloConfig, args: &RenderArgs) -> Result<(), HaloError> {
    let mut config = config.clone();
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    halo_config::validation::validate(&config)?;

    let (width, height) = (config.render.width, config.render.height);
    let scene = synthetic_scene(width, height);
    let settings = BloomSettings::from_config(&config);

    let image = if args.cpu {
        tracing::info!("rendering {width}x{height} on the CPU reference");
        run_bloom(&scene, &settings)?
    } else {
        render_gpu(&config, &scene, settings)?
    };

    write_png(&image, &args.out)
}

fn render_gpu(
    config: &HaloConfig,
    scene: &HdrImage,
    settings: BloomSettings,
) -> Result<HdrImage, HaloError> {
    let ctx = match pollster::block_on(GpuContext::new_headless()) {
        Ok(ctx) => ctx,
        Err(RendererError::AdapterNotFound) => {
            tracing::warn!("no GPU adapter available, falling back to the CPU reference");
            return Ok(run_bloom(scene, &settings)?);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "rendering {}x{} on {}",
        scene.width(),
        scene.height(),
        ctx.adapter_info.name
    );
    let format = output_texture_format(config.render.output_format);
    Ok(render_bloom(&ctx, scene, settings, format)?)
}

/// Print the effective config as JSON, optionally saving it as TOML.
pub fn show_config(config: &HaloConfig, save: Option<&Path>) -> Result<(), HaloError> {
    println!("{}", halo_config::config_to_json(config));
    if let Some(path) = save {
        halo_config::save_config_to_path(config, path)?;
        tracing::info!("saved config to {}", path.display());
    }
    Ok(())
}

/// Write the commented default config, refusing to clobber an existing
/// file unless `force` is set. Returns the path written.
pub fn init_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf, HaloError> {
    let path = match path {
        Some(path) => path,
        None => halo_config::default_config_path()?,
    };
    if path.exists() && !force {
        return Err(HaloError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    halo_config::create_default_config(&path)?;
    Ok(path)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("bloom.png");
        let args = RenderArgs {
            out: out.clone(),
            width: Some(64),
            height: Some(36),
            cpu: true,
        };
        render(&HaloConfig::default(), &args).unwrap();
        let png = image::open(&out).unwrap();
        assert_eq!((png.width(), png.height()), (64, 36));
    }

    #[test]
    fn render_rejects_out_of_range_size() {
        let dir = tempfile::tempdir().unwrap();
        let args = RenderArgs {
            out: dir.path().join("x.png"),
            width: Some(0),
            height: None,
            cpu: true,
        };
        let err = render(&HaloConfig::default(), &args).unwrap_err();
        assert!(err.to_string().contains("render.width"), "{err}");
    }

    #[test]
    fn show_config_saves_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let mut config = HaloConfig::default();
        config.bloom.blur.passes = 3;
        show_config(&config, Some(&path)).unwrap();
        let loaded = halo_config::load_from_path(&path).unwrap();
        assert_eq!(loaded.bloom.blur.passes, 3);
    }

    #[test]
    fn init_config_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(init_config(Some(path.clone()), false).unwrap(), path);
        assert!(init_config(Some(path.clone()), false).is_err());
        assert!(init_config(Some(path.clone()), true).is_ok());
        // the template parses to defaults
        let loaded = halo_config::load_from_path(&path).unwrap();
        assert!(loaded.bloom.enabled);
    }
}
