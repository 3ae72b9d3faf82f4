//! WGSL sources for the bloom stages.
//!
//! Each stage is compiled as its own module: the shared vertex stage and
//! luminance helper from `common.wgsl`, followed by the stage's fragment
//! program.

const COMMON: &str = include_str!("shaders/common.wgsl");
const BRIGHTNESS: &str = include_str!("shaders/brightness.wgsl");
const BLUR: &str = include_str!("shaders/blur.wgsl");
const COMPOSITE: &str = include_str!("shaders/composite.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BloomStage {
    Brightness,
    Blur,
    Composite,
}

impl BloomStage {
    pub const ALL: [BloomStage; 3] = [Self::Brightness, Self::Blur, Self::Composite];

    pub fn label(self) -> &'static str {
        match self {
            Self::Brightness => "bloom brightness",
            Self::Blur => "bloom blur",
            Self::Composite => "bloom composite",
        }
    }

    /// Complete WGSL module for this stage.
    pub fn source(self) -> String {
        let fragment = match self {
            Self::Brightness => BRIGHTNESS,
            Self::Blur => BLUR,
            Self::Composite => COMPOSITE,
        };
        format!("{COMMON}\n{fragment}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom::{BlurUniforms, BrightnessUniforms, CompositeUniforms};

    fn parse(stage: BloomStage) -> naga::Module {
        naga::front::wgsl::parse_str(&stage.source())
            .unwrap_or_else(|e| panic!("{} failed to parse: {e}", stage.label()))
    }

    /// (group, binding) -> kind, sorted by binding.
    fn bindings(module: &naga::Module) -> Vec<(u32, u32, &'static str)> {
        let mut out: Vec<_> = module
            .global_variables
            .iter()
            .filter_map(|(_, var)| {
                let binding = var.binding.as_ref()?;
                let kind = match module.types[var.ty].inner {
                    naga::TypeInner::Image { .. } => "texture",
                    naga::TypeInner::Sampler { .. } => "sampler",
                    naga::TypeInner::Struct { .. } => "uniform",
                    _ => "other",
                };
                Some((binding.group, binding.binding, kind))
            })
            .collect();
        out.sort();
        out
    }

    fn uniform_span(module: &naga::Module) -> u32 {
        module
            .global_variables
            .iter()
            .find_map(|(_, var)| match (var.space, &module.types[var.ty].inner) {
                (naga::AddressSpace::Uniform, naga::TypeInner::Struct { span, .. }) => Some(*span),
                _ => None,
            })
            .expect("stage has a uniform block")
    }

    #[test]
    fn every_stage_validates() {
        for stage in BloomStage::ALL {
            let module = parse(stage);
            naga::valid::Validator::new(
                naga::valid::ValidationFlags::all(),
                naga::valid::Capabilities::all(),
            )
            .validate(&module)
            .unwrap_or_else(|e| panic!("{} failed validation: {e:?}", stage.label()));
        }
    }

    #[test]
    fn every_stage_has_both_entry_points() {
        for stage in BloomStage::ALL {
            let module = parse(stage);
            let has = |name: &str, kind: naga::ShaderStage| {
                module
                    .entry_points
                    .iter()
                    .any(|ep| ep.name == name && ep.stage == kind)
            };
            assert!(has(VERTEX_ENTRY, naga::ShaderStage::Vertex), "{}", stage.label());
            assert!(has(FRAGMENT_ENTRY, naga::ShaderStage::Fragment), "{}", stage.label());
        }
    }

    #[test]
    fn brightness_and_blur_bindings() {
        let expected = vec![(0, 0, "texture"), (0, 1, "sampler"), (0, 2, "uniform")];
        assert_eq!(bindings(&parse(BloomStage::Brightness)), expected);
        assert_eq!(bindings(&parse(BloomStage::Blur)), expected);
    }

    #[test]
    fn composite_bindings() {
        assert_eq!(
            bindings(&parse(BloomStage::Composite)),
            vec![
                (0, 0, "texture"),
                (0, 1, "texture"),
                (0, 2, "sampler"),
                (0, 3, "uniform"),
            ]
        );
    }

    #[test]
    fn uniform_blocks_match_host_structs() {
        assert_eq!(
            uniform_span(&parse(BloomStage::Brightness)) as usize,
            std::mem::size_of::<BrightnessUniforms>()
        );
        assert_eq!(
            uniform_span(&parse(BloomStage::Blur)) as usize,
            std::mem::size_of::<BlurUniforms>()
        );
        assert_eq!(
            uniform_span(&parse(BloomStage::Composite)) as usize,
            std::mem::size_of::<CompositeUniforms>()
        );
    }
}
