//! Render target validation.

use crate::schema::HaloConfig;

use super::helpers::validate_range;

pub(crate) fn validate_render(errors: &mut Vec<String>, config: &HaloConfig) {
    validate_range(errors, "render.width", config.render.width, 1, 8192);
    validate_range(errors, "render.height", config.render.height, 1, 8192);
}
