/// Errors that can occur on the host side of the bloom effect.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("readback error: {0}")]
    ReadbackError(String),

    #[error("invalid image: {0}")]
    InvalidImage(String),
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<wgpu::BufferAsyncError> for RendererError {
    fn from(e: wgpu::BufferAsyncError) -> Self {
        RendererError::ReadbackError(e.to_string())
    }
}

impl From<RendererError> for halo_common::HaloError {
    fn from(e: RendererError) -> Self {
        halo_common::HaloError::Renderer(e.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_readback_display() {
        let err = RendererError::ReadbackError("map failed".to_string());
        assert_eq!(err.to_string(), "readback error: map failed");
    }

    #[test]
    fn renderer_error_converts_to_halo_error() {
        let err: halo_common::HaloError = RendererError::AdapterNotFound.into();
        assert_eq!(err.to_string(), "renderer error: no suitable GPU adapter found");
    }
}
