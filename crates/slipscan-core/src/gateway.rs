//! Boundary to the external text-recognition engine.

use std::path::Path;

use crate::error::ExtractionFailedError;

/// The single external capability this pipeline consumes: turn an image
/// resource into plain text.
///
/// Blocking and single-shot; retries, timeouts, and cancellation belong
/// to the calling layer.
pub trait TextExtractionGateway {
    /// Extract raw text from the image at `image`.
    fn extract_text(&self, image: &Path) -> Result<String, ExtractionFailedError>;
}

/// Closures work as gateways, which keeps tests and embedders free of
/// any engine runtime.
impl<F> TextExtractionGateway for F
where
    F: Fn(&Path) -> Result<String, ExtractionFailedError>,
{
    fn extract_text(&self, image: &Path) -> Result<String, ExtractionFailedError> {
        self(image)
    }
}

#[cfg(feature = "native")]
pub use native::TesseractGateway;

#[cfg(feature = "native")]
mod native {
    use std::path::Path;
    use std::process::Command;

    use tracing::debug;

    use crate::error::ExtractionFailedError;
    use crate::models::config::GatewayConfig;

    use super::TextExtractionGateway;

    /// Gateway adapter shelling out to a tesseract binary.
    pub struct TesseractGateway {
        config: GatewayConfig,
    }

    impl TesseractGateway {
        /// Create a gateway with the default configuration
        /// (`tesseract`, `eng+hun`).
        pub fn new() -> Self {
            Self {
                config: GatewayConfig::default(),
            }
        }

        /// Create a gateway from an explicit configuration.
        pub fn with_config(config: GatewayConfig) -> Self {
            Self { config }
        }
    }

    impl Default for TesseractGateway {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TextExtractionGateway for TesseractGateway {
        fn extract_text(&self, image: &Path) -> Result<String, ExtractionFailedError> {
            if !image.is_file() {
                return Err(ExtractionFailedError::ImageUnreadable(image.to_path_buf()));
            }

            debug!(
                "running {} on {}",
                self.config.binary.display(),
                image.display()
            );

            let output = Command::new(&self.config.binary)
                .arg(image)
                .arg("stdout")
                .arg("-l")
                .arg(&self.config.languages)
                .args(&self.config.extra_args)
                .output()?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(ExtractionFailedError::Engine(stderr.trim().to_string()));
            }

            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        }
    }

}
