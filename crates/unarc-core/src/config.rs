//! Extraction configuration.

use std::path::PathBuf;

/// Filesystem capabilities of the host the archive is extracted on.
///
/// This is the single place where OS-family differences enter the
/// extraction pipeline. Decoders never branch on the target OS themselves;
/// they ask the `Platform` carried by [`ExtractionConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Whether files carry a Unix owner-executable permission bit.
    pub executable_bit: bool,
}

impl Platform {
    /// Capabilities of the platform this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        Self {
            executable_bit: cfg!(unix),
        }
    }

    /// A platform without permission bits. Executable bits in TAR modes are
    /// ignored.
    #[must_use]
    pub const fn without_permissions() -> Self {
        Self {
            executable_bit: false,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

/// Configuration for one extraction call.
///
/// # Examples
///
/// ```
/// use unarc_core::ExtractionConfig;
/// use unarc_core::Platform;
///
/// let config = ExtractionConfig::default()
///     .with_platform(Platform::without_permissions())
///     .with_staging_dir("/var/tmp");
/// assert!(!config.platform.executable_bit);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractionConfig {
    /// Host filesystem capabilities.
    pub platform: Platform,

    /// Directory for the ZIP staging file. `None` uses the system temporary
    /// directory.
    pub staging_dir: Option<PathBuf>,
}

impl ExtractionConfig {
    /// Sets the platform capabilities.
    #[must_use]
    pub const fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the directory used for the ZIP staging file.
    #[must_use]
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    /// Directory the ZIP staging file is created in.
    #[must_use]
    pub fn staging_location(&self) -> PathBuf {
        self.staging_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}
