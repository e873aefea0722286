//! PlatformIO project helpers
//!
//! Checks and generated files that sit around the rule engine: build
//! settings, the secrets header, and the pre/post-build artifacts.

pub mod checks;
pub mod generate;

use std::path::{Path, PathBuf};

/// Well-known paths inside a PlatformIO project.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `platformio.ini`
    #[must_use]
    pub fn platformio_ini(&self) -> PathBuf {
        self.root.join("platformio.ini")
    }

    /// `src/main.cpp`
    #[must_use]
    pub fn main_source(&self) -> PathBuf {
        self.root.join("src").join("main.cpp")
    }

    /// `include/config.h`
    #[must_use]
    pub fn config_header(&self) -> PathBuf {
        crate::config::loader::default_header_path(&self.root)
    }

    /// `include/secrets.h`
    #[must_use]
    pub fn secrets_header(&self) -> PathBuf {
        self.root.join("include").join("secrets.h")
    }

    /// `include/secrets.h.template`
    #[must_use]
    pub fn secrets_template(&self) -> PathBuf {
        self.root.join("include").join("secrets.h.template")
    }

    /// `include/build_info.h`
    #[must_use]
    pub fn build_info_header(&self) -> PathBuf {
        self.root.join("include").join("build_info.h")
    }

    /// `.pio/reports/build_report.txt`
    #[must_use]
    pub fn build_report(&self) -> PathBuf {
        self.root.join(".pio").join("reports").join("build_report.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new("/proj");
        assert_eq!(layout.platformio_ini(), Path::new("/proj/platformio.ini"));
        assert_eq!(layout.main_source(), Path::new("/proj/src/main.cpp"));
        assert_eq!(layout.config_header(), Path::new("/proj/include/config.h"));
        assert_eq!(layout.secrets_header(), Path::new("/proj/include/secrets.h"));
        assert_eq!(
            layout.build_report(),
            Path::new("/proj/.pio/reports/build_report.txt")
        );
    }
}
