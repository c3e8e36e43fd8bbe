use std::fmt;
use std::path::{Path, PathBuf};

/// Directory of resources shipped beside the executable.
const BUNDLED_DIR_NAME: &str = "resources";

/// Where a resolved image was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    WorkingDir,
    IconsDir,
    SrcIconsDir,
    Bundled,
}

impl fmt::Display for ImageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageOrigin::WorkingDir => "working directory",
            ImageOrigin::IconsDir => "icons/",
            ImageOrigin::SrcIconsDir => "src/icons/",
            ImageOrigin::Bundled => "bundled resources",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub path: PathBuf,
    pub origin: ImageOrigin,
}

/// Looks up image files by bare name in a fixed, ordered list of locations.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_dir: PathBuf,
    bundle_dir: Option<PathBuf>,
}

impl ImageResolver {
    /// Resolver rooted at `base_dir` with no bundled resources.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            bundle_dir: None,
        }
    }

    pub fn with_bundle_dir(mut self, bundle_dir: Option<PathBuf>) -> Self {
        self.bundle_dir = bundle_dir;
        self
    }

    /// Resolver for the running process: the current working directory plus
    /// the `resources/` directory next to the executable.
    pub fn for_current_process() -> Self {
        // An empty base keeps candidates relative to the working directory.
        Self::new(PathBuf::new()).with_bundle_dir(bundled_resource_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn bundle_dir(&self) -> Option<&Path> {
        self.bundle_dir.as_deref()
    }

    /// Every path that would be tried for `file_name`, in search order.
    pub fn candidates(&self, file_name: &str) -> Vec<(PathBuf, ImageOrigin)> {
        let mut candidates = vec![
            (self.base_dir.join(file_name), ImageOrigin::WorkingDir),
            (
                self.base_dir.join("icons").join(file_name),
                ImageOrigin::IconsDir,
            ),
            (
                self.base_dir.join("src").join("icons").join(file_name),
                ImageOrigin::SrcIconsDir,
            ),
        ];
        if let Some(bundle) = &self.bundle_dir {
            candidates.push((bundle.join(file_name), ImageOrigin::Bundled));
        }
        candidates
    }

    /// First existing regular file for `file_name`, or `None`.
    pub fn resolve(&self, file_name: &str) -> Option<ResolvedImage> {
        let found = self
            .candidates(file_name)
            .into_iter()
            .find(|(path, _)| path.is_file())
            .map(|(path, origin)| ResolvedImage { path, origin });

        match &found {
            Some(image) => tracing::debug!(
                file = file_name,
                path = %image.path.display(),
                origin = %image.origin,
                "resolved image"
            ),
            None => tracing::debug!(file = file_name, "image not found in any location"),
        }

        found
    }
}

/// `resources/` beside the current executable, if the executable path is known.
pub fn bundled_resource_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(BUNDLED_DIR_NAME))
}
