/// Loading indicator
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LoaderSize {
    /// Spinner edge length in pixels
    pub fn pixels(self) -> u32 {
        match self {
            LoaderSize::Small => 40,
            LoaderSize::Medium => 60,
            LoaderSize::Large => 80,
        }
    }

    fn spinner(self) -> &'static str {
        match self {
            LoaderSize::Small => "◌",
            LoaderSize::Medium => "◌ ◌",
            LoaderSize::Large => "◌ ◌ ◌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loader {
    message: String,
    size: LoaderSize,
}

impl Loader {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            size: LoaderSize::default(),
        }
    }

    pub fn with_size(mut self, size: LoaderSize) -> Self {
        self.size = size;
        self
    }

    pub fn size(&self) -> LoaderSize {
        self.size
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new("Loading...")
    }
}

impl fmt::Display for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.size.spinner())?;
        if !self.message.is_empty() {
            write!(f, "  {}", self.message)?;
        }
        Ok(())
    }
}
