use std::path::PathBuf;

use crate::report::{DEFAULT_TITLE, Masthead};

/// Environment variable naming a default logo image.
pub const LOGO_ENV: &str = "REPORT_PDF_LOGO";
/// Environment variable naming a default TrueType font.
pub const FONT_ENV: &str = "REPORT_PDF_FONT";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Masthead text, also written as the PDF title.
    pub title: String,
    pub logo: Option<PathBuf>,
    /// TrueType/OpenType font to embed instead of the built-in Helvetica.
    pub font: Option<PathBuf>,
    pub page_size: PageSize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            title: DEFAULT_TITLE.to_string(),
            logo: None,
            font: None,
            page_size: PageSize::A4,
        }
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

impl RenderOptions {
    /// Defaults, with logo and font taken from `REPORT_PDF_LOGO` and
    /// `REPORT_PDF_FONT` when set.
    pub fn from_env() -> Self {
        RenderOptions {
            logo: env_path(LOGO_ENV),
            font: env_path(FONT_ENV),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<PathBuf>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn masthead(&self) -> Masthead<'_> {
        Masthead {
            title: &self.title,
            logo: self.logo.as_deref(),
        }
    }
}
