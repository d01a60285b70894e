use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::FileKind;

const LANDSCAPE_BOX: (u32, u32) = (540, 360);
const PORTRAIT_BOX: (u32, u32) = (360, 540);

/// EXIF orientation (tag 0x0112) as far as display rotation is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Normal,
    /// Value 3.
    UpsideDown,
    /// Value 6, camera rotated clockwise.
    RotatedRight,
    /// Value 8, camera rotated counter-clockwise.
    RotatedLeft,
    /// Mirrored or unknown values; shown as stored.
    Other(u32),
}

impl Orientation {
    #[must_use]
    pub const fn from_exif(value: u32) -> Self {
        match value {
            1 => Self::Normal,
            3 => Self::UpsideDown,
            6 => Self::RotatedRight,
            8 => Self::RotatedLeft,
            other => Self::Other(other),
        }
    }

    /// Counter-clockwise rotation that turns the stored pixels upright.
    #[must_use]
    pub const fn rotation_degrees(self) -> u16 {
        match self {
            Self::UpsideDown => 180,
            Self::RotatedRight => 270,
            Self::RotatedLeft => 90,
            Self::Normal | Self::Other(_) => 0,
        }
    }

    #[must_use]
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::RotatedRight | Self::RotatedLeft)
    }
}

/// What the front end shows about the selected file.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewInfo {
    pub path: PathBuf,
    pub kind: FileKind,
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
    /// Stored pixel dimensions, when the file could be decoded.
    pub dimensions: Option<(u32, u32)>,
    pub orientation: Orientation,
    pub camera_model: Option<String>,
    /// Extension the counterpart is looked up by, e.g. `nef`.
    pub counterpart_extension: &'static str,
    pub counterpart_exists: bool,
}

impl PreviewInfo {
    /// Dimensions after applying the EXIF rotation.
    #[must_use]
    pub fn upright_dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions.map(|(w, h)| {
            if self.orientation.swaps_axes() {
                (h, w)
            } else {
                (w, h)
            }
        })
    }

    /// Box the preview is scaled into: 540x360 for landscape, 360x540 otherwise.
    #[must_use]
    pub fn display_box(&self) -> Option<(u32, u32)> {
        self.upright_dimensions()
            .map(|(w, h)| if w > h { LANDSCAPE_BOX } else { PORTRAIT_BOX })
    }

    /// e.g. `.NEF file exists: true`
    #[must_use]
    pub fn counterpart_label(&self) -> String {
        format!(
            ".{} file exists: {}",
            self.counterpart_extension.to_uppercase(),
            self.counterpart_exists
        )
    }
}
