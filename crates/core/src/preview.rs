use chrono::{DateTime, Local};
use rawcull_models::{FileEntry, FileKind, Orientation, PreviewInfo};
use rawcull_utils::media_types::counterpart_extension;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, trace};

use crate::{CoreError, Deleter};

/// Collects what the front end shows for the selected file.
#[derive(Debug, Clone, Copy)]
pub struct PreviewLoader {
    read_metadata: bool,
}

impl Default for PreviewLoader {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PreviewLoader {
    /// With `read_metadata` off, dimensions and EXIF are not read.
    #[must_use]
    pub const fn new(read_metadata: bool) -> Self {
        Self { read_metadata }
    }

    /// # Errors
    ///
    /// Returns [`CoreError::Io`] if the file itself cannot be stat'ed.
    /// Unreadable image data or EXIF only leaves the matching fields empty.
    pub fn load(&self, entry: &FileEntry, folder: &Path) -> Result<PreviewInfo, CoreError> {
        let path = entry.path_in(folder);
        let metadata = fs::metadata(&path).map_err(|source| CoreError::Io {
            path: path.clone(),
            source,
        })?;

        let counterpart_exists = Deleter::counterpart_path(entry, folder).is_file();
        let mut info = PreviewInfo {
            size: metadata.len(),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
            kind: entry.kind,
            dimensions: None,
            orientation: Orientation::Normal,
            camera_model: None,
            counterpart_extension: counterpart_extension(entry.extension()),
            counterpart_exists,
            path,
        };

        if self.read_metadata {
            read_image_metadata(&mut info);
        }

        Ok(info)
    }
}

fn read_image_metadata(info: &mut PreviewInfo) {
    if info.kind == FileKind::Preview {
        match image::image_dimensions(&info.path) {
            Ok(dimensions) => info.dimensions = Some(dimensions),
            Err(e) => debug!("Could not get dimensions for {:?}: {}", info.path, e),
        }
    }

    let Some(exif) = read_exif(&info.path) else {
        return;
    };
    trace!("EXIF data found for {:?}", info.path);

    if let Some(value) = exif
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
    {
        info.orientation = Orientation::from_exif(value);
    }

    if let Some(field) = exif.get_field(exif::Tag::Model, exif::In::PRIMARY) {
        if let exif::Value::Ascii(ref parts) = field.value {
            info.camera_model = parts
                .first()
                .map(|bytes| String::from_utf8_lossy(bytes).trim_end_matches('\0').trim().to_string())
                .filter(|model| !model.is_empty());
        }
    }

    // Raw files are not decoded; their full size lives in the EXIF sub-IFD.
    if info.dimensions.is_none() {
        let width = exif
            .get_field(exif::Tag::PixelXDimension, exif::In::PRIMARY)
            .and_then(|f| f.value.get_uint(0));
        let height = exif
            .get_field(exif::Tag::PixelYDimension, exif::In::PRIMARY)
            .and_then(|f| f.value.get_uint(0));
        if let (Some(width), Some(height)) = (width, height) {
            info.dimensions = Some((width, height));
        }
    }
}

fn read_exif(path: &Path) -> Option<exif::Exif> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Some(exif),
        Err(e) => {
            trace!("No EXIF in {:?}: {}", path, e);
            None
        }
    }
}
