use serde::Deserialize;

/// One entry of the gallery JSON. Unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhotoDescriptor {
    pub path: String,
}

/// A photo ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRecord {
    pub src: String,
    pub tag: String,
    pub filename: String,
}

impl PhotoRecord {
    pub fn from_descriptor(descriptor: PhotoDescriptor) -> Self {
        let filename = descriptor
            .path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        let tag = tag_from_filename(&filename);

        Self {
            src: descriptor.path,
            tag,
            filename,
        }
    }
}

impl From<PhotoDescriptor> for PhotoRecord {
    fn from(descriptor: PhotoDescriptor) -> Self {
        Self::from_descriptor(descriptor)
    }
}

/// Drops the last extension and turns `-`/`_` into spaces.
///
/// An extension is a final `.` followed by at least one character, so
/// `"file."` keeps its dot while `".hidden"` becomes empty.
pub fn tag_from_filename(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(dot) if dot + 1 < filename.len() => &filename[..dot],
        _ => filename,
    };

    stem.replace(['-', '_'], " ")
}
