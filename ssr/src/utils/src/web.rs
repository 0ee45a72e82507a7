/// Name and MIME type of a file picked by the user
pub trait FileMeta {
    fn file_name(&self) -> &str;
    fn mime_type(&self) -> &str;
}

/// A video picked through a file input.
///
/// Outside the browser only the metadata exists, there is nothing to upload.
#[derive(Clone, Debug)]
pub struct VideoFile {
    name: String,
    mime: String,
    #[cfg(feature = "hydrate")]
    file: web_sys::File,
}

impl VideoFile {
    #[cfg(feature = "hydrate")]
    pub fn new(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            file,
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn file(&self) -> &web_sys::File {
        &self.file
    }
}

impl FileMeta for VideoFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime
    }
}
