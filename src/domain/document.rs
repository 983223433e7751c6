#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

/// A file received through the upload endpoint, before any extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub filename: String,
    pub extension: String,
    pub data: Vec<u8>,
}

impl UploadedDocument {
    /// Directory components in `filename` are discarded.
    pub fn new(filename: impl AsRef<str>, data: Vec<u8>) -> Self {
        let filename = filename
            .as_ref()
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        Self {
            filename,
            extension,
            data,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    /// `None` when the extension is neither `pdf` nor `txt`.
    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_extension(&self.extension)
    }
}
