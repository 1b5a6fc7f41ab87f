use crate::error::AppError;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

pub const IMAGE_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];
pub const DOCUMENT_MIME_TYPES: [&str; 5] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "text/csv",
];

/// Upload metadata as reported by the client. Contents are never inspected
/// at this layer.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub size: u64,
}

pub fn validate_image(file: &FileUpload) -> Result<(), AppError> {
    if file.filename.trim().is_empty() {
        return Err(AppError::validation("Filename is required"));
    }

    if !IMAGE_MIME_TYPES.contains(&file.content_type.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported image type: {}",
            file.content_type
        )));
    }

    if file.size > MAX_IMAGE_BYTES {
        return Err(AppError::validation("Image exceeds the 5MB size limit"));
    }

    Ok(())
}

pub fn validate_document(file: &FileUpload) -> Result<(), AppError> {
    if file.filename.trim().is_empty() {
        return Err(AppError::validation("Filename is required"));
    }

    if !DOCUMENT_MIME_TYPES.contains(&file.content_type.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported document type: {}",
            file.content_type
        )));
    }

    if file.size > MAX_DOCUMENT_BYTES {
        return Err(AppError::validation("Document exceeds the 10MB size limit"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(filename: &str, content_type: &str, size: u64) -> FileUpload {
        FileUpload {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            size,
        }
    }

    #[test]
    fn test_image_validation() {
        assert!(validate_image(&upload("avatar.png", "image/png", 1024)).is_ok());
        assert!(validate_image(&upload("avatar.png", "image/png", MAX_IMAGE_BYTES)).is_ok());
        assert!(validate_image(&upload("avatar.png", "image/png", MAX_IMAGE_BYTES + 1)).is_err());
        assert!(validate_image(&upload("report.pdf", "application/pdf", 1024)).is_err());
        assert!(validate_image(&upload("", "image/png", 1024)).is_err());
    }

    #[test]
    fn test_document_validation() {
        assert!(validate_document(&upload("notes.pdf", "application/pdf", 1024)).is_ok());
        assert!(validate_document(&upload("notes.csv", "text/csv", 1024)).is_ok());
        assert!(
            validate_document(&upload("notes.pdf", "application/pdf", MAX_DOCUMENT_BYTES + 1))
                .is_err()
        );
        assert!(validate_document(&upload("archive.zip", "application/zip", 1024)).is_err());
    }
}
