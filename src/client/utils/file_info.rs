use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptedFileType {
    PlainText,
    Pdf,
}

impl AcceptedFileType {
    pub const EXTENSIONS: [&'static str; 2] = ["txt", "pdf"];

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Pdf => "application/pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Pdf => "pdf",
        }
    }
}

/// MIME type sent with the multipart `file` field.
pub fn mime_for_filename(filename: &str) -> &'static str {
    AcceptedFileType::from_path(Path::new(filename))
        .map(|t| t.mime())
        .unwrap_or("application/octet-stream")
}

/// Human readable size: "0 Bytes", "512 Bytes", "1.5 KB", "10 MB".
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

/// Native picker restricted to the accepted types. `None` when the user
/// cancels or the file cannot be read.
pub async fn pick_email_file() -> Option<(PathBuf, Vec<u8>)> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Selecione o email")
        .add_filter("Email (.txt, .pdf)", &AcceptedFileType::EXTENSIONS)
        .pick_file()
        .await?;
    let path = handle.path().to_path_buf();
    let content = handle.read().await;
    Some((path, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_use_two_decimals_without_trailing_zeros() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(10 * 1024 * 1024), "10 MB");
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(mime_for_filename("a.txt"), "text/plain");
        assert_eq!(mime_for_filename("A.PDF"), "application/pdf");
        assert_eq!(mime_for_filename("noext"), "application/octet-stream");
        assert_eq!(mime_for_filename("x.docx"), "application/octet-stream");
    }
}
