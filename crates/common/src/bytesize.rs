use serde::{Deserialize, Serialize};

pub const KB: f64 = 1024.0;
pub const MB: f64 = KB * 1024.0;
pub const GB: f64 = MB * 1024.0;
pub const TB: f64 = GB * 1024.0;

/// 文件大小，按 B/KB/MB/GB 分级格式化
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ByteSize(pub f64);

impl ByteSize {
    pub fn format(&self) -> String {
        let b = self.0;
        if b >= GB {
            format!("{:.2} GB", b / GB)
        } else if b >= MB {
            format!("{:.2} MB", b / MB)
        } else if b >= KB {
            format!("{:.2} KB", b / KB)
        } else {
            format!("{} B", b as u64)
        }
    }
}

impl From<u64> for ByteSize {
    fn from(v: u64) -> Self {
        ByteSize(v as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(ByteSize(0.0).format(), "0 B");
        assert_eq!(ByteSize(512.0).format(), "512 B");
        assert_eq!(ByteSize(2048.0).format(), "2.00 KB");
        assert_eq!(ByteSize::from(3 * 1024 * 1024_u64).format(), "3.00 MB");
        assert_eq!(ByteSize(1.5 * GB).format(), "1.50 GB");
    }

    #[test]
    fn test_size_ordering() {
        assert!(ByteSize(100.0) < ByteSize(200.0));
        assert!(ByteSize::from(5_u64) > ByteSize::from(3_u64));
    }
}
