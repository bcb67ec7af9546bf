//! File resource abstraction for settings that reference on-disk artifacts.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncRead;

use crate::error::CrResult;
use crate::types::Timestamp;

#[async_trait]
pub trait FileResource: Send + Sync {
	async fn open_stream(&self) -> CrResult<Box<dyn AsyncRead + Send + Unpin>>;
	async fn length(&self) -> CrResult<u64>;
	async fn last_modified(&self) -> CrResult<Timestamp>;
	fn display_name(&self) -> &str;
}

/// A [`FileResource`] backed by a real filesystem path.
#[derive(Debug)]
pub struct FsFileResource {
	path: PathBuf,
	display_name: Box<str>,
}

impl FsFileResource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let display_name = path.to_string_lossy().into_owned().into();
		FsFileResource { path, display_name }
	}
}

#[async_trait]
impl FileResource for FsFileResource {
	async fn open_stream(&self) -> CrResult<Box<dyn AsyncRead + Send + Unpin>> {
		let file = tokio::fs::File::open(&self.path).await?;
		Ok(Box::new(file))
	}

	async fn length(&self) -> CrResult<u64> {
		let meta = tokio::fs::metadata(&self.path).await?;
		Ok(meta.len())
	}

	async fn last_modified(&self) -> CrResult<Timestamp> {
		let meta = tokio::fs::metadata(&self.path).await?;
		let modified = meta.modified()?;
		let secs = modified
			.duration_since(std::time::SystemTime::UNIX_EPOCH)
			.map(|d| d.as_secs() as i64)
			.unwrap_or_default();
		Ok(Timestamp(secs))
	}

	fn display_name(&self) -> &str {
		&self.display_name
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tokio::io::AsyncReadExt;

	#[tokio::test]
	async fn test_fs_file_resource_reads_file() {
		let dir = std::env::temp_dir().join("credano-file-resource-test");
		tokio::fs::create_dir_all(&dir).await.unwrap();
		let path = dir.join("resource.txt");
		tokio::fs::write(&path, b"content here").await.unwrap();

		let resource = FsFileResource::new(&path);
		assert_eq!(resource.length().await.unwrap(), 12);
		assert!(resource.last_modified().await.unwrap().0 > 0);
		assert!(resource.display_name().ends_with("resource.txt"));

		let mut stream = resource.open_stream().await.unwrap();
		let mut buf = String::new();
		stream.read_to_string(&mut buf).await.unwrap();
		assert_eq!(buf, "content here");

		tokio::fs::remove_file(&path).await.unwrap();
	}

	#[tokio::test]
	async fn test_fs_file_resource_missing_file() {
		let resource = FsFileResource::new("/nonexistent/credano/resource.bin");
		assert!(resource.length().await.is_err());
		assert!(resource.open_stream().await.is_err());
	}
}

// vim: ts=4
