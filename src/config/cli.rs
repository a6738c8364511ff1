use crate::core::Storage;
use crate::utils::error::{ConvertError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| ConvertError::InputIo {
            path: path.to_string(),
            source: e,
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let target = Path::new(path);

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ConvertError::OutputIo {
                    path: path.to_string(),
                    source: e,
                })?;
            }
        }

        // 先寫暫存檔，成功才改名，失敗不會留下半截輸出
        let tmp_path = format!("{}.tmp", path);
        fs::write(&tmp_path, data).map_err(|e| ConvertError::OutputIo {
            path: path.to_string(),
            source: e,
        })?;
        fs::rename(&tmp_path, target).map_err(|e| ConvertError::OutputIo {
            path: path.to_string(),
            source: e,
        })?;

        Ok(())
    }
}
