//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`KeyValueStore`]，替代 `gloo-storage`。

use truthlens::error::StorageError;
use truthlens::storage::KeyValueStore;

/// 浏览器 LocalStorage
///
/// 每次操作重新获取 `Storage` 实例；隐私模式等禁用存储的环境下返回
/// [`StorageError::Unavailable`]。
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // 配额超限时 setItem 会抛出 QuotaExceededError
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}
