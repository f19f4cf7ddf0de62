//! 缓存配置
//!
//! 容量是唯一的配置项：缓存按条目数计数，不涉及字节大小或 TTL。

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// 默认容量（条目数）
pub const DEFAULT_CAPACITY: usize = 10_000;

/// 缓存配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 最大条目数，必须为正数
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// 创建指定容量的配置
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
