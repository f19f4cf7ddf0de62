//! 缓存错误类型
//!
//! 错误分类刻意保持窄小：只有构造期的容量校验会失败。
//! 查找未命中与删除不存在的键都是正常返回值，不是错误。

use thiserror::Error;

/// 缓存错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// 容量配置无效
    #[error("invalid cache capacity: {0} (capacity must be a positive integer)")]
    InvalidCapacity(usize),
}
