//! 缓存统计
//!
//! 命中、未命中、驱逐均为生命周期累计值，只在缓存创建时归零。

use serde::{Deserialize, Serialize};

/// 缓存统计快照
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CacheStats {
    /// 当前条目数
    pub size: usize,
    /// 容量上限
    pub capacity: usize,
    /// 命中次数
    pub hits: u64,
    /// 未命中次数
    pub misses: u64,
    /// 驱逐次数
    pub evictions: u64,
}

impl CacheStats {
    /// 命中率（百分比），分母为零时返回 `None`
    ///
    /// 分母为 hits + misses + evictions。注意驱逐并不是一次查找，
    /// 驱逐频繁时该口径会压低命中率。
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.hits + self.misses + self.evictions;
        if total == 0 {
            None
        } else {
            Some(self.hits as f64 / total as f64 * 100.0)
        }
    }
}
