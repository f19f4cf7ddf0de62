//! LRU 缓存控制器
//!
//! 哈希索引与最近使用链表的组合，对外提供 get/put/delete 接口。
//!
//! 操作流程：
//! - get: 索引定位 → 命中则提升到链表头部并返回值
//! - put: 已存在的键原地更新并提升；新键在容量已满时先驱逐尾部再插入
//! - delete: 索引定位 → 同时从链表与索引中移除
//!
//! 全部操作 O(1)。每次变更后索引与链表保持一致：
//! 键在索引中存在当且仅当对应条目仍链接在链表中。

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::config::CacheConfig;
use crate::entry::SlotIndex;
use crate::error::CacheError;
use crate::recency_list::RecencyList;
use crate::stats::CacheStats;

/// 固定容量的 LRU 缓存
///
/// 单线程语义：内部不加锁，操作从调用方视角原子完成。
/// 跨线程共享需由调用方对整个缓存实例加互斥锁。
/// 调用方只拿到值的引用，拿不到条目本身，链表指针不会被外部破坏。
pub struct LruCache<V> {
    capacity: usize,
    index: HashMap<String, SlotIndex>,
    list: RecencyList<V>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl<V> LruCache<V> {
    /// 创建指定容量的缓存
    ///
    /// 容量必须为正数，否则返回 [`CacheError::InvalidCapacity`]，
    /// 不产生部分构造的对象。
    pub fn new(capacity: usize) -> Result<Self, CacheError> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self {
            capacity,
            index: HashMap::new(),
            list: RecencyList::new(),
            hits: 0,
            misses: 0,
            evictions: 0,
        })
    }

    /// 按配置创建缓存
    pub fn with_config(config: &CacheConfig) -> Result<Self, CacheError> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// 读取键对应的值
    ///
    /// 命中会把条目提升为最近使用并计入 hit；
    /// 未命中计入 miss，除计数外无任何副作用。
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let Some(&idx) = self.index.get(key) else {
            self.misses += 1;
            return None;
        };
        self.list.move_to_head(idx);
        self.hits += 1;
        self.debug_check();
        Some(self.list.value(idx))
    }

    /// 写入键值
    ///
    /// 已存在的键原地覆盖值并提升到头部（更新本身视为一次使用），
    /// 该分支不消耗新槽位，跳过容量判断。
    /// 新键在 `len() >= capacity` 时先驱逐最久未用的条目再插入，
    /// 条目数不会被瞬时超过容量。
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(&idx) = self.index.get(&key) {
            self.list.set_value(idx, value);
            self.list.move_to_head(idx);
            trace!("updated key {:?}", key);
            self.debug_check();
            return;
        }

        if self.list.len() >= self.capacity {
            let Some((evicted_key, _)) = self.list.remove_tail() else {
                // 容量至少为1，走到这里说明链表与计数已经脱节
                panic!(
                    "recency list empty while cache reports {} of {} entries",
                    self.index.len(),
                    self.capacity
                );
            };
            self.index.remove(&evicted_key);
            self.evictions += 1;
            debug!("evicted key {:?}", evicted_key);
        }

        let idx = self.list.add_to_head(key.clone(), value);
        self.index.insert(key, idx);
        self.debug_check();
    }

    /// 删除键，返回是否确有删除
    ///
    /// 键不存在时返回 `false`，状态与计数都不变。
    /// 删除既不是查找也不是容量驱逐，不影响 hit/miss/eviction 计数。
    pub fn delete(&mut self, key: &str) -> bool {
        let Some(idx) = self.index.remove(key) else {
            return false;
        };
        let (removed_key, _) = self.list.remove(idx);
        debug_assert_eq!(removed_key.as_str(), key);
        trace!("deleted key {:?}", key);
        self.debug_check();
        true
    }

    /// 键是否存在（不改变使用顺序，不计入统计）
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// 缓存是否为空
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// 容量上限
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 按最近使用顺序（最近 → 最久）遍历键值
    ///
    /// 只读遍历，不改变使用顺序，也不计入命中统计。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.list.iter()
    }

    /// 统计信息快照
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.list.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    /// 跨结构一致性检查（仅 debug 构建）
    fn debug_check(&self) {
        debug_assert_eq!(self.list.len(), self.index.len());
        debug_assert!(self.list.len() <= self.capacity);
    }
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("size", &self.list.len())
            .field("order", &self.list.iter().map(|(k, _)| k).collect::<Vec<_>>())
            .finish()
    }
}
