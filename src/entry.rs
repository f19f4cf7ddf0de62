//! 缓存条目模型
//!
//! 条目统一存放在槽位数组（slot arena）中，链表指针与哈希索引都以
//! 槽位下标引用条目，整型句柄替代共享可变引用。

/// 槽位下标
pub(crate) type SlotIndex = usize;

/// 头部哨兵的固定槽位
pub(crate) const HEAD: SlotIndex = 0;
/// 尾部哨兵的固定槽位
pub(crate) const TAIL: SlotIndex = 1;

/// 条目数据（键值对）
#[derive(Debug)]
pub(crate) struct EntryData<V> {
    /// 键，创建后不再变化
    pub key: String,
    /// 值，可原地覆盖
    pub value: V,
}

/// 槽位
///
/// 哨兵槽位与已释放的空闲槽位不携带数据（`data` 为 `None`）。
#[derive(Debug)]
pub(crate) struct Slot<V> {
    pub prev: SlotIndex,
    pub next: SlotIndex,
    pub data: Option<EntryData<V>>,
}
