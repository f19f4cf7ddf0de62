//! 最近使用顺序链表
//!
//! 带固定头尾哨兵的侵入式双向链表，按最近使用程度排序。
//! 头部哨兵之后是最近使用的条目，尾部哨兵之前是最久未用的条目，
//! 插入、摘除、提升、尾部驱逐全部 O(1)。
//!
//! 形象表示：
//!     HEAD ↔ [最近使用] ↔ [...] ↔ [最久未用] ↔ TAIL
//!
//! 哨兵让插入/摘除无需对链表两端做空指针分支判断。

use crate::entry::{EntryData, HEAD, Slot, SlotIndex, TAIL};

/// 最近使用顺序链表
///
/// 条目槽位由链表独占持有；已释放的槽位进入空闲栈循环复用，
/// 槽位总数不会超过容量上限加两个哨兵。
pub(crate) struct RecencyList<V> {
    slots: Vec<Slot<V>>,
    free: Vec<SlotIndex>,
    len: usize,
}

impl<V> RecencyList<V> {
    /// 创建空链表
    pub fn new() -> Self {
        // 槽位0/1固定为头尾哨兵，空链表时互相链接
        let slots = vec![
            Slot {
                prev: HEAD,
                next: TAIL,
                data: None,
            },
            Slot {
                prev: HEAD,
                next: TAIL,
                data: None,
            },
        ];
        Self {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }

    /// 在头部插入新条目（标记为最近使用），返回其槽位下标
    pub fn add_to_head(&mut self, key: String, value: V) -> SlotIndex {
        let idx = self.alloc(EntryData { key, value });
        self.link_after_head(idx);
        self.len += 1;
        idx
    }

    /// 摘除任意位置的条目并释放槽位，返回其键值
    pub fn remove(&mut self, idx: SlotIndex) -> (String, V) {
        debug_assert!(idx != HEAD && idx != TAIL, "sentinels cannot be removed");
        self.detach(idx);
        self.len -= 1;
        let data = self.slots[idx]
            .data
            .take()
            .expect("linked slot holds entry data");
        self.free.push(idx);
        (data.key, data.value)
    }

    /// 摘除尾部哨兵之前的条目（最久未用），链表为空时返回 `None`
    ///
    /// 驱逐原语。
    pub fn remove_tail(&mut self) -> Option<(String, V)> {
        if self.len == 0 {
            return None;
        }
        let lru = self.slots[TAIL].prev;
        Some(self.remove(lru))
    }

    /// 将条目提升到头部（标记为最近使用）
    ///
    /// 提升原语，等价于摘除后重新头插，但不经过槽位分配。
    pub fn move_to_head(&mut self, idx: SlotIndex) {
        self.detach(idx);
        self.link_after_head(idx);
    }

    /// 读取条目的值
    pub fn value(&self, idx: SlotIndex) -> &V {
        &self.data(idx).value
    }

    /// 原地覆盖条目的值
    pub fn set_value(&mut self, idx: SlotIndex, value: V) {
        self.slots[idx]
            .data
            .as_mut()
            .expect("linked slot holds entry data")
            .value = value;
    }

    /// 当前条目数（不含哨兵）
    pub fn len(&self) -> usize {
        self.len
    }

    /// 链表是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 从头到尾（最近使用 → 最久未用）遍历键值
    ///
    /// 只读遍历，不改变使用顺序。
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: &self.slots,
            cursor: self.slots[HEAD].next,
        }
    }

    fn data(&self, idx: SlotIndex) -> &EntryData<V> {
        self.slots[idx]
            .data
            .as_ref()
            .expect("linked slot holds entry data")
    }

    /// 分配槽位：优先复用空闲栈，否则在数组尾部追加
    fn alloc(&mut self, data: EntryData<V>) -> SlotIndex {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx].data = Some(data);
                idx
            }
            None => {
                self.slots.push(Slot {
                    prev: HEAD,
                    next: TAIL,
                    data: Some(data),
                });
                self.slots.len() - 1
            }
        }
    }

    /// 将槽位链接到头部哨兵之后
    fn link_after_head(&mut self, idx: SlotIndex) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    /// 把槽位从链中摘出，左右邻居互相链接
    ///
    /// 槽位自身的指针保持原值，调用方必须重新链接或释放后才能再用。
    fn detach(&mut self, idx: SlotIndex) {
        debug_assert!(
            self.slots[idx].data.is_some(),
            "detach requires a linked entry slot"
        );
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }
}

/// 链表遍历器（头 → 尾）
pub(crate) struct Iter<'a, V> {
    slots: &'a [Slot<V>],
    cursor: SlotIndex,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let slot = &self.slots[self.cursor];
        self.cursor = slot.next;
        let data = slot.data.as_ref()?;
        Some((data.key.as_str(), &data.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<V>(list: &RecencyList<V>) -> Vec<String> {
        list.iter().map(|(k, _)| k.to_string()).collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: RecencyList<i32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(keys(&list), Vec::<String>::new());
    }

    #[test]
    fn test_add_to_head_orders_most_recent_first() {
        let mut list = RecencyList::new();
        list.add_to_head("a".to_string(), 1);
        list.add_to_head("b".to_string(), 2);
        list.add_to_head("c".to_string(), 3);

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), ["c", "b", "a"]);
    }

    #[test]
    fn test_remove_middle_relinks_neighbors() {
        let mut list = RecencyList::new();
        list.add_to_head("a".to_string(), 1);
        let b = list.add_to_head("b".to_string(), 2);
        list.add_to_head("c".to_string(), 3);

        let (key, value) = list.remove(b);
        assert_eq!(key, "b");
        assert_eq!(value, 2);
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), ["c", "a"]);
    }

    #[test]
    fn test_remove_tail_returns_least_recent() {
        let mut list = RecencyList::new();
        list.add_to_head("a".to_string(), 1);
        list.add_to_head("b".to_string(), 2);

        let (key, value) = list.remove_tail().unwrap();
        assert_eq!(key, "a");
        assert_eq!(value, 1);
        assert_eq!(keys(&list), ["b"]);
    }

    #[test]
    fn test_remove_tail_on_empty_list() {
        let mut list: RecencyList<i32> = RecencyList::new();
        assert!(list.remove_tail().is_none());

        // 清空后再次驱逐同样返回 None
        list.add_to_head("a".to_string(), 1);
        assert!(list.remove_tail().is_some());
        assert!(list.remove_tail().is_none());
    }

    #[test]
    fn test_move_to_head_promotes_entry() {
        let mut list = RecencyList::new();
        let a = list.add_to_head("a".to_string(), 1);
        list.add_to_head("b".to_string(), 2);
        list.add_to_head("c".to_string(), 3);

        list.move_to_head(a);
        assert_eq!(keys(&list), ["a", "c", "b"]);
        assert_eq!(list.len(), 3);

        // 头部条目的提升是无操作等价的
        list.move_to_head(a);
        assert_eq!(keys(&list), ["a", "c", "b"]);
    }

    #[test]
    fn test_set_value_updates_in_place() {
        let mut list = RecencyList::new();
        let a = list.add_to_head("a".to_string(), 1);
        list.set_value(a, 10);
        assert_eq!(*list.value(a), 10);
        assert_eq!(keys(&list), ["a"]);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut list = RecencyList::new();
        for round in 0..100 {
            let idx = list.add_to_head(format!("k{}", round), round);
            let (_, value) = list.remove(idx);
            assert_eq!(value, round);
        }
        // 两个哨兵 + 一个循环复用的条目槽位
        assert_eq!(list.slots.len(), 3);
        assert!(list.is_empty());
    }
}
