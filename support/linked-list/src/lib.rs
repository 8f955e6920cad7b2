//! LinkedList: a singly linked list whose nodes live in an arena.
//!
//! Nodes are stored in a `Vec` of slots and refer to each other through
//! [`NodeId`] handles instead of owning pointers. Removed slots go on a
//! free list and are reused by the next insert.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Handle to a node slot in a [`LinkedList`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn new(index: usize) -> Self {
        NodeId(index.try_into().expect("too many nodes"))
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeId> },
}

static_assertions::assert_eq_size!(Option<NodeId>, u64);

/// Singly linked list backed by an arena of nodes.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    free: Option<NodeId>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the arena, occupied or not.
    pub fn arena_len(&self) -> usize {
        self.slots.len()
    }

    /// Returns the value at position `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Inserts `value` at the front of the list.
    pub fn insert_head(&mut self, value: T) -> NodeId {
        let id = self.alloc(Node {
            value,
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
        id
    }

    /// Inserts `value` at the back of the list.
    pub fn insert_tail(&mut self, value: T) -> NodeId {
        let id = self.alloc(Node { value, next: None });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Unlinks the node at position `index` and returns its value.
    ///
    /// Returns `None` if `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let mut prev = None;
        let mut current = self.head?;
        for _ in 0..index {
            prev = Some(current);
            current = self.node(current).next?;
        }

        let next = self.node(current).next;
        match prev {
            Some(prev) => self.node_mut(prev).next = next,
            None => self.head = next,
        }
        if self.tail == Some(current) {
            self.tail = prev;
        }
        self.len -= 1;

        Some(self.release(current).value)
    }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    /// Returns the values from head to tail.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.index()];
                let Slot::Vacant { next_free } = *slot else {
                    unreachable!("free list points at an occupied slot");
                };
                self.free = next_free;
                *slot = Slot::Occupied(node);
                id
            }
            None => {
                let id = NodeId::new(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(id);
        match core::mem::replace(&mut self.slots[id.index()], vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle"),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            list.insert_tail(value);
        }
        list
    }
}

/// Iterator over the values of a [`LinkedList`], head first.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next?);
        self.next = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        let list = LinkedList::<i64>::new();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
        assert_eq!(list.values(), Vec::<i64>::new());
    }

    #[test]
    fn test_insert_head_then_tail() {
        let mut list = LinkedList::new();
        list.insert_head(1);
        list.insert_tail(2);
        list.insert_tail(3);
        assert_eq!(list.values(), vec![1, 2, 3]);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn test_insert_tail_on_empty_sets_head() {
        let mut list = LinkedList::new();
        list.insert_tail(7);
        assert_eq!(list.get(0), Some(&7));
        list.insert_head(6);
        assert_eq!(list.values(), vec![6, 7]);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();

        assert_eq!(list.remove(0), Some(1));
        assert_eq!(list.values(), vec![2, 3]);

        assert_eq!(list.remove(1), Some(3));
        assert_eq!(list.values(), vec![2]);

        // The tail moved back, so appends land after 2.
        list.insert_tail(4);
        assert_eq!(list.values(), vec![2, 4]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list: LinkedList<_> = [1, 2].into_iter().collect();
        assert_eq!(list.remove(2), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_last_node_clears_tail() {
        let mut list = LinkedList::new();
        list.insert_head(1);
        assert_eq!(list.remove(0), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.head, None);
        assert_eq!(list.tail, None);

        list.insert_tail(2);
        assert_eq!(list.values(), vec![2]);
    }

    #[test]
    fn test_free_slots_are_reused() {
        let mut list: LinkedList<_> = (0..4).collect();
        assert_eq!(list.arena_len(), 4);

        list.remove(1);
        list.remove(1);
        assert_eq!(list.values(), vec![0, 3]);

        list.insert_head(10);
        list.insert_tail(11);
        assert_eq!(list.arena_len(), 4);
        assert_eq!(list.values(), vec![10, 0, 3, 11]);

        list.insert_tail(12);
        assert_eq!(list.arena_len(), 5);
    }

    #[test]
    fn test_debug() {
        let list: LinkedList<_> = ["a", "b"].into_iter().collect();
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }
}
