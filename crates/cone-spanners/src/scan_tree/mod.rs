//! Augmented balanced search tree for the Theta-graph plane sweep.
//!
//! Purpose
//! - Insert-and-query-only (key, value) store answering `minimum_above(x)`:
//!   among all entries whose key is strictly greater than `x`, the value
//!   minimal under a second comparator. The Theta sweep keys entries by one
//!   cone boundary and ranks values by the projection along the cone
//!   bisector, so the query returns the nearest not-yet-passed point in the
//!   cone in O(log n).
//!
//! Why this design
//! - A partial ternary B+ tree: leaves hold small sorted buckets and are
//!   doubly linked for in-order iteration; internal nodes route by cached
//!   subtree maximum keys. Every node additionally caches the minimal value
//!   of its subtree, which lets `minimum_above` combine whole subtrees right
//!   of the search path without descending into them.
//! - Nodes live in an arena `Vec` addressed by integer handles instead of
//!   owning pointers; dropping the tree is dropping the arena, and there is
//!   no recursive destruction. There is no `erase`: the sweep only ever adds.
//!
//! Keys must be unique under the key comparator. The direction orders used by
//! the sweep guarantee that with a vertex-index tie-break; the tree itself
//! does not detect duplicates.

use std::cmp::Ordering;

#[cfg(test)]
mod tests;

/// Stateful total order, the comparator form the sweep needs (direction
/// orders carry the direction they compare by).
pub trait Comparator<T> {
    fn cmp(&self, a: &T, b: &T) -> Ordering;
}

/// Adapter turning a plain closure into a [`Comparator`].
pub struct FnComparator<F>(pub F);

impl<T, F: Fn(&T, &T) -> Ordering> Comparator<T> for FnComparator<F> {
    #[inline]
    fn cmp(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Arena handle of a tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

/// Leaf buckets split once they exceed this many entries.
const MAX_LEAF_ENTRIES: usize = 3;
/// Internal nodes split once they exceed this many children.
const MAX_CHILDREN: usize = 3;

#[derive(Debug)]
struct LeafNode<K, V> {
    /// Entries sorted by key; never empty.
    entries: Vec<(K, V)>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Debug)]
struct InternalNode<K, V> {
    /// 2..=MAX_CHILDREN children in key order.
    children: Vec<NodeId>,
    /// Maximum key in this subtree.
    max_key: K,
    /// Minimal value in this subtree under the value comparator.
    best: V,
}

#[derive(Debug)]
enum Node<K, V> {
    Leaf(LeafNode<K, V>),
    Internal(InternalNode<K, V>),
}

/// Insert-only balanced tree with an order-statistics augmentation.
pub struct PlaneScanTree<K, V, KC, VC> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
    min_leaf: Option<NodeId>,
    max_leaf: Option<NodeId>,
    len: usize,
    key_cmp: KC,
    value_cmp: VC,
}

impl<K, V, KC, VC> PlaneScanTree<K, V, KC, VC>
where
    K: Clone,
    V: Clone,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    pub fn new(key_cmp: KC, value_cmp: VC) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            min_leaf: None,
            max_leaf: None,
            len: 0,
            key_cmp,
            value_cmp,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an entry. Amortized O(log n).
    ///
    /// Precondition: `key` compares unequal to every key already present.
    pub fn insert(&mut self, key: K, value: V) {
        match self.root {
            None => {
                let id = self.push(Node::Leaf(LeafNode {
                    entries: vec![(key, value)],
                    prev: None,
                    next: None,
                }));
                self.root = Some(id);
                self.min_leaf = Some(id);
                self.max_leaf = Some(id);
            }
            Some(root) => {
                if let Some(right) = self.insert_rec(root, key, value) {
                    let children = vec![root, right];
                    let (max_key, best) = self.summarize(&children);
                    let new_root = self.push(Node::Internal(InternalNode {
                        children,
                        max_key,
                        best,
                    }));
                    self.root = Some(new_root);
                }
            }
        }
        self.len += 1;
    }

    /// Among entries with key strictly greater than `x`, the value minimal
    /// under the value comparator. O(log n).
    pub fn minimum_above(&self, x: &K) -> Option<&V> {
        let mut cur = self.root?;
        let mut best: Option<&V> = None;
        loop {
            match &self.nodes[cur.0] {
                Node::Internal(int) => {
                    // First child whose subtree still contains keys > x; all
                    // later children are entirely above x, so their cached
                    // minima stand in for the whole subtree.
                    let mut hit = None;
                    for (i, &c) in int.children.iter().enumerate() {
                        if self.key_cmp.cmp(self.subtree_max_key(c), x) == Ordering::Greater {
                            hit = Some((i, c));
                            break;
                        }
                    }
                    let Some((i, child)) = hit else { break };
                    for &rest in &int.children[i + 1..] {
                        best = self.fold_min(best, self.subtree_best(rest));
                    }
                    cur = child;
                }
                Node::Leaf(leaf) => {
                    for (k, v) in &leaf.entries {
                        if self.key_cmp.cmp(k, x) == Ordering::Greater {
                            best = self.fold_min(best, v);
                        }
                    }
                    break;
                }
            }
        }
        best
    }

    /// In-order (ascending key) iteration.
    pub fn iter(&self) -> Iter<'_, K, V, KC, VC> {
        Iter {
            tree: self,
            leaf: self.min_leaf,
            idx: 0,
        }
    }

    /// Reverse (descending key) iteration.
    pub fn iter_rev(&self) -> RevIter<'_, K, V, KC, VC> {
        let remaining = self.max_leaf.map_or(0, |id| self.leaf(id).entries.len());
        RevIter {
            tree: self,
            leaf: self.max_leaf,
            remaining,
        }
    }

    fn push(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn leaf(&self, id: NodeId) -> &LeafNode<K, V> {
        match &self.nodes[id.0] {
            Node::Leaf(l) => l,
            Node::Internal(_) => unreachable!("leaf handle points at internal node"),
        }
    }

    #[inline]
    fn fold_min<'a>(&self, best: Option<&'a V>, cand: &'a V) -> Option<&'a V> {
        match best {
            Some(b) if self.value_cmp.cmp(cand, b) != Ordering::Less => Some(b),
            _ => Some(cand),
        }
    }

    /// Maximum key of the subtree rooted at `id`.
    fn subtree_max_key(&self, id: NodeId) -> &K {
        match &self.nodes[id.0] {
            Node::Leaf(l) => &l.entries.last().expect("leaves are never empty").0,
            Node::Internal(i) => &i.max_key,
        }
    }

    /// Minimal value (under the value comparator) of the subtree at `id`.
    fn subtree_best(&self, id: NodeId) -> &V {
        match &self.nodes[id.0] {
            Node::Leaf(l) => {
                let mut best = &l.entries[0].1;
                for (_, v) in &l.entries[1..] {
                    if self.value_cmp.cmp(v, best) == Ordering::Less {
                        best = v;
                    }
                }
                best
            }
            Node::Internal(i) => &i.best,
        }
    }

    /// Fresh (max_key, best) pair computed from a child list.
    fn summarize(&self, children: &[NodeId]) -> (K, V) {
        let last = *children.last().expect("internal nodes keep >= 2 children");
        let max_key = self.subtree_max_key(last).clone();
        let mut best = self.subtree_best(children[0]);
        for &c in &children[1..] {
            let cand = self.subtree_best(c);
            if self.value_cmp.cmp(cand, best) == Ordering::Less {
                best = cand;
            }
        }
        (max_key, best.clone())
    }

    /// Recomputes the cached augmentation of an internal node.
    fn refresh(&mut self, id: NodeId) {
        let children = match &self.nodes[id.0] {
            Node::Internal(int) => int.children.clone(),
            Node::Leaf(_) => return,
        };
        let (max_key, best) = self.summarize(&children);
        let Node::Internal(int) = &mut self.nodes[id.0] else {
            unreachable!()
        };
        int.max_key = max_key;
        int.best = best;
    }

    /// Child of `id` whose key range covers `key` (last child if `key`
    /// exceeds every cached maximum).
    fn route(&self, id: NodeId, key: &K) -> NodeId {
        let Node::Internal(int) = &self.nodes[id.0] else {
            unreachable!("routing starts at an internal node")
        };
        for &c in &int.children {
            if self.key_cmp.cmp(key, self.subtree_max_key(c)) != Ordering::Greater {
                return c;
            }
        }
        *int.children.last().expect("internal nodes keep >= 2 children")
    }

    /// Returns the new right sibling of `id` if the insertion split it.
    fn insert_rec(&mut self, id: NodeId, key: K, value: V) -> Option<NodeId> {
        if matches!(self.nodes[id.0], Node::Leaf(_)) {
            return self.insert_into_leaf(id, key, value);
        }
        let child = self.route(id, &key);
        let split = self.insert_rec(child, key, value);
        let mut new_sibling = None;
        if let Some(right) = split {
            let overflow = {
                let Node::Internal(int) = &mut self.nodes[id.0] else {
                    unreachable!()
                };
                let pos = int
                    .children
                    .iter()
                    .position(|&c| c == child)
                    .expect("split child under its parent");
                int.children.insert(pos + 1, right);
                int.children.len() > MAX_CHILDREN
            };
            if overflow {
                let upper = {
                    let Node::Internal(int) = &mut self.nodes[id.0] else {
                        unreachable!()
                    };
                    let mid = int.children.len() / 2;
                    int.children.split_off(mid)
                };
                let (max_key, best) = self.summarize(&upper);
                new_sibling = Some(self.push(Node::Internal(InternalNode {
                    children: upper,
                    max_key,
                    best,
                })));
            }
        }
        self.refresh(id);
        new_sibling
    }

    fn insert_into_leaf(&mut self, id: NodeId, key: K, value: V) -> Option<NodeId> {
        let needs_split = {
            let Node::Leaf(leaf) = &mut self.nodes[id.0] else {
                unreachable!()
            };
            let pos = leaf
                .entries
                .iter()
                .position(|(k, _)| self.key_cmp.cmp(&key, k) == Ordering::Less)
                .unwrap_or(leaf.entries.len());
            leaf.entries.insert(pos, (key, value));
            leaf.entries.len() > MAX_LEAF_ENTRIES
        };
        if !needs_split {
            return None;
        }
        let (upper, old_next) = {
            let Node::Leaf(leaf) = &mut self.nodes[id.0] else {
                unreachable!()
            };
            let mid = leaf.entries.len() / 2;
            (leaf.entries.split_off(mid), leaf.next)
        };
        let right = self.push(Node::Leaf(LeafNode {
            entries: upper,
            prev: Some(id),
            next: old_next,
        }));
        {
            let Node::Leaf(leaf) = &mut self.nodes[id.0] else {
                unreachable!()
            };
            leaf.next = Some(right);
        }
        if let Some(nx) = old_next {
            let Node::Leaf(n) = &mut self.nodes[nx.0] else {
                unreachable!()
            };
            n.prev = Some(right);
        }
        if self.max_leaf == Some(id) {
            self.max_leaf = Some(right);
        }
        Some(right)
    }
}

/// Ascending in-order iterator over (key, value) pairs.
pub struct Iter<'a, K, V, KC, VC> {
    tree: &'a PlaneScanTree<K, V, KC, VC>,
    leaf: Option<NodeId>,
    idx: usize,
}

impl<'a, K, V, KC, VC> Iterator for Iter<'a, K, V, KC, VC>
where
    K: Clone,
    V: Clone,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let leaf = tree.leaf(self.leaf?);
            if self.idx < leaf.entries.len() {
                let (k, v) = &leaf.entries[self.idx];
                self.idx += 1;
                return Some((k, v));
            }
            self.leaf = leaf.next;
            self.idx = 0;
        }
    }
}

/// Descending in-order iterator over (key, value) pairs.
pub struct RevIter<'a, K, V, KC, VC> {
    tree: &'a PlaneScanTree<K, V, KC, VC>,
    leaf: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V, KC, VC> Iterator for RevIter<'a, K, V, KC, VC>
where
    K: Clone,
    V: Clone,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let leaf = tree.leaf(self.leaf?);
            if self.remaining > 0 {
                self.remaining -= 1;
                let (k, v) = &leaf.entries[self.remaining];
                return Some((k, v));
            }
            self.leaf = leaf.prev;
            if let Some(p) = leaf.prev {
                self.remaining = tree.leaf(p).entries.len();
            }
        }
    }
}
