use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    fmt, mem,
    ops::{Bound, RangeBounds},
};

use log::{debug, warn};

use crate::depth::Depth;
use crate::error::Error;

// Arena index of the sentinel, stands for every absent child and for the
// parent of root.
const NIL: usize = usize::MAX;

/// Rbt manage a single instance of in-memory index using
/// [red-black][rbt] tree. Duplicate keys are allowed and kept in
/// insertion order among themselves.
///
/// Nodes live in an arena and refer to each other by index, the sentinel
/// is a reserved index whose links are held by the tree itself.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct Rbt<K>
where
    K: Clone + Ord,
{
    name: String,
    root: usize,
    nil: Links,
    nodes: Vec<Node<K>>,
}

/// Different ways to construct a new Rbt instance.
impl<K> Rbt<K>
where
    K: Clone + Ord,
{
    /// Create an empty instance of Rbt, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Rbt<K>
    where
        S: AsRef<str>,
    {
        Rbt {
            name: name.as_ref().to_string(),
            root: NIL,
            nil: Links::SENTINEL,
            nodes: Default::default(),
        }
    }

    /// Create a new instance of Rbt tree and load it with keys from
    /// `iter`. Equivalent to calling [`Rbt::insert`] for each key.
    pub fn load_from<S, I>(name: S, iter: I) -> Rbt<K>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = K>,
    {
        let mut rbt = Rbt::new(name);
        for key in iter {
            rbt.insert(key);
        }
        debug!("{}: loaded {} keys", rbt.name, rbt.len());
        rbt
    }
}

/// Maintenance API.
impl<K> Rbt<K>
where
    K: Clone + Ord,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Rbt instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of keys in this instance, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all keys, the instance can be reused.
    pub fn clear(&mut self) {
        debug!("{}: clear {} keys", self.name, self.len());
        self.nodes.clear();
        self.root = NIL;
        self.nil = Links::SENTINEL;
    }

    /// Return quickly with basic statisics, only entries() method is valid
    /// with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K>>())
    }

    /// Return the number of nodes on the longest path from root to a leaf,
    /// zero for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((idx, depth)) = stack.pop() {
            if idx == NIL {
                height = height.max(depth);
                continue;
            }
            stack.push((self.left(idx), depth + 1));
            stack.push((self.right(idx), depth + 1));
        }
        height
    }
}

/// Write operations on Rbt instance.
impl<K> Rbt<K>
where
    K: Clone + Ord,
{
    /// Insert key into the index. Equal keys are always routed to the
    /// right, so a duplicate sorts after the copies already present.
    pub fn insert(&mut self, key: K) {
        let mut parent = NIL;
        let mut cur = self.root;
        while cur != NIL {
            parent = cur;
            cur = if key < *self.key(cur) {
                self.left(cur)
            } else {
                self.right(cur)
            };
        }

        let is_left = parent != NIL && key < *self.key(parent);
        let idx = self.nodes.len();
        self.nodes.push(Node::new(key, parent));

        if parent == NIL {
            self.root = idx;
            self.set_color(idx, Color::Black);
            return;
        } else if is_left {
            self.set_left(parent, idx);
        } else {
            self.set_right(parent, idx);
        }

        if self.color(parent) == Color::Red {
            self.fix_insert(idx);
        }
        debug_assert_eq!(self.color(self.root), Color::Black);
    }

    /// Delete one occurrence of key from this instance. Return false if
    /// key is not present, in which case delete is a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.find(key) {
            Some(z) => {
                self.remove_node(z);
                debug_assert_eq!(self.nil.color, Color::Black);
                true
            }
            None => {
                debug!("{}: delete, key not found", self.name);
                false
            }
        }
    }
}

impl<K> Rbt<K>
where
    K: Clone + Ord + fmt::Debug,
{
    /// Validate Rbt tree with following rules:
    ///
    /// * Root and sentinel are black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Parent links agree with child links.
    /// * Make sure keys are in sorted order.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>> {
        let res = self.do_validate();
        if let Err(err) = &res {
            warn!("{}: validate failed, {}", self.name, err);
        }
        res
    }

    fn do_validate(&self) -> Result<Stats, Error<K>> {
        if self.color(self.root) == Color::Red || self.nil.color == Color::Red {
            return Err(Error::RedRoot);
        }
        if self.root != NIL && self.parent(self.root) != NIL {
            let err = format!("root {} has parent", self.root);
            return Err(Error::BrokenLink(err));
        }

        let mut stats = self.stats();
        let mut depths = Depth::new();
        let blacks = self.validate_tree(self.root, false, 0, 0, &mut depths)?;
        stats.set_blacks(blacks);
        stats.set_depths(depths);

        let mut iter = self.iter();
        if let Some(mut prev) = iter.next() {
            for key in iter {
                if prev > key {
                    return Err(Error::SortError(prev, key));
                }
                prev = key;
            }
        }
        Ok(stats)
    }

    fn validate_tree(
        &self,
        idx: usize,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        depths: &mut Depth,
    ) -> Result<usize, Error<K>> {
        if idx == NIL {
            depths.sample(depth);
            return Ok(nb);
        }

        let red = self.color(idx) == Color::Red;
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (self.left(idx), self.right(idx));
        for child in [left, right].iter().cloned() {
            if child != NIL && self.parent(child) != idx {
                let parent = self.parent(child);
                let err = format!("child {} of {} points to {}", child, idx, parent);
                return Err(Error::BrokenLink(err));
            }
        }
        let lblacks = self.validate_tree(left, red, nb, depth + 1, depths)?;
        let rblacks = self.validate_tree(right, red, nb, depth + 1, depths)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

/// Read operations on Rbt instance.
impl<K> Rbt<K>
where
    K: Clone + Ord,
{
    /// Search for key, return the node holding it.
    pub fn search<Q>(&self, key: &Q) -> Option<&Node<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|idx| &self.nodes[idx])
    }

    /// Check whether key is present in this instance.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Return the smallest key, None if index is empty.
    pub fn minimum(&self) -> Option<K> {
        match self.root {
            NIL => None,
            root => Some(self.key(self.minimum_at(root)).clone()),
        }
    }

    /// Return the largest key, None if index is empty.
    pub fn maximum(&self) -> Option<K> {
        match self.root {
            NIL => None,
            root => Some(self.key(self.maximum_at(root)).clone()),
        }
    }

    /// Return the next key strictly greater than `key`. Return None if
    /// `key` is not present or there is no greater key.
    pub fn successor_of<Q>(&self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut idx = self.successor_at(self.find(key)?);
        while idx != NIL && self.key(idx).borrow().cmp(key) == Ordering::Equal {
            idx = self.successor_at(idx);
        }
        match idx {
            NIL => None,
            idx => Some(self.key(idx).clone()),
        }
    }

    /// Return the next key strictly smaller than `key`. Return None if
    /// `key` is not present or there is no smaller key.
    pub fn predecessor_of<Q>(&self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut idx = self.predecessor_at(self.find(key)?);
        while idx != NIL && self.key(idx).borrow().cmp(key) == Ordering::Equal {
            idx = self.predecessor_at(idx);
        }
        match idx {
            NIL => None,
            idx => Some(self.key(idx).clone()),
        }
    }

    /// Return all keys in sort order.
    pub fn sorted(&self) -> Vec<K> {
        self.iter().collect()
    }

    /// Return an iterator over all keys in this instance. Calling iter()
    /// again restarts from the smallest key.
    pub fn iter(&self) -> Iter<K> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::default(),
        };
        iter.push_left(self.root);
        iter
    }

    /// Range over all keys from low to high.
    pub fn range<Q, R>(&self, range: R) -> Range<K>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ToOwned<Owned = K> + ?Sized,
    {
        let low: Bound<K> = match range.start_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };
        let high: Bound<K> = match range.end_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };

        Range {
            tree: self,
            next: self.ceiling(&low),
            low,
            high,
        }
    }

    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut idx = self.root;
        while idx != NIL {
            idx = match self.key(idx).borrow().cmp(key) {
                Ordering::Less => self.right(idx),
                Ordering::Greater => self.left(idx),
                Ordering::Equal => return Some(idx),
            };
        }
        None
    }

    fn minimum_at(&self, mut idx: usize) -> usize {
        while self.left(idx) != NIL {
            idx = self.left(idx);
        }
        idx
    }

    fn maximum_at(&self, mut idx: usize) -> usize {
        while self.right(idx) != NIL {
            idx = self.right(idx);
        }
        idx
    }

    fn successor_at(&self, mut idx: usize) -> usize {
        if self.right(idx) != NIL {
            return self.minimum_at(self.right(idx));
        }
        let mut parent = self.parent(idx);
        while parent != NIL && idx == self.right(parent) {
            idx = parent;
            parent = self.parent(parent);
        }
        parent
    }

    fn predecessor_at(&self, mut idx: usize) -> usize {
        if self.left(idx) != NIL {
            return self.maximum_at(self.left(idx));
        }
        let mut parent = self.parent(idx);
        while parent != NIL && idx == self.left(parent) {
            idx = parent;
            parent = self.parent(parent);
        }
        parent
    }

    // leftmost node whose key lies above the `low` bound.
    fn ceiling(&self, low: &Bound<K>) -> usize {
        let (mut idx, mut found) = (self.root, NIL);
        while idx != NIL {
            let key = self.key(idx);
            let ok = match low {
                Bound::Included(low) => key >= low,
                Bound::Excluded(low) => key > low,
                Bound::Unbounded => true,
            };
            if ok {
                found = idx;
                idx = self.left(idx);
            } else {
                idx = self.right(idx);
            }
        }
        found
    }

    // rightmost node whose key lies below the `high` bound.
    fn floor(&self, high: &Bound<K>) -> usize {
        let (mut idx, mut found) = (self.root, NIL);
        while idx != NIL {
            let key = self.key(idx);
            let ok = match high {
                Bound::Included(high) => key <= high,
                Bound::Excluded(high) => key < high,
                Bound::Unbounded => true,
            };
            if ok {
                found = idx;
                idx = self.right(idx);
            } else {
                idx = self.left(idx);
            }
        }
        found
    }
}

/// Rebalancing and node-store routines.
impl<K> Rbt<K>
where
    K: Clone + Ord,
{
    fn fix_insert(&mut self, mut z: usize) {
        while self.color(self.parent(z)) == Color::Red {
            let parent = self.parent(z);
            let grand = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grand, side.flip());

            if self.color(uncle) == Color::Red {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grand, Color::Red);
                z = grand;
                continue;
            }
            if z == self.child(parent, side.flip()) {
                // inner child, turn it into the outer one.
                z = parent;
                self.rotate(z, side);
            }
            let parent = self.parent(z);
            let grand = self.parent(parent);
            self.set_color(parent, Color::Black);
            self.set_color(grand, Color::Red);
            self.rotate(grand, side.flip());
        }
        let root = self.root;
        self.set_color(root, Color::Black);
    }

    fn remove_node(&mut self, z: usize) {
        let (zleft, zright) = (self.left(z), self.right(z));
        let mut removed_color = self.color(z);

        let x = if zleft == NIL {
            self.transplant(z, zright);
            zright
        } else if zright == NIL {
            self.transplant(z, zleft);
            zleft
        } else {
            let y = self.minimum_at(zright);
            removed_color = self.color(y);
            let x = self.right(y);
            if self.parent(y) == z {
                // x may be the sentinel, fix_delete still needs its parent.
                self.set_parent(x, y);
            } else {
                self.transplant(y, x);
                self.set_right(y, zright);
                self.set_parent(zright, y);
            }
            self.transplant(z, y);
            self.set_left(y, zleft);
            self.set_parent(zleft, y);
            let color = self.color(z);
            self.set_color(y, color);
            x
        };

        if removed_color == Color::Black {
            self.fix_delete(x);
        }
        self.nil = Links::SENTINEL;
        self.release(z);
    }

    fn fix_delete(&mut self, mut x: usize) {
        while x != self.root && self.color(x) == Color::Black {
            let parent = self.parent(x);
            let side = if x == self.left(parent) {
                Side::Left
            } else {
                Side::Right
            };

            let mut w = self.child(parent, side.flip());
            if self.color(w) == Color::Red {
                self.set_color(w, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                w = self.child(parent, side.flip());
            }

            let (near, far) = (self.child(w, side), self.child(w, side.flip()));
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                self.set_color(w, Color::Red);
                x = parent;
                continue;
            }
            if self.color(far) == Color::Black {
                self.set_color(near, Color::Black);
                self.set_color(w, Color::Red);
                self.rotate(w, side.flip());
                w = self.child(parent, side.flip());
            }
            let color = self.color(parent);
            self.set_color(w, color);
            self.set_color(parent, Color::Black);
            let far = self.child(w, side.flip());
            self.set_color(far, Color::Black);
            self.rotate(parent, side);
            x = self.root;
        }
        self.set_color(x, Color::Black);
    }

    //  rotate(node, Left)                 rotate(node, Right)
    //
    //       node               x                node              x
    //       /  \              / \               /  \             / \
    //      a    x     =>   node  c             x    c    =>     a  node
    //          / \         /  \               / \                  /  \
    //         b   c       a    b             a   b                b    c
    //
    // `node` moves down towards `side`, its child on the other side takes
    // its place and hands the inner grandchild `b` over to `node`.
    fn rotate(&mut self, node: usize, side: Side) {
        let x = self.child(node, side.flip());
        debug_assert!(x != NIL, "rotate(): promoting the sentinel");

        let b = self.child(x, side);
        self.set_child(node, side.flip(), b);
        if b != NIL {
            self.set_parent(b, node);
        }
        let parent = self.parent(node);
        self.set_parent(x, parent);
        self.replace_child(parent, node, x);
        self.set_child(x, side, node);
        self.set_parent(node, x);
    }

    // put `v` in place of `u`, colors untouched.
    fn transplant(&mut self, u: usize, v: usize) {
        let parent = self.parent(u);
        self.replace_child(parent, u, v);
        self.set_parent(v, parent);
    }

    fn replace_child(&mut self, parent: usize, old: usize, new: usize) {
        if parent == NIL {
            self.root = new;
        } else if self.left(parent) == old {
            self.set_left(parent, new);
        } else {
            self.set_right(parent, new);
        }
    }

    // Free the slot of an unlinked node by moving the last arena entry
    // into it.
    fn release(&mut self, z: usize) -> K {
        let last = self.nodes.len() - 1;
        if z != last {
            let Links {
                parent,
                left,
                right,
                ..
            } = self.nodes[last].links;
            self.replace_child(parent, last, z);
            if left != NIL {
                self.set_parent(left, z);
            }
            if right != NIL {
                self.set_parent(right, z);
            }
        }
        self.nodes.swap_remove(z).key
    }

    #[inline]
    fn side_of(&self, idx: usize) -> Side {
        if idx == self.left(self.parent(idx)) {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn key(&self, idx: usize) -> &K {
        &self.nodes[idx].key
    }

    #[inline]
    fn links(&self, idx: usize) -> &Links {
        match idx {
            NIL => &self.nil,
            idx => &self.nodes[idx].links,
        }
    }

    #[inline]
    fn links_mut(&mut self, idx: usize) -> &mut Links {
        match idx {
            NIL => &mut self.nil,
            idx => &mut self.nodes[idx].links,
        }
    }

    #[inline]
    fn color(&self, idx: usize) -> Color {
        self.links(idx).color
    }

    #[inline]
    fn parent(&self, idx: usize) -> usize {
        self.links(idx).parent
    }

    #[inline]
    fn left(&self, idx: usize) -> usize {
        self.links(idx).left
    }

    #[inline]
    fn right(&self, idx: usize) -> usize {
        self.links(idx).right
    }

    #[inline]
    fn child(&self, idx: usize, side: Side) -> usize {
        match side {
            Side::Left => self.left(idx),
            Side::Right => self.right(idx),
        }
    }

    #[inline]
    fn set_color(&mut self, idx: usize, color: Color) {
        debug_assert!(idx != NIL || color == Color::Black, "red sentinel");
        self.links_mut(idx).color = color
    }

    #[inline]
    fn set_parent(&mut self, idx: usize, parent: usize) {
        self.links_mut(idx).parent = parent
    }

    #[inline]
    fn set_left(&mut self, idx: usize, left: usize) {
        self.links_mut(idx).left = left
    }

    #[inline]
    fn set_right(&mut self, idx: usize, right: usize) {
        self.links_mut(idx).right = right
    }

    #[inline]
    fn set_child(&mut self, idx: usize, side: Side, child: usize) {
        match side {
            Side::Left => self.set_left(idx, child),
            Side::Right => self.set_right(idx, child),
        }
    }
}

/// Iterate over keys in sort order, built with [`Rbt::iter`].
pub struct Iter<'a, K>
where
    K: Clone + Ord,
{
    tree: &'a Rbt<K>,
    stack: Vec<usize>,
}

impl<'a, K> Iter<'a, K>
where
    K: Clone + Ord,
{
    fn push_left(&mut self, mut idx: usize) {
        while idx != NIL {
            self.stack.push(idx);
            idx = self.tree.left(idx);
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K>
where
    K: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        self.push_left(self.tree.right(idx));
        Some(self.tree.key(idx).clone())
    }
}

/// Iterate over keys within a range, built with [`Rbt::range`].
pub struct Range<'a, K>
where
    K: Clone + Ord,
{
    tree: &'a Rbt<K>,
    next: usize,
    low: Bound<K>,
    high: Bound<K>,
}

impl<'a, K> Range<'a, K>
where
    K: Clone + Ord,
{
    /// Iterate over the same range from high to low. Starts afresh from
    /// the upper bound, irrespective of keys already consumed.
    pub fn rev(self) -> Reverse<'a, K> {
        Reverse {
            tree: self.tree,
            next: self.tree.floor(&self.high),
            low: self.low,
        }
    }
}

impl<'a, K> Iterator for Range<'a, K>
where
    K: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == NIL {
            return None;
        }
        let key = self.tree.key(self.next);
        let ok = match &self.high {
            Bound::Unbounded => true,
            Bound::Included(qigh) => key <= qigh,
            Bound::Excluded(qigh) => key < qigh,
        };
        if !ok {
            self.next = NIL;
            return None;
        }
        let key = key.clone();
        self.next = self.tree.successor_at(self.next);
        Some(key)
    }
}

/// Iterate over keys within a range in reverse order.
pub struct Reverse<'a, K>
where
    K: Clone + Ord,
{
    tree: &'a Rbt<K>,
    next: usize,
    low: Bound<K>,
}

impl<'a, K> Iterator for Reverse<'a, K>
where
    K: Clone + Ord,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == NIL {
            return None;
        }
        let key = self.tree.key(self.next);
        let ok = match &self.low {
            Bound::Unbounded => true,
            Bound::Included(qow) => key >= qow,
            Bound::Excluded(qow) => key > qow,
        };
        if !ok {
            self.next = NIL;
            return None;
        }
        let key = key.clone();
        self.next = self.tree.predecessor_at(self.next);
        Some(key)
    }
}

/// Node color, the sentinel is always black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Copy)]
struct Links {
    color: Color,
    parent: usize, // store: arena index of parent, NIL for root
    left: usize,   // store: arena index of left child
    right: usize,  // store: arena index of right child
}

impl Links {
    const SENTINEL: Links = Links {
        color: Color::Black,
        parent: NIL,
        left: NIL,
        right: NIL,
    };
}

/// Node corresponds to a single key in Rbt instance.
#[derive(Clone)]
pub struct Node<K> {
    key: K,
    links: Links,
}

impl<K> Node<K> {
    // new nodes are red, hanging below `parent`.
    fn new(key: K, parent: usize) -> Node<K> {
        Node {
            key,
            links: Links {
                color: Color::Red,
                parent,
                left: NIL,
                right: NIL,
            },
        }
    }

    /// Return the key stored in this node.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.links.color
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.links.color == Color::Black
    }
}

/// Statistics on [`Rbt`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Rbt::stats`] method.
/// * To get full statisics via [`Rbt::validate`] method.
#[derive(Default)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Rbt`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Rbt<K>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key type. EG:
    ///
    /// ```
    /// use rbt_index::Rbt;
    /// let rbt: Rbt<u64> = Rbt::new("myinstance");
    ///
    /// // size of key: 8 bytes
    /// // overhead is 32 bytes
    /// assert_eq!(rbt.stats().node_size(), 40);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // 2 is root, 1 and 3 black children, 4 red below 3.
    fn make_tree() -> Rbt<i64> {
        let rbt = Rbt::load_from("test-rbt", vec![2, 1, 3, 4]);
        assert!(rbt.validate().is_ok());
        rbt
    }

    #[test]
    fn test_validate_red_root() {
        let mut rbt = make_tree();
        let root = rbt.root;
        rbt.set_color(root, Color::Red);
        assert_eq!(rbt.validate().err(), Some(Error::RedRoot));
    }

    #[test]
    fn test_validate_consecutive_reds() {
        let mut rbt = make_tree();
        let idx = rbt.find(&3).unwrap();
        rbt.set_color(idx, Color::Red);
        assert_eq!(rbt.validate().err(), Some(Error::ConsecutiveReds));
    }

    #[test]
    fn test_validate_unbalanced() {
        let mut rbt = make_tree();
        let idx = rbt.find(&4).unwrap();
        rbt.set_color(idx, Color::Black);
        match rbt.validate() {
            Err(Error::UnbalancedBlacks(_)) => (),
            _ => panic!("expected unbalanced blacks"),
        }
    }

    #[test]
    fn test_validate_broken_link() {
        let mut rbt = make_tree();
        let (idx, other) = (rbt.find(&4).unwrap(), rbt.find(&1).unwrap());
        rbt.set_parent(idx, other);
        match rbt.validate() {
            Err(Error::BrokenLink(_)) => (),
            _ => panic!("expected broken link"),
        }
    }

    #[test]
    fn test_validate_sort() {
        let mut rbt = make_tree();
        let idx = rbt.find(&1).unwrap();
        rbt.nodes[idx].key = 5;
        assert_eq!(rbt.validate().err(), Some(Error::SortError(5, 2)));
    }

    #[test]
    fn test_release_relinks() {
        let mut rbt = Rbt::load_from("test-rbt", 0..32);
        // slot of 0 is reused by the last arena entry.
        assert!(rbt.delete(&0));
        assert_eq!(rbt.nodes.len(), 31);
        assert_eq!(*rbt.key(0), 31);
        assert!(rbt.validate().is_ok());
        assert_eq!(rbt.nil.parent, NIL);
    }
}
