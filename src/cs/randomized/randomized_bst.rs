use rand::Rng;

type Link<T> = Option<Box<RbstNode<T>>>;

#[derive(Debug)]
struct RbstNode<T> {
    key: T,
    size: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> RbstNode<T> {
    fn new(key: T) -> Box<Self> {
        Box::new(RbstNode {
            key,
            size: 1,
            left: None,
            right: None,
        })
    }

    fn refresh_size(&mut self) {
        self.size = 1 + subtree_size(&self.left) + subtree_size(&self.right);
    }
}

fn subtree_size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// A randomized binary search tree.
///
/// Each insertion makes the new key the root of the subtree it lands in with
/// probability 1 / (subtree size + 1), via recursive root insertion and
/// rotations. The resulting tree is equivalent to a BST built from a random
/// insertion order, so search paths stay O(log n) expected regardless of the
/// key order. Duplicate keys are kept (equal keys go right).
#[derive(Debug, Default)]
pub struct RandomizedBst<T> {
    root: Link<T>,
}

impl<T: Ord> RandomizedBst<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        RandomizedBst { root: None }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        subtree_size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a key, promoting it toward the root probabilistically.
    pub fn insert(&mut self, key: T) {
        let root = self.root.take();
        self.root = Some(insert(root, key, &mut rand::thread_rng()));
    }

    /// Returns true if `key` is present.
    pub fn search(&self, key: &T) -> bool {
        self.search_steps(key).0
    }

    /// Searches for `key`, counting one step per node visited. Returns
    /// whether the key was found and the step count.
    pub fn search_steps(&self, key: &T) -> (bool, usize) {
        let mut steps = 0;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            steps += 1;
            if *key == n.key {
                return (true, steps);
            }
            node = if *key < n.key {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        (false, steps)
    }
}

fn insert<T: Ord, R: Rng>(link: Link<T>, key: T, rng: &mut R) -> Box<RbstNode<T>> {
    match link {
        None => RbstNode::new(key),
        Some(mut node) => {
            // The new key becomes this subtree's root with probability
            // 1 / (size + 1).
            if rng.gen_range(0..=node.size) == 0 {
                return insert_root(Some(node), key);
            }
            if key < node.key {
                node.left = Some(insert(node.left.take(), key, rng));
            } else {
                node.right = Some(insert(node.right.take(), key, rng));
            }
            node.size += 1;
            node
        }
    }
}

fn insert_root<T: Ord>(link: Link<T>, key: T) -> Box<RbstNode<T>> {
    match link {
        None => RbstNode::new(key),
        Some(mut node) => {
            if key < node.key {
                node.left = Some(insert_root(node.left.take(), key));
                rotate_right(node)
            } else {
                node.right = Some(insert_root(node.right.take(), key));
                rotate_left(node)
            }
        }
    }
}

// Both rotations are only reached right after a root insertion placed a node
// on the rotating side, so the unwraps cannot fail.
fn rotate_right<T>(mut y: Box<RbstNode<T>>) -> Box<RbstNode<T>> {
    let mut x = y.left.take().unwrap();
    y.left = x.right.take();
    y.refresh_size();
    x.right = Some(y);
    x.refresh_size();
    x
}

fn rotate_left<T>(mut x: Box<RbstNode<T>>) -> Box<RbstNode<T>> {
    let mut y = x.right.take().unwrap();
    x.right = y.left.take();
    x.refresh_size();
    y.left = Some(x);
    y.refresh_size();
    y
}
