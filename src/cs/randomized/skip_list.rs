use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

type Link<T> = Option<Rc<RefCell<SkipNode<T>>>>;

#[derive(Debug)]
struct SkipNode<T> {
    // None only for the header node.
    value: Option<T>,
    forward: Vec<Link<T>>,
}

/// A skip list over unique keys.
///
/// Each node is promoted to the next level with probability `p`, up to
/// `max_level` levels, giving O(log n) expected search. Searches can report
/// the number of traversal steps taken, one per forward move plus one per
/// level descent.
#[derive(Debug)]
pub struct SkipList<T> {
    head: Rc<RefCell<SkipNode<T>>>,
    max_level: usize,
    p: f64,
    current_level: usize,
}

impl<T: Ord> SkipList<T> {
    /// Creates an empty skip list with the given maximum level and level
    /// promotion probability.
    pub fn new(max_level: usize, p: f64) -> Self {
        let head = Rc::new(RefCell::new(SkipNode {
            value: None,
            forward: vec![None; max_level],
        }));
        SkipList {
            head,
            max_level,
            p,
            current_level: 1,
        }
    }

    /// Randomly determines the level for a new node.
    fn random_level(&self) -> usize {
        let mut lvl = 1;
        let mut rng = rand::thread_rng();
        while rng.gen::<f64>() < self.p && lvl < self.max_level {
            lvl += 1;
        }
        lvl
    }

    /// Inserts a value. Re-inserting an existing value is a no-op.
    pub fn insert(&mut self, value: T) {
        let mut update: Vec<Rc<RefCell<SkipNode<T>>>> = vec![self.head.clone(); self.max_level];
        let mut current = self.head.clone();
        for i in (0..self.current_level).rev() {
            loop {
                let forward = current.borrow().forward[i].clone();
                match forward {
                    Some(next) => {
                        if next.borrow().value.as_ref().unwrap() < &value {
                            current = next;
                        } else {
                            break;
                        }
                    }
                    None => break,
                }
            }
            update[i] = current.clone();
        }

        let at_position = update[0].borrow().forward[0].clone();
        if let Some(next) = at_position {
            if next.borrow().value.as_ref().unwrap() == &value {
                return;
            }
        }

        let lvl = self.random_level();
        if lvl > self.current_level {
            for slot in update.iter_mut().take(lvl).skip(self.current_level) {
                *slot = self.head.clone();
            }
            self.current_level = lvl;
        }
        let new_node = Rc::new(RefCell::new(SkipNode {
            value: Some(value),
            forward: vec![None; lvl],
        }));
        // Splice the new node into each of its levels.
        for i in 0..lvl {
            let next = update[i].borrow().forward[i].clone();
            new_node.borrow_mut().forward[i] = next;
            update[i].borrow_mut().forward[i] = Some(new_node.clone());
        }
    }

    /// Returns true if `value` is present.
    pub fn search(&self, value: &T) -> bool {
        self.search_steps(value).0
    }

    /// Searches for `value`, counting one step per forward move and one per
    /// level descent. Returns whether the value was found and the step count.
    pub fn search_steps(&self, value: &T) -> (bool, usize) {
        let mut steps = 0;
        let mut current = self.head.clone();
        for i in (0..self.current_level).rev() {
            loop {
                let forward = current.borrow().forward[i].clone();
                match forward {
                    Some(next) => {
                        if next.borrow().value.as_ref().unwrap() < value {
                            current = next;
                            steps += 1;
                        } else {
                            break;
                        }
                    }
                    None => break,
                }
            }
            steps += 1;
        }
        let forward = current.borrow().forward[0].clone();
        match forward {
            Some(next) => (next.borrow().value.as_ref().unwrap() == value, steps),
            None => (false, steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_insert_search() {
        let mut skip_list = SkipList::new(16, 0.5);
        skip_list.insert(10);
        skip_list.insert(20);
        skip_list.insert(15);
        skip_list.insert(5);

        assert!(skip_list.search(&10));
        assert!(skip_list.search(&15));
        assert!(skip_list.search(&20));
        assert!(skip_list.search(&5));
        assert!(!skip_list.search(&25));
    }

    #[test]
    fn test_empty_list() {
        let skip_list: SkipList<i32> = SkipList::new(16, 0.5);
        // One descent through the single active level, no forward moves.
        assert_eq!(skip_list.search_steps(&1), (false, 1));
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut skip_list = SkipList::new(16, 0.5);
        skip_list.insert(7);
        skip_list.insert(7);
        assert!(skip_list.search(&7));
        // The level-0 chain must hold a single node for the key.
        let first = skip_list.head.borrow().forward[0].clone().unwrap();
        assert!(first.borrow().forward[0].is_none());
    }

    #[test]
    fn test_search_steps_counts_descents() {
        let mut skip_list = SkipList::new(16, 0.5);
        for key in [4, 1, 3, 2] {
            skip_list.insert(key);
        }
        for key in 1..=4 {
            let (found, steps) = skip_list.search_steps(&key);
            assert!(found);
            assert!(steps >= skip_list.current_level);
        }
    }

    #[test]
    fn test_random_keys() {
        let mut rng = rand::thread_rng();
        let mut skip_list = SkipList::new(16, 0.5);
        let keys: Vec<i32> = (0..500).map(|_| rng.gen_range(0..10_000)).collect();
        for &key in &keys {
            skip_list.insert(key);
        }
        for key in &keys {
            assert!(skip_list.search(key));
        }
        assert!(!skip_list.search(&-1));
    }

    #[test]
    fn test_level_zero_chain_is_sorted() {
        let mut skip_list = SkipList::new(16, 0.5);
        for key in [9, 2, 7, 4, 1, 8] {
            skip_list.insert(key);
        }
        let mut seen = Vec::new();
        let mut node = skip_list.head.borrow().forward[0].clone();
        while let Some(n) = node {
            seen.push(*n.borrow().value.as_ref().unwrap());
            node = n.borrow().forward[0].clone();
        }
        assert_eq!(seen, vec![1, 2, 4, 7, 8, 9]);
    }
}
