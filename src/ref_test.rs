// Reference model, a sorted multiset of keys.
struct RefKeys {
    keys: Vec<i64>,
}

impl RefKeys {
    fn new() -> RefKeys {
        RefKeys { keys: vec![] }
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn insert(&mut self, key: i64) {
        // duplicates go after the existing copies.
        let pos = self.keys.iter().take_while(|k| **k <= key).count();
        self.keys.insert(pos, key);
    }

    fn delete(&mut self, key: i64) -> bool {
        match self.keys.iter().position(|k| *k == key) {
            Some(pos) => {
                self.keys.remove(pos);
                true
            }
            None => false,
        }
    }

    fn contains(&self, key: i64) -> bool {
        self.keys.contains(&key)
    }

    fn min(&self) -> Option<i64> {
        self.keys.first().cloned()
    }

    fn max(&self) -> Option<i64> {
        self.keys.last().cloned()
    }

    fn successor(&self, key: i64) -> Option<i64> {
        if !self.contains(key) {
            return None;
        }
        self.keys.iter().find(|k| **k > key).cloned()
    }

    fn predecessor(&self, key: i64) -> Option<i64> {
        if !self.contains(key) {
            return None;
        }
        self.keys.iter().rev().find(|k| **k < key).cloned()
    }

    fn iter(&self) -> std::vec::IntoIter<i64> {
        self.keys.clone().into_iter()
    }

    fn range(&self, low: Bound<i64>, high: Bound<i64>) -> std::vec::IntoIter<i64> {
        self.keys
            .iter()
            .filter(|k| within(**k, low, high))
            .cloned()
            .collect::<Vec<i64>>()
            .into_iter()
    }

    fn reverse(&self, low: Bound<i64>, high: Bound<i64>) -> std::vec::IntoIter<i64> {
        self.keys
            .iter()
            .rev()
            .filter(|k| within(**k, low, high))
            .cloned()
            .collect::<Vec<i64>>()
            .into_iter()
    }
}

fn within(key: i64, low: Bound<i64>, high: Bound<i64>) -> bool {
    let low_ok = match low {
        Bound::Included(low) => key >= low,
        Bound::Excluded(low) => key > low,
        Bound::Unbounded => true,
    };
    let high_ok = match high {
        Bound::Included(high) => key <= high,
        Bound::Excluded(high) => key < high,
        Bound::Unbounded => true,
    };
    low_ok && high_ok
}

fn random_low_high(size: usize) -> (Bound<i64>, Bound<i64>) {
    let size = size as u64;
    let low = (random::<u64>() % size) as i64;
    let high = (random::<u64>() % size) as i64;
    let low = match random::<u8>() % 3 {
        0 => Bound::Included(low),
        1 => Bound::Excluded(low),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    let high = match random::<u8>() % 3 {
        0 => Bound::Included(high),
        1 => Bound::Excluded(high),
        2 => Bound::Unbounded,
        _ => unreachable!(),
    };
    (low, high)
}

fn height_bound(n: usize) -> f64 {
    2.0 * ((n + 1) as f64).log2()
}
