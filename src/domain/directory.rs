use derive_more::{Deref, Display, From};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::Id;

/// 車両の燃費 (mpg)
pub const MILEAGE: [i64; 34] = [
    18, 21, 20, 21, 16, 18, 18, 18, 16, 20, 19, 15, 17, 17, 15, 15, 17, 16, 14, 11, 14, 13, 12, 16,
    15, 16, 15, 15, 14, 11, 11, 14, 19, 22,
];

pub static EMPLOYEES: Lazy<Directory<EmployeeId, String>> = Lazy::new(|| {
    [
        (123_u32, "Bob"),
        (124, "Susan"),
        (128, "Abby"),
        (125, "Henry"),
        (126, "Edward"),
        (127, "James"),
    ]
    .into_iter()
    .map(|(number, name)| (EmployeeId::from(number), name.to_owned()))
    .collect()
});

/// 従業員番号
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct EmployeeId(u32);

impl Id for EmployeeId {
    type Inner = u32;
}

/// 挿入順を保持する対応表
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directory<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: PartialEq, V> Directory<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 末尾に追加する。既存のキーは位置を保ったまま値を置き換え、旧い値を返す
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: PartialEq + Clone, V: Clone> Directory<K, V> {
    pub fn keys(&self) -> Vec<K> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn values(&self) -> Vec<V> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    /// キー一覧と値一覧を同じ並びで返す
    pub fn split(&self) -> (Vec<K>, Vec<V>) {
        self.entries.iter().cloned().unzip()
    }
}

impl<K: PartialEq, V> Default for Directory<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Directory<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut directory = Self::new();
        for (k, v) in iter {
            directory.insert(k, v);
        }
        directory
    }
}

impl<K, V> IntoIterator for Directory<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employees_order() {
        let (numbers, names) = EMPLOYEES.split();
        assert_eq!(
            numbers.iter().map(|n| **n).collect::<Vec<_>>(),
            vec![123, 124, 128, 125, 126, 127]
        );
        assert_eq!(
            names,
            vec!["Bob", "Susan", "Abby", "Henry", "Edward", "James"]
        );
        assert_eq!(numbers, EMPLOYEES.keys());
        assert_eq!(names, EMPLOYEES.values());
    }

    #[test]
    fn test_keys_values_parallel() {
        let (numbers, names) = EMPLOYEES.split();
        for (number, name) in numbers.iter().zip(names.iter()) {
            assert_eq!(EMPLOYEES.get(number), Some(name));
        }
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut directory = Directory::new();
        assert_eq!(directory.insert("a", 1), None);
        assert_eq!(directory.insert("b", 2), None);
        assert_eq!(directory.insert("a", 3), Some(1));
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.keys(), vec!["a", "b"]);
        assert_eq!(directory.values(), vec![3, 2]);
    }

    #[test]
    fn test_empty_directory() {
        let directory: Directory<EmployeeId, String> = Directory::default();
        assert!(directory.is_empty());
        assert_eq!(directory.split(), (vec![], vec![]));
        assert_eq!(directory.get(&EmployeeId::from(1)), None);
    }
}
