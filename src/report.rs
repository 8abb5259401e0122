use std::fmt::Display;

use crate::domain::{directory::Directory, statistics::Summary};

pub fn render_summary(summary: &Summary) -> String {
    summary.to_string()
}

pub fn render_directory<K, V>(directory: &Directory<K, V>) -> String
where
    K: PartialEq + Clone + Display,
    V: PartialEq + Clone + Display,
{
    let (keys, values) = directory.split();
    format!(
        "List of employee numbers: {}\nList of employee names: {}",
        list(&keys),
        list(&values)
    )
}

fn list<T: Display>(items: &[T]) -> String {
    let items = items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", items)
}
