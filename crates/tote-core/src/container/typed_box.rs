//! TypedBox - 型付きの順序付きコンテナ
//!
//! # 学習ポイント
//! - ジェネリック struct (`TypedBox<T>`)
//! - 内部の `Vec<T>` を外に `&mut` で漏らさない所有権設計
//! - `Extend` / `FromIterator` は `add` の繰り返しとして定義

use std::slice;

/// TypedBox は型 `T` の要素を挿入順に保持する
///
/// # 使用例
/// ```
/// use tote_core::TypedBox;
///
/// let mut b = TypedBox::new();
/// b.add("a");
/// b.add("b");
/// assert_eq!(b.size(), 2);
/// ```
///
/// # Invariants
/// - `size()` は成功した `add` の回数と常に一致する
/// - `add` は既存要素を変更・削除しない
/// - 内部 sequence への可変参照は公開しない
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedBox<T> {
    items: Vec<T>,
}

impl<T> TypedBox<T> {
    /// Create an empty box.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty box with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append `item` as the new last element.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element added `index`-th (0-based), if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for TypedBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for TypedBox<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for TypedBox<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut boxed = Self::new();
        boxed.extend(iter);
        boxed
    }
}

impl<'a, T> IntoIterator for &'a TypedBox<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_box_is_empty() {
        let b: TypedBox<String> = TypedBox::new();
        assert_eq!(b.size(), 0);
        assert!(b.is_empty());
    }

    #[test]
    fn add_strings_counts_two() {
        let mut b = TypedBox::new();
        b.add("a");
        b.add("b");
        assert_eq!(b.size(), 2);
    }

    #[test]
    fn add_ints_counts_three() {
        let mut b = TypedBox::new();
        b.add(1);
        b.add(2);
        b.add(3);
        assert_eq!(b.size(), 3);
    }

    #[rstest]
    #[case::none(0)]
    #[case::one(1)]
    #[case::many(17)]
    fn size_equals_number_of_adds(#[case] n: usize) {
        let mut b = TypedBox::new();
        for i in 0..n {
            b.add(i);
        }
        assert_eq!(b.size(), n);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut b = TypedBox::new();
        b.add("x");
        b.add("x");
        assert_eq!(b.size(), 2);
        assert_eq!(b.iter().filter(|s| **s == "x").count(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut b = TypedBox::new();
        for s in ["c", "a", "b"] {
            b.add(s.to_string());
        }
        let items: Vec<&str> = b.iter().map(String::as_str).collect();
        assert_eq!(items, vec!["c", "a", "b"]);
        assert_eq!(b.get(0).map(String::as_str), Some("c"));
        assert_eq!(b.get(3), None);
    }

    #[test]
    fn add_leaves_prior_elements_untouched() {
        let mut b: TypedBox<i32> = (1..=4).collect();
        let before: Vec<i32> = b.iter().copied().collect();

        b.add(99);

        assert_eq!(&b.iter().copied().collect::<Vec<_>>()[..4], &before[..]);
        assert_eq!(b.get(4), Some(&99));
    }

    #[test]
    fn extend_counts_every_item() {
        let mut b = TypedBox::with_capacity(2);
        b.add(0u8);
        b.extend(vec![1, 2, 3]);
        assert_eq!(b.size(), 4);
        assert_eq!((&b).into_iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(TypedBox::<bool>::default(), TypedBox::new());
    }
}
