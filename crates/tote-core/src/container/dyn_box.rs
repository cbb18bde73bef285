//! DynBox - テキスト境界用の object-safe なコンテナ抽象
//!
//! 表層の `TypedBox<T>` は型で要素を制約します。
//! 型情報を持たない入力（CLI 引数など）は `DynBox` 経由で受け取り、
//! `add_raw` の時点で実行時に型チェックします。

use tracing::debug;

use super::element::Element;
use super::typed_box::TypedBox;
use crate::error::ContainerError;

/// DynBox は型消去された TypedBox
///
/// # Object Safety
/// - メソッドはジェネリックではない
/// - `Box<dyn DynBox>` として保持できる
pub trait DynBox {
    /// Element kind name, e.g. `"int"`.
    fn kind(&self) -> &'static str;

    /// Parse `raw` as the element type and append it.
    ///
    /// On a parse failure the box is left unchanged.
    fn add_raw(&mut self, raw: &str) -> Result<(), ContainerError>;

    fn size(&self) -> usize;

    /// Debug form of each element, in insertion order.
    fn render(&self) -> Vec<String>;
}

impl<T: Element> DynBox for TypedBox<T> {
    fn kind(&self) -> &'static str {
        T::KIND
    }

    fn add_raw(&mut self, raw: &str) -> Result<(), ContainerError> {
        let item = raw.parse::<T>().map_err(|_| ContainerError::TypeMismatch {
            expected: T::KIND,
            value: raw.to_string(),
        })?;
        debug!(kind = T::KIND, value = raw, "add");
        self.add(item);
        Ok(())
    }

    fn size(&self) -> usize {
        TypedBox::size(self)
    }

    fn render(&self) -> Vec<String> {
        self.iter().map(|item| format!("{item:?}")).collect()
    }
}
