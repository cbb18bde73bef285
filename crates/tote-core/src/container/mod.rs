//! Container - 型付きコンテナ API
//!
//! # 二層構造
//! - **表層（Typed）**: `TypedBox<T>` - 型安全、要素型はコンパイル時に固定
//! - **内部（Dyn）**: `DynBox` trait - object-safe、テキスト境界で実行時に型チェック

pub mod typed_box;
pub mod element;
pub mod dyn_box;

pub use self::typed_box::TypedBox;
pub use self::element::{Element, ElementKind};
pub use self::dyn_box::DynBox;
