//! tote-core
//!
//! Building blocks for the `tote` tool.
//!
//! # モジュール構成
//! - **container**: 型付きコンテナ（`TypedBox<T>`）と実行時チェック付きの `DynBox`
//! - **greeter**: 挨拶 capability（`Greeter` trait, 実装, registry, config）
//! - **error**: エラー型（thiserror）
//!
//! 2 つのコンポーネントは互いに依存しない。

pub mod container;
pub mod greeter;
pub mod error;

pub use self::container::{DynBox, Element, ElementKind, TypedBox};
pub use self::error::{ContainerError, RegistryError, ToteError};
pub use self::greeter::{
    FnGreeter, Greeter, GreeterConfig, GreeterRegistry, HelloGreeter, TemplateGreeter,
};
