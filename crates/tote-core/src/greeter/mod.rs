//! Greeter - 挨拶 capability
//!
//! - **capability**: `Greeter` trait と標準実装（HelloGreeter, TemplateGreeter, FnGreeter）
//! - **registry**: style 名 -> `Arc<dyn Greeter>`
//! - **config**: TemplateGreeter の設定（JSON から読める）

pub mod capability;
pub mod registry;
pub mod config;

pub use self::capability::{FnGreeter, Greeter, HelloGreeter, TemplateGreeter};
pub use self::registry::GreeterRegistry;
pub use self::config::GreeterConfig;
