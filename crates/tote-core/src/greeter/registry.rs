//! GreeterRegistry - 名前付き Greeter の登録と管理
//!
//! # 学習ポイント
//! - HashMap での型消去された trait object の管理
//! - Arc による共有所有権

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::capability::{Greeter, HelloGreeter};
use crate::error::RegistryError;

/// GreeterRegistry は style 名で Greeter を引けるようにする
///
/// # 使用例
/// ```
/// use tote_core::{Greeter, GreeterRegistry, TemplateGreeter};
///
/// let mut registry = GreeterRegistry::with_defaults();
/// registry.register("formal", TemplateGreeter::new("Good day, ", "."))?;
///
/// let g = registry.get("formal").unwrap();
/// assert_eq!(g.greet("Ada"), "Good day, Ada.");
/// # Ok::<(), tote_core::RegistryError>(())
/// ```
#[derive(Default)]
pub struct GreeterRegistry {
    greeters: HashMap<String, Arc<dyn Greeter>>,
}

impl GreeterRegistry {
    pub const DEFAULT_STYLE: &'static str = "hello";

    pub fn new() -> Self {
        Self {
            greeters: HashMap::new(),
        }
    }

    /// Registry holding `"hello"` -> [`HelloGreeter`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .greeters
            .insert(Self::DEFAULT_STYLE.to_string(), Arc::new(HelloGreeter));
        registry
    }

    /// Register `greeter` under `name`. The first registration wins.
    pub fn register<G: Greeter + 'static>(
        &mut self,
        name: impl Into<String>,
        greeter: G,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.greeters.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        debug!(style = %name, "greeter registered");
        self.greeters.insert(name, Arc::new(greeter));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Greeter>> {
        self.greeters.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.greeters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.greeters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.greeters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeter::{FnGreeter, TemplateGreeter};

    #[test]
    fn register_and_get() {
        let mut registry = GreeterRegistry::new();
        registry.register("hi", FnGreeter(|n: &str| format!("hi {n}"))).unwrap();

        let g = registry.get("hi").unwrap();
        assert_eq!(g.greet("bob"), "hi bob");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn double_registration_keeps_first() {
        let mut registry = GreeterRegistry::new();
        registry.register("x", TemplateGreeter::new("1:", "")).unwrap();
        let result = registry.register("x", TemplateGreeter::new("2:", ""));

        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(name)) if name == "x"));
        assert_eq!(registry.get("x").unwrap().greet("a"), "1:a");
    }

    #[test]
    fn defaults_contain_hello() {
        let registry = GreeterRegistry::with_defaults();
        assert_eq!(registry.names(), vec![GreeterRegistry::DEFAULT_STYLE.to_string()]);
        let g = registry.get("hello").unwrap();
        assert_eq!(g.greet("World"), "Hello, World");
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = GreeterRegistry::with_defaults();
        registry.register("zed", HelloGreeter).unwrap();
        registry.register("alpha", HelloGreeter).unwrap();
        assert_eq!(registry.names(), vec!["alpha", "hello", "zed"]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }
}
