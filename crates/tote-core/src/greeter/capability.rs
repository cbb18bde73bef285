//! Greeter trait - 名前から挨拶文を作る capability
//!
//! # 学習ポイント
//! - 1 メソッドだけの flat な trait（継承階層なし）
//! - クロージャを `FnGreeter` で包んで Greeter にする
//! - `&G` / `Box<G>` / `Arc<G>` への転送 impl で `dyn Greeter` をそのまま使う

use std::sync::Arc;

/// Greeter は name を受け取って挨拶文を返す
///
/// # 使用例
/// ```
/// use tote_core::Greeter;
///
/// struct Shout;
///
/// impl Greeter for Shout {
///     fn greet(&self, name: &str) -> String {
///         format!("HEY {}!", name.to_uppercase())
///     }
/// }
///
/// assert_eq!(Shout.greet("bob"), "HEY BOB!");
/// ```
///
/// 文言の規約は trait では定めない。空文字列も有効な入力として扱うこと。
pub trait Greeter {
    fn greet(&self, name: &str) -> String;
}

impl<G: Greeter + ?Sized> Greeter for &G {
    fn greet(&self, name: &str) -> String {
        (**self).greet(name)
    }
}

impl<G: Greeter + ?Sized> Greeter for Box<G> {
    fn greet(&self, name: &str) -> String {
        (**self).greet(name)
    }
}

impl<G: Greeter + ?Sized> Greeter for Arc<G> {
    fn greet(&self, name: &str) -> String {
        (**self).greet(name)
    }
}

/// Adapts a closure into a [`Greeter`].
#[derive(Clone, Copy)]
pub struct FnGreeter<F>(pub F);

impl<F> Greeter for FnGreeter<F>
where
    F: Fn(&str) -> String,
{
    fn greet(&self, name: &str) -> String {
        (self.0)(name)
    }
}

/// `"Hello, " + name`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelloGreeter;

impl Greeter for HelloGreeter {
    fn greet(&self, name: &str) -> String {
        format!("Hello, {name}")
    }
}

/// `prefix + name + suffix`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGreeter {
    prefix: String,
    suffix: String,
}

impl TemplateGreeter {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Greeter for TemplateGreeter {
    fn greet(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + name.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(name);
        out.push_str(&self.suffix);
        out
    }
}
