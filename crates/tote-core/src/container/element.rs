//! Element trait - テキスト境界で扱える要素型の定義
//!
//! # 学習ポイント
//! - Associated Constants (`const KIND`)
//! - `FromStr` を trait bound に含めて文字列から要素を復元する

use std::fmt;
use std::str::FromStr;

use super::dyn_box::DynBox;
use super::typed_box::TypedBox;
use crate::error::ContainerError;

/// Element は要素型と kind 名を対応付ける
///
/// # Trait Bounds
/// - `FromStr`: CLI などの生テキストから値を作るため
/// - `Debug`: `DynBox::render` で要素を表示するため
/// - `'static`: `Box<dyn DynBox>` に格納できるため
pub trait Element: FromStr + fmt::Debug + 'static {
    const KIND: &'static str;
}

impl Element for i64 {
    const KIND: &'static str = "int";
}

impl Element for u64 {
    const KIND: &'static str = "uint";
}

impl Element for f64 {
    const KIND: &'static str = "float";
}

impl Element for bool {
    const KIND: &'static str = "bool";
}

impl Element for String {
    const KIND: &'static str = "str";
}

/// Runtime name of a box's element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Int,
    UInt,
    Float,
    Bool,
    Str,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Int,
        ElementKind::UInt,
        ElementKind::Float,
        ElementKind::Bool,
        ElementKind::Str,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Int => i64::KIND,
            ElementKind::UInt => u64::KIND,
            ElementKind::Float => f64::KIND,
            ElementKind::Bool => bool::KIND,
            ElementKind::Str => String::KIND,
        }
    }

    /// Create an empty box whose element type matches this kind.
    pub fn new_box(self) -> Box<dyn DynBox> {
        match self {
            ElementKind::Int => Box::new(TypedBox::<i64>::new()),
            ElementKind::UInt => Box::new(TypedBox::<u64>::new()),
            ElementKind::Float => Box::new(TypedBox::<f64>::new()),
            ElementKind::Bool => Box::new(TypedBox::<bool>::new()),
            ElementKind::Str => Box::new(TypedBox::<String>::new()),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ContainerError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::int("int", ElementKind::Int)]
    #[case::uint("uint", ElementKind::UInt)]
    #[case::float("float", ElementKind::Float)]
    #[case::bool("bool", ElementKind::Bool)]
    #[case::str("str", ElementKind::Str)]
    fn parses_known_kinds(#[case] input: &str, #[case] expected: ElementKind) {
        let kind: ElementKind = input.parse().unwrap();
        assert_eq!(kind, expected);
        assert_eq!(kind.to_string(), input);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "decimal".parse::<ElementKind>().unwrap_err();
        assert!(matches!(err, ContainerError::UnknownKind(k) if k == "decimal"));
    }

    #[test]
    fn new_box_reports_its_kind() {
        for kind in ElementKind::ALL {
            let b = kind.new_box();
            assert_eq!(b.kind(), kind.as_str());
            assert_eq!(b.size(), 0);
        }
    }
}
