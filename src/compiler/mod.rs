//! 编译模块：将厂商规则编译为只读特征库
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledDetector, CompiledPattern, ElementQuery, Matcher, SignatureCatalog};
pub use self::compiler::{RuleCompiler, builtin_catalog};
