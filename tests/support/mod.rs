// tests/support/mod.rs
// 複数の統合テストバイナリで共有するテスト専用コード。
// テストごとに未使用のシンボルがあるため、モジュール単位で警告を抑制する。
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
