//! アプリケーション層 - コマンド（書き込み操作）
//!
//! CQRS のコマンド側。辞書・プリセットの変更と波形合成を扱う

mod dict_commands;
mod preset_commands;
mod synthesis_commands;

pub mod handlers;

pub use dict_commands::*;
pub use preset_commands::*;
pub use synthesis_commands::*;
