//! User Dict Queries - 辞書の読み取り操作

/// 登録済み単語の一覧を取得する
#[derive(Debug, Clone)]
pub struct ListUserDictWords;
