//! データベースアクセス層
//!
//! SQLiteベースのデータ永続化

/// ウェブサイト管理
pub mod websites;
