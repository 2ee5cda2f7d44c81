//! Card Queries

/// 列出所有卡片查询
#[derive(Debug, Clone)]
pub struct ListCards;
