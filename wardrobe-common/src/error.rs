use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 衣橱模块共用的错误类型
///
/// 筛选本身没有失败路径，错误只出现在数据边界上：
/// 解析词表取值、校验目录数据、读写快照文件。
#[derive(Error, Debug)]
pub enum Error {
    #[error("未知的{field}取值: {value:?}")]
    UnknownValue { field: &'static str, value: String },

    #[error("重复的标识符: {0}")]
    DuplicateId(String),

    #[error("快照格式错误: {0}")]
    Snapshot(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("序列化失败: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("反序列化失败: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}
