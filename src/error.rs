//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("输入文件不存在: {0}")]
    SourceNotFound(String),

    #[error("顶点 {v} 超出范围 [0, {max})")]
    VertexOutOfRange { v: usize, max: usize },

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
