//! SymGraph - 符号图库
//!
//! 为以名字（如机场代码）标识顶点的图数据提供支持：
//! - 字符串顶点名与稠密整数索引 0..V-1 的双向映射
//! - 按分隔符解析文本邻接表，两遍扫描构建无向图
//! - 名字查询接口，供依赖整数顶点的图算法直接使用

pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Graph, LoadStats, SymbolGraph};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
