//! 无向图数据结构
//!
//! 顶点为 0..V-1 的稠密整数，邻接表存储

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 无向图
///
/// 顶点数在构造时固定。重复添加同一条边会产生平行边（多重图），
/// 自环合法并在该顶点的邻接表中出现两次。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// 顶点数
    v: usize,
    /// 边数
    e: usize,
    /// 邻接表
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// 创建 v 个顶点、零条边的图
    pub fn new(v: usize) -> Self {
        Self {
            v,
            e: 0,
            adj: vec![Vec::new(); v],
        }
    }

    /// 获取顶点数
    pub fn v(&self) -> usize {
        self.v
    }

    /// 获取边数
    pub fn e(&self) -> usize {
        self.e
    }

    /// 添加无向边 v-w
    ///
    /// 边对称存储：w 进入 v 的邻接表，v 进入 w 的邻接表。
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.validate_vertex(v)?;
        self.validate_vertex(w)?;

        self.adj[v].push(w);
        self.adj[w].push(v);
        self.e += 1;

        Ok(())
    }

    /// 获取顶点的邻居
    pub fn adj(&self, v: usize) -> Result<&[usize]> {
        self.validate_vertex(v)?;
        Ok(&self.adj[v])
    }

    /// 获取顶点的度数
    pub fn degree(&self, v: usize) -> Result<usize> {
        self.validate_vertex(v)?;
        Ok(self.adj[v].len())
    }

    // 校验 0 <= v < V
    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v >= self.v {
            return Err(Error::VertexOutOfRange { v, max: self.v });
        }
        Ok(())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} 个顶点, {} 条边", self.v, self.e)?;
        for v in 0..self.v {
            write!(f, "{}:", v)?;
            for w in &self.adj[v] {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
