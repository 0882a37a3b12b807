//! 符号图
//!
//! 字符串顶点名与稠密整数索引的双向映射，在索引之上构建无向图，
//! 使依赖整数顶点的图算法可以直接处理以名字标识的数据

use crate::error::{Error, Result};
use crate::graph::Graph;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// 加载统计
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoadStats {
    pub vertices: usize,
    pub edges: usize,
    pub lines: usize,
    pub duration_ms: u64,
}

/// 符号图
///
/// 每行一条记录：首字段为源顶点名，其余字段为相邻顶点名，
/// 字段之间由调用方指定的分隔符分开。索引按首次出现顺序分配。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolGraph {
    /// 名字到索引的映射（插入序即索引序）
    st: IndexMap<String, usize>,
    /// 索引到名字的映射
    keys: Vec<String>,
    /// 底层无向图
    graph: Graph,
    /// 加载统计
    stats: LoadStats,
}

impl SymbolGraph {
    /// 从文件加载符号图
    ///
    /// 文件无法打开时返回 [`Error::SourceNotFound`]，不会静默产生空图。
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::SourceNotFound(path.display().to_string()),
            _ => Error::IoError(e),
        })?;
        Self::from_reader(BufReader::new(file), delimiter)
    }

    /// 从任意文本流加载符号图
    ///
    /// 流不要求可重置：整个输入先缓冲进内存，两遍扫描在缓冲上进行。
    pub fn from_reader<R: BufRead>(reader: R, delimiter: &str) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_lines(&lines, delimiter)
    }

    /// 从内存中的行构建符号图
    pub fn from_lines<S: AsRef<str>>(lines: &[S], delimiter: &str) -> Result<Self> {
        let start = Instant::now();

        // 第一遍：为每个首次出现的字段分配下一个顺序索引
        let mut st: IndexMap<String, usize> = IndexMap::new();
        for line in lines {
            for field in line.as_ref().split(delimiter) {
                if !st.contains_key(field) {
                    let idx = st.len();
                    st.insert(field.to_string(), idx);
                }
            }
        }

        // 反向索引：插入序即索引序
        let keys: Vec<String> = st.keys().cloned().collect();
        debug!(vertices = keys.len(), "第一遍扫描完成，索引已建立");

        // 第二遍：每行首字段连向其余各字段
        let mut graph = Graph::new(st.len());
        for line in lines {
            let mut fields = line.as_ref().split(delimiter);
            if let Some(first) = fields.next() {
                let v = st[first];
                for name in fields {
                    graph.add_edge(v, st[name])?;
                }
            }
        }

        let stats = LoadStats {
            vertices: graph.v(),
            edges: graph.e(),
            lines: lines.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            vertices = stats.vertices,
            edges = stats.edges,
            lines = stats.lines,
            duration_ms = stats.duration_ms,
            "符号图加载完成"
        );

        Ok(Self {
            st,
            keys,
            graph,
            stats,
        })
    }

    /// 名字是否已登记为顶点
    pub fn contains(&self, name: &str) -> bool {
        self.st.contains_key(name)
    }

    /// 获取名字对应的索引
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.st.get(name).copied()
    }

    /// 获取索引对应的名字
    pub fn name_of(&self, v: usize) -> Result<&str> {
        self.validate_vertex(v)?;
        Ok(&self.keys[v])
    }

    /// 获取底层图的共享引用
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// 获取加载统计
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    // 校验 0 <= v < V，以底层图的顶点数为准
    fn validate_vertex(&self, v: usize) -> Result<()> {
        let max = self.graph.v();
        if v >= max {
            return Err(Error::VertexOutOfRange { v, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn routes() -> SymbolGraph {
        let lines = ["JFK LAX ORD", "LAX JFK"];
        SymbolGraph::from_lines(&lines, " ").unwrap()
    }

    #[test]
    fn test_index_assignment_order() {
        let sg = routes();

        // 索引按首次出现顺序分配
        assert_eq!(sg.graph().v(), 3);
        assert_eq!(sg.index_of("JFK"), Some(0));
        assert_eq!(sg.index_of("LAX"), Some(1));
        assert_eq!(sg.index_of("ORD"), Some(2));
    }

    #[test]
    fn test_round_trip() {
        let sg = routes();

        for v in 0..sg.graph().v() {
            let name = sg.name_of(v).unwrap();
            assert_eq!(sg.index_of(name), Some(v));
        }
    }

    #[test]
    fn test_contains() {
        let sg = routes();

        assert!(sg.contains("JFK"));
        assert!(sg.contains("ORD"));
        assert!(!sg.contains("SFO"));
        assert_eq!(sg.index_of("SFO"), None);
    }

    #[test]
    fn test_edge_symmetry() {
        let sg = routes();
        let jfk = sg.index_of("JFK").unwrap();
        let lax = sg.index_of("LAX").unwrap();
        let ord = sg.index_of("ORD").unwrap();

        assert!(sg.graph().adj(jfk).unwrap().contains(&lax));
        assert!(sg.graph().adj(jfk).unwrap().contains(&ord));
        assert!(sg.graph().adj(lax).unwrap().contains(&jfk));
        assert!(sg.graph().adj(ord).unwrap().contains(&jfk));
    }

    #[test]
    fn test_duplicate_edge_preserved() {
        let sg = routes();
        let jfk = sg.index_of("JFK").unwrap();
        let lax = sg.index_of("LAX").unwrap();

        // 第二行的 LAX JFK 与第一行的 JFK-LAX 重复，按多重图保留
        assert_eq!(sg.graph().e(), 3);
        let count = sg
            .graph()
            .adj(jfk)
            .unwrap()
            .iter()
            .filter(|&&w| w == lax)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_name_of_out_of_range() {
        let sg = routes();

        assert!(matches!(
            sg.name_of(3),
            Err(Error::VertexOutOfRange { v: 3, max: 3 })
        ));
        assert!(sg.name_of(usize::MAX).is_err());
    }

    #[test]
    fn test_single_field_line() {
        // 只有源顶点、没有邻居的行合法，产生顶点但不产生边
        let sg = SymbolGraph::from_lines(&["JFK"], " ").unwrap();

        assert_eq!(sg.graph().v(), 1);
        assert_eq!(sg.graph().e(), 0);
        assert_eq!(sg.index_of("JFK"), Some(0));
    }

    #[test]
    fn test_custom_delimiter() {
        let sg = SymbolGraph::from_lines(&["a,b,c", "b,c"], ",").unwrap();

        assert_eq!(sg.graph().v(), 3);
        assert_eq!(sg.graph().e(), 3);
        let b = sg.index_of("b").unwrap();
        let c = sg.index_of("c").unwrap();
        assert!(sg.graph().adj(b).unwrap().contains(&c));
    }

    #[test]
    fn test_from_reader() {
        // 不可重置的流：先缓冲再两遍扫描
        let sg = SymbolGraph::from_reader(Cursor::new("x y\ny z\n"), " ").unwrap();

        assert_eq!(sg.graph().v(), 3);
        assert_eq!(sg.graph().e(), 2);
        assert_eq!(sg.stats().lines, 2);
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "JFK LAX ORD").unwrap();
        writeln!(file, "LAX JFK").unwrap();

        let sg = SymbolGraph::from_path(file.path(), " ").unwrap();
        assert_eq!(sg.graph().v(), 3);
        assert_eq!(sg.graph().e(), 3);
        assert_eq!(sg.stats().vertices, 3);
        assert_eq!(sg.stats().edges, 3);
    }

    #[test]
    fn test_missing_file() {
        let err = SymbolGraph::from_path("/no/such/routes.txt", " ").unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }
}
