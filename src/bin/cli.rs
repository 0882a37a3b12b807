//! SymGraph CLI 工具
//!
//! 交互式查询符号图：按顶点名列出相邻顶点名

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use symgraph::SymbolGraph;

#[derive(Parser, Debug)]
#[command(name = "symgraph-cli")]
#[command(about = "SymGraph 符号图查询工具")]
struct Args {
    /// 输入文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 字段分隔符
    #[arg(short, long, default_value = " ")]
    delimiter: String,

    /// 查询单个顶点名后退出
    #[arg(short = 'n', long)]
    name: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("SymGraph - 符号图查询工具");
    println!("==========================");

    let sg = SymbolGraph::from_path(&args.input, &args.delimiter)?;

    println!("已加载: {}", args.input.display());
    println!("  顶点数: {}", sg.graph().v());
    println!("  边数: {}", sg.graph().e());

    // 单次查询模式
    if let Some(name) = args.name {
        print_neighbors(&sg, &name)?;
        return Ok(());
    }

    // 交互模式
    println!("\n输入顶点名查询相邻顶点，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("symgraph> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit" | "q") {
            break;
        }

        print_neighbors(&sg, line)?;
    }

    println!("再见！");
    Ok(())
}

fn print_neighbors(sg: &SymbolGraph, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    match sg.index_of(name) {
        Some(v) => {
            for &w in sg.graph().adj(v)? {
                println!("  {}", sg.name_of(w)?);
            }
        }
        None => println!("未找到顶点: {}", name),
    }
    Ok(())
}
