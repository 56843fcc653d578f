//! Club Server - 俱乐部会籍与宾客管理服务
//!
//! # 架构概述
//!
//! 本模块是俱乐部边缘服务的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx, WAL)
//! - **表单控制器** (`forms`): 宾客入住/退房状态机与房间同步副作用
//! - **HTTP API** (`api`): RESTful 接口 + `/api/method/...` RPC 端点
//!
//! # 模块结构
//!
//! ```text
//! club-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── forms/         # 表单状态控制器 (纯函数 + 副作用命令)
//! ├── db/            # 数据库层 (repository)
//! └── utils/         # 错误、日志、校验工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod forms;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ________      __
  / ____/ /_  __/ /_
 / /   / / / / / __ \
/ /___/ / /_/ / /_/ /
\____/_/\__,_/_.___/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在 [`Config::from_env`] 之前调用
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
