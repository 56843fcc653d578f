use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 显式注入的数据访问上下文
///
/// ServerState 持有配置与数据库连接池，是所有 HTTP 处理器的共享状态。
/// 使用连接池的浅拷贝，Clone 成本极低。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config).await?;
/// let customers = customer::find_all(&state.pool).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保 database/ 和 logs/ 存在)
    /// 2. 数据库 (work_dir/database/club.db，自动执行迁移)
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_path = config.database_dir().join("club.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.pool))
    }

    /// 获取连接池
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }
}
