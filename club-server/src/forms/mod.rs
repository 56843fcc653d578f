//! 表单状态控制器
//!
//! 原框架的字段变更钩子在这里变成显式的处理函数：每个处理函数接收当前
//! 记录状态，返回更新后的状态加上需要执行的副作用命令 (如 "更新房间 X")，
//! 副作用由 HTTP 处理器对 repository 执行，保持可观察、可测试。

pub mod guest_onboarding;
pub mod quotation;

pub use guest_onboarding::{FormNotice, SideEffect};
