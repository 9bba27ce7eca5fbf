//! 生成能力边界 - 编排层只通过该trait访问模型服务

use anyhow::Result;
use async_trait::async_trait;

use crate::comparison::types::BaselineComparison;
use crate::llm::client::LLMClient;

/// 对比流程所需的两种生成能力
///
/// 与Provider细节解耦后，编排时序契约可以用桩实现独立验证。
#[async_trait]
pub trait ComparisonBackend: Send + Sync {
    /// 第一阶段：schema约束的结构化规格对比（不授予搜索工具）
    async fn extract_baseline(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<BaselineComparison>;

    /// 第二阶段：授予搜索能力的自由文本生成
    async fn prompt_grounded(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

#[async_trait]
impl ComparisonBackend for LLMClient {
    async fn extract_baseline(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<BaselineComparison> {
        self.extract::<BaselineComparison>(system_prompt, user_prompt)
            .await
    }

    async fn prompt_grounded(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.prompt_with_search(system_prompt, user_prompt).await
    }
}
