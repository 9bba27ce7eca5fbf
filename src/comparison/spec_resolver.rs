//! 第一阶段：规格基线生成
//!
//! 单次schema约束请求，不授予搜索工具。失败即致命，整个对比流程中止，
//! 不产生任何部分结果。

use crate::comparison::backend::ComparisonBackend;
use crate::comparison::types::{ComparisonRequest, ComparisonResult};
use crate::geo::LocationContext;

/// 第一阶段规格生成失败 - 致命错误，对比流程中止
#[derive(Debug, thiserror::Error)]
#[error("车辆规格基线生成失败: {source}")]
pub struct SpecGenerationError {
    #[from]
    source: anyhow::Error,
}

const SYSTEM_PROMPT: &str = "You are an expert automotive analyst. You compare vehicles strictly from your internal knowledge base and return structured, factual data.";

/// 规格基线解析器
#[derive(Default)]
pub struct SpecResolver;

impl SpecResolver {
    /// 构建第一阶段用户提示词
    pub fn user_prompt(request: &ComparisonRequest) -> String {
        let location = LocationContext::new(&request.location);
        format!(
            r#"Compare "{}" and "{}".
Context: User is located at: {}.
Provide technical specifications, 3 pros, 3 cons, and a verdict.
Do NOT search the web. Use your internal knowledge base.
{}"#,
            request.vehicle_a,
            request.vehicle_b,
            location,
            location.units_instruction(),
        )
    }

    /// 执行规格基线生成
    pub async fn resolve<B>(
        backend: &B,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResult, SpecGenerationError>
    where
        B: ComparisonBackend,
    {
        let user_prompt = Self::user_prompt(request);
        let baseline = backend.extract_baseline(SYSTEM_PROMPT, &user_prompt).await?;
        Ok(baseline.into())
    }
}
