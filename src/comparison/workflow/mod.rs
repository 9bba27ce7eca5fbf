//! 两阶段对比编排
//!
//! 时序契约：第二阶段必须在第一阶段成功发布之后才开始；第一阶段失败则
//! 第二阶段永不执行，整个操作以失败告终且不发布任何结果。快乐路径恰好
//! 发布两次；补全降级时第二次发布携带占位记录，同样计为补全"完成"。

use anyhow::Result;

use crate::comparison::backend::ComparisonBackend;
use crate::comparison::enrichment::EnrichmentResolver;
use crate::comparison::spec_resolver::{SpecGenerationError, SpecResolver};
use crate::comparison::types::{ComparisonRequest, ComparisonResult};
use crate::config::Config;
use crate::llm::client::LLMClient;
use crate::outlet;

/// 执行一次完整的两阶段车辆对比
///
/// 每个阶段结束后同步调用一次`on_update`，参数为当前最新的对比结果。
pub async fn compare<B, F>(
    backend: &B,
    request: &ComparisonRequest,
    mut on_update: F,
) -> Result<ComparisonResult, SpecGenerationError>
where
    B: ComparisonBackend,
    F: FnMut(&ComparisonResult),
{
    // 第一阶段：规格基线。失败即致命，不发布任何结果
    let mut result = SpecResolver::resolve(backend, request).await?;
    on_update(&result);

    // 第二阶段：市场数据补全。失败在阶段内部兜底，结果始终可展示
    EnrichmentResolver::enrich(backend, &request.location, &mut result).await;
    on_update(&result);

    Ok(result)
}

/// 启动CLI对比工作流
pub async fn launch(config: &Config, request: &ComparisonRequest) -> Result<()> {
    let llm_client = LLMClient::new(config.clone())?;

    println!(
        "🚗 AutoArena 开始对比: {} vs {}",
        request.vehicle_a, request.vehicle_b
    );
    if config.verbose {
        println!("📍 地区上下文: {}", request.location);
        println!("🧠 Provider: {}", config.llm.provider);
    }

    let mut publishes = 0u32;
    let result = compare(&llm_client, request, |snapshot| {
        publishes += 1;
        match publishes {
            1 => println!(
                "✅ 规格基线就绪: {} vs {}",
                snapshot.vehicle_a.name, snapshot.vehicle_b.name
            ),
            _ => println!("✅ 市场数据阶段完成"),
        }
    })
    .await?;

    let report_path = outlet::save(config, &result)?;
    println!("📄 对比报告已生成: {}", report_path.display());

    Ok(())
}
