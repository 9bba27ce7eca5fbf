//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;

mod providers;

use providers::ProviderClient;

/// LLM客户端 - 提供统一的LLM服务接口
///
/// 每个生成操作只做单次尝试：第一阶段失败即致命，
/// 第二阶段失败由补全侧的占位兜底接管，二者都不需要重试。
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 数据提取方法 - schema约束的结构化输出（不授予搜索工具）
    pub async fn extract<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<T>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static,
    {
        let llm_config = &self.config.llm;
        let extractor =
            self.client
                .create_extractor::<T>(&llm_config.model_fast, system_prompt, llm_config);

        extractor.extract(user_prompt).await
    }

    /// 搜索增强的单轮对话 - 返回自由文本
    ///
    /// 搜索接地与严格输出schema互斥，响应不保证是规整JSON，
    /// 由调用方自行做宽容提取。
    pub async fn prompt_with_search(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let llm_config = &self.config.llm;
        let agent = self.client.create_search_agent(
            &llm_config.model_grounded,
            system_prompt,
            llm_config,
        );

        agent.prompt(user_prompt).await
    }
}
