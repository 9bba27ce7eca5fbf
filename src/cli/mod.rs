use crate::comparison::types::ComparisonRequest;
use crate::config::{Config, LLMProvider};
use crate::geo::LocationContext;
use clap::Parser;
use std::path::PathBuf;

/// AutoArena - 由Rust与AI驱动的车辆对比引擎
#[derive(Parser, Debug)]
#[command(name = "AutoArena")]
#[command(
    about = "AI-based vehicle comparison engine. Enter two vehicles and get a progressive side-by-side comparison: specifications, pros/cons and an expert verdict first, then search-grounded market data, ratings and live listings."
)]
#[command(version)]
pub struct Args {
    /// 第一辆车（自由文本，如 "Toyota Camry"）
    pub vehicle_a: String,

    /// 第二辆车（自由文本，如 "Honda Accord"）
    pub vehicle_b: String,

    /// 地区描述（自由文本，仅用于选择单位制与货币）
    #[arg(short, long)]
    pub location: Option<String>,

    /// 纬度（与--lon配合使用，替代--location）
    #[arg(long)]
    pub lat: Option<f64>,

    /// 经度（与--lat配合使用，替代--location）
    #[arg(long)]
    pub lon: Option<f64>,

    /// 对比报告输出路径
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// LLM Provider (openai, deepseek, openrouter, anthropic, gemini, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 快速模型，用于第一阶段的规格基线生成
    #[arg(long)]
    pub model_fast: Option<String>,

    /// 搜索增强模型，用于第二阶段的市场数据补全
    #[arg(long)]
    pub model_grounded: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 汇总CLI中与一次对比请求相关的输入
    pub fn request(&self) -> ComparisonRequest {
        let location = LocationContext::resolve(self.location.as_deref(), self.lat, self.lon);
        ComparisonRequest {
            vehicle_a: self.vehicle_a.trim().to_string(),
            vehicle_b: self.vehicle_b.trim().to_string(),
            location: location.description().to_string(),
        }
    }

    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Config {
        let mut config = if let Some(config_path) = &self.config {
            // 如果显式指定了配置文件路径，从该路径加载
            Config::from_file(config_path).unwrap_or_else(|_| {
                panic!("⚠️ 警告: 无法读取配置文件 {:?}", config_path)
            })
        } else {
            // 如果没有显式指定配置文件，尝试从默认位置加载
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| std::path::PathBuf::from("."))
                .join("autoarena.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).unwrap_or_else(|_| {
                    panic!(
                        "⚠️ 警告: 无法读取默认配置文件 {:?}",
                        default_config_path
                    )
                })
            } else {
                // 默认配置文件不存在，使用默认值
                Config::default()
            }
        };

        // CLI参数优先级最高，覆盖配置文件中的设置
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model_fast) = self.model_fast {
            config.llm.model_fast = model_fast;
        }
        if let Some(model_grounded) = self.model_grounded {
            config.llm.model_grounded = model_grounded;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        config.verbose = self.verbose;

        config
    }
}
