//! 第二阶段：搜索增强的市场数据补全
//!
//! 单次授予搜索能力的请求。响应视为不可信自由文本，经宽容提取后按字段
//! 合并进基线结果；任何失败都在本阶段内部消化为占位记录兜底，
//! 绝不向调用方上抛，保证结果始终处于可展示状态。

use crate::comparison::backend::ComparisonBackend;
use crate::comparison::merge::merge_enrichment;
use crate::comparison::types::{ComparisonResult, EnrichmentPayload, VehicleEnrichment};
use crate::geo::LocationContext;
use crate::llm::extraction::{self, ExtractionError};

const SYSTEM_PROMPT: &str = "You are an automotive market researcher with live web search access. You gather current market data, pricing, ratings, listings and imagery for vehicles and return them as a single JSON object.";

/// 提示词中内嵌的参考结构 - 搜索接地下无法启用严格schema，只能以示例约束
const ENRICHMENT_STRUCTURE: &str = r#"{
  "vehicleA": {
    "imageUrl": "URL_STRING (Wikimedia or Manufacturer)",
    "market": {
      "resaleValuePrediction": "STRING",
      "marketSentiment": "STRING",
      "targetAudience": "STRING",
      "averagePriceUsed": "STRING",
      "averagePriceNew": "STRING"
    },
    "ratings": {
      "safetyRating": "STRING",
      "reliabilityScore": "STRING"
    },
    "financials": {
      "estimatedInsuranceCost": "STRING",
      "typicalBankRate": "STRING",
      "monthlyPaymentEstimate": "STRING",
      "listingsSample": [
        {
          "title": "STRING",
          "price": "STRING",
          "source": "STRING",
          "url": "STRING",
          "isBestDeal": true
        }
      ]
    },
    "newsHeadlines": [
      {
        "title": "STRING",
        "snippet": "STRING",
        "source": "STRING"
      }
    ]
  },
  "vehicleB": {}
}"#;

/// 第二阶段失败的具体原因 - 仅在本阶段内部流转，不跨越模块边界
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentFailure {
    #[error("补全请求失败: {0}")]
    Request(anyhow::Error),
    #[error("模型未返回任何文本")]
    EmptyResponse,
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// 第二阶段的收尾方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// 搜索数据成功合并
    Merged,
    /// 失败后以占位记录兜底，结果仍可展示
    Fallback,
}

/// 市场数据补全解析器
#[derive(Default)]
pub struct EnrichmentResolver;

impl EnrichmentResolver {
    /// 构建第二阶段用户提示词 - 车辆名称以第一阶段解析结果为准
    pub fn user_prompt(result: &ComparisonResult, location: &str) -> String {
        let location = LocationContext::new(location);
        format!(
            r#"For vehicles "{}" and "{}" in location: {}:
1. FIND REAL IMAGES (Wikimedia preferred).
2. FIND 3 ACTIVE LISTINGS with URLs. Mark the single best value listing as 'isBestDeal': true.
3. ANALYZE MARKET prices (New vs Used) in the local currency.
4. FIND Safety Ratings (NHTSA/IIHS or Euro NCAP depending on region) and Reliability Scores.
5. GET FINANCIAL estimates in local currency.

Use web search.

CRITICAL: Return ONLY a valid JSON object. Do not include any Markdown formatting (no ```json blocks).
The JSON must strictly match this structure ("vehicleB" has the same structure as "vehicleA"):
{}"#,
            result.vehicle_a.name, result.vehicle_b.name, location, ENRICHMENT_STRUCTURE,
        )
    }

    /// 执行市场数据补全 - 无论成败，返回时结果均处于可展示状态
    pub async fn enrich<B>(
        backend: &B,
        location: &str,
        result: &mut ComparisonResult,
    ) -> EnrichmentOutcome
    where
        B: ComparisonBackend,
    {
        let user_prompt = Self::user_prompt(result, location);
        let outcome = match backend.prompt_grounded(SYSTEM_PROMPT, &user_prompt).await {
            Ok(text) => Self::apply_response(result, &text),
            Err(e) => Err(EnrichmentFailure::Request(e)),
        };

        match outcome {
            Ok(()) => EnrichmentOutcome::Merged,
            Err(failure) => {
                eprintln!("⚠️ 市场数据补全失败，以占位数据兜底: {}", failure);
                Self::apply_placeholders(result);
                EnrichmentOutcome::Fallback
            }
        }
    }

    /// 将响应文本经宽容提取后合并进结果
    pub fn apply_response(
        result: &mut ComparisonResult,
        text: &str,
    ) -> Result<(), EnrichmentFailure> {
        if text.trim().is_empty() {
            return Err(EnrichmentFailure::EmptyResponse);
        }

        let payload: EnrichmentPayload = extraction::parse_loose(text)?;
        merge_enrichment(&mut result.vehicle_a, payload.vehicle_a);
        merge_enrichment(&mut result.vehicle_b, payload.vehicle_b);
        Ok(())
    }

    /// 为两侧车辆合并占位补全记录
    pub fn apply_placeholders(result: &mut ComparisonResult) {
        merge_enrichment(&mut result.vehicle_a, VehicleEnrichment::placeholder());
        merge_enrichment(&mut result.vehicle_b, VehicleEnrichment::placeholder());
    }
}
