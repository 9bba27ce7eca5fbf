use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 占位哨兵值 - 补全失败时填充描述性字段
pub const UNAVAILABLE: &str = "Data unavailable";
/// 占位哨兵值 - 补全失败时填充数值类字段
pub const NOT_APPLICABLE: &str = "N/A";

/// 一次对比请求的输入 - 两个车辆名称与地区描述，均为未经校验的自由文本
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    pub vehicle_a: String,
    pub vehicle_b: String,
    pub location: String,
}

/// 技术规格 - 第一阶段产出后不再变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpecs {
    pub engine: String,
    pub horsepower: String,
    pub torque: String,
    pub transmission: String,
    pub drivetrain: String,
    pub zero_to_sixty: String,
    pub mpg: String,
    pub weight: String,
    pub dimensions: String,
    pub cargo_space: String,
}

/// 市场分析数据（第二阶段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    /// 保值预测，如 "Retains 60% after 3 years"
    pub resale_value_prediction: String,
    /// 市场情绪，如 "High demand"、"Oversaturated"
    pub market_sentiment: String,
    pub target_audience: String,
    pub average_price_used: String,
    pub average_price_new: String,
}

/// 安全与可靠性评级（第二阶段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInfo {
    pub safety_rating: String,
    pub reliability_score: String,
}

/// 在售车源条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub title: String,
    pub price: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 建议性标记 - 每辆车至多一条车源应携带，不做强制校验
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_best_deal: Option<bool>,
}

/// 金融估算数据（第二阶段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInfo {
    pub estimated_insurance_cost: String,
    /// 如 "5.5% - 7.0%"
    pub typical_bank_rate: String,
    pub monthly_payment_estimate: String,
    #[serde(default)]
    pub listings_sample: Vec<Listing>,
}

/// 新闻标题条目（第二阶段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsHeadline {
    pub title: String,
    pub snippet: String,
    pub source: String,
}

/// 单辆车的完整对比记录
///
/// `name` 自第一阶段起保持不变；可选字段只会从缺失单调过渡到存在，
/// 第二阶段失败时以占位记录填充而非回退到缺失。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleData {
    pub name: String,
    pub specs: VehicleSpecs,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financials: Option<FinancialInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings: Option<RatingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_headlines: Option<Vec<NewsHeadline>>,
}

/// 对比结果 - 贯穿两个阶段的唯一可变对象
///
/// 由第一阶段创建，第二阶段原地按字段合并；`verdict` 只在第一阶段写入。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub vehicle_a: VehicleData,
    pub vehicle_b: VehicleData,
    pub verdict: String,
}

/// 第一阶段的单车输出 schema - 不含任何第二阶段字段
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaselineVehicle {
    pub name: String,
    pub specs: VehicleSpecs,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

/// 第一阶段的结构化输出 schema
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BaselineComparison {
    pub vehicle_a: BaselineVehicle,
    pub vehicle_b: BaselineVehicle,
    /// 基于规格对两车的平衡性专家结论
    pub verdict: String,
}

impl VehicleData {
    fn from_baseline(vehicle: BaselineVehicle) -> Self {
        Self {
            name: vehicle.name,
            specs: vehicle.specs,
            pros: vehicle.pros,
            cons: vehicle.cons,
            image_url: None,
            market: None,
            financials: None,
            ratings: None,
            news_headlines: None,
        }
    }
}

impl From<BaselineComparison> for ComparisonResult {
    fn from(baseline: BaselineComparison) -> Self {
        Self {
            vehicle_a: VehicleData::from_baseline(baseline.vehicle_a),
            vehicle_b: VehicleData::from_baseline(baseline.vehicle_b),
            verdict: baseline.verdict,
        }
    }
}

/// 第二阶段补全载荷中单辆车的解析目标
///
/// 搜索接地的响应不保证遵循严格 schema，因此所有字段均为可选；
/// 载荷中缺失的键在合并时保持既有值不变。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleEnrichment {
    /// 部分 schema 版本会重申车辆名称；仅作再确认，不会覆盖第一阶段的权威值
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub market: Option<MarketData>,
    pub ratings: Option<RatingInfo>,
    pub financials: Option<FinancialInfo>,
    pub news_headlines: Option<Vec<NewsHeadline>>,
}

impl VehicleEnrichment {
    /// 占位补全记录 - 第二阶段失败时的兜底
    ///
    /// 所有描述性字段填充非空哨兵值，车源与新闻序列为空集合；
    /// 图片地址保持缺失，由展示侧的图片兜底机制接管。
    pub fn placeholder() -> Self {
        Self {
            name: None,
            image_url: None,
            market: Some(MarketData {
                resale_value_prediction: UNAVAILABLE.to_string(),
                market_sentiment: UNAVAILABLE.to_string(),
                target_audience: UNAVAILABLE.to_string(),
                average_price_used: NOT_APPLICABLE.to_string(),
                average_price_new: NOT_APPLICABLE.to_string(),
            }),
            ratings: Some(RatingInfo {
                safety_rating: NOT_APPLICABLE.to_string(),
                reliability_score: NOT_APPLICABLE.to_string(),
            }),
            financials: Some(FinancialInfo {
                estimated_insurance_cost: NOT_APPLICABLE.to_string(),
                typical_bank_rate: NOT_APPLICABLE.to_string(),
                monthly_payment_estimate: NOT_APPLICABLE.to_string(),
                listings_sample: Vec::new(),
            }),
            news_headlines: Some(Vec::new()),
        }
    }
}

/// 第二阶段补全载荷 - 两侧子对象缺一即视为解析失败
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentPayload {
    pub vehicle_a: VehicleEnrichment,
    pub vehicle_b: VehicleEnrichment,
}
