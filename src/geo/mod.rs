//! 地区上下文 - 决定对比结果使用的单位制与货币

use serde::{Deserialize, Serialize};

/// 未提供任何定位信息时的固定默认地区描述
pub const DEFAULT_LOCATION: &str = "USA (Default)";

/// 用户地区描述
///
/// 仅作为提示词上下文传给模型以选择显示单位，不做地理编码。
/// 来源可以是自由文本、格式化的经纬度，或默认值兜底。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationContext {
    description: String,
}

impl Default for LocationContext {
    fn default() -> Self {
        Self {
            description: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl std::fmt::Display for LocationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl LocationContext {
    /// 由自由文本创建；空白输入退化为默认地区
    pub fn new(description: &str) -> Self {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self {
            description: trimmed.to_string(),
        }
    }

    /// 由经纬度创建，保留两位小数
    pub fn from_coordinates(lat: f64, lon: f64) -> Self {
        Self {
            description: format!("Lat: {:.2}, Lon: {:.2}", lat, lon),
        }
    }

    /// 汇总CLI输入：显式描述优先，其次坐标对，最后默认值
    pub fn resolve(explicit: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> Self {
        if let Some(description) = explicit
            && !description.trim().is_empty()
        {
            return Self::new(description);
        }
        if let (Some(lat), Some(lon)) = (lat, lon) {
            return Self::from_coordinates(lat, lon);
        }
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// 提示词中的单位制指令
    pub fn units_instruction(&self) -> String {
        format!(
            "CRITICAL: Output all units (HP/kW, lb-ft/Nm, mph/kmh, mpg/l100km, lbs/kg) based on what is strictly commonly used in the user's location provided: {}.",
            self.description
        )
    }
}

// Include tests
#[cfg(test)]
mod tests;
