//! 补全数据合并 - 显式的按字段浅覆盖
//!
//! 补全字段要么是扁平子对象、要么是整体替换的数组，因此不做递归深合并：
//! 载荷中出现的字段整体覆盖既有值，缺失的字段保持不动。

use crate::comparison::types::{VehicleData, VehicleEnrichment};

/// 将一侧补全载荷合并进既有车辆记录
///
/// 重申的`name`仅作再确认，第一阶段的名称保持权威；
/// `listingsSample`/`newsHeadlines`随其所属字段整体替换，不做拼接。
pub fn merge_enrichment(vehicle: &mut VehicleData, enrichment: VehicleEnrichment) {
    let VehicleEnrichment {
        name: _,
        image_url,
        market,
        ratings,
        financials,
        news_headlines,
    } = enrichment;

    if let Some(image_url) = image_url {
        vehicle.image_url = Some(image_url);
    }
    if let Some(market) = market {
        vehicle.market = Some(market);
    }
    if let Some(ratings) = ratings {
        vehicle.ratings = Some(ratings);
    }
    if let Some(financials) = financials {
        vehicle.financials = Some(financials);
    }
    if let Some(news_headlines) = news_headlines {
        vehicle.news_headlines = Some(news_headlines);
    }
}

// Include tests
#[cfg(test)]
mod tests;
