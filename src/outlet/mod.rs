//! 报告出口 - 将对比结果渲染为Markdown并落盘
//!
//! 纯展示层：只读取结果，不参与编排。第二阶段尚未完成的字段
//! 渲染为等待标记，占位哨兵值原样展示。

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::comparison::types::{
    ComparisonResult, FinancialInfo, MarketData, RatingInfo, VehicleData,
};
use crate::config::Config;

/// 第二阶段字段尚未到达时的等待标记
const PENDING: &str = "Analyzing...";

/// 渲染完整的Markdown对比报告
pub fn render_markdown(result: &ComparisonResult) -> String {
    let a = &result.vehicle_a;
    let b = &result.vehicle_b;
    let mut doc = String::new();

    doc.push_str(&format!(
        "# Side-by-Side Comparison: {} vs. {}\n\n",
        a.name, b.name
    ));
    doc.push_str(&format!(
        "> Generated by AutoArena at {} (UTC)\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));

    doc.push_str(&format!("**Expert Verdict:** {}\n\n", result.verdict));

    if a.image_url.is_some() || b.image_url.is_some() {
        doc.push_str("## Images\n\n");
        for vehicle in [a, b] {
            if let Some(url) = &vehicle.image_url {
                doc.push_str(&format!("![{}]({})\n\n", vehicle.name, url));
            }
        }
    }

    doc.push_str("## Description / Specifications\n\n");
    doc.push_str(&format!("| Feature | {} | {} |\n", a.name, b.name));
    doc.push_str("|---|---|---|\n");
    let spec_rows = [
        ("Engine", &a.specs.engine, &b.specs.engine),
        ("Power", &a.specs.horsepower, &b.specs.horsepower),
        ("Torque", &a.specs.torque, &b.specs.torque),
        ("Transmission", &a.specs.transmission, &b.specs.transmission),
        ("Drivetrain", &a.specs.drivetrain, &b.specs.drivetrain),
        ("0-100km/h / 0-60mph", &a.specs.zero_to_sixty, &b.specs.zero_to_sixty),
        ("Fuel / Range", &a.specs.mpg, &b.specs.mpg),
        ("Weight", &a.specs.weight, &b.specs.weight),
        ("Dimensions", &a.specs.dimensions, &b.specs.dimensions),
        ("Cargo", &a.specs.cargo_space, &b.specs.cargo_space),
    ];
    for (label, left, right) in spec_rows {
        doc.push_str(&format!("| {} | {} | {} |\n", label, left, right));
    }
    doc.push('\n');

    doc.push_str("## Safety & Reliability\n\n");
    doc.push_str(&format!("| | {} | {} |\n", a.name, b.name));
    doc.push_str("|---|---|---|\n");
    doc.push_str(&format!(
        "| Safety Rating | {} | {} |\n",
        rating(a, |r| r.safety_rating.as_str()),
        rating(b, |r| r.safety_rating.as_str()),
    ));
    doc.push_str(&format!(
        "| Reliability | {} | {} |\n\n",
        rating(a, |r| r.reliability_score.as_str()),
        rating(b, |r| r.reliability_score.as_str()),
    ));

    doc.push_str("## Pros & Cons\n\n");
    for vehicle in [a, b] {
        doc.push_str(&format!("### {}\n\n", vehicle.name));
        for pro in &vehicle.pros {
            doc.push_str(&format!("- 👍 {}\n", pro));
        }
        for con in &vehicle.cons {
            doc.push_str(&format!("- 👎 {}\n", con));
        }
        doc.push('\n');
    }

    doc.push_str("## Pricing & Market Data\n\n");
    doc.push_str(&format!("| | {} | {} |\n", a.name, b.name));
    doc.push_str("|---|---|---|\n");
    let market_rows: [(&str, fn(&VehicleData) -> String); 6] = [
        ("Market Sentiment", |v| {
            market(v, |m| m.market_sentiment.as_str())
        }),
        ("Avg. Price (New)", |v| {
            market(v, |m| m.average_price_new.as_str())
        }),
        ("Avg. Price (Used)", |v| {
            market(v, |m| m.average_price_used.as_str())
        }),
        ("Resale Outlook", |v| {
            market(v, |m| m.resale_value_prediction.as_str())
        }),
        ("Insurance Est.", |v| {
            financial(v, |f| f.estimated_insurance_cost.as_str())
        }),
        ("Bank Rate", |v| {
            financial(v, |f| f.typical_bank_rate.as_str())
        }),
    ];
    for (label, cell) in market_rows {
        doc.push_str(&format!("| {} | {} | {} |\n", label, cell(a), cell(b)));
    }
    doc.push('\n');

    doc.push_str("## Available Listings\n\n");
    for vehicle in [a, b] {
        doc.push_str(&format!("### {}\n\n", vehicle.name));
        doc.push_str(&render_listings(vehicle));
    }

    let has_news = [a, b]
        .iter()
        .any(|v| v.news_headlines.as_ref().is_some_and(|n| !n.is_empty()));
    if has_news {
        doc.push_str("## In the News\n\n");
        for vehicle in [a, b] {
            if let Some(headlines) = &vehicle.news_headlines
                && !headlines.is_empty()
            {
                doc.push_str(&format!("### {}\n\n", vehicle.name));
                for headline in headlines {
                    doc.push_str(&format!(
                        "- **{}** — {} _({})_\n",
                        headline.title, headline.snippet, headline.source
                    ));
                }
                doc.push('\n');
            }
        }
    }

    doc.push_str("---\n\n");
    doc.push_str(
        "_Information is generated by AI and may contain errors. Please verify with dealer._\n",
    );

    doc
}

fn rating<'a>(vehicle: &'a VehicleData, field: impl Fn(&'a RatingInfo) -> &'a str) -> &'a str {
    vehicle.ratings.as_ref().map(field).unwrap_or(PENDING)
}

fn market<'a>(vehicle: &'a VehicleData, field: impl Fn(&'a MarketData) -> &'a str) -> String {
    vehicle
        .market
        .as_ref()
        .map(|m| field(m).to_string())
        .unwrap_or_else(|| PENDING.to_string())
}

fn financial<'a>(vehicle: &'a VehicleData, field: impl Fn(&'a FinancialInfo) -> &'a str) -> String {
    vehicle
        .financials
        .as_ref()
        .map(|f| field(f).to_string())
        .unwrap_or_else(|| PENDING.to_string())
}

fn render_listings(vehicle: &VehicleData) -> String {
    let Some(financials) = &vehicle.financials else {
        return "Scanning dealer networks...\n\n".to_string();
    };
    if financials.listings_sample.is_empty() {
        return "No active listings found.\n\n".to_string();
    }

    let mut section = String::new();
    for listing in &financials.listings_sample {
        let title = match &listing.url {
            Some(url) => format!("[{}]({})", listing.title, url),
            None => listing.title.clone(),
        };
        let best_deal = if listing.is_best_deal == Some(true) {
            " **BEST DEAL**"
        } else {
            ""
        };
        section.push_str(&format!(
            "- {}{} — {} _via {}_\n",
            title, best_deal, listing.price, listing.source
        ));
    }
    section.push('\n');
    section
}

/// 保存对比报告到配置的输出路径
pub fn save(config: &Config, result: &ComparisonResult) -> Result<PathBuf> {
    let output_path = &config.output_path;
    if let Some(parent_dir) = output_path.parent()
        && !parent_dir.as_os_str().is_empty()
        && !parent_dir.exists()
    {
        fs::create_dir_all(parent_dir)
            .context(format!("Failed to create output dir: {:?}", parent_dir))?;
    }

    fs::write(output_path, render_markdown(result))
        .context(format!("Failed to write report: {:?}", output_path))?;

    Ok(output_path.clone())
}

// Include tests
#[cfg(test)]
mod tests;
