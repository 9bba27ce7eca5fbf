//! 宽容JSON提取 - 从模型的自由文本响应中恢复结构化数据
//!
//! 搜索接地的生成请求无法同时启用严格输出schema，模型可能在JSON前后
//! 附加解说文字、Markdown代码栅栏，或使用其它语言习惯的布尔字面量。
//! 本模块将"不可信文本 → 严格解析"拆为三步独立可测的纯函数：
//! 定位大括号跨度、规范化布尔字面量、严格解析。

use serde::de::DeserializeOwned;

/// JSON提取失败的具体原因
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("响应文本中找不到成对的大括号，无可提取的JSON对象")]
    NoJsonObject,
    #[error("大括号边界倒置（最后一个'}}'先于第一个'{{'出现）")]
    InvertedBounds,
    #[error("提取片段解析JSON失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 定位候选JSON跨度：第一个`{`到最后一个`}`（含端点）
///
/// 跨度外的解说文字与代码栅栏一并丢弃。找不到任一端点或边界倒置时
/// 返回错误，由调用方走失败兜底路径。
pub fn isolate_json_object(text: &str) -> Result<&str, ExtractionError> {
    let start = text.find('{').ok_or(ExtractionError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractionError::NoJsonObject)?;
    if end < start {
        return Err(ExtractionError::InvertedBounds);
    }
    Ok(&text[start..=end])
}

/// 将字符串字面量之外的裸`True`/`False`记号规范化为`true`/`false`
///
/// 只替换完整记号（前后均非字母数字下划线），字符串内容原样保留，
/// 否则类似"TrueCar"的车源名会被破坏。
pub fn normalize_boolean_literals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices();
    let mut in_string = false;
    let mut escaped = false;

    while let Some((i, c)) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }

        if c == 'T' || c == 'F' {
            let (token, replacement) = if c == 'T' {
                ("True", "true")
            } else {
                ("False", "false")
            };
            let rest = &text[i..];
            let boundary_before = out
                .chars()
                .next_back()
                .is_none_or(|prev| !prev.is_alphanumeric() && prev != '_');
            let boundary_after = || {
                rest[token.len()..]
                    .chars()
                    .next()
                    .is_none_or(|next| !next.is_alphanumeric() && next != '_')
            };
            if boundary_before && rest.starts_with(token) && boundary_after() {
                out.push_str(replacement);
                // 记号均为ASCII，逐字符跳过剩余部分
                for _ in 0..token.len() - 1 {
                    chars.next();
                }
                continue;
            }
        }

        out.push(c);
    }

    out
}

/// 完整的宽容解析流水线：定位跨度 → 规范化布尔记号 → 严格解析
pub fn parse_loose<T>(text: &str) -> Result<T, ExtractionError>
where
    T: DeserializeOwned,
{
    let span = isolate_json_object(text)?;
    let normalized = normalize_boolean_literals(span);
    Ok(serde_json::from_str(&normalized)?)
}
