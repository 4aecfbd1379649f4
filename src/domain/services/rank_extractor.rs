// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{debug, warn};

/// 结果页中标记一条自然搜索结果的结构选择器
///
/// 广告和侧边组件不使用该标记，因此不会计入排名。
const RESULT_MARKER: &str = "li.b_algo";
const RESULT_LINK: &str = "a[href]";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{0} cannot be empty")]
    InvalidArgument(&'static str),
    #[error("Failed to process markup for target URL: {target_url} ({cause})")]
    ExtractionFailed { target_url: String, cause: String },
}

/// 提取结果
///
/// 区分"没有任何匹配"与"解析崩溃"：前者是正常结果，后者走 `ExtractionError`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    /// 目标URL出现的位置（1-based，按文档顺序升序）
    Found(Vec<u32>),
    /// 目标URL未出现在任何结果条目中
    NotFound,
}

impl RankOutcome {
    /// 转换为存储/响应形式，未命中映射为哨兵值 `[0]`
    pub fn into_rankings(self) -> Vec<u32> {
        match self {
            RankOutcome::Found(ranks) => ranks,
            RankOutcome::NotFound => vec![0],
        }
    }
}

/// 排名提取器
///
/// 将搜索引擎结果页标记解析为有序结果条目，并计算目标URL出现的位置。
/// 匹配策略为对原始链接做大小写敏感的子串包含判断，不做任何
/// scheme/主机/末尾斜杠归一化——这会容忍路径和查询串差异，但也可能在
/// 公共子串上误报，是有意保留的权衡。
pub struct RankExtractor;

impl RankExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 从结果页标记中提取目标URL的排名
    ///
    /// # 参数
    ///
    /// * `markup` - 搜索引擎返回的原始HTML
    /// * `target_url` - 要匹配的目标URL片段
    ///
    /// # 返回值
    ///
    /// * `Ok(RankOutcome::Found)` - 目标出现的1-based位置，升序
    /// * `Ok(RankOutcome::NotFound)` - 页面无结果条目或无链接命中
    /// * `Err(ExtractionError)` - 输入为空或解析过程出错
    pub fn extract(&self, markup: &str, target_url: &str) -> Result<RankOutcome, ExtractionError> {
        if markup.trim().is_empty() {
            return Err(ExtractionError::InvalidArgument("Markup"));
        }
        if target_url.trim().is_empty() {
            return Err(ExtractionError::InvalidArgument("Target URL"));
        }

        let result_selector = Self::selector(RESULT_MARKER, target_url)?;
        let link_selector = Self::selector(RESULT_LINK, target_url)?;

        let document = Html::parse_document(markup);
        let result_nodes: Vec<_> = document.select(&result_selector).collect();

        if result_nodes.is_empty() {
            warn!(target_url, "no search result entries found in markup");
            return Ok(RankOutcome::NotFound);
        }

        let mut rankings = Vec::new();
        // 计数器对每个结果条目递增，与是否命中无关
        for (index, node) in result_nodes.iter().enumerate() {
            let rank = (index + 1) as u32;
            if let Some(link) = node.select(&link_selector).next() {
                if let Some(href) = link.value().attr("href") {
                    if href.contains(target_url) {
                        rankings.push(rank);
                    }
                }
            }
        }

        debug!(
            target_url,
            entries = result_nodes.len(),
            matches = rankings.len(),
            "rank extraction complete"
        );

        if rankings.is_empty() {
            Ok(RankOutcome::NotFound)
        } else {
            Ok(RankOutcome::Found(rankings))
        }
    }

    fn selector(css: &str, target_url: &str) -> Result<Selector, ExtractionError> {
        Selector::parse(css).map_err(|e| ExtractionError::ExtractionFailed {
            target_url: target_url.to_string(),
            cause: e.to_string(),
        })
    }
}

impl Default for RankExtractor {
    fn default() -> Self {
        Self::new()
    }
}
