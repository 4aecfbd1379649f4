// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod bing;
/// 搜索引擎客户端模块
///
/// 提供各搜索引擎结果页的抓取客户端实现
/// 以及在启动时装配引擎注册表的工厂函数
pub mod factory;
pub mod google;

pub use factory::create_default_registry;

/// 模拟真实浏览器的User-Agent，引擎可能拒绝未标识的自动化请求
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 单页请求的结果条数，覆盖足够深的排名区间
pub(crate) const RESULT_PAGE_SIZE: u32 = 100;
