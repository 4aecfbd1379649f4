// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::Url;

/// 验证错误类型
#[derive(Error, Debug)]
pub enum ValidationError {
    /// URL无效
    #[error("Invalid target URL format")]
    InvalidUrl,
}

/// 验证目标URL
///
/// 缺少协议时先补全 `https://` 再解析，与用户在表单中输入裸域名的习惯保持一致。
/// 解析成功且包含主机名则视为有效。
///
/// # 参数
///
/// * `target_url` - 用户提交的目标URL
///
/// # 返回值
///
/// * `Ok(())` - URL有效
/// * `Err(ValidationError)` - URL无效
pub fn validate_target_url(target_url: &str) -> Result<(), ValidationError> {
    let normalized = if target_url.starts_with("http://") || target_url.starts_with("https://") {
        target_url.to_string()
    } else {
        format!("https://{}", target_url)
    };

    let parsed = Url::parse(&normalized).map_err(|_| ValidationError::InvalidUrl)?;

    match parsed.host_str() {
        Some(host) if !host.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidUrl),
    }
}
