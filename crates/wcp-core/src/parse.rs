//! 主檔欄位解析
//!
//! 來源資料的尺寸、重量與數量欄位是自由格式字串
//! (例如 `"10 x 10 x 6"`, `"15 lbs"`, `"144 (12 packs)"`)。
//! 嚴格版本解析失敗即回傳錯誤; 寬鬆版本透過 [`ParseStats`]
//! 記錄缺漏筆數並以預設值補齊, 不會無聲吞掉壞資料。

use crate::dims::Dims3;
use crate::{Result, WcpError};

/// 解析尺寸字串, 例如 `"10 x 10 x 6"` 或 `"10X10X6 in"`
pub fn parse_dims(raw: &str) -> Result<Dims3> {
    let cleaned = raw
        .to_lowercase()
        .replace("inches", "")
        .replace("inch", "")
        .replace("in", "");
    let parts: Vec<&str> = cleaned.split('x').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(WcpError::InvalidDimension(raw.to_string()));
    }
    let mut axes = [0.0f64; 3];
    for (i, part) in parts.iter().enumerate() {
        axes[i] = part
            .parse::<f64>()
            .map_err(|_| WcpError::InvalidDimension(raw.to_string()))?;
    }
    let dims = Dims3::new(axes[0], axes[1], axes[2]);
    if !dims.is_valid() {
        return Err(WcpError::InvalidDimension(raw.to_string()));
    }
    Ok(dims)
}

/// 解析重量字串, 例如 `"15 lbs"` 或 `"15.5"`
pub fn parse_weight(raw: &str) -> Result<f64> {
    let cleaned = raw.to_lowercase().replace("lbs", "").replace("lb", "");
    let weight = cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| WcpError::InvalidWeight(raw.to_string()))?;
    if weight <= 0.0 {
        return Err(WcpError::InvalidWeight(raw.to_string()));
    }
    Ok(weight)
}

/// 解析數量字串, 取第一段數字, 例如 `"144 (12 packs)"` → 144
pub fn parse_quantity(raw: &str) -> Result<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(WcpError::InvalidQuantity(raw.to_string()));
    }
    let qty = digits
        .parse::<u32>()
        .map_err(|_| WcpError::InvalidQuantity(raw.to_string()))?;
    if qty == 0 {
        return Err(WcpError::InvalidQuantity(raw.to_string()));
    }
    Ok(qty)
}

/// 寬鬆解析的統計: 每筆失敗都記錄警告並計數
#[derive(Debug, Clone, Default)]
pub struct ParseStats {
    /// 尺寸欄位補預設值的筆數
    pub dims_fallbacks: u32,
    /// 重量欄位補預設值的筆數
    pub weight_fallbacks: u32,
    /// 數量欄位補預設值的筆數
    pub quantity_fallbacks: u32,
}

impl ParseStats {
    /// 建立空的統計
    pub fn new() -> Self {
        Self::default()
    }

    /// 寬鬆解析尺寸, 失敗時補預設值並計數
    pub fn dims_or(&mut self, raw: &str, default: Dims3) -> Dims3 {
        match parse_dims(raw) {
            Ok(dims) => dims,
            Err(_) => {
                self.dims_fallbacks += 1;
                tracing::warn!(raw, %default, "尺寸欄位無法解析, 改用預設值");
                default
            }
        }
    }

    /// 寬鬆解析重量, 失敗時補預設值並計數
    pub fn weight_or(&mut self, raw: &str, default: f64) -> f64 {
        match parse_weight(raw) {
            Ok(weight) => weight,
            Err(_) => {
                self.weight_fallbacks += 1;
                tracing::warn!(raw, default, "重量欄位無法解析, 改用預設值");
                default
            }
        }
    }

    /// 寬鬆解析數量, 失敗時補預設值並計數
    pub fn quantity_or(&mut self, raw: &str, default: u32) -> u32 {
        match parse_quantity(raw) {
            Ok(qty) => qty,
            Err(_) => {
                self.quantity_fallbacks += 1;
                tracing::warn!(raw, default, "數量欄位無法解析, 改用預設值");
                default
            }
        }
    }

    /// 總補值筆數
    pub fn total_fallbacks(&self) -> u32 {
        self.dims_fallbacks + self.weight_fallbacks + self.quantity_fallbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10 x 10 x 6", 10.0, 10.0, 6.0)]
    #[case("48X40X36", 48.0, 40.0, 36.0)]
    #[case("12.5 x 8 x 4 in", 12.5, 8.0, 4.0)]
    fn test_parse_dims(#[case] raw: &str, #[case] l: f64, #[case] w: f64, #[case] h: f64) {
        let dims = parse_dims(raw).unwrap();
        assert_eq!(dims, Dims3::new(l, w, h));
    }

    #[rstest]
    #[case("10 x 10")]
    #[case("a x b x c")]
    #[case("0 x 10 x 6")]
    #[case("")]
    fn test_parse_dims_rejects(#[case] raw: &str) {
        assert!(parse_dims(raw).is_err());
    }

    #[rstest]
    #[case("15 lbs", 15.0)]
    #[case("15.5", 15.5)]
    #[case("3 lb", 3.0)]
    fn test_parse_weight(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_weight(raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_weight_rejects_nonpositive() {
        assert!(parse_weight("0 lbs").is_err());
        assert!(parse_weight("-3").is_err());
        assert!(parse_weight("heavy").is_err());
    }

    #[rstest]
    #[case("144 (12 packs)", 144)]
    #[case("12", 12)]
    fn test_parse_quantity(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_quantity(raw).unwrap(), expected);
    }

    #[test]
    fn test_parse_quantity_rejects() {
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("none").is_err());
        assert!(parse_quantity("0").is_err());
    }

    #[test]
    fn test_fallbacks_are_counted() {
        let mut stats = ParseStats::new();
        let default = Dims3::new(1.0, 1.0, 1.0);
        assert_eq!(stats.dims_or("10 x 10 x 6", default), Dims3::new(10.0, 10.0, 6.0));
        assert_eq!(stats.dims_or("garbage", default), default);
        assert_eq!(stats.weight_or("??", 5.0), 5.0);
        assert_eq!(stats.total_fallbacks(), 2);
    }
}
