//! 輸入驗證

use std::collections::HashSet;

use crate::{PackError, Result};

/// 驗證訂購數量與包裝尺寸
///
/// 檢查順序固定：訂購數量、尺寸是否為空、尺寸是否為正、尺寸是否重複。
/// 不修改呼叫端的切片。
pub fn validate_order_and_packs(order: i64, pack_sizes: &[i64]) -> Result<()> {
    if order <= 0 {
        return Err(PackError::InvalidOrder(order));
    }

    if pack_sizes.is_empty() {
        return Err(PackError::NoPackSizes);
    }

    if let Some(&size) = pack_sizes.iter().find(|&&size| size <= 0) {
        return Err(PackError::InvalidPackSize(size));
    }

    let mut seen = HashSet::with_capacity(pack_sizes.len());
    for &size in pack_sizes {
        if !seen.insert(size) {
            return Err(PackError::DuplicatePackSize(size));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![23, 31, 53], PackError::InvalidOrder(0))]
    #[case(-1, vec![23, 31, 53], PackError::InvalidOrder(-1))]
    #[case(10, vec![], PackError::NoPackSizes)]
    #[case(10, vec![23, 0, 53], PackError::InvalidPackSize(0))]
    #[case(10, vec![23, -5, 53], PackError::InvalidPackSize(-5))]
    #[case(10, vec![2, 23, 31, 53, 31], PackError::DuplicatePackSize(31))]
    fn test_rejects_invalid_input(
        #[case] order: i64,
        #[case] packs: Vec<i64>,
        #[case] expected: PackError,
    ) {
        assert_eq!(validate_order_and_packs(order, &packs), Err(expected));
    }

    #[test]
    fn test_order_checked_before_packs() {
        // 訂購數量與尺寸同時無效時，回報訂購數量錯誤
        assert_eq!(
            validate_order_and_packs(0, &[]),
            Err(PackError::InvalidOrder(0))
        );
    }

    #[test]
    fn test_accepts_valid_input() {
        assert!(validate_order_and_packs(1, &[250, 500, 1000]).is_ok());
    }
}
