//! 快取鍵正規化

use std::fmt;

/// 訂購數量與尺寸之間的分隔符
const ORDER_DELIMITER: char = '|';

/// 尺寸之間的分隔符
const SIZE_DELIMITER: char = ',';

/// 正規化的快取鍵
///
/// 尺寸依遞增排序後再組成字串，輸入順序不影響命中。
/// 分隔符皆非數字，`(1, [23])` 與 `(12, [3])` 不會碰撞。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// 由訂購數量與包裝尺寸建立快取鍵，不修改呼叫端的切片
    pub fn new(order: i64, pack_sizes: &[i64]) -> Self {
        let mut sizes = pack_sizes.to_vec();
        sizes.sort_unstable();

        let mut key = order.to_string();
        key.push(ORDER_DELIMITER);
        for (idx, size) in sizes.iter().enumerate() {
            if idx > 0 {
                key.push(SIZE_DELIMITER);
            }
            key.push_str(&size.to_string());
        }

        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_key_format() {
        assert_eq!(CacheKey::new(12, &[53, 23, 31]).as_str(), "12|23,31,53");
    }

    #[rstest]
    #[case(&[23, 31, 53])]
    #[case(&[53, 31, 23])]
    #[case(&[31, 53, 23])]
    fn test_presentation_order_irrelevant(#[case] packs: &[i64]) {
        assert_eq!(CacheKey::new(12, packs), CacheKey::new(12, &[23, 31, 53]));
    }

    #[test]
    fn test_no_collision_across_boundary() {
        assert_ne!(CacheKey::new(1, &[23]), CacheKey::new(12, &[3]));
        assert_ne!(CacheKey::new(1, &[2, 3]), CacheKey::new(1, &[23]));
        assert_ne!(CacheKey::new(12, &[3]), CacheKey::new(123, &[]));
    }

    #[test]
    fn test_caller_slice_untouched() {
        let packs = [53, 23, 31];
        let _ = CacheKey::new(12, &packs);
        assert_eq!(packs, [53, 23, 31]);
    }
}
