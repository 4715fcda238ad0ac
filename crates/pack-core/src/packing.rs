//! 包裝方案模型

use serde::{Deserialize, Serialize};

/// 單一尺寸的包裝數量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Packing {
    /// 包裝尺寸（每箱件數）
    pub box_size: i64,

    /// 使用箱數
    pub quantity: u64,
}

impl Packing {
    /// 創建新的包裝項目
    pub fn new(box_size: i64, quantity: u64) -> Self {
        Self { box_size, quantity }
    }

    /// 此項目的出貨件數，尺寸非正時為零
    pub fn items(&self) -> u64 {
        u64::try_from(self.box_size).unwrap_or(0) * self.quantity
    }
}

/// 包裝計算結果
///
/// 依包裝尺寸遞減排序，不含數量為零的尺寸。序列化為 JSON 陣列，
/// 反序列化時經過 `new` 正規化並拒絕非正尺寸。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Packing>", try_from = "Vec<Packing>")]
pub struct PackingResult {
    packings: Vec<Packing>,
}

impl PackingResult {
    /// 由包裝項目建立結果，會移除零數量項目並依尺寸遞減排序
    pub fn new(packings: impl IntoIterator<Item = Packing>) -> Self {
        let mut packings: Vec<Packing> = packings
            .into_iter()
            .filter(|p| p.quantity > 0)
            .collect();
        packings.sort_by(|a, b| b.box_size.cmp(&a.box_size));
        Self { packings }
    }

    /// 總出貨件數（含超量）
    pub fn total_items(&self) -> u64 {
        self.packings.iter().map(Packing::items).sum()
    }

    /// 總箱數
    pub fn total_packs(&self) -> u64 {
        self.packings.iter().map(|p| p.quantity).sum()
    }

    /// 指定尺寸的使用箱數
    pub fn quantity_of(&self, box_size: i64) -> u64 {
        self.packings
            .iter()
            .find(|p| p.box_size == box_size)
            .map(|p| p.quantity)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Packing> {
        self.packings.iter()
    }

    pub fn len(&self) -> usize {
        self.packings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packings.is_empty()
    }

    pub fn as_slice(&self) -> &[Packing] {
        &self.packings
    }
}

impl TryFrom<Vec<Packing>> for PackingResult {
    type Error = String;

    fn try_from(packings: Vec<Packing>) -> Result<Self, Self::Error> {
        if let Some(packing) = packings.iter().find(|p| p.box_size <= 0) {
            return Err(format!("包裝尺寸必須大於零: {}", packing.box_size));
        }
        Ok(Self::new(packings))
    }
}

impl From<PackingResult> for Vec<Packing> {
    fn from(result: PackingResult) -> Self {
        result.packings
    }
}

impl<'a> IntoIterator for &'a PackingResult {
    type Item = &'a Packing;
    type IntoIter = std::slice::Iter<'a, Packing>;

    fn into_iter(self) -> Self::IntoIter {
        self.packings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_sorted_and_sparse() {
        let result = PackingResult::new(vec![
            Packing::new(23, 2),
            Packing::new(53, 9429),
            Packing::new(17, 0),
            Packing::new(31, 7),
        ]);

        let sizes: Vec<i64> = result.iter().map(|p| p.box_size).collect();
        assert_eq!(sizes, vec![53, 31, 23]);
        assert_eq!(result.quantity_of(17), 0);
        assert_eq!(result.total_items(), 500_000);
        assert_eq!(result.total_packs(), 9438);
    }

    #[test]
    fn test_json_shape() {
        let result = PackingResult::new(vec![Packing::new(500, 1)]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[{"boxSize":500,"quantity":1}]"#);

        let back: PackingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let result: PackingResult = serde_json::from_str(
            r#"[{"boxSize":23,"quantity":2},{"boxSize":17,"quantity":0},{"boxSize":53,"quantity":1}]"#,
        )
        .unwrap();

        assert_eq!(
            result.as_slice(),
            &[Packing::new(53, 1), Packing::new(23, 2)]
        );
    }

    #[test]
    fn test_deserialize_rejects_non_positive_size() {
        let err = serde_json::from_str::<PackingResult>(r#"[{"boxSize":-5,"quantity":1}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("-5"));
        assert!(serde_json::from_str::<PackingResult>(r#"[{"boxSize":0,"quantity":1}]"#).is_err());
    }

    #[test]
    fn test_items_of_non_positive_size() {
        assert_eq!(Packing::new(-5, 3).items(), 0);
    }

    #[test]
    fn test_empty_result() {
        let result = PackingResult::default();
        assert!(result.is_empty());
        assert_eq!(result.total_items(), 0);
        assert_eq!(result.total_packs(), 0);
    }
}
