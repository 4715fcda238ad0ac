//! 動態規劃搜尋
//!
//! 以無界背包最短路徑求解：狀態為「已出貨件數」，範圍 `0..=order + max_pack`。
//! 最佳解的超量不會超過一個最大包裝，因此表格大小與訂購數量成線性關係。

use std::collections::BTreeMap;

use pack_core::{PackError, Packing, PackingResult, Result};

/// 到達某出貨件數的成本，依（出貨件數, 箱數）字典序比較
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Cost {
    items: u64,
    packs: u64,
}

impl Cost {
    const ZERO: Cost = Cost { items: 0, packs: 0 };

    fn add_pack(self, size: u64) -> Cost {
        Cost {
            items: self.items + size,
            packs: self.packs + 1,
        }
    }
}

/// 表格中的單一狀態，以索引指回前一個出貨件數
#[derive(Debug, Clone, Copy)]
struct State {
    cost: Cost,
    prev: usize,
    pack: usize,
}

/// 搜尋最佳包裝組合
///
/// 呼叫前輸入必須已通過驗證。包裝尺寸固定依遞減順序鬆弛，
/// 只有嚴格更佳的成本才會覆蓋既有狀態，相同輸入必得相同輸出。
pub(crate) fn search(order: i64, pack_sizes: &[i64]) -> Result<PackingResult> {
    let max_pack = pack_sizes.iter().copied().max().ok_or(PackError::NoPackSizes)?;
    let overflow = || PackError::SearchSpaceTooLarge { order, max_pack };

    let mut sizes = pack_sizes
        .iter()
        .map(|&size| usize::try_from(size).map_err(|_| overflow()))
        .collect::<Result<Vec<usize>>>()?;
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    let target = usize::try_from(order).map_err(|_| overflow())?;
    let limit = target
        .checked_add(sizes[0])
        .filter(|&limit| limit < usize::MAX)
        .ok_or_else(overflow)?;

    let mut table: Vec<Option<State>> = Vec::new();
    table
        .try_reserve_exact(limit + 1)
        .map_err(|_| overflow())?;
    table.resize(limit + 1, None);
    table[0] = Some(State {
        cost: Cost::ZERO,
        prev: 0,
        pack: 0,
    });

    for quantity in 0..=limit {
        let Some(current) = table[quantity] else {
            continue;
        };

        for &size in &sizes {
            let next = match quantity.checked_add(size) {
                Some(next) if next <= limit => next,
                _ => continue,
            };

            let candidate = current.cost.add_pack(size as u64);
            if table[next].map_or(true, |state| candidate < state.cost) {
                table[next] = Some(State {
                    cost: candidate,
                    prev: quantity,
                    pack: size,
                });
            }
        }
    }

    let best = (target..=limit)
        .filter_map(|quantity| table[quantity].map(|state| (quantity, state.cost)))
        .min_by_key(|&(_, cost)| cost)
        .map(|(quantity, _)| quantity)
        .ok_or(PackError::NoSolution { order })?;

    // 沿前驅索引回溯
    let mut counts: BTreeMap<usize, u64> = BTreeMap::new();
    let mut quantity = best;
    while quantity > 0 {
        let state = table[quantity].ok_or(PackError::NoSolution { order })?;
        *counts.entry(state.pack).or_insert(0) += 1;
        quantity = state.prev;
    }

    let packings = counts
        .into_iter()
        .map(|(size, count)| {
            i64::try_from(size)
                .map(|size| Packing::new(size, count))
                .map_err(|_| overflow())
        })
        .collect::<Result<Vec<Packing>>>()?;

    Ok(PackingResult::new(packings))
}
