//! Depth-first enumeration of three-part groupings.

use twinborn_core::{Inventory, Part};

pub const GROUP_SIZE: usize = 3;

/// Every distinct multiset of [`GROUP_SIZE`] parts that `inventory` can supply.
///
/// Each level of the walk starts at the catalog index chosen by the level
/// above, so a grouping comes out once, with its parts in catalog order.
/// Groupings are emitted in lexicographic catalog order.
pub fn enumerate_groupings(inventory: &Inventory) -> Vec<[Part; GROUP_SIZE]> {
    let mut stock = *inventory;
    let mut picks = [Part::E; GROUP_SIZE];
    let mut out = Vec::new();
    walk(&mut stock, 0, 0, &mut picks, &mut out);
    out
}

fn walk(
    stock: &mut Inventory,
    start: usize,
    depth: usize,
    picks: &mut [Part; GROUP_SIZE],
    out: &mut Vec<[Part; GROUP_SIZE]>,
) {
    if depth == GROUP_SIZE {
        out.push(*picks);
        return;
    }

    for (idx, &part) in Part::ALL.iter().enumerate().skip(start) {
        if stock.take(part) {
            picks[depth] = part;
            walk(stock, idx, depth + 1, picks, out);
            stock.put_back(part);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inventory_yields_nothing() {
        assert!(enumerate_groupings(&Inventory::new()).is_empty());
    }

    #[test]
    fn test_single_part_needs_three() {
        let two = Inventory::new().with(Part::E, 2);
        assert!(enumerate_groupings(&two).is_empty());

        let three = Inventory::new().with(Part::E, 3);
        assert_eq!(enumerate_groupings(&three), vec![[Part::E; 3]]);
    }

    #[test]
    fn test_lone_y_has_no_grouping() {
        let inv = Inventory::new().with(Part::Y, 1);
        assert!(enumerate_groupings(&inv).is_empty());
    }

    #[test]
    fn test_three_distinct_parts_one_grouping() {
        let inv = Inventory::new()
            .with(Part::E, 1)
            .with(Part::R4, 1)
            .with(Part::Y, 1);
        assert_eq!(
            enumerate_groupings(&inv),
            vec![[Part::E, Part::R4, Part::Y]]
        );
    }

    #[test]
    fn test_repeats_limited_by_count() {
        let inv = Inventory::new().with(Part::R4, 2).with(Part::R, 2);
        assert_eq!(
            enumerate_groupings(&inv),
            vec![
                [Part::R4, Part::R4, Part::R],
                [Part::R4, Part::R, Part::R],
            ]
        );
    }

    #[test]
    fn test_caller_inventory_untouched() {
        let inv = Inventory::new().with(Part::E, 3).with(Part::Y1, 2);
        let before = inv;
        let _ = enumerate_groupings(&inv);
        assert_eq!(inv, before);
    }

    #[test]
    fn test_unbounded_stock_is_multiset_count() {
        // C(10 + 3 - 1, 3) multisets of size 3 over 10 parts.
        let inv: Inventory = Part::ALL.into_iter().map(|p| (p, 3)).collect();
        assert_eq!(enumerate_groupings(&inv).len(), 220);
    }
}
