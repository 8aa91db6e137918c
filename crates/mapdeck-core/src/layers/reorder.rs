use super::types::LayerId;

/// Move the id at `from` so that it ends up at index `to`.
///
/// `to` is an index into the resulting list and is clamped to its bounds.
pub fn move_item(ids: &[LayerId], from: usize, to: usize) -> Vec<LayerId> {
    let mut order = ids.to_vec();
    if from >= order.len() {
        return order;
    }
    let moved = order.remove(from);
    let to = to.min(order.len());
    order.insert(to, moved);
    order
}

/// Convert an insertion slot measured on the list before removal
/// (0..=len, "insert before row n") into the final index after removal.
pub fn insertion_to_target(from: usize, insertion: usize) -> usize {
    if insertion > from {
        insertion - 1
    } else {
        insertion
    }
}

/// Insertion slot for a pointer at `pointer_y`, given the vertical
/// centers of the rows in display order.
pub fn insertion_index(row_centers: &[f32], pointer_y: f32) -> usize {
    row_centers.iter().filter(|center| **center < pointer_y).count()
}
