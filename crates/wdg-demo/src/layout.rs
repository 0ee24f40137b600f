//! Side-by-side placement of the demo windows.

use wdg::Placement;

/// Split `cols` columns into `count` full-height windows. The last one
/// extends to the right edge and absorbs the remainder.
pub fn columns(count: usize, cols: usize) -> Vec<Placement> {
    if count == 0 {
        return Vec::new();
    }
    let width = (cols / count).max(2) as i32;
    (0..count)
        .map(|i| {
            let x1 = width * i as i32;
            let x2 = if i + 1 == count { 0 } else { x1 + width };
            Placement::new(x1, 0, x2, 0)
        })
        .collect()
}
