//! Pure pagination math. Pages are 1-based everywhere in the UI.

/// Number of pages needed for `total` items, never less than 1.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        return 1;
    }
    (total + page_size - 1) / page_size
}

/// Clamp a requested page into `[1, last]`.
pub fn clamp_page(page: usize, last: usize) -> usize {
    page.max(1).min(last.max(1))
}

/// The slice of `all` visible on a 1-based `page`.
pub fn slice_page<T: Clone>(all: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page_size == 0 {
        return Vec::new();
    }
    let start = (page.max(1) - 1) * page_size;
    let end = (start + page_size).min(all.len());
    if start >= all.len() {
        return Vec::new();
    }
    all[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_with_floor_of_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 2), 2);

        // invariant: total_pages == max(1, ceil(total / page_size))
        for total in 0..200 {
            for page_size in 1..12 {
                let expected = std::cmp::max(1, (total + page_size - 1) / page_size);
                assert_eq!(total_pages(total, page_size), expected);
            }
        }
    }

    #[test]
    fn clamp_keeps_page_in_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(1, 0), 1);
    }

    #[test]
    fn slice_page_is_one_based() {
        let all: Vec<u32> = (1..=5).collect();
        assert_eq!(slice_page(&all, 1, 2), vec![1, 2]);
        assert_eq!(slice_page(&all, 2, 2), vec![3, 4]);
        assert_eq!(slice_page(&all, 3, 2), vec![5]);
        assert_eq!(slice_page(&all, 4, 2), Vec::<u32>::new());
    }
}
