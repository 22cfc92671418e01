use std::ops::{Deref, DerefMut};

/// Records per page served by the hymn API.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Width of the page navigation window.
pub const DEFAULT_NAVIGATE_PAGES: usize = 5;

/// One page of records plus the paging metadata the console renders from.
///
/// Field names follow the wire format of the hymn API.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub records: Vec<T>,
    pub page_num: usize,
    /// Number of records on this page, not the page capacity.
    pub page_size: usize,
    pub total_pages: u64,
    pub total_records: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    /// Previous page number, `0` when on the first page.
    pub prev_page: usize,
    /// Next page number, `0` when on the last page.
    pub next_page: usize,
    pub navigate_pages: usize,
    pub navi_first_page: usize,
    pub navi_last_page: usize,
    pub navigate_nos: Vec<usize>,
}

impl<T> Pagination<T> {
    /// Build a page with the service defaults (page size 12, window of 5).
    pub fn of(records: Vec<T>, total_records: u64, page_num: usize) -> Self {
        Self::with_layout(
            records,
            total_records,
            page_num,
            DEFAULT_PAGE_SIZE,
            DEFAULT_NAVIGATE_PAGES,
        )
    }

    /// Build a page with an explicit page size and navigation window.
    ///
    /// An empty record set normalizes to page 1 of 1 with zero totals.
    pub fn with_layout(
        records: Vec<T>,
        total_records: u64,
        page_num: usize,
        page_size: usize,
        navigate_pages: usize,
    ) -> Self {
        let (page_num, total_records, total_pages) = match records.is_empty() {
            true => (1, 0, 1),
            false => {
                let full = total_records / page_size as u64;
                let total_pages = match total_records % page_size as u64 {
                    0 => full,
                    _ => full + 1,
                };
                (page_num.max(1), total_records, total_pages)
            }
        };

        let navigate_nos = navigate_window(page_num, total_pages, navigate_pages);

        let has_prev_page = page_num > 1;
        let has_next_page = (page_num as u64) < total_pages;

        Self {
            page_size: records.len(),
            records,
            page_num,
            total_pages,
            total_records,
            has_prev_page,
            has_next_page,
            prev_page: match has_prev_page {
                true => page_num - 1,
                false => 0,
            },
            next_page: match has_next_page {
                true => page_num + 1,
                false => 0,
            },
            navigate_pages,
            navi_first_page: navigate_nos.first().copied().unwrap_or_default(),
            navi_last_page: navigate_nos.last().copied().unwrap_or_default(),
            navigate_nos,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.records.is_empty()
    }
}

impl<T> Deref for Pagination<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<T> DerefMut for Pagination<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.records
    }
}

/// Page numbers shown in the navigation, a window of `navigate_pages` entries
/// centred on the current page and clamped to `[1, total_pages]`.
fn navigate_window(page_num: usize, total_pages: u64, navigate_pages: usize) -> Vec<usize> {
    if total_pages <= navigate_pages as u64 {
        return (1..=total_pages as usize).collect();
    }

    let half = navigate_pages / 2;
    let start = page_num as i64 - half as i64;
    let end = page_num + half;

    if end as u64 > total_pages && start >= 1 {
        let end = total_pages as usize;
        (end + 1 - navigate_pages..=end).collect()
    } else {
        let start = start.max(1) as usize;
        (start..start + navigate_pages).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let page = Pagination::<u32>::of(vec![], 99, 7);

        assert_eq!(page.page_num, 1);
        assert_eq!(page.page_size, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_records, 0);
        assert!(!page.has_prev_page);
        assert!(!page.has_next_page);
        assert_eq!(page.navigate_nos, vec![1]);
        assert!(!page.has_content());
    }

    #[test]
    fn first_page() {
        let page = Pagination::of((0..12).collect(), 30, 1);

        assert_eq!(page.page_size, 12);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.navigate_nos, vec![1, 2, 3]);
        assert_eq!(page.navi_first_page, 1);
        assert_eq!(page.navi_last_page, 3);
        assert_eq!(page.prev_page, 0);
        assert_eq!(page.next_page, 2);
        assert!(!page.has_prev_page);
        assert!(page.has_next_page);
    }

    #[test]
    fn window_centred() {
        let page = Pagination::of((0..12).collect(), 120, 5);

        assert_eq!(page.total_pages, 10);
        assert_eq!(page.navigate_nos, vec![3, 4, 5, 6, 7]);
        assert_eq!(page.prev_page, 4);
        assert_eq!(page.next_page, 6);
    }

    #[test]
    fn window_clamped_at_start() {
        let page = Pagination::of((0..12).collect(), 120, 1);
        assert_eq!(page.navigate_nos, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_clamped_at_end() {
        let page = Pagination::of((0..12).collect(), 120, 10);

        assert_eq!(page.navigate_nos, vec![6, 7, 8, 9, 10]);
        assert!(page.has_prev_page);
        assert!(!page.has_next_page);
        assert_eq!(page.next_page, 0);
    }

    #[test]
    fn partial_last_page() {
        let page = Pagination::of((0..5).collect(), 29, 3);

        assert_eq!(page.page_size, 5);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next_page);
    }

    #[test]
    fn deserialize_wire_format() {
        let page: Pagination<crate::hymn::HymnSummary> = serde_json::from_str(
            r#"{
                "records": [
                    {"id":1,"nameJp":"A","nameKr":"B","link":"/x","lineNumber":"BURGUNDY"}
                ],
                "pageNum": 2,
                "pageSize": 1,
                "totalPages": 3,
                "totalRecords": 25,
                "hasPrevPage": true,
                "hasNextPage": true,
                "prevPage": 1,
                "nextPage": 3,
                "navigatePages": 5,
                "naviFirstPage": 1,
                "naviLastPage": 3,
                "navigateNos": [1, 2, 3]
            }"#,
        )
        .unwrap();

        assert_eq!(page.records.len(), 1);
        assert_eq!(page.page_num, 2);
        assert_eq!(page.total_records, 25);
        assert_eq!(page.navigate_nos, vec![1, 2, 3]);
    }

    #[test]
    fn round_trip_matches_of() {
        let page = Pagination::of(vec!["a", "b"], 2, 1);
        let json = serde_json::to_string(&page).unwrap();
        let back: Pagination<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.total_pages, 1);
        assert_eq!(back.records, vec!["a", "b"]);
    }
}
