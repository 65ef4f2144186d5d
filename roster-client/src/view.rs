//! List view-model: search, sort and pagination over a fetched employee list.
//!
//! All functions are pure and leave the caller's list untouched; they return
//! references in the derived order instead.

use shared::client::EmployeeResponse;

/// Rows shown per table page
pub const PAGE_SIZE: usize = 10;

/// Column to order the table by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Number,
    Name,
    Email,
    Mobile,
    Designation,
    Gender,
    Status,
    CreatedDate,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Case-insensitive substring search across name, email and the employee
/// number rendered as text. A blank query matches everything.
pub fn search<'a>(items: &'a [EmployeeResponse], query: &str) -> Vec<&'a EmployeeResponse> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&needle)
                || e.email.to_lowercase().contains(&needle)
                || e.employee_id.to_string().contains(&needle)
        })
        .collect()
}

/// Order rows by the given column.
///
/// The sort is stable, so equal keys keep their incoming order in both
/// directions.
pub fn sorted<'a>(
    items: &[&'a EmployeeResponse],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a EmployeeResponse> {
    let mut rows: Vec<&EmployeeResponse> = items.to_vec();
    rows.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Number => a.employee_id.cmp(&b.employee_id),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            SortKey::Mobile => a.mobile.cmp(&b.mobile),
            SortKey::Designation => a.designation.as_str().cmp(b.designation.as_str()),
            SortKey::Gender => a.gender.as_str().cmp(b.gender.as_str()),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::CreatedDate => a.created_date.cmp(&b.created_date),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}

/// Number of pages needed for `total` rows
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The rows of page `n` (zero-based); empty when the page is out of range
pub fn page<T>(items: &[T], n: usize) -> &[T] {
    let start = n.saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use shared::models::employee::{Designation, EmployeeStatus, Gender};

    fn employee(number: i64, name: &str, email: &str) -> EmployeeResponse {
        EmployeeResponse {
            id: format!("employee:{number}"),
            employee_id: number,
            name: name.to_string(),
            email: email.to_string(),
            mobile: "9876543210".to_string(),
            designation: Designation::Hr,
            gender: Gender::M,
            course: vec!["MCA".to_string()],
            image: None,
            status: EmployeeStatus::Active,
            created_date: DateTime::from_timestamp(1_700_000_000 + number, 0).unwrap(),
        }
    }

    fn roster() -> Vec<EmployeeResponse> {
        vec![
            employee(1, "Hukum Gupta", "hukum@example.com"),
            employee(2, "Manish Sharma", "manish@example.com"),
            employee(3, "Yash Verma", "yash@example.com"),
            employee(17, "Priya Singh", "priya@example.com"),
        ]
    }

    fn numbers(rows: &[&EmployeeResponse]) -> Vec<i64> {
        rows.iter().map(|e| e.employee_id).collect()
    }

    #[test]
    fn test_blank_query_returns_all_in_order() {
        let items = roster();
        assert_eq!(numbers(&search(&items, "")), vec![1, 2, 3, 17]);
        assert_eq!(numbers(&search(&items, "   ")), vec![1, 2, 3, 17]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let items = roster();
        assert_eq!(numbers(&search(&items, "MANISH")), vec![2]);
        assert_eq!(numbers(&search(&items, "sha")), vec![2]);
    }

    #[test]
    fn test_search_covers_email_and_number_text() {
        let items = roster();
        assert_eq!(numbers(&search(&items, "priya@")), vec![17]);
        // "7" appears in 17 only
        assert_eq!(numbers(&search(&items, "7")), vec![17]);
        assert_eq!(numbers(&search(&items, "1")), vec![1, 17]);
    }

    #[test]
    fn test_search_leaves_source_untouched() {
        let items = roster();
        let _ = search(&items, "yash");
        let ids: Vec<i64> = items.iter().map(|e| e.employee_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 17]);
    }

    #[test]
    fn test_sort_by_name_both_directions() {
        let items = roster();
        let all = search(&items, "");

        let asc = sorted(&all, SortKey::Name, SortDirection::Ascending);
        assert_eq!(numbers(&asc), vec![1, 2, 17, 3]);

        let desc = sorted(&all, SortKey::Name, SortDirection::Descending);
        assert_eq!(numbers(&desc), vec![3, 17, 2, 1]);
    }

    #[test]
    fn test_sort_ties_keep_insertion_order() {
        let items = vec![
            employee(1, "Same Name", "a@example.com"),
            employee(2, "Same Name", "b@example.com"),
            employee(3, "Same Name", "c@example.com"),
        ];
        let all = search(&items, "");

        let asc = sorted(&all, SortKey::Name, SortDirection::Ascending);
        assert_eq!(numbers(&asc), vec![1, 2, 3]);

        // ties are not reversed when the direction flips
        let desc = sorted(&all, SortKey::Name, SortDirection::Descending);
        assert_eq!(numbers(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_number_descending() {
        let items = roster();
        let all = search(&items, "");
        let desc = sorted(&all, SortKey::Number, SortDirection::Descending);
        assert_eq!(numbers(&desc), vec![17, 3, 2, 1]);
    }

    #[test]
    fn test_sort_by_created_date() {
        let items = roster();
        let all = search(&items, "");
        let asc = sorted(&all, SortKey::CreatedDate, SortDirection::Ascending);
        assert_eq!(numbers(&asc), vec![1, 2, 3, 17]);
    }

    #[test]
    fn test_page_count_boundaries() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn test_page_slicing() {
        let numbers: Vec<usize> = (0..25).collect();
        assert_eq!(page(&numbers, 0), (0..10).collect::<Vec<_>>().as_slice());
        assert_eq!(page(&numbers, 1), (10..20).collect::<Vec<_>>().as_slice());
        assert_eq!(page(&numbers, 2), (20..25).collect::<Vec<_>>().as_slice());
        assert!(page(&numbers, 3).is_empty());
    }
}
