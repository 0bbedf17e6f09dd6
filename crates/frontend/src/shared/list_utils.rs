/// List helpers shared by the table pages (sorting + header indicators)
use std::cmp::Ordering;

/// Trait for row types that support column sorting.
pub trait Sortable {
    /// Compare two rows by the named column.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let ordering = a.compare_by_field(b, field);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            "▲"
        } else {
            "▼"
        }
    } else {
        ""
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        amount: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(other.name),
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let mut rows = vec![
            Row { name: "b", amount: 2.0 },
            Row { name: "a", amount: 3.0 },
            Row { name: "c", amount: 1.0 },
        ];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0].name, "a");

        sort_list(&mut rows, "amount", false);
        assert_eq!(rows[0].amount, 3.0);
    }

    #[test]
    fn unknown_field_keeps_order() {
        let mut rows = vec![Row { name: "b", amount: 2.0 }, Row { name: "a", amount: 3.0 }];
        sort_list(&mut rows, "missing", true);
        assert_eq!(rows[0].name, "b");
    }

    #[test]
    fn indicator_reflects_active_column() {
        assert_eq!(get_sort_indicator("name", "name", true), "▲");
        assert_eq!(get_sort_indicator("name", "name", false), "▼");
        assert_eq!(get_sort_indicator("name", "amount", true), "");
        assert_eq!(
            get_sort_class("name", "name"),
            "sort-indicator sort-indicator--active"
        );
    }
}
