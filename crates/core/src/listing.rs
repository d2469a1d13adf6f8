use std::fmt;

use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "↑",
            SortOrder::Desc => "↓",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sortable table columns across the dashboard views. Joined-entity display
/// columns have no backend sort key of their own and fall back to the
/// `createdAt` proxy, so e.g. "sort by User" and "sort by Created" produce
/// the same server ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Action,
    Kind,
    Title,
    Status,
    Priority,
    Due,
    Name,
    Email,
    Created,
    User,
    Target,
    Project,
    Assignee,
    Color,
}

impl SortColumn {
    pub fn backend_field(&self) -> &'static str {
        match self {
            SortColumn::Action => "action",
            SortColumn::Kind => "type",
            SortColumn::Title => "title",
            SortColumn::Status => "status",
            SortColumn::Priority => "priority",
            SortColumn::Due => "dueDate",
            SortColumn::Name => "name",
            SortColumn::Email => "email",
            SortColumn::Created => "createdAt",
            // Joined-entity columns: createdAt stands in for the display name.
            SortColumn::User
            | SortColumn::Target
            | SortColumn::Project
            | SortColumn::Assignee
            | SortColumn::Color => "createdAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSelection {
    pub column: SortColumn,
    pub order: SortOrder,
}

/// Client-side state behind one paginated list view: page, page size, search
/// text, and the active sort. This is the single source the query variables
/// are derived from.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub sort: Option<SortSelection>,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            sort: None,
        }
    }

    pub fn offset(&self) -> u32 {
        (self.page.saturating_sub(1)) * self.page_size
    }

    /// Toggle rule for sort headers: re-selecting the active column flips the
    /// order, selecting any other column resets to ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = match self.sort {
            Some(selection) if selection.column == column => Some(SortSelection {
                column,
                order: selection.order.flipped(),
            }),
            _ => Some(SortSelection {
                column,
                order: SortOrder::Asc,
            }),
        };
    }

    /// Replace the search text. A changed search resets to the first page so
    /// a stale offset cannot point past the filtered result set.
    pub fn set_search(&mut self, search: String) -> bool {
        if self.search == search {
            return false;
        }
        self.search = search;
        self.page = 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn variables(&self) -> Value {
        let mut vars = json!({
            "limit": self.page_size,
            "offset": self.offset(),
        });

        let search = self.search.trim();
        if !search.is_empty() {
            vars["search"] = json!(search);
        }
        if let Some(selection) = self.sort {
            vars["sortBy"] = json!(selection.column.backend_field());
            vars["sortOrder"] = json!(selection.order.as_str());
        }
        vars
    }
}

/// First/last item ordinals shown for page `page` of size `page_size` out of
/// `total` items, clamped so the range never exceeds the total and never goes
/// negative. `None` when there is nothing to show.
pub fn display_range(page: i64, page_size: i64, total: i64) -> Option<(i64, i64)> {
    let total = total.max(0);
    if total == 0 {
        return None;
    }
    let page = page.max(1);
    let size = page_size.max(1);
    let first = ((page - 1) * size + 1).min(total);
    let last = (page * size).min(total);
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn toggle_same_column_flips_order() {
        let mut query = ListQuery::new(10);
        query.toggle_sort(SortColumn::Title);
        assert_eq!(
            query.sort,
            Some(SortSelection {
                column: SortColumn::Title,
                order: SortOrder::Asc
            })
        );

        query.toggle_sort(SortColumn::Title);
        assert_eq!(query.sort.unwrap().order, SortOrder::Desc);

        query.toggle_sort(SortColumn::Title);
        assert_eq!(query.sort.unwrap().order, SortOrder::Asc);
    }

    #[test]
    fn toggle_other_column_resets_to_ascending() {
        let mut query = ListQuery::new(10);
        query.toggle_sort(SortColumn::Title);
        query.toggle_sort(SortColumn::Title);
        assert_eq!(query.sort.unwrap().order, SortOrder::Desc);

        query.toggle_sort(SortColumn::Status);
        let selection = query.sort.unwrap();
        assert_eq!(selection.column, SortColumn::Status);
        assert_eq!(selection.order, SortOrder::Asc);
    }

    #[test]
    fn joined_columns_share_the_created_proxy() {
        assert_eq!(SortColumn::User.backend_field(), "createdAt");
        assert_eq!(SortColumn::Project.backend_field(), "createdAt");
        assert_eq!(SortColumn::Created.backend_field(), "createdAt");
    }

    #[test]
    fn variables_omit_blank_search_and_missing_sort() {
        let query = ListQuery::new(25);
        let vars = query.variables();
        assert_eq!(vars["limit"], 25);
        assert_eq!(vars["offset"], 0);
        assert!(vars.get("search").is_none());
        assert!(vars.get("sortBy").is_none());
    }

    #[test]
    fn variables_carry_trimmed_search_and_sort() {
        let mut query = ListQuery::new(10);
        query.page = 3;
        query.set_search("  deploy  ".into());
        assert_eq!(query.page, 1);
        query.page = 3;
        query.toggle_sort(SortColumn::Due);

        let vars = query.variables();
        assert_eq!(vars["offset"], 20);
        assert_eq!(vars["search"], "deploy");
        assert_eq!(vars["sortBy"], "dueDate");
        assert_eq!(vars["sortOrder"], "ASC");
    }

    #[test]
    fn unchanged_search_does_not_reset_page() {
        let mut query = ListQuery::new(10);
        query.set_search("deploy".into());
        query.page = 4;
        assert!(!query.set_search("deploy".into()));
        assert_eq!(query.page, 4);
    }

    #[rstest]
    #[case(3, 10, 25, Some((21, 25)))]
    #[case(1, 10, 25, Some((1, 10)))]
    #[case(1, 10, 3, Some((1, 3)))]
    #[case(5, 10, 25, Some((25, 25)))]
    #[case(1, 10, 0, None)]
    #[case(-2, 10, 25, Some((1, 10)))]
    #[case(1, 10, -5, None)]
    fn display_range_stays_within_total(
        #[case] page: i64,
        #[case] size: i64,
        #[case] total: i64,
        #[case] expected: Option<(i64, i64)>,
    ) {
        let range = display_range(page, size, total);
        assert_eq!(range, expected);
        if let Some((first, last)) = range {
            assert!(first >= 1);
            assert!(last <= total);
            assert!(first <= last);
        }
    }
}
