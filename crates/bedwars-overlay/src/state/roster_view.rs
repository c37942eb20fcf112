//! Roster Table State

/// Column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Order players were added in
    #[default]
    Added,
    Name,
    FinalKills,
    FinalDeaths,
    Fkdr,
    Wins,
    Wlr,
    BedsBroken,
}

impl SortColumn {
    /// Cycle to the next column, wrapping back to insertion order
    pub fn next(self) -> Self {
        match self {
            Self::Added => Self::Name,
            Self::Name => Self::FinalKills,
            Self::FinalKills => Self::FinalDeaths,
            Self::FinalDeaths => Self::Fkdr,
            Self::Fkdr => Self::Wins,
            Self::Wins => Self::Wlr,
            Self::Wlr => Self::BedsBroken,
            Self::BedsBroken => Self::Added,
        }
    }

    /// Order a column starts in when it is selected
    pub fn default_order(self) -> SortOrder {
        match self {
            Self::Added | Self::Name => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }

    /// Index of the table column this sorts by, if it is a visible column
    pub fn column_index(self) -> Option<usize> {
        match self {
            Self::Added => None,
            Self::Name => Some(0),
            Self::FinalKills => Some(1),
            Self::FinalDeaths => Some(2),
            Self::Fkdr => Some(3),
            Self::Wins => Some(4),
            Self::Wlr => Some(5),
            Self::BedsBroken => Some(6),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Cursor and sorting of the roster table
#[derive(Debug, Clone, Default)]
pub struct RosterViewState {
    /// Index into the displayed (sorted) rows
    pub cursor: usize,
    pub sort_column: SortColumn,
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_cycle_wraps() {
        let mut column = SortColumn::default();
        for _ in 0..8 {
            column = column.next();
        }
        assert_eq!(column, SortColumn::Added);
    }

    #[test]
    fn test_numeric_columns_start_descending() {
        assert_eq!(SortColumn::Fkdr.default_order(), SortOrder::Descending);
        assert_eq!(SortColumn::Name.default_order(), SortOrder::Ascending);
    }
}
