use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    /// Any unrecognized key: keep collection order.
    Unsorted,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "new",
            SortKey::Oldest => "old",
            SortKey::TitleAsc => "az",
            SortKey::TitleDesc => "za",
            SortKey::Unsorted => "none",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "new" => SortKey::Newest,
            "old" => SortKey::Oldest,
            "az" => SortKey::TitleAsc,
            "za" => SortKey::TitleDesc,
            _ => SortKey::Unsorted,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
