/// Tab identifiers for the TUI application.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Calculator,
    Chart,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Calculator, TabId::Chart];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Calculator => "Calculator",
            TabId::Chart => "Chart",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Calculator => 0,
            TabId::Chart => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Calculator),
            1 => Some(TabId::Chart),
            _ => None,
        }
    }
}
