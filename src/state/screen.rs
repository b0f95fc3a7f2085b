use crate::catalog::CatalogItem;

/// List-screen state. `Success` if and only if the catalog load succeeded;
/// `Error` only on load failure, never partially.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListScreenState {
    #[default]
    Loading,
    Success {
        updated_at: String,
        items: Vec<CatalogItem>,
    },
    Error {
        message: String,
    },
}

impl ListScreenState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Detail-screen state for a single tracked item id.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailScreenState {
    #[default]
    Loading,
    Success {
        item: CatalogItem,
        is_favorite: bool,
    },
    Error {
        message: String,
    },
}

impl DetailScreenState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}
