use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    All,
    Headphones,
    Smartphones,
    Speakers,
    Laptops,
    Cameras,
    Wearables,
    Gaming,
    Audio,
}

impl Category {
    /// Menu order.
    pub const ALL: [Category; 9] = [
        Category::All,
        Category::Headphones,
        Category::Smartphones,
        Category::Speakers,
        Category::Laptops,
        Category::Cameras,
        Category::Wearables,
        Category::Gaming,
        Category::Audio,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Headphones => "Headphones",
            Category::Smartphones => "Smartphones",
            Category::Speakers => "Speakers",
            Category::Laptops => "Laptops",
            Category::Cameras => "Cameras",
            Category::Wearables => "Wearables",
            Category::Gaming => "Gaming",
            Category::Audio => "Audio",
        }
    }

    /// Keywords matched (case-insensitively) against product name and
    /// description. `All` has none and means "no filter".
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::All => &[],
            Category::Headphones => &["headphones", "earbuds"],
            Category::Smartphones => &["smartphone", "phone"],
            Category::Speakers => &["speaker"],
            Category::Laptops => &["laptop"],
            Category::Cameras => &["camera", "dslr"],
            Category::Wearables => &["fitness", "tracker", "watch"],
            Category::Gaming => &["gaming", "console"],
            Category::Audio => &["headphones", "earbuds", "speaker"],
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Category::All)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::All
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
