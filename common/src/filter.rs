//! 絞り込み状態
//!
//! 検索文字列、選択中のカテゴリ、並び順、既知のカテゴリ一覧を保持する。

/// 「すべてのカテゴリ」を表す値
pub const ALL_CATEGORIES: &str = "all";

/// 並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// キャッシュの順序のまま
    #[default]
    Default,
    PriceLowHigh,
    PriceHighLow,
    TitleAsc,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Default,
        SortBy::PriceLowHigh,
        SortBy::PriceHighLow,
        SortBy::TitleAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Default => "default",
            SortBy::PriceLowHigh => "price-low-high",
            SortBy::PriceHighLow => "price-high-low",
            SortBy::TitleAsc => "title-asc",
        }
    }

    /// 選択肢の表示名
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Default => "Default",
            SortBy::PriceLowHigh => "Price: Low to High",
            SortBy::PriceHighLow => "Price: High to Low",
            SortBy::TitleAsc => "Title: A to Z",
        }
    }
}

impl std::str::FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(SortBy::Default),
            "price-low-high" => Ok(SortBy::PriceLowHigh),
            "price-high-low" => Ok(SortBy::PriceHighLow),
            "title-asc" => Ok(SortBy::TitleAsc),
            _ => Err(format!(
                "Unknown sort: {}. Use default, price-low-high, price-high-low, or title-asc",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 絞り込み状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub category: String,
    pub sort_by: SortBy,
    pub known_categories: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_by: SortBy::Default,
            known_categories: Vec::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    pub fn set_category(&mut self, name: impl Into<String>) {
        self.category = name.into();
        if !self.category_is_known() {
            tracing::debug!(category = %self.category, "category not in known list");
        }
    }

    pub fn set_sort_by(&mut self, mode: SortBy) {
        self.sort_by = mode;
    }

    /// 既知のカテゴリを置き換え（重複は先勝ちで除去）
    pub fn set_known_categories(&mut self, list: Vec<String>) {
        let mut categories: Vec<String> = Vec::with_capacity(list.len());
        for name in list {
            if !categories.contains(&name) {
                categories.push(name);
            }
        }
        self.known_categories = categories;
    }

    /// 既定値に戻す（既知のカテゴリは残す）
    pub fn reset(&mut self) {
        self.search_query.clear();
        self.category = ALL_CATEGORIES.to_string();
        self.sort_by = SortBy::Default;
    }

    /// 選択中のカテゴリが "all" または既知のカテゴリか
    pub fn category_is_known(&self) -> bool {
        self.category == ALL_CATEGORIES || self.known_categories.contains(&self.category)
    }

    /// 検索語かカテゴリで商品を絞り込んでいるか（並び替えは含まない）
    pub fn is_narrowed(&self) -> bool {
        !self.search_query.is_empty() || self.category != ALL_CATEGORIES
    }

    /// 絞り込みが既定値のままか
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty()
            && self.category == ALL_CATEGORIES
            && self.sort_by == SortBy::Default
    }
}
