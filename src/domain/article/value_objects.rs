use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid article id: {value}")))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<ArticleId> for Uuid {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Wrap a value read back from storage. Rows written before validation
    /// existed are kept as they are.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markdown body of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Wrap a value read back from storage. Rows written before validation
    /// existed are kept as they are.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// URL-safe identifier. Uniqueness is not checked here; storage may hold duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Wrap a value read back from storage. Rows written before validation
    /// existed are kept as they are.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum ArticleCategory {
    #[default]
    General,
    #[serde(rename = "Food Allergies")]
    FoodAllergies,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
    Keto,
    #[serde(rename = "Family Planning")]
    FamilyPlanning,
    #[serde(rename = "Seasonal Cooking")]
    SeasonalCooking,
    Nutrition,
    #[serde(rename = "Recipe Tips")]
    RecipeTips,
    #[serde(rename = "Kitchen Safety")]
    KitchenSafety,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 9] = [
        ArticleCategory::General,
        ArticleCategory::FoodAllergies,
        ArticleCategory::GlutenFree,
        ArticleCategory::Keto,
        ArticleCategory::FamilyPlanning,
        ArticleCategory::SeasonalCooking,
        ArticleCategory::Nutrition,
        ArticleCategory::RecipeTips,
        ArticleCategory::KitchenSafety,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArticleCategory::General => "General",
            ArticleCategory::FoodAllergies => "Food Allergies",
            ArticleCategory::GlutenFree => "Gluten-Free",
            ArticleCategory::Keto => "Keto",
            ArticleCategory::FamilyPlanning => "Family Planning",
            ArticleCategory::SeasonalCooking => "Seasonal Cooking",
            ArticleCategory::Nutrition => "Nutrition",
            ArticleCategory::RecipeTips => "Recipe Tips",
            ArticleCategory::KitchenSafety => "Kitchen Safety",
        }
    }
}

impl FromStr for ArticleCategory {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(value))
            .ok_or_else(|| DomainError::Validation(format!("unknown category: {value}")))
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered tag list; blank entries are dropped and repeats keep their first position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleTags(Vec<String>);

impl ArticleTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.into();
            let tag = tag.trim();
            if tag.is_empty() || normalized.iter().any(|existing| existing == tag) {
                continue;
            }
            normalized.push(tag.to_string());
        }
        Self(normalized)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}
