use std::path::Path;

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.ingredients.len()
    }
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "김치볶음밥",
        &["김치", "밥", "달걀", "대파", "식용유", "간장"],
    ),
    (
        "된장찌개",
        &["된장", "두부", "애호박", "감자", "양파", "대파", "마늘"],
    ),
    ("간장계란밥", &["밥", "달걀", "간장", "버터", "김"]),
    (
        "닭가슴살 샐러드",
        &["닭가슴살", "양상추", "방울토마토", "오이", "올리브오일", "소금"],
    ),
    (
        "불고기",
        &["소고기", "양파", "대파", "간장", "설탕", "마늘", "참기름"],
    ),
    ("감자조림", &["감자", "간장", "설탕", "식용유", "물엿"]),
    (
        "오믈렛",
        &["달걀", "우유", "양파", "버터", "소금", "후추"],
    ),
    (
        "돼지고기 김치찌개",
        &["돼지고기", "김치", "두부", "양파", "대파", "고춧가루"],
    ),
    (
        "토마토 파스타",
        &["파스타면", "토마토소스", "양파", "올리브오일", "마늘", "치즈"],
    ),
    ("참치마요 덮밥", &["참치캔", "밥", "마요네즈", "간장", "김"]),
    (
        "야채볶음",
        &["양파", "당근", "파프리카", "애호박", "간장", "식용유"],
    ),
    (
        "비빔국수",
        &["소면", "고춧가루", "식초", "설탕", "오이", "김"],
    ),
];

/// The built-in catalog of home recipes.
pub fn builtin() -> Vec<Recipe> {
    BUILTIN
        .iter()
        .map(|(name, ingredients)| Recipe::new(*name, ingredients))
        .collect()
}

#[derive(Deserialize)]
struct CatalogFile {
    recipes: Vec<Recipe>,
}

/// Load a catalog from a TOML file made of `[[recipes]]` tables.
pub fn load(path: impl AsRef<Path>) -> weekpick_shared::Result<Vec<Recipe>> {
    let path = path.as_ref();
    let file: CatalogFile = Config::builder()
        .add_source(File::from(path).format(FileFormat::Toml))
        .build()?
        .try_deserialize()?;

    validate(&file.recipes)?;

    tracing::debug!(
        path = %path.display(),
        recipes = file.recipes.len(),
        "catalog loaded"
    );

    Ok(file.recipes)
}

pub fn validate(recipes: &[Recipe]) -> weekpick_shared::Result<()> {
    if recipes.is_empty() {
        weekpick_shared::catalog!("no recipes");
    }

    for recipe in recipes {
        if recipe.name.trim().is_empty() {
            weekpick_shared::catalog!("recipe name is empty");
        }

        if recipe.ingredients.is_empty() {
            weekpick_shared::catalog!("{} has no ingredients", recipe.name);
        }

        if recipe.ingredients.iter().any(|i| i.trim().is_empty()) {
            weekpick_shared::catalog!("{} has a blank ingredient", recipe.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let recipes = builtin();
        assert_eq!(recipes.len(), 12);
        assert!(validate(&recipes).is_ok());
        assert_eq!(recipes[0].name, "김치볶음밥");
        assert_eq!(recipes[0].total(), 6);
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let err = validate(&[]).unwrap_err();
        assert_eq!(err.to_string(), "invalid catalog: no recipes");
    }

    #[test]
    fn test_validate_rejects_recipe_without_ingredients() {
        let err = validate(&[Recipe::new("빈 접시", &[])]).unwrap_err();
        assert_eq!(err.to_string(), "invalid catalog: 빈 접시 has no ingredients");
    }

    #[test]
    fn test_validate_rejects_blank_ingredient() {
        let err = validate(&[Recipe::new("라면", &["라면", "  "])]).unwrap_err();
        assert!(matches!(err, weekpick_shared::Error::Catalog(_)));
    }
}
