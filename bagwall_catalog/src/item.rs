// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use kurbo::Size;

use crate::CatalogRecord;

/// Where a catalog's images and recipe notes live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    /// Directory holding `coffee-bag-NN.png` images.
    pub image_dir: PathBuf,
    /// Directories searched in order for `coffee-NN.md` recipes.
    pub recipe_dirs: Vec<PathBuf>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("bags"),
            recipe_dirs: vec![PathBuf::from("recipes"), PathBuf::from("src/data/recipes")],
        }
    }
}

impl AssetPaths {
    /// Image file for catalog item `number`.
    #[must_use]
    pub fn image_ref(&self, number: u32) -> PathBuf {
        self.image_dir.join(format!("coffee-bag-{number:02}.png"))
    }

    /// Recipe files for `number`, most preferred first.
    #[must_use]
    pub fn recipe_candidates(&self, number: u32) -> Vec<PathBuf> {
        let file = format!("coffee-{number:02}.md");
        self.recipe_dirs.iter().map(|dir| dir.join(&file)).collect()
    }
}

/// A catalog entry ready for layout.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    /// Unique positive identity.
    pub number: u32,
    /// Display name.
    pub name: Option<String>,
    /// Free-form search tags.
    pub tags: Vec<String>,
    /// Image backing this item.
    pub image_ref: PathBuf,
    /// Natural image size, once resolved.
    pub natural_size: Option<Size>,
    /// The image failed to load and `natural_size` is a stand-in.
    pub placeholder: bool,
}

impl CatalogItem {
    /// Builds an unresolved item from a parsed record.
    #[must_use]
    pub fn from_record(record: &CatalogRecord, assets: &AssetPaths) -> Self {
        Self {
            number: record.number,
            name: record.name.clone(),
            tags: record.tags.clone(),
            image_ref: assets.image_ref(record.number),
            natural_size: None,
            placeholder: false,
        }
    }

    /// Builds unresolved items for a whole catalog.
    #[must_use]
    pub fn from_records(records: &[CatalogRecord], assets: &AssetPaths) -> Vec<Self> {
        records
            .iter()
            .map(|record| Self::from_record(record, assets))
            .collect()
    }

    /// Returns `true` once the item has a usable size.
    #[must_use]
    pub fn is_placeable(&self) -> bool {
        self.natural_size.is_some_and(|s| {
            s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0
        })
    }

    /// Name shown to people, falling back to the catalog number.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Coffee bag {}", self.number),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use kurbo::Size;

    use super::{AssetPaths, CatalogItem};
    use crate::CatalogRecord;

    #[test]
    fn asset_names_are_zero_padded() {
        let assets = AssetPaths::default();
        assert_eq!(assets.image_ref(7), PathBuf::from("bags/coffee-bag-07.png"));
        assert_eq!(assets.image_ref(112), PathBuf::from("bags/coffee-bag-112.png"));
        assert_eq!(
            assets.recipe_candidates(3),
            [
                PathBuf::from("recipes/coffee-03.md"),
                PathBuf::from("src/data/recipes/coffee-03.md"),
            ]
        );
    }

    #[test]
    fn display_name_falls_back_to_number() {
        let record = CatalogRecord {
            number: 5,
            ..CatalogRecord::default()
        };
        let mut item = CatalogItem::from_record(&record, &AssetPaths::default());
        assert_eq!(item.display_name(), "Coffee bag 5");
        item.name = Some("Ethiopia Guji".into());
        assert_eq!(item.display_name(), "Ethiopia Guji");
    }

    #[test]
    fn placeable_needs_positive_size() {
        let record = CatalogRecord {
            number: 1,
            ..CatalogRecord::default()
        };
        let mut item = CatalogItem::from_record(&record, &AssetPaths::default());
        assert!(!item.is_placeable());
        item.natural_size = Some(Size::new(0.0, 10.0));
        assert!(!item.is_placeable());
        item.natural_size = Some(Size::new(640.0, 900.0));
        assert!(item.is_placeable());
    }
}
