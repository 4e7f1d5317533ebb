// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filesystem-backed image probing, recipe lookup, and a synthetic catalog.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use bagwall_catalog::{AssetPaths, CatalogItem, CatalogRecord, DimensionProbe, ProbeError};
use bagwall_view::DetailView;
use kurbo::Size;

const NO_RECIPE: &str = "No recipe available for this coffee.";

/// Reads natural sizes from PNG headers without decoding pixel data.
///
/// Each header is read on its own thread; a read that outlasts `budget` is
/// reported as [`ProbeError::TimedOut`] and left to finish in the background.
#[derive(Debug)]
pub(crate) struct PngProbe {
    budget: Duration,
}

impl PngProbe {
    pub(crate) fn new(budget: Duration) -> Self {
        Self { budget }
    }
}

impl DimensionProbe for PngProbe {
    fn probe(&mut self, item: &CatalogItem) -> Result<Size, ProbeError> {
        let path = item.image_ref.clone();
        within_budget(self.budget, move || png_size(&path))
    }
}

/// Runs `read` on a worker thread and waits at most `budget` for its answer.
fn within_budget<F>(budget: Duration, read: F) -> Result<Size, ProbeError>
where
    F: FnOnce() -> Result<Size, ProbeError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("bagwall-png-size".into())
        .spawn(move || {
            // The receiver is gone once the budget has run out.
            let _ = tx.send(read());
        })
        .map_err(|err| ProbeError::Decode(format!("could not start reader: {err}")))?;

    match rx.recv_timeout(budget) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => Err(ProbeError::TimedOut),
        Err(RecvTimeoutError::Disconnected) => {
            Err(ProbeError::Decode("reader stopped without an answer".into()))
        }
    }
}

fn png_size(path: &Path) -> Result<Size, ProbeError> {
    let file = File::open(path).map_err(|source| ProbeError::Io {
        path: path.to_owned(),
        source,
    })?;
    let reader = png::Decoder::new(BufReader::new(file))
        .read_info()
        .map_err(|err| ProbeError::Decode(err.to_string()))?;
    let info = reader.info();
    Ok(Size::new(f64::from(info.width), f64::from(info.height)))
}

/// Prints an item's recipe note, standing in for a detail overlay.
#[derive(Debug)]
pub(crate) struct FsDetailView {
    assets: AssetPaths,
    pub(crate) opened: usize,
}

impl FsDetailView {
    pub(crate) fn new(assets: AssetPaths) -> Self {
        Self { assets, opened: 0 }
    }

    fn recipe(&self, number: u32) -> String {
        self.assets
            .recipe_candidates(number)
            .iter()
            .find_map(|path| fs::read_to_string(path).ok())
            .unwrap_or_else(|| NO_RECIPE.to_owned())
    }
}

impl DetailView for FsDetailView {
    fn open_detail(&mut self, item: &CatalogItem) -> bool {
        let recipe = self.recipe(item.number);
        let preview = recipe.lines().next().unwrap_or(NO_RECIPE);
        tracing::info!(
            number = item.number,
            name = %item.display_name(),
            image = %item.image_ref.display(),
            recipe = preview,
            "detail"
        );
        self.opened += 1;
        true
    }
}

const ORIGINS: [(&str, &str); 8] = [
    ("Ethiopia Yirgacheffe", "floral"),
    ("Kenya Nyeri", "fruity"),
    ("Colombia Huila", "caramel"),
    ("Brazil Cerrado", "nutty"),
    ("Guatemala Antigua", "chocolate"),
    ("Sumatra Mandheling", "earthy"),
    ("Costa Rica Tarrazu", "citrus"),
    ("Rwanda Nyamasheke", "berry"),
];

/// A catalog of `count` bags with made-up sizes, for running without assets.
pub(crate) fn synthetic_catalog(count: u32, assets: &AssetPaths) -> Vec<CatalogItem> {
    (1..=count)
        .zip(ORIGINS.iter().cycle())
        .map(|(number, (origin, note))| {
            let caffeine = if number % 3 == 0 { "decaf" } else { "regular" };
            let record = CatalogRecord {
                number,
                name: Some(format!("{origin} #{number}")),
                tags: vec![(*note).to_owned(), caffeine.to_owned()],
                ..CatalogRecord::default()
            };
            let mut item = CatalogItem::from_record(&record, assets);
            // Bags are portrait; vary the height so columns drift apart.
            let height = 1100.0 + f64::from((number * 37) % 9) * 55.0;
            item.natural_size = Some(Size::new(800.0, height));
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::thread;
    use std::time::Duration;

    use bagwall_catalog::{AssetPaths, ProbeError};
    use kurbo::Size;

    use super::{FsDetailView, NO_RECIPE, png_size, synthetic_catalog, within_budget};

    #[test]
    fn synthetic_catalog_is_placeable() {
        let items = synthetic_catalog(12, &AssetPaths::default());
        assert_eq!(items.len(), 12);
        assert!(items.iter().all(|item| item.is_placeable()));
        assert_eq!(items[2].tags, ["caramel", "decaf"]);
    }

    #[test]
    fn missing_image_is_an_io_error() {
        let err = png_size(&PathBuf::from("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, ProbeError::Io { .. }));
    }

    #[test]
    fn slow_reads_time_out() {
        let err = within_budget(Duration::from_millis(10), || {
            thread::sleep(Duration::from_millis(500));
            Ok(Size::new(1.0, 1.0))
        })
        .unwrap_err();
        assert!(matches!(err, ProbeError::TimedOut));
    }

    #[test]
    fn reads_inside_the_budget_pass_through() {
        let size = within_budget(Duration::from_secs(5), || Ok(Size::new(800.0, 1200.0)));
        assert_eq!(size.unwrap(), Size::new(800.0, 1200.0));

        let err = within_budget(Duration::from_secs(5), || {
            png_size(&PathBuf::from("does/not/exist.png"))
        })
        .unwrap_err();
        assert!(matches!(err, ProbeError::Io { .. }));
    }

    #[test]
    fn missing_recipe_falls_back() {
        let assets = AssetPaths {
            image_dir: PathBuf::from("bags"),
            recipe_dirs: vec![PathBuf::from("does/not/exist")],
        };
        assert_eq!(FsDetailView::new(assets).recipe(4), NO_RECIPE);
    }
}
