// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::{CatalogItem, ProbeError};

/// Width given to placeholder sizes; only the aspect ratio matters to layout.
const PLACEHOLDER_WIDTH: f64 = 1000.0;

/// Learns the natural size of an item's image.
///
/// Implementations must return within a bounded time. A slow image is
/// reported as [`ProbeError::TimedOut`] rather than stalling the wall.
pub trait DimensionProbe {
    /// Returns the natural pixel size of `item`'s image.
    fn probe(&mut self, item: &CatalogItem) -> Result<Size, ProbeError>;
}

impl<F> DimensionProbe for F
where
    F: FnMut(&CatalogItem) -> Result<Size, ProbeError>,
{
    fn probe(&mut self, item: &CatalogItem) -> Result<Size, ProbeError> {
        self(item)
    }
}

/// What to do with an item whose image size cannot be learned.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Leave the item unresolved; the layout skips it.
    #[default]
    Exclude,
    /// Give the item a stand-in size and draw it as a placeholder box.
    Placeholder {
        /// Height divided by width of the stand-in.
        aspect_ratio: f64,
    },
}

/// Outcome of [`resolve_dimensions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Items whose size was probed successfully.
    pub resolved: usize,
    /// Numbers of items given a placeholder size.
    pub placeholders: Vec<u32>,
    /// Numbers of items left unresolved.
    pub excluded: Vec<u32>,
}

/// Probes every item and records its natural size.
///
/// Returns only after every probe has finished, so a layout built afterwards
/// sees all sizes. Failures are logged and handled per `policy`; they never
/// abort the pass.
pub fn resolve_dimensions(
    items: &mut [CatalogItem],
    probe: &mut dyn DimensionProbe,
    policy: UnresolvedPolicy,
) -> ResolveReport {
    let mut report = ResolveReport::default();
    for item in items.iter_mut() {
        let outcome = probe.probe(item).and_then(|size| {
            if is_usable(size) {
                Ok(size)
            } else {
                Err(ProbeError::InvalidSize {
                    width: size.width,
                    height: size.height,
                })
            }
        });
        match outcome {
            Ok(size) => {
                item.natural_size = Some(size);
                item.placeholder = false;
                report.resolved += 1;
            }
            Err(err) => {
                tracing::warn!(
                    number = item.number,
                    image = %item.image_ref.display(),
                    error = %err,
                    "image size unavailable"
                );
                match policy {
                    UnresolvedPolicy::Placeholder { aspect_ratio }
                        if aspect_ratio.is_finite() && aspect_ratio > 0.0 =>
                    {
                        item.natural_size =
                            Some(Size::new(PLACEHOLDER_WIDTH, PLACEHOLDER_WIDTH * aspect_ratio));
                        item.placeholder = true;
                        report.placeholders.push(item.number);
                    }
                    _ => {
                        item.natural_size = None;
                        item.placeholder = false;
                        report.excluded.push(item.number);
                    }
                }
            }
        }
    }
    tracing::debug!(
        resolved = report.resolved,
        placeholders = report.placeholders.len(),
        excluded = report.excluded.len(),
        "image sizes resolved"
    );
    report
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ResolveReport, UnresolvedPolicy, resolve_dimensions};
    use crate::{AssetPaths, CatalogItem, CatalogRecord, ProbeError};

    fn items(numbers: &[u32]) -> Vec<CatalogItem> {
        let records: Vec<CatalogRecord> = numbers
            .iter()
            .map(|&number| CatalogRecord {
                number,
                ..CatalogRecord::default()
            })
            .collect();
        CatalogItem::from_records(&records, &AssetPaths::default())
    }

    fn odd_numbers_fail(item: &CatalogItem) -> Result<Size, ProbeError> {
        if item.number % 2 == 1 {
            Err(ProbeError::Decode("corrupt".into()))
        } else {
            Ok(Size::new(400.0, 600.0))
        }
    }

    #[test]
    fn exclude_leaves_failures_unresolved() {
        let mut items = items(&[1, 2, 3, 4]);
        let report = resolve_dimensions(&mut items, &mut odd_numbers_fail, UnresolvedPolicy::Exclude);
        assert_eq!(
            report,
            ResolveReport {
                resolved: 2,
                placeholders: vec![],
                excluded: vec![1, 3],
            }
        );
        let placeable: Vec<u32> = items
            .iter()
            .filter(|i| i.is_placeable())
            .map(|i| i.number)
            .collect();
        assert_eq!(placeable, [2, 4]);
    }

    #[test]
    fn placeholder_substitutes_aspect_ratio() {
        let mut items = items(&[1, 2]);
        let report = resolve_dimensions(
            &mut items,
            &mut odd_numbers_fail,
            UnresolvedPolicy::Placeholder { aspect_ratio: 1.5 },
        );
        assert_eq!(report.placeholders, [1]);
        assert!(items[0].placeholder);
        assert!(items[0].is_placeable());
        let size = items[0].natural_size.unwrap();
        assert!((size.height / size.width - 1.5).abs() < 1e-12);
        assert!(!items[1].placeholder);
    }

    #[test]
    fn degenerate_sizes_count_as_failures() {
        let mut items = items(&[8]);
        let report = resolve_dimensions(
            &mut items,
            &mut |_: &CatalogItem| -> Result<Size, ProbeError> { Ok(Size::new(0.0, 0.0)) },
            UnresolvedPolicy::Exclude,
        );
        assert_eq!(report.excluded, [8]);
        assert!(!items[0].is_placeable());
    }

    #[test]
    fn policy_reads_from_json() {
        let policy: UnresolvedPolicy =
            serde_json::from_str(r#"{"mode": "placeholder", "aspect_ratio": 1.25}"#).unwrap();
        assert_eq!(policy, UnresolvedPolicy::Placeholder { aspect_ratio: 1.25 });
        let policy: UnresolvedPolicy = serde_json::from_str(r#"{"mode": "exclude"}"#).unwrap();
        assert_eq!(policy, UnresolvedPolicy::Exclude);
    }
}
