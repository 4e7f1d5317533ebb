// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::error::Error as _;

use bagwall_camera::{
    Approach, CameraController, EasedScalar, PointerKind, TapRecognizer, ViewportWindow,
};
use bagwall_catalog::{
    CatalogError, CatalogItem, SearchResult, build_pool, filter_catalog, placeable_selection,
};
use bagwall_masonry::{Layout, MasonryConfig, build_layout};
use bagwall_tiling::{Hit, hit_test, visible_instances};
use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    CursorHint, Debouncer, DetailView, FrameReport, FrameStats, InputEvent, InstanceKey, Renderer,
    ViewError, VisualInstance, WallConfig,
};

#[derive(Clone, Copy, Debug)]
struct ActiveVisual {
    visual: VisualInstance,
    /// Frame in which the visual was last realized from the visible set.
    frame: u64,
}

/// The whole state of one wall.
///
/// A `WallView` owns the catalog, the current layout, the camera, and the set
/// of realized visuals. It is driven from one thread: input handlers and
/// [`frame`](Self::frame) are its only writers.
///
/// ```
/// use bagwall_catalog::{AssetPaths, CatalogItem, CatalogRecord};
/// use bagwall_view::{FrameReport, InstanceKey, Renderer, VisualInstance, WallConfig, WallView};
/// use kurbo::Size;
///
/// #[derive(Default)]
/// struct Count(usize);
///
/// impl Renderer for Count {
///     fn position_visual(&mut self, _visual: &VisualInstance) {
///         self.0 += 1;
///     }
///     fn release_visual(&mut self, _key: InstanceKey) {}
/// }
///
/// let items: Vec<CatalogItem> = (1..=8)
///     .map(|number| {
///         let record = CatalogRecord { number, ..CatalogRecord::default() };
///         let mut item = CatalogItem::from_record(&record, &AssetPaths::default());
///         item.natural_size = Some(Size::new(600.0, 800.0));
///         item
///     })
///     .collect();
///
/// let mut config = WallConfig::default();
/// config.view.seed = Some(1);
/// let mut wall = WallView::new(items, config, Size::new(1280.0, 800.0)).unwrap();
///
/// let mut renderer = Count::default();
/// let report = wall.frame(&mut renderer);
/// assert!(matches!(report, FrameReport::Drawn(stats) if stats.added > 0));
/// assert!(renderer.0 > 0);
/// ```
#[derive(Debug)]
pub struct WallView {
    items: Vec<CatalogItem>,
    config: WallConfig,
    rng: StdRng,
    subset: Vec<usize>,
    layout: Layout,
    generation: u64,
    camera: CameraController,
    tap: TapRecognizer,
    hovered: Option<InstanceKey>,
    last_hovered: Option<InstanceKey>,
    hover_scale: EasedScalar,
    fade: EasedScalar,
    view_size: Size,
    paused: bool,
    active: HashMap<InstanceKey, ActiveVisual>,
    search: Debouncer<String>,
    frame_count: u64,
}

impl WallView {
    /// Builds the first layout from every placeable item and centers the
    /// camera on the featured item.
    pub fn new(
        items: Vec<CatalogItem>,
        config: WallConfig,
        view_size: Size,
    ) -> Result<Self, ViewError> {
        config.validate()?;
        let mut rng = match config.view.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (subset, layout) = compose(&items, &[], &config.layout, &mut rng)?;
        let mut view = Self {
            camera: CameraController::new(config.camera),
            tap: TapRecognizer::new(config.tap),
            hover_scale: EasedScalar::new(
                1.0,
                Approach::Exponential {
                    factor: config.view.hover_speed,
                },
                config.view.hover_rest_epsilon,
            ),
            fade: EasedScalar::new(
                1.0,
                Approach::Linear {
                    step: config.view.fade_step,
                },
                0.0,
            ),
            search: Debouncer::new(config.view.search_debounce_ms),
            items,
            config,
            rng,
            subset,
            layout,
            generation: 0,
            hovered: None,
            last_hovered: None,
            view_size,
            paused: false,
            active: HashMap::new(),
            frame_count: 0,
        };
        view.recenter();
        tracing::info!(
            items = view.items.len(),
            placed = view.layout.items().len(),
            fallbacks = view.layout.stats().fallback_placements,
            "wall ready"
        );
        Ok(view)
    }

    /// Builds a wall from a catalog load result.
    ///
    /// On failure the renderer is asked to show a readable message before the
    /// error is returned, so the host never ends up with a blank surface.
    pub fn bootstrap(
        catalog: Result<Vec<CatalogItem>, CatalogError>,
        config: WallConfig,
        view_size: Size,
        renderer: &mut dyn Renderer,
    ) -> Result<Self, ViewError> {
        let result = catalog
            .map_err(ViewError::from)
            .and_then(|items| Self::new(items, config, view_size));
        if let Err(err) = &result {
            tracing::error!(error = %err, "wall failed to start");
            renderer.show_failure(&failure_message(err));
        }
        result
    }

    /// Catalog items, indexed by `catalog_index`.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Distinct placeable catalog indices the current layout was built from.
    #[must_use]
    pub fn subset(&self) -> &[usize] {
        &self.subset
    }

    /// Number of layout rebuilds so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Display size in logical pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Changes the display size; the camera position is kept.
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Visual under the mouse, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<InstanceKey> {
        self.hovered
    }

    /// Current hover zoom.
    #[must_use]
    pub fn hover_scale(&self) -> f64 {
        self.hover_scale.value()
    }

    /// Current fade-in alpha after a rebuild.
    #[must_use]
    pub fn fade_alpha(&self) -> f64 {
        self.fade.value()
    }

    /// Realized visuals, in no particular order.
    pub fn active_visuals(&self) -> impl Iterator<Item = &VisualInstance> + '_ {
        self.active.values().map(|active| &active.visual)
    }

    /// Returns `true` while a detail view holds the wall.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stops frames and input until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            tracing::info!("wall paused");
        }
    }

    /// Restarts frames and input.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            tracing::info!("wall resumed");
        }
    }

    /// Cursor to show for the current interaction.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.camera.is_dragging() {
            CursorHint::Grabbing
        } else if self.hovered.is_some() {
            CursorHint::Pointer
        } else {
            CursorHint::Grab
        }
    }

    /// Jumps the camera so the featured item sits mid-display.
    pub fn recenter(&mut self) {
        if let Some(rect) = self
            .layout
            .featured_item()
            .and_then(|index| self.layout.item(index))
            .map(|placed| placed.rect)
        {
            self.camera.center_on(rect.center(), self.view_size);
        }
    }

    /// Replaces the layout with one built from the items at `subset`.
    ///
    /// An empty subset, or one with nothing placeable, falls back to the
    /// whole catalog. The camera snaps to the new featured item, hover state
    /// is cleared, and the wall fades in again. Visuals of the previous layout
    /// are released on the next frame.
    pub fn rebuild_layout(&mut self, subset: &[usize]) -> Result<(), ViewError> {
        let (subset, layout) = compose(&self.items, subset, &self.config.layout, &mut self.rng)?;
        self.subset = subset;
        self.layout = layout;
        self.generation += 1;
        self.recenter();
        self.hovered = None;
        self.last_hovered = None;
        self.hover_scale.snap_to(1.0);
        self.fade.restart_from(0.0);
        tracing::info!(
            generation = self.generation,
            items = self.subset.len(),
            placed = self.layout.items().len(),
            "layout rebuilt"
        );
        Ok(())
    }

    /// Schedules a search; it runs once typing has paused.
    pub fn search(&mut self, query: &str, now_ms: u64) {
        self.search.request(query.to_owned(), now_ms);
    }

    /// Runs the scheduled search if its delay has elapsed.
    ///
    /// While paused the search stays scheduled and runs on the first poll
    /// after [`resume`](Self::resume).
    pub fn poll_search(&mut self, now_ms: u64) -> Result<Option<SearchResult>, ViewError> {
        if self.paused {
            return Ok(None);
        }
        match self.search.poll(now_ms) {
            Some(query) => self.search_now(&query).map(Some),
            None => Ok(None),
        }
    }

    /// Filters the catalog and rebuilds immediately, dropping any scheduled search.
    pub fn search_now(&mut self, query: &str) -> Result<SearchResult, ViewError> {
        self.search.cancel();
        let result = filter_catalog(&self.items, query);
        tracing::info!(
            query,
            matches = result.indices.len(),
            fell_back = result.fell_back,
            "search"
        );
        self.rebuild_layout(&result.indices)?;
        Ok(result)
    }

    /// Returns `true` while a search waits for its delay.
    #[must_use]
    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Routes one input event.
    ///
    /// Returns the catalog number of the item whose detail view opened, if a
    /// tap opened one. Input is ignored while paused.
    pub fn handle_input(&mut self, event: InputEvent, detail: &mut dyn DetailView) -> Option<u32> {
        if self.paused {
            return None;
        }
        match event {
            InputEvent::PointerDown(sample) => {
                let other_pointer = self
                    .camera
                    .active_pointer()
                    .is_some_and(|active| active != sample.pointer);
                self.camera
                    .pointer_down(sample.pointer, sample.pos, sample.time_ms);
                if other_pointer {
                    self.tap.cancel();
                } else if self.camera.is_dragging() {
                    self.tap.on_down(sample.pos, sample.time_ms, sample.kind);
                }
                None
            }
            InputEvent::PointerMove(sample) => {
                if self.camera.active_pointer() == Some(sample.pointer) {
                    self.hovered = None;
                    if let Some(delta) =
                        self.camera
                            .pointer_move(sample.pointer, sample.pos, sample.time_ms)
                    {
                        self.tap.on_move(delta);
                    }
                } else if !self.camera.is_dragging() && sample.kind != PointerKind::Touch {
                    self.hovered = self.hit(sample.pos).map(|hit| self.key(hit));
                }
                None
            }
            InputEvent::PointerUp(sample) => {
                if self.camera.active_pointer() != Some(sample.pointer) {
                    return None;
                }
                let tap = self.tap.on_up(sample.pos, sample.time_ms);
                self.camera.pointer_up(sample.pointer);
                self.open_at(tap?, detail)
            }
            InputEvent::PointerCancel(pointer) => {
                self.camera.pointer_cancel(pointer);
                self.tap.cancel();
                None
            }
            InputEvent::PointerLeave => {
                self.hovered = None;
                self.camera.pointer_leave();
                self.tap.cancel();
                None
            }
            InputEvent::Wheel(delta) => {
                self.camera.wheel(delta);
                None
            }
        }
    }

    /// Runs one frame: camera physics, visible-set diff, and easing.
    ///
    /// Newly visible instances are positioned, surviving ones repositioned,
    /// and those of an old layout or beyond the keep-alive margin released.
    /// Does nothing while paused.
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> FrameReport {
        if self.paused {
            return FrameReport::Paused;
        }
        self.frame_count += 1;
        let frame = self.frame_count;
        let generation = self.generation;

        self.camera.step();
        let window = self.camera.window(self.view_size);
        let realize = window.expanded(self.config.view.visible_margin);
        let keep = window.expanded(self.config.view.keep_alive_margin);
        let styler = Styler {
            layout: &self.layout,
            items: &self.items,
            window,
            alpha: self.fade.value(),
            placeholder_alpha: self.config.view.placeholder_alpha,
            zoomed: self.zoomed(),
            scale: self.hover_scale.value(),
        };

        let mut stats = FrameStats::default();
        for instance in visible_instances(&self.layout, realize) {
            let key = InstanceKey {
                generation,
                item: instance.item,
                tile: instance.tile,
            };
            let visual = styler.visual(key, instance.world);
            renderer.position_visual(&visual);
            match self.active.insert(key, ActiveVisual { visual, frame }) {
                None => stats.added += 1,
                Some(_) => stats.updated += 1,
            }
        }

        self.active.retain(|key, active| {
            if active.frame == frame {
                return true;
            }
            if key.generation == generation && touches(active.visual.world, keep) {
                active.visual = styler.visual(*key, active.visual.world);
                renderer.position_visual(&active.visual);
                stats.updated += 1;
                true
            } else {
                renderer.release_visual(*key);
                stats.released += 1;
                false
            }
        });
        stats.active = self.active.len();

        self.advance_hover();
        self.fade.step();
        tracing::trace!(?stats, "frame");
        FrameReport::Drawn(stats)
    }

    fn hit(&self, screen: Point) -> Option<Hit> {
        hit_test(&self.layout, screen, self.camera.position())
    }

    fn key(&self, hit: Hit) -> InstanceKey {
        InstanceKey {
            generation: self.generation,
            item: hit.item,
            tile: hit.tile,
        }
    }

    fn open_at(&mut self, screen: Point, detail: &mut dyn DetailView) -> Option<u32> {
        let hit = self.hit(screen)?;
        let placed = self.layout.item(hit.item)?;
        let item = self.items.get(placed.entry.catalog_index)?;
        if !detail.open_detail(item) {
            return None;
        }
        let number = item.number;
        tracing::info!(number, "detail opened");
        self.hovered = None;
        self.pause();
        Some(number)
    }

    /// Visual currently drawn zoomed, if the zoom is visible.
    fn zoomed(&self) -> Option<InstanceKey> {
        let rest = 1.0 + self.config.view.hover_rest_epsilon;
        if self.hover_scale.value() > rest {
            self.hovered.or(self.last_hovered)
        } else {
            None
        }
    }

    fn advance_hover(&mut self) {
        if self.hovered.is_some() {
            self.last_hovered = self.hovered;
            self.hover_scale.set_target(self.config.view.hover_scale);
        } else {
            self.hover_scale.set_target(1.0);
        }
        self.hover_scale.step();
        if self.hovered.is_none()
            && self.hover_scale.value() < 1.0 + self.config.view.hover_rest_epsilon
        {
            self.last_hovered = None;
        }
    }
}

/// Per-frame inputs for turning an instance into a [`VisualInstance`].
struct Styler<'a> {
    layout: &'a Layout,
    items: &'a [CatalogItem],
    window: ViewportWindow,
    alpha: f64,
    placeholder_alpha: f64,
    zoomed: Option<InstanceKey>,
    scale: f64,
}

impl Styler<'_> {
    fn visual(&self, key: InstanceKey, world: Rect) -> VisualInstance {
        let entry = self.layout.item(key.item).map(|placed| placed.entry);
        let catalog_index = entry.map_or(0, |entry| entry.catalog_index);
        let stand_in = self
            .items
            .get(catalog_index)
            .is_some_and(|item| item.placeholder);
        let mut screen = self.window.world_to_screen_rect(world);
        let mut scale = 1.0;
        if self.zoomed == Some(key) {
            scale = self.scale;
            screen = Rect::from_center_size(screen.center(), screen.size() * scale);
        }
        VisualInstance {
            key,
            catalog_index,
            number: entry.map_or(0, |entry| entry.number),
            world,
            screen,
            scale,
            alpha: self.alpha,
            placeholder: stand_in || self.alpha < self.placeholder_alpha,
        }
    }
}

/// Builds a shuffled pool and layout for `subset`, falling back to the whole
/// catalog when the selection yields nothing to place.
///
/// The returned indices are the distinct placeable items the pool was drawn
/// from.
fn compose(
    items: &[CatalogItem],
    subset: &[usize],
    config: &MasonryConfig,
    rng: &mut StdRng,
) -> Result<(Vec<usize>, Layout), ViewError> {
    let everything = || placeable_selection(items, &(0..items.len()).collect::<Vec<_>>());
    let mut chosen = if subset.is_empty() {
        everything()
    } else {
        placeable_selection(items, subset)
    };
    if chosen.is_empty() {
        tracing::debug!(
            selected = subset.len(),
            "selection has nothing placeable, using the whole catalog"
        );
        chosen = everything();
    }
    if chosen.is_empty() {
        return Err(ViewError::NothingToShow);
    }
    let pool = build_pool(items, &chosen, rng);
    let layout = build_layout(&pool, config)?;
    Ok((chosen, layout))
}

/// Overlap test that counts shared edges.
fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}

fn failure_message(err: &ViewError) -> String {
    let mut message = format!("Could not load the coffee wall: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
