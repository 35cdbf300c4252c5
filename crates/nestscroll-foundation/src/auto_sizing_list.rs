//! A list that sizes itself to its content.
//!
//! Wrapped in a scrolling container, a list would otherwise be measured
//! either with no height at all or with an unbounded one. [`AutoSizingList`]
//! instead grows with its data up to the height the container can offer,
//! using a two-pass measurement that settles on the content's true extent.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use nestscroll_core::{NodeId, PreDrawOutcome, PreDrawRegistration, RuntimeHandle};
use nestscroll_layout::{MeasureSpec, Size};

use crate::adapter::{AdapterChangeEvent, AdapterObservable, ObserverRegistration};
use crate::boundary::{BoundaryDetector, OverscrollEdges};
use crate::container::CoordinatingContainer;
use crate::coordinator::{NavigationPlan, ScrollCoordinator, ScrollMode};
use crate::engine::{ListLayoutEngine, ListScrollState};
use crate::velocity::VelocityProbe;

/// Layout options for an [`AutoSizingList`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoSizingListConfig {
    /// Floor for the measured height when content is absent or short.
    pub minimum_height: i32,
}

impl AutoSizingListConfig {
    pub fn with_minimum_height(mut self, minimum_height: i32) -> Self {
        self.minimum_height = minimum_height.max(0);
        self
    }
}

/// A list shared with the adapter layer's observers.
pub type SharedAutoSizingList<E> = Rc<RefCell<AutoSizingList<E>>>;

/// Content-sized list that cooperates with a coordinating container.
pub struct AutoSizingList<E: ListLayoutEngine> {
    id: NodeId,
    engine: E,
    config: AutoSizingListConfig,
    coordinator: ScrollCoordinator,
    runtime: RuntimeHandle,
    /// Retry queued for the next draw after a pass that rendered nothing.
    pending_remeasure: Option<PreDrawRegistration>,
    adapter_registration: Option<ObserverRegistration>,
}

impl<E: ListLayoutEngine> AutoSizingList<E> {
    pub fn new(
        id: NodeId,
        engine: E,
        runtime: RuntimeHandle,
        config: AutoSizingListConfig,
    ) -> Self {
        Self {
            id,
            engine,
            config,
            coordinator: ScrollCoordinator::new(id),
            runtime,
            pending_remeasure: None,
            adapter_registration: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn config(&self) -> &AutoSizingListConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AutoSizingListConfig) {
        self.config = config;
    }

    pub fn coordinator(&self) -> &ScrollCoordinator {
        &self.coordinator
    }

    pub fn attach_container<C: CoordinatingContainer + 'static>(&mut self, container: &Rc<C>) {
        self.coordinator.attach(container);
    }

    pub fn attach_container_weak(&mut self, container: Weak<dyn CoordinatingContainer>) {
        self.coordinator.attach_weak(container);
    }

    pub fn detach_container(&mut self) {
        self.coordinator.detach();
    }

    pub fn measured_size(&self) -> Size {
        self.engine.measured_size()
    }

    pub fn into_shared(self) -> SharedAutoSizingList<E> {
        Rc::new(RefCell::new(self))
    }

    /// Measures the list for the host.
    ///
    /// With items present the list is measured once against the offered
    /// height (or the container's, if none is offered) and, when every item
    /// fit, once more at exactly the content height. A first pass that
    /// renders nothing schedules a single retry before the next draw.
    pub fn on_measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let item_count = self.engine.item_count();
        if item_count == 0 {
            let minimum = self.config.minimum_height;
            let height_spec = if height_spec.size < minimum {
                MeasureSpec::exactly(minimum)
            } else {
                height_spec
            };
            return self.engine.measure_with_spec(width_spec, height_spec);
        }

        let mut height_spec = height_spec;
        if !height_spec.has_concrete_size() {
            if let Some(inherited) = self.coordinator.inherited_height() {
                log::trace!("list {}: borrowing container height {inherited}", self.id);
                height_spec = MeasureSpec::exactly(inherited);
            }
        }

        let mut size = self.engine.measure_with_spec(width_spec, height_spec);
        let rendered = self.engine.child_count();
        if rendered == item_count {
            let target = self.content_fit_height();
            size = self
                .engine
                .measure_with_spec(width_spec, MeasureSpec::exactly(target));
        } else if rendered == 0 {
            self.schedule_remeasure();
            return size;
        }
        self.withdraw_pending_remeasure();
        size
    }

    /// Padding plus the bottom of the last decorated child, floored at the
    /// minimum height.
    fn content_fit_height(&self) -> i32 {
        let padding = self.engine.padding();
        let last_child_bottom = self
            .engine
            .last_child()
            .map(|child| self.engine.decorated_bounds_of(child).bottom - padding.top)
            .unwrap_or(0);
        (last_child_bottom + padding.top + padding.bottom).max(self.config.minimum_height)
    }

    fn schedule_remeasure(&mut self) {
        if self.has_pending_remeasure() {
            return;
        }
        log::debug!(
            "list {}: first pass rendered no children; retrying before next draw",
            self.id
        );
        let runtime = self.runtime.clone();
        let id = self.id;
        self.pending_remeasure = Some(self.runtime.register_pre_draw(move || {
            runtime.request_layout(id);
            PreDrawOutcome::CancelDraw
        }));
    }

    fn withdraw_pending_remeasure(&mut self) {
        if let Some(registration) = self.pending_remeasure.take() {
            if registration.is_active() {
                log::trace!("list {}: children rendered, dropping queued retry", self.id);
            }
            registration.cancel();
        }
    }

    /// Whether a retry is still waiting for the next draw.
    pub fn has_pending_remeasure(&self) -> bool {
        self.pending_remeasure
            .as_ref()
            .is_some_and(PreDrawRegistration::is_active)
    }

    /// Withdraws a queued retry. Returns true if one was still pending.
    pub fn cancel_pending_remeasure(&mut self) -> bool {
        let was_pending = self.has_pending_remeasure();
        if let Some(registration) = self.pending_remeasure.take() {
            registration.cancel();
        }
        was_pending
    }

    /// Requests a layout pass if the list hides content and its height no
    /// longer matches the container's. Returns true if a pass was requested.
    pub fn refresh_height_if_needed(&mut self) -> bool {
        let scroll_range = self.engine.vertical_scroll_range();
        let height = self.engine.measured_size().height;
        if !self.coordinator.needs_height_refresh(height, scroll_range) {
            return false;
        }
        self.runtime.request_layout(self.id);
        true
    }

    /// Reacts to a data change from the adapter layer.
    pub fn on_adapter_change(&mut self, event: &AdapterChangeEvent) -> bool {
        match event.affected_range() {
            None => log::trace!("list {}: data set reset", self.id),
            Some(range) => log::trace!(
                "list {}: {event} (positions {range:?}, item count changed: {})",
                self.id,
                event.changes_item_count()
            ),
        }
        self.refresh_height_if_needed()
    }

    /// Routes `observable`'s events to `list`, replacing any earlier binding.
    ///
    /// The observer holds the list weakly. Events that arrive while the list
    /// is mid-measure are skipped: a layout pass is already running.
    pub fn observe(list: &SharedAutoSizingList<E>, observable: &AdapterObservable)
    where
        E: 'static,
    {
        let weak = Rc::downgrade(list);
        let registration = observable.register(move |event| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let Ok(mut list) = shared.try_borrow_mut() else {
                log::debug!("adapter change ({event}) arrived mid-layout; skipping height refresh");
                return;
            };
            list.on_adapter_change(event);
        });
        list.borrow_mut().adapter_registration = Some(registration);
    }

    /// Stops listening to the adapter bound by [`observe`](Self::observe).
    pub fn stop_observing(&mut self) {
        self.adapter_registration = None;
    }

    pub fn is_observing_adapter(&self) -> bool {
        self.adapter_registration
            .as_ref()
            .is_some_and(ObserverRegistration::is_registered)
    }

    pub fn scroll_to_position(&mut self, position: usize) -> NavigationPlan {
        self.coordinator
            .navigate(&mut self.engine, position, ScrollMode::Instant)
    }

    pub fn smooth_scroll_to_position(&mut self, position: usize) -> NavigationPlan {
        self.coordinator
            .navigate(&mut self.engine, position, ScrollMode::Smooth)
    }

    /// Scrolls the list's content directly, as a container does while it
    /// dispatches nested scroll. Layout requests the engine raises while
    /// scrolling are swallowed.
    pub fn scroll_vertically_by(&mut self, delta: i32) -> i32 {
        let _suppressed = self.runtime.suppress_layout_requests();
        self.engine.scroll_vertically_by(delta)
    }

    pub fn scroll_state(&self) -> ListScrollState {
        self.engine.scroll_state()
    }

    pub fn set_scroll_state(&mut self, state: ListScrollState) {
        self.engine.set_scroll_state(state);
    }

    pub fn is_at_top_boundary(&self) -> bool {
        BoundaryDetector::new(&self.engine).is_at_top()
    }

    pub fn is_at_bottom_boundary(&self) -> bool {
        BoundaryDetector::new(&self.engine).is_at_bottom()
    }

    pub fn overscroll_edges(&self) -> OverscrollEdges {
        BoundaryDetector::new(&self.engine).edges()
    }

    /// Current fling velocity in px/sec; 0.0 if none can be read.
    pub fn current_velocity_y(&self) -> f32 {
        VelocityProbe::for_engine(&self.engine).current_velocity_y()
    }
}
