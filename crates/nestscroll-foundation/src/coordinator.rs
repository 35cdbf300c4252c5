//! Container-aware navigation for lists nested in a scrolling container.
//!
//! A list inside a container may have laid out far more rows than the
//! container currently shows. Scrolling the list alone can park the target
//! row in a region the container has scrolled past, so the container is
//! moved first whenever the target would otherwise stay out of sight.

use std::rc::{Rc, Weak};

use nestscroll_core::NodeId;

use crate::container::CoordinatingContainer;
use crate::engine::ListLayoutEngine;

/// Whether a list-local scroll jumps or animates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollMode {
    #[default]
    Instant,
    Smooth,
}

/// Scroll operations chosen for one navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationPlan {
    /// Vertical offset the container is scrolled to before the list moves.
    pub container_scroll_to: Option<i32>,
    /// Adapter position handed to the list's own scroll.
    pub target: usize,
}

impl NavigationPlan {
    /// A plain list scroll with no container involvement.
    pub fn list_only(target: usize) -> Self {
        Self {
            container_scroll_to: None,
            target,
        }
    }

    pub fn moves_container(&self) -> bool {
        self.container_scroll_to.is_some()
    }
}

/// Relationship between one list and the container coordinating it.
///
/// The container is injected by the host and held weakly; a missing or
/// dropped container degrades every query to plain, uncoordinated behaviour.
#[derive(Clone, Debug)]
pub struct ScrollCoordinator {
    list: NodeId,
    container: Option<Weak<dyn CoordinatingContainer>>,
}

impl ScrollCoordinator {
    pub fn new(list: NodeId) -> Self {
        Self {
            list,
            container: None,
        }
    }

    pub fn list(&self) -> NodeId {
        self.list
    }

    pub fn attach<C: CoordinatingContainer + 'static>(&mut self, container: &Rc<C>) {
        let container: Rc<dyn CoordinatingContainer> = container.clone();
        self.container = Some(Rc::downgrade(&container));
    }

    pub fn attach_weak(&mut self, container: Weak<dyn CoordinatingContainer>) {
        self.container = Some(container);
    }

    pub fn detach(&mut self) {
        self.container = None;
    }

    /// The coordinating container, if one is attached and still alive.
    pub fn container(&self) -> Option<Rc<dyn CoordinatingContainer>> {
        self.container.as_ref().and_then(Weak::upgrade)
    }

    /// Height to borrow when the list is offered no concrete height.
    ///
    /// `None` until the container has been measured.
    pub fn inherited_height(&self) -> Option<i32> {
        let height = self.container()?.measured_height();
        (height > 0).then_some(height)
    }

    /// Whether a list of `list_height` whose content spans `scroll_range`
    /// should lay out again to pick up the container's height.
    ///
    /// A list that already shows all of its content never needs to.
    pub fn needs_height_refresh(&self, list_height: i32, scroll_range: i32) -> bool {
        if scroll_range <= list_height {
            return false;
        }
        let Some(container) = self.container() else {
            return false;
        };
        container.measured_height() > 0 && container.height() != list_height
    }

    /// Decides how to bring adapter position `target` into view.
    pub fn plan<E: ListLayoutEngine>(&self, engine: &E, target: usize) -> NavigationPlan {
        let uncoordinated = NavigationPlan::list_only(target);
        let Some(container) = self.container() else {
            return uncoordinated;
        };
        if !container.is_coordinated_with(self.list) {
            return uncoordinated;
        }
        let Some(coordinated_top) = container.coordinated_top(self.list) else {
            return uncoordinated;
        };
        let Some(last_position) = engine
            .last_child()
            .and_then(|child| engine.adapter_position_of(child))
        else {
            return uncoordinated;
        };
        let container_top = coordinated_top as i32;

        if last_position < target {
            // Past everything rendered: give the list the whole viewport first.
            return NavigationPlan {
                container_scroll_to: Some(container_top),
                target,
            };
        }

        let below_viewport = engine
            .find_child_for_adapter_position(target)
            .is_some_and(|child| {
                let bottom = engine.child_bounds(child).bottom as f32 + coordinated_top
                    - container.scroll_y() as f32;
                bottom > container.height() as f32
            });
        NavigationPlan {
            container_scroll_to: below_viewport.then_some(container_top),
            target,
        }
    }

    /// Plans and performs the navigation: container first, then the list.
    pub fn navigate<E: ListLayoutEngine>(
        &self,
        engine: &mut E,
        target: usize,
        mode: ScrollMode,
    ) -> NavigationPlan {
        let plan = self.plan(engine, target);
        if let (Some(offset), Some(container)) = (plan.container_scroll_to, self.container()) {
            log::trace!(
                "list {}: scrolling container to {offset} before item {target}",
                self.list
            );
            container.scroll_to(0, offset);
        }
        match mode {
            ScrollMode::Instant => engine.scroll_to_position(target),
            ScrollMode::Smooth => engine.smooth_scroll_to_position(target),
        }
        plan
    }
}
