//! Page composition and the mount/update/unmount lifecycle.

use crate::content::ContentModel;
use crate::parallax::{layer_transform, ParallaxParams};
use crate::pointer::{PointerOffset, PointerSource, PointerTracker};
use crate::section::{render_backdrop, render_hero, render_section};
use crate::view::{Element, VisualNode};
use std::cell::RefCell;
use std::rc::Rc;

const PAGE_CLASS: &str =
    "min-h-screen bg-gradient-to-tr from-slate-100 to-zinc-100 relative overflow-hidden";
const COLUMN_CLASS: &str = "relative z-10 flex flex-col items-center px-6 py-16 space-y-12";

/// Target the composed tree is pushed into. At most one tree is active.
pub trait RenderHost {
    fn mount(&mut self, tree: &VisualNode) -> anyhow::Result<()>;
    /// Replaces the active tree; must be safe to call with an identical tree.
    fn update(&mut self, tree: &VisualNode) -> anyhow::Result<()>;
    fn unmount(&mut self);
}

pub struct PageComposer<H: RenderHost> {
    content: ContentModel,
    params: ParallaxParams,
    offset: PointerOffset,
    host: H,
    mounted: bool,
}

impl<H: RenderHost> PageComposer<H> {
    pub fn new(content: ContentModel, host: H) -> Self {
        Self::with_params(content, host, ParallaxParams::default())
    }

    pub fn with_params(content: ContentModel, host: H, params: ParallaxParams) -> Self {
        Self {
            content,
            params,
            offset: PointerOffset::ZERO,
            host,
            mounted: false,
        }
    }

    pub fn offset(&self) -> PointerOffset {
        self.offset
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Builds the full page tree for the current offset.
    pub fn compose(&self) -> VisualNode {
        let hero = render_hero(
            self.content.hero(),
            layer_transform(self.offset, self.params.hero_weight),
        );
        let sections = self.content.sections().iter().enumerate().map(|(i, s)| {
            render_section(s, i, layer_transform(self.offset, self.params.section_weight(i)))
        });
        Element::new("div")
            .class(PAGE_CLASS)
            .children(render_backdrop())
            .child(
                Element::new("main")
                    .class(COLUMN_CLASS)
                    .child(hero)
                    .children(sections),
            )
            .into()
    }

    /// Stores a new offset and pushes the recomposed tree if mounted.
    /// The offset is sanitized first; an unchanged result is a no-op.
    pub fn set_offset(&mut self, offset: PointerOffset) -> anyhow::Result<()> {
        let offset = offset.sanitized(&self.params);
        if offset == self.offset {
            return Ok(());
        }
        self.offset = offset;
        if self.mounted {
            self.host.update(&self.compose())?;
        }
        Ok(())
    }

    /// Mounts the page into the host and starts tracking `source`.
    pub fn mount<S>(mut self, source: &S) -> anyhow::Result<MountedPage<S, H>>
    where
        S: PointerSource + ?Sized,
        H: 'static,
    {
        self.offset = PointerOffset::ZERO;
        self.host.mount(&self.compose())?;
        self.mounted = true;
        log::info!(
            "[page] mounted {} sections",
            self.content.sections().len()
        );

        let composer = Rc::new(RefCell::new(self));
        let mut tracker = PointerTracker::new(composer.borrow().params);
        let weak = Rc::downgrade(&composer);
        let activated = tracker.activate(source, move |offset| {
            let Some(composer) = weak.upgrade() else {
                return;
            };
            let Ok(mut page) = composer.try_borrow_mut() else {
                log::warn!("[page] pointer update while page busy; dropped");
                return;
            };
            if let Err(e) = page.set_offset(offset) {
                log::warn!("[page] update failed: {:?}", e);
            }
        });
        if let Err(e) = activated {
            composer.borrow_mut().teardown();
            return Err(e);
        }
        Ok(MountedPage { composer, tracker })
    }

    fn teardown(&mut self) {
        if self.mounted {
            self.host.unmount();
            self.mounted = false;
            log::info!("[page] unmounted");
        }
    }
}

/// A page that is live in its host. Dropping it unmounts: the pointer
/// listener is removed before the host tree is torn down.
pub struct MountedPage<S: PointerSource + ?Sized, H: RenderHost> {
    composer: Rc<RefCell<PageComposer<H>>>,
    tracker: PointerTracker<S>,
}

impl<S: PointerSource + ?Sized, H: RenderHost> MountedPage<S, H> {
    pub fn offset(&self) -> PointerOffset {
        self.composer.borrow().offset()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn with_host<R>(&self, f: impl FnOnce(&H) -> R) -> R {
        f(self.composer.borrow().host())
    }

    pub fn compose(&self) -> VisualNode {
        self.composer.borrow().compose()
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl<S: PointerSource + ?Sized, H: RenderHost> Drop for MountedPage<S, H> {
    fn drop(&mut self) {
        self.tracker.deactivate();
        match self.composer.try_borrow_mut() {
            Ok(mut page) => page.teardown(),
            Err(_) => log::warn!("[page] unmount while page busy; host left mounted"),
        }
    }
}
