//! Test fixtures shared by the unit tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::component::{Component, ComponentBehavior, ComponentId, PaintEvent, Surface};
use crate::domain::value_objects::{ParamType, PeerTypeName, Point, Rect, Size, Toolkit};
use crate::domain::PeerError;
use crate::factory::{ComponentFactory, CreationContext, FactoryArg, StyleFlags};
use crate::input::{KeyEvent, KeyListener, MouseEvent, MouseEventKind, MouseListener, NativeEvent};
use crate::scrolling::{OffsetPolicy, ScrollEvent, ScrollListener};
use crate::toolkit::{NativeContainer, NativeWidget, Peer};

/// Component with no size and no painting
pub struct PlainBehavior;

impl ComponentBehavior for PlainBehavior {}

pub struct SizedBehavior(pub Size);

impl ComponentBehavior for SizedBehavior {
    fn size(&self) -> Option<Size> {
        Some(self.0)
    }
}

/// Records the rectangle of every paint request
pub struct RecordingBehavior {
    size: Option<Size>,
    painted: Rc<RefCell<Vec<Rect>>>,
}

impl RecordingBehavior {
    pub fn new(size: Option<Size>) -> (Self, Rc<RefCell<Vec<Rect>>>) {
        let painted = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                size,
                painted: painted.clone(),
            },
            painted,
        )
    }
}

impl ComponentBehavior for RecordingBehavior {
    fn paint(&self, event: &mut PaintEvent<'_>) {
        self.painted.borrow_mut().push(event.rectangle);
    }

    fn size(&self) -> Option<Size> {
        self.size
    }
}

/// Scrolling component of a fixed content size asking for a named peer
pub struct ScrollingBehavior {
    size: Size,
    peer_type: &'static str,
}

impl ScrollingBehavior {
    pub fn new(size: Size, peer_type: &'static str) -> Self {
        Self { size, peer_type }
    }
}

impl ComponentBehavior for ScrollingBehavior {
    fn size(&self) -> Option<Size> {
        Some(self.size)
    }

    fn component_type(&self) -> ParamType {
        ParamType::SCROLLING_COMPONENT
    }

    fn peer_type(&self, _toolkit: Toolkit, _params: &[FactoryArg]) -> Result<PeerTypeName, PeerError> {
        Ok(PeerTypeName::from_static(self.peer_type))
    }
}

/// Scrolling component whose content size can change after binding
pub struct ResizableBehavior {
    size: Rc<Cell<Size>>,
    peer_type: &'static str,
}

impl ResizableBehavior {
    pub fn new(size: Size, peer_type: &'static str) -> (Self, Rc<Cell<Size>>) {
        let size = Rc::new(Cell::new(size));
        (
            Self {
                size: size.clone(),
                peer_type,
            },
            size,
        )
    }
}

impl ComponentBehavior for ResizableBehavior {
    fn size(&self) -> Option<Size> {
        Some(self.size.get())
    }

    fn component_type(&self) -> ParamType {
        ParamType::SCROLLING_COMPONENT
    }

    fn peer_type(&self, _toolkit: Toolkit, _params: &[FactoryArg]) -> Result<PeerTypeName, PeerError> {
        Ok(PeerTypeName::from_static(self.peer_type))
    }
}

#[derive(Default)]
pub struct RecordingSurface {
    pub origin: Point,
}

impl Surface for RecordingSurface {
    fn translate(&mut self, dx: i32, dy: i32) {
        self.origin = self.origin.translate(dx, dy);
    }
}

/// Parent container that keeps what its children hand it
pub struct RecordingContainer {
    toolkit: Toolkit,
    events: RefCell<Vec<NativeEvent>>,
    sizes: RefCell<Vec<Size>>,
}

impl RecordingContainer {
    pub fn new(toolkit: Toolkit) -> Rc<Self> {
        Rc::new(Self {
            toolkit,
            events: RefCell::new(Vec::new()),
            sizes: RefCell::new(Vec::new()),
        })
    }

    pub fn events(&self) -> Vec<NativeEvent> {
        self.events.borrow().clone()
    }

    pub fn assigned_sizes(&self) -> Vec<Size> {
        self.sizes.borrow().clone()
    }
}

impl NativeContainer for RecordingContainer {
    fn toolkit(&self) -> Toolkit {
        self.toolkit
    }

    fn dispatch_native(&self, event: NativeEvent) {
        self.events.borrow_mut().push(event);
    }

    fn child_size_assigned(&self, size: Size) {
        self.sizes.borrow_mut().push(size);
    }
}

pub struct CountingKeyListener {
    consume: bool,
    count: Cell<usize>,
}

impl CountingKeyListener {
    pub fn new(consume: bool) -> Rc<Self> {
        Rc::new(Self {
            consume,
            count: Cell::new(0),
        })
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    fn hit(&self) -> bool {
        self.count.set(self.count.get() + 1);
        self.consume
    }
}

impl KeyListener for CountingKeyListener {
    fn key_pressed(&self, _event: &KeyEvent) -> bool {
        self.hit()
    }

    fn key_released(&self, _event: &KeyEvent) -> bool {
        self.hit()
    }
}

pub struct CountingMouseListener {
    consume: bool,
    count: Cell<usize>,
    last: RefCell<Option<MouseEvent>>,
}

impl CountingMouseListener {
    pub fn new(consume: bool) -> Rc<Self> {
        Rc::new(Self {
            consume,
            count: Cell::new(0),
            last: RefCell::new(None),
        })
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn last_kind(&self) -> Option<MouseEventKind> {
        self.last.borrow().as_ref().map(|e| e.kind)
    }

    pub fn last_source(&self) -> Option<ComponentId> {
        self.last.borrow().as_ref().and_then(|e| e.source)
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last.borrow().as_ref().map(|e| e.point())
    }

    fn hit(&self, event: &MouseEvent) -> bool {
        self.count.set(self.count.get() + 1);
        *self.last.borrow_mut() = Some(event.clone());
        self.consume
    }
}

impl MouseListener for CountingMouseListener {
    fn mouse_pressed(&self, event: &MouseEvent) -> bool {
        self.hit(event)
    }

    fn mouse_released(&self, event: &MouseEvent) -> bool {
        self.hit(event)
    }

    fn mouse_entered(&self, event: &MouseEvent) -> bool {
        self.hit(event)
    }

    fn mouse_exited(&self, event: &MouseEvent) -> bool {
        self.hit(event)
    }

    fn mouse_moved(&self, event: &MouseEvent) -> bool {
        self.hit(event)
    }

    fn mouse_dragged(&self, event: &MouseEvent) -> bool {
        self.hit(event)
    }
}

#[derive(Default)]
pub struct CountingScrollListener {
    count: Cell<usize>,
    last_offset: Cell<Option<Point>>,
}

impl CountingScrollListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn last_offset(&self) -> Option<Point> {
        self.last_offset.get()
    }
}

impl ScrollListener for CountingScrollListener {
    fn content_scrolled(&self, event: &ScrollEvent<'_>) {
        self.count.set(self.count.get() + 1);
        self.last_offset.set(Some(event.offset()));
    }
}

/// Native widget that does not implement the peer contract
pub struct WidgetStub(pub Toolkit);

impl NativeWidget for WidgetStub {
    fn widget_toolkit(&self) -> Toolkit {
        self.0
    }
}

pub fn bind_swing(behavior: impl ComponentBehavior + 'static) -> (Rc<Component>, Rc<dyn Peer>) {
    let component = Component::new(behavior);
    let peer = ComponentFactory::swing()
        .bind(&component, &CreationContext::swing(), &[])
        .unwrap();
    (component, peer)
}

pub fn bind_swt(
    behavior: impl ComponentBehavior + 'static,
    parent: Rc<RecordingContainer>,
) -> (Rc<Component>, Rc<dyn Peer>) {
    let component = Component::new(behavior);
    let peer = ComponentFactory::swt()
        .bind(&component, &CreationContext::swt(parent, StyleFlags::NONE), &[])
        .unwrap();
    (component, peer)
}

pub fn bind_scrolling_swing(
    content: Size,
    peer_type: &'static str,
    policy: OffsetPolicy,
) -> (Rc<Component>, Rc<dyn Peer>) {
    let component = Component::new(ScrollingBehavior::new(content, peer_type));
    let peer = ComponentFactory::with_policy(Toolkit::Swing, policy)
        .bind(&component, &CreationContext::swing(), &[])
        .unwrap();
    (component, peer)
}

pub fn bind_scrolling_swt(
    content: Size,
    peer_type: &'static str,
    parent: Rc<RecordingContainer>,
) -> (Rc<Component>, Rc<dyn Peer>) {
    let component = Component::new(ScrollingBehavior::new(content, peer_type));
    let peer = ComponentFactory::swt()
        .bind(&component, &CreationContext::swt(parent, StyleFlags::NONE), &[])
        .unwrap();
    (component, peer)
}
