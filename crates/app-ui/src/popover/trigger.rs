//! Trigger elements and how they are wired to a popover

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::types::TriggerMeasurement;

/// Result of measuring a mounted element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMeasure {
    /// x relative to the parent
    pub x: f32,
    /// y relative to the parent
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
    /// Absolute x on screen
    pub page_x: f32,
    /// Absolute y on screen
    pub page_y: f32,
}

impl From<LayoutMeasure> for TriggerMeasurement {
    fn from(m: LayoutMeasure) -> Self {
        TriggerMeasurement::new(m.page_x, m.page_y, m.width, m.height)
    }
}

/// An element that can report its absolute on-screen box
#[cfg_attr(test, mockall::automock)]
pub trait Measurable {
    /// Synchronous measurement; `None` when the element is detached
    fn measure(&self) -> Option<LayoutMeasure>;
}

/// Shared slot an element attaches itself to
#[derive(Clone, Default)]
pub struct TriggerRef {
    inner: Rc<RefCell<Option<Rc<dyn Measurable>>>>,
}

impl TriggerRef {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an element
    pub fn attach(&self, element: Rc<dyn Measurable>) {
        *self.inner.borrow_mut() = Some(element);
    }

    /// Detach the current element
    pub fn detach(&self) {
        self.inner.borrow_mut().take();
    }

    /// Whether an element is attached
    pub fn is_attached(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Measure the attached element, if any
    pub fn measure(&self) -> Option<LayoutMeasure> {
        let element = self.inner.borrow().clone()?;
        element.measure()
    }
}

impl fmt::Debug for TriggerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerRef")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// The ways a caller can hand a trigger to a popover
pub enum Trigger {
    /// An element owned by the popover; pressing it opens the popover when uncontrolled
    Element(Rc<dyn Measurable>),
    /// A slot owned by the caller; the popover only measures it
    Ref(TriggerRef),
    /// A render function given the slot to attach to; its element opens the popover
    Render(Box<dyn FnOnce(TriggerRef)>),
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Element(_) => f.write_str("Trigger::Element"),
            Trigger::Ref(r) => f.debug_tuple("Trigger::Ref").field(r).finish(),
            Trigger::Render(_) => f.write_str("Trigger::Render"),
        }
    }
}

/// How a trigger press reaches the popover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressBinding {
    /// Presses are the owner's business
    Never,
    /// Presses open the popover unless visibility is controlled
    WhenUncontrolled,
    /// The open handle was handed out; presses always open
    Always,
}

/// A trigger after mount: where to measure and how presses are wired
#[derive(Debug, Clone)]
pub struct ResolvedTrigger {
    /// Slot holding the element to measure
    pub slot: TriggerRef,
    /// Press wiring
    pub press: PressBinding,
}

impl ResolvedTrigger {
    /// Whether a trigger press opens the popover in the given mode
    pub fn opens_on_press(&self, controlled: bool) -> bool {
        match self.press {
            PressBinding::Never => false,
            PressBinding::WhenUncontrolled => !controlled,
            PressBinding::Always => true,
        }
    }
}

impl Trigger {
    /// Resolve once at mount
    pub fn resolve(self) -> ResolvedTrigger {
        match self {
            Trigger::Element(element) => {
                let slot = TriggerRef::new();
                slot.attach(element);
                ResolvedTrigger {
                    slot,
                    press: PressBinding::WhenUncontrolled,
                }
            }
            Trigger::Ref(slot) => ResolvedTrigger {
                slot,
                press: PressBinding::Never,
            },
            Trigger::Render(render) => {
                let slot = TriggerRef::new();
                render(slot.clone());
                ResolvedTrigger {
                    slot,
                    press: PressBinding::Always,
                }
            }
        }
    }
}

/// A fixed box, handy for hosts that already know the trigger geometry
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StaticElement(pub LayoutMeasure);

impl StaticElement {
    /// Element at an absolute position
    pub fn at(page_x: f32, page_y: f32, width: f32, height: f32) -> Self {
        StaticElement(LayoutMeasure {
            x: 0.0,
            y: 0.0,
            width,
            height,
            page_x,
            page_y,
        })
    }
}

impl Measurable for StaticElement {
    fn measure(&self) -> Option<LayoutMeasure> {
        Some(self.0)
    }
}
