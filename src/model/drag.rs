//! Drag contexts - what is currently being dragged
//!
//! At most one drag gesture exists at a time. The context is a single tagged
//! union so two kinds can never be populated together.

use super::process::{ProcessId, ProcessItem};

/// An item being moved out of a filled slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDrag {
    /// Process the item is dragged from
    pub process_id: ProcessId,
    /// The item being moved
    pub item: ProcessItem,
    /// Slot index of the item within its source process
    pub item_index: usize,
    /// Whether a valid drop target is under the pointer
    pub has_targeted: bool,
}

/// An empty slot being dragged (only the bin accepts it)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySlotDrag {
    pub process_id: ProcessId,
    pub item_index: usize,
    pub has_targeted: bool,
}

/// A whole process being dragged (only the bin accepts it)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDrag {
    pub process_id: ProcessId,
    pub has_targeted: bool,
}

/// Identifies which kind of drag is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Item,
    EmptySlot,
    Process,
}

/// The single active drag context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragContext {
    #[default]
    None,
    Item(ItemDrag),
    EmptySlot(EmptySlotDrag),
    Process(ProcessDrag),
}

impl DragContext {
    pub fn kind(&self) -> Option<DragKind> {
        match self {
            DragContext::None => None,
            DragContext::Item(_) => Some(DragKind::Item),
            DragContext::EmptySlot(_) => Some(DragKind::EmptySlot),
            DragContext::Process(_) => Some(DragKind::Process),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DragContext::None)
    }

    /// Process the active drag originates from
    pub fn source_process(&self) -> Option<&ProcessId> {
        match self {
            DragContext::None => None,
            DragContext::Item(drag) => Some(&drag.process_id),
            DragContext::EmptySlot(drag) => Some(&drag.process_id),
            DragContext::Process(drag) => Some(&drag.process_id),
        }
    }

    /// Slot the active drag picked up, for item and empty-slot drags
    pub fn source_slot(&self) -> Option<usize> {
        match self {
            DragContext::Item(drag) => Some(drag.item_index),
            DragContext::EmptySlot(drag) => Some(drag.item_index),
            DragContext::None | DragContext::Process(_) => None,
        }
    }

    // === Item drag ===

    pub fn set_item_state(&mut self, drag: ItemDrag) {
        self.replace(DragContext::Item(drag));
    }

    /// Clear the context if it is an item drag
    pub fn clear_item_state(&mut self) {
        if matches!(self, DragContext::Item(_)) {
            *self = DragContext::None;
        }
    }

    pub fn item_state(&self) -> Option<&ItemDrag> {
        match self {
            DragContext::Item(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn has_item_targeted(&self) -> bool {
        self.item_state().is_some_and(|drag| drag.has_targeted)
    }

    // === Empty-slot drag ===

    pub fn set_empty_slot_state(&mut self, drag: EmptySlotDrag) {
        self.replace(DragContext::EmptySlot(drag));
    }

    pub fn clear_empty_slot_state(&mut self) {
        if matches!(self, DragContext::EmptySlot(_)) {
            *self = DragContext::None;
        }
    }

    pub fn empty_slot_state(&self) -> Option<&EmptySlotDrag> {
        match self {
            DragContext::EmptySlot(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn has_empty_slot_targeted(&self) -> bool {
        self.empty_slot_state().is_some_and(|drag| drag.has_targeted)
    }

    // === Process drag ===

    pub fn set_process_state(&mut self, drag: ProcessDrag) {
        self.replace(DragContext::Process(drag));
    }

    pub fn clear_process_state(&mut self) {
        if matches!(self, DragContext::Process(_)) {
            *self = DragContext::None;
        }
    }

    pub fn process_state(&self) -> Option<&ProcessDrag> {
        match self {
            DragContext::Process(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn has_process_targeted(&self) -> bool {
        self.process_state().is_some_and(|drag| drag.has_targeted)
    }

    // === Shared ===

    /// Update the hover flag on whichever context is active
    pub fn toggle_targeting(&mut self, has_targeted: bool) {
        match self {
            DragContext::None => {}
            DragContext::Item(drag) => drag.has_targeted = has_targeted,
            DragContext::EmptySlot(drag) => drag.has_targeted = has_targeted,
            DragContext::Process(drag) => drag.has_targeted = has_targeted,
        }
    }

    /// Whether the active context (if any) is hovering a valid target
    pub fn has_targeted(&self) -> bool {
        match self {
            DragContext::None => false,
            DragContext::Item(drag) => drag.has_targeted,
            DragContext::EmptySlot(drag) => drag.has_targeted,
            DragContext::Process(drag) => drag.has_targeted,
        }
    }

    pub fn clear(&mut self) {
        *self = DragContext::None;
    }

    fn replace(&mut self, next: DragContext) {
        if let Some(previous) = self.kind() {
            tracing::debug!(
                target: "drag",
                ?previous,
                next = ?next.kind(),
                "drag started while another was active, replacing it"
            );
        }
        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::process::ItemId;

    fn item_drag() -> ItemDrag {
        ItemDrag {
            process_id: ProcessId::new("p1"),
            item: ProcessItem::prototype("A", "").with_id(ItemId::new("a1")),
            item_index: 0,
            has_targeted: false,
        }
    }

    #[test]
    fn test_set_replaces_other_kind() {
        let mut drag = DragContext::default();
        drag.set_item_state(item_drag());
        drag.set_process_state(ProcessDrag {
            process_id: ProcessId::new("p1"),
            has_targeted: false,
        });

        assert_eq!(drag.kind(), Some(DragKind::Process));
        assert!(drag.item_state().is_none());
    }

    #[test]
    fn test_source_of_each_kind() {
        let mut drag = DragContext::default();
        assert_eq!(drag.source_process(), None);
        assert_eq!(drag.source_slot(), None);

        drag.set_item_state(item_drag());
        assert_eq!(drag.source_process(), Some(&ProcessId::new("p1")));
        assert_eq!(drag.source_slot(), Some(0));

        drag.set_empty_slot_state(EmptySlotDrag {
            process_id: ProcessId::new("p2"),
            item_index: 3,
            has_targeted: false,
        });
        assert_eq!(drag.source_process(), Some(&ProcessId::new("p2")));
        assert_eq!(drag.source_slot(), Some(3));

        drag.set_process_state(ProcessDrag {
            process_id: ProcessId::new("p3"),
            has_targeted: false,
        });
        assert_eq!(drag.source_process(), Some(&ProcessId::new("p3")));
        assert_eq!(drag.source_slot(), None);
    }

    #[test]
    fn test_clear_only_matching_kind() {
        let mut drag = DragContext::default();
        drag.set_item_state(item_drag());

        drag.clear_process_state();
        drag.clear_empty_slot_state();
        assert_eq!(drag.kind(), Some(DragKind::Item));

        drag.clear_item_state();
        assert!(!drag.is_active());
    }

    #[test]
    fn test_toggle_targeting_updates_active_context() {
        let mut drag = DragContext::default();
        drag.toggle_targeting(true);
        assert!(!drag.has_targeted());

        drag.set_empty_slot_state(EmptySlotDrag {
            process_id: ProcessId::new("p1"),
            item_index: 2,
            has_targeted: false,
        });
        drag.toggle_targeting(true);
        assert!(drag.has_empty_slot_targeted());
        assert!(!drag.has_item_targeted());

        drag.toggle_targeting(false);
        assert!(!drag.has_targeted());
    }
}
