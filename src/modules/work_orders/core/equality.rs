// Field-wise WorkOrder comparison with optional exclusions.
//
// Server assigned fields (key, created_on, last_edited_on) can be left out so a
// submitted work order can be compared with the copy the store returned.

use crate::modules::work_orders::core::work_order::WorkOrder;

#[derive(Debug, Clone, Copy, Default)]
pub struct WorkOrderEquality {
    exclude_created_on: bool,
    exclude_key: bool,
    exclude_last_edited_on: bool,
}

impl WorkOrderEquality {
    pub fn new(exclude_created_on: bool, exclude_key: bool, exclude_last_edited_on: bool) -> Self {
        Self {
            exclude_created_on,
            exclude_key,
            exclude_last_edited_on,
        }
    }

    pub fn equals(&self, x: &WorkOrder, y: &WorkOrder) -> bool {
        (self.exclude_created_on || x.stamps.created_on == y.stamps.created_on)
            && x.description == y.description
            && x.due_by == y.due_by
            && (self.exclude_key || x.key == y.key)
            && (self.exclude_last_edited_on || x.stamps.last_edited_on == y.stamps.last_edited_on)
            && x.name == y.name
            && x.other_type_of_service == y.other_type_of_service
            && x.priority == y.priority
            && x.problem == y.problem
            && x.resolution == y.resolution
            && x.service_type == y.service_type
            && x.status == y.status
    }
}
