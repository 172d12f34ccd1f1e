use crate::modules::work_orders::core::work_order::WorkOrder;
use crate::shared::inbound::translator::RecordTranslator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub work_orders: Arc<RecordTranslator<WorkOrder>>,
}
