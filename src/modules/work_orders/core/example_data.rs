// Example work orders for a baggage handling system, seeded at startup.
//
// Responsibilities
// - Produce open, in progress, resolved and closed orders with due dates relative to `today`.
// - Load them through the store so they get identities and stamps like any other record.

use chrono::{Days, NaiveDate};

use crate::modules::work_orders::core::work_order::{
    WorkOrder, WorkOrderPriority, WorkOrderServiceType, WorkOrderStatus,
};
use crate::shared::infrastructure::record_store::StoreError;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;

const ELECTRICAL_TESTS: &str = "Various electrical tests.";
const PHOTOEYE_CLEAN: &str = "Each photoeye needs to be wiped of dust to ensure optimal function.";

pub struct WorkOrderExampleBuilder {
    today: NaiveDate,
}

impl WorkOrderExampleBuilder {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Creates every example order in `store`. Returns how many were created.
    pub async fn build(&self, store: &InMemoryRecordStore<WorkOrder>) -> Result<usize, StoreError> {
        let created = store.create_many(self.orders()).await?;
        tracing::info!(count = created.len(), "seeded example work orders");
        Ok(created.len())
    }

    pub fn orders(&self) -> Vec<WorkOrder> {
        let mut orders = self.open();
        orders.extend(self.in_progress());
        orders.extend(self.resolved());
        orders.extend(self.closed());
        orders
    }

    fn open(&self) -> Vec<WorkOrder> {
        vec![
            self.electrical_inspection(7, 14, WorkOrderStatus::Open),
            self.photoeye_clean(7, 14, WorkOrderStatus::Open),
            order(
                "SL1-13 Encoder Issue",
                "The system is continously triggering a SL1-13 encoder underspeed alarm.",
                Some(self.today),
                WorkOrderPriority::High,
                WorkOrderServiceType::Reactive,
                WorkOrderStatus::Open,
            ),
            WorkOrder {
                other_type_of_service: Some("TSA Security Escort".into()),
                ..order(
                    &format!("TSA Security Escort {}", self.label(14)),
                    "Contractor will be inspecting the system for an upcoming job and they require a TSA security escort.",
                    self.offset(14),
                    WorkOrderPriority::Low,
                    WorkOrderServiceType::Other,
                    WorkOrderStatus::Open,
                )
            },
        ]
    }

    fn in_progress(&self) -> Vec<WorkOrder> {
        vec![
            self.electrical_inspection(-7, 7, WorkOrderStatus::InProgress),
            self.photoeye_clean(-7, 7, WorkOrderStatus::InProgress),
            order(
                "B-7 PWC Leaking Water Hose",
                "Water has been reported near B-7 PWC.",
                Some(self.today),
                WorkOrderPriority::High,
                WorkOrderServiceType::Reactive,
                WorkOrderStatus::InProgress,
            ),
        ]
    }

    fn resolved(&self) -> Vec<WorkOrder> {
        vec![WorkOrder {
            problem: Some("The I/O module failed.".into()),
            resolution: Some("The I/O Module was replaced.".into()),
            ..order(
                "SS1-04 VFD Failure",
                "A VFD alarm has been reported by the system for SSL1-04.",
                Some(self.today),
                WorkOrderPriority::High,
                WorkOrderServiceType::Reactive,
                WorkOrderStatus::Resolved,
            )
        }]
    }

    fn closed(&self) -> Vec<WorkOrder> {
        vec![
            WorkOrder {
                problem: Some("No Issues Found".into()),
                resolution: Some("No Issues Found".into()),
                ..self.electrical_inspection(-14, -7, WorkOrderStatus::Closed)
            },
            WorkOrder {
                problem: Some("None".into()),
                resolution: Some("Clean Completed".into()),
                ..self.photoeye_clean(-14, -7, WorkOrderStatus::Closed)
            },
            WorkOrder {
                problem: Some("The conveyor's motor has burned out.".into()),
                resolution: Some("The motor has been replaced.".into()),
                ..order(
                    "ML1-30 Motor Issue",
                    "An overload and failed to start alarm has been reported by the system for ML1-30.",
                    self.offset(-7),
                    WorkOrderPriority::High,
                    WorkOrderServiceType::Reactive,
                    WorkOrderStatus::Closed,
                )
            },
        ]
    }

    fn electrical_inspection(&self, named: i64, due: i64, status: WorkOrderStatus) -> WorkOrder {
        order(
            &format!("Electrical Inspection {}", self.label(named)),
            ELECTRICAL_TESTS,
            self.offset(due),
            WorkOrderPriority::Normal,
            WorkOrderServiceType::Inspection,
            status,
        )
    }

    fn photoeye_clean(&self, named: i64, due: i64, status: WorkOrderStatus) -> WorkOrder {
        order(
            &format!("Photoeye Clean {}", self.label(named)),
            PHOTOEYE_CLEAN,
            self.offset(due),
            WorkOrderPriority::Normal,
            WorkOrderServiceType::Routine,
            status,
        )
    }

    fn offset(&self, days: i64) -> Option<NaiveDate> {
        let shift = Days::new(days.unsigned_abs());
        if days < 0 {
            self.today.checked_sub_days(shift)
        } else {
            self.today.checked_add_days(shift)
        }
    }

    fn label(&self, days: i64) -> String {
        self.offset(days)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

fn order(
    name: &str,
    description: &str,
    due_by: Option<NaiveDate>,
    priority: WorkOrderPriority,
    service_type: WorkOrderServiceType,
    status: WorkOrderStatus,
) -> WorkOrder {
    WorkOrder {
        name: name.into(),
        description: Some(description.into()),
        due_by,
        priority,
        service_type,
        status,
        ..WorkOrder::default()
    }
}
