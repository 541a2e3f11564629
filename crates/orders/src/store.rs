//! Order store: record ownership, lifecycle scheduling, counters.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::Utc;

use fulfillment_core::DomainResult;

use crate::order::{CreateOrder, Order, OrderId, OrderStatus};

/// Delays between the scheduled lifecycle stages.
///
/// Injectable so tests can run the full lifecycle in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct ProcessingDelays {
    /// Creation → `processing`.
    pub to_processing: Duration,
    /// `processing` → `completed`.
    pub to_completed: Duration,
}

impl Default for ProcessingDelays {
    fn default() -> Self {
        Self {
            to_processing: Duration::from_millis(500),
            to_completed: Duration::from_millis(1000),
        }
    }
}

/// Current orders per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusDistribution {
    pub pending: u64,
    pub processing: u64,
    pub completed: u64,
    /// Rejected creations are never stored, so this gauge stays at zero;
    /// rejections are counted in [`OrderCounters::failed`].
    pub failed: u64,
}

/// Counters owned by the store, colocated with the table under one lock so
/// every scrape reconciles with the stored orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCounters {
    pub total: u64,
    pub processed: u64,
    pub failed: u64,
    pub by_status: StatusDistribution,
    pub revenue: f64,
    pub processing_time_ms_sum: f64,
}

impl OrderCounters {
    /// Average creation → completion time, zero before the first completion.
    pub fn avg_processing_time_ms(&self) -> f64 {
        if self.processed == 0 {
            0.0
        } else {
            self.processing_time_ms_sum / self.processed as f64
        }
    }
}

#[derive(Debug, Default)]
struct OrderTable {
    orders: Vec<Order>,
    next_id: OrderId,
    counters: OrderCounters,
}

#[derive(Debug)]
struct StoreInner {
    table: Mutex<OrderTable>,
    delays: ProcessingDelays,
}

/// Owns every order record and drives each one through its lifecycle.
///
/// Cloning hands out another handle to the same table. All reads and
/// mutations go through one mutex, so a concurrent lookup during a
/// transition always sees a definite state; the lock is never held across an
/// await point.
#[derive(Debug, Clone)]
pub struct OrderStore {
    inner: Arc<StoreInner>,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    pub fn new() -> Self {
        Self::with_delays(ProcessingDelays::default())
    }

    pub fn with_delays(delays: ProcessingDelays) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                table: Mutex::new(OrderTable {
                    orders: Vec::new(),
                    next_id: 1,
                    counters: OrderCounters::default(),
                }),
                delays,
            }),
        }
    }

    /// Validate and store a new order, scheduling its lifecycle.
    ///
    /// Returns immediately with the order in `pending`; the two delayed
    /// transitions run on a spawned task. A rejected command increments the
    /// failed counter and leaves no record behind.
    pub fn create(&self, cmd: CreateOrder) -> DomainResult<Order> {
        let accepted = Instant::now();

        let validated = match cmd.validate() {
            Ok(v) => v,
            Err(err) => {
                self.inner.table.lock().unwrap().counters.failed += 1;
                return Err(err);
            }
        };

        let order = {
            let mut table = self.inner.table.lock().unwrap();
            let order = Order {
                id: table.next_id,
                customer_id: validated.customer_id,
                items: validated.items,
                total_amount: validated.total_amount,
                status: OrderStatus::Pending,
                created_at: Utc::now(),
            };
            table.next_id += 1;
            table.orders.push(order.clone());
            table.counters.total += 1;
            table.counters.by_status.pending += 1;
            order
        };

        tracing::debug!(order_id = order.id, "order created");
        tokio::spawn(self.clone().run_lifecycle(order.id, accepted));

        Ok(order)
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        let table = self.inner.table.lock().unwrap();
        table.orders.iter().find(|o| o.id == id).cloned()
    }

    /// All orders, in insertion order.
    pub fn list(&self) -> Vec<Order> {
        self.inner.table.lock().unwrap().orders.clone()
    }

    /// Consistent snapshot of the counters for a scrape.
    pub fn counters(&self) -> OrderCounters {
        self.inner.table.lock().unwrap().counters.clone()
    }

    /// Drive one order through `processing` and then `completed`.
    ///
    /// Each step re-resolves the id under the lock; a record that no longer
    /// exists makes the remaining steps a silent no-op.
    pub(crate) async fn run_lifecycle(self, id: OrderId, accepted: Instant) {
        tokio::time::sleep(self.inner.delays.to_processing).await;
        if !self.begin_processing(id) {
            return;
        }

        tokio::time::sleep(self.inner.delays.to_completed).await;
        self.complete(id, accepted);
    }

    fn begin_processing(&self, id: OrderId) -> bool {
        let mut guard = self.inner.table.lock().unwrap();
        let table = &mut *guard;
        let Some(order) = table.orders.iter_mut().find(|o| o.id == id) else {
            tracing::debug!(order_id = id, "skipping transition: order no longer exists");
            return false;
        };
        if order.status != OrderStatus::Pending {
            return false;
        }

        order.status = OrderStatus::Processing;
        table.counters.by_status.pending -= 1;
        table.counters.by_status.processing += 1;
        tracing::debug!(order_id = id, "order processing");
        true
    }

    fn complete(&self, id: OrderId, accepted: Instant) -> bool {
        let mut guard = self.inner.table.lock().unwrap();
        let table = &mut *guard;
        let Some(order) = table.orders.iter_mut().find(|o| o.id == id) else {
            tracing::debug!(order_id = id, "skipping completion: order no longer exists");
            return false;
        };
        if order.status != OrderStatus::Processing {
            return false;
        }

        order.status = OrderStatus::Completed;
        let amount = order.total_amount;
        table.counters.by_status.processing -= 1;
        table.counters.by_status.completed += 1;
        table.counters.processed += 1;
        table.counters.revenue += amount;
        table.counters.processing_time_ms_sum += accepted.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(order_id = id, amount, "order completed");
        true
    }
}
