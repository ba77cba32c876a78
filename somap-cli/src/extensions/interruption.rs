//! Interruption handler.

#[cfg(test)]
#[path = "../../tests/unit/extensions/interruption_test.rs"]
mod interruption_test;

use somap::prelude::{Float, Quota};
use somap::utils::TimeQuota;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static SHOULD_INTERRUPT: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Creates interruption quota: it is reached on Ctrl-C or when max time is elapsed.
pub fn create_interruption_quota(max_time: Option<usize>) -> Arc<dyn Quota> {
    let inner = max_time.map::<Arc<dyn Quota>, _>(|time| Arc::new(TimeQuota::new(time as Float)));

    // NOTE signal handler can be installed only once per process
    let should_interrupt = SHOULD_INTERRUPT
        .get_or_init(|| {
            let should_interrupt = Arc::new(AtomicBool::new(false));

            if let Err(err) = ctrlc::set_handler({
                let should_interrupt = should_interrupt.clone();
                move || should_interrupt.store(true, Ordering::Relaxed)
            }) {
                eprintln!("cannot set interruption handler: '{err}'");
            }

            should_interrupt
        })
        .clone();

    Arc::new(InterruptionQuota { inner, should_interrupt })
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota>>,
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.should_interrupt.load(Ordering::Relaxed)
    }
}
