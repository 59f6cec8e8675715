use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    bulk_requests: AtomicU64,
    bulk_records: AtomicU64,
    bulk_errors: AtomicU64,
    logins: AtomicU64,
    login_failures: AtomicU64,
}

impl Metrics {
    pub fn record_bulk(&self, record_count: u64) {
        self.bulk_requests.fetch_add(1, Ordering::Relaxed);
        self.bulk_records.fetch_add(record_count, Ordering::Relaxed);
    }

    pub fn record_bulk_error(&self) {
        self.bulk_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_login(&self, success: bool) {
        if success {
            self.logins.fetch_add(1, Ordering::Relaxed);
        } else {
            self.login_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.bulk_requests.load(Ordering::Relaxed);
        let records = self.bulk_records.load(Ordering::Relaxed);
        let errors = self.bulk_errors.load(Ordering::Relaxed);
        let logins = self.logins.load(Ordering::Relaxed);
        let login_failures = self.login_failures.load(Ordering::Relaxed);

        format!(
            "# TYPE admin_bulk_requests_total counter\n\
admin_bulk_requests_total {}\n\
# TYPE admin_bulk_records_total counter\n\
admin_bulk_records_total {}\n\
# TYPE admin_bulk_errors_total counter\n\
admin_bulk_errors_total {}\n\
# TYPE admin_logins_total counter\n\
admin_logins_total {}\n\
# TYPE admin_login_failures_total counter\n\
admin_login_failures_total {}\n",
            requests, records, errors, logins, login_failures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prometheus_output_reflects_counters() {
        let metrics = Metrics::default();
        metrics.record_bulk(2);
        metrics.record_bulk(3);
        metrics.record_bulk_error();
        metrics.record_login(false);
        let text = metrics.render_prometheus();
        assert!(text.contains("admin_bulk_requests_total 2\n"));
        assert!(text.contains("admin_bulk_records_total 5\n"));
        assert!(text.contains("admin_bulk_errors_total 1\n"));
        assert!(text.contains("admin_login_failures_total 1\n"));
    }
}
