use std::time::{Duration, Instant};

use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};
use tracing::info;

/// Logs one line per request: method, URI, status and elapsed time.
pub(crate) struct RequestTrace;

struct RequestStart(Option<Instant>);

/// Whole milliseconds, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[rocket::async_trait]
impl Fairing for RequestTrace {
    fn info(&self) -> Info {
        Info {
            name: "Request trace",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, req: &mut Request<'_>, _: &mut Data<'_>) {
        req.local_cache(|| RequestStart(Some(Instant::now())));
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let elapsed_ms = req
            .local_cache(|| RequestStart(None))
            .0
            .map(|start| millis(start.elapsed()))
            .unwrap_or_default();

        info!(
            method = %req.method(),
            uri = %req.uri(),
            status = res.status().code,
            elapsed_ms,
            "request handled"
        );
    }
}
