use crate::config::ApiConfig;
use crate::error::FetchFailure;
use crate::types::DateResponse;
use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

/// Anything that can produce the current date for the display.
#[async_trait(?Send)]
pub trait DateSource {
    async fn fetch_date(&self) -> Result<String, FetchFailure>;
}

/// Shared handle passed through component props.
#[derive(Clone)]
pub struct DateSourceHandle(Rc<dyn DateSource>);

impl DateSourceHandle {
    pub fn new<S: DateSource + 'static>(source: S) -> Self {
        Self(Rc::new(source))
    }

    pub fn source(&self) -> Rc<dyn DateSource> {
        self.0.clone()
    }
}

impl PartialEq for DateSourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fetches the date from the page's own backend.
pub struct HttpDateSource {
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpDateSource {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
        }
    }

    async fn request(&self) -> Result<String, FetchFailure> {
        let response = Request::get(&self.endpoint).send().await?;
        let failed_status = (!response.ok()).then(|| response.status());
        let body = response.text().await?;
        decode_body(failed_status, &body)
    }
}

/// Any body that parses is accepted regardless of status. A non-success
/// status only shows up in the parse error so a failure logs once.
fn decode_body(failed_status: Option<u16>, body: &str) -> Result<String, FetchFailure> {
    DateResponse::parse(body).map_err(|e| match (e, failed_status) {
        (FetchFailure::Parse(msg), Some(status)) => {
            FetchFailure::Parse(format!("status {}: {}", status, msg))
        }
        (e, _) => e,
    })
}

#[async_trait(?Send)]
impl DateSource for HttpDateSource {
    async fn fetch_date(&self) -> Result<String, FetchFailure> {
        match self.timeout {
            None => self.request().await,
            Some(limit) => {
                let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
                with_timeout(self.request(), TimeoutFuture::new(millis), limit).await
            }
        }
    }
}

/// Race a request against a timer; whichever finishes first wins.
pub async fn with_timeout<F, T>(request: F, timer: T, limit: Duration) -> Result<String, FetchFailure>
where
    F: Future<Output = Result<String, FetchFailure>>,
    T: Future<Output = ()>,
{
    pin_mut!(request);
    pin_mut!(timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchFailure::TimedOut(limit)),
    }
}
