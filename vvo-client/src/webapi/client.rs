//! HTTP client for the VVO web API.
//!
//! All endpoints are JSON-over-POST against a single host. The provider
//! answers 200 even for logical failures and reports those through the
//! status envelope, so success triage happens in two steps: HTTP status
//! first, then the envelope during conversion.

use chrono::{FixedOffset, Utc};

use crate::error::VvoError;
use crate::sap_date;

use super::convert::{
    FindResult, MonitorResult, RouteChangesResult, RouteResult, convert_monitor,
    convert_pointfinder, convert_route_changes, convert_trips,
};
use super::requests::{
    MonitorOptions, MonitorRequest, PointfinderRequest, RouteChangesRequest, TripOptions,
    TripsRequest,
};
use super::types::{MonitorResponse, PointfinderResponse, RouteChangesResponse, TripsResponse};

/// Default base URL for the VVO web API.
const DEFAULT_BASE_URL: &str = "https://webapi.vvo-online.de";

/// Configuration for the web API client.
#[derive(Debug, Clone)]
pub struct WebApiConfig {
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl WebApiConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for WebApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// VVO web API client.
#[derive(Debug, Clone)]
pub struct WebApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl WebApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WebApiConfig) -> Result<Self, VvoError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Upcoming departures from a stop.
    ///
    /// `stop_id` is the numeric stop id as returned by [`Self::find_stops`].
    pub async fn departure_monitor(
        &self,
        stop_id: i64,
        options: &MonitorOptions,
    ) -> Result<MonitorResult, VvoError> {
        let resp: MonitorResponse = self.departure_monitor_inner(stop_id, options).await?;
        Ok(convert_monitor(resp)?)
    }

    /// Raw departure monitor response, without normalisation.
    pub async fn departure_monitor_raw(
        &self,
        stop_id: i64,
        options: &MonitorOptions,
    ) -> Result<serde_json::Value, VvoError> {
        self.departure_monitor_inner(stop_id, options).await
    }

    async fn departure_monitor_inner<T: serde::de::DeserializeOwned>(
        &self,
        stop_id: i64,
        options: &MonitorOptions,
    ) -> Result<T, VvoError> {
        let time = options.time.unwrap_or_else(now_local);
        let body = MonitorRequest {
            stopid: stop_id,
            time: time.to_rfc3339(),
            isarrival: options.is_arrival,
            limit: options.limit,
            mot: &options.modes,
        };
        self.post("/dm", &body).await
    }

    /// Search for stops matching a (possibly partial) name.
    pub async fn find_stops(&self, query: &str) -> Result<FindResult, VvoError> {
        let resp: PointfinderResponse = self.find_stops_inner(query).await?;
        Ok(convert_pointfinder(resp)?)
    }

    /// Raw point finder response, without normalisation.
    pub async fn find_stops_raw(&self, query: &str) -> Result<serde_json::Value, VvoError> {
        self.find_stops_inner(query).await
    }

    async fn find_stops_inner<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<T, VvoError> {
        let body = PointfinderRequest {
            query,
            limit: 0,
            stops_only: true,
            dvb: true,
        };
        self.post("/tr/pointfinder", &body).await
    }

    /// Trip options between two stops, identified by their stop ids.
    pub async fn trips(
        &self,
        origin_id: i64,
        destination_id: i64,
        options: &TripOptions,
    ) -> Result<RouteResult, VvoError> {
        let resp: TripsResponse = self
            .trips_inner(origin_id, destination_id, options)
            .await?;
        Ok(convert_trips(resp)?)
    }

    /// Raw trip search response, without normalisation.
    pub async fn trips_raw(
        &self,
        origin_id: i64,
        destination_id: i64,
        options: &TripOptions,
    ) -> Result<serde_json::Value, VvoError> {
        self.trips_inner(origin_id, destination_id, options).await
    }

    async fn trips_inner<T: serde::de::DeserializeOwned>(
        &self,
        origin_id: i64,
        destination_id: i64,
        options: &TripOptions,
    ) -> Result<T, VvoError> {
        let time = options.time.unwrap_or_else(now_local);
        let body = TripsRequest {
            origin: origin_id.to_string(),
            destination: destination_id.to_string(),
            time: time.to_rfc3339(),
            isarrivaltime: options.is_arrival_time,
            shorttermchanges: options.allow_short_term_changes,
            mobility_settings: &options.mobility,
            standard_settings: &options.standard,
        };
        self.post("/tr/trips", &body).await
    }

    /// Current and upcoming route changes across the network.
    ///
    /// `short_term` includes short-notice disruptions alongside planned
    /// construction work.
    pub async fn route_changes(&self, short_term: bool) -> Result<RouteChangesResult, VvoError> {
        let resp: RouteChangesResponse = self.route_changes_inner(short_term).await?;
        Ok(convert_route_changes(resp)?)
    }

    /// Raw route changes response, without normalisation.
    pub async fn route_changes_raw(&self, short_term: bool) -> Result<serde_json::Value, VvoError> {
        self.route_changes_inner(short_term).await
    }

    async fn route_changes_inner<T: serde::de::DeserializeOwned>(
        &self,
        short_term: bool,
    ) -> Result<T, VvoError> {
        let body = RouteChangesRequest {
            shortterm: short_term,
        };
        self.post("/rc", &body).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, VvoError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "web api request");

        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VvoError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| VvoError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

fn now_local() -> chrono::DateTime<FixedOffset> {
    Utc::now().with_timezone(&sap_date::provider_offset())
}
