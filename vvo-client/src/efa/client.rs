//! HTTP client for the legacy EFA endpoints.
//!
//! These are query-parameter GETs against an older backend generation. The
//! default host is unreachable from some university networks; the alternate
//! host exists for exactly that case and is selected by the `eduroam` flag
//! rather than discovered.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use crate::error::VvoError;
use crate::sap_date;

use super::convert::{FoundLocation, TripsResult, convert_stopfinder, convert_trip_request};
use super::types::{StopfinderResponse, TripRequestResponse};

/// Default base URL for the EFA endpoints.
const DEFAULT_BASE_URL: &str = "http://efa.vvo-online.de:8080/dvb";

/// Alternate base URL reachable from eduroam networks.
const EDUROAM_BASE_URL: &str = "http://efa.faplino.de/dvb";

/// Default city for trip request endpoints.
const DEFAULT_CITY: &str = crate::domain::DEFAULT_CITY;

/// Whether a trip request time is a departure or an arrival constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepArr {
    #[default]
    Departure,
    Arrival,
}

impl DepArr {
    fn as_param(self) -> &'static str {
        match self {
            DepArr::Departure => "dep",
            DepArr::Arrival => "arr",
        }
    }
}

/// Options for a trip request.
#[derive(Debug, Clone)]
pub struct TripQuery {
    pub city_origin: String,
    pub city_destination: String,
    /// Defaults to now.
    pub time: Option<DateTime<FixedOffset>>,
    pub dep_arr: DepArr,
}

impl Default for TripQuery {
    fn default() -> Self {
        Self {
            city_origin: DEFAULT_CITY.to_string(),
            city_destination: DEFAULT_CITY.to_string(),
            time: None,
            dep_arr: DepArr::Departure,
        }
    }
}

/// Configuration for the EFA client.
#[derive(Debug, Clone)]
pub struct EfaConfig {
    /// Use the eduroam-reachable host.
    pub eduroam: bool,
    /// Base URL override; takes precedence over the `eduroam` flag.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl EfaConfig {
    pub fn new() -> Self {
        Self {
            eduroam: false,
            base_url: None,
            timeout_secs: 10,
        }
    }

    pub fn with_eduroam(mut self, eduroam: bool) -> Self {
        self.eduroam = eduroam;
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    fn resolve_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None if self.eduroam => EDUROAM_BASE_URL.to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for EfaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// EFA API client.
#[derive(Debug, Clone)]
pub struct EfaClient {
    http: reqwest::Client,
    base_url: String,
}

impl EfaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EfaConfig) -> Result<Self, VvoError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.resolve_base_url(),
        })
    }

    /// Search for stops and addresses matching a name.
    pub async fn find(&self, query: &str) -> Result<Vec<FoundLocation>, VvoError> {
        let resp: StopfinderResponse = self.find_inner(query).await?;
        Ok(convert_stopfinder(resp))
    }

    /// Raw stop finder response, without normalisation.
    pub async fn find_raw(&self, query: &str) -> Result<serde_json::Value, VvoError> {
        self.find_inner(query).await
    }

    async fn find_inner<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<T, VvoError> {
        let url = format!("{}/XML_STOPFINDER_REQUEST", self.base_url);
        let params: &[(&str, &str)] = &[
            ("locationServerActive", "1"),
            ("outputFormat", "JSON"),
            ("type_sf", "any"),
            ("name_sf", query),
            ("coordOutputFormat", "WGS84"),
            ("coordOutputFormatTail", "0"),
        ];
        self.get(&url, params).await
    }

    /// Itineraries between two stops identified by name.
    pub async fn trip_request(
        &self,
        origin: &str,
        destination: &str,
        query: &TripQuery,
    ) -> Result<TripsResult, VvoError> {
        let resp: TripRequestResponse = self.trip_request_inner(origin, destination, query).await?;
        Ok(convert_trip_request(resp))
    }

    /// Raw trip request response, without normalisation.
    pub async fn trip_request_raw(
        &self,
        origin: &str,
        destination: &str,
        query: &TripQuery,
    ) -> Result<serde_json::Value, VvoError> {
        self.trip_request_inner(origin, destination, query).await
    }

    async fn trip_request_inner<T: serde::de::DeserializeOwned>(
        &self,
        origin: &str,
        destination: &str,
        query: &TripQuery,
    ) -> Result<T, VvoError> {
        let time = query
            .time
            .unwrap_or_else(|| Utc::now().with_timezone(&sap_date::provider_offset()));
        let url = format!("{}/XML_TRIP_REQUEST2", self.base_url);
        // The minute key really is spelled "idtTimeMinute" upstream.
        let params: &[(&str, String)] = &[
            ("sessionID", "0".to_string()),
            ("requestID", "0".to_string()),
            ("language", "de".to_string()),
            ("execInst", "normal".to_string()),
            ("command", String::new()),
            ("ptOptionsActive", "-1".to_string()),
            ("itOptionsActive", String::new()),
            ("itDateDay", time.day().to_string()),
            ("itDateMonth", time.month().to_string()),
            ("itDateYear", time.year().to_string()),
            ("place_origin", query.city_origin.clone()),
            ("placeState_origin", "empty".to_string()),
            ("type_origin", "stop".to_string()),
            ("name_origin", origin.to_string()),
            ("nameState_origin", "empty".to_string()),
            ("place_destination", query.city_destination.clone()),
            ("placeState_destination", "empty".to_string()),
            ("type_destination", "stop".to_string()),
            ("name_destination", destination.to_string()),
            ("nameState_destination", "empty".to_string()),
            ("itdTripDateTimeDepArr", query.dep_arr.as_param().to_string()),
            ("itdTimeHour", time.hour().to_string()),
            ("idtTimeMinute", time.minute().to_string()),
            ("outputFormat", "JSON".to_string()),
            ("coordOutputFormat", "WGS84".to_string()),
            ("coordOutputFormatTail", "0".to_string()),
        ];
        self.get(&url, params).await
    }

    async fn get<P, T>(&self, url: &str, params: &P) -> Result<T, VvoError>
    where
        P: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, "efa request");
        let response = self.http.get(url).query(params).send().await?;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_selection() {
        assert_eq!(EfaConfig::new().resolve_base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            EfaConfig::new().with_eduroam(true).resolve_base_url(),
            EDUROAM_BASE_URL
        );
        assert_eq!(
            EfaConfig::new()
                .with_eduroam(true)
                .with_base_url("http://localhost:9090")
                .resolve_base_url(),
            "http://localhost:9090"
        );
    }

    #[test]
    fn config_defaults() {
        let config = EfaConfig::default();
        assert!(!config.eduroam);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        let client = EfaClient::new(EfaConfig::new());
        assert!(client.is_ok());
    }

    #[test]
    fn dep_arr_params() {
        assert_eq!(DepArr::Departure.as_param(), "dep");
        assert_eq!(DepArr::Arrival.as_param(), "arr");
        assert_eq!(DepArr::default(), DepArr::Departure);
    }
}
