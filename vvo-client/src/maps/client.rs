//! HTTP client for the DVB map apps.

use tracing::warn;

use crate::error::VvoError;
use crate::geo::{self, Point};

use super::pins::{Pin, PinKind, decode_pin};

/// Default base URL for the map apps.
const DEFAULT_BASE_URL: &str = "https://www.dvb.de/apps/map";

/// A reverse-geocoded street address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub city: String,
    pub street: String,
}

/// Configuration for the maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// Base URL for the map apps.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl MapsConfig {
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

impl Default for MapsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// DVB map apps client.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    base_url: String,
}

impl MapsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, VvoError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Pins of one kind inside a bounding box.
    ///
    /// `sw` and `ne` are the south-west and north-east corners in
    /// geographic coordinates; the endpoint wants them projected, so the
    /// conversion happens here. Records the decoder rejects are dropped
    /// with a warning.
    pub async fn pins(&self, sw: Point, ne: Point, kind: PinKind) -> Result<Vec<Pin>, VvoError> {
        let records = self.pins_raw(sw, ne, kind).await?;
        let mut pins = Vec::with_capacity(records.len());
        for record in &records {
            match decode_pin(kind, record) {
                Some(pin) => pins.push(pin),
                None => warn!(%record, kind = kind.as_query(), "dropping undecodable pin record"),
            }
        }
        Ok(pins)
    }

    /// Raw pin records, without decoding.
    pub async fn pins_raw(
        &self,
        sw: Point,
        ne: Point,
        kind: PinKind,
    ) -> Result<Vec<String>, VvoError> {
        let (sw_x, sw_y) = geo::wgs_to_gk4(sw.lat, sw.lng)?;
        let (ne_x, ne_y) = geo::wgs_to_gk4(ne.lat, ne.lng)?;
        let url = format!("{}/pins", self.base_url);
        let params: &[(&str, String)] = &[
            ("showlines", "true".to_string()),
            ("swlat", sw_x.to_string()),
            ("swlng", sw_y.to_string()),
            ("nelat", ne_x.to_string()),
            ("nelng", ne_y.to_string()),
            ("pintypes", kind.as_query().to_string()),
        ];
        self.get(&url, params).await
    }

    /// Geographic position of a point of interest by its pin id.
    pub async fn poi_location(&self, poi_id: &str) -> Result<Point, VvoError> {
        let url = format!("{}/coordinates", self.base_url);
        let body: String = self.get(&url, &[("id", poi_id)]).await?;
        // The body is a bare JSON string "x|y" of projected integers.
        let decode = |s: &str| -> Option<Point> {
            let (x, y) = s.split_once('|')?;
            let x: f64 = x.parse().ok()?;
            let y: f64 = y.parse().ok()?;
            geo::gk4_to_wgs(x, y).ok()
        };
        decode(&body).ok_or_else(|| VvoError::Json {
            message: "expected a projected x|y pair".to_string(),
            body: Some(body),
        })
    }

    /// Reverse-geocode a geographic position to a street address.
    ///
    /// `None` when the provider has no address for the position.
    pub async fn address(&self, lat: f64, lng: f64) -> Result<Option<Address>, VvoError> {
        let (x, y) = geo::wgs_to_gk4(lat, lng)?;
        let url = format!("{}/address", self.base_url);
        let body: String = self
            .get(&url, &[("lat", x.to_string()), ("lng", y.to_string())])
            .await?;
        // "City|Street" on success, typically empty when nothing was found.
        Ok(body.split_once('|').map(|(city, street)| Address {
            city: city.to_string(),
            street: street.to_string(),
        }))
    }

    async fn get<P, T>(&self, url: &str, params: &P) -> Result<T, VvoError>
    where
        P: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(url, "map app request");
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
