//! HTTP adapter for the external tour-optimization service.

use serde::{Deserialize, Serialize};

use crate::model::{DeliveryRequest, TourRecord};
use crate::traits::TourSource;

#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptimizerClient {
    config: OptimizerConfig,
    client: reqwest::blocking::Client,
}

impl OptimizerClient {
    pub fn new(config: OptimizerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Ask the optimizer for one tour per courier covering the given
    /// requests. Returns the transport or decode error to callers that
    /// want to report it; `TourSource` swallows it instead.
    pub fn compute_tours(
        &self,
        requests: &[DeliveryRequest],
    ) -> Result<Vec<TourRecord>, reqwest::Error> {
        let url = format!("{}/api/tours/compute", self.config.base_url);

        let response = self
            .client
            .post(url)
            .json(&ComputeToursRequest { requests })
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<ComputeToursResponse>())?;

        Ok(response.tours.unwrap_or_default())
    }
}

impl TourSource for OptimizerClient {
    fn tours_for(&self, requests: &[DeliveryRequest]) -> Vec<TourRecord> {
        match self.compute_tours(requests) {
            Ok(tours) => tours,
            Err(err) => {
                tracing::warn!(error = %err, "tour computation failed, displaying nothing");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ComputeToursRequest<'a> {
    requests: &'a [DeliveryRequest],
}

#[derive(Debug, Deserialize)]
struct ComputeToursResponse {
    tours: Option<Vec<TourRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_compute_response() {
        let body = r#"{
            "tours": [{
                "courier": "C1",
                "deliveries": [["1", "3"]],
                "route_intersections": ["1", "2", "3"],
                "total_travel_time_s": 1200,
                "total_service_time_s": 600,
                "total_distance_m": 5400.0
            }]
        }"#;
        let decoded: ComputeToursResponse = serde_json::from_str(body).expect("decode response");
        let tours = decoded.tours.expect("tours present");
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].courier, "C1");
        assert_eq!(tours[0].deliveries, vec![("1".to_string(), "3".to_string())]);
        assert_eq!(tours[0].route_intersections, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_decode_missing_tours_field() {
        let decoded: ComputeToursResponse = serde_json::from_str("{}").expect("decode response");
        assert!(decoded.tours.unwrap_or_default().is_empty());
    }
}
