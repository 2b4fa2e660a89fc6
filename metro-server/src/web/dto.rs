//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{City, LineStop, Station};
use crate::planner::{CostModel, FareRoute, StationsRoute, TimeRoute};
use crate::stations::CitySummary;

/// Request to find a route between two stations.
#[derive(Debug, Default, Deserialize)]
pub struct PathRequest {
    /// Origin station name
    #[serde(default)]
    pub from: String,

    /// Destination station name
    #[serde(default)]
    pub to: String,

    /// City to route in (defaults to the server's default city)
    #[serde(default, alias = "citySlug")]
    pub city_slug: Option<String>,
}

/// Response for a fewest-stations route.
#[derive(Debug, Serialize)]
pub struct StationsPathResponse {
    pub path: Vec<String>,

    /// Stations on the path, origin and destination included
    pub stations_count: usize,

    pub message: &'static str,
}

impl From<StationsRoute> for StationsPathResponse {
    fn from(route: StationsRoute) -> Self {
        Self {
            path: route.path,
            stations_count: route.station_count,
            message: CostModel::FewestStations.message(),
        }
    }
}

/// Response for a fastest route.
#[derive(Debug, Serialize)]
pub struct TimePathResponse {
    pub path: Vec<String>,

    /// Total minutes, transfer penalties included
    pub time: f64,

    /// Number of line changes
    pub transfers: usize,

    pub message: &'static str,
}

impl From<TimeRoute> for TimePathResponse {
    fn from(route: TimeRoute) -> Self {
        Self {
            path: route.path,
            time: route.total_minutes,
            transfers: route.transfers,
            message: CostModel::MinTime.message(),
        }
    }
}

/// Response for a cheapest route.
#[derive(Debug, Serialize)]
pub struct FarePathResponse {
    pub path: Vec<String>,

    /// Total distance travelled
    pub distance: f64,

    pub fare: u32,

    pub message: &'static str,
}

impl From<FareRoute> for FarePathResponse {
    fn from(route: FareRoute) -> Self {
        Self {
            path: route.path,
            distance: route.total_distance,
            fare: route.fare,
            message: CostModel::MinFare.message(),
        }
    }
}

/// A city in listings.
#[derive(Debug, Serialize)]
pub struct CityResult {
    pub name: String,
    pub slug: String,
    pub state: String,
    pub description: String,
    pub total_lines: usize,
    pub total_stations: usize,
}

impl CityResult {
    /// Create a city result from a city and its totals.
    pub fn new(city: &City, summary: CitySummary) -> Self {
        Self {
            name: city.name.clone(),
            slug: city.slug.clone(),
            state: city.state.clone(),
            description: city.description.clone(),
            total_lines: summary.total_lines,
            total_stations: summary.total_stations,
        }
    }
}

/// A station in listings.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub lines: Vec<LineStop>,
    pub is_interchange: bool,
    pub x: f64,
    pub y: f64,
}

impl StationResult {
    /// Create a station result from a station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            lines: station.lines.clone(),
            is_interchange: station.is_interchange(),
            x: station.x,
            y: station.y,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_request_accepts_camel_case_city() {
        let req: PathRequest =
            serde_json::from_str(r#"{"from": "Howrah", "to": "Sealdah", "citySlug": "kolkata"}"#)
                .unwrap();
        assert_eq!(req.from, "Howrah");
        assert_eq!(req.to, "Sealdah");
        assert_eq!(req.city_slug.as_deref(), Some("kolkata"));
    }

    #[test]
    fn path_request_missing_fields_default_empty() {
        let req: PathRequest = serde_json::from_str("{}").unwrap();
        assert!(req.from.is_empty());
        assert!(req.to.is_empty());
        assert!(req.city_slug.is_none());
    }

    #[test]
    fn stations_response_from_route() {
        let response = StationsPathResponse::from(StationsRoute {
            path: vec!["A".into(), "B".into()],
            station_count: 2,
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["stations_count"], 2);
        assert_eq!(
            json["message"],
            "Shortest path based on minimum stations (BFS)"
        );
    }

    #[test]
    fn time_response_from_route() {
        let response = TimePathResponse::from(TimeRoute {
            path: vec!["A".into(), "B".into(), "D".into()],
            total_minutes: 9.0,
            transfers: 1,
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["time"], 9.0);
        assert_eq!(json["transfers"], 1);
        assert_eq!(json["path"][2], "D");
    }

    #[test]
    fn fare_response_from_route() {
        let response = FarePathResponse::from(FareRoute {
            path: vec!["A".into()],
            total_distance: 0.0,
            fare: 5,
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["distance"], 0.0);
        assert_eq!(json["fare"], 5);
    }

    #[test]
    fn station_result_marks_interchange() {
        let station = Station::new("Esplanade")
            .on_line("Blue Line", 12)
            .on_line("Green Line", 4)
            .at(400.0, 350.0);
        let result = StationResult::from_station(&station);

        assert!(result.is_interchange);
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.x, 400.0);
    }
}
