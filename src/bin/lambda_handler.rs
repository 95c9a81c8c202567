//! AWS Lambda handler for savings goal projections
//!
//! Accepts the four savings inputs as JSON, validates them, and returns the
//! projection with a human-readable duration.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use savings_goal::report::format_duration;
use savings_goal::{ProjectionEngine, ProjectionResult, SavingsInputs};

/// Input for one projection; missing fields take the calculator's defaults
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    #[serde(default = "default_goal")]
    pub goal_amount: f64,

    #[serde(default = "default_initial")]
    pub initial_savings: f64,

    #[serde(default = "default_monthly")]
    pub monthly_contribution: f64,

    /// Percentage, e.g. 5 for 5%
    #[serde(default = "default_rate")]
    pub annual_interest_rate: f64,
}

fn default_goal() -> f64 { SavingsInputs::default().goal_amount }
fn default_initial() -> f64 { SavingsInputs::default().initial_savings }
fn default_monthly() -> f64 { SavingsInputs::default().monthly_contribution }
fn default_rate() -> f64 { SavingsInputs::default().annual_interest_rate }

impl From<ProjectionRequest> for SavingsInputs {
    fn from(r: ProjectionRequest) -> Self {
        SavingsInputs::new(
            r.goal_amount,
            r.initial_savings,
            r.monthly_contribution,
            r.annual_interest_rate,
        )
    }
}

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub duration: String,
    pub reached_goal: bool,
    pub result: ProjectionResult,
    pub execution_time_us: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_body<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let text = serde_json::to_string(body)?;
    Ok(cors(Response::builder().status(status))
        .header("Content-Type", "application/json")
        .body(Body::Text(text))?)
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    json_body(status, &ErrorBody { error: message })
}

/// Map a request method and body to a response; no runtime involved
fn respond(method: &str, body: &str) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if method == "OPTIONS" {
        return Ok(cors(Response::builder().status(200)).body(Body::Empty)?);
    }

    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let inputs = SavingsInputs::from(request);
    if let Err(e) = inputs.validate() {
        log::info!("rejected inputs {:?}: {}", inputs, e);
        return error_response(422, &e.to_string());
    }

    let (result, reached_goal) = ProjectionEngine::default().project_outcome(&inputs);

    let response = ProjectionResponse {
        duration: format_duration(result.years, result.months),
        reached_goal,
        result,
        execution_time_us: start.elapsed().as_micros() as u64,
    };

    json_body(200, &response)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    respond(event.method().as_str(), &body_str)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
